// src/logging.rs
use std::io::Write;

use env_logger::{Builder, Env};
use log::{LevelFilter, debug};

/// Install the stderr logger. `RUST_LOG` overrides `level` when set.
///
/// Returns `false` when another logger was already installed; that logger is
/// kept.
pub fn init(level: LevelFilter) -> bool {
    let env = Env::default().default_filter_or(level.as_str());
    let installed = Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init()
        .is_ok();
    if !installed {
        debug!("logger already installed, keeping it");
    }
    installed
}
