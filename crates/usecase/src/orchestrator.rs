use log::{debug, info, warn};
use patch_version_domain::{PatchOutcome, patch_text, sanitize, validate};
use patch_version_ports::filesystem::TextStore;
use patch_version_shared_kernel::{ApplicationError, Result};

use crate::dto::{PatchReport, PatchRequest};

pub struct PatchConnector<'a> {
    store: &'a dyn TextStore,
}

impl<'a> PatchConnector<'a> {
    pub fn new(store: &'a dyn TextStore) -> Self {
        Self { store }
    }

    /// Validate the tag, then rewrite the marker line of the target file.
    ///
    /// The tag is checked before the file is opened, so a rejected tag never
    /// touches the disk. A file without a marker is still rewritten unchanged
    /// unless `require_match` or `dry_run` is set.
    ///
    /// # Errors
    ///
    /// Invalid tag, unreadable or unwritable file, or a missing marker when
    /// `require_match` is set.
    pub fn run(&self, request: &PatchRequest) -> Result<PatchReport> {
        let tag = validate(&request.tag)?;
        let version = sanitize(tag.as_str());
        debug!("sanitized tag {tag} to {version}");

        let target = &request.target;
        let original = self.store.read_text(target.as_path())?;
        let document = patch_text(&original, &version, &request.policy);

        match &document.outcome {
            PatchOutcome::Patched { line, previous } => {
                info!("{target}:{line}: {previous} -> {version}");
            }
            PatchOutcome::NoMatchFound if request.require_match => {
                return Err(ApplicationError::MarkerNotFound {
                    path: target.to_path_buf(),
                }
                .into());
            }
            PatchOutcome::NoMatchFound => {
                warn!("no version marker found in {target}; content left unchanged");
            }
        }

        let written = if request.dry_run {
            debug!("dry run, not writing {target}");
            false
        } else {
            self.store.write_text(target.as_path(), &document.content)?;
            true
        };

        Ok(PatchReport {
            tag,
            version,
            target: target.clone(),
            outcome: document.outcome,
            written,
        })
    }
}
