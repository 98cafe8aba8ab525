//! Stage 1: decide whether the destination may be written.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Prompter},
    },
    domain::{EntryKind, Resolution},
    error::ScaffoldResult,
};

const OVERWRITE_QUESTION: &str = "Target directory exists. Continue?";

/// Confirms destructive overwrites before any metadata is collected.
///
/// Never deletes anything: removal happens in the materializer, right before
/// the new content is fetched.
pub struct TargetResolver<'a> {
    filesystem: &'a dyn Filesystem,
    prompter: &'a dyn Prompter,
}

impl<'a> TargetResolver<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, prompter: &'a dyn Prompter) -> Self {
        Self {
            filesystem,
            prompter,
        }
    }

    #[instrument(skip_all, fields(destination = %destination.display()))]
    pub fn resolve(&self, destination: &Path) -> ScaffoldResult<Resolution> {
        match self.filesystem.entry_kind(destination) {
            EntryKind::Missing => {
                debug!("Destination is free");
                Ok(Resolution::Proceed)
            }
            EntryKind::File => Err(ApplicationError::DestinationIsFile {
                path: destination.to_path_buf(),
            }
            .into()),
            EntryKind::Directory => {
                if self.prompter.confirm(OVERWRITE_QUESTION, true)? {
                    debug!("Overwrite confirmed");
                    Ok(Resolution::Proceed)
                } else {
                    debug!("Overwrite declined");
                    Ok(Resolution::Declined)
                }
            }
        }
    }
}
