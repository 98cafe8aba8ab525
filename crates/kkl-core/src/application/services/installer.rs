//! Stage 4: optional dependency installation and the completion block.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        error::failure_reason,
        ports::{PackageInstaller, Prompter, Reporter},
    },
    domain::{InstallChoice, NextSteps, PackageManager, ProjectName},
    error::{ScaffoldError, ScaffoldResult},
};

pub struct DependencyInstaller<'a> {
    prompter: &'a dyn Prompter,
    installer: &'a dyn PackageInstaller,
    reporter: &'a dyn Reporter,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        installer: &'a dyn PackageInstaller,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            prompter,
            installer,
            reporter,
        }
    }

    /// Offer to install dependencies in `destination`, then print the
    /// completion block.
    ///
    /// The block is shown exactly once on every successful path, including
    /// when installation is skipped. Returns the manager that ran, if any.
    #[instrument(skip_all, fields(project = %dirname))]
    pub fn prompt_and_install(
        &self,
        dirname: &ProjectName,
        destination: &Path,
    ) -> ScaffoldResult<Option<PackageManager>> {
        let installed = if self.prompter.confirm("Install dependencies now?", true)? {
            self.choose_and_install(destination)?
        } else {
            None
        };

        self.reporter.next_steps(&NextSteps::for_project(dirname));
        Ok(installed)
    }

    fn choose_and_install(&self, destination: &Path) -> ScaffoldResult<Option<PackageManager>> {
        let choices = InstallChoice::all();
        let labels: Vec<String> = choices.iter().map(|c| c.label()).collect();

        let index = self.prompter.select(
            "Which package manager should install dependencies?",
            &labels,
            0,
        )?;
        let choice = choices
            .get(index)
            .copied()
            .ok_or_else(|| ScaffoldError::Internal {
                message: format!("install choice {index} out of range"),
            })?;

        let InstallChoice::Manager(manager) = choice else {
            info!("Dependency installation skipped");
            return Ok(None);
        };

        self.reporter.info(&format!("Running `{manager} install`..."));
        self.installer
            .install(manager, destination)
            .map_err(|e| ApplicationError::InstallFailed {
                manager,
                reason: failure_reason(&e),
            })?;
        self.reporter
            .step_succeeded(&format!("Dependencies installed with {manager}"));

        Ok(Some(manager))
    }
}
