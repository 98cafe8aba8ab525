//! Scaffold Service - the pipeline orchestrator.
//!
//! Runs the four stages in strict order with early exits:
//! 1. Resolve the destination (may ask to overwrite)
//! 2. Collect package metadata
//! 3. Materialize the template (pre-clean, fetch, transform)
//! 4. Optionally install dependencies and print next steps
//!
//! Every subprocess receives an explicit working directory derived from
//! [`ScaffoldSettings::base_dir`]; the service never reads or changes the
//! process working directory, so independent runs may share a process.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ScaffoldSettings,
        ports::{Filesystem, PackageInstaller, Prompter, Reporter, VersionControl},
        services::{
            installer::DependencyInstaller, materializer::TemplateMaterializer,
            metadata_collector::MetadataCollector, target_resolver::TargetResolver,
        },
    },
    domain::{PackageInfo, PackageManager, ProjectName, Resolution},
    error::ScaffoldResult,
};

/// How a pipeline run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The project was created.
    Completed {
        info: PackageInfo,
        destination: PathBuf,
        installed_with: Option<PackageManager>,
    },
    /// The user refused to overwrite an existing directory. Nothing was
    /// written.
    Declined,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    installer: Box<dyn PackageInstaller>,
    prompter: Box<dyn Prompter>,
    reporter: Box<dyn Reporter>,
    settings: ScaffoldSettings,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
        installer: Box<dyn PackageInstaller>,
        prompter: Box<dyn Prompter>,
        reporter: Box<dyn Reporter>,
        settings: ScaffoldSettings,
    ) -> Self {
        Self {
            filesystem,
            vcs,
            installer,
            prompter,
            reporter,
            settings,
        }
    }

    pub fn settings(&self) -> &ScaffoldSettings {
        &self.settings
    }

    /// Scaffold a new project named `project_name`.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            template = %self.settings.template,
            base_dir = %self.settings.base_dir.display()
        )
    )]
    pub fn run(&self, project_name: &str) -> ScaffoldResult<ScaffoldOutcome> {
        let requested = ProjectName::parse(project_name)?;

        // 1. Confirm early, before any metadata is collected.
        if self.resolve(&requested)? == Resolution::Declined {
            info!("Overwrite declined, nothing written");
            return Ok(ScaffoldOutcome::Declined);
        }

        // 2. Collect metadata; an edited name points at a new destination.
        let info = MetadataCollector::new(
            self.prompter.as_ref(),
            self.vcs.as_ref(),
            &self.settings.default_description,
        )
        .collect(&requested)?;

        if info.dirname != requested && self.resolve(&info.dirname)? == Resolution::Declined {
            info!("Overwrite of renamed destination declined, nothing written");
            return Ok(ScaffoldOutcome::Declined);
        }

        // 3. Materialize.
        let destination = TemplateMaterializer::new(
            self.filesystem.as_ref(),
            self.vcs.as_ref(),
            self.reporter.as_ref(),
            &self.settings,
        )
        .materialize(&info)?;

        // 4. Install.
        let installed_with = DependencyInstaller::new(
            self.prompter.as_ref(),
            self.installer.as_ref(),
            self.reporter.as_ref(),
        )
        .prompt_and_install(&info.dirname, &destination)?;

        info!(destination = %destination.display(), "Scaffold completed successfully");
        Ok(ScaffoldOutcome::Completed {
            info,
            destination,
            installed_with,
        })
    }

    fn resolve(&self, dirname: &ProjectName) -> ScaffoldResult<Resolution> {
        TargetResolver::new(self.filesystem.as_ref(), self.prompter.as_ref())
            .resolve(&self.settings.destination(dirname))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{
        MockFilesystem, MockPackageInstaller, MockPrompter, MockReporter, MockVersionControl,
    };
    use crate::domain::{DomainError, EntryKind};
    use crate::error::ScaffoldError;

    fn service(
        fs: MockFilesystem,
        vcs: MockVersionControl,
        prompter: MockPrompter,
        reporter: MockReporter,
    ) -> ScaffoldService {
        let mut installer = MockPackageInstaller::new();
        installer.expect_install().never();
        ScaffoldService::new(
            Box::new(fs),
            Box::new(vcs),
            Box::new(installer),
            Box::new(prompter),
            Box::new(reporter),
            ScaffoldSettings::new("/work"),
        )
    }

    #[test]
    fn invalid_name_fails_before_any_interaction() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().never();
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();
        prompter.expect_input().never();

        let svc = service(fs, MockVersionControl::new(), prompter, MockReporter::new());
        let err = svc.run("nested/name").unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Domain(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn declined_overwrite_stops_without_further_prompts() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().times(1).returning(|_| EntryKind::Directory);
        fs.expect_remove_dir_all().never();
        fs.expect_write_file().never();

        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().times(1).returning(|_, _| Ok(false));
        prompter.expect_input().never();
        prompter.expect_select().never();

        let mut vcs = MockVersionControl::new();
        vcs.expect_identity().never();
        vcs.expect_clone_repository().never();

        let mut reporter = MockReporter::new();
        reporter.expect_next_steps().never();

        let svc = service(fs, vcs, prompter, reporter);
        assert_eq!(svc.run("kkl-old").unwrap(), ScaffoldOutcome::Declined);
    }

    #[test]
    fn renamed_project_is_resolved_again() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().returning(|p| {
            if p.ends_with("taken") {
                EntryKind::Directory
            } else {
                EntryKind::Missing
            }
        });
        fs.expect_remove_dir_all().never();

        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .returning(|question, default| match question {
                "Project name" => Ok("taken".to_owned()),
                _ => Ok(default.to_owned()),
            });
        prompter.expect_confirm().times(1).returning(|_, _| Ok(false));

        let mut vcs = MockVersionControl::new();
        vcs.expect_identity()
            .returning(|| Err(ApplicationError::LockPoisoned.into()));
        vcs.expect_clone_repository().never();

        let svc = service(fs, vcs, prompter, MockReporter::new());
        assert_eq!(svc.run("fresh").unwrap(), ScaffoldOutcome::Declined);
    }

    #[test]
    fn fetch_failure_propagates_and_skips_install() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().returning(|_| EntryKind::Missing);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .returning(|_, default| Ok(default.to_owned()));
        prompter.expect_confirm().never();
        prompter.expect_select().never();

        let mut vcs = MockVersionControl::new();
        vcs.expect_identity()
            .returning(|| Err(ApplicationError::LockPoisoned.into()));
        vcs.expect_clone_repository().returning(|_, _| {
            Err(ApplicationError::CommandFailed {
                command: "git clone".into(),
                reason: "unreachable".into(),
            }
            .into())
        });
        vcs.expect_init_repository().never();

        let mut reporter = MockReporter::new();
        reporter.expect_step_started().return_const(());
        reporter.expect_step_failed().times(1).return_const(());
        reporter.expect_next_steps().never();

        let svc = service(fs, vcs, prompter, reporter);
        let err = svc.run("kkl-new").unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Fetch);
    }
}
