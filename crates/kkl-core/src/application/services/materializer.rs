//! Stage 3: fetch the template and turn it into the user's project.
//!
//! Three sub-operations in strict order:
//! 1. **Pre-clean**: best-effort removal of the destination
//! 2. **Fetch**: clone the template into the destination
//! 3. **Transform**: render the metadata file, regenerate the README, reset
//!    the version-control history
//!
//! A failed fetch stops here; nothing it left behind is rolled back.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ScaffoldSettings,
        best_effort::BestEffort,
        error::failure_reason,
        ports::{Filesystem, Reporter, VersionControl},
    },
    domain::{EntryKind, PackageInfo, boilerplate},
    error::{ScaffoldError, ScaffoldResult},
};

pub struct TemplateMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
    vcs: &'a dyn VersionControl,
    reporter: &'a dyn Reporter,
    settings: &'a ScaffoldSettings,
}

impl<'a> TemplateMaterializer<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        vcs: &'a dyn VersionControl,
        reporter: &'a dyn Reporter,
        settings: &'a ScaffoldSettings,
    ) -> Self {
        Self {
            filesystem,
            vcs,
            reporter,
            settings,
        }
    }

    #[instrument(skip_all, fields(project = %info.dirname))]
    pub fn materialize(&self, info: &PackageInfo) -> ScaffoldResult<PathBuf> {
        let destination = self.settings.destination(&info.dirname);

        self.pre_clean(&destination);
        self.fetch(&destination)?;
        self.transform(info, &destination)?;

        info!(destination = %destination.display(), "Template materialized");
        Ok(destination)
    }

    fn pre_clean(&self, destination: &Path) {
        if self.filesystem.entry_kind(destination) == EntryKind::Directory {
            self.filesystem
                .remove_dir_all(destination)
                .best_effort("pre-clean destination");
        }
    }

    fn fetch(&self, destination: &Path) -> ScaffoldResult<()> {
        let url = self.settings.template.url();
        self.reporter.step_started("Downloading template");

        match self.vcs.clone_repository(url, destination) {
            Ok(()) => {
                self.reporter.step_succeeded("Downloading template succeeded");
                Ok(())
            }
            Err(e) => {
                warn!(url, error = %e, "Template fetch failed");
                self.reporter.step_failed("Downloading template failed");
                Err(ApplicationError::FetchFailed {
                    url: url.to_owned(),
                    reason: failure_reason(&e),
                }
                .into())
            }
        }
    }

    fn transform(&self, info: &PackageInfo, destination: &Path) -> ScaffoldResult<()> {
        self.render_metadata(info, destination)?;
        self.regenerate_readme(info, destination)?;
        self.reset_history(destination)
    }

    fn render_metadata(&self, info: &PackageInfo, destination: &Path) -> ScaffoldResult<()> {
        let path = destination.join(&self.settings.metadata_file);

        let raw = self
            .filesystem
            .read_to_string(&path)
            .map_err(|e| transform_failed(&path, &e))?;
        let rendered = info.render_context().render(&raw);

        self.filesystem
            .write_file(&path, &rendered)
            .map_err(|e| transform_failed(&path, &e))
    }

    fn regenerate_readme(&self, info: &PackageInfo, destination: &Path) -> ScaffoldResult<()> {
        let path = destination.join(&self.settings.readme_file);

        if self.filesystem.entry_kind(&path) == EntryKind::File {
            self.filesystem
                .remove_file(&path)
                .best_effort("remove template readme");
        }

        self.filesystem
            .write_file(&path, &boilerplate::readme(&info.name))
            .map_err(|e| transform_failed(&path, &e))
    }

    fn reset_history(&self, destination: &Path) -> ScaffoldResult<()> {
        let history = destination.join(self.vcs.history_dir());
        if self.filesystem.entry_kind(&history) == EntryKind::Directory {
            self.filesystem
                .remove_dir_all(&history)
                .best_effort("remove template history");
        }

        self.vcs
            .init_repository(destination)
            .map_err(|e| transform_failed(&history, &e))
    }
}

fn transform_failed(path: &Path, error: &ScaffoldError) -> ScaffoldError {
    ApplicationError::TransformFailed {
        path: path.to_path_buf(),
        reason: failure_reason(error),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockReporter, MockVersionControl};
    use crate::domain::ProjectName;
    use mockall::predicate::eq;

    fn settings() -> ScaffoldSettings {
        ScaffoldSettings::new("/work")
    }

    fn info() -> PackageInfo {
        PackageInfo::new(
            ProjectName::parse("kkl-button").unwrap(),
            "Buttons",
            "Ada <ada@example.com>",
            "",
        )
    }

    fn quiet_reporter() -> MockReporter {
        let mut reporter = MockReporter::new();
        reporter.expect_step_started().return_const(());
        reporter.expect_step_succeeded().return_const(());
        reporter.expect_step_failed().return_const(());
        reporter
    }

    #[test]
    fn fetch_failure_skips_every_transform_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().returning(|_| EntryKind::Missing);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();
        fs.expect_remove_file().never();
        fs.expect_remove_dir_all().never();

        let mut vcs = MockVersionControl::new();
        vcs.expect_clone_repository().times(1).returning(|_, _| {
            Err(ApplicationError::CommandFailed {
                command: "git clone".into(),
                reason: "could not resolve host".into(),
            }
            .into())
        });
        vcs.expect_init_repository().never();

        let mut reporter = MockReporter::new();
        reporter.expect_step_started().times(1).return_const(());
        reporter.expect_step_failed().times(1).return_const(());
        reporter.expect_step_succeeded().never();

        let settings = settings();
        let err = TemplateMaterializer::new(&fs, &vcs, &reporter, &settings)
            .materialize(&info())
            .unwrap_err();

        match err {
            ScaffoldError::Application(ApplicationError::FetchFailed { url, reason }) => {
                assert_eq!(url, settings.template.url());
                assert_eq!(reason, "could not resolve host");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn existing_destination_is_removed_right_before_clone() {
        let mut seq = mockall::Sequence::new();
        let mut fs = MockFilesystem::new();
        let mut vcs = MockVersionControl::new();

        fs.expect_entry_kind()
            .with(eq(PathBuf::from("/work/kkl-button")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| EntryKind::Directory);
        fs.expect_remove_dir_all()
            .with(eq(PathBuf::from("/work/kkl-button")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        vcs.expect_clone_repository()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(ApplicationError::CommandFailed {
                    command: "git clone".into(),
                    reason: "offline".into(),
                }
                .into())
            });

        let settings = settings();
        let reporter = quiet_reporter();
        let result = TemplateMaterializer::new(&fs, &vcs, &reporter, &settings).materialize(&info());
        assert!(result.is_err());
    }

    #[test]
    fn failed_pre_clean_is_ignored() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().returning(|_| EntryKind::Directory);
        fs.expect_remove_dir_all().times(1).returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "busy".into(),
            }
            .into())
        });

        let mut vcs = MockVersionControl::new();
        vcs.expect_clone_repository().times(1).returning(|_, _| {
            Err(ApplicationError::CommandFailed {
                command: "git clone".into(),
                reason: "destination path already exists".into(),
            }
            .into())
        });

        let settings = settings();
        let reporter = quiet_reporter();
        let err = TemplateMaterializer::new(&fs, &vcs, &reporter, &settings)
            .materialize(&info())
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::FetchFailed { .. })
        ));
    }

    #[test]
    fn successful_run_renders_metadata_readme_and_reinits() {
        let dest = PathBuf::from("/work/kkl-button");
        let mut fs = MockFilesystem::new();
        let mut vcs = MockVersionControl::new();

        let d = dest.clone();
        fs.expect_entry_kind().returning(move |p| {
            if p == d.join(".git") {
                EntryKind::Directory
            } else if p == d.join("README.md") {
                EntryKind::File
            } else {
                EntryKind::Missing
            }
        });
        vcs.expect_history_dir().return_const(".git");
        vcs.expect_clone_repository()
            .with(eq("https://github.com/yjh30/vue-ssr-component-tpl.git"), eq(dest.clone()))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_read_to_string()
            .with(eq(dest.join("package.json")))
            .times(1)
            .returning(|_| Ok(r#"{"name":"{{name}}","author":"{{author}}"}"#.to_owned()));
        fs.expect_write_file()
            .withf(|p, content| {
                p.ends_with("package.json")
                    && content == r#"{"name":"button","author":"Ada <ada@example.com>"}"#
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_remove_file()
            .with(eq(dest.join("README.md")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| p.ends_with("README.md") && content.starts_with("# button"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_remove_dir_all()
            .with(eq(dest.join(".git")))
            .times(1)
            .returning(|_| Ok(()));
        vcs.expect_init_repository()
            .with(eq(dest.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let mut reporter = MockReporter::new();
        reporter.expect_step_started().times(1).return_const(());
        reporter.expect_step_succeeded().times(1).return_const(());
        reporter.expect_step_failed().never();

        let settings = settings();
        let out = TemplateMaterializer::new(&fs, &vcs, &reporter, &settings)
            .materialize(&info())
            .unwrap();
        assert_eq!(out, dest);
    }

    #[test]
    fn missing_metadata_file_is_a_transform_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().returning(|_| EntryKind::Missing);
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let mut vcs = MockVersionControl::new();
        vcs.expect_clone_repository().returning(|_, _| Ok(()));
        vcs.expect_init_repository().never();

        let settings = settings();
        let reporter = quiet_reporter();
        let err = TemplateMaterializer::new(&fs, &vcs, &reporter, &settings)
            .materialize(&info())
            .unwrap_err();

        match err {
            ScaffoldError::Application(ApplicationError::TransformFailed { path, reason }) => {
                assert!(path.ends_with("package.json"));
                assert_eq!(reason, "No such file or directory");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failed_init_is_a_transform_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().returning(|_| EntryKind::Missing);
        fs.expect_read_to_string().returning(|_| Ok("{}".into()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut vcs = MockVersionControl::new();
        vcs.expect_history_dir().return_const(".git");
        vcs.expect_clone_repository().returning(|_, _| Ok(()));
        vcs.expect_init_repository().returning(|_| {
            Err(ApplicationError::CommandFailed {
                command: "git init".into(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let settings = settings();
        let reporter = quiet_reporter();
        let err = TemplateMaterializer::new(&fs, &vcs, &reporter, &settings)
            .materialize(&info())
            .unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Transform);
    }
}
