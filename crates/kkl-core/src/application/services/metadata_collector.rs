//! Stage 2: gather the project identity.

use tracing::{debug, instrument};

use crate::{
    application::{
        best_effort::BestEffort,
        ports::{Prompter, VersionControl},
    },
    domain::{PackageInfo, ProjectName},
    error::ScaffoldResult,
};

/// Prompts for the metadata written into the template's metadata file.
///
/// Does not touch the filesystem. Fails only if prompting itself fails or the
/// edited project name is not a valid directory name.
pub struct MetadataCollector<'a> {
    prompter: &'a dyn Prompter,
    vcs: &'a dyn VersionControl,
    default_description: &'a str,
}

impl<'a> MetadataCollector<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        vcs: &'a dyn VersionControl,
        default_description: &'a str,
    ) -> Self {
        Self {
            prompter,
            vcs,
            default_description,
        }
    }

    #[instrument(skip_all, fields(project = %project_name))]
    pub fn collect(&self, project_name: &ProjectName) -> ScaffoldResult<PackageInfo> {
        let default_author = self
            .vcs
            .identity()
            .best_effort("read vcs identity")
            .map(|identity| identity.to_author())
            .unwrap_or_default();

        let dirname = self.prompter.input("Project name", project_name.as_str())?;
        let dirname = ProjectName::parse(dirname)?;

        let description = self
            .prompter
            .input("Project description", self.default_description)?;
        let author = self.prompter.input("Author", &default_author)?;
        let repository_url = self.prompter.input("Repository URL", "")?;

        let info = PackageInfo::new(dirname, description, author, repository_url);
        debug!(dirname = %info.dirname, name = %info.name, "Package info collected");

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockPrompter, MockVersionControl};
    use crate::domain::{DomainError, Identity};
    use crate::error::ScaffoldError;

    fn vcs_with_identity() -> MockVersionControl {
        let mut vcs = MockVersionControl::new();
        vcs.expect_identity().returning(|| {
            Ok(Identity {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            })
        });
        vcs
    }

    fn vcs_without_identity() -> MockVersionControl {
        let mut vcs = MockVersionControl::new();
        vcs.expect_identity().returning(|| {
            Err(ApplicationError::CommandFailed {
                command: "git config user.name".into(),
                reason: "not set".into(),
            }
            .into())
        });
        vcs
    }

    /// Prompter that accepts every default.
    fn accept_defaults() -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .returning(|_, default| Ok(default.to_owned()));
        prompter
    }

    #[test]
    fn defaults_come_from_argument_and_identity() {
        let prompter = accept_defaults();
        let vcs = vcs_with_identity();
        let name = ProjectName::parse("kkl-button").unwrap();

        let info = MetadataCollector::new(&prompter, &vcs, "A Vue.js component project")
            .collect(&name)
            .unwrap();

        assert_eq!(info.dirname, name);
        assert_eq!(info.name, "button");
        assert_eq!(info.description, "A Vue.js component project");
        assert_eq!(info.author, "Ada <ada@example.com>");
        assert_eq!(info.repository.url, None);
    }

    #[test]
    fn missing_identity_falls_back_to_empty_author() {
        let prompter = accept_defaults();
        let vcs = vcs_without_identity();
        let name = ProjectName::parse("x").unwrap();

        let info = MetadataCollector::new(&prompter, &vcs, "d")
            .collect(&name)
            .unwrap();
        assert_eq!(info.author, "");
    }

    #[test]
    fn prompts_in_fixed_order_and_uses_answers() {
        let mut seq = mockall::Sequence::new();
        let mut prompter = MockPrompter::new();
        for (question, answer) in [
            ("Project name", "KKL-Card"),
            ("Project description", "Cards"),
            ("Author", "Bob"),
            ("Repository URL", "https://example.com/card.git"),
        ] {
            prompter
                .expect_input()
                .withf(move |q, _| q == question)
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _| Ok(answer.to_owned()));
        }
        let vcs = vcs_with_identity();

        let info = MetadataCollector::new(&prompter, &vcs, "d")
            .collect(&ProjectName::parse("kkl-button").unwrap())
            .unwrap();

        assert_eq!(info.dirname.as_str(), "KKL-Card");
        assert_eq!(info.name, "Card");
        assert_eq!(info.description, "Cards");
        assert_eq!(info.author, "Bob");
        assert_eq!(
            info.repository.url.as_deref(),
            Some("https://example.com/card.git")
        );
    }

    #[test]
    fn edited_name_is_validated() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .times(1)
            .returning(|_, _| Ok("../escape".to_owned()));
        let vcs = vcs_with_identity();

        let err = MetadataCollector::new(&prompter, &vcs, "d")
            .collect(&ProjectName::parse("ok").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Domain(DomainError::InvalidProjectName { .. })
        ));
    }
}
