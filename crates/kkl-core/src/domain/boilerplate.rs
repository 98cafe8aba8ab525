//! Canned text generated for every scaffolded project.

use crate::domain::project_name::ProjectName;

/// README written over the template's own, mentioning only the package name.
pub fn readme(name: &str) -> String {
    format!(
        "# {name}\n\
         \n\
         > {name} component\n\
         \n\
         ## Install\n\
         \n\
         ```bash\n\
         npm install {name} --save\n\
         ```\n\
         \n\
         ## Development\n\
         \n\
         ```bash\n\
         # install dependencies\n\
         npm install\n\
         \n\
         # serve with hot reload at localhost:8080\n\
         npm run dev\n\
         \n\
         # build for production\n\
         npm run build\n\
         ```\n"
    )
}

/// The completion block shown once a project has been created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSteps {
    pub headline: &'static str,
    /// Commands the user runs by hand, in order.
    pub commands: Vec<String>,
}

impl NextSteps {
    pub fn for_project(dirname: &ProjectName) -> Self {
        Self {
            headline: "Project initialization finished!",
            commands: vec![
                format!("cd {dirname}"),
                "npm install (or if using yarn: yarn)".into(),
                "npm run dev".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_mentions_package_name() {
        let body = readme("button");
        assert!(body.starts_with("# button\n"));
        assert!(body.contains("npm install button --save"));
    }

    #[test]
    fn readme_has_no_placeholders_left() {
        assert!(!readme("x").contains("{{"));
    }

    #[test]
    fn next_steps_lists_three_commands_starting_with_cd() {
        let steps = NextSteps::for_project(&ProjectName::parse("kkl-card").unwrap());
        assert_eq!(steps.commands.len(), 3);
        assert_eq!(steps.commands[0], "cd kkl-card");
        assert_eq!(steps.commands[2], "npm run dev");
    }
}
