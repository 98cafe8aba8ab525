//! `kkl init` - scaffold a new project in the current directory.

use kkl_adapters::{GitCli, LocalFilesystem, ProcessInstaller};
use kkl_core::application::{Prompter, ScaffoldOutcome, ScaffoldService};
use tracing::{info, instrument};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    reporter::TerminalReporter,
};

/// Wire the adapters into a [`ScaffoldService`] and run it once.
#[instrument(skip_all, fields(project = %args.project_name))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()
        .with_cli_context(|| "Failed to determine the current directory")?;
    let settings = config.scaffold_settings(cwd.clone(), args.template.as_deref())?;

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new(cwd)),
        Box::new(ProcessInstaller::new()),
        prompter()?,
        Box::new(TerminalReporter::new(output)),
        settings,
    );

    match service
        .run(&args.project_name)
        .with_cli_context(|| format!("Scaffolding '{}'", args.project_name))?
    {
        ScaffoldOutcome::Declined => Err(CliError::Declined),
        ScaffoldOutcome::Completed {
            info,
            destination,
            installed_with,
        } => {
            info!(
                package = %info.name,
                destination = %destination.display(),
                installed_with = ?installed_with,
                "Project generated"
            );
            Ok(())
        }
    }
}

#[cfg(feature = "interactive")]
fn prompter() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(crate::prompt::DialoguerPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
fn prompter() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
