//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kkl",
    bin_name = "kkl",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a Vue component project from a template",
    long_about = "kkl clones a component template, fills in your package metadata, \
                  regenerates the README, starts a fresh git history, and can \
                  install dependencies with npm or yarn.",
    after_help = "EXAMPLES:\n\
        \x20 kkl init kkl-button\n\
        \x20 kkl init kkl-card --template https://example.com/my-template.git\n\
        \x20 kkl completions bash > ~/.local/share/bash-completion/completions/kkl",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_alias = "i",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 kkl init kkl-button       # package name becomes `button`\n\
            \x20 kkl init my-widget        # package name stays `my-widget`"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kkl completions bash > ~/.local/share/bash-completion/completions/kkl\n\
            \x20 kkl completions zsh  > ~/.zfunc/_kkl\n\
            \x20 kkl completions fish > ~/.config/fish/completions/kkl.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the kkl configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kkl config get template.url\n\
            \x20 kkl config list\n\
            \x20 kkl config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kkl init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create in the current directory.  A leading `kkl` or
    /// `kkl-` is stripped to form the package name.
    #[arg(value_name = "PROJECT_NAME", help = "Name of the project directory")]
    pub project_name: String,

    /// Clone from this URL instead of the configured template.
    #[arg(
        short = 't',
        long = "template",
        value_name = "URL",
        help = "Template repository to clone"
    )]
    pub template: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kkl completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kkl config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `template.url`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
