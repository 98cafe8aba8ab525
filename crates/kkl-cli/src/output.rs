//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Writes user-facing lines to stdout, honouring `--quiet` and colour
/// settings.  Cheap to clone; clones share the terminal handle.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Machine-consumable value (config values, paths, completions).
    /// Printed even in quiet mode.
    pub fn value(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.success_line(msg))
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.error_line(msg))
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    // ── Formatting helpers (shared with the spinner) ──────────────────────

    pub fn success_line(&self, msg: &str) -> String {
        if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        }
    }

    /// Bold cyan header line.
    pub fn header_line(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        }
    }

    /// A command the user should type, indented and highlighted.
    pub fn command_line(&self, cmd: &str) -> String {
        if self.no_color {
            format!("  {cmd}")
        } else {
            format!("  {}", cmd.bold())
        }
    }

    pub fn error_line(&self, msg: &str) -> String {
        if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_info() {
        let out = make_manager(true, true);
        assert!(out.info("hello").is_ok());
        assert!(out.is_quiet());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_strips_escape_codes() {
        assert!(make_manager(false, false).success_line("ok").contains('\u{1b}'));
        assert_eq!(make_manager(false, true).success_line("ok"), "\u{2713} ok");
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(!out.header_line("# Title").contains('\u{1b}'));
    }

    #[test]
    fn plain_lines_have_no_escape_codes() {
        let out = make_manager(false, true);
        assert_eq!(out.success_line("done"), "\u{2713} done");
        assert_eq!(out.error_line("failed"), "\u{2717} failed");
        assert_eq!(out.command_line("npm run dev"), "  npm run dev");
        assert_eq!(out.header_line("# Title"), "# Title");
    }
}
