//! Subcommand handlers.  Each translates parsed arguments into calls on the
//! core and prints results; none contains business logic.

pub mod completions;
pub mod config;
pub mod init;
