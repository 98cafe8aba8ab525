//! Non-interactive prompt adapters.

mod scripted;

pub use scripted::{ScriptedAnswer, ScriptedPrompter};
