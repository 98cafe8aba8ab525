//! Reporter adapters that do not write to a terminal.

mod recording;

pub use recording::{RecordingReporter, ReportEvent};
