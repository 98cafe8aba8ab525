//! Reporter that keeps every event in memory.

use std::sync::Mutex;

use kkl_core::{application::ports::Reporter, domain::NextSteps};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Started(String),
    Succeeded(String),
    Failed(String),
    Info(String),
    NextSteps(NextSteps),
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// How many times the completion block was shown.
    pub fn next_steps_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ReportEvent::NextSteps(_)))
            .count()
    }

    fn push(&self, event: ReportEvent) {
        // A poisoned lock only loses test diagnostics.
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Reporter for RecordingReporter {
    fn step_started(&self, message: &str) {
        self.push(ReportEvent::Started(message.to_owned()));
    }

    fn step_succeeded(&self, message: &str) {
        self.push(ReportEvent::Succeeded(message.to_owned()));
    }

    fn step_failed(&self, message: &str) {
        self.push(ReportEvent::Failed(message.to_owned()));
    }

    fn info(&self, message: &str) {
        self.push(ReportEvent::Info(message.to_owned()));
    }

    fn next_steps(&self, steps: &NextSteps) {
        self.push(ReportEvent::NextSteps(steps.clone()));
    }
}
