//! Terminal reporter: an `indicatif` spinner for long steps, plain lines
//! for everything else.

use std::{sync::Mutex, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use kkl_core::{application::ports::Reporter, domain::NextSteps};

use crate::output::OutputManager;

pub struct TerminalReporter {
    output: OutputManager,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    fn new_spinner(&self, message: &str) -> ProgressBar {
        if self.output.is_quiet() {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_owned());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }

    fn completion_block(&self, steps: &NextSteps) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            self.output.header_line(&format!("# {}", steps.headline)),
            self.output.header_line("# ========================"),
            String::new(),
            "To get started:".to_owned(),
            String::new(),
        ];
        lines.extend(steps.commands.iter().map(|c| self.output.command_line(c)));
        lines.push(String::new());
        lines
    }

    /// Finish the running spinner with `line`; `false` if none was running.
    fn finish_spinner(&self, line: String) -> bool {
        let Some(bar) = self.spinner.lock().ok().and_then(|mut s| s.take()) else {
            return false;
        };
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.finish_with_message(line);
        true
    }
}

// Write failures on the terminal are not actionable mid-pipeline.
impl Reporter for TerminalReporter {
    fn step_started(&self, message: &str) {
        let bar = self.new_spinner(message);
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(previous) = spinner.replace(bar) {
                previous.finish_and_clear();
            }
        }
    }

    fn step_succeeded(&self, message: &str) {
        if self.output.is_quiet() {
            self.finish_spinner(String::new());
            return;
        }
        if !self.finish_spinner(self.output.success_line(message)) {
            let _ = self.output.success(message);
        }
    }

    fn step_failed(&self, message: &str) {
        if !self.finish_spinner(self.output.error_line(message)) {
            let _ = self.output.error(message);
        }
    }

    fn info(&self, message: &str) {
        let _ = self.output.info(message);
    }

    fn next_steps(&self, steps: &NextSteps) {
        // Written as values: the block is the run's result and survives --quiet.
        for line in self.completion_block(steps) {
            let _ = self.output.value(&line);
        }
    }
}
