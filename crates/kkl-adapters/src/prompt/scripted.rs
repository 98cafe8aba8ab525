//! Prompter that replays canned answers.
//!
//! Used by tests and by any caller that must drive the pipeline without a
//! terminal. Every question asked is recorded for later inspection.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use kkl_core::{
    application::{ApplicationError, ports::Prompter},
    error::ScaffoldResult,
};

/// One queued answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Confirm(bool),
    Input(String),
    Select(usize),
    /// Accept whatever default the question offers.
    Default,
}

impl ScriptedAnswer {
    pub fn input(value: impl Into<String>) -> Self {
        Self::Input(value.into())
    }
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<ScriptedAnswer>,
    asked: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: Mutex<Script>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            script: Mutex::new(Script {
                answers: answers.into_iter().collect(),
                asked: Vec::new(),
            }),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.lock().map(|s| s.asked.clone()).unwrap_or_default()
    }

    /// Answers that were never consumed.
    pub fn remaining(&self) -> usize {
        self.lock().map(|s| s.answers.len()).unwrap_or_default()
    }

    fn lock(&self) -> ScaffoldResult<MutexGuard<'_, Script>> {
        self.script
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn next(&self, question: &str) -> ScaffoldResult<ScriptedAnswer> {
        let mut script = self.lock()?;
        script.asked.push(question.to_owned());
        script.answers.pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("no scripted answer for '{question}'"),
            }
            .into()
        })
    }
}

fn mismatch(question: &str, expected: &str, got: &ScriptedAnswer) -> kkl_core::error::ScaffoldError {
    ApplicationError::PromptFailed {
        reason: format!("'{question}' expects {expected}, script has {got:?}"),
    }
    .into()
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str, default: bool) -> ScaffoldResult<bool> {
        match self.next(question)? {
            ScriptedAnswer::Confirm(answer) => Ok(answer),
            ScriptedAnswer::Default => Ok(default),
            other => Err(mismatch(question, "a confirmation", &other)),
        }
    }

    fn input(&self, question: &str, default: &str) -> ScaffoldResult<String> {
        match self.next(question)? {
            // An empty answer takes the default, as at a terminal.
            ScriptedAnswer::Input(answer) if answer.is_empty() => Ok(default.to_owned()),
            ScriptedAnswer::Input(answer) => Ok(answer),
            ScriptedAnswer::Default => Ok(default.to_owned()),
            other => Err(mismatch(question, "text input", &other)),
        }
    }

    fn select(&self, question: &str, options: &[String], default: usize) -> ScaffoldResult<usize> {
        let index = match self.next(question)? {
            ScriptedAnswer::Select(index) => index,
            ScriptedAnswer::Default => default,
            other => return Err(mismatch(question, "a selection", &other)),
        };
        if index >= options.len() {
            return Err(ApplicationError::PromptFailed {
                reason: format!("selection {index} out of range for '{question}'"),
            }
            .into());
        }
        Ok(index)
    }
}
