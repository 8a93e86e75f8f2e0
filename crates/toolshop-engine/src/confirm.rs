use std::collections::VecDeque;

/// Synchronous yes/no decision asked before destructive operations
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}

/// Answers from a fixed script and remembers every question.
///
/// Answers `false` once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Messages shown so far, oldest first
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
