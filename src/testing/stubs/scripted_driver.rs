use crate::ui::cli::drivers::{Bounds, PromptDriver};
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One canned reply for a [`ScriptedDriver`].
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bool(bool),
    Str(String),
    U64(u64),
    F64(f64),
    Select(usize),
}

/// Replays answers in order; once the script runs out every prompt takes its
/// default.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Titles of every prompt shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Option<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers.borrow_mut().pop_front()
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title) {
            None => Ok(default),
            Some(Answer::Bool(b)) => Ok(b),
            Some(other) => bail!("`{title}` expected a bool, script has {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        match self.next(title) {
            None => Ok(default.to_string()),
            Some(Answer::Str(s)) => Ok(s),
            Some(other) => bail!("`{title}` expected a string, script has {other:?}"),
        }
    }

    fn ask_u64(&self, title: &str, _help: &str, default: u64, bounds: Bounds<u64>) -> Result<u64> {
        let v = match self.next(title) {
            None => default,
            Some(Answer::U64(v)) => v,
            Some(other) => bail!("`{title}` expected an integer, script has {other:?}"),
        };
        if let Some(msg) = bounds.violation(v) {
            bail!("`{title}` answer {v}: {msg}");
        }
        Ok(v)
    }

    fn ask_f64(&self, title: &str, _help: &str, default: f64, bounds: Bounds<f64>) -> Result<f64> {
        let v = match self.next(title) {
            None => default,
            Some(Answer::F64(v)) => v,
            Some(other) => bail!("`{title}` expected a number, script has {other:?}"),
        };
        if let Some(msg) = bounds.violation(v) {
            bail!("`{title}` answer {v}: {msg}");
        }
        Ok(v)
    }

    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let idx = match self.next(title) {
            None => default,
            Some(Answer::Select(i)) => i,
            Some(other) => bail!("`{title}` expected a selection, script has {other:?}"),
        };
        if idx >= options.len() {
            bail!("`{title}` has {} options, script picked {idx}", options.len());
        }
        Ok(idx)
    }
}
