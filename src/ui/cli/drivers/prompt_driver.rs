use anyhow::Result;
use std::fmt::Display;

/// Inclusive range a numeric answer must fall in. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: Copy + PartialOrd + Display> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// `None` if `value` is in range, otherwise a message naming the range.
    pub fn violation(&self, value: T) -> Option<String> {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) if value < lo || value > hi => {
                Some(format!("Must be between {lo} and {hi}"))
            }
            (Some(lo), None) if value < lo => Some(format!("Must be ≥ {lo}")),
            (None, Some(hi)) if value > hi => Some(format!("Must be ≤ {hi}")),
            _ => None,
        }
    }
}

/// Source of answers for the configuration wizard.
///
/// The terminal implementation is [`InquireDriver`](super::InquireDriver);
/// tests replay canned answers instead.
pub trait PromptDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_u64(&self, title: &str, help: &str, default: u64, bounds: Bounds<u64>) -> Result<u64>;
    fn ask_f64(&self, title: &str, help: &str, default: f64, bounds: Bounds<f64>) -> Result<f64>;
    /// Returns the index of the selected option.
    fn ask_select(&self, title: &str, help: &str, options: &[String], default: usize)
    -> Result<usize>;
}
