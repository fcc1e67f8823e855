use crate::ui::cli::drivers::{Bounds, PromptDriver};
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};
use std::fmt::Display;
use std::str::FromStr;

/// Terminal prompts backed by `inquire`.
pub struct InquireDriver;

fn ask_bounded<T>(title: &str, help: &str, default: T, bounds: Bounds<T>) -> Result<T>
where
    T: Copy + Display + FromStr + PartialOrd + 'static,
{
    let mut q = CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help);

    if !bounds.is_open() {
        q = q.with_validator(move |x: &T| {
            Ok(match bounds.violation(*x) {
                Some(msg) => Validation::Invalid(msg.into()),
                None => Validation::Valid,
            })
        });
    }

    Ok(q.prompt()?)
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(&self, title: &str, help: &str, default: u64, bounds: Bounds<u64>) -> Result<u64> {
        ask_bounded(title, help, default, bounds)
    }

    fn ask_f64(&self, title: &str, help: &str, default: f64, bounds: Bounds<f64>) -> Result<f64> {
        ask_bounded(title, help, default, bounds)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let mut q = Select::new(title, options.to_vec()).with_starting_cursor(default);
        if !help.is_empty() {
            q = q.with_help_message(help);
        }
        Ok(q.raw_prompt()?.index)
    }
}
