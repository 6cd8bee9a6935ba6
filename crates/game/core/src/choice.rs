//! Validated, retrying selection over an enumerated option list.
//!
//! Both character and spell selection funnel through [`prompt_choice`]. A
//! malformed or out-of-range answer never escapes this module: the user sees a
//! hint and the identical prompt again. Only end-of-input aborts.

use crate::character::title_case;
use crate::console::Console;
use crate::error::{DuelError, Result};

pub const RANGE_HINT: &str = "Please choose a number in the given range.";
pub const CONFIRM_HINT: &str = "Please type \"y\" or \"n\"";

/// One labeled entry of a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption<T> {
    pub label: String,
    pub payload: T,
}

impl<T> ChoiceOption<T> {
    pub fn new(label: impl Into<String>, payload: T) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }
}

/// Render `prompt` and the numbered options, then read until a valid index.
///
/// Indices are assigned by position in `options` and are only meaningful for
/// this call. Labels are title-cased when `capitalize_labels` is set.
pub fn prompt_choice<C, T>(
    console: &mut C,
    prompt: &str,
    mut options: Vec<ChoiceOption<T>>,
    capitalize_labels: bool,
) -> Result<T>
where
    C: Console + ?Sized,
{
    if options.is_empty() {
        return Err(DuelError::NoOptions {
            prompt: prompt.to_string(),
        });
    }

    let menu = render_menu(prompt, &options, capitalize_labels);

    loop {
        console.render(&menu)?;
        let line = read_required_line(console)?;

        match line.trim().parse::<usize>() {
            Ok(index) if index < options.len() => {
                tracing::debug!(index, label = %options[index].label, "choice accepted");
                return Ok(options.swap_remove(index).payload);
            }
            Ok(index) => {
                tracing::warn!(index, count = options.len(), "choice out of range");
            }
            Err(_) => {
                tracing::warn!(input = %line, "choice is not a number");
            }
        }
        console.render(RANGE_HINT)?;
    }
}

/// Ask a yes/no question, accepting only a case-insensitive `y` or `n`.
///
/// `question` is re-rendered in full after every rejected answer.
pub fn confirm<C>(console: &mut C, question: &str) -> Result<bool>
where
    C: Console + ?Sized,
{
    loop {
        console.render(question)?;
        let line = read_required_line(console)?;

        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                tracing::warn!(input = %line, "confirmation is neither y nor n");
                console.render(CONFIRM_HINT)?;
            }
        }
    }
}

fn render_menu<T>(prompt: &str, options: &[ChoiceOption<T>], capitalize_labels: bool) -> String {
    let mut menu = String::from(prompt);
    for (index, option) in options.iter().enumerate() {
        let label = if capitalize_labels {
            title_case(&option.label)
        } else {
            option.label.clone()
        };
        menu.push('\n');
        menu.push_str(&format!("{index}: {label}"));
    }
    menu
}

fn read_required_line<C>(console: &mut C) -> Result<String>
where
    C: Console + ?Sized,
{
    console.read_line()?.ok_or(DuelError::InputClosed)
}
