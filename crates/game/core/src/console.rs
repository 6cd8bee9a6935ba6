//! Presentation/input boundary consumed by the duel engine.
//!
//! The engine only ever renders text and reads whole lines. Front-ends decide
//! how that maps onto a terminal; tests use [`ScriptedConsole`].

use std::collections::VecDeque;
use std::io;

/// Synchronous request/response text channel.
pub trait Console {
    /// Render a block of text to the user.
    fn render(&mut self, text: &str) -> io::Result<()>;

    /// Block until the user submits a line.
    ///
    /// Returns `Ok(None)` at end-of-input. Trailing line terminators are
    /// stripped.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn render(&mut self, text: &str) -> io::Result<()> {
        (**self).render(text)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// In-memory console fed from a fixed script of input lines.
///
/// Every rendered block is captured in order. Once the script runs dry the
/// console reports end-of-input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Rendered blocks, oldest first.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All rendered text joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn render(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}
