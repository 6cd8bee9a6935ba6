//! Line-oriented terminal console.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use duel_core::Console;

/// Marker printed before every line read.
pub const INPUT_MARKER: &str = ">>> ";

/// [`Console`] over any buffered reader and writer.
///
/// Each rendered block is followed by a newline. Reads print [`INPUT_MARKER`]
/// first and strip the trailing line terminator.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W> Console for TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    fn render(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{INPUT_MARKER}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 is passed on as garbled text for the prompt to reject
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
