//! Text rendering and line input for the terminal.

pub mod banner;
pub mod console;

pub use banner::WELCOME_BANNER;
pub use console::{INPUT_MARKER, TerminalConsole};
