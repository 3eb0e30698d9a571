//! Interactive browse mode
//!
//! Provides a readline-based interface that keeps filter criteria between
//! inputs and re-renders the matching questions after every change.

mod command;
mod repl;

pub use command::BrowseCommand;
pub use repl::{BrowseRepl, Outcome};
