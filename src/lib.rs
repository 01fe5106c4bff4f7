//! A tiny interactive shell with a closed set of commands.
//!
//! Each input line is split into a command name and its arguments, checked
//! against the four supported commands (`write`, `open`, `help`, `exit`) and
//! routed to the matching handler. Failures are reported and the loop keeps
//! going; only `exit` (typed, or triggered by Ctrl-C / end of input) stops it.
//!
//! The main entry point is [`Interpreter`], which owns a [`Console`] for all
//! user-facing output and an [`Opener`] used by the `open` command. Lines are
//! pulled from any [`LineSource`]; the binary uses a rustyline editor.

mod builtin;
pub mod command;
pub mod console;
pub mod error;
pub mod external;
pub mod io_adapters;
mod interpreter;
pub mod lexer;
pub mod style;

pub use command::{Command, Outcome, ParsedCommand};
pub use console::Console;
pub use error::ShellError;
pub use external::Opener;
pub use interpreter::{DEFAULT_PROMPT, EXIT_MESSAGE, Interpreter};
pub use io_adapters::LineSource;
