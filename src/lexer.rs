//! Splitting of raw input lines into a command name and its arguments.
//!
//! The split is deliberately naive: only the space character separates
//! tokens, nothing is quoted or escaped, and runs of spaces produce empty
//! tokens rather than being collapsed.

use crate::command::ParsedCommand;

/// Break `line` into a [`ParsedCommand`].
///
/// The first token becomes the command name and the remaining tokens, in
/// order, become the arguments. An empty line yields an empty name and no
/// arguments.
///
/// # Arguments
/// * `line` - The text read from the terminal, without its trailing newline.
pub fn split_into_tokens(line: &str) -> ParsedCommand {
    let mut tokens = line.split(' ').map(str::to_string);
    // `split` always yields at least one item, even for "".
    let name = tokens.next().unwrap_or_default();
    ParsedCommand::new(name, tokens.collect())
}
