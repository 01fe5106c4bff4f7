use crate::error::ShellError;
use std::fmt;
use std::str::FromStr;

/// The closed set of commands understood by the shell.
///
/// Membership is decided by exact, case-sensitive comparison against
/// [`Command::name`]. There is no way to register more commands at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Print the arguments separated by single spaces.
    Write,
    /// Hand the arguments to the platform opener.
    Open,
    /// List the supported commands.
    Help,
    /// Leave the shell.
    Exit,
}

impl Command {
    /// Every supported command, in the order `help` lists them.
    pub const ALL: [Command; 4] = [Command::Write, Command::Open, Command::Help, Command::Exit];

    /// Canonical name of the command as typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            Command::Write => "write",
            Command::Open => "open",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| ShellError::UnsupportedCommand(s.to_string()))
    }
}

/// Returns true when `name` is one of the four supported commands.
pub fn is_supported_command(name: &str) -> bool {
    Command::ALL.iter().any(|cmd| cmd.name() == name)
}

/// A single input line broken into its command name and arguments.
///
/// The name is kept as raw text so that an unsupported name can be reported
/// back to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Resolve the name against the registry.
    pub fn command(&self) -> Result<Command, ShellError> {
        self.name.parse()
    }
}

/// What the read loop should do after a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}
