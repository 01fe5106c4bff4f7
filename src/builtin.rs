use crate::command::{Command, Outcome};
use crate::console::Console;
use crate::error::ShellError;
use crate::external::Opener;

/// Intro line printed by `help` above the command list.
pub(crate) const HELP_HEADER: &str = "Here are the supported commands";

/// Print the arguments joined by single spaces.
pub(crate) fn handle_write(
    args: &[String],
    console: &mut Console,
) -> Result<Outcome, ShellError> {
    console.line(&args.join(" "))?;
    Ok(Outcome::Continue)
}

/// Print the header followed by every supported command, one per line.
pub(crate) fn handle_help(console: &mut Console) -> Result<Outcome, ShellError> {
    let style = *console.style();
    let listing = Command::ALL
        .iter()
        .map(|cmd| style.command_name(cmd.name()))
        .collect::<Vec<_>>()
        .join("\n");
    console.line(&format!("{}\n{}", HELP_HEADER, listing))?;
    Ok(Outcome::Continue)
}

/// Launch the opener with `args` and return without waiting for it.
pub(crate) fn handle_open(args: &[String], opener: &mut Opener) -> Result<Outcome, ShellError> {
    opener.spawn(args)?;
    Ok(Outcome::Continue)
}

/// Print `message` as a notice if one is given, then ask the loop to stop.
pub(crate) fn handle_exit(
    message: Option<&str>,
    console: &mut Console,
) -> Result<Outcome, ShellError> {
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        console.notice(message)?;
    }
    Ok(Outcome::Exit)
}
