use crate::builtin::{handle_exit, handle_help, handle_open, handle_write};
use crate::command::{Command, Outcome, ParsedCommand};
use crate::console::Console;
use crate::error::ShellError;
use crate::external::Opener;
use crate::io_adapters::LineSource;
use crate::lexer;
use rustyline::error::ReadlineError;

/// Prompt shown before every read.
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Notice printed when the shell stops, whether by `exit` or by Ctrl-C.
pub const EXIT_MESSAGE: &str = "Exiting application";

/// Read-eval-print loop over the closed command set.
///
/// The interpreter owns the [`Console`] all output goes through and the
/// [`Opener`] used by `open`. Input comes from whatever [`LineSource`] is
/// passed to [`Interpreter::repl`].
///
/// Example
/// ```
/// use opener_shell::io_adapters::{MemWriter, ScriptedLines};
/// use opener_shell::style::Style;
/// use opener_shell::{Console, Interpreter, Opener};
///
/// let (writer, out) = MemWriter::with_handle();
/// let mut sh = Interpreter::new(Console::new(Box::new(writer), Style::disabled()), Opener::default());
/// sh.repl(&mut ScriptedLines::from_lines(["write hello world", "exit"])).unwrap();
/// assert_eq!(String::from_utf8(out.borrow().clone()).unwrap(), "hello world\nExiting application\n");
/// ```
pub struct Interpreter {
    console: Console,
    opener: Opener,
    prompt: String,
}

impl Interpreter {
    pub fn new(console: Console, opener: Opener) -> Self {
        Self {
            console,
            opener,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Replace the prompt shown before each read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Tokenize and dispatch one raw input line.
    pub fn handle_input(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let parsed = lexer::split_into_tokens(line);
        self.dispatch(&parsed)
    }

    /// Route a parsed command to its handler.
    ///
    /// Unknown names are rejected before any handler runs.
    pub fn dispatch(&mut self, parsed: &ParsedCommand) -> Result<Outcome, ShellError> {
        let command = parsed.command().inspect_err(|_| {
            tracing::debug!(name = %parsed.name, "command not supported");
        })?;
        tracing::debug!(%command, args = ?parsed.args, "dispatching");

        match command {
            Command::Write => handle_write(&parsed.args, &mut self.console),
            Command::Open => handle_open(&parsed.args, &mut self.opener),
            Command::Help => handle_help(&mut self.console),
            // Arguments to `exit` are ignored.
            Command::Exit => handle_exit(Some(EXIT_MESSAGE), &mut self.console),
        }
    }

    /// Run until `exit`, Ctrl-C or end of input.
    ///
    /// Command failures are printed and the loop carries on. Only a line
    /// source failing for any other reason ends the loop with an error.
    pub fn repl(&mut self, source: &mut dyn LineSource) -> anyhow::Result<()> {
        loop {
            self.opener.reap();
            let line = match source.read_line(&self.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    tracing::debug!("keyboard interrupt detected");
                    self.shutdown()?;
                    return Ok(());
                }
                Err(ReadlineError::Eof) => {
                    tracing::debug!("end of input");
                    self.shutdown()?;
                    return Ok(());
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to read input");
                    return Err(err.into());
                }
            };

            match self.handle_input(&line) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Exit) => return Ok(()),
                Err(err) => self.report(&err)?,
            }
        }
    }

    fn shutdown(&mut self) -> anyhow::Result<()> {
        handle_exit(Some(EXIT_MESSAGE), &mut self.console)?;
        Ok(())
    }

    fn report(&mut self, err: &ShellError) -> anyhow::Result<()> {
        if err.is_fault() {
            tracing::error!(error = %err, "command failed");
        } else {
            tracing::warn!(error = %err, "rejected input");
        }
        self.console.error(&err.to_string())?;
        Ok(())
    }
}
