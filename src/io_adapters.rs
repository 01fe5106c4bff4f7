use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{Result as IoResult, Write};
use std::rc::Rc;

/// Where the read loop gets its input lines from.
///
/// Implementations return `ReadlineError::Interrupted` for Ctrl-C and
/// `ReadlineError::Eof` once no more input is available.
pub trait LineSource {
    /// Show `prompt` and block until a full line is available.
    fn read_line(&mut self, prompt: &str) -> rustyline::Result<String>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> rustyline::Result<String> {
        // No add_history_entry: the shell keeps no history.
        self.readline(prompt)
    }
}

/// One scripted terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Line(String),
    Interrupt,
}

/// Memory-backed line source that replays a fixed script, then reports EOF.
pub struct ScriptedLines {
    script: VecDeque<ScriptedInput>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    pub fn new(script: impl IntoIterator<Item = ScriptedInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Convenience: a script made only of plain lines.
    pub fn from_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(lines.into_iter().map(|l| ScriptedInput::Line(l.into())))
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Every prompt shown so far, one per read.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> rustyline::Result<String> {
        self.prompts.push(prompt.to_string());
        match self.script.pop_front() {
            Some(ScriptedInput::Line(line)) => Ok(line),
            Some(ScriptedInput::Interrupt) => Err(ReadlineError::Interrupted),
            None => Err(ReadlineError::Eof),
        }
    }
}

/// Memory-backed writer for capturing console output.
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    /// Create a writer and return it with a handle to the shared buffer.
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let buf = Rc::new(RefCell::new(Vec::new()));
        (Self { buf: buf.clone() }, buf)
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_lines_replay_then_eof() {
        let mut src = ScriptedLines::new([
            ScriptedInput::Line("help".to_string()),
            ScriptedInput::Interrupt,
        ]);

        assert_eq!(src.read_line("> ").unwrap(), "help");
        assert!(matches!(src.read_line("> "), Err(ReadlineError::Interrupted)));
        assert!(matches!(src.read_line("> "), Err(ReadlineError::Eof)));
        assert_eq!(src.remaining(), 0);
        assert_eq!(src.prompts().len(), 3);
    }

    #[test]
    fn test_mem_writer_shares_buffer() {
        let (mut writer, handle) = MemWriter::with_handle();
        write!(writer, "abc").unwrap();
        drop(writer);
        assert_eq!(handle.borrow().as_slice(), b"abc");
        assert_eq!(Rc::strong_count(&handle), 1);
    }
}
