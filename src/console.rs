use crate::style::Style;
use std::io::{self, Write};

/// Output context for everything the user sees.
///
/// Built once at startup and handed to the [`Interpreter`](crate::Interpreter);
/// nothing writes to stdout behind its back. Each message is flushed right
/// away so it shows up before the next prompt.
pub struct Console {
    out: Box<dyn Write>,
    style: Style,
}

impl Console {
    pub fn new(out: Box<dyn Write>, style: Style) -> Self {
        Self { out, style }
    }

    /// Console writing to the process's standard output.
    pub fn stdout(style: Style) -> Self {
        Self::new(Box::new(io::stdout()), style)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Plain output, followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Error text, in red.
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let (start, reset) = (self.style.red_start(), self.style.reset());
        writeln!(self.out, "{}{}{}", start, text, reset)?;
        self.out.flush()
    }

    /// Exit and interrupt notices, in yellow.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        let (start, reset) = (self.style.yellow_start(), self.style.reset());
        writeln!(self.out, "{}{}{}", start, text, reset)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::MemWriter;

    fn captured(style: Style) -> (Console, std::rc::Rc<std::cell::RefCell<Vec<u8>>>) {
        let (writer, handle) = MemWriter::with_handle();
        (Console::new(Box::new(writer), style), handle)
    }

    #[test]
    fn test_plain_line() {
        let (mut console, out) = captured(Style::force_enabled());
        console.line("a b c").unwrap();
        assert_eq!(String::from_utf8(out.borrow().clone()).unwrap(), "a b c\n");
    }

    #[test]
    fn test_error_is_red() {
        let (mut console, out) = captured(Style::force_enabled());
        console.error("boom").unwrap();
        assert_eq!(
            String::from_utf8(out.borrow().clone()).unwrap(),
            "\x1b[31mboom\x1b[0m\n"
        );
    }

    #[test]
    fn test_notice_without_color() {
        let (mut console, out) = captured(Style::disabled());
        console.notice("bye").unwrap();
        assert_eq!(String::from_utf8(out.borrow().clone()).unwrap(), "bye\n");
    }
}
