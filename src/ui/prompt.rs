//! Line input for the interactive menu

use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};

use crate::core::error::{Result, ScanError};

/// Source of user input for the menu.
pub trait Prompt {
    /// Read one line of text. End of input is an `UnexpectedEof` IO error.
    fn read_line(&mut self, message: &str) -> Result<String>;

    /// Block until the user confirms.
    fn acknowledge(&mut self, message: &str) -> Result<()> {
        self.read_line(message).map(|_| ())
    }
}

/// Styled prompt for interactive terminals
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, message: &str) -> Result<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

/// Plain prompt over any buffered reader (piped stdin, tests)
pub struct LinePrompt<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn read_line(&mut self, message: &str) -> Result<String> {
        print!("{message}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            println!();
            return Err(ScanError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prompt bound to stdin: styled on a terminal, plain otherwise.
pub fn stdin_prompt() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompt::new())
    } else {
        Box::new(LinePrompt::new(io::stdin().lock()))
    }
}

fn io_kind(err: &ScanError) -> Option<io::ErrorKind> {
    match err {
        ScanError::Io(e) => Some(e.kind()),
        ScanError::Prompt(dialoguer::Error::IO(e)) => Some(e.kind()),
        _ => None,
    }
}

/// Whether an error means the input stream has ended.
pub fn is_end_of_input(err: &ScanError) -> bool {
    io_kind(err) == Some(io::ErrorKind::UnexpectedEof)
}

/// Whether the user interrupted a prompt (Ctrl-C read as a key).
pub fn is_interrupt(err: &ScanError) -> bool {
    io_kind(err) == Some(io::ErrorKind::Interrupted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_prompt_reads_lines_in_order() {
        let mut prompt = LinePrompt::new(Cursor::new("1\r\n https://a.example \n"));
        assert_eq!(prompt.read_line("Choice").unwrap(), "1");
        assert_eq!(prompt.read_line("Target").unwrap(), " https://a.example ");
    }

    #[test]
    fn test_line_prompt_eof() {
        let mut prompt = LinePrompt::new(Cursor::new(""));
        let err = prompt.read_line("Choice").unwrap_err();
        assert!(is_end_of_input(&err));
    }

    #[test]
    fn test_acknowledge_consumes_a_line() {
        let mut prompt = LinePrompt::new(Cursor::new("\nnext\n"));
        prompt.acknowledge("Press ENTER").unwrap();
        assert_eq!(prompt.read_line("Choice").unwrap(), "next");
    }

    #[test]
    fn test_other_errors_are_not_end_of_input() {
        assert!(!is_end_of_input(&ScanError::NoSites));
        assert!(!is_end_of_input(&ScanError::Io(io::Error::other("boom"))));
    }

    #[test]
    fn test_interrupt_detection() {
        let interrupted = ScanError::Io(io::Error::new(io::ErrorKind::Interrupted, "^C"));
        assert!(is_interrupt(&interrupted));
        assert!(!is_end_of_input(&interrupted));
        assert!(!is_interrupt(&ScanError::NoSites));
    }
}
