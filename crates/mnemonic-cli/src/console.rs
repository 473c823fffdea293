//! Terminal console for sessions
//!
//! Interactive terminals get dialoguer prompts; piped stdin is read line by
//! line so a session can be scripted.

use colored::Colorize;
use dialoguer::Input;
use mnemonic::{Console, ConsoleError};
use std::io::{self, BufRead, IsTerminal, Write};

pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_piped_line(&mut self, message: &str) -> Result<String, ConsoleError> {
        println!("{}", message.bold());
        io::stdout()
            .flush()
            .map_err(|err| ConsoleError::Io(err.to_string()))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|err| ConsoleError::Io(err.to_string()))?;

        if read == 0 {
            return Err(ConsoleError::Closed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        if !self.interactive {
            return self.read_piped_line(message);
        }

        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| match err {
                dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => {
                    ConsoleError::Closed
                }
                other => ConsoleError::Io(other.to_string()),
            })
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }

    fn notice(&mut self, message: &str) {
        println!("{}", message.yellow());
    }
}
