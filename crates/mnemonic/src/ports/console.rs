//! Console Port
//!
//! The operator's side of a session. Reads are blocking; the session never
//! has more than one prompt outstanding.

use crate::domain::{Approval, ConsoleError};

pub trait Console {
    /// Show `message` and read one line of input (without the newline)
    fn prompt(&mut self, message: &str) -> Result<String, ConsoleError>;

    /// Print regular output
    fn say(&mut self, message: &str);

    /// Print a warning or error notice
    fn notice(&mut self, message: &str);

    /// Ask a yes/no question and parse the answer
    fn ask_approval(&mut self, question: &str) -> Result<Approval, ConsoleError> {
        let answer = self.prompt(question)?;
        Ok(Approval::parse(&answer))
    }
}
