//! Line-oriented console over stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::ports::Console;

pub struct StdConsole;

impl Console for StdConsole {
    /// Prints the prompt without a newline and reads one line.
    ///
    /// Returns `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}
