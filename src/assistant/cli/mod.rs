//! Terminal front end: the read-eval-print loop, the command table and the
//! printers. Input and output are generic so the loop can be driven from
//! tests with in-memory buffers.

pub mod args;
pub mod dispatch;
pub mod print;

use crate::api::AssistantApi;
use crate::store::BookStore;
use dispatch::{Command, Outcome};
use log::debug;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">>> ";
pub const EXIT_WORDS: [&str; 3] = ["good bye", "close", "exit"];
pub const FAREWELL: &str = "Good bye!";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to see available commands.";

/// Settings the loop needs beyond the API itself.
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// Print the prompt before each line.
    pub show_prompt: bool,
    /// Day window for `birthdays` without an argument.
    pub upcoming_days: i64,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            show_prompt: console::user_attended(),
            upcoming_days: 7,
        }
    }
}

/// Runs the loop until an exit word or end of input.
///
/// Command failures are printed and the loop goes on. Only errors writing to
/// `output` or reading from `input` end it early.
pub fn run_repl<S, R, W>(
    api: &mut AssistantApi<S>,
    options: &ReplOptions,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        if options.show_prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        };
        let line = line?;
        let raw = line.trim();
        let line = raw.to_lowercase();

        if EXIT_WORDS.contains(&line.as_str()) {
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }
        if line.is_empty() {
            continue;
        }

        let words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let Some((command, args)) = Command::parse(&words) else {
            debug!("unknown command line: {}", line);
            print::write_error(output, UNKNOWN_COMMAND)?;
            continue;
        };

        let raw_args = raw
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest.trim());
        match dispatch::execute(api, command, args, raw_args, options) {
            Ok(Outcome::Text(text)) => writeln!(output, "{}", text)?,
            Ok(Outcome::Result(result)) => print::write_result(output, &result)?,
            Err(e) => print::write_error(output, &e.to_string())?,
        }
    }
}
