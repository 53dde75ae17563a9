//! Interactive session state and the read-eval-print loop

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use super::command::{Command, ParseCommandError};
use crate::capture::DataCapture;
use crate::traits::{CountQuery, StatsEngine, StatsError};

/// Greeting printed when the loop starts
pub const INTRO: &str =
    "Welcome to the Stats shell. Type help or ? to list commands. To exit type: quit.";

/// Prompt printed before each line is read
pub const PROMPT: &str = "(stats) ";

/// Farewell printed on `quit` / `exit`
pub const FAREWELL: &str = "Thank you for using Stats";

/// Error surfaced to the user for one line; the session keeps running
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    /// Line could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseCommandError),
    /// Query issued before `calc`
    #[error("Please run calc before asking questions.")]
    NotCalculated,
    /// Engine failed to build a summary
    #[error("calc failed: {0}")]
    Stats(#[from] StatsError),
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print
    Silent,
    /// One line of output
    Line(String),
    /// Print the farewell and stop the loop
    Exit,
}

/// A capture plus the summary produced by the last `calc`
///
/// The summary is `None` until `calc` runs and again after `reset`. Values
/// added after `calc` are not reflected in queries until the next `calc`.
#[derive(Debug)]
pub struct Session<E: StatsEngine> {
    /// Empty, configured engine used to start over on `reset`
    template: E,
    capture: DataCapture<E>,
    stats: Option<E::Summary>,
}

impl<E: StatsEngine> Session<E> {
    /// Start a session around an empty engine
    pub fn new(engine: E) -> Self {
        let mut template = engine;
        template.clear();

        Self {
            capture: DataCapture::with_engine(template.clone()),
            template,
            stats: None,
        }
    }

    /// Get the capture
    pub fn capture(&self) -> &DataCapture<E> {
        &self.capture
    }

    /// Summary from the last `calc`, if any
    pub fn stats(&self) -> Option<&E::Summary> {
        self.stats.as_ref()
    }

    /// Parse and execute one input line
    ///
    /// Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, ShellError> {
        if line.trim().is_empty() {
            return Ok(Reply::Silent);
        }
        let command = line.parse::<Command>()?;
        self.execute(command)
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> Result<Reply, ShellError> {
        debug!(?command, "Executing command.");

        match command {
            Command::Add(value) => {
                self.capture.add(value);
                Ok(Reply::Silent)
            }
            Command::List => Ok(Reply::Line(format!("{:?}", self.capture.data()))),
            Command::Calc => {
                self.stats = Some(self.capture.build_stats()?);
                Ok(Reply::Silent)
            }
            Command::GreaterThan(x) => self.query(|stats| stats.greater_than(x)),
            Command::LessThan(x) => self.query(|stats| stats.less_than(x)),
            Command::Between(low, high) => self.query(|stats| stats.between(low, high)),
            Command::Reset => {
                self.capture = DataCapture::with_engine(self.template.clone());
                self.stats = None;
                Ok(Reply::Silent)
            }
            Command::Help => Ok(Reply::Line(help_text())),
            Command::Quit => Ok(Reply::Exit),
        }
    }

    fn query(&self, f: impl FnOnce(&E::Summary) -> u64) -> Result<Reply, ShellError> {
        let stats = self.stats.as_ref().ok_or(ShellError::NotCalculated)?;
        Ok(Reply::Line(f(stats).to_string()))
    }
}

fn help_text() -> String {
    let width = Command::USAGE
        .iter()
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Commands:");
    for (usage, description) in Command::USAGE {
        text.push_str(&format!("\n  {usage:<width$}  {description}"));
    }
    text
}

/// Run the read-eval-print loop until `quit` or end of input
///
/// Replies and user errors go to `output`; only I/O failures are returned.
pub fn run<E, R, W>(mut session: Session<E>, mut input: R, mut output: W) -> io::Result<()>
where
    E: StatsEngine,
    R: BufRead,
    W: Write,
{
    info!("Stats shell starting.");
    writeln!(output, "{INTRO}")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }

        // Invalid UTF-8 is reported as an unknown command.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match session.handle_line(line) {
            Ok(Reply::Silent) => {}
            Ok(Reply::Line(text)) => writeln!(output, "{text}")?,
            Ok(Reply::Exit) => {
                writeln!(output, "{FAREWELL}")?;
                break;
            }
            Err(e) => {
                debug!(error = %e, line = %line, "Rejected input line.");
                writeln!(output, "{e}")?;
            }
        }
    }

    info!(
        observations = session.capture().engine().count(),
        "Stats shell stopped."
    );
    Ok(())
}
