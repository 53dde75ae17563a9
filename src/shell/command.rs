//! Text command parsing

use core::str::FromStr;
use std::num::ParseIntError;

/// Error produced when a line cannot be parsed into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    /// Line contained no command
    #[error("empty command")]
    Empty,
    /// Keyword is not a known command
    #[error("unknown command '{0}', type help or ? to list commands")]
    UnknownCommand(String),
    /// A required argument was not supplied
    #[error("'{command}' requires an argument: {name}")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },
    /// Argument is not an integer
    #[error("'{value}' is not a valid integer")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// More arguments than the command accepts
    #[error("unexpected argument '{value}' for '{command}'")]
    UnexpectedArgument {
        command: &'static str,
        value: String,
    },
}

/// A single shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `add N`
    Add(i64),
    /// `list`
    List,
    /// `calc`
    Calc,
    /// `gt X` / `greater X`
    GreaterThan(i64),
    /// `lt X` / `less X`
    LessThan(i64),
    /// `btw LOW HIGH`
    Between(i64, i64),
    /// `reset`
    Reset,
    /// `help` / `?`
    Help,
    /// `quit` / `exit`
    Quit,
}

impl Command {
    /// One-line usage for every command, in display order
    pub const USAGE: &'static [(&'static str, &'static str)] = &[
        ("add N", "Add a value to the dataset."),
        ("list", "List values currently stored."),
        ("calc", "Calculate stats on collected data."),
        ("gt X | greater X", "Display the number of values greater than X."),
        ("lt X | less X", "Display the number of values less than X."),
        ("btw LOW HIGH", "Display the number of values between LOW and HIGH, inclusive."),
        ("reset", "Reset the data collector."),
        ("help | ?", "List available commands."),
        ("quit | exit", "Close the stats shell."),
    ];
}

/// Pulls positional integer arguments for one command
struct Args<I> {
    command: &'static str,
    rest: I,
}

impl<'a, I: Iterator<Item = &'a str>> Args<I> {
    fn new(command: &'static str, rest: I) -> Self {
        Self { command, rest }
    }

    fn integer(&mut self, name: &'static str) -> Result<i64, ParseCommandError> {
        let raw = self.rest.next().ok_or(ParseCommandError::MissingArgument {
            command: self.command,
            name,
        })?;
        raw.parse().map_err(|source| ParseCommandError::InvalidInteger {
            value: raw.to_owned(),
            source,
        })
    }

    fn finish(mut self, command: Command) -> Result<Command, ParseCommandError> {
        match self.rest.next() {
            Some(extra) => Err(ParseCommandError::UnexpectedArgument {
                command: self.command,
                value: extra.to_owned(),
            }),
            None => Ok(command),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(ParseCommandError::Empty)?;

        match keyword.to_ascii_lowercase().as_str() {
            "add" => {
                let mut args = Args::new("add", words);
                let value = args.integer("N")?;
                args.finish(Command::Add(value))
            }
            "list" => Args::new("list", words).finish(Command::List),
            "calc" => Args::new("calc", words).finish(Command::Calc),
            "gt" | "greater" => {
                let mut args = Args::new("gt", words);
                let x = args.integer("X")?;
                args.finish(Command::GreaterThan(x))
            }
            "lt" | "less" => {
                let mut args = Args::new("lt", words);
                let x = args.integer("X")?;
                args.finish(Command::LessThan(x))
            }
            "btw" => {
                let mut args = Args::new("btw", words);
                let low = args.integer("LOW")?;
                let high = args.integer("HIGH")?;
                args.finish(Command::Between(low, high))
            }
            "reset" => Args::new("reset", words).finish(Command::Reset),
            "help" | "?" => Args::new("help", words).finish(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseCommandError::UnknownCommand(keyword.to_owned())),
        }
    }
}
