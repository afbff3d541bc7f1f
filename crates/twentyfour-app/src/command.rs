//! Parsing of interactive input lines.

use std::str::FromStr;

use twentyfour_core::Operator;

/// A single interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the token at this 1-based position in the pool.
    Select(usize),
    /// Choose an operator.
    Operator(Operator),
    /// Revert the last move.
    Undo,
    /// Start a new deal.
    Reset,
    /// Ask for a hint.
    Hint,
    /// Ask for the solution.
    Solve,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Error returned when an input line contains an unknown word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown command {word:?}, type 'help' for a list of commands")]
pub struct ParseCommandError {
    /// The word that was not understood.
    pub word: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        if let Ok(position) = word.parse::<usize>() {
            return Ok(Self::Select(position));
        }
        let command = match word.to_ascii_lowercase().as_str() {
            "undo" | "u" => Self::Undo,
            "reset" | "new" | "r" => Self::Reset,
            "hint" | "h" => Self::Hint,
            "solve" | "solution" | "s" => Self::Solve,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => word.parse().map(Self::Operator).map_err(|_| ParseCommandError {
                word: word.to_owned(),
            })?,
        };
        Ok(command)
    }
}

/// Splits a line into commands.
///
/// Numbers, words and operator symbols may be run together, so `1+2` and
/// `1 + 2` both read as select, operator, select.
///
/// # Errors
///
/// Returns [`ParseCommandError`] for the first word that is not a command.
///
/// # Examples
///
/// ```
/// use twentyfour_app::command::{Command, parse_line};
/// use twentyfour_core::Operator;
///
/// assert_eq!(
///     parse_line("1÷3")?,
///     [Command::Select(1), Command::Operator(Operator::Divide), Command::Select(3)],
/// );
/// assert_eq!(parse_line("undo, hint")?, [Command::Undo, Command::Hint]);
/// # Ok::<(), twentyfour_app::command::ParseCommandError>(())
/// ```
pub fn parse_line(line: &str) -> Result<Vec<Command>, ParseCommandError> {
    split_words(line).into_iter().map(str::parse).collect()
}

fn split_words(line: &str) -> Vec<&str> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Class {
        Digit,
        Alpha,
    }

    let mut words = Vec::new();
    let mut start: Option<(usize, Class)> = None;
    for (i, ch) in line.char_indices() {
        let class = if ch.is_ascii_digit() {
            Some(Class::Digit)
        } else if ch.is_alphabetic() {
            Some(Class::Alpha)
        } else {
            None
        };
        if let Some((begin, current)) = start
            && class != Some(current)
        {
            words.push(&line[begin..i]);
            start = None;
        }
        match class {
            Some(class) if start.is_none() => start = Some((i, class)),
            Some(_) => {}
            None if ch.is_whitespace() || ch == ',' => {}
            None => words.push(&line[i..i + ch.len_utf8()]),
        }
    }
    if let Some((begin, _)) = start {
        words.push(&line[begin..]);
    }
    words
}
