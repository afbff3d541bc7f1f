//! Plain-text rendering of the session.

use std::io::{self, Write};

use twentyfour_core::{Operator, format_value};
use twentyfour_game::{AdviceKind, Outcome, Session, Token};

/// Writes the command list.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <n>             select the number at position n")?;
    let symbols = Operator::ALL.map(|op| op.ascii_symbol().to_string()).join(" ");
    writeln!(out, "  {symbols:<16}choose an operator (also x, ×, ÷, add, sub, mul, div)")?;
    writeln!(out, "  1 + 2           a whole move: select, operator, select")?;
    writeln!(out, "  undo, u         take back the last move")?;
    writeln!(out, "  new, reset, r   deal new numbers")?;
    writeln!(out, "  hint, h         ask for a hint")?;
    writeln!(out, "  solve, s        show a solution")?;
    writeln!(out, "  help, ?         show this list")?;
    writeln!(out, "  quit, q         leave the game")
}

/// Writes the pool, the pending selection, the move history and any advice.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_session(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let selection = session.selection();

    write!(out, "Numbers:")?;
    for (position, token) in session.pool().tokens().iter().enumerate() {
        let marker = if selection.is_some_and(|s| s.token == token.id()) {
            "*"
        } else {
            ""
        };
        write!(out, "  [{}]{marker} {}", position + 1, token_text(token))?;
    }
    writeln!(out)?;

    if let Some(selection) = selection
        && let Some(token) = session.pool().get(selection.token)
    {
        match selection.operator {
            Some(op) => writeln!(out, "Selected: {} {op} ?", token.label())?,
            None => writeln!(out, "Selected: {}", token.label())?,
        }
    }

    if !session.history().is_empty() {
        writeln!(out, "Moves:")?;
        for (i, step) in session.history().iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step.description())?;
        }
    }

    for kind in AdviceKind::ALL {
        if session.is_advice_pending(kind) {
            writeln!(out, "{}: thinking...", advice_title(kind))?;
        } else if let Some(text) = session.advice().text(kind) {
            writeln!(out, "{}: {text}", advice_title(kind))?;
        }
    }

    if session.is_won()
        && let [token] = session.pool().tokens()
    {
        writeln!(
            out,
            "You made 24 with {}! Type 'new' for another deal.",
            token.label()
        )?;
    }
    Ok(())
}

/// Writes a short message describing `outcome`, if it needs one.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_outcome(out: &mut impl Write, session: &Session, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Selected(_)
        | Outcome::Deselected
        | Outcome::OperatorChosen(_)
        | Outcome::AdviceUpdated(_) => Ok(()),
        Outcome::Reduced { description, .. } | Outcome::Won { description } => {
            writeln!(out, "{description}")
        }
        Outcome::Undone { description } => writeln!(out, "Took back {description}."),
        Outcome::Reset => writeln!(out, "New deal: {}", session.deal()),
        Outcome::AdviceRequested { kind, .. } => writeln!(out, "Asking for a {kind}..."),
        Outcome::Rejected(err) => writeln!(out, "Can't do that: {err}."),
        Outcome::Ignored(reason) => writeln!(out, "Ignored: {reason}."),
    }
}

/// Writes advice text as it arrives.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_advice(out: &mut impl Write, kind: AdviceKind, text: &str) -> io::Result<()> {
    writeln!(out, "{}: {text}", advice_title(kind))
}

fn advice_title(kind: AdviceKind) -> &'static str {
    match kind {
        AdviceKind::Hint => "Hint",
        AdviceKind::Solution => "Solution",
    }
}

fn token_text(token: &Token) -> String {
    let value = format_value(token.value());
    if token.label() == value {
        value
    } else {
        format!("{} = {value}", token.label())
    }
}
