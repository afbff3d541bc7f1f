//! The interactive event loop.

use std::{
    io::{self, Write},
    mem,
    ops::ControlFlow,
    sync::mpsc::{self, RecvTimeoutError},
    time::Duration,
};

use twentyfour_core::Deal;
use twentyfour_game::{Action, AdviceKind, Outcome, Session};
use twentyfour_generator::{DealGenerator, DealSeed};

use crate::{
    advice::{AdviceError, Advisor, DisabledAdvisor, LocalAdvisor, fallback_text},
    async_work::{WorkError, WorkHandle, WorkRequest, Worker},
    command::{Command, parse_line},
    config::{AdviceMode, AppConfig},
    render,
};

/// How long the loop waits for input before polling advice work.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A terminal game: the session, the deal source, and outstanding advice
/// requests.
#[derive(Debug)]
pub struct App {
    session: Session,
    generator: DealGenerator,
    next_seed: Option<DealSeed>,
    worker: Worker,
    deal_number: u64,
    pending: Vec<PendingAdvice>,
}

/// An advice request and the deal it was asked about.
#[derive(Debug)]
struct PendingAdvice {
    deal_number: u64,
    handle: WorkHandle,
}

impl App {
    /// Creates an app and deals the first numbers.
    ///
    /// # Errors
    ///
    /// Returns [`WorkError::Spawn`] if the advice worker cannot be started.
    pub fn new(config: &AppConfig) -> Result<Self, WorkError> {
        let worker = match config.advice {
            AdviceMode::Local => Worker::spawn(Advisor::new(LocalAdvisor))?,
            AdviceMode::Disabled => Worker::spawn(Advisor::new(DisabledAdvisor))?,
        };
        let generator = config.generator();
        let mut next_seed = config.seed;
        let deal = draw_deal(&generator, &mut next_seed);
        Ok(Self {
            session: Session::new(deal),
            generator,
            next_seed,
            worker,
            deal_number: 0,
            pending: Vec::new(),
        })
    }

    /// Returns the current session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the loop until `quit` or until `lines` is closed.
    ///
    /// Outstanding advice is waited for before returning on a closed input.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn run(
        mut self,
        lines: &mpsc::Receiver<String>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(out, "Make 24 using all four numbers. Type 'help' for commands.")?;
        render::render_session(out, &self.session)?;
        out.flush()?;

        loop {
            match lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => {
                    if self.handle_line(&line, out)?.is_break() {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    self.finish_work(out)?;
                    break;
                }
            }
            self.poll_work(out)?;
            out.flush()?;
        }
        out.flush()
    }

    /// Handles one line of input and redraws the session.
    ///
    /// A line starting with the selected number and an operator, such as
    /// `3 × 2` right after a move, continues from that number instead of
    /// deselecting it.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<ControlFlow<()>> {
        let commands = match parse_line(line) {
            Ok(commands) => commands,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(ControlFlow::Continue(()));
            }
        };
        let mut commands = commands.as_slice();
        if let [Command::Select(position), Command::Operator(_), ..] = commands
            && self.selected_position() == Some(*position)
        {
            commands = &commands[1..];
        }
        for &command in commands {
            if self.handle_command(command, out)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        render::render_session(out, &self.session)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Returns the 1-based position of the selected token.
    fn selected_position(&self) -> Option<usize> {
        let selection = self.session.selection()?;
        self.session
            .pool()
            .position(selection.token)
            .map(|index| index + 1)
    }

    fn handle_command(&mut self, command: Command, out: &mut impl Write) -> io::Result<ControlFlow<()>> {
        let action = match command {
            Command::Select(position) => {
                let token = position
                    .checked_sub(1)
                    .and_then(|index| self.session.pool().tokens().get(index));
                let Some(token) = token else {
                    writeln!(out, "No number at position {position}.")?;
                    return Ok(ControlFlow::Continue(()));
                };
                Action::SelectToken(token.id())
            }
            Command::Operator(op) => Action::ChooseOperator(op),
            Command::Undo => Action::Undo,
            Command::Reset => Action::Reset(draw_deal(&self.generator, &mut self.next_seed)),
            Command::Hint => Action::RequestAdvice(AdviceKind::Hint),
            Command::Solve => Action::RequestAdvice(AdviceKind::Solution),
            Command::Help => {
                render::render_help(out)?;
                return Ok(ControlFlow::Continue(()));
            }
            Command::Quit => return Ok(ControlFlow::Break(())),
        };

        let outcome = self.step(action);
        render::render_outcome(out, &self.session, &outcome)?;
        match outcome {
            Outcome::AdviceRequested { kind, values } => self.enqueue(kind, values, out)?,
            Outcome::Reset => self.deal_number += 1,
            _ => {}
        }
        Ok(ControlFlow::Continue(()))
    }

    fn step(&mut self, action: Action) -> Outcome {
        let placeholder = Session::new(self.session.deal());
        let (session, outcome) = mem::replace(&mut self.session, placeholder).apply(action);
        self.session = session;
        outcome
    }

    fn enqueue(&mut self, kind: AdviceKind, values: Vec<f64>, out: &mut impl Write) -> io::Result<()> {
        match self.worker.enqueue(WorkRequest { kind, values }) {
            Ok(handle) => {
                self.pending.push(PendingAdvice {
                    deal_number: self.deal_number,
                    handle,
                });
                Ok(())
            }
            Err(err) => self.deliver_failure(kind, self.deal_number, &err, out),
        }
    }

    /// Stores and prints every advice response that has arrived.
    ///
    /// Responses to requests made before the last new deal are dropped.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn poll_work(&mut self, out: &mut impl Write) -> io::Result<()> {
        for mut pending in mem::take(&mut self.pending) {
            let deal_number = pending.deal_number;
            match pending.handle.poll() {
                Ok(Some(response)) => self.deliver(response.kind, response.text, deal_number, out)?,
                Ok(None) => self.pending.push(pending),
                Err(err) => self.deliver_failure(pending.handle.kind(), deal_number, &err, out)?,
            }
        }
        Ok(())
    }

    fn finish_work(&mut self, out: &mut impl Write) -> io::Result<()> {
        for PendingAdvice {
            deal_number,
            handle,
        } in mem::take(&mut self.pending)
        {
            let kind = handle.kind();
            match handle.wait() {
                Ok(response) => self.deliver(response.kind, response.text, deal_number, out)?,
                Err(err) => self.deliver_failure(kind, deal_number, &err, out)?,
            }
        }
        Ok(())
    }

    fn deliver(
        &mut self,
        kind: AdviceKind,
        text: String,
        deal_number: u64,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if deal_number != self.deal_number {
            log::debug!("dropping {kind} asked for an earlier deal");
            return Ok(());
        }
        render::render_advice(out, kind, &text)?;
        self.step(Action::ReceiveAdvice { kind, text });
        Ok(())
    }

    fn deliver_failure(
        &mut self,
        kind: AdviceKind,
        deal_number: u64,
        err: &WorkError,
        out: &mut impl Write,
    ) -> io::Result<()> {
        log::warn!("{kind} request failed: {err}");
        let err = AdviceError::Unavailable {
            reason: err.to_string(),
        };
        self.deliver(kind, fallback_text(kind, &err).to_owned(), deal_number, out)
    }
}

/// Draws the next deal.
///
/// With a seed, the seed for the following deal is derived from the current
/// one, so a whole run can be replayed.
fn draw_deal(generator: &DealGenerator, next_seed: &mut Option<DealSeed>) -> Deal {
    let generated = match *next_seed {
        Some(seed) => {
            *next_seed = Some(DealSeed::from_phrase(&seed.to_string()));
            generator.generate_with_seed(seed)
        }
        None => generator.generate(),
    };
    match generated.seed {
        Some(seed) => log::info!(
            "dealt {} from seed {seed} after {} attempt(s)",
            generated.deal,
            generated.attempts
        ),
        None => log::info!("dealt {}", generated.deal),
    }
    generated.deal
}
