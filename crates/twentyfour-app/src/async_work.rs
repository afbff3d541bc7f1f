//! Background advice work using a worker thread and channels.
//!
//! Requests are queued on a single worker thread. Each request gets its own
//! response channel, wrapped in a [`WorkHandle`] that the event loop polls
//! without blocking.

use std::{
    fmt, io,
    sync::mpsc,
    thread::{self, JoinHandle},
};

use twentyfour_game::AdviceKind;

use crate::advice::{AdviceBackend, Advisor};

/// A request for advice on a pool of values.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkRequest {
    /// The kind of advice.
    pub kind: AdviceKind,
    /// The pool values, in order.
    pub values: Vec<f64>,
}

impl WorkRequest {
    /// Produces the response for this request.
    #[must_use]
    pub fn handle<B>(&self, advisor: &Advisor<B>) -> WorkResponse
    where
        B: AdviceBackend,
    {
        WorkResponse {
            kind: self.kind,
            text: advisor.advise(self.kind, &self.values),
        }
    }
}

/// Advice text produced by the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkResponse {
    /// The kind of advice.
    pub kind: AdviceKind,
    /// The advice text.
    pub text: String,
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum WorkError {
    /// The worker thread could not be started.
    #[display("failed to start worker thread: {_0}")]
    Spawn(io::Error),
    /// The worker thread exited before answering.
    #[display("worker disconnected")]
    #[from(ignore)]
    WorkerDisconnected,
}

struct WorkRequestEnvelope {
    request: WorkRequest,
    response_tx: mpsc::Sender<WorkResponse>,
}

/// A handle for polling background work completion.
pub struct WorkHandle {
    kind: AdviceKind,
    receiver: mpsc::Receiver<WorkResponse>,
}

impl fmt::Debug for WorkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkHandle")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl WorkHandle {
    /// Returns the kind of advice this handle waits for.
    #[must_use]
    pub fn kind(&self) -> AdviceKind {
        self.kind
    }

    /// Attempts to poll for a completed response.
    ///
    /// # Errors
    ///
    /// Returns [`WorkError::WorkerDisconnected`] if the worker went away
    /// without answering.
    pub fn poll(&mut self) -> Result<Option<WorkResponse>, WorkError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }

    /// Blocks until the response arrives.
    ///
    /// # Errors
    ///
    /// Returns [`WorkError::WorkerDisconnected`] if the worker went away
    /// without answering.
    pub fn wait(self) -> Result<WorkResponse, WorkError> {
        self.receiver
            .recv()
            .map_err(|_| WorkError::WorkerDisconnected)
    }
}

/// A background thread that answers [`WorkRequest`]s in order.
///
/// Dropping the worker closes its queue and joins the thread.
pub struct Worker {
    sender: Option<mpsc::Sender<WorkRequestEnvelope>>,
    thread: Option<JoinHandle<()>>,
}

impl fmt::Debug for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Worker")
            .field("running", &self.sender.is_some())
            .finish_non_exhaustive()
    }
}

impl Worker {
    /// Starts a worker thread answering requests with `advisor`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkError::Spawn`] if the thread cannot be started.
    pub fn spawn<B>(advisor: Advisor<B>) -> Result<Self, WorkError>
    where
        B: AdviceBackend + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<WorkRequestEnvelope>();
        let thread = thread::Builder::new()
            .name("advice-worker".to_owned())
            .spawn(move || {
                while let Ok(envelope) = rx.recv() {
                    let response = envelope.request.handle(&advisor);
                    // the requester may have stopped waiting
                    let _ = envelope.response_tx.send(response);
                }
                log::debug!("advice worker stopped");
            })?;
        Ok(Self {
            sender: Some(tx),
            thread: Some(thread),
        })
    }

    /// Queues a request and returns a handle for polling completion.
    ///
    /// # Errors
    ///
    /// Returns [`WorkError::WorkerDisconnected`] if the worker thread is gone.
    pub fn enqueue(&self, request: WorkRequest) -> Result<WorkHandle, WorkError> {
        let sender = self.sender.as_ref().ok_or(WorkError::WorkerDisconnected)?;
        let kind = request.kind;
        let (response_tx, response_rx) = mpsc::channel();
        sender
            .send(WorkRequestEnvelope {
                request,
                response_tx,
            })
            .map_err(|_| WorkError::WorkerDisconnected)?;
        Ok(WorkHandle {
            kind,
            receiver: response_rx,
        })
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::error!("advice worker panicked");
        }
    }
}
