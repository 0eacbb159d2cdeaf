//! One mounted chat widget: transcript plus the submit state machine.
//! A submission moves the session `Idle -> AwaitingReply -> Idle`; attempts
//! while a reply is pending are rejected outright.


use crate::client::{SendError, SupportClient};
use crate::session::{SessionId, SessionIdSource};
use crate::transcript::Transcript;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::warn;

/// Shown when the server answered but with an error status.
pub const REMOTE_REJECTION_FALLBACK: &str =
    "Sorry, I'm having trouble connecting. Please try again or email us at support@euromatchtickets.com";

/// Shown when no response came back at all.
pub const TRANSPORT_FAILURE_FALLBACK: &str =
    "Connection error. Please check your internet and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// Why a submit attempt was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("message is empty after trimming")]
    EmptyMessage,
    #[error("a submission is already in flight")]
    Busy,
}

/// What an accepted submission ended up appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Server reply appended.
    Replied(String),
    /// Error status from the server; fixed fallback appended.
    RemoteRejected,
    /// No response; fixed fallback appended.
    TransportFailed,
    /// Nothing happened, transcript untouched.
    Rejected(Rejection),
}

struct WidgetInner {
    transcript: Transcript,
    state: SessionState,
}

/// Cloneable handle to one widget instance. The inner lock only guards
/// synchronous transcript/state updates and is never held across an await,
/// so closing the surrounding UI while a reply is pending cannot touch
/// freed state.
#[derive(Clone)]
pub struct ChatWidget {
    inner: Arc<Mutex<WidgetInner>>,
    client: SupportClient,
    session_id: SessionId,
}

impl ChatWidget {
    pub fn new(client: SupportClient, ids: &dyn SessionIdSource) -> Self {
        Self {
            inner: Arc::new(Mutex::new(WidgetInner {
                transcript: Transcript::new(),
                state: SessionState::Idle,
            })),
            client,
            session_id: ids.generate(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.inner.lock().unwrap().state
    }

    /// Snapshot of the transcript at this instant.
    pub fn transcript(&self) -> Transcript {
        self.inner.lock().unwrap().transcript.clone()
    }

    /// Submit one user message and record the outcome. Exactly one user
    /// entry and exactly one outcome entry are appended per accepted call.
    pub async fn submit(&self, input: &str) -> Submission {
        let message = match self.begin(input) {
            Ok(message) => message,
            Err(rejection) => return Submission::Rejected(rejection),
        };

        let outcome = self.client.send(&message, &self.session_id).await;
        self.settle(outcome)
    }

    /// Synchronous half of submit: trim, reject empty or busy, append the
    /// user entry, enter `AwaitingReply`.
    fn begin(&self, input: &str) -> Result<String, Rejection> {
        let message = input.trim();
        if message.is_empty() {
            return Err(Rejection::EmptyMessage);
        }

        let mut inner = self.inner.lock().unwrap();
        if inner.state == SessionState::AwaitingReply {
            return Err(Rejection::Busy);
        }
        inner.transcript.push_user(message);
        inner.state = SessionState::AwaitingReply;
        Ok(message.to_owned())
    }

    /// Append the outcome entry and return to `Idle`, whatever happened.
    fn settle(&self, outcome: Result<String, SendError>) -> Submission {
        let mut inner = self.inner.lock().unwrap();
        let submission = match outcome {
            Ok(reply) => {
                inner.transcript.push_assistant(reply.clone());
                Submission::Replied(reply)
            }
            Err(SendError::RemoteRejection { status }) => {
                warn!(%status, "support endpoint rejected the message");
                inner.transcript.push_assistant(REMOTE_REJECTION_FALLBACK);
                Submission::RemoteRejected
            }
            Err(SendError::TransportFailure(error)) => {
                warn!(%error, "support request never completed");
                inner.transcript.push_assistant(TRANSPORT_FAILURE_FALLBACK);
                Submission::TransportFailed
            }
        };
        inner.state = SessionState::Idle;
        submission
    }
}
