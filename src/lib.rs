//! # EuroMatchTickets support chat client
//!
//! Client-side half of the marketplace's support chat: an in-memory
//! transcript, a per-session correlation id, and a submit flow that POSTs
//! one user utterance at a time to the support backend.
//!
//! ```text
//! User input → widget (state machine) → client (HTTP) → transcript append
//! ```
//!
//! One submission at a time: while a reply is pending the session sits in
//! `AwaitingReply` and further submits are rejected. Every accepted
//! submission appends exactly one user entry and exactly one outcome entry,
//! which on failure is one of two fixed fallback messages.

pub mod client;
pub mod session;
pub mod transcript;
pub mod widget;

pub use client::{ClientConfig, ConfigError, SendError, SupportClient};
pub use session::{ClockRandomSource, SessionId, SessionIdSource};
pub use transcript::{Role, Transcript, TranscriptEntry, GREETING};
pub use widget::{
    ChatWidget, Rejection, SessionState, Submission, REMOTE_REJECTION_FALLBACK,
    TRANSPORT_FAILURE_FALLBACK,
};
