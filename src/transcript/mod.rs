//! Append-only conversation record for one widget session.
//! Seeded with the assistant greeting, grows monotonically, never
//! reordered or pruned. In-memory only.

pub mod message;


pub use message::{Role, TranscriptEntry};

/// Greeting shown before the user has said anything.
pub const GREETING: &str = "Hi! 👋 I'm your EuroMatchTickets assistant. How can I help you today?\n\nI can help with:\n• Finding tickets\n• Order status\n• Refunds & cancellations\n• Payment questions";

/// Ordered list of exchanged entries. Order equals chronological
/// append order.
#[derive(Debug, Clone)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Fresh transcript with the greeting already in place.
    pub fn new() -> Self {
        Self {
            entries: vec![TranscriptEntry::new(Role::Assistant, GREETING)],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.entries.push(TranscriptEntry::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.entries.push(TranscriptEntry::new(Role::Assistant, content));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
