//! Per-session correlation identifiers.
//! Opaque tokens sent with every support request so the backend can group
//! one browser-tab-worth of messages. No persistence, no collision defense.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where fresh session identifiers come from. A capability rather than an
/// ambient global, so tests can pin deterministic values.
pub trait SessionIdSource {
    fn generate(&self) -> SessionId;
}

/// Default source: epoch millis plus a short random suffix, the same shape
/// the web widget used (`chat_<millis>_<suffix>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockRandomSource;

impl SessionIdSource for ClockRandomSource {
    fn generate(&self) -> SessionId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
        SessionId(format!("chat_{}_{}", millis, suffix))
    }
}
