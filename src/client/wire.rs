//! JSON bodies for the support chat endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
