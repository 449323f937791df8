//! Agent client error types.
//!
//! These errors cover transport-level failures only: a call that completes
//! but carries `success: false` is a remote-reported failure and is
//! represented in-band by [`crate::AgentReply`], not as an error.

use thiserror::Error;

pub type AgentResult<T> = Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Agent service returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
