//! Clip-generation session records.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clip::ClipSet;

/// Synthetic, time-derived identifier for a session.
///
/// Collisions between sessions created in the same millisecond are accepted
/// as negligible, not engineered against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new time-derived session ID.
    pub fn new() -> Self {
        Self(format!("session_{}", Utc::now().timestamp_millis()))
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable record of one completed clip-generation call.
///
/// Created exactly once per successful generation; never mutated; prepended
/// to the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipSession {
    /// Session ID
    pub id: SessionId,

    /// Title of the source video
    pub source_video_title: String,

    /// Generated clips paired with their artifact files
    pub clips: ClipSet,

    /// Total clip count as declared by the remote. Stored verbatim; may
    /// legitimately disagree with the actual clip count.
    pub total_clips: u64,

    /// Free-text processing summary
    #[serde(default)]
    pub processing_summary: String,

    /// Creation timestamp
    pub generated_at: DateTime<Utc>,
}

impl ClipSession {
    /// Create a new session record.
    pub fn new(
        source_video_title: impl Into<String>,
        clips: ClipSet,
        total_clips: u64,
        processing_summary: impl Into<String>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            source_video_title: source_video_title.into(),
            clips,
            total_clips,
            processing_summary: processing_summary.into(),
            generated_at: Utc::now(),
        }
    }

    /// Actual number of clips in the record, for comparison against the
    /// declared `total_clips`.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::{ClipSet, GeneratedClip};

    #[test]
    fn test_session_id_shape() {
        let id = SessionId::new();
        assert!(id.as_str().starts_with("session_"));
    }

    #[test]
    fn test_declared_total_stored_verbatim() {
        let clips = ClipSet::pair(vec![GeneratedClip::default()], Vec::new());
        let session = ClipSession::new("Some Video", clips, 7, "");
        assert_eq!(session.total_clips, 7);
        assert_eq!(session.clip_count(), 1);
    }
}
