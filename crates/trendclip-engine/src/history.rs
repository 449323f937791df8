//! Session history store.
//!
//! An append-only, newest-first log of completed clip-generation sessions.
//! Stored sessions are immutable; the only view state is which single entry
//! is expanded for detail viewing.

use serde::Serialize;

use trendclip_models::{ClipSession, SessionId};

/// Newest-first log of clip-generation sessions.
#[derive(Debug, Default, Serialize)]
pub struct SessionHistory {
    sessions: Vec<ClipSession>,
    expanded: Option<SessionId>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a completed session. No eviction, no deduplication.
    pub fn record(&mut self, session: ClipSession) {
        self.sessions.insert(0, session);
    }

    /// Sessions, newest first.
    pub fn sessions(&self) -> &[ClipSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The currently expanded session, if any.
    pub fn expanded(&self) -> Option<&SessionId> {
        self.expanded.as_ref()
    }

    /// Expand a session for detail viewing, collapsing it if it was already
    /// expanded. At most one session is expanded at a time. Unknown ids are
    /// ignored.
    pub fn toggle_expanded(&mut self, id: &SessionId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else if self.sessions.iter().any(|s| &s.id == id) {
            self.expanded = Some(id.clone());
        }
    }
}
