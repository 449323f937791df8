//! Transient status notices.
//!
//! A notice is a one-line status message shown until it expires or the user
//! dismisses it. At most one notice per kind is visible; a new notice of the
//! same kind replaces the old one and restarts the expiry timer. Expiry
//! timers are independent tokio tasks, aborted on dismissal and replacement.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;

/// Kind of a status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A workflow completed with results.
    Success,
    /// A workflow completed without results (soft failure) or other
    /// non-alarming information.
    Info,
    /// A workflow failed.
    Error,
}

impl NoticeKind {
    const ALL: [NoticeKind; 3] = [NoticeKind::Success, NoticeKind::Info, NoticeKind::Error];
}

/// A visible status message.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Monotonic sequence number; a stale expiry task must not clear a
    /// newer notice that reused its slot.
    #[serde(skip)]
    seq: u64,
}

#[derive(Debug, Default)]
struct NoticeBoard {
    slots: HashMap<NoticeKind, Notice>,
}

/// Posts, expires, and dismisses notices.
pub struct NoticeCenter {
    board: Arc<Mutex<NoticeBoard>>,
    timers: Mutex<HashMap<NoticeKind, JoinHandle<()>>>,
    next_seq: AtomicU64,
    success_ttl: Duration,
    error_ttl: Duration,
}

impl NoticeCenter {
    pub fn new(success_ttl: Duration, error_ttl: Duration) -> Self {
        Self {
            board: Arc::new(Mutex::new(NoticeBoard::default())),
            timers: Mutex::new(HashMap::new()),
            next_seq: AtomicU64::new(0),
            success_ttl,
            error_ttl,
        }
    }

    fn ttl(&self, kind: NoticeKind) -> Duration {
        match kind {
            NoticeKind::Error => self.error_ttl,
            NoticeKind::Success | NoticeKind::Info => self.success_ttl,
        }
    }

    fn board(&self) -> MutexGuard<'_, NoticeBoard> {
        self.board.lock().expect("notice board lock poisoned")
    }

    fn timers(&self) -> MutexGuard<'_, HashMap<NoticeKind, JoinHandle<()>>> {
        self.timers.lock().expect("notice timers lock poisoned")
    }

    /// Show a notice, replacing any visible notice of the same kind and
    /// restarting that kind's expiry timer. Must be called from within a
    /// tokio runtime.
    pub fn post(&self, kind: NoticeKind, text: impl Into<String>) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.board().slots.insert(
            kind,
            Notice {
                kind,
                text: text.into(),
                seq,
            },
        );

        let board = Arc::clone(&self.board);
        let ttl = self.ttl(kind);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut board = board.lock().expect("notice board lock poisoned");
            if board.slots.get(&kind).is_some_and(|n| n.seq == seq) {
                board.slots.remove(&kind);
            }
        });

        if let Some(old) = self.timers().insert(kind, handle) {
            old.abort();
        }
    }

    /// Dismiss a visible notice and cancel its expiry timer.
    pub fn dismiss(&self, kind: NoticeKind) {
        if let Some(timer) = self.timers().remove(&kind) {
            timer.abort();
        }
        self.board().slots.remove(&kind);
    }

    /// Dismiss every visible notice.
    pub fn clear_all(&self) {
        for kind in NoticeKind::ALL {
            self.dismiss(kind);
        }
    }

    /// Currently visible notices, success first, then info, then error.
    pub fn current(&self) -> Vec<Notice> {
        let board = self.board();
        NoticeKind::ALL
            .iter()
            .filter_map(|kind| board.slots.get(kind).cloned())
            .collect()
    }

    /// The visible notice of one kind, if any.
    pub fn get(&self, kind: NoticeKind) -> Option<Notice> {
        self.board().slots.get(&kind).cloned()
    }
}
