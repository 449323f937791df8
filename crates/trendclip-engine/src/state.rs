//! Engine state container and snapshot.
//!
//! All mutable state lives in one container so that every mutation is
//! traceable to one of the workflow transitions or mutators in
//! [`crate::engine::Engine`].

use serde::{Deserialize, Serialize};

use trendclip_models::{
    ClipSession, ClipSet, PlatformFilter, SessionId, TargetPlatform, TrendSummary, TrendingVideo,
};

use crate::history::SessionHistory;
use crate::notice::Notice;
use crate::view::SortKey;

/// Lifecycle status of one workflow. The Succeeded/Failed outcomes resolve
/// back to Idle within a single transition; only Idle and Pending are ever
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Pending,
}

impl WorkflowStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, WorkflowStatus::Pending)
    }
}

/// The output of the most recent successful generation call, shown until the
/// selection changes or a new workflow clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClipResults {
    pub clips: ClipSet,
    pub source_video_title: String,
    pub processing_summary: String,
}

/// All engine state. Mutated only at the transition points of the two
/// workflows and the engine's mutators, on short critical sections.
#[derive(Debug)]
pub struct EngineState {
    /// Current trending videos, replaced wholesale by each discovery
    pub videos: Vec<TrendingVideo>,
    /// Summary of the most recent discovery (sticky across discoveries that
    /// omit it)
    pub summary: Option<TrendSummary>,
    /// When the current result set was fetched, as reported by the remote
    pub fetched_at: String,
    /// Whether `videos`/`summary` currently hold seeded sample data
    pub sample_active: bool,
    /// The video gating the generation workflow
    pub selected: Option<TrendingVideo>,
    /// Output of the most recent generation call
    pub clip_results: Option<ClipResults>,
    /// Completed generation sessions, newest first
    pub history: SessionHistory,
    /// Active platform filter
    pub filter: PlatformFilter,
    /// Active sort order
    pub sort: SortKey,
    /// Target platforms for generated clips
    pub targets: Vec<TargetPlatform>,
    /// Whether generated clips should include captions
    pub include_captions: bool,
    /// Requested number of clip variations
    pub clip_count: u32,
    /// Discovery workflow status
    pub discovery: WorkflowStatus,
    /// Generation workflow status
    pub generation: WorkflowStatus,
}

impl EngineState {
    pub fn new(default_clip_count: u32) -> Self {
        Self {
            videos: Vec::new(),
            summary: None,
            fetched_at: String::new(),
            sample_active: false,
            selected: None,
            clip_results: None,
            history: SessionHistory::new(),
            filter: PlatformFilter::All,
            sort: SortKey::TrendingRank,
            targets: TargetPlatform::ALL.to_vec(),
            include_captions: true,
            clip_count: default_clip_count,
            discovery: WorkflowStatus::Idle,
            generation: WorkflowStatus::Idle,
        }
    }
}

/// A cloned, render-ready view of the engine state.
#[derive(Debug, Clone, Serialize)]
pub struct EngineView {
    /// Videos after filtering and sorting
    pub videos: Vec<TrendingVideo>,
    pub summary: Option<TrendSummary>,
    pub fetched_at: String,
    pub selected: Option<TrendingVideo>,
    pub clip_results: Option<ClipResults>,
    /// Sessions, newest first
    pub sessions: Vec<ClipSession>,
    pub expanded_session: Option<SessionId>,
    pub filter: PlatformFilter,
    pub sort: SortKey,
    pub targets: Vec<TargetPlatform>,
    pub include_captions: bool,
    pub clip_count: u32,
    pub discovery_pending: bool,
    pub generation_pending: bool,
    /// IDs of agents with a call in flight
    pub active_agents: Vec<String>,
    /// Visible notices
    pub notices: Vec<Notice>,
}
