//! Orchestration engine for the TrendClip backend.
//!
//! The engine drives the two agent workflows (trend discovery, clip
//! generation), projects their loosely-typed results into domain entities,
//! and maintains the derived view state: platform filter, sort order,
//! selection, transient notices, and the session history.

pub mod config;
pub mod engine;
pub mod history;
pub mod notice;
pub mod projector;
pub mod sample;
pub mod state;
pub mod view;

pub use config::EngineConfig;
pub use engine::Engine;
pub use history::SessionHistory;
pub use notice::{Notice, NoticeCenter, NoticeKind};
pub use state::{ClipResults, EngineState, EngineView, WorkflowStatus};
pub use view::{derive_view, SortKey};
