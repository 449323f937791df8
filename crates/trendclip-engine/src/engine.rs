//! The orchestration engine.
//!
//! Two independent workflows (trend discovery, clip generation) share the
//! same lifecycle: Idle -> Pending -> (Succeeded | Failed) -> Idle. A
//! workflow method applies the Pending transition, releases the state lock,
//! awaits the agent call, then applies exactly one settling transition.
//! Failures never propagate past the workflow boundary; every outcome
//! resolves into Idle plus a notice.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use trendclip_agent::{builtin_agents, AgentDescriptor, AgentInvoker, Payload};
use trendclip_models::{
    ClipSession, PlatformFilter, SessionId, TargetPlatform, TrendingVideo,
};

use crate::config::EngineConfig;
use crate::notice::{NoticeCenter, NoticeKind};
use crate::projector::{project_discovery, project_generation};
use crate::sample;
use crate::state::{ClipResults, EngineState, EngineView, WorkflowStatus};
use crate::view::{derive_view, SortKey};

const DISCOVERY_TASK: &str = "Find the top trending videos across TikTok, YouTube, and Instagram \
                              right now. Return comprehensive data for each trending video.";
const DISCOVERY_EMPTY: &str = "No trending videos found. Try again in a moment.";
const DISCOVERY_FAILED: &str = "Failed to fetch trending videos. Please try again.";
const DISCOVERY_NETWORK: &str = "Network error. Please check your connection and try again.";

const GENERATION_EMPTY: &str =
    "No clips were generated. Try adjusting your settings and generating again.";
const GENERATION_FAILED: &str = "Failed to generate clips. Please try again.";
const GENERATION_NETWORK: &str = "Network error during clip generation. Please try again.";

/// How a settled workflow reports back to the user.
enum Outcome {
    Success(String),
    Info(String),
    Error(String),
}

/// Orchestrates the discovery and generation workflows over a shared state
/// container.
pub struct Engine<A: AgentInvoker> {
    agent: A,
    config: EngineConfig,
    state: Mutex<EngineState>,
    notices: NoticeCenter,
}

impl<A: AgentInvoker> Engine<A> {
    pub fn new(agent: A, config: EngineConfig) -> Self {
        let state = EngineState::new(config.default_clip_count);
        let notices = NoticeCenter::new(config.success_notice_ttl, config.error_notice_ttl);
        Self {
            agent,
            config,
            state: Mutex::new(state),
            notices,
        }
    }

    fn state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().expect("engine state lock poisoned")
    }

    // ── Workflows ──────────────────────────────────────────────

    /// Run the trend discovery workflow.
    ///
    /// Returns immediately without issuing a call if a discovery is already
    /// pending.
    pub async fn discover_trends(&self) {
        {
            let mut state = self.state();
            if state.discovery.is_pending() {
                debug!("Discovery already pending; ignoring request");
                return;
            }
            state.discovery = WorkflowStatus::Pending;
            // A new discovery also clears previously generated clips.
            state.clip_results = None;
        }
        self.notices.clear_all();

        let result = self
            .agent
            .invoke(DISCOVERY_TASK, &self.config.trend_agent_id)
            .await;

        let outcome = {
            let mut state = self.state();
            state.discovery = WorkflowStatus::Idle;
            match result {
                Ok(reply) if reply.success => {
                    let fields = Payload::from_result(reply.result()).into_map();
                    let projection = project_discovery(&fields);
                    let found = projection.videos.len();

                    state.videos = projection.videos;
                    state.sample_active = false;
                    if let Some(summary) = projection.summary {
                        state.summary = Some(summary);
                    }
                    state.fetched_at = projection.fetched_at;

                    info!(found, "Trend discovery completed");
                    if found > 0 {
                        Outcome::Success(format!(
                            "Found {found} trending videos across platforms"
                        ))
                    } else {
                        Outcome::Info(DISCOVERY_EMPTY.to_string())
                    }
                }
                Ok(reply) => {
                    Outcome::Error(reply.error.unwrap_or_else(|| DISCOVERY_FAILED.to_string()))
                }
                Err(err) => {
                    warn!("Trend discovery transport failure: {err}");
                    Outcome::Error(DISCOVERY_NETWORK.to_string())
                }
            }
        };
        self.post(outcome);
    }

    /// Run the clip generation workflow for the selected video.
    ///
    /// Returns immediately without issuing a call if a generation is already
    /// pending or no video is selected.
    pub async fn generate_clips(&self) {
        let (task, requested_title) = {
            let mut state = self.state();
            if state.generation.is_pending() {
                debug!("Generation already pending; ignoring request");
                return;
            }
            let Some(video) = state.selected.clone() else {
                warn!("Clip generation requested without a selected video");
                return;
            };
            state.generation = WorkflowStatus::Pending;
            state.clip_results = None;
            let task = build_generation_task(
                &video,
                &state.targets,
                state.clip_count,
                state.include_captions,
            );
            (task, video.title)
        };
        self.notices.clear_all();

        let result = self.agent.invoke(&task, &self.config.clip_agent_id).await;

        let outcome = {
            let mut state = self.state();
            state.generation = WorkflowStatus::Idle;
            match result {
                Ok(reply) if reply.success => {
                    let files = reply.artifact_files();
                    let fields = Payload::from_result(reply.result()).into_map();
                    let projection = project_generation(&fields, files, &requested_title);
                    let generated = projection.clips.len();

                    let session = ClipSession::new(
                        projection.source_video_title.clone(),
                        projection.clips.clone(),
                        projection.total_clips,
                        projection.processing_summary.clone(),
                    );
                    info!(session_id = %session.id, generated, "Recorded clip generation session");
                    state.history.record(session);

                    state.clip_results = Some(ClipResults {
                        clips: projection.clips,
                        source_video_title: projection.source_video_title,
                        processing_summary: projection.processing_summary,
                    });

                    if generated > 0 {
                        Outcome::Success(format!("Generated {generated} clips successfully!"))
                    } else {
                        Outcome::Info(GENERATION_EMPTY.to_string())
                    }
                }
                Ok(reply) => {
                    Outcome::Error(reply.error.unwrap_or_else(|| GENERATION_FAILED.to_string()))
                }
                Err(err) => {
                    warn!("Clip generation transport failure: {err}");
                    Outcome::Error(GENERATION_NETWORK.to_string())
                }
            }
        };
        self.post(outcome);
    }

    fn post(&self, outcome: Outcome) {
        match outcome {
            Outcome::Success(text) => self.notices.post(NoticeKind::Success, text),
            Outcome::Info(text) => self.notices.post(NoticeKind::Info, text),
            Outcome::Error(text) => self.notices.post(NoticeKind::Error, text),
        }
    }

    // ── Mutators ───────────────────────────────────────────────

    pub fn set_platform_filter(&self, filter: PlatformFilter) {
        self.state().filter = filter;
    }

    pub fn set_sort_key(&self, sort: SortKey) {
        self.state().sort = sort;
    }

    /// Select a video, gating the generation workflow on it. Clears any
    /// previously generated clips.
    pub fn select_video(&self, video: TrendingVideo) {
        let mut state = self.state();
        state.selected = Some(video);
        state.clip_results = None;
    }

    /// Clear the selection and any previously generated clips.
    pub fn clear_selection(&self) {
        let mut state = self.state();
        state.selected = None;
        state.clip_results = None;
    }

    /// Toggle a target platform for generated clips.
    pub fn toggle_target(&self, target: TargetPlatform) {
        let mut state = self.state();
        if let Some(pos) = state.targets.iter().position(|t| *t == target) {
            state.targets.remove(pos);
        } else {
            state.targets.push(target);
        }
    }

    pub fn set_captions(&self, include_captions: bool) {
        self.state().include_captions = include_captions;
    }

    pub fn set_clip_count(&self, count: u32) {
        self.state().clip_count = count.max(1);
    }

    /// Dismiss a visible notice before it expires.
    pub fn dismiss_notice(&self, kind: NoticeKind) {
        self.notices.dismiss(kind);
    }

    /// Expand or collapse a history session for detail viewing.
    pub fn toggle_session(&self, id: &SessionId) {
        self.state().history.toggle_expanded(id);
    }

    /// Seed or remove sample data. Removal only applies while the sample
    /// data has not been replaced by a live discovery; the seeded history
    /// session is left in place either way.
    pub fn set_sample_data(&self, enabled: bool) {
        let mut state = self.state();
        if enabled {
            state.videos = sample::sample_videos();
            state.summary = Some(sample::sample_summary());
            state.fetched_at = sample::SAMPLE_FETCHED_AT.to_string();
            state.sample_active = true;
            if state.history.is_empty() {
                state.history.record(sample::sample_session());
            }
        } else if state.sample_active {
            state.videos.clear();
            state.summary = None;
            state.fetched_at.clear();
            state.sample_active = false;
        }
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The current video list, filtered and sorted for display.
    pub fn videos(&self) -> Vec<TrendingVideo> {
        let state = self.state();
        derive_view(&state.videos, state.filter, state.sort)
    }

    /// The two agents this engine drives, for status display.
    pub fn agents(&self) -> Vec<AgentDescriptor> {
        let mut agents = builtin_agents();
        agents[0].id = self.config.trend_agent_id.clone();
        agents[1].id = self.config.clip_agent_id.clone();
        agents
    }

    /// A cloned, render-ready view of the whole engine state.
    pub fn snapshot(&self) -> EngineView {
        let state = self.state();

        let mut active_agents = Vec::new();
        if state.discovery.is_pending() {
            active_agents.push(self.config.trend_agent_id.clone());
        }
        if state.generation.is_pending() {
            active_agents.push(self.config.clip_agent_id.clone());
        }

        EngineView {
            videos: derive_view(&state.videos, state.filter, state.sort),
            summary: state.summary.clone(),
            fetched_at: state.fetched_at.clone(),
            selected: state.selected.clone(),
            clip_results: state.clip_results.clone(),
            sessions: state.history.sessions().to_vec(),
            expanded_session: state.history.expanded().cloned(),
            filter: state.filter,
            sort: state.sort,
            targets: state.targets.clone(),
            include_captions: state.include_captions,
            clip_count: state.clip_count,
            discovery_pending: state.discovery.is_pending(),
            generation_pending: state.generation.is_pending(),
            active_agents,
            notices: self.notices.current(),
        }
    }
}

/// Compose the natural-language generation task for the selected video.
fn build_generation_task(
    video: &TrendingVideo,
    targets: &[TargetPlatform],
    clip_count: u32,
    include_captions: bool,
) -> String {
    let platform_names: Vec<&str> = targets.iter().map(|t| t.label()).collect();
    let captions_clause = if include_captions {
        " with captions"
    } else {
        " without captions"
    };
    format!(
        "Analyze this video and generate optimized clips: Title: {}, Video ID: {}, Platform: {}, \
         Duration: {}s. Target platforms: {}. Generate {} clip variations{}.",
        video.title,
        video.video_id,
        video.platform,
        video.duration_seconds,
        platform_names.join(", "),
        clip_count,
        captions_clause,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_task_wording() {
        let video = TrendingVideo {
            video_id: "yt_002".to_string(),
            title: "I Built a Robot".to_string(),
            platform: "youtube".to_string(),
            duration_seconds: 720,
            ..Default::default()
        };
        let task = build_generation_task(
            &video,
            &[TargetPlatform::Tiktok, TargetPlatform::YoutubeShorts],
            5,
            true,
        );
        assert_eq!(
            task,
            "Analyze this video and generate optimized clips: Title: I Built a Robot, \
             Video ID: yt_002, Platform: youtube, Duration: 720s. Target platforms: TikTok, \
             YouTube Shorts. Generate 5 clip variations with captions."
        );
    }

    #[test]
    fn test_generation_task_without_captions() {
        let video = TrendingVideo::default();
        let task = build_generation_task(&video, &[TargetPlatform::InstagramReels], 3, false);
        assert!(task.ends_with("Generate 3 clip variations without captions."));
        assert!(task.contains("Target platforms: Instagram Reels."));
    }
}
