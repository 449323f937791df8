//! Projection of normalized payloads into domain entities.
//!
//! Both projections are total: any missing or wrongly-shaped field degrades
//! to a default, never to an error.

use serde_json::{Map, Value};

use trendclip_models::{ArtifactFile, ClipSet, GeneratedClip, TrendSummary, TrendingVideo};

/// Result of projecting a discovery payload.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryProjection {
    /// Replaces the current video list unconditionally.
    pub videos: Vec<TrendingVideo>,
    /// `None` means the payload carried no summary; the prior summary stays.
    pub summary: Option<TrendSummary>,
    pub fetched_at: String,
}

/// Project a normalized discovery payload.
pub fn project_discovery(fields: &Map<String, Value>) -> DiscoveryProjection {
    let videos = fields
        .get("trending_videos")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(TrendingVideo::from_value).collect())
        .unwrap_or_default();

    let summary = fields
        .get("summary")
        .filter(|v| v.is_object())
        .map(TrendSummary::from_value);

    let fetched_at = fields
        .get("fetched_at")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    DiscoveryProjection {
        videos,
        summary,
        fetched_at,
    }
}

/// Result of projecting a generation payload.
#[derive(Debug, Clone, Default)]
pub struct GenerationProjection {
    /// Clips paired positionally with their artifact files.
    pub clips: ClipSet,
    pub source_video_title: String,
    pub processing_summary: String,
    /// Count as declared by the remote, falling back to the actual count.
    pub total_clips: u64,
}

/// Project a normalized generation payload. `artifact_files` comes from the
/// envelope's side channel, not the result body; `requested_title` is the
/// selected video's title, used when the payload omits its own.
pub fn project_generation(
    fields: &Map<String, Value>,
    artifact_files: Vec<ArtifactFile>,
    requested_title: &str,
) -> GenerationProjection {
    let clips: Vec<GeneratedClip> = fields
        .get("clips")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(GeneratedClip::from_value).collect())
        .unwrap_or_default();

    let source_video_title = fields
        .get("source_video_title")
        .and_then(Value::as_str)
        .unwrap_or(requested_title)
        .to_string();

    let processing_summary = fields
        .get("processing_summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let total_clips = fields
        .get("total_clips_generated")
        .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64)))
        .unwrap_or(clips.len() as u64);

    GenerationProjection {
        total_clips,
        clips: ClipSet::pair(clips, artifact_files),
        source_video_title,
        processing_summary,
    }
}
