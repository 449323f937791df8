//! Generated clip models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract;

/// Highlight classification for styling, matched case-insensitively against
/// the free-form `highlight_type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    Hook,
    Punchline,
    KeyScene,
    ViralMoment,
    Other,
}

impl HighlightKind {
    /// Classify a free-form highlight tag.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "hook" => HighlightKind::Hook,
            "punchline" => HighlightKind::Punchline,
            "key scene" => HighlightKind::KeyScene,
            "viral moment" => HighlightKind::ViralMoment,
            _ => HighlightKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightKind::Hook => "hook",
            HighlightKind::Punchline => "punchline",
            HighlightKind::KeyScene => "key scene",
            HighlightKind::ViralMoment => "viral moment",
            HighlightKind::Other => "other",
        }
    }
}

/// One candidate clip derived from a source video. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GeneratedClip {
    /// Clip ID
    #[serde(default)]
    pub clip_id: String,

    /// ID of the source video
    #[serde(default)]
    pub source_video_id: String,

    /// Human title
    #[serde(default)]
    pub clip_title: String,

    /// Start timestamp (display string, e.g. "02:15")
    #[serde(default)]
    pub start_time: String,

    /// End timestamp (display string)
    #[serde(default)]
    pub end_time: String,

    /// Duration in seconds
    #[serde(default)]
    pub duration_seconds: u64,

    /// Target aspect ratio (e.g. "9:16")
    #[serde(default)]
    pub aspect_ratio: String,

    /// Target platform (free-form label)
    #[serde(default)]
    pub target_platform: String,

    /// Whether captions were burned in
    #[serde(default)]
    pub captions_included: bool,

    /// Rendered clip URL (possibly empty)
    #[serde(default)]
    pub clip_url: String,

    /// Thumbnail URL (possibly empty)
    #[serde(default)]
    pub thumbnail_url: String,

    /// Free-form highlight tag ("Hook", "Punchline", ...)
    #[serde(default)]
    pub highlight_type: String,

    /// Confidence score in [0, 1]
    #[serde(default)]
    pub confidence_score: f64,
}

impl GeneratedClip {
    /// Build a clip from one element of a `clips` payload array, leniently.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        Self {
            clip_id: extract::str_field(fields, "clip_id"),
            source_video_id: extract::str_field(fields, "source_video_id"),
            clip_title: extract::str_field(fields, "clip_title"),
            start_time: extract::str_field(fields, "start_time"),
            end_time: extract::str_field(fields, "end_time"),
            duration_seconds: extract::u64_field(fields, "duration_seconds"),
            aspect_ratio: extract::str_field(fields, "aspect_ratio"),
            target_platform: extract::str_field(fields, "target_platform"),
            captions_included: extract::bool_field(fields, "captions_included"),
            clip_url: extract::str_field(fields, "clip_url"),
            thumbnail_url: extract::str_field(fields, "thumbnail_url"),
            highlight_type: extract::str_field(fields, "highlight_type"),
            confidence_score: extract::f64_field(fields, "confidence_score"),
        }
    }

    /// Highlight classification of the free-form tag.
    pub fn highlight_kind(&self) -> HighlightKind {
        HighlightKind::parse(&self.highlight_type)
    }

    /// Confidence as a whole percentage, clamped to [0, 100].
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence_score.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// A downloadable output paired positionally with a generated clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ArtifactFile {
    /// Download URL
    #[serde(default)]
    pub file_url: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File format label (e.g. "mp4")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_type: Option<String>,
}

impl ArtifactFile {
    /// Build an artifact file from one element of an `artifact_files` array.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        Self {
            file_url: extract::str_field(fields, "file_url"),
            name: extract::opt_str_field(fields, "name"),
            format_type: extract::opt_str_field(fields, "format_type"),
        }
    }
}

/// A clip and its positionally-matched artifact file, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipPair {
    pub clip: GeneratedClip,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactFile>,
}

/// The combined output of one generation call.
///
/// Clips and artifact files are matched by array index, not by ID. Files
/// beyond the clip count land in `unmatched_files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ClipSet {
    #[serde(default)]
    pub pairs: Vec<ClipPair>,

    /// Artifact files with no clip at their index.
    #[serde(default)]
    pub unmatched_files: Vec<ArtifactFile>,
}

impl ClipSet {
    /// Pair clips with artifact files by index.
    pub fn pair(clips: Vec<GeneratedClip>, mut files: Vec<ArtifactFile>) -> Self {
        let unmatched_files = if files.len() > clips.len() {
            files.split_off(clips.len())
        } else {
            Vec::new()
        };
        let mut files = files.into_iter();
        let pairs = clips
            .into_iter()
            .map(|clip| ClipPair {
                clip,
                artifact: files.next(),
            })
            .collect();
        Self {
            pairs,
            unmatched_files,
        }
    }

    /// Number of clips.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The clips, in order.
    pub fn clips(&self) -> impl Iterator<Item = &GeneratedClip> {
        self.pairs.iter().map(|p| &p.clip)
    }

    /// All artifact files in their original order (paired, then unmatched).
    pub fn artifact_files(&self) -> impl Iterator<Item = &ArtifactFile> {
        self.pairs
            .iter()
            .filter_map(|p| p.artifact.as_ref())
            .chain(self.unmatched_files.iter())
    }
}
