//! Trending video models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract;
use crate::platform::Platform;

/// An immutable snapshot of a discovered trending video.
///
/// Created only from a discovery payload or seeded sample data; never
/// mutated after creation. The whole list is replaced wholesale on the next
/// discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct TrendingVideo {
    /// Platform-qualified video ID
    #[serde(default)]
    pub video_id: String,

    /// Video title
    #[serde(default)]
    pub title: String,

    /// Creator handle
    #[serde(default)]
    pub creator_username: String,

    /// Creator display name
    #[serde(default)]
    pub creator_display_name: String,

    /// Thumbnail URL (possibly empty)
    #[serde(default)]
    pub thumbnail_url: String,

    /// Video URL (possibly empty)
    #[serde(default)]
    pub video_url: String,

    /// View count
    #[serde(default)]
    pub view_count: u64,

    /// Like count
    #[serde(default)]
    pub like_count: u64,

    /// Share count
    #[serde(default)]
    pub share_count: u64,

    /// Comment count
    #[serde(default)]
    pub comment_count: u64,

    /// Engagement score, nominally in [0, 100]
    #[serde(default)]
    pub engagement_score: f64,

    /// Ordered hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,

    /// Posted date (display string)
    #[serde(default)]
    pub posted_date: String,

    /// Duration in seconds
    #[serde(default)]
    pub duration_seconds: u64,

    /// 1-based trending rank; 0 = unranked
    #[serde(default)]
    pub trending_rank: u32,

    /// Raw platform string as reported by the remote
    #[serde(default)]
    pub platform: String,
}

impl TrendingVideo {
    /// Build a video from one element of a `trending_videos` payload array.
    ///
    /// Every field is read leniently: missing or mistyped fields become
    /// their defaults instead of failing the whole element.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        Self {
            video_id: extract::str_field(fields, "video_id"),
            title: extract::str_field(fields, "title"),
            creator_username: extract::str_field(fields, "creator_username"),
            creator_display_name: extract::str_field(fields, "creator_display_name"),
            thumbnail_url: extract::str_field(fields, "thumbnail_url"),
            video_url: extract::str_field(fields, "video_url"),
            view_count: extract::u64_field(fields, "view_count"),
            like_count: extract::u64_field(fields, "like_count"),
            share_count: extract::u64_field(fields, "share_count"),
            comment_count: extract::u64_field(fields, "comment_count"),
            engagement_score: extract::f64_field(fields, "engagement_score"),
            hashtags: extract::str_list_field(fields, "hashtags"),
            posted_date: extract::str_field(fields, "posted_date"),
            duration_seconds: extract::u64_field(fields, "duration_seconds"),
            trending_rank: extract::u64_field(fields, "trending_rank").min(u32::MAX as u64) as u32,
            platform: extract::str_field(fields, "platform"),
        }
    }

    /// Normalized platform for filtering and display.
    pub fn normalized_platform(&self) -> Platform {
        Platform::from_raw(&self.platform)
    }

    /// Engagement score clamped to [0, 100].
    pub fn engagement_score_clamped(&self) -> f64 {
        self.engagement_score.clamp(0.0, 100.0)
    }

    /// Whether the video carries a trending rank.
    pub fn is_ranked(&self) -> bool {
        self.trending_rank > 0
    }

    /// Display name with handle fallback.
    pub fn creator(&self) -> &str {
        if !self.creator_display_name.is_empty() {
            &self.creator_display_name
        } else if !self.creator_username.is_empty() {
            &self.creator_username
        } else {
            "Unknown Creator"
        }
    }
}

/// Aggregate counts and theme labels for one discovery result set.
///
/// 1:1 with the most recent discovery; replaced, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct TrendSummary {
    #[serde(default)]
    pub total_videos: u64,

    #[serde(default)]
    pub tiktok_count: u64,

    #[serde(default)]
    pub youtube_count: u64,

    #[serde(default)]
    pub instagram_count: u64,

    /// Ordered theme labels
    #[serde(default)]
    pub trending_themes: Vec<String>,
}

impl TrendSummary {
    /// Build a summary from a `summary` payload object, leniently.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        Self {
            total_videos: extract::u64_field(fields, "total_videos"),
            tiktok_count: extract::u64_field(fields, "tiktok_count"),
            youtube_count: extract::u64_field(fields, "youtube_count"),
            instagram_count: extract::u64_field(fields, "instagram_count"),
            trending_themes: extract::str_list_field(fields, "trending_themes"),
        }
    }
}
