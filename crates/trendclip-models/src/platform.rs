//! Platform identification and normalization.
//!
//! Remote payloads spell platforms loosely ("TikTok", "tik tok", "YT",
//! "insta", ...). Normalization is case-insensitive substring matching
//! against the known platform family; unrecognized values pass through
//! lowercased so filtering still works on them.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A normalized source platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Tiktok,
    Youtube,
    Instagram,
    /// Platform field was missing or empty.
    Unknown,
    /// Unrecognized platform, kept verbatim (lowercased, trimmed).
    Other(String),
}

impl Platform {
    /// Normalize a raw platform string from a remote payload.
    pub fn from_raw(raw: &str) -> Self {
        let p = raw.trim().to_lowercase();
        if p.is_empty() {
            return Platform::Unknown;
        }
        if p.contains("tiktok") || p.contains("tik tok") {
            return Platform::Tiktok;
        }
        if p.contains("youtube") || p.contains("yt") {
            return Platform::Youtube;
        }
        if p.contains("instagram") || p.contains("ig") || p.contains("insta") {
            return Platform::Instagram;
        }
        Platform::Other(p)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Unknown => "unknown",
            Platform::Other(s) => s,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Unknown => "Unknown",
            Platform::Other(s) => s,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Active platform filter for the discovery view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFilter {
    /// No filtering; every video passes.
    #[default]
    All,
    Tiktok,
    Youtube,
    Instagram,
}

impl PlatformFilter {
    /// Whether a video with the given raw platform string passes this filter.
    pub fn admits(&self, raw_platform: &str) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Tiktok => Platform::from_raw(raw_platform) == Platform::Tiktok,
            PlatformFilter::Youtube => Platform::from_raw(raw_platform) == Platform::Youtube,
            PlatformFilter::Instagram => Platform::from_raw(raw_platform) == Platform::Instagram,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFilter::All => "all",
            PlatformFilter::Tiktok => "tiktok",
            PlatformFilter::Youtube => "youtube",
            PlatformFilter::Instagram => "instagram",
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target platform for generated clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetPlatform {
    Tiktok,
    YoutubeShorts,
    InstagramReels,
}

impl TargetPlatform {
    /// All supported targets, in display order.
    pub const ALL: [TargetPlatform; 3] = [
        TargetPlatform::Tiktok,
        TargetPlatform::YoutubeShorts,
        TargetPlatform::InstagramReels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::Tiktok => "tiktok",
            TargetPlatform::YoutubeShorts => "youtube_shorts",
            TargetPlatform::InstagramReels => "instagram_reels",
        }
    }

    /// Label used in generation task descriptions ("YouTube Shorts", ...).
    pub fn label(&self) -> &'static str {
        match self {
            TargetPlatform::Tiktok => "TikTok",
            TargetPlatform::YoutubeShorts => "YouTube Shorts",
            TargetPlatform::InstagramReels => "Instagram Reels",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_normalization() {
        assert_eq!(Platform::from_raw("TikTok"), Platform::Tiktok);
        assert_eq!(Platform::from_raw("  tik tok "), Platform::Tiktok);
        assert_eq!(Platform::from_raw("YouTube Shorts"), Platform::Youtube);
        assert_eq!(Platform::from_raw("YT"), Platform::Youtube);
        assert_eq!(Platform::from_raw("Instagram Reels"), Platform::Instagram);
        assert_eq!(Platform::from_raw("insta"), Platform::Instagram);
        assert_eq!(Platform::from_raw("IG"), Platform::Instagram);
    }

    #[test]
    fn test_platform_passthrough_and_unknown() {
        assert_eq!(Platform::from_raw(""), Platform::Unknown);
        assert_eq!(Platform::from_raw("   "), Platform::Unknown);
        assert_eq!(
            Platform::from_raw("Vimeo"),
            Platform::Other("vimeo".to_string())
        );
        assert_eq!(Platform::from_raw("Vimeo").as_str(), "vimeo");
    }

    #[test]
    fn test_filter_admits() {
        assert!(PlatformFilter::All.admits("anything"));
        assert!(PlatformFilter::Tiktok.admits("Tik Tok"));
        assert!(!PlatformFilter::Tiktok.admits("youtube"));
        assert!(PlatformFilter::Youtube.admits("yt shorts"));
        assert!(!PlatformFilter::Instagram.admits(""));
    }

    #[test]
    fn test_target_labels() {
        assert_eq!(TargetPlatform::YoutubeShorts.label(), "YouTube Shorts");
        assert_eq!(TargetPlatform::Tiktok.as_str(), "tiktok");
        assert_eq!(TargetPlatform::ALL.len(), 3);
    }
}
