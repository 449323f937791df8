//! View derivation: pure filtering and sorting of the video collection.
//!
//! Derivation holds no state of its own; it is recomputed from the source
//! collection on demand and never mutates it.

use std::fmt;

use serde::{Deserialize, Serialize};

use trendclip_models::{PlatformFilter, TrendingVideo};

/// Rank value that sorts unranked videos after every ranked one.
const UNRANKED_SENTINEL: u32 = u32::MAX;

/// Active sort order for the discovery view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending trending rank, unranked last
    #[default]
    TrendingRank,
    /// Descending view count
    Views,
    /// Descending share count
    Shares,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TrendingRank => "trending",
            SortKey::Views => "views",
            SortKey::Shares => "shares",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::TrendingRank => "Trending",
            SortKey::Views => "Most Viewed",
            SortKey::Shares => "Most Shared",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter then stably sort a video collection for display.
pub fn derive_view(
    videos: &[TrendingVideo],
    filter: PlatformFilter,
    sort: SortKey,
) -> Vec<TrendingVideo> {
    let mut view: Vec<TrendingVideo> = videos
        .iter()
        .filter(|v| filter.admits(&v.platform))
        .cloned()
        .collect();

    match sort {
        SortKey::TrendingRank => view.sort_by_key(|v| {
            if v.trending_rank == 0 {
                UNRANKED_SENTINEL
            } else {
                v.trending_rank
            }
        }),
        SortKey::Views => view.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        SortKey::Shares => view.sort_by(|a, b| b.share_count.cmp(&a.share_count)),
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, platform: &str, views: u64, shares: u64, rank: u32) -> TrendingVideo {
        TrendingVideo {
            video_id: id.to_string(),
            platform: platform.to_string(),
            view_count: views,
            share_count: shares,
            trending_rank: rank,
            ..Default::default()
        }
    }

    fn ids(view: &[TrendingVideo]) -> Vec<&str> {
        view.iter().map(|v| v.video_id.as_str()).collect()
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let videos = vec![
            video("a", "tiktok", 10, 1, 1),
            video("b", "youtube", 20, 2, 2),
            video("c", "vimeo", 30, 3, 3),
        ];
        let view = derive_view(&videos, PlatformFilter::All, SortKey::TrendingRank);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_filter_by_platform() {
        let videos = vec![
            video("a", "TikTok", 10, 1, 1),
            video("b", "youtube shorts", 20, 2, 2),
            video("c", "tik tok", 30, 3, 3),
        ];
        let view = derive_view(&videos, PlatformFilter::Tiktok, SortKey::TrendingRank);
        assert_eq!(ids(&view), vec!["a", "c"]);
        for v in &view {
            assert!(PlatformFilter::Tiktok.admits(&v.platform));
        }
    }

    #[test]
    fn test_sort_by_rank_unranked_last() {
        let videos = vec![
            video("unranked", "tiktok", 0, 0, 0),
            video("third", "tiktok", 0, 0, 3),
            video("first", "tiktok", 0, 0, 1),
        ];
        let view = derive_view(&videos, PlatformFilter::All, SortKey::TrendingRank);
        assert_eq!(ids(&view), vec!["first", "third", "unranked"]);
    }

    #[test]
    fn test_sort_by_views_descending() {
        let videos = vec![
            video("low", "tiktok", 100, 0, 0),
            video("high", "tiktok", 900, 0, 0),
            video("mid", "tiktok", 500, 0, 0),
        ];
        let view = derive_view(&videos, PlatformFilter::All, SortKey::Views);
        assert_eq!(ids(&view), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_sort_by_shares_descending() {
        let videos = vec![
            video("a", "tiktok", 0, 5, 0),
            video("b", "tiktok", 0, 50, 0),
        ];
        let view = derive_view(&videos, PlatformFilter::All, SortKey::Shares);
        assert_eq!(ids(&view), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let videos = vec![
            video("a", "tiktok", 100, 0, 0),
            video("b", "tiktok", 100, 0, 0),
            video("c", "tiktok", 100, 0, 0),
        ];
        let view = derive_view(&videos, PlatformFilter::All, SortKey::Views);
        assert_eq!(ids(&view), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_derivation_never_mutates_source() {
        let videos = vec![
            video("b", "tiktok", 10, 0, 2),
            video("a", "tiktok", 20, 0, 1),
        ];
        let before = videos.clone();
        let _ = derive_view(&videos, PlatformFilter::All, SortKey::TrendingRank);
        assert_eq!(videos, before);
    }
}
