//! Seeded sample data for demoing the engine without live agents.

use chrono::{DateTime, Utc};

use trendclip_models::{ClipSession, ClipSet, GeneratedClip, SessionId, TrendSummary, TrendingVideo};

/// Fetch timestamp attached to the sample result set.
pub const SAMPLE_FETCHED_AT: &str = "2026-02-23T12:00:00Z";

/// Six sample trending videos, two per platform.
pub fn sample_videos() -> Vec<TrendingVideo> {
    vec![
        TrendingVideo {
            video_id: "tt_001".into(),
            title: "POV: When the bass drops at 3am".into(),
            creator_username: "@beatdropper".into(),
            creator_display_name: "BeatDropper".into(),
            view_count: 12_500_000,
            like_count: 3_200_000,
            share_count: 890_000,
            comment_count: 145_000,
            engagement_score: 94.5,
            hashtags: tags(&["#bass", "#edm", "#vibes", "#fyp"]),
            posted_date: "2026-02-21".into(),
            duration_seconds: 45,
            trending_rank: 1,
            platform: "tiktok".into(),
            ..Default::default()
        },
        TrendingVideo {
            video_id: "yt_002".into(),
            title: "I Built a Robot That Cooks Dinner - Gone Wrong".into(),
            creator_username: "@techcrafter".into(),
            creator_display_name: "TechCrafter".into(),
            view_count: 8_700_000,
            like_count: 620_000,
            share_count: 340_000,
            comment_count: 89_000,
            engagement_score: 88.2,
            hashtags: tags(&["#robotics", "#diy", "#fail", "#cooking"]),
            posted_date: "2026-02-20".into(),
            duration_seconds: 720,
            trending_rank: 2,
            platform: "youtube".into(),
            ..Default::default()
        },
        TrendingVideo {
            video_id: "ig_003".into(),
            title: "Sunset timelapse from my balcony in Tokyo".into(),
            creator_username: "@tokyodreams".into(),
            creator_display_name: "Tokyo Dreams".into(),
            view_count: 5_400_000,
            like_count: 1_800_000,
            share_count: 560_000,
            comment_count: 67_000,
            engagement_score: 91.1,
            hashtags: tags(&["#tokyo", "#sunset", "#timelapse", "#japan"]),
            posted_date: "2026-02-22".into(),
            duration_seconds: 60,
            trending_rank: 3,
            platform: "instagram".into(),
            ..Default::default()
        },
        TrendingVideo {
            video_id: "tt_004".into(),
            title: "This makeup hack changed everything".into(),
            creator_username: "@glamqueen".into(),
            creator_display_name: "Glam Queen".into(),
            view_count: 9_800_000,
            like_count: 2_100_000,
            share_count: 1_200_000,
            comment_count: 210_000,
            engagement_score: 92.7,
            hashtags: tags(&["#makeup", "#beauty", "#hack", "#grwm"]),
            posted_date: "2026-02-21".into(),
            duration_seconds: 32,
            trending_rank: 4,
            platform: "tiktok".into(),
            ..Default::default()
        },
        TrendingVideo {
            video_id: "yt_005".into(),
            title: "24 Hours Living as a Medieval Knight".into(),
            creator_username: "@historynut".into(),
            creator_display_name: "History Nut".into(),
            view_count: 6_300_000,
            like_count: 450_000,
            share_count: 280_000,
            comment_count: 56_000,
            engagement_score: 85.4,
            hashtags: tags(&["#medieval", "#challenge", "#history", "#knight"]),
            posted_date: "2026-02-19".into(),
            duration_seconds: 1200,
            trending_rank: 5,
            platform: "youtube".into(),
            ..Default::default()
        },
        TrendingVideo {
            video_id: "ig_006".into(),
            title: "Street food tour in Bangkok - must try!".into(),
            creator_username: "@foodwanderer".into(),
            creator_display_name: "Food Wanderer".into(),
            view_count: 4_200_000,
            like_count: 980_000,
            share_count: 410_000,
            comment_count: 73_000,
            engagement_score: 87.9,
            hashtags: tags(&["#streetfood", "#bangkok", "#foodie", "#travel"]),
            posted_date: "2026-02-22".into(),
            duration_seconds: 90,
            trending_rank: 6,
            platform: "instagram".into(),
            ..Default::default()
        },
    ]
}

/// Summary matching the sample video set.
pub fn sample_summary() -> TrendSummary {
    TrendSummary {
        total_videos: 6,
        tiktok_count: 2,
        youtube_count: 2,
        instagram_count: 2,
        trending_themes: tags(&[
            "Music & Bass",
            "DIY & Tech",
            "Travel",
            "Beauty",
            "Food",
            "History",
        ]),
    }
}

fn sample_clips() -> Vec<GeneratedClip> {
    vec![
        GeneratedClip {
            clip_id: "cl_001".into(),
            source_video_id: "yt_002".into(),
            clip_title: "Robot Arm Malfunction Moment".into(),
            start_time: "02:15".into(),
            end_time: "02:45".into(),
            duration_seconds: 30,
            aspect_ratio: "9:16".into(),
            target_platform: "TikTok".into(),
            captions_included: true,
            highlight_type: "Hook".into(),
            confidence_score: 0.95,
            ..Default::default()
        },
        GeneratedClip {
            clip_id: "cl_002".into(),
            source_video_id: "yt_002".into(),
            clip_title: "The Big Reveal".into(),
            start_time: "08:30".into(),
            end_time: "09:10".into(),
            duration_seconds: 40,
            aspect_ratio: "9:16".into(),
            target_platform: "Instagram Reels".into(),
            captions_included: true,
            highlight_type: "Punchline".into(),
            confidence_score: 0.88,
            ..Default::default()
        },
        GeneratedClip {
            clip_id: "cl_003".into(),
            source_video_id: "yt_002".into(),
            clip_title: "Epic Kitchen Fail Compilation".into(),
            start_time: "05:00".into(),
            end_time: "06:00".into(),
            duration_seconds: 60,
            aspect_ratio: "1:1".into(),
            target_platform: "YouTube Shorts".into(),
            captions_included: true,
            highlight_type: "Key Scene".into(),
            confidence_score: 0.82,
            ..Default::default()
        },
    ]
}

/// A pre-baked history session shown when sample data is enabled.
pub fn sample_session() -> ClipSession {
    ClipSession {
        id: SessionId::from_string("sample_session_1"),
        source_video_title: "I Built a Robot That Cooks Dinner - Gone Wrong".into(),
        clips: ClipSet::pair(sample_clips(), Vec::new()),
        total_clips: 3,
        processing_summary: "Successfully generated 3 clips targeting TikTok, Instagram Reels, \
                             and YouTube Shorts with auto-generated captions."
            .into(),
        generated_at: DateTime::parse_from_rfc3339("2026-02-23T11:30:00Z")
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendclip_models::{HighlightKind, Platform};

    #[test]
    fn test_sample_set_matches_summary() {
        let videos = sample_videos();
        let summary = sample_summary();
        assert_eq!(videos.len() as u64, summary.total_videos);

        let count = |p: Platform| {
            videos
                .iter()
                .filter(|v| v.normalized_platform() == p)
                .count() as u64
        };
        assert_eq!(count(Platform::Tiktok), summary.tiktok_count);
        assert_eq!(count(Platform::Youtube), summary.youtube_count);
        assert_eq!(count(Platform::Instagram), summary.instagram_count);
    }

    #[test]
    fn test_sample_videos_are_ranked() {
        let videos = sample_videos();
        for (i, video) in videos.iter().enumerate() {
            assert_eq!(video.trending_rank as usize, i + 1);
        }
    }

    #[test]
    fn test_sample_session_shape() {
        let session = sample_session();
        assert_eq!(session.clip_count(), 3);
        assert_eq!(session.total_clips, 3);
        assert_eq!(
            session.clips.pairs[0].clip.highlight_kind(),
            HighlightKind::Hook
        );
    }
}
