//! TrendClip engine binary.
//!
//! Runs one trend discovery pass against the configured agent service and
//! logs the derived view. Rendering proper lives elsewhere; this binary is
//! the wiring: env, logging, config, client, engine.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trendclip_agent::AgentClient;
use trendclip_engine::{Engine, EngineConfig};
use trendclip_models::utils::{format_count, format_duration};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("trendclip=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting trendclip");

    let config = EngineConfig::from_env();
    let client = AgentClient::from_env().context("Failed to create agent client")?;
    let engine = Engine::new(client, config);

    for agent in engine.agents() {
        info!("Agent {} ({}): {}", agent.name, agent.id, agent.purpose);
    }

    engine.discover_trends().await;

    let view = engine.snapshot();
    for notice in &view.notices {
        info!("[{:?}] {}", notice.kind, notice.text);
    }
    if let Some(summary) = &view.summary {
        info!(
            "{} videos (tiktok {}, youtube {}, instagram {}); themes: {}",
            summary.total_videos,
            summary.tiktok_count,
            summary.youtube_count,
            summary.instagram_count,
            summary.trending_themes.join(", "),
        );
    }
    for video in &view.videos {
        info!(
            "#{} [{}] {} by {}: {} views, {} shares, {} long, engagement {:.1}",
            video.trending_rank,
            video.normalized_platform(),
            video.title,
            video.creator(),
            format_count(video.view_count),
            format_count(video.share_count),
            format_duration(video.duration_seconds),
            video.engagement_score_clamped(),
        );
    }
    if view.videos.is_empty() {
        info!("No trending videos to show");
    }

    Ok(())
}
