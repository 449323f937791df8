//! Engine configuration.

use std::time::Duration;

use trendclip_agent::{CLIP_GENERATOR_AGENT, TREND_DISCOVERY_AGENT};

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Agent ID used for trend discovery
    pub trend_agent_id: String,
    /// Agent ID used for clip generation
    pub clip_agent_id: String,
    /// How long success and informational notices stay visible
    pub success_notice_ttl: Duration,
    /// How long error notices stay visible
    pub error_notice_ttl: Duration,
    /// Default number of clip variations requested per generation
    pub default_clip_count: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_agent_id: TREND_DISCOVERY_AGENT.to_string(),
            clip_agent_id: CLIP_GENERATOR_AGENT.to_string(),
            success_notice_ttl: Duration::from_secs(5),
            error_notice_ttl: Duration::from_secs(8),
            default_clip_count: 5,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            trend_agent_id: std::env::var("TREND_AGENT_ID")
                .unwrap_or_else(|_| TREND_DISCOVERY_AGENT.to_string()),
            clip_agent_id: std::env::var("CLIP_AGENT_ID")
                .unwrap_or_else(|_| CLIP_GENERATOR_AGENT.to_string()),
            success_notice_ttl: Duration::from_secs(
                std::env::var("SUCCESS_NOTICE_TTL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            error_notice_ttl: Duration::from_secs(
                std::env::var("ERROR_NOTICE_TTL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8),
            ),
            default_clip_count: std::env::var("DEFAULT_CLIP_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.trend_agent_id, TREND_DISCOVERY_AGENT);
        assert_eq!(config.success_notice_ttl, Duration::from_secs(5));
        assert_eq!(config.error_notice_ttl, Duration::from_secs(8));
        assert_eq!(config.default_clip_count, 5);
    }
}
