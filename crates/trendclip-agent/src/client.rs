//! Agent service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{AgentError, AgentResult};
use crate::types::AgentReply;

/// Configuration for the agent client.
#[derive(Debug, Clone)]
pub struct AgentClientConfig {
    /// Base URL of the agent service
    pub base_url: String,
    /// Request timeout. Agent calls are long-latency; the remote may run
    /// multi-step sub-agent pipelines before replying.
    pub timeout: Duration,
}

impl Default for AgentClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            timeout: Duration::from_secs(300),
        }
    }
}

impl AgentClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("AGENT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8090".to_string()),
            timeout: Duration::from_secs(
                std::env::var("AGENT_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300),
            ),
        }
    }
}

/// Anything that can invoke a remote agent with a task description.
///
/// The engine is written against this trait so tests can drive the state
/// machine with scripted replies.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Invoke the agent identified by `agent_id` with a natural-language
    /// task description. `Err` means the call itself could not complete;
    /// a remote-reported failure comes back as `Ok` with `success: false`.
    async fn invoke(&self, task: &str, agent_id: &str) -> AgentResult<AgentReply>;
}

#[derive(Serialize)]
struct InvokeRequest<'a> {
    message: &'a str,
}

/// HTTP client for the agent service.
pub struct AgentClient {
    http: Client,
    config: AgentClientConfig,
}

impl AgentClient {
    /// Create a new agent client.
    pub fn new(config: AgentClientConfig) -> AgentResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AgentError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AgentResult<Self> {
        Self::new(AgentClientConfig::from_env())
    }
}

#[async_trait]
impl AgentInvoker for AgentClient {
    async fn invoke(&self, task: &str, agent_id: &str) -> AgentResult<AgentReply> {
        let url = format!("{}/agents/{}/invoke", self.config.base_url, agent_id);

        debug!("Invoking agent {} at {}", agent_id, url);

        let response = self
            .http
            .post(&url)
            .json(&InvokeRequest { message: task })
            .send()
            .await
            .map_err(AgentError::Network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::RequestFailed { status, body });
        }

        let body = response.text().await.map_err(AgentError::Network)?;
        let reply: AgentReply = serde_json::from_str(&body)?;
        Ok(reply)
    }
}
