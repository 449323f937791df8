//! Agent call envelope and descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use trendclip_models::ArtifactFile;

/// Agent ID for the trend discovery manager.
pub const TREND_DISCOVERY_AGENT: &str = "699bae65ac313b176acdea2e";

/// Agent ID for the clip generator.
pub const CLIP_GENERATOR_AGENT: &str = "699bae76ba7d62583e0a4a8f";

/// Envelope returned by every agent call.
///
/// Every field is defaulted: the remote omits fields freely, and a missing
/// `success` reads as failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentReply {
    /// Explicit success indicator
    #[serde(default)]
    pub success: bool,

    /// Primary result body (present on success)
    #[serde(default)]
    pub response: Option<ReplyBody>,

    /// Side-channel outputs (artifact files etc.)
    #[serde(default)]
    pub module_outputs: Option<ModuleOutputs>,

    /// Human-readable failure message (present on failure, sometimes)
    #[serde(default)]
    pub error: Option<String>,
}

/// Primary result body. `result` may be a raw JSON string, an object with
/// string-encoded fields, or null; see [`crate::Payload`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub result: Value,
}

/// Side-channel outputs attached to the envelope outside the result body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleOutputs {
    /// Downloadable artifact files, expected array-shaped
    #[serde(default)]
    pub artifact_files: Value,
}

impl AgentReply {
    /// Successful reply wrapping a result value.
    pub fn succeeded(result: Value) -> Self {
        Self {
            success: true,
            response: Some(ReplyBody { result }),
            module_outputs: None,
            error: None,
        }
    }

    /// Failed reply with an optional remote-supplied message.
    pub fn failed(error: Option<String>) -> Self {
        Self {
            success: false,
            response: None,
            module_outputs: None,
            error,
        }
    }

    /// The raw result value, if the envelope carries one.
    pub fn result(&self) -> Option<&Value> {
        self.response.as_ref().map(|r| &r.result)
    }

    /// The side-channel artifact file list; empty when absent or not
    /// array-shaped.
    pub fn artifact_files(&self) -> Vec<ArtifactFile> {
        self.module_outputs
            .as_ref()
            .and_then(|m| m.artifact_files.as_array())
            .map(|files| files.iter().map(ArtifactFile::from_value).collect())
            .unwrap_or_default()
    }
}

/// Static description of a known agent, for status display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub id: String,
    pub name: String,
    pub purpose: String,
}

/// The two agents this system drives.
pub fn builtin_agents() -> Vec<AgentDescriptor> {
    vec![
        AgentDescriptor {
            id: TREND_DISCOVERY_AGENT.to_string(),
            name: "Trend Discovery Manager".to_string(),
            purpose: "Coordinates TikTok, YouTube, Instagram sub-agents to discover trending content"
                .to_string(),
        },
        AgentDescriptor {
            id: CLIP_GENERATOR_AGENT.to_string(),
            name: "Clip Generator Agent".to_string(),
            purpose:
                "Analyzes videos and generates optimized clips with captions for target platforms"
                    .to_string(),
        },
    ]
}
