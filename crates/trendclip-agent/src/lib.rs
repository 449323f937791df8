//! Client for the remote AI agent service.
//!
//! This crate provides:
//! - The success/failure envelope returned by agent calls (`AgentReply`)
//! - Normalization of loosely-typed result payloads (`Payload`)
//! - The `AgentInvoker` trait and its HTTP implementation (`AgentClient`)

pub mod client;
pub mod error;
pub mod payload;
pub mod types;

pub use client::{AgentClient, AgentClientConfig, AgentInvoker};
pub use error::{AgentError, AgentResult};
pub use payload::Payload;
pub use types::{
    builtin_agents, AgentDescriptor, AgentReply, ModuleOutputs, ReplyBody, CLIP_GENERATOR_AGENT,
    TREND_DISCOVERY_AGENT,
};
