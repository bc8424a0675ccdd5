//! Trait seams for the venture backend
//!
//! The analysis pipeline and the conversation session depend on these traits
//! rather than on `ApiClient` directly, so tests can substitute scripted
//! in-process transports.

use crate::error::Result;
use crate::payloads::{
    ChatReply, FinancialAssumptions, FinancialProjection, MarketChartsResponse, MvpRoadmap,
    ResearchReport,
};
use async_trait::async_trait;

/// Access to the analysis endpoints
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Research and strategic analysis for an idea
    async fn research(&self, idea: &str) -> Result<ResearchReport>;

    /// MVP roadmap for an idea
    async fn mvp_roadmap(&self, idea: &str) -> Result<MvpRoadmap>;

    /// Landing page content, passed through as loose JSON
    async fn landing_page(&self, idea: &str) -> Result<serde_json::Value>;

    /// Raw market chart figures for an idea
    async fn market_charts(&self, idea: &str) -> Result<MarketChartsResponse>;

    /// Financial projection for an idea under the given assumptions
    async fn financial_projection(
        &self,
        idea: &str,
        assumptions: &FinancialAssumptions,
    ) -> Result<FinancialProjection>;
}

/// Access to the conversational agent
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one user message and wait for the agent's reply
    ///
    /// Conversation identity rides on the transport (the HTTP client's
    /// cookie jar), not on the message body.
    async fn send_message(&self, message: &str) -> Result<ChatReply>;
}
