//! Reqwest-based client for the venture backend
//!
//! # Examples
//!
//! ```no_run
//! use venture_api::{AnalysisBackend, ApiClient, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("http://localhost:8000").with_timeout(60);
//!     let client = ApiClient::with_config(config)?;
//!
//!     let report = client.research("a mental health tracking app").await?;
//!     println!("{}", report.summary);
//!
//!     Ok(())
//! }
//! ```

use crate::backend::{AnalysisBackend, ChatTransport};
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::payloads::{
    ChatReply, FinancialAssumptions, FinancialProjection, MarketChartsResponse, MvpRoadmap,
    ResearchReport,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP client for the venture backend
///
/// One client serves both the analysis endpoints and the chat endpoint. The
/// cookie store is what ties consecutive chat calls to the same server-side
/// session, so a conversation must keep using the same client instance.
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client with custom configuration
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client against the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ApiConfig::new(base_url))
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ApiConfig::from_env()?)
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST a JSON body and decode a JSON response
    ///
    /// Non-success statuses become `ApiError::Application`, with the
    /// server's `detail` message extracted when the error body carries one.
    async fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{path}", self.config.base_url);
        debug!("POST {url}");

        let response = self.client.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(ApiError::Application {
                status,
                detail: extract_detail(&body),
            });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| ApiError::UnexpectedResponse(format!("Failed to parse response: {e}")))
    }
}

/// Pull the `detail` string out of an error body, if there is one
fn extract_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
}

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Debug, Serialize)]
struct IdeaRequest<'a> {
    idea: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct ProjectionRequest<'a> {
    idea: &'a str,
    #[serde(flatten)]
    assumptions: &'a FinancialAssumptions,
}

// ============================================================================
// Endpoint implementations
// ============================================================================

#[async_trait]
impl AnalysisBackend for ApiClient {
    #[instrument(skip(self, idea), fields(api_base = %self.config.base_url))]
    async fn research(&self, idea: &str) -> Result<ResearchReport> {
        self.post("/analyze", &IdeaRequest { idea }).await
    }

    #[instrument(skip(self, idea), fields(api_base = %self.config.base_url))]
    async fn mvp_roadmap(&self, idea: &str) -> Result<MvpRoadmap> {
        self.post("/mvp", &IdeaRequest { idea }).await
    }

    #[instrument(skip(self, idea), fields(api_base = %self.config.base_url))]
    async fn landing_page(&self, idea: &str) -> Result<serde_json::Value> {
        self.post("/api/generate", &IdeaRequest { idea }).await
    }

    #[instrument(skip(self, idea), fields(api_base = %self.config.base_url))]
    async fn market_charts(&self, idea: &str) -> Result<MarketChartsResponse> {
        self.post("/charts", &IdeaRequest { idea }).await
    }

    #[instrument(skip(self, idea, assumptions), fields(api_base = %self.config.base_url))]
    async fn financial_projection(
        &self,
        idea: &str,
        assumptions: &FinancialAssumptions,
    ) -> Result<FinancialProjection> {
        self.post("/financial_analysis", &ProjectionRequest { idea, assumptions })
            .await
    }
}

#[async_trait]
impl ChatTransport for ApiClient {
    #[instrument(skip(self, message), fields(api_base = %self.config.base_url))]
    async fn send_message(&self, message: &str) -> Result<ChatReply> {
        self.post("/chat", &ChatRequest { message }).await
    }
}
