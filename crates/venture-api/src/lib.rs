//! HTTP transport for the venture analysis backend
//!
//! This crate provides everything the analysis pipeline and the conversation
//! session need to talk to the backend:
//!
//! - Wire payload types for the five analysis endpoints and the chat endpoint
//! - `AnalysisBackend` and `ChatTransport` trait seams for swapping the
//!   transport out in tests
//! - `ApiClient`, a reqwest implementation with a cookie jar carrying chat
//!   session continuity

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod payloads;

// Re-export main types
pub use backend::{AnalysisBackend, ChatTransport};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use payloads::{
    BusinessModels, ChatReply, CompetitorInsights, CustomerMetrics, Feasibility,
    FinancialAssumptions, FinancialProjection, IncomeStatement, InvestmentEstimate, LaunchPlan,
    MarketChartsResponse, MarketLandscape, MvpRoadmap, ProfitabilityMetrics, ResearchReport,
    Timeline,
};
