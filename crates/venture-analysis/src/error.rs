//! Error types for analysis runs

use crate::stage::Stage;
use thiserror::Error;
use venture_api::ApiError;

/// Rejected idea text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Idea text must not be empty")]
pub struct EmptyIdea;

/// Shape error from the chart normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The payload had no `market_analysis` object to normalize
    #[error("Invalid market data received from the server.")]
    MissingMarketAnalysis,
}

/// The one failure surfaced for an aborted run
///
/// Carries the stage that aborted and an already-normalized message: the
/// server's `detail` when it sent one, the stage's default message for
/// everything else, including transport errors that never reached the
/// server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StageFailure {
    /// Stage that aborted the run
    pub stage: Stage,
    /// Display-ready failure message
    pub message: String,
}

impl StageFailure {
    /// Normalize a backend error for `stage`
    pub fn from_api(stage: Stage, err: ApiError) -> Self {
        let message = match err.detail() {
            Some(detail) => detail.to_string(),
            None => stage.default_message().to_string(),
        };
        Self { stage, message }
    }

    /// Chart normalization failures belong to the chart stage
    pub fn from_chart(err: ChartError) -> Self {
        Self {
            stage: Stage::MarketCharts,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_detail_wins() {
        let failure = StageFailure::from_api(
            Stage::Research,
            ApiError::Application {
                status: 500,
                detail: Some("Quota exhausted".to_string()),
            },
        );
        assert_eq!(failure.stage, Stage::Research);
        assert_eq!(failure.message, "Quota exhausted");
        assert_eq!(failure.to_string(), "Quota exhausted");
    }

    #[test]
    fn test_default_message_without_detail() {
        let failure = StageFailure::from_api(
            Stage::MvpRoadmap,
            ApiError::Application {
                status: 502,
                detail: None,
            },
        );
        assert_eq!(failure.message, "Failed to generate MVP roadmap");
    }

    #[test]
    fn test_errors_below_http_use_default() {
        let failure = StageFailure::from_api(
            Stage::LandingPage,
            ApiError::UnexpectedResponse("Failed to parse response: EOF".to_string()),
        );
        assert_eq!(failure.message, "Failed to generate landing page");
    }

    #[test]
    fn test_chart_failure_message() {
        let failure = StageFailure::from_chart(ChartError::MissingMarketAnalysis);
        assert_eq!(failure.stage, Stage::MarketCharts);
        assert_eq!(
            failure.message,
            "Invalid market data received from the server."
        );
    }
}
