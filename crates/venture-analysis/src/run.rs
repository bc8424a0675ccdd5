//! Analysis run state
//!
//! An [`AnalysisRun`] tracks one idea through the pipeline: the validated
//! input text, the partial results as stages land, and the terminal outcome.
//! Results are only readable once the whole pipeline has succeeded; a failed
//! run keeps nothing but the failure itself.

use crate::charts::ChartDataset;
use crate::error::{EmptyIdea, StageFailure};
use serde_json::Value;
use uuid::Uuid;
use venture_api::{FinancialProjection, MvpRoadmap, ResearchReport};

// ============================================================================
// Idea input
// ============================================================================

/// Validated idea text
///
/// Construction trims surrounding whitespace and rejects input that is empty
/// after trimming, so every stored idea is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaInput(String);

impl IdeaInput {
    pub fn new(raw: &str) -> Result<Self, EmptyIdea> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyIdea);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdeaInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Run status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Stages are still executing (or have not started)
    Pending,
    /// Every stage landed; the bundle is complete and readable
    Succeeded,
    /// Some stage failed; the bundle has been cleared
    Failed,
}

// ============================================================================
// Result bundle
// ============================================================================

/// One slot per pipeline stage, filled in execution order
#[derive(Debug, Clone, Default)]
pub struct ResultBundle {
    pub research: Option<ResearchReport>,
    pub mvp_roadmap: Option<MvpRoadmap>,
    pub landing_page: Option<Value>,
    pub chart_data: Option<ChartDataset>,
    pub financials: Option<FinancialProjection>,
}

impl ResultBundle {
    pub fn is_complete(&self) -> bool {
        self.research.is_some()
            && self.mvp_roadmap.is_some()
            && self.landing_page.is_some()
            && self.chart_data.is_some()
            && self.financials.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.research.is_none()
            && self.mvp_roadmap.is_none()
            && self.landing_page.is_none()
            && self.chart_data.is_none()
            && self.financials.is_none()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Analysis run
// ============================================================================

/// One idea's trip through the pipeline
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    id: Uuid,
    idea: IdeaInput,
    bundle: ResultBundle,
    status: RunStatus,
    failure: Option<StageFailure>,
}

impl AnalysisRun {
    pub fn new(idea: IdeaInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            idea,
            bundle: ResultBundle::default(),
            status: RunStatus::Pending,
            failure: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn idea(&self) -> &IdeaInput {
        &self.idea
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn failure(&self) -> Option<&StageFailure> {
        self.failure.as_ref()
    }

    /// The result bundle, readable only after the run succeeded
    pub fn results(&self) -> Option<&ResultBundle> {
        match self.status {
            RunStatus::Succeeded => Some(&self.bundle),
            _ => None,
        }
    }

    pub(crate) fn bundle_mut(&mut self) -> &mut ResultBundle {
        &mut self.bundle
    }

    pub(crate) fn complete(&mut self) {
        self.status = RunStatus::Succeeded;
        self.failure = None;
    }

    /// Record the failure and drop every partial result
    pub(crate) fn fail(&mut self, failure: StageFailure) {
        self.bundle.clear();
        self.status = RunStatus::Failed;
        self.failure = Some(failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;

    #[test]
    fn test_idea_input_trims() {
        let idea = IdeaInput::new("  solar powered kiosks  ").unwrap();
        assert_eq!(idea.as_str(), "solar powered kiosks");
    }

    #[test]
    fn test_idea_input_rejects_blank() {
        assert!(IdeaInput::new("").is_err());
        assert!(IdeaInput::new("   \t\n").is_err());
    }

    #[test]
    fn test_new_run_is_pending_and_unreadable() {
        let run = AnalysisRun::new(IdeaInput::new("an idea").unwrap());
        assert_eq!(run.status(), RunStatus::Pending);
        assert!(run.results().is_none());
        assert!(run.failure().is_none());
    }

    #[test]
    fn test_completed_run_exposes_bundle() {
        let mut run = AnalysisRun::new(IdeaInput::new("an idea").unwrap());
        run.bundle_mut().landing_page = Some(serde_json::json!("<html></html>"));
        run.complete();

        assert_eq!(run.status(), RunStatus::Succeeded);
        let bundle = run.results().unwrap();
        assert!(bundle.landing_page.is_some());
    }

    #[test]
    fn test_failure_clears_partial_results() {
        let mut run = AnalysisRun::new(IdeaInput::new("an idea").unwrap());
        run.bundle_mut().landing_page = Some(serde_json::json!("<html></html>"));
        run.bundle_mut().chart_data = Some(ChartDataset::default());

        run.fail(StageFailure {
            stage: Stage::FinancialAnalysis,
            message: "Failed to generate financial analysis".to_string(),
        });

        assert_eq!(run.status(), RunStatus::Failed);
        assert!(run.results().is_none());
        assert!(run.bundle.is_empty());
        let failure = run.failure().unwrap();
        assert_eq!(failure.stage, Stage::FinancialAnalysis);
    }

    #[test]
    fn test_bundle_completeness() {
        let mut bundle = ResultBundle::default();
        assert!(bundle.is_empty());
        assert!(!bundle.is_complete());

        bundle.research = Some(ResearchReport::default());
        assert!(!bundle.is_empty());
        assert!(!bundle.is_complete());

        bundle.mvp_roadmap = Some(MvpRoadmap::default());
        bundle.landing_page = Some(serde_json::json!(""));
        bundle.chart_data = Some(ChartDataset::default());
        bundle.financials = Some(FinancialProjection::default());
        assert!(bundle.is_complete());
    }
}
