//! Sequential analysis pipeline
//!
//! [`AnalysisPipeline`] drives one idea through five backend stages in a
//! fixed order, writing each result into the run as it lands. A stage
//! failure stops the pipeline and clears every partial result, so callers
//! only ever observe a complete bundle or a single failure.

use crate::charts;
use crate::error::StageFailure;
use crate::run::{AnalysisRun, RunStatus};
use crate::stage::Stage;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use venture_api::{AnalysisBackend, FinancialAssumptions};

/// Drives the five analysis stages against a backend
///
/// The pipeline itself is stateless between runs; per-idea state lives in
/// the [`AnalysisRun`] handed to [`run`](Self::run). Financial assumptions
/// are pipeline-level settings so a tuned set applies to every run.
pub struct AnalysisPipeline {
    backend: Arc<dyn AnalysisBackend>,
    assumptions: FinancialAssumptions,
}

impl AnalysisPipeline {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self::with_assumptions(backend, FinancialAssumptions::default())
    }

    pub fn with_assumptions(
        backend: Arc<dyn AnalysisBackend>,
        assumptions: FinancialAssumptions,
    ) -> Self {
        Self {
            backend,
            assumptions,
        }
    }

    pub fn assumptions(&self) -> &FinancialAssumptions {
        &self.assumptions
    }

    pub fn set_assumptions(&mut self, assumptions: FinancialAssumptions) {
        self.assumptions = assumptions;
    }

    /// Execute all five stages for this run
    ///
    /// `on_stage` fires after each stage's result has been stored, in
    /// execution order, so a frontend can render progressively. On failure
    /// the run is marked failed, its partial results are dropped, and the
    /// same failure is both stored on the run and returned.
    #[instrument(skip(self, run, on_stage), fields(run_id = %run.id()))]
    pub async fn run<F>(&self, run: &mut AnalysisRun, on_stage: F) -> Result<(), StageFailure>
    where
        F: FnMut(Stage),
    {
        match self.run_stages(run, on_stage).await {
            Ok(()) => {
                run.complete();
                info!("analysis pipeline completed");
                Ok(())
            }
            Err(failure) => {
                warn!(stage = %failure.stage, error = %failure, "analysis pipeline failed");
                run.fail(failure.clone());
                Err(failure)
            }
        }
    }

    async fn run_stages<F>(&self, run: &mut AnalysisRun, mut on_stage: F) -> Result<(), StageFailure>
    where
        F: FnMut(Stage),
    {
        let idea = run.idea().as_str().to_string();

        let research = self
            .backend
            .research(&idea)
            .await
            .map_err(|e| StageFailure::from_api(Stage::Research, e))?;
        run.bundle_mut().research = Some(research);
        on_stage(Stage::Research);

        let roadmap = self
            .backend
            .mvp_roadmap(&idea)
            .await
            .map_err(|e| StageFailure::from_api(Stage::MvpRoadmap, e))?;
        run.bundle_mut().mvp_roadmap = Some(roadmap);
        on_stage(Stage::MvpRoadmap);

        let page = self
            .backend
            .landing_page(&idea)
            .await
            .map_err(|e| StageFailure::from_api(Stage::LandingPage, e))?;
        run.bundle_mut().landing_page = Some(page);
        on_stage(Stage::LandingPage);

        let charts_response = self
            .backend
            .market_charts(&idea)
            .await
            .map_err(|e| StageFailure::from_api(Stage::MarketCharts, e))?;
        let dataset = charts::transform(&charts_response).map_err(StageFailure::from_chart)?;
        run.bundle_mut().chart_data = Some(dataset);
        on_stage(Stage::MarketCharts);

        let projection = self
            .backend
            .financial_projection(&idea, &self.assumptions)
            .await
            .map_err(|e| StageFailure::from_api(Stage::FinancialAnalysis, e))?;
        run.bundle_mut().financials = Some(projection);
        on_stage(Stage::FinancialAnalysis);

        Ok(())
    }

    /// Re-run only the financial stage of a completed run
    ///
    /// The old projection is discarded before the new request goes out, so a
    /// failed refresh leaves the financial slot empty while every other slot
    /// and the run's succeeded status stay intact. The failure is returned
    /// to the caller but not stored on the run.
    #[instrument(skip(self, run), fields(run_id = %run.id()))]
    pub async fn refresh_financials(&self, run: &mut AnalysisRun) -> Result<(), StageFailure> {
        if run.status() != RunStatus::Succeeded {
            return Err(StageFailure {
                stage: Stage::FinancialAnalysis,
                message: "No completed analysis to update".to_string(),
            });
        }

        run.bundle_mut().financials = None;
        let idea = run.idea().as_str().to_string();

        match self
            .backend
            .financial_projection(&idea, &self.assumptions)
            .await
        {
            Ok(projection) => {
                run.bundle_mut().financials = Some(projection);
                info!("financial projection refreshed");
                Ok(())
            }
            Err(e) => {
                let failure = StageFailure::from_api(Stage::FinancialAnalysis, e);
                warn!(error = %failure, "financial refresh failed");
                Err(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::IdeaInput;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use venture_api::{
        ApiError, FinancialProjection, MarketChartsResponse, MvpRoadmap, ResearchReport,
    };

    // Scripted backend: records call order, fails on command, and captures
    // the assumptions it was handed.
    struct FakeBackend {
        calls: Mutex<Vec<&'static str>>,
        fail_endpoint: Mutex<Option<(&'static str, Option<String>)>>,
        market_analysis: Mutex<Option<Value>>,
        seen_assumptions: Mutex<Option<FinancialAssumptions>>,
    }

    impl FakeBackend {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail_endpoint: Mutex::new(None),
                market_analysis: Mutex::new(Some(json!({
                    "market_overview": {
                        "total_market_size": { "year": 2024, "value": 10 },
                        "total_market_size_projected": { "year": 2029, "value": 50 }
                    }
                }))),
                seen_assumptions: Mutex::new(None),
            })
        }

        fn fail_on(&self, endpoint: &'static str, detail: Option<&str>) {
            *self.fail_endpoint.lock().unwrap() = Some((endpoint, detail.map(String::from)));
        }

        fn set_market_analysis(&self, value: Option<Value>) {
            *self.market_analysis.lock().unwrap() = value;
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, name: &'static str) -> venture_api::Result<()> {
            self.calls.lock().unwrap().push(name);
            if let Some((endpoint, detail)) = self.fail_endpoint.lock().unwrap().as_ref() {
                if *endpoint == name {
                    return Err(ApiError::Application {
                        status: 500,
                        detail: detail.clone(),
                    });
                }
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AnalysisBackend for FakeBackend {
        async fn research(&self, _idea: &str) -> venture_api::Result<ResearchReport> {
            self.record("research")?;
            Ok(ResearchReport::default())
        }

        async fn mvp_roadmap(&self, _idea: &str) -> venture_api::Result<MvpRoadmap> {
            self.record("mvp")?;
            Ok(MvpRoadmap::default())
        }

        async fn landing_page(&self, _idea: &str) -> venture_api::Result<Value> {
            self.record("landing_page")?;
            Ok(json!({ "index.html": "<html></html>" }))
        }

        async fn market_charts(&self, _idea: &str) -> venture_api::Result<MarketChartsResponse> {
            self.record("charts")?;
            Ok(MarketChartsResponse {
                market_analysis: self.market_analysis.lock().unwrap().clone(),
            })
        }

        async fn financial_projection(
            &self,
            _idea: &str,
            assumptions: &FinancialAssumptions,
        ) -> venture_api::Result<FinancialProjection> {
            self.record("financial")?;
            *self.seen_assumptions.lock().unwrap() = Some(assumptions.clone());
            Ok(FinancialProjection::default())
        }
    }

    fn new_run() -> AnalysisRun {
        AnalysisRun::new(IdeaInput::new("solar powered delivery drones").unwrap())
    }

    #[tokio::test]
    async fn test_all_stages_run_in_order() {
        let backend = FakeBackend::ok();
        let pipeline = AnalysisPipeline::new(backend.clone());
        let mut run = new_run();
        let mut observed = Vec::new();

        pipeline
            .run(&mut run, |stage| observed.push(stage))
            .await
            .unwrap();

        assert_eq!(
            backend.calls(),
            vec!["research", "mvp", "landing_page", "charts", "financial"]
        );
        assert_eq!(observed, Stage::ALL.to_vec());
        assert_eq!(run.status(), RunStatus::Succeeded);
        assert!(run.results().unwrap().is_complete());
        assert_eq!(
            run.results().unwrap().chart_data.as_ref().unwrap().growth_data.len(),
            2
        );
    }

    #[tokio::test]
    async fn test_stage_failure_clears_partials_and_stops() {
        let backend = FakeBackend::ok();
        backend.fail_on("charts", None);
        let pipeline = AnalysisPipeline::new(backend.clone());
        let mut run = new_run();

        let failure = pipeline.run(&mut run, |_| {}).await.unwrap_err();

        assert_eq!(failure.stage, Stage::MarketCharts);
        assert_eq!(failure.message, "Failed to fetch market charts data");
        // The financial stage never ran
        assert_eq!(
            backend.calls(),
            vec!["research", "mvp", "landing_page", "charts"]
        );
        assert_eq!(run.status(), RunStatus::Failed);
        assert!(run.results().is_none());
        assert_eq!(run.failure().unwrap().message, failure.message);
    }

    #[tokio::test]
    async fn test_server_detail_preferred_over_default() {
        let backend = FakeBackend::ok();
        backend.fail_on("mvp", Some("Rate limit exceeded, try again later"));
        let pipeline = AnalysisPipeline::new(backend);
        let mut run = new_run();

        let failure = pipeline.run(&mut run, |_| {}).await.unwrap_err();

        assert_eq!(failure.stage, Stage::MvpRoadmap);
        assert_eq!(failure.message, "Rate limit exceeded, try again later");
    }

    #[tokio::test]
    async fn test_chart_shape_failure_aborts_run() {
        let backend = FakeBackend::ok();
        backend.set_market_analysis(None);
        let pipeline = AnalysisPipeline::new(backend.clone());
        let mut run = new_run();

        let failure = pipeline.run(&mut run, |_| {}).await.unwrap_err();

        assert_eq!(failure.stage, Stage::MarketCharts);
        assert_eq!(
            failure.message,
            "Invalid market data received from the server."
        );
        // The backend call itself succeeded; the shape check failed after it
        assert_eq!(
            backend.calls(),
            vec!["research", "mvp", "landing_page", "charts"]
        );
        assert!(run.results().is_none());
    }

    #[tokio::test]
    async fn test_assumptions_reach_the_backend() {
        let backend = FakeBackend::ok();
        let assumptions = FinancialAssumptions {
            initial_capital: 250_000.0,
            ..FinancialAssumptions::default()
        };
        let pipeline = AnalysisPipeline::with_assumptions(backend.clone(), assumptions.clone());
        let mut run = new_run();

        pipeline.run(&mut run, |_| {}).await.unwrap();

        let seen = backend.seen_assumptions.lock().unwrap().clone().unwrap();
        assert_eq!(seen, assumptions);
    }

    #[tokio::test]
    async fn test_refresh_replaces_financials() {
        let backend = FakeBackend::ok();
        let mut pipeline = AnalysisPipeline::new(backend.clone());
        let mut run = new_run();
        pipeline.run(&mut run, |_| {}).await.unwrap();

        let tuned = FinancialAssumptions {
            monthly_burn_rate: 40_000.0,
            ..FinancialAssumptions::default()
        };
        pipeline.set_assumptions(tuned.clone());
        pipeline.refresh_financials(&mut run).await.unwrap();

        assert_eq!(run.status(), RunStatus::Succeeded);
        assert!(run.results().unwrap().financials.is_some());
        let seen = backend.seen_assumptions.lock().unwrap().clone().unwrap();
        assert_eq!(seen, tuned);
        // One financial call from the pipeline, one from the refresh
        let financial_calls = backend
            .calls()
            .iter()
            .filter(|c| **c == "financial")
            .count();
        assert_eq!(financial_calls, 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_other_slots() {
        let backend = FakeBackend::ok();
        let pipeline = AnalysisPipeline::new(backend.clone());
        let mut run = new_run();
        pipeline.run(&mut run, |_| {}).await.unwrap();

        backend.fail_on("financial", Some("Projection model unavailable"));
        let failure = pipeline.refresh_financials(&mut run).await.unwrap_err();

        assert_eq!(failure.message, "Projection model unavailable");
        // The run stays succeeded with an empty financial slot; the failure
        // is reported to the caller, not stored on the run.
        assert_eq!(run.status(), RunStatus::Succeeded);
        assert!(run.failure().is_none());
        let bundle = run.results().unwrap();
        assert!(bundle.financials.is_none());
        assert!(bundle.research.is_some());
        assert!(bundle.chart_data.is_some());
    }

    #[tokio::test]
    async fn test_refresh_requires_completed_run() {
        let backend = FakeBackend::ok();
        let pipeline = AnalysisPipeline::new(backend.clone());
        let mut run = new_run();

        let failure = pipeline.refresh_financials(&mut run).await.unwrap_err();

        assert_eq!(failure.message, "No completed analysis to update");
        // Nothing was called
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_detail_falls_back_to_default() {
        let backend = FakeBackend::ok();
        backend.fail_on("research", None);
        let pipeline = AnalysisPipeline::new(backend);
        let mut run = new_run();

        let failure = pipeline.run(&mut run, |_| {}).await.unwrap_err();

        assert_eq!(failure.stage, Stage::Research);
        assert_eq!(failure.message, "Failed to analyze idea");
    }
}
