//! Venture idea analysis pipeline
//!
//! This crate turns one free-text venture idea into a complete analysis
//! bundle by driving five backend stages in a fixed order:
//!
//! 1. Research and strategic analysis
//! 2. MVP roadmap
//! 3. Landing page generation
//! 4. Market charts (fetched, then normalized locally)
//! 5. Financial projection under tunable assumptions
//!
//! Results land progressively so a frontend can render each section as it
//! arrives, but the run as a whole is all-or-nothing: a failure at any stage
//! clears every partial result and leaves exactly one failure message on the
//! run.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use venture_analysis::{AnalysisPipeline, AnalysisRun, IdeaInput};
//! use venture_api::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = Arc::new(ApiClient::from_env()?);
//!     let pipeline = AnalysisPipeline::new(backend);
//!
//!     let idea = IdeaInput::new("an app that rents idle 3D printers")?;
//!     let mut run = AnalysisRun::new(idea);
//!     pipeline.run(&mut run, |stage| println!("finished {stage}")).await?;
//!
//!     let bundle = run.results().unwrap();
//!     println!("{:#?}", bundle.research);
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod error;
pub mod pipeline;
pub mod run;
pub mod stage;

// Re-export main types for convenience
pub use charts::{ChartDataset, CompetitorShare, GrowthPoint, RegionalSize, SegmentShare};
pub use error::{ChartError, EmptyIdea, StageFailure};
pub use pipeline::AnalysisPipeline;
pub use run::{AnalysisRun, IdeaInput, ResultBundle, RunStatus};
pub use stage::Stage;
