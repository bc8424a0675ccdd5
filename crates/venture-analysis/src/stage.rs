//! Stage identity and ordering

use std::fmt;

/// One step of an analysis run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Research and strategic analysis
    Research,
    /// MVP roadmap
    MvpRoadmap,
    /// Landing page content
    LandingPage,
    /// Market chart fetch plus the local normalization
    MarketCharts,
    /// Financial projection
    FinancialAnalysis,
}

impl Stage {
    /// Every stage, in the order the pipeline executes them
    pub const ALL: [Stage; 5] = [
        Stage::Research,
        Stage::MvpRoadmap,
        Stage::LandingPage,
        Stage::MarketCharts,
        Stage::FinancialAnalysis,
    ];

    /// Fallback failure message when the backend supplies no detail
    pub fn default_message(self) -> &'static str {
        match self {
            Stage::Research => "Failed to analyze idea",
            Stage::MvpRoadmap => "Failed to generate MVP roadmap",
            Stage::LandingPage => "Failed to generate landing page",
            Stage::MarketCharts => "Failed to fetch market charts data",
            Stage::FinancialAnalysis => "Failed to generate financial analysis",
        }
    }

    /// Short label for progress lines and logs
    pub fn label(self) -> &'static str {
        match self {
            Stage::Research => "research",
            Stage::MvpRoadmap => "MVP roadmap",
            Stage::LandingPage => "landing page",
            Stage::MarketCharts => "market charts",
            Stage::FinancialAnalysis => "financial analysis",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
