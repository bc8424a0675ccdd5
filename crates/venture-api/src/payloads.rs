//! Wire payload types for the venture backend
//!
//! Response shapes mirror what the backend actually returns: camelCase JSON
//! from the analysis endpoints, snake_case from the chat endpoint. Fields the
//! backend may omit fall back to defaults instead of failing the decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Research / strategic analysis
// ============================================================================

/// Full strategic research report for a venture idea
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchReport {
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub key_insights: Vec<String>,

    #[serde(default)]
    pub actionable_steps: Vec<String>,

    /// Headline metric name -> value, rendered as-is
    #[serde(default)]
    pub data_highlights: serde_json::Map<String, Value>,

    #[serde(default)]
    pub market_landscape: MarketLandscape,

    #[serde(default)]
    pub competitor_insights: CompetitorInsights,

    #[serde(default)]
    pub potential_business_models: BusinessModels,

    #[serde(default)]
    pub feasibility: Feasibility,

    /// Up-front cost estimate; absent on backends that skip it
    #[serde(rename = "financial_analysis", default)]
    pub investment_estimate: Option<InvestmentEstimate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketLandscape {
    #[serde(default)]
    pub overview: String,

    #[serde(default)]
    pub market_size: String,

    #[serde(default)]
    pub growth_trends: String,

    #[serde(default)]
    pub key_drivers: Vec<String>,

    #[serde(default)]
    pub challenges: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorInsights {
    #[serde(default)]
    pub direct_competitors: Vec<String>,

    #[serde(default)]
    pub indirect_competitors: Vec<String>,

    #[serde(default)]
    pub gaps_in_solutions: String,

    /// Feature/pricing/user-base comparison; shape varies by backend
    #[serde(default)]
    pub competitive_matrix: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessModels {
    #[serde(default)]
    pub revenue_models: Vec<String>,

    #[serde(default)]
    pub monetization_opportunities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feasibility {
    /// 1 to 100, higher is better
    #[serde(default)]
    pub feasibility_score: f64,

    #[serde(default)]
    pub feasibility_recommendations: Vec<String>,
}

/// Estimated initial investment attached to the research report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestmentEstimate {
    #[serde(default)]
    pub equipment: f64,

    #[serde(default)]
    pub raw_materials: f64,

    #[serde(default)]
    pub marketing: f64,

    #[serde(default)]
    pub manufacturing_costs: f64,

    #[serde(default)]
    pub total: f64,

    /// Currency label (USD, EUR, ...)
    #[serde(default)]
    pub unit: String,
}

// ============================================================================
// MVP roadmap
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpRoadmap {
    #[serde(default)]
    pub mvp_summary: String,

    #[serde(default)]
    pub key_features: Vec<String>,

    #[serde(default)]
    pub target_audience: String,

    #[serde(default)]
    pub development_steps: Vec<String>,

    #[serde(default)]
    pub technical_stack: Vec<String>,

    #[serde(default)]
    pub system_design: String,

    #[serde(default)]
    pub timeline: Timeline,

    #[serde(default)]
    pub third_party_integrations: Vec<String>,

    #[serde(default)]
    pub launch_plan: Option<LaunchPlan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default)]
    pub milestones: Vec<String>,

    #[serde(default)]
    pub estimated_completion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPlan {
    #[serde(default)]
    pub launch_goals: String,

    #[serde(default)]
    pub marketing_strategies: Vec<String>,

    #[serde(default)]
    pub success_metrics: Vec<String>,
}

// ============================================================================
// Market charts
// ============================================================================

/// Raw market figures as returned by the backend
///
/// `market_analysis` stays a loose JSON tree here; the chart transformer
/// normalizes it. Missing and null both decode to `None`, which is the one
/// shape error the transformer reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketChartsResponse {
    #[serde(default)]
    pub market_analysis: Option<Value>,
}

// ============================================================================
// Financial analysis
// ============================================================================

/// Caller-controlled inputs to the financial projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAssumptions {
    pub initial_revenue: f64,

    /// Year-over-year growth as a fraction (0.5 = 50%)
    pub revenue_growth_rate: f64,

    /// Cost of goods sold as a percentage of revenue
    pub cogs_percentage: f64,

    pub operating_expenses: f64,

    pub initial_capital: f64,

    pub monthly_burn_rate: f64,

    pub customer_acquisition_cost: f64,

    pub lifetime_value: f64,
}

impl Default for FinancialAssumptions {
    fn default() -> Self {
        Self {
            initial_revenue: 100_000.0,
            revenue_growth_rate: 0.5,
            cogs_percentage: 30.0,
            operating_expenses: 50_000.0,
            initial_capital: 200_000.0,
            monthly_burn_rate: 15_000.0,
            customer_acquisition_cost: 500.0,
            lifetime_value: 2_000.0,
        }
    }
}

/// Three-year projection computed by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjection {
    #[serde(default)]
    pub monthly_burn_rate: f64,

    /// Months of runway at the current burn
    #[serde(default)]
    pub runway: f64,

    #[serde(default)]
    pub customer_metrics: CustomerMetrics,

    #[serde(default)]
    pub income_statement_projection: IncomeStatement,

    #[serde(default)]
    pub profitability_metrics: ProfitabilityMetrics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerMetrics {
    #[serde(default)]
    pub cac: f64,

    #[serde(default)]
    pub ltv: f64,
}

/// Per-year series, index 0 = year one
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    #[serde(default)]
    pub revenue: Vec<f64>,

    #[serde(default)]
    pub cogs: Vec<f64>,

    #[serde(default)]
    pub gross_profit: Vec<f64>,

    #[serde(default)]
    pub net_profit: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityMetrics {
    #[serde(default)]
    pub return_on_equity: f64,

    #[serde(default)]
    pub gross_margin: Vec<f64>,

    #[serde(default)]
    pub net_profit_margin: Vec<f64>,
}

// ============================================================================
// Chat
// ============================================================================

/// One reply from the conversational agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatReply {
    /// Server-assigned conversation identity
    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub chatbot_response: String,

    /// When set, the conversation is over for good
    #[serde(default)]
    pub end_conversation: bool,
}
