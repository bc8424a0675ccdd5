//! Section rendering for the terminal dashboard
//!
//! Renders the result bundle the way the pipeline produced it; no logic here
//! beyond formatting. Sections with nothing to show are skipped, and empty
//! chart series render as "no data" rather than as errors.

use chrono::Local;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde_json::Value;
use venture_analysis::{ChartDataset, ResultBundle};
use venture_api::{
    Feasibility, FinancialAssumptions, FinancialProjection, InvestmentEstimate, MvpRoadmap,
    ResearchReport,
};
use venture_chat::{ChatMessage, Role};

/// Feasibility scores at or above this count as validated
const VALIDATION_BAR: f64 = 50.0;

/// Render every populated section of a completed analysis
pub fn dashboard(idea: &str, bundle: &ResultBundle) {
    heading(&format!("Analysis: {idea}"));

    if let Some(research) = &bundle.research {
        research_section(research);
        feasibility_section(&research.feasibility);
    }
    if let Some(charts) = &bundle.chart_data {
        charts_section(charts);
    }
    if let Some(roadmap) = &bundle.mvp_roadmap {
        roadmap_section(roadmap);
    }
    if let Some(page) = &bundle.landing_page {
        landing_section(page);
    }
    if let Some(projection) = &bundle.financials {
        let estimate = bundle
            .research
            .as_ref()
            .and_then(|r| r.investment_estimate.as_ref());
        financial_section(projection, estimate);
    }
    println!();
}

fn research_section(report: &ResearchReport) {
    heading("Strategic overview");

    if !report.summary.is_empty() {
        println!("{}\n", report.summary);
    }

    if !report.data_highlights.is_empty() {
        let mut table = section_table(vec!["Highlight", "Value"]);
        for (name, value) in &report.data_highlights {
            table.add_row(vec![name.clone(), value_text(value)]);
        }
        println!("{table}");
    }

    let landscape = &report.market_landscape;
    if !landscape.overview.is_empty() {
        println!("Market: {}", landscape.overview);
    }
    if !landscape.market_size.is_empty() {
        println!("Size: {}", landscape.market_size);
    }
    if !landscape.growth_trends.is_empty() {
        println!("Growth: {}", landscape.growth_trends);
    }
    bullet_list("Key drivers", &landscape.key_drivers);
    bullet_list("Challenges", &landscape.challenges);

    bullet_list("Action steps", &report.actionable_steps);
    bullet_list(
        "Revenue models",
        &report.potential_business_models.revenue_models,
    );
    bullet_list(
        "Monetization",
        &report.potential_business_models.monetization_opportunities,
    );

    let competitors = &report.competitor_insights;
    bullet_list("Direct competitors", &competitors.direct_competitors);
    bullet_list("Indirect competitors", &competitors.indirect_competitors);
    if !competitors.gaps_in_solutions.is_empty() {
        println!("Gaps in current solutions: {}", competitors.gaps_in_solutions);
    }

    bullet_list("Key insights", &report.key_insights);
}

fn feasibility_section(feasibility: &Feasibility) {
    heading("Validation score");
    let score = feasibility.feasibility_score;
    let verdict = if score >= VALIDATION_BAR {
        "above"
    } else {
        "below"
    };
    println!("Feasibility: {score:.0}/100 ({verdict} the {VALIDATION_BAR:.0} validation bar)");
    bullet_list("Recommendations", &feasibility.feasibility_recommendations);
}

pub fn charts_section(charts: &ChartDataset) {
    heading("Market charts");

    chart_table(
        "Market growth",
        ["Year", "Market size"],
        charts
            .growth_data
            .iter()
            .map(|p| [format!("{:.0}", p.year), format!("{:.1}", p.size)])
            .collect(),
    );
    chart_table(
        "Market segments",
        ["Segment", "Size"],
        charts
            .segments_data
            .iter()
            .map(|s| [s.name.clone(), format!("{:.1}", s.value)])
            .collect(),
    );
    chart_table(
        "Competitive landscape",
        ["Competitor", "Share %"],
        charts
            .competitive_data
            .iter()
            .map(|c| [c.name.clone(), format!("{:.1}", c.share)])
            .collect(),
    );
    chart_table(
        "Regional breakdown",
        ["Region", "Market size"],
        charts
            .regional_data
            .iter()
            .map(|r| [r.region.clone(), format!("{:.1}", r.size)])
            .collect(),
    );
}

fn roadmap_section(roadmap: &MvpRoadmap) {
    heading("MVP roadmap");

    if !roadmap.mvp_summary.is_empty() {
        println!("{}\n", roadmap.mvp_summary);
    }
    if !roadmap.target_audience.is_empty() {
        println!("Audience: {}", roadmap.target_audience);
    }
    bullet_list("Key features", &roadmap.key_features);
    bullet_list("Development steps", &roadmap.development_steps);
    bullet_list("Technical stack", &roadmap.technical_stack);
    if !roadmap.system_design.is_empty() {
        println!("System design: {}", roadmap.system_design);
    }
    bullet_list("Integrations", &roadmap.third_party_integrations);
    bullet_list("Milestones", &roadmap.timeline.milestones);
    if !roadmap.timeline.estimated_completion.is_empty() {
        println!(
            "Estimated completion: {}",
            roadmap.timeline.estimated_completion
        );
    }
    if let Some(plan) = &roadmap.launch_plan {
        if !plan.launch_goals.is_empty() {
            println!("Launch goals: {}", plan.launch_goals);
        }
        bullet_list("Marketing strategies", &plan.marketing_strategies);
        bullet_list("Success metrics", &plan.success_metrics);
    }
}

/// Best-effort preview of the opaque landing page payload
fn landing_section(page: &Value) {
    heading("Landing page preview");

    let headline = page.pointer("/hero/headline").and_then(Value::as_str);
    let subheadline = page.pointer("/hero/subheadline").and_then(Value::as_str);
    if headline.is_none() && subheadline.is_none() {
        println!("No preview available");
    }
    if let Some(headline) = headline {
        println!("{headline}");
    }
    if let Some(subheadline) = subheadline {
        println!("{subheadline}");
    }

    if let Some(features) = page.get("features").and_then(Value::as_array) {
        let titles: Vec<String> = features
            .iter()
            .filter_map(|f| f.get("title").and_then(Value::as_str))
            .map(String::from)
            .collect();
        bullet_list("Features", &titles);
    }

    if let Some(plans) = page.get("pricing").and_then(Value::as_array) {
        if !plans.is_empty() {
            let mut table = section_table(vec!["Plan", "Price"]);
            for plan in plans {
                table.add_row(vec![field_text(plan, "name"), field_text(plan, "price")]);
            }
            println!("{table}");
        }
    }
}

pub fn financial_section(
    projection: &FinancialProjection,
    estimate: Option<&InvestmentEstimate>,
) {
    heading("Financial analysis");

    if let Some(estimate) = estimate {
        let unit = if estimate.unit.is_empty() {
            String::new()
        } else {
            format!(" ({})", estimate.unit)
        };
        println!("Initial investment estimate{unit}:");
        let mut table = section_table(vec!["Cost item", "Amount"]);
        table.add_row(vec!["Equipment".to_string(), money(estimate.equipment)]);
        table.add_row(vec![
            "Raw materials".to_string(),
            money(estimate.raw_materials),
        ]);
        table.add_row(vec!["Marketing".to_string(), money(estimate.marketing)]);
        table.add_row(vec![
            "Manufacturing".to_string(),
            money(estimate.manufacturing_costs),
        ]);
        table.add_row(vec!["Total".to_string(), money(estimate.total)]);
        println!("{table}");
    }

    let statement = &projection.income_statement_projection;
    let years = statement
        .revenue
        .len()
        .max(statement.cogs.len())
        .max(statement.gross_profit.len())
        .max(statement.net_profit.len());
    if years > 0 {
        let margins = &projection.profitability_metrics;
        println!("Income statement projection:");
        let mut table = section_table(vec![
            "Year",
            "Revenue",
            "COGS",
            "Gross profit",
            "Net profit",
            "Gross margin",
            "Net margin",
        ]);
        for year in 0..years {
            table.add_row(vec![
                format!("{}", year + 1),
                money(series(&statement.revenue, year)),
                money(series(&statement.cogs, year)),
                money(series(&statement.gross_profit, year)),
                money(series(&statement.net_profit, year)),
                percent(series(&margins.gross_margin, year)),
                percent(series(&margins.net_profit_margin, year)),
            ]);
        }
        println!("{table}");
    }

    println!("Monthly burn: {}", money(projection.monthly_burn_rate));
    println!("Runway: {:.1} months", projection.runway);
    println!(
        "CAC: {}   LTV: {}",
        money(projection.customer_metrics.cac),
        money(projection.customer_metrics.ltv)
    );
    println!(
        "Return on equity: {}",
        percent(projection.profitability_metrics.return_on_equity)
    );
}

pub fn assumptions(assumptions: &FinancialAssumptions) {
    println!("Financial assumptions (edit with /assumptions <field> <value>):");
    let mut table = section_table(vec!["Field", "Value"]);
    table.add_row(vec![
        "initial_revenue".to_string(),
        format!("{}", assumptions.initial_revenue),
    ]);
    table.add_row(vec![
        "revenue_growth_rate".to_string(),
        format!("{}", assumptions.revenue_growth_rate),
    ]);
    table.add_row(vec![
        "cogs_percentage".to_string(),
        format!("{}", assumptions.cogs_percentage),
    ]);
    table.add_row(vec![
        "operating_expenses".to_string(),
        format!("{}", assumptions.operating_expenses),
    ]);
    table.add_row(vec![
        "initial_capital".to_string(),
        format!("{}", assumptions.initial_capital),
    ]);
    table.add_row(vec![
        "monthly_burn_rate".to_string(),
        format!("{}", assumptions.monthly_burn_rate),
    ]);
    table.add_row(vec![
        "customer_acquisition_cost".to_string(),
        format!("{}", assumptions.customer_acquisition_cost),
    ]);
    table.add_row(vec![
        "lifetime_value".to_string(),
        format!("{}", assumptions.lifetime_value),
    ]);
    println!("{table}");
}

/// One transcript line with its local time
pub fn transcript_line(message: &ChatMessage) {
    let who = match message.role {
        Role::User => "you",
        Role::Agent => "agent",
    };
    let stamp = message.timestamp.with_timezone(&Local).format("%H:%M:%S");
    println!("[{stamp}] {who}: {}", message.content);
}

fn chart_table(title: &str, headers: [&str; 2], rows: Vec<[String; 2]>) {
    println!("{title}:");
    if rows.is_empty() {
        println!("  no data");
        return;
    }
    let mut table = section_table(headers.to_vec());
    for row in rows {
        table.add_row(row.to_vec());
    }
    println!("{table}");
}

fn section_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn bullet_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Strings pass through, numbers render plainly, anything else is blank
fn field_text(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn series(values: &[f64], index: usize) -> f64 {
    values.get(index).copied().unwrap_or(0.0)
}

fn money(value: f64) -> String {
    format!("${value:.0}")
}

fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn heading(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {title}");
    println!("{}", "=".repeat(60));
}
