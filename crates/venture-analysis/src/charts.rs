//! Chart data normalization
//!
//! The backend returns market figures as a loose JSON tree whose leaves may
//! be numbers, numeric strings, or missing entirely. This module flattens
//! that tree into the four fixed series the dashboard renders. The transform
//! is pure and total except for one case: a payload without a
//! `market_analysis` object.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use venture_api::MarketChartsResponse;

/// Normalized chart series for one idea
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Current market size point, then the projected one, in source order
    pub growth_data: Vec<GrowthPoint>,
    pub segments_data: Vec<SegmentShare>,
    pub competitive_data: Vec<CompetitorShare>,
    pub regional_data: Vec<RegionalSize>,
}

impl ChartDataset {
    /// True when no series carries a single point
    pub fn is_empty(&self) -> bool {
        self.growth_data.is_empty()
            && self.segments_data.is_empty()
            && self.competitive_data.is_empty()
            && self.regional_data.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentShare {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitorShare {
    pub name: String,
    pub share: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionalSize {
    pub region: String,
    pub size: f64,
}

/// Flatten a raw charts payload into the dashboard's series
///
/// Only a missing (or null) `market_analysis` object is an error. Every
/// other irregularity degrades softly: absent numerics become `0.0`, absent
/// names become `""`, and collections that are not arrays yield empty
/// series. Empty series are a valid result, not an error.
pub fn transform(response: &MarketChartsResponse) -> Result<ChartDataset, ChartError> {
    let analysis = response
        .market_analysis
        .as_ref()
        .ok_or(ChartError::MissingMarketAnalysis)?;

    let mut dataset = ChartDataset::default();

    if let Some(overview) = field(analysis, "market_overview") {
        if let Some(current) = field(overview, "total_market_size") {
            dataset.growth_data.push(growth_point(current));
        }
        if let Some(projected) = field(overview, "total_market_size_projected") {
            dataset.growth_data.push(growth_point(projected));
        }

        if let Some(segments) = field(overview, "market_segments").and_then(Value::as_array) {
            dataset.segments_data = segments
                .iter()
                .map(|segment| SegmentShare {
                    name: text(segment, "segment_name"),
                    value: number(segment, "segment_size"),
                })
                .collect();
        }
    }

    if let Some(landscape) = field(analysis, "competitive_landscape") {
        if let Some(distribution) =
            field(landscape, "market_share_distribution").and_then(Value::as_array)
        {
            dataset.competitive_data = distribution
                .iter()
                .map(|competitor| CompetitorShare {
                    name: text(competitor, "competitor_name"),
                    share: number(competitor, "market_share"),
                })
                .collect();
        }
    }

    if let Some(regional) = field(analysis, "regional_analysis") {
        if let Some(regions) = field(regional, "regions").and_then(Value::as_array) {
            dataset.regional_data = regions
                .iter()
                .map(|entry| RegionalSize {
                    region: text(entry, "region"),
                    size: number(entry, "market_size"),
                })
                .collect();
        }
    }

    Ok(dataset)
}

fn growth_point(value: &Value) -> GrowthPoint {
    GrowthPoint {
        year: number(value, "year"),
        size: number(value, "value"),
    }
}

/// Present and non-null
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// Missing, null, or non-string becomes an empty name
fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Numbers pass through, numeric strings parse, everything else is 0
fn number(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(market_analysis: Value) -> MarketChartsResponse {
        MarketChartsResponse {
            market_analysis: Some(market_analysis),
        }
    }

    #[test]
    fn test_full_payload() {
        let dataset = transform(&response(json!({
            "market_overview": {
                "total_market_size": { "year": 2024, "value": 10 },
                "total_market_size_projected": { "year": 2029, "value": 50 },
                "market_segments": [
                    { "segment_name": "Consumer", "segment_size": 60 },
                    { "segment_name": "Enterprise", "segment_size": 40 }
                ]
            },
            "competitive_landscape": {
                "market_share_distribution": [
                    { "competitor_name": "Acme", "market_share": 45 },
                    { "competitor_name": "Globex", "market_share": 30 },
                    { "competitor_name": "Initech", "market_share": 25 }
                ]
            },
            "regional_analysis": {
                "regions": [
                    { "region": "North America", "market_size": 6 },
                    { "region": "Europe", "market_size": 4 }
                ]
            }
        })))
        .unwrap();

        assert_eq!(
            dataset.growth_data,
            vec![
                GrowthPoint { year: 2024.0, size: 10.0 },
                GrowthPoint { year: 2029.0, size: 50.0 },
            ]
        );
        assert_eq!(dataset.segments_data.len(), 2);
        assert_eq!(dataset.segments_data[0].name, "Consumer");
        assert_eq!(dataset.competitive_data.len(), 3);
        assert_eq!(dataset.competitive_data[1].share, 30.0);
        assert_eq!(dataset.regional_data.len(), 2);
        assert_eq!(dataset.regional_data[1].region, "Europe");
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_missing_market_analysis_is_the_only_error() {
        let missing = MarketChartsResponse {
            market_analysis: None,
        };
        assert_eq!(
            transform(&missing),
            Err(ChartError::MissingMarketAnalysis)
        );
    }

    #[test]
    fn test_empty_analysis_yields_empty_dataset() {
        let dataset = transform(&response(json!({}))).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.growth_data.is_empty());
    }

    #[test]
    fn test_numeric_strings_parse() {
        let dataset = transform(&response(json!({
            "market_overview": {
                "total_market_size": { "year": "2024", "value": "12.5" }
            }
        })))
        .unwrap();

        assert_eq!(
            dataset.growth_data,
            vec![GrowthPoint { year: 2024.0, size: 12.5 }]
        );
    }

    #[test]
    fn test_unparseable_values_default_to_zero() {
        let dataset = transform(&response(json!({
            "market_overview": {
                "total_market_size": { "year": "next year", "value": "$4.2B" },
                "market_segments": [
                    { "segment_size": true },
                    { "segment_name": 7, "segment_size": null }
                ]
            }
        })))
        .unwrap();

        assert_eq!(
            dataset.growth_data,
            vec![GrowthPoint { year: 0.0, size: 0.0 }]
        );
        // Non-string names and non-numeric sizes degrade, never error
        assert_eq!(dataset.segments_data[0].name, "");
        assert_eq!(dataset.segments_data[0].value, 0.0);
        assert_eq!(dataset.segments_data[1].name, "");
        assert_eq!(dataset.segments_data[1].value, 0.0);
    }

    #[test]
    fn test_projected_only_yields_single_point() {
        let dataset = transform(&response(json!({
            "market_overview": {
                "total_market_size_projected": { "year": 2030, "value": 9.5 }
            }
        })))
        .unwrap();

        assert_eq!(
            dataset.growth_data,
            vec![GrowthPoint { year: 2030.0, size: 9.5 }]
        );
    }

    #[test]
    fn test_non_array_collections_are_ignored() {
        let dataset = transform(&response(json!({
            "market_overview": { "market_segments": { "oops": "object" } },
            "competitive_landscape": { "market_share_distribution": "none" },
            "regional_analysis": { "regions": 3 }
        })))
        .unwrap();

        assert!(dataset.is_empty());
    }

    #[test]
    fn test_source_order_is_preserved() {
        let dataset = transform(&response(json!({
            "competitive_landscape": {
                "market_share_distribution": [
                    { "competitor_name": "Zeta", "market_share": 5 },
                    { "competitor_name": "Alpha", "market_share": 95 }
                ]
            }
        })))
        .unwrap();

        assert_eq!(dataset.competitive_data[0].name, "Zeta");
        assert_eq!(dataset.competitive_data[1].name, "Alpha");
    }
}
