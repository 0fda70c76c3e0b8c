use serde::{Deserialize, Serialize};

use super::calendar::CalendarConfig;
use crate::errors::ChartError;

/// Dashboard configuration. Every field has a default, so a partial JSON
/// document only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub endpoint: EndpointConfig,
    pub elements: ElementIds,
    pub currency: CurrencyFormat,
    pub labels: SeriesLabels,
    pub calendar: CalendarConfig,
    pub refresh_policy: RefreshPolicy,

    /// Canvas height used when the page does not report one
    pub canvas_height_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            elements: ElementIds::default(),
            currency: CurrencyFormat::default(),
            labels: SeriesLabels::default(),
            calendar: CalendarConfig::default(),
            refresh_policy: RefreshPolicy::default(),
            canvas_height_px: 300,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        serde_json::from_str(json).map_err(|e| ChartError::Config(e.to_string()))
    }
}

/// Where the chart-data endpoint lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub chart_data_path: String,
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            chart_data_path: "/portfolio/chart-data".to_string(),
            timeout_secs: 30,
        }
    }
}

/// DOM ids of the embedded data elements and chart canvases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub time_series_data: String,
    pub inflation_data: String,
    pub allocation_data: String,
    pub events_data: String,
    pub value_canvas: String,
    pub inflation_canvas: String,
    pub allocation_canvas: String,
    pub calendar: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            time_series_data: "ts-data".to_string(),
            inflation_data: "inflation-data".to_string(),
            allocation_data: "allocation-data".to_string(),
            events_data: "events-data".to_string(),
            value_canvas: "valueChart".to_string(),
            inflation_canvas: "inflationCompare".to_string(),
            allocation_canvas: "allocationChart".to_string(),
            calendar: "calendar".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale rules for rendering money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// ISO 4217 code, e.g. "PLN"
    pub currency: String,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// Space between number and a suffix symbol
    pub symbol_separator: String,
    pub group_separator: String,
    pub decimal_separator: String,
    /// Group thousands only when the integer part has at least
    /// `3 + min_grouping_digits` digits
    pub min_grouping_digits: u8,
    pub decimals: u8,
}

impl CurrencyFormat {
    /// `pl-PL` / PLN, e.g. `12 345,60 zł` (NBSP-separated).
    pub fn pln() -> Self {
        Self {
            currency: "PLN".to_string(),
            symbol: "zł".to_string(),
            symbol_position: SymbolPosition::Suffix,
            symbol_separator: "\u{a0}".to_string(),
            group_separator: "\u{a0}".to_string(),
            decimal_separator: ",".to_string(),
            min_grouping_digits: 2,
            decimals: 2,
        }
    }

    /// `en-US` / USD, e.g. `$12,345.60`.
    pub fn usd() -> Self {
        Self {
            currency: "USD".to_string(),
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            symbol_separator: String::new(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            min_grouping_digits: 1,
            decimals: 2,
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::pln()
    }
}

/// Legend and tooltip labels of each dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesLabels {
    pub value: String,
    pub cost_basis: String,
    pub portfolio_yoy: String,
    pub cpi_yoy: String,
    pub allocation: String,
}

impl Default for SeriesLabels {
    fn default() -> Self {
        Self {
            value: "Wartość (PLN)".to_string(),
            cost_basis: "Koszt (PLN)".to_string(),
            portfolio_yoy: "Portfel r/r (%)".to_string(),
            cpi_yoy: "Inflacja CPI r/r (%)".to_string(),
            allocation: "Alokacja".to_string(),
        }
    }
}

/// How completions of overlapping refresh requests are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Every completion is applied in arrival order; the last to resolve wins.
    #[default]
    LastResolvedWins,
    /// A completion older than one already applied is dropped.
    LatestRequestWins,
}
