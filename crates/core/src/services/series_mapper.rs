use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::payload::{AllocationPayload, ChartPayload, ComparisonPayload, TimeSeriesPayload};
use crate::models::series::{ChartKind, Series, SeriesKey, SeriesSet};
use crate::models::settings::SeriesLabels;

/// Shapes parsed payloads into chart-ready series sets.
///
/// The mapper only arranges data; it never drops or reorders points.
/// Shape mismatches are logged and passed through as-is.
pub struct SeriesMapper {
    labels: SeriesLabels,
}

impl SeriesMapper {
    pub fn new(labels: SeriesLabels) -> Self {
        Self { labels }
    }

    /// Value line plus cost-basis line.
    ///
    /// The cost series is always present so an update can clear it; it is
    /// empty when the payload carries no `costs`.
    pub fn map_time_series(&self, payload: &TimeSeriesPayload) -> SeriesSet {
        warn_on_shape(ChartKind::Value, payload);
        SeriesSet {
            kind: ChartKind::Value,
            labels: payload.labels.clone(),
            series: vec![
                Series::new(SeriesKey::Value, &self.labels.value, payload.values.clone()),
                Series::new(
                    SeriesKey::CostBasis,
                    &self.labels.cost_basis,
                    payload.costs.clone().unwrap_or_default(),
                ),
            ],
        }
    }

    /// Portfolio and CPI YoY lines on one percentage axis, labelled by month.
    pub fn map_comparison(&self, payload: &ComparisonPayload) -> SeriesSet {
        warn_on_shape(ChartKind::InflationComparison, payload);
        SeriesSet {
            kind: ChartKind::InflationComparison,
            labels: payload
                .labels
                .iter()
                .map(|l| truncate_to_year_month(l))
                .collect(),
            series: vec![
                Series::new(
                    SeriesKey::PortfolioYoy,
                    &self.labels.portfolio_yoy,
                    payload.portfolio_yoy.clone(),
                ),
                Series::new(SeriesKey::CpiYoy, &self.labels.cpi_yoy, payload.cpi_yoy.clone()),
            ],
        }
    }

    /// One value per category; the donut renders them as shares.
    pub fn map_allocation(&self, payload: &AllocationPayload) -> SeriesSet {
        warn_on_shape(ChartKind::Allocation, payload);
        SeriesSet {
            kind: ChartKind::Allocation,
            labels: payload.labels.clone(),
            series: vec![Series::new(
                SeriesKey::Allocation,
                &self.labels.allocation,
                payload.values.clone(),
            )],
        }
    }
}

impl Default for SeriesMapper {
    fn default() -> Self {
        Self::new(SeriesLabels::default())
    }
}

/// Reduce a date label to `YYYY-MM`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (taken in UTC), naive
/// `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM`. Anything else keeps its first
/// seven characters.
pub fn truncate_to_year_month(label: &str) -> String {
    let label = label.trim();

    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return date.format("%Y-%m").to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(label) {
        return ts.with_timezone(&Utc).format("%Y-%m").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(label, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d") {
        return date.format("%Y-%m").to_string();
    }

    label.chars().take(7).collect()
}

fn warn_on_shape(kind: ChartKind, payload: &impl ChartPayload) {
    if let Err(e) = payload.check_shape() {
        log::warn!("{kind} chart payload bound as-is: {e}");
    }
}
