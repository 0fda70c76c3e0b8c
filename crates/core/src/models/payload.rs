use serde::{Deserialize, Serialize};

use crate::errors::ChartError;

/// Portfolio value over time, as embedded in `ts-data` or returned by the
/// chart-data endpoint.
///
/// Missing fields decode to empty sequences, so `{}` is a valid empty payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPayload {
    /// Date or category labels, in plotting order
    #[serde(default)]
    pub labels: Vec<String>,

    /// Portfolio value per label
    #[serde(default)]
    pub values: Vec<f64>,

    /// Invested capital per label; `None` (absent or `null`) means no cost line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<Vec<f64>>,
}

/// Portfolio year-over-year return against CPI inflation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPayload {
    /// Full dates (`YYYY-MM-DD` or timestamps); truncated to `YYYY-MM` for display
    #[serde(default)]
    pub labels: Vec<String>,

    /// Portfolio YoY change in percent
    #[serde(default)]
    pub portfolio_yoy: Vec<f64>,

    /// CPI YoY change in percent
    #[serde(default)]
    pub cpi_yoy: Vec<f64>,
}

/// Current value split by category, for the donut chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationPayload {
    /// Category names (unique)
    #[serde(default)]
    pub labels: Vec<String>,

    /// Value per category
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Common view over every payload kind.
pub trait ChartPayload {
    fn labels(&self) -> &[String];

    /// Named numeric sequences that must line up with `labels`.
    fn numeric_fields(&self) -> Vec<(&'static str, usize)>;

    fn is_empty(&self) -> bool {
        self.labels().is_empty()
    }

    /// Report the first sequence whose length differs from `labels`.
    ///
    /// Binding never calls this as a gate; mismatched payloads still render.
    fn check_shape(&self) -> Result<(), ChartError> {
        let labels = self.labels().len();
        for (field, len) in self.numeric_fields() {
            if len != labels {
                return Err(ChartError::DataShape {
                    labels,
                    field: field.to_string(),
                    len,
                });
            }
        }
        Ok(())
    }
}

impl ChartPayload for TimeSeriesPayload {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn numeric_fields(&self) -> Vec<(&'static str, usize)> {
        let mut fields = vec![("values", self.values.len())];
        if let Some(costs) = &self.costs {
            fields.push(("costs", costs.len()));
        }
        fields
    }
}

impl ChartPayload for ComparisonPayload {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn numeric_fields(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("portfolio_yoy", self.portfolio_yoy.len()),
            ("cpi_yoy", self.cpi_yoy.len()),
        ]
    }
}

impl ChartPayload for AllocationPayload {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn numeric_fields(&self) -> Vec<(&'static str, usize)> {
        vec![("values", self.values.len())]
    }
}
