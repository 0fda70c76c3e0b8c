use serde::{Deserialize, Serialize};

/// Which of the three dashboard charts a series set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Portfolio value over time, with optional cost basis
    Value,
    /// Portfolio YoY return vs CPI YoY
    InflationComparison,
    /// Donut of current value per category
    Allocation,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Value => write!(f, "value"),
            ChartKind::InflationComparison => write!(f, "inflation"),
            ChartKind::Allocation => write!(f, "allocation"),
        }
    }
}

/// Stable identity of a series, used to match datasets on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKey {
    Value,
    CostBasis,
    PortfolioYoy,
    CpiYoy,
    Allocation,
}

/// One named sequence of values plotted against the shared label axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: SeriesKey,
    /// Legend / tooltip label
    pub label: String,
    pub data: Vec<f64>,
}

impl Series {
    pub fn new(key: SeriesKey, label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            key,
            label: label.into(),
            data,
        }
    }
}

/// Chart-ready output of the series mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl SeriesSet {
    /// "No data": zero labels. The binder will not construct a chart from it.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, key: SeriesKey) -> Option<&Series> {
        self.series.iter().find(|s| s.key == key)
    }
}
