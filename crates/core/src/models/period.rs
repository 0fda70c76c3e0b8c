use serde::{Deserialize, Serialize};

/// Aggregation granularity understood by the chart-data endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    #[serde(rename = "D")]
    Daily,
    #[serde(rename = "W")]
    Weekly,
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "Q")]
    Quarterly,
}

impl Frequency {
    /// Backend code sent as the `freq` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Daily => "D",
            Frequency::Weekly => "W",
            Frequency::Monthly => "M",
            Frequency::Quarterly => "Q",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Value emitted by the period selector control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodSelection {
    #[default]
    Day,
    Week,
    Month,
    Quarter,
}

impl PeriodSelection {
    /// Parse a selector value. Anything unrecognised falls back to `Day`.
    pub fn from_ui(value: &str) -> Self {
        match value {
            "day" => PeriodSelection::Day,
            "week" => PeriodSelection::Week,
            "month" => PeriodSelection::Month,
            "quarter" => PeriodSelection::Quarter,
            _ => PeriodSelection::Day,
        }
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            PeriodSelection::Day => Frequency::Daily,
            PeriodSelection::Week => Frequency::Weekly,
            PeriodSelection::Month => Frequency::Monthly,
            PeriodSelection::Quarter => Frequency::Quarterly,
        }
    }
}

impl std::fmt::Display for PeriodSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodSelection::Day => write!(f, "day"),
            PeriodSelection::Week => write!(f, "week"),
            PeriodSelection::Month => write!(f, "month"),
            PeriodSelection::Quarter => write!(f, "quarter"),
        }
    }
}
