use serde::{Deserialize, Serialize};

/// Buttons shown in the calendar header, in the widget's comma syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderToolbar {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Default for HeaderToolbar {
    fn default() -> Self {
        Self {
            left: "prev,next today".to_string(),
            center: "title".to_string(),
            right: "multiMonthYear,dayGridMonth,timeGridWeek".to_string(),
        }
    }
}

/// Static calendar widget options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    pub initial_view: String,
    pub height: String,
    pub locale: String,
    /// 0 = Sunday, 1 = Monday
    pub first_day: u8,
    pub header_toolbar: HeaderToolbar,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            initial_view: "dayGridMonth".to_string(),
            height: "auto".to_string(),
            locale: "pl".to_string(),
            first_day: 1,
            header_toolbar: HeaderToolbar::default(),
        }
    }
}

/// Options plus events, handed to the render backend once at load.
///
/// Event objects are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSetup {
    pub element_id: String,
    #[serde(flatten)]
    pub config: CalendarConfig,
    pub events: Vec<serde_json::Value>,
}
