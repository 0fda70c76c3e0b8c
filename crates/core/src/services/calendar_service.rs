use crate::models::calendar::{CalendarConfig, CalendarSetup};
use crate::services::parser::parse_or_default;

/// Builds the events calendar from the embedded event list.
pub struct CalendarService {
    config: CalendarConfig,
}

impl CalendarService {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Calendar setup for `element_id`. Missing, malformed or `null` event
    /// data gives an empty calendar rather than none at all.
    pub fn build(&self, element_id: &str, events_text: Option<&str>) -> CalendarSetup {
        let events: Vec<serde_json::Value> = parse_or_default(events_text);
        CalendarSetup {
            element_id: element_id.to_string(),
            config: self.config.clone(),
            events,
        }
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new(CalendarConfig::default())
    }
}
