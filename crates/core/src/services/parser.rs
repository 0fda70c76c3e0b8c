use serde::de::DeserializeOwned;

use crate::errors::ChartError;

/// Decode embedded JSON into `P`, or return `P::default()`.
///
/// Absent text, malformed JSON and a bare `null` all yield the empty
/// default. Never fails: a page rendered without data must not break the
/// charts that do have data.
pub fn parse_or_default<P>(text: Option<&str>) -> P
where
    P: DeserializeOwned + Default,
{
    let Some(text) = text else {
        log::debug!("embedded data element absent, using empty payload");
        return P::default();
    };

    match try_parse::<Option<P>>(text) {
        Ok(Some(payload)) => payload,
        Ok(None) => P::default(),
        Err(e) => {
            log::debug!("embedded data unreadable, using empty payload: {e}");
            P::default()
        }
    }
}

/// Strict decode. Whitespace-only input is an error like any other
/// malformed text.
pub fn try_parse<P>(text: &str) -> Result<P, ChartError>
where
    P: DeserializeOwned,
{
    serde_json::from_str(text.trim()).map_err(|e| ChartError::Parse(e.to_string()))
}
