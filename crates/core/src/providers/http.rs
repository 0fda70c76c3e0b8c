use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::ChartDataSource;
use crate::errors::ChartError;
use crate::models::payload::TimeSeriesPayload;
use crate::models::period::Frequency;
use crate::models::settings::EndpointConfig;

/// Chart-data endpoint over HTTP.
///
/// - **Request**: `GET {base_url}{chart_data_path}?freq={D|W|M|Q}`
/// - **Response**: JSON `TimeSeriesPayload`
///
/// Non-success statuses become `ChartError::Api`, bodies that are not a
/// payload become `ChartError::ResponseParse`.
pub struct HttpChartDataSource {
    client: Client,
    endpoint: String,
}

impl HttpChartDataSource {
    pub fn new(config: &EndpointConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            endpoint: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                config.chart_data_path
            ),
        }
    }

    /// Full request URL for `freq`.
    pub fn url_for(&self, freq: Frequency) -> String {
        format!("{}?freq={}", self.endpoint, freq.code())
    }
}

impl Default for HttpChartDataSource {
    fn default() -> Self {
        Self::new(&EndpointConfig::default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChartDataSource for HttpChartDataSource {
    fn name(&self) -> &str {
        "chart-data endpoint"
    }

    async fn fetch_time_series(&self, freq: Frequency) -> Result<TimeSeriesPayload, ChartError> {
        let url = self.url_for(freq);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChartError::Api {
                status: status.as_u16(),
                message: format!("chart data request for freq={freq} failed"),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ChartError::ResponseParse(format!("freq={freq}: {e}")))
    }
}
