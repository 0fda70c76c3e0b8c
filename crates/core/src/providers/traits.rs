use async_trait::async_trait;

use crate::errors::ChartError;
use crate::models::calendar::CalendarSetup;
use crate::models::chart::{Canvas, ChartConfig, ChartData, ChartHandle};
use crate::models::payload::TimeSeriesPayload;
use crate::models::period::Frequency;

/// Source of refreshed value-chart data (the chart-data endpoint).
///
/// The HTTP implementation lives in [`super::http`]; tests and other hosts
/// can plug in their own.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChartDataSource: Send + Sync {
    /// Human-readable name (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the time series aggregated at `freq`.
    async fn fetch_time_series(&self, freq: Frequency) -> Result<TimeSeriesPayload, ChartError>;
}

/// The external charting / calendar library.
///
/// The core decides *what* to draw and *when*; the backend only draws.
pub trait RenderBackend {
    /// Build a chart on `canvas`. Called at most once per canvas.
    fn construct_chart(
        &mut self,
        canvas: &Canvas,
        config: &ChartConfig,
    ) -> Result<ChartHandle, ChartError>;

    /// Redraw an existing chart after its data was replaced in place.
    /// Styling and options are unchanged since construction.
    fn redraw_chart(&mut self, handle: ChartHandle, data: &ChartData) -> Result<(), ChartError>;

    /// Initialise the events calendar.
    fn render_calendar(&mut self, setup: &CalendarSetup) -> Result<(), ChartError>;
}

/// Read-only view of the page's embedded elements.
pub trait PageSource {
    /// Text content of the element with `id`, or `None` if it is absent.
    fn text_content(&self, id: &str) -> Option<String>;

    /// Pixel height of a canvas element, if the page knows it.
    fn canvas_height(&self, _id: &str) -> Option<u32> {
        None
    }
}
