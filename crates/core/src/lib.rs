pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::payload::{AllocationPayload, ComparisonPayload, TimeSeriesPayload};
use models::settings::DashboardConfig;
use providers::http::HttpChartDataSource;
use providers::traits::{ChartDataSource, PageSource, RenderBackend};
use services::{
    calendar_service::CalendarService,
    chart_binder::{ChartBinder, RenderOutcome},
    parser::parse_or_default,
    refresh_controller::{ChartDataRequested, RefreshCompletion, RefreshController, RefreshOutcome},
    series_mapper::SeriesMapper,
};

use errors::ChartError;
use models::chart::Canvas;

/// Per-widget result of [`PortfolioDashboard::initialize`].
///
/// Each widget initialises on its own; one failing never blocks the others.
#[derive(Debug)]
pub struct InitReport {
    pub value_chart: Result<RenderOutcome, ChartError>,
    pub inflation_chart: Result<RenderOutcome, ChartError>,
    pub allocation_chart: Result<RenderOutcome, ChartError>,
    pub calendar: Result<(), ChartError>,
}

/// Main entry point: the analytics page's three charts, the events
/// calendar and the period-refresh wiring.
#[must_use]
pub struct PortfolioDashboard {
    config: DashboardConfig,
    mapper: SeriesMapper,
    value_chart: ChartBinder,
    inflation_chart: ChartBinder,
    allocation_chart: ChartBinder,
    refresh: RefreshController,
    calendar: CalendarService,
    backend: Box<dyn RenderBackend>,
    source: Box<dyn ChartDataSource>,
}

impl std::fmt::Debug for PortfolioDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("value_chart", &self.value_chart.is_live())
            .field("inflation_chart", &self.inflation_chart.is_live())
            .field("allocation_chart", &self.allocation_chart.is_live())
            .field("refresh", &self.refresh.state())
            .field("source", &self.source.name())
            .finish()
    }
}

impl PortfolioDashboard {
    pub fn new(
        config: DashboardConfig,
        backend: Box<dyn RenderBackend>,
        source: Box<dyn ChartDataSource>,
    ) -> Self {
        let ids = &config.elements;
        let height = config.canvas_height_px;
        Self {
            mapper: SeriesMapper::new(config.labels.clone()),
            value_chart: ChartBinder::value(Canvas::new(&ids.value_canvas, height)),
            inflation_chart: ChartBinder::inflation(Canvas::new(&ids.inflation_canvas, height)),
            allocation_chart: ChartBinder::allocation(Canvas::new(&ids.allocation_canvas, height)),
            refresh: RefreshController::new(config.refresh_policy),
            calendar: CalendarService::new(config.calendar.clone()),
            backend,
            source,
            config,
        }
    }

    /// Dashboard that refreshes from the configured HTTP endpoint.
    pub fn with_http(config: DashboardConfig, backend: Box<dyn RenderBackend>) -> Self {
        let source = HttpChartDataSource::new(&config.endpoint);
        Self::new(config, backend, Box::new(source))
    }

    /// Read the embedded data once and draw every widget that has data.
    pub fn initialize(&mut self, page: &dyn PageSource) -> InitReport {
        let ids = self.config.elements.clone();

        for binder in [
            &mut self.value_chart,
            &mut self.inflation_chart,
            &mut self.allocation_chart,
        ] {
            if let Some(height) = page.canvas_height(&binder.canvas().id) {
                binder.set_canvas_height(height);
            }
        }

        let ts: TimeSeriesPayload =
            parse_or_default(page.text_content(&ids.time_series_data).as_deref());
        let value_chart = self
            .value_chart
            .render(&self.mapper.map_time_series(&ts), self.backend.as_mut());

        let cmp: ComparisonPayload =
            parse_or_default(page.text_content(&ids.inflation_data).as_deref());
        let inflation_chart = self
            .inflation_chart
            .render(&self.mapper.map_comparison(&cmp), self.backend.as_mut());

        let alloc: AllocationPayload =
            parse_or_default(page.text_content(&ids.allocation_data).as_deref());
        let allocation_chart = self
            .allocation_chart
            .render(&self.mapper.map_allocation(&alloc), self.backend.as_mut());

        let setup = self
            .calendar
            .build(&ids.calendar, page.text_content(&ids.events_data).as_deref());
        let calendar = self.backend.render_calendar(&setup);

        let report = InitReport {
            value_chart,
            inflation_chart,
            allocation_chart,
            calendar,
        };
        for (widget, err) in [
            ("value chart", report.value_chart.as_ref().err()),
            ("inflation chart", report.inflation_chart.as_ref().err()),
            ("allocation chart", report.allocation_chart.as_ref().err()),
            ("calendar", report.calendar.as_ref().err()),
        ] {
            if let Some(err) = err {
                log::error!("{widget} failed to initialise: {err}");
            }
        }
        report
    }

    // ── Period refresh ──────────────────────────────────────────────

    /// Refresh the value chart for a period-selector value
    /// (`day`/`week`/`month`/`quarter`).
    pub async fn on_period_changed(&mut self, period: &str) -> RefreshOutcome {
        self.refresh
            .on_period_changed(
                period,
                self.source.as_ref(),
                &self.mapper,
                &mut self.value_chart,
                self.backend.as_mut(),
            )
            .await
    }

    /// Start a refresh without awaiting it; pair with
    /// [`RefreshController::fetch`] on [`Self::source`] and
    /// [`Self::apply_refresh`].
    pub fn begin_refresh(&mut self, period: &str) -> ChartDataRequested {
        self.refresh.request(period)
    }

    /// Feed a finished fetch back into the value chart.
    pub fn apply_refresh(&mut self, completion: RefreshCompletion) -> RefreshOutcome {
        self.refresh.complete(
            completion,
            &self.mapper,
            &mut self.value_chart,
            self.backend.as_mut(),
        )
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn source(&self) -> &dyn ChartDataSource {
        self.source.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn value_chart(&self) -> &ChartBinder {
        &self.value_chart
    }

    #[must_use]
    pub fn inflation_chart(&self) -> &ChartBinder {
        &self.inflation_chart
    }

    #[must_use]
    pub fn allocation_chart(&self) -> &ChartBinder {
        &self.allocation_chart
    }

    #[must_use]
    pub fn refresh_controller(&self) -> &RefreshController {
        &self.refresh
    }
}
