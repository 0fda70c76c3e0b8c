use crate::errors::ChartError;
use crate::models::payload::TimeSeriesPayload;
use crate::models::period::{Frequency, PeriodSelection};
use crate::models::settings::RefreshPolicy;
use crate::providers::traits::{ChartDataSource, RenderBackend};
use crate::services::chart_binder::{ChartBinder, RenderOutcome};
use crate::services::series_mapper::SeriesMapper;

/// Idle, or waiting on one or more chart-data requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Fetching { in_flight: usize },
}

/// Side effect of a period change: fetch data at `freq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDataRequested {
    /// Monotonic per controller, starting at 1
    pub seq: u64,
    pub period: PeriodSelection,
    pub freq: Frequency,
}

/// Result of one fetch, fed back into [`RefreshController::complete`].
#[derive(Debug)]
pub enum RefreshCompletion {
    ChartDataReceived {
        request: ChartDataRequested,
        payload: TimeSeriesPayload,
    },
    ChartFetchFailed {
        request: ChartDataRequested,
        error: ChartError,
    },
}

impl RefreshCompletion {
    pub fn request(&self) -> ChartDataRequested {
        match self {
            RefreshCompletion::ChartDataReceived { request, .. }
            | RefreshCompletion::ChartFetchFailed { request, .. } => *request,
        }
    }
}

/// What a completion did to the chart.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// Payload bound to the chart
    Applied(RenderOutcome),
    /// Fetch or render failed; the chart keeps its previous state
    Failed(ChartError),
    /// Superseded by a newer, already-applied request (sequenced policy only)
    Stale,
}

/// Drives value-chart refreshes when the user picks another period.
///
/// Requests are neither de-duplicated nor cancelled. Under the default
/// [`RefreshPolicy::LastResolvedWins`] every successful completion is
/// applied, so the last one to resolve decides the final chart.
#[derive(Debug)]
pub struct RefreshController {
    policy: RefreshPolicy,
    state: RefreshState,
    next_seq: u64,
    latest_applied: Option<u64>,
}

impl RefreshController {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            state: RefreshState::Idle,
            next_seq: 1,
            latest_applied: None,
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Handle a period-selector change: Idle → Fetching.
    ///
    /// Unknown selector values request daily data.
    pub fn request(&mut self, period: &str) -> ChartDataRequested {
        let period = PeriodSelection::from_ui(period);
        let request = ChartDataRequested {
            seq: self.next_seq,
            period,
            freq: period.frequency(),
        };
        self.next_seq += 1;

        self.state = match self.state {
            RefreshState::Idle => RefreshState::Fetching { in_flight: 1 },
            RefreshState::Fetching { in_flight } => RefreshState::Fetching {
                in_flight: in_flight + 1,
            },
        };

        log::info!(
            "period changed to {period}, requesting chart data (freq={}, seq={})",
            request.freq,
            request.seq
        );
        request
    }

    /// Perform the fetch for `request`.
    ///
    /// Borrows nothing from the controller, so several fetches may be
    /// awaited concurrently.
    pub async fn fetch(
        source: &dyn ChartDataSource,
        request: ChartDataRequested,
    ) -> RefreshCompletion {
        match source.fetch_time_series(request.freq).await {
            Ok(payload) => RefreshCompletion::ChartDataReceived { request, payload },
            Err(error) => RefreshCompletion::ChartFetchFailed { request, error },
        }
    }

    /// Apply a completion: Fetching → Idle once nothing is in flight.
    ///
    /// Failures are logged and leave `binder` untouched.
    pub fn complete(
        &mut self,
        completion: RefreshCompletion,
        mapper: &SeriesMapper,
        binder: &mut ChartBinder,
        backend: &mut dyn RenderBackend,
    ) -> RefreshOutcome {
        self.state = match self.state {
            RefreshState::Fetching { in_flight } if in_flight > 1 => RefreshState::Fetching {
                in_flight: in_flight - 1,
            },
            _ => RefreshState::Idle,
        };

        let (request, payload) = match completion {
            RefreshCompletion::ChartDataReceived { request, payload } => (request, payload),
            RefreshCompletion::ChartFetchFailed { request, error } => {
                log::error!(
                    "Chart fetch error (freq={}, seq={}): {error}",
                    request.freq,
                    request.seq
                );
                return RefreshOutcome::Failed(error);
            }
        };

        if self.policy == RefreshPolicy::LatestRequestWins
            && self.latest_applied.is_some_and(|seq| seq > request.seq)
        {
            log::warn!(
                "dropping stale chart data (seq={}, newest applied={:?})",
                request.seq,
                self.latest_applied
            );
            return RefreshOutcome::Stale;
        }

        let set = mapper.map_time_series(&payload);
        match binder.render(&set, backend) {
            Ok(outcome) => {
                self.latest_applied = Some(
                    self.latest_applied
                        .map_or(request.seq, |seq| seq.max(request.seq)),
                );
                RefreshOutcome::Applied(outcome)
            }
            Err(error) => {
                log::error!("Chart render error (freq={}): {error}", request.freq);
                RefreshOutcome::Failed(error)
            }
        }
    }

    /// request → fetch → complete, in one go.
    pub async fn on_period_changed(
        &mut self,
        period: &str,
        source: &dyn ChartDataSource,
        mapper: &SeriesMapper,
        binder: &mut ChartBinder,
        backend: &mut dyn RenderBackend,
    ) -> RefreshOutcome {
        let request = self.request(period);
        let completion = Self::fetch(source, request).await;
        self.complete(completion, mapper, binder, backend)
    }
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new(RefreshPolicy::default())
    }
}
