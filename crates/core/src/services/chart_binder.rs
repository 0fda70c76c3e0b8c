use crate::errors::ChartError;
use crate::models::chart::{Canvas, ChartConfig, ChartData, ChartHandle};
use crate::models::series::{ChartKind, SeriesSet};
use crate::providers::traits::RenderBackend;
use crate::services::chart_presets;

/// What a `render` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No chart yet and no data: nothing was drawn
    Skipped,
    /// First chart built on this canvas
    Constructed,
    /// Existing chart had its data replaced and was redrawn
    Updated,
}

/// A live chart: the backend handle plus the configuration it was built
/// from, whose data is replaced in place on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    handle: ChartHandle,
    config: ChartConfig,
}

impl ChartInstance {
    pub fn handle(&self) -> ChartHandle {
        self.handle
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn data(&self) -> &ChartData {
        &self.config.data
    }
}

/// Owns the (at most one) chart living on a canvas.
///
/// The first non-empty series set constructs the chart; every later set
/// updates it in place. Options, colours and the value chart's gradient
/// are fixed at construction.
#[derive(Debug)]
pub struct ChartBinder {
    kind: ChartKind,
    canvas: Canvas,
    instance: Option<ChartInstance>,
    constructions: usize,
}

impl ChartBinder {
    pub fn new(kind: ChartKind, canvas: Canvas) -> Self {
        Self {
            kind,
            canvas,
            instance: None,
            constructions: 0,
        }
    }

    /// Binder for the portfolio value chart.
    pub fn value(canvas: Canvas) -> Self {
        Self::new(ChartKind::Value, canvas)
    }

    /// Binder for the portfolio vs CPI comparison chart.
    pub fn inflation(canvas: Canvas) -> Self {
        Self::new(ChartKind::InflationComparison, canvas)
    }

    /// Binder for the allocation donut.
    pub fn allocation(canvas: Canvas) -> Self {
        Self::new(ChartKind::Allocation, canvas)
    }

    /// Construct or update the chart from `set`.
    ///
    /// - no chart, empty set → `Skipped`
    /// - no chart, data → `Constructed`
    /// - chart exists → `Updated` (labels and every dataset replaced; a
    ///   dataset missing from `set` becomes empty)
    ///
    /// A failed construction leaves the canvas empty so a later call can
    /// retry.
    pub fn render(
        &mut self,
        set: &SeriesSet,
        backend: &mut dyn RenderBackend,
    ) -> Result<RenderOutcome, ChartError> {
        if set.kind != self.kind {
            return Err(ChartError::Render(format!(
                "{} series cannot be bound to the {} chart on '{}'",
                set.kind, self.kind, self.canvas.id
            )));
        }

        match self.instance.as_mut() {
            Some(instance) => {
                // The stored data only changes once the backend has drawn it.
                let mut data = instance.config.data.clone();
                data.labels = set.labels.clone();
                for dataset in &mut data.datasets {
                    dataset.data = set
                        .get(dataset.key)
                        .map(|s| s.data.clone())
                        .unwrap_or_default();
                }
                log::debug!(
                    "updating {} chart on '{}' with {} labels",
                    self.kind,
                    self.canvas.id,
                    data.labels.len()
                );
                backend.redraw_chart(instance.handle, &data)?;
                instance.config.data = data;
                Ok(RenderOutcome::Updated)
            }
            None if set.is_empty() => {
                log::debug!("no data for {} chart on '{}', skipping", self.kind, self.canvas.id);
                Ok(RenderOutcome::Skipped)
            }
            None => {
                let config = chart_presets::build_config(set, &self.canvas);
                let handle = backend.construct_chart(&self.canvas, &config)?;
                log::debug!(
                    "constructed {} chart on '{}' with {} labels",
                    self.kind,
                    self.canvas.id,
                    config.data.labels.len()
                );
                self.instance = Some(ChartInstance { handle, config });
                self.constructions += 1;
                Ok(RenderOutcome::Constructed)
            }
        }
    }

    /// Record the canvas's current pixel height. Only a later construction
    /// sees it; a live chart keeps the gradient it was built with.
    pub fn set_canvas_height(&mut self, height_px: u32) {
        self.canvas.height_px = height_px;
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn instance(&self) -> Option<&ChartInstance> {
        self.instance.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.instance.is_some()
    }

    /// Number of charts ever built on this canvas (0 or 1).
    pub fn construction_count(&self) -> usize {
        self.constructions
    }
}
