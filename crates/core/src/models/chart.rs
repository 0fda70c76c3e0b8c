use serde::{Deserialize, Serialize};

use super::series::SeriesKey;

/// A drawing surface on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// DOM id of the canvas element
    pub id: String,

    /// Pixel height at the moment the chart is built
    pub height_px: u32,
}

impl Canvas {
    pub fn new(id: impl Into<String>, height_px: u32) -> Self {
        Self {
            id: id.into(),
            height_px,
        }
    }
}

/// Opaque handle the render backend returns for a constructed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// Vertical gradient in canvas pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Top-to-bottom gradient spanning `height_px`.
    pub fn vertical(height_px: u32, top: &str, bottom: &str) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: f64::from(height_px),
            stops: vec![
                ColorStop {
                    offset: 0.0,
                    color: top.to_string(),
                },
                ColorStop {
                    offset: 1.0,
                    color: bottom.to_string(),
                },
            ],
        }
    }
}

/// Background of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Fill {
    Color(String),
    Gradient(LinearGradient),
    /// One colour per slice (donut charts)
    Palette(Vec<String>),
}

/// Declarative stand-in for a tick / tooltip formatter callback.
///
/// Backends apply it with [`crate::services::formatting::format_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormat {
    /// Localised currency string
    Currency,
    /// `5%`, as printed on an axis
    PercentTick,
    /// ` label: 5.00%`, as printed in a tooltip
    PercentTooltip,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub key: SeriesKey,
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: Fill,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: f64,
    pub point_hover_radius: f64,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn dataset(&self, key: SeriesKey) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.key == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub mode: String,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub grid_display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u32>,
    pub begin_at_zero: bool,
    pub tick_format: ValueFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: Interaction,
    pub animation: Animation,
    pub line_width: f64,
    pub point_hit_radius: f64,
    pub legend: Legend,
    pub tooltip_format: ValueFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    /// Donut hole size, e.g. `"60%"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
}

/// Everything a charting library needs to construct one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}
