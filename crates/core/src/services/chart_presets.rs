use crate::models::chart::{
    Animation, Axis, Canvas, ChartConfig, ChartData, ChartOptions, ChartType, Dataset, Fill,
    Interaction, Legend, LegendPosition, LinearGradient, Padding, Scales, ValueFormat,
};
use crate::models::series::{ChartKind, SeriesKey, SeriesSet};

pub const VALUE_COLOR: &str = "#0d6efd";
pub const COST_COLOR: &str = "#6c757d";
pub const CPI_COLOR: &str = "#dc3545";
pub const GRADIENT_TOP: &str = "rgba(13, 110, 253, 0.25)";
pub const GRADIENT_BOTTOM: &str = "rgba(13, 110, 253, 0.00)";
const GRID_COLOR: &str = "rgba(0,0,0,0.06)";

/// Slice colours for the allocation donut; the backend cycles through them.
pub const ALLOCATION_PALETTE: [&str; 8] = [
    "#0d6efd", "#198754", "#ffc107", "#dc3545", "#6f42c1", "#20c997", "#fd7e14", "#6c757d",
];

/// Full option set for a first-time construction.
///
/// Any gradient is sized to `canvas` here, once.
pub fn build_config(set: &SeriesSet, canvas: &Canvas) -> ChartConfig {
    let datasets = match set.kind {
        ChartKind::Value => value_datasets(canvas),
        ChartKind::InflationComparison => inflation_datasets(),
        ChartKind::Allocation => allocation_datasets(),
    };

    let mut config = ChartConfig {
        chart_type: match set.kind {
            ChartKind::Allocation => ChartType::Doughnut,
            _ => ChartType::Line,
        },
        data: ChartData {
            labels: set.labels.clone(),
            datasets,
        },
        options: options_for(set.kind),
    };

    for dataset in &mut config.data.datasets {
        if let Some(series) = set.get(dataset.key) {
            dataset.label = series.label.clone();
            dataset.data = series.data.clone();
        }
    }
    config
}

fn common_options(legend: Legend, tooltip_format: ValueFormat) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        interaction: Interaction {
            mode: "index".to_string(),
            intersect: false,
        },
        animation: Animation {
            duration: 400,
            easing: "easeOutQuart".to_string(),
        },
        line_width: 2.0,
        point_hit_radius: 12.0,
        legend,
        tooltip_format,
        scales: None,
        padding: None,
        cutout: None,
    }
}

fn hidden_legend() -> Legend {
    Legend {
        display: false,
        position: LegendPosition::Top,
    }
}

fn bottom_legend() -> Legend {
    Legend {
        display: true,
        position: LegendPosition::Bottom,
    }
}

fn options_for(kind: ChartKind) -> ChartOptions {
    match kind {
        ChartKind::Value => ChartOptions {
            scales: Some(Scales {
                x: Axis {
                    grid_display: false,
                    grid_color: None,
                    max_ticks_limit: Some(8),
                    begin_at_zero: false,
                    tick_format: ValueFormat::Plain,
                },
                y: Axis {
                    grid_display: true,
                    grid_color: Some(GRID_COLOR.to_string()),
                    max_ticks_limit: None,
                    begin_at_zero: false,
                    tick_format: ValueFormat::Currency,
                },
            }),
            padding: Some(Padding {
                left: 8,
                right: 16,
                top: 8,
                bottom: 8,
            }),
            ..common_options(hidden_legend(), ValueFormat::Currency)
        },
        ChartKind::InflationComparison => ChartOptions {
            scales: Some(Scales {
                x: Axis {
                    grid_display: false,
                    grid_color: None,
                    max_ticks_limit: None,
                    begin_at_zero: false,
                    tick_format: ValueFormat::Plain,
                },
                y: Axis {
                    grid_display: true,
                    grid_color: Some(GRID_COLOR.to_string()),
                    max_ticks_limit: None,
                    begin_at_zero: false,
                    tick_format: ValueFormat::PercentTick,
                },
            }),
            ..common_options(bottom_legend(), ValueFormat::PercentTooltip)
        },
        ChartKind::Allocation => ChartOptions {
            cutout: Some("60%".to_string()),
            ..common_options(bottom_legend(), ValueFormat::Currency)
        },
    }
}

fn line(key: SeriesKey, border: &str, background: Fill) -> Dataset {
    Dataset {
        key,
        label: String::new(),
        data: Vec::new(),
        border_color: border.to_string(),
        background_color: background,
        fill: false,
        tension: 0.25,
        point_radius: 0.0,
        point_hover_radius: 4.0,
        y_axis_id: None,
    }
}

fn value_datasets(canvas: &Canvas) -> Vec<Dataset> {
    let gradient = LinearGradient::vertical(canvas.height_px, GRADIENT_TOP, GRADIENT_BOTTOM);
    vec![
        Dataset {
            fill: true,
            tension: 0.3,
            point_radius: 2.0,
            point_hover_radius: 6.0,
            ..line(SeriesKey::Value, VALUE_COLOR, Fill::Gradient(gradient))
        },
        Dataset {
            tension: 0.3,
            ..line(
                SeriesKey::CostBasis,
                COST_COLOR,
                Fill::Color("rgba(108,117,125,0.00)".to_string()),
            )
        },
    ]
}

fn inflation_datasets() -> Vec<Dataset> {
    vec![
        Dataset {
            y_axis_id: Some("y".to_string()),
            ..line(
                SeriesKey::PortfolioYoy,
                VALUE_COLOR,
                Fill::Color("rgba(13,110,253,0.12)".to_string()),
            )
        },
        Dataset {
            y_axis_id: Some("y".to_string()),
            ..line(
                SeriesKey::CpiYoy,
                CPI_COLOR,
                Fill::Color("rgba(220,53,69,0.10)".to_string()),
            )
        },
    ]
}

fn allocation_datasets() -> Vec<Dataset> {
    vec![Dataset {
        tension: 0.0,
        point_hover_radius: 0.0,
        ..line(
            SeriesKey::Allocation,
            "#ffffff",
            Fill::Palette(ALLOCATION_PALETTE.iter().map(|c| c.to_string()).collect()),
        )
    }]
}
