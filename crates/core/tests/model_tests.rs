// ═══════════════════════════════════════════════════════════════════
// Model Tests — payloads, periods, configuration, chart config wire shape
// ═══════════════════════════════════════════════════════════════════

use portfolio_charts_core::errors::ChartError;
use portfolio_charts_core::models::calendar::CalendarConfig;
use portfolio_charts_core::models::chart::{Canvas, LinearGradient};
use portfolio_charts_core::models::payload::{
    AllocationPayload, ChartPayload, ComparisonPayload, TimeSeriesPayload,
};
use portfolio_charts_core::models::period::{Frequency, PeriodSelection};
use portfolio_charts_core::models::series::{ChartKind, SeriesKey, SeriesSet};
use portfolio_charts_core::models::settings::{
    CurrencyFormat, DashboardConfig, RefreshPolicy, SymbolPosition,
};
use portfolio_charts_core::services::chart_presets::build_config;

// ── Payload decoding ────────────────────────────────────────────────

mod payloads {
    use super::*;

    #[test]
    fn time_series_with_costs() {
        let p: TimeSeriesPayload = serde_json::from_str(
            r#"{"labels":["2024-01","2024-02"],"values":[1000,1100],"costs":[900,900]}"#,
        )
        .unwrap();
        assert_eq!(p.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(p.values, vec![1000.0, 1100.0]);
        assert_eq!(p.costs, Some(vec![900.0, 900.0]));
    }

    #[test]
    fn time_series_without_costs() {
        let p: TimeSeriesPayload =
            serde_json::from_str(r#"{"labels":["a"],"values":[1]}"#).unwrap();
        assert!(p.costs.is_none());
    }

    #[test]
    fn time_series_null_costs_is_none() {
        let p: TimeSeriesPayload =
            serde_json::from_str(r#"{"labels":["a"],"values":[1],"costs":null}"#).unwrap();
        assert!(p.costs.is_none());
    }

    #[test]
    fn empty_object_is_empty_payload() {
        let ts: TimeSeriesPayload = serde_json::from_str("{}").unwrap();
        let cmp: ComparisonPayload = serde_json::from_str("{}").unwrap();
        let alloc: AllocationPayload = serde_json::from_str("{}").unwrap();
        assert!(ts.is_empty());
        assert!(cmp.is_empty());
        assert!(alloc.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p: AllocationPayload =
            serde_json::from_str(r#"{"labels":["Skarbowe"],"values":[1500],"extra":true}"#)
                .unwrap();
        assert_eq!(p.labels, vec!["Skarbowe"]);
    }

    #[test]
    fn serialized_time_series_omits_absent_costs() {
        let p = TimeSeriesPayload {
            labels: vec!["a".into()],
            values: vec![1.0],
            costs: None,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("costs").is_none());
    }
}

// ── Shape checks ────────────────────────────────────────────────────

mod shape {
    use super::*;

    #[test]
    fn matching_lengths_pass() {
        let p = TimeSeriesPayload {
            labels: vec!["a".into(), "b".into()],
            values: vec![1.0, 2.0],
            costs: Some(vec![0.5, 0.5]),
        };
        assert!(p.check_shape().is_ok());
    }

    #[test]
    fn short_costs_reported() {
        let p = TimeSeriesPayload {
            labels: vec!["a".into(), "b".into()],
            values: vec![1.0, 2.0],
            costs: Some(vec![0.5]),
        };
        match p.check_shape() {
            Err(ChartError::DataShape { labels, field, len }) => {
                assert_eq!(labels, 2);
                assert_eq!(field, "costs");
                assert_eq!(len, 1);
            }
            other => panic!("Expected DataShape, got {:?}", other),
        }
    }

    #[test]
    fn comparison_cpi_mismatch_reported() {
        let p = ComparisonPayload {
            labels: vec!["2024-01-31".into()],
            portfolio_yoy: vec![4.0],
            cpi_yoy: vec![],
        };
        assert!(matches!(
            p.check_shape(),
            Err(ChartError::DataShape { ref field, .. }) if field == "cpi_yoy"
        ));
    }

    #[test]
    fn allocation_values_mismatch_reported() {
        let p = AllocationPayload {
            labels: vec!["A".into(), "B".into()],
            values: vec![1.0, 2.0, 3.0],
        };
        assert!(p.check_shape().is_err());
    }
}

// ── Period selection ────────────────────────────────────────────────

mod periods {
    use super::*;

    #[test]
    fn ui_values_map_to_frequency_codes() {
        assert_eq!(PeriodSelection::from_ui("day").frequency().code(), "D");
        assert_eq!(PeriodSelection::from_ui("week").frequency().code(), "W");
        assert_eq!(PeriodSelection::from_ui("month").frequency().code(), "M");
        assert_eq!(PeriodSelection::from_ui("quarter").frequency().code(), "Q");
    }

    #[test]
    fn unknown_values_default_to_daily() {
        for value in ["", "year", "Day", "WEEK", "q", " month"] {
            assert_eq!(
                PeriodSelection::from_ui(value).frequency(),
                Frequency::Daily,
                "value {value:?}"
            );
        }
    }

    #[test]
    fn display_round_trips_through_from_ui() {
        for p in [
            PeriodSelection::Day,
            PeriodSelection::Week,
            PeriodSelection::Month,
            PeriodSelection::Quarter,
        ] {
            assert_eq!(PeriodSelection::from_ui(&p.to_string()), p);
        }
    }

    #[test]
    fn frequency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Frequency::Quarterly).unwrap(), "\"Q\"");
        assert_eq!(Frequency::Weekly.to_string(), "W");
        assert_eq!(Frequency::default(), Frequency::Daily);
    }
}

// ── Configuration ───────────────────────────────────────────────────

mod config {
    use super::*;

    #[test]
    fn defaults_match_page_layout() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.elements.time_series_data, "ts-data");
        assert_eq!(cfg.elements.inflation_data, "inflation-data");
        assert_eq!(cfg.elements.events_data, "events-data");
        assert_eq!(cfg.elements.value_canvas, "valueChart");
        assert_eq!(cfg.elements.inflation_canvas, "inflationCompare");
        assert_eq!(cfg.endpoint.chart_data_path, "/portfolio/chart-data");
        assert_eq!(cfg.currency.currency, "PLN");
        assert_eq!(cfg.refresh_policy, RefreshPolicy::LastResolvedWins);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = DashboardConfig::from_json(
            r#"{
                "endpoint": {"base_url": "https://example.test"},
                "refresh_policy": "latest_request_wins",
                "canvas_height_px": 420
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.endpoint.base_url, "https://example.test");
        assert_eq!(cfg.endpoint.chart_data_path, "/portfolio/chart-data");
        assert_eq!(cfg.endpoint.timeout_secs, 30);
        assert_eq!(cfg.refresh_policy, RefreshPolicy::LatestRequestWins);
        assert_eq!(cfg.canvas_height_px, 420);
        assert_eq!(cfg.elements.allocation_data, "allocation-data");
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = DashboardConfig::from_json("{\"canvas_height_px\": \"tall\"}").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn currency_presets() {
        let pln = CurrencyFormat::pln();
        assert_eq!(pln.symbol_position, SymbolPosition::Suffix);
        assert_eq!(pln.decimal_separator, ",");
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.symbol_position, SymbolPosition::Prefix);
        assert_eq!(usd.group_separator, ",");
    }

    #[test]
    fn calendar_defaults() {
        let cal = CalendarConfig::default();
        assert_eq!(cal.initial_view, "dayGridMonth");
        assert_eq!(cal.locale, "pl");
        assert_eq!(cal.first_day, 1);
        assert_eq!(cal.header_toolbar.left, "prev,next today");
        assert_eq!(
            cal.header_toolbar.right,
            "multiMonthYear,dayGridMonth,timeGridWeek"
        );
    }
}

// ── Chart config wire shape ─────────────────────────────────────────

mod chart_config {
    use super::*;
    use portfolio_charts_core::models::series::Series;

    fn value_set() -> SeriesSet {
        SeriesSet {
            kind: ChartKind::Value,
            labels: vec!["2024-01".into()],
            series: vec![
                Series::new(SeriesKey::Value, "Value", vec![1.0]),
                Series::new(SeriesKey::CostBasis, "Cost", vec![]),
            ],
        }
    }

    #[test]
    fn serializes_in_camel_case() {
        let config = build_config(&value_set(), &Canvas::new("valueChart", 300));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#0d6efd");
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"]["kind"], "gradient");
        assert_eq!(json["options"]["scales"]["x"]["maxTicksLimit"], 8);
    }

    #[test]
    fn vertical_gradient_spans_height() {
        let g = LinearGradient::vertical(250, "top", "bottom");
        assert_eq!(g.y0, 0.0);
        assert_eq!(g.y1, 250.0);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].color, "top");
        assert_eq!(g.stops[1].offset, 1.0);
    }
}
