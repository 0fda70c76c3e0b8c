pub mod calendar_service;
pub mod chart_binder;
pub mod chart_presets;
pub mod formatting;
pub mod parser;
pub mod refresh_controller;
pub mod series_mapper;
