pub mod calendar;
pub mod chart;
pub mod payload;
pub mod period;
pub mod series;
pub mod settings;
