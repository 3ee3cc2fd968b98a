pub mod chart;
pub mod config;
pub mod error;
pub mod metric;
pub mod params;
pub mod report;
pub mod results;
pub mod runner;
pub mod session;
