pub mod assessment;
pub mod config;
pub mod dataset;
pub mod error;
pub mod scoring;
pub mod telemetry;
