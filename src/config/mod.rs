//! Configuration management for scenario runs

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, Settings, SimulationConfig};
