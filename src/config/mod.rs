//! Runtime configuration (TOML file + env overrides).

pub mod workshop;

pub use workshop::{AnalysisConfig, ResourceConfig, WindowSize, WorkshopConfig};
