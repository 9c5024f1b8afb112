//! mass-price-chart: price-per-kilogram comparison of vehicles and cheeses.
//!
//! Raw reference data flows through unit normalization, table assembly and a
//! ceiling filter before being laid out as a log-scale horizontal bar chart.
//! Rendering backends sit behind the `Renderer` trait.

pub mod chart;
pub mod core;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use chart::{ComparisonChart, ComparisonChartConfig, OutputTarget};
pub use crate::core::{ComparisonTable, DEFAULT_PRICE_CEILING};
pub use error::{ChartError, ChartResult};
pub use pipeline::{PipelineInput, build_comparison_table, run};
