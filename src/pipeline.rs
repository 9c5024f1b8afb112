use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chart::{ComparisonChart, ComparisonChartConfig, OutputTarget, render_to_target};
use crate::core::{
    Category, CheeseRecord, ComparisonTable, VehicleRecord, assemble_items, concat_items,
    normalize_cheeses, normalize_vehicles,
};
use crate::dataset::{reference_cheeses, reference_vehicles};
use crate::error::ChartResult;

/// Raw datasets fed into the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineInput {
    pub vehicles: Vec<VehicleRecord>,
    pub cheeses: Vec<CheeseRecord>,
}

impl PipelineInput {
    #[must_use]
    pub fn new(vehicles: Vec<VehicleRecord>, cheeses: Vec<CheeseRecord>) -> Self {
        Self { vehicles, cheeses }
    }

    /// The built-in vehicle and cheese reference data.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(reference_vehicles(), reference_cheeses())
    }
}

/// Normalizes, assembles, filters and sorts `input` into a chart-ready table.
pub fn build_comparison_table(
    input: &PipelineInput,
    ceiling: f64,
) -> ChartResult<ComparisonTable> {
    let vehicle_prices = normalize_vehicles(&input.vehicles)?;
    let cheese_prices = normalize_cheeses(&input.cheeses)?;

    let combined = concat_items(
        assemble_items(Category::Vehicle, &vehicle_prices),
        assemble_items(Category::Cheese, &cheese_prices),
    );
    ComparisonTable::from_items(combined, ceiling)
}

/// Runs the full pipeline and renders the chart to `target`.
///
/// Returns the table that was charted.
pub fn run(
    input: &PipelineInput,
    ceiling: f64,
    config: ComparisonChartConfig,
    target: &OutputTarget,
) -> ChartResult<ComparisonTable> {
    let table = build_comparison_table(input, ceiling)?;
    info!(
        rows = table.len(),
        vehicles = table.count_by_category(Category::Vehicle),
        cheeses = table.count_by_category(Category::Cheese),
        dropped = table.dropped_count(),
        "comparison table ready"
    );

    let chart = ComparisonChart::new(config)?;
    render_to_target(&chart, &table, target)?;
    Ok(table)
}
