use std::process::ExitCode;

use mass_price_chart::telemetry::init_default_tracing;
use mass_price_chart::{ChartResult, ComparisonChartConfig, DEFAULT_PRICE_CEILING, PipelineInput};
use tracing::{debug, error};

#[cfg(feature = "cairo-backend")]
const PNG_OUTPUT_PATH: &str = "price_per_kg.png";

fn main() -> ExitCode {
    if !init_default_tracing() {
        debug!("default tracing subscriber not installed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "chart pipeline failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cairo-backend")]
fn run() -> ChartResult<()> {
    use mass_price_chart::OutputTarget;

    let target = if cfg!(feature = "gtk4-adapter") {
        OutputTarget::Display
    } else {
        OutputTarget::FilePath(PNG_OUTPUT_PATH.into())
    };
    mass_price_chart::run(
        &PipelineInput::reference(),
        DEFAULT_PRICE_CEILING,
        ComparisonChartConfig::default(),
        &target,
    )?;
    Ok(())
}

/// Without a drawing backend the chart is laid out and validated headlessly.
#[cfg(not(feature = "cairo-backend"))]
fn run() -> ChartResult<()> {
    use mass_price_chart::ComparisonChart;
    use mass_price_chart::render::NullRenderer;
    use tracing::info;

    let table =
        mass_price_chart::build_comparison_table(&PipelineInput::reference(), DEFAULT_PRICE_CEILING)?;
    let chart = ComparisonChart::new(ComparisonChartConfig::default())?;
    let mut renderer = NullRenderer::default();
    chart.render(&mut renderer, &table)?;

    for item in table.items() {
        println!(
            "{:<30} {:>8} {:>10.2}",
            item.name(),
            item.category(),
            item.price_per_unit_mass()
        );
    }
    info!(
        rows = table.len(),
        texts = renderer.last_text_count,
        "rendered headless chart; enable `cairo-backend` for png output"
    );
    Ok(())
}
