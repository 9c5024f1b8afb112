use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chart::ComparisonChart;
use crate::core::ComparisonTable;
use crate::error::{ChartError, ChartResult};

/// Where a finished chart goes. Chosen by the caller, never by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputTarget {
    /// Blocking desktop window (`gtk4-adapter` feature).
    Display,
    /// PNG export (`cairo-backend` feature).
    FilePath(PathBuf),
}

/// Renders `table` to `target`.
///
/// Backend failures (for example an unwritable path) are returned unchanged;
/// nothing is retried.
pub fn render_to_target(
    chart: &ComparisonChart,
    table: &ComparisonTable,
    target: &OutputTarget,
) -> ChartResult<()> {
    let frame = chart.build_frame(table)?;
    match target {
        OutputTarget::FilePath(path) => {
            info!(path = %path.display(), rows = table.len(), "exporting chart");
            write_png(&frame, path)
        }
        OutputTarget::Display => {
            info!(rows = table.len(), "displaying chart window");
            display(frame, &chart.config().title)
        }
    }
}

#[cfg(feature = "cairo-backend")]
fn write_png(frame: &crate::render::RenderFrame, path: &std::path::Path) -> ChartResult<()> {
    use crate::render::{CairoRenderer, Renderer};

    let (width, height) = surface_size(frame)?;
    let mut renderer = CairoRenderer::new(width, height)?;
    renderer.render(frame)?;
    renderer.write_png(path)
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_frame: &crate::render::RenderFrame, _path: &std::path::Path) -> ChartResult<()> {
    Err(ChartError::BackendUnavailable("cairo-backend"))
}

#[cfg(feature = "gtk4-adapter")]
fn display(frame: crate::render::RenderFrame, title: &str) -> ChartResult<()> {
    let (width, height) = surface_size(&frame)?;
    crate::platform_gtk::present_frame_window(frame, title, width, height)
}

#[cfg(not(feature = "gtk4-adapter"))]
fn display(_frame: crate::render::RenderFrame, _title: &str) -> ChartResult<()> {
    Err(ChartError::BackendUnavailable("gtk4-adapter"))
}

#[cfg(feature = "cairo-backend")]
fn surface_size(frame: &crate::render::RenderFrame) -> ChartResult<(i32, i32)> {
    let viewport = frame.viewport;
    match (i32::try_from(viewport.width), i32::try_from(viewport.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        }),
    }
}
