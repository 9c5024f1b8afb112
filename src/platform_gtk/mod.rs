use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{CairoContextPainter, CairoContextRenderer, RenderFrame};

const APPLICATION_ID: &str = "rs.mass_price_chart.viewer";
const MAX_WINDOW_WIDTH: i32 = 1280;
const MAX_WINDOW_HEIGHT: i32 = 960;

/// Holds the first failure raised inside a draw callback.
#[derive(Debug, Default)]
struct DrawErrorSlot {
    first: RefCell<Option<ChartError>>,
}

impl DrawErrorSlot {
    fn record(&self, err: ChartError) {
        let mut first = self.first.borrow_mut();
        if first.is_none() {
            *first = Some(err);
        }
    }

    fn take(&self) -> Option<ChartError> {
        self.first.borrow_mut().take()
    }
}

/// Shows `frame` in a scrollable window and blocks until it is closed.
///
/// The first draw failure is returned once the window closes; a failed
/// application exit maps to `ChartError::Rendering`.
pub fn present_frame_window(
    frame: RenderFrame,
    title: &str,
    width: i32,
    height: i32,
) -> ChartResult<()> {
    gtk::init().map_err(|err| ChartError::Rendering(format!("failed to initialize gtk: {err}")))?;

    let painter = Rc::new(RefCell::new(CairoContextPainter::default()));
    let draw_errors = Rc::new(DrawErrorSlot::default());
    let frame = Rc::new(frame);
    let title = title.to_owned();

    let app = gtk::Application::builder()
        .application_id(APPLICATION_ID)
        .build();

    let activate_errors = Rc::clone(&draw_errors);
    app.connect_activate(move |app| {
        let drawing_area = gtk::DrawingArea::builder()
            .content_width(width)
            .content_height(height)
            .build();

        let painter = Rc::clone(&painter);
        let frame = Rc::clone(&frame);
        let draw_errors = Rc::clone(&activate_errors);
        drawing_area.set_draw_func(move |area, context, _width, _height| {
            if let Err(err) = painter
                .borrow_mut()
                .render_on_cairo_context(context, &frame)
            {
                warn!(error = %err, "failed to draw chart frame");
                draw_errors.record(err);
                if let Some(window) = area.root().and_downcast::<gtk::Window>() {
                    window.close();
                }
            }
        });

        let scrolled = gtk::ScrolledWindow::builder().child(&drawing_area).build();
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title(title.as_str())
            .default_width(width.min(MAX_WINDOW_WIDTH))
            .default_height(height.min(MAX_WINDOW_HEIGHT))
            .child(&scrolled)
            .build();
        window.present();
    });

    let exit_code = app.run_with_args::<&str>(&[]);
    debug!(?exit_code, "chart window closed");
    window_outcome(draw_errors.take(), exit_code == glib::ExitCode::SUCCESS)
}

fn window_outcome(draw_error: Option<ChartError>, exited_cleanly: bool) -> ChartResult<()> {
    if let Some(err) = draw_error {
        return Err(err);
    }
    if !exited_cleanly {
        return Err(ChartError::Rendering(
            "chart window exited with a failure status".to_owned(),
        ));
    }
    Ok(())
}
