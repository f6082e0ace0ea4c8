//! Entry points for showing charts in native windows.
//!
//! [`run_viewer`] shows the gain chart and then the photoelectron chart of the
//! configured PMT operating point. Each window blocks until it is closed.

use std::path::Path;

use eframe::egui;
use log::{debug, info};

use crate::chart::ErrorBarChart;
use crate::config::ViewerConfig;
use crate::data::selection::Selection;

use super::chart_app::ChartApp;

/// Show the gain chart, then the photoelectron chart, one window at a time.
///
/// An error from the first window is returned before the second one opens.
pub fn run_viewer(cfg: &ViewerConfig) -> eframe::Result<()> {
    let selection = Selection::for_configuration(cfg.configuration);
    run_chart(ErrorBarChart::gain(&selection), cfg)?;
    run_chart(ErrorBarChart::photoelectrons(&selection), cfg)?;
    Ok(())
}

/// Show a single chart in a native window.
///
/// The call blocks until the window is closed.
pub fn run_chart(chart: ErrorBarChart, cfg: &ViewerConfig) -> eframe::Result<()> {
    let title = cfg.window_title(&chart.title);
    let app = ChartApp::new(chart, cfg);

    let mut opts = cfg
        .native_options
        .clone()
        .unwrap_or_else(eframe::NativeOptions::default);
    // Required to open a second window after the first one closes.
    opts.run_and_return = true;

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_icon_svg(Path::new(ICON_PATH)) {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        let [w, h] = cfg.window_size;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }

    info!("Opening chart window \"{title}\"");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )?;
    info!("Chart window \"{title}\" closed");
    Ok(())
}

/// Path of the window icon shipped with the crate.
pub const ICON_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");

/// Rasterize the SVG at `path` into window-icon pixels at its intrinsic size.
///
/// Returns `None`, after logging the reason, when the file is missing, does
/// not parse, or has no area.
pub fn load_icon_svg(path: &Path) -> Option<egui::IconData> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Window icon {} not readable: {e}", path.display());
            return None;
        }
    };
    let tree = match usvg::Tree::from_data(&bytes, &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(e) => {
            debug!("Window icon {} is not valid SVG: {e}", path.display());
            return None;
        }
    };
    let size = tree.size().to_int_size();
    let Some(mut pixmap) = tiny_skia::Pixmap::new(size.width(), size.height()) else {
        debug!(
            "Window icon {} has no area ({}x{})",
            path.display(),
            size.width(),
            size.height()
        );
        return None;
    };
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Some(egui::IconData {
        width: pixmap.width(),
        height: pixmap.height(),
        rgba: pixmap.take(),
    })
}
