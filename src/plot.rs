//! Drawing an [`ErrorBarChart`] with `egui_plot`.
//!
//! Each point is drawn as a filled marker, a vertical whisker spanning
//! `value ± error`, and a short cap at each whisker end. Whiskers, caps and
//! markers share the legend label so they form a single legend entry.
//! The view is pinned to the chart bounds every frame; pan and zoom are off.

use eframe::egui;
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotResponse, Points};

use crate::chart::ErrorBarChart;
use crate::config::FeatureFlags;
use crate::data::series_look::SeriesLook;

/// Values at or above this magnitude are labelled in scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 1e5;

/// Render `chart` into `ui`.
pub fn show_error_bar_chart(
    ui: &mut egui::Ui,
    chart: &ErrorBarChart,
    look: &SeriesLook,
    features: &FeatureFlags,
) -> PlotResponse<()> {
    let ticks = chart.x_ticks.clone();
    let mut plot = Plot::new(chart.quantity.plot_id())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .show_grid(features.grid)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .x_grid_spacer(move |_input: GridInput| tick_marks(&ticks))
        .x_axis_formatter(|mark, _range| format_x_tick(mark.value))
        .y_axis_formatter(|mark, _range| format_y_tick(mark.value));
    if features.legend {
        plot = plot.legend(Legend::default());
    }

    let (x_min, x_max) = chart.bounds.x_range();
    let (y_min, y_max) = chart.bounds.drawable_y_range();
    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds_x(x_min..=x_max);
        plot_ui.set_plot_bounds_y(y_min..=y_max);

        let points_per_unit = plot_ui.transform().dpos_dvalue_x();
        let cap_half_width = cap_half_width_in_plot_units(look.cap_half_width_px, points_per_unit);
        for p in &chart.points {
            plot_ui.line(
                Line::new(&chart.legend_label, p.whisker().to_vec())
                    .color(look.color)
                    .width(look.whisker_width),
            );
            for cap in p.caps(cap_half_width) {
                plot_ui.line(
                    Line::new(&chart.legend_label, cap.to_vec())
                        .color(look.color)
                        .width(look.whisker_width),
                );
            }
        }

        let markers: Vec<[f64; 2]> = chart.points.iter().map(|p| [p.x, p.y]).collect();
        plot_ui.points(
            Points::new(&chart.legend_label, markers)
                .color(look.color)
                .shape(look.marker)
                .radius(look.marker_radius)
                .filled(true),
        );
    })
}

/// Convert a cap half-width in screen points to plot x units.
///
/// `points_per_unit` is the current horizontal scale of the plot. A zero or
/// non-finite scale, as before the plot has a size, yields no cap.
pub fn cap_half_width_in_plot_units(half_width_px: f32, points_per_unit: f64) -> f64 {
    let points_per_unit = points_per_unit.abs();
    if !points_per_unit.is_finite() || points_per_unit == 0.0 || half_width_px <= 0.0 {
        return 0.0;
    }
    f64::from(half_width_px) / points_per_unit
}

/// Grid marks at exactly the given tick positions.
pub fn tick_marks(ticks: &[f64]) -> Vec<GridMark> {
    ticks
        .iter()
        .map(|&value| GridMark {
            value,
            step_size: 1.0,
        })
        .collect()
}

/// Label of an x tick: the trial number.
pub fn format_x_tick(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Label of a y tick: scientific notation for gains, plain decimals for counts.
pub fn format_y_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= SCIENTIFIC_THRESHOLD {
        return format!("{:.2e}", value);
    }
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
