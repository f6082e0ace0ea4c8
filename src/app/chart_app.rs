//! Standalone window showing one error-bar chart.
//!
//! [`ChartApp`] wraps an [`ErrorBarChart`] and implements [`eframe::App`].
//! The chart is static, so the app only repaints on input.

use eframe::egui;

use crate::chart::ErrorBarChart;
use crate::color_scheme::ColorScheme;
use crate::config::{FeatureFlags, ViewerConfig};
use crate::data::series_look::SeriesLook;
use crate::plot::show_error_bar_chart;

/// Every chart uses the first palette colour, as each opens in a fresh figure.
const SERIES_INDEX: usize = 0;

pub struct ChartApp {
    pub chart: ErrorBarChart,
    pub look: SeriesLook,
    pub features: FeatureFlags,
    /// Color scheme to apply to the egui context on the first frame.
    pub color_scheme: ColorScheme,
    color_scheme_applied: bool,
}

impl ChartApp {
    pub fn new(chart: ErrorBarChart, cfg: &ViewerConfig) -> Self {
        Self {
            chart,
            look: SeriesLook::default(),
            features: cfg.features.clone(),
            color_scheme: cfg.color_scheme,
            color_scheme_applied: false,
        }
    }

    /// Title heading plus the optional no-data note.
    fn render_headline(&self, ui: &mut egui::Ui) {
        ui.heading(format!(
            "{} {}",
            egui_phosphor::regular::CHART_LINE,
            self.chart.title
        ));
        if !self.features.missing_trial_note {
            return;
        }
        if let Some(note) = self.chart.missing_trial_note() {
            let color = ui.visuals().warn_fg_color;
            ui.label(
                egui::RichText::new(format!("{} {}", egui_phosphor::regular::WARNING, note))
                    .color(color),
            );
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The palette only changes when the scheme is applied, so the look is
        // allocated right after.
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.look = SeriesLook::new(SERIES_INDEX);
            self.color_scheme_applied = true;
        }

        egui::TopBottomPanel::top("pmtplot_headline").show(ctx, |ui| {
            self.render_headline(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_error_bar_chart(ui, &self.chart, &self.look, &self.features);
        });
    }
}
