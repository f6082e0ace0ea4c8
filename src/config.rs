//! Configuration of the chart viewer.

use crate::color_scheme::ColorScheme;
use crate::data::selection::ACTIVE_CONFIGURATION;
use crate::data::table::Configuration;

/// Toggle individual chart features on or off. All default to `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Show the plot grid.
    pub grid: bool,
    /// Show the plot legend.
    pub legend: bool,
    /// Show a note under the title when a trial holds no data.
    pub missing_trial_note: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            grid: true,
            legend: true,
            missing_trial_note: true,
        }
    }
}

/// Top-level configuration for the viewer.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `configuration`  | Which PMT operating point to chart |
/// | `color_scheme`   | Visual theme |
/// | `features`       | Grid, legend and note toggles |
/// | `window_size`    | Inner size of each chart window |
/// | `title_prefix`   | Prefix of the native window title |
/// | `native_options` | Optional eframe options, used as the base for each window |
#[derive(Clone)]
pub struct ViewerConfig {
    pub configuration: Configuration,
    pub color_scheme: ColorScheme,
    pub features: FeatureFlags,
    pub window_size: [f32; 2],
    pub title_prefix: String,
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            configuration: ACTIVE_CONFIGURATION,
            color_scheme: ColorScheme::default(),
            features: FeatureFlags::default(),
            window_size: [900.0, 600.0],
            title_prefix: "PMT".to_string(),
            native_options: None,
        }
    }
}

impl ViewerConfig {
    /// Default configuration charting `configuration`.
    pub fn for_configuration(configuration: Configuration) -> Self {
        Self {
            configuration,
            ..Default::default()
        }
    }

    /// Native window title for a chart titled `chart_title`.
    pub fn window_title(&self, chart_title: &str) -> String {
        if self.title_prefix.is_empty() {
            chart_title.to_string()
        } else {
            format!("{} - {}", self.title_prefix, chart_title)
        }
    }
}
