//! Error-bar chart description.
//!
//! An [`ErrorBarChart`] holds everything needed to draw one chart: the points
//! with their errors, axis bounds and ticks, labels, title and legend text.
//! Building one does no drawing; see [`crate::plot`] for that.

use log::warn;

use crate::data::bounds::{ChartBounds, X_TICKS};
use crate::data::selection::{ErrorSeries, Selection};
use crate::data::table::{missing_trials, Configuration};

pub const X_AXIS_LABEL: &str = "PMT configuration";

/// The physical quantity shown by a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Gain,
    Photoelectrons,
}

impl Quantity {
    pub fn y_label(self) -> &'static str {
        match self {
            Quantity::Gain => "Gain",
            Quantity::Photoelectrons => "Photoelectron count",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            Quantity::Gain => "Gain with error",
            Quantity::Photoelectrons => "<PE> with error",
        }
    }

    pub fn title(self, configuration: Configuration) -> String {
        let name = match self {
            Quantity::Gain => "Gain",
            Quantity::Photoelectrons => "Photoelectron count",
        };
        format!(
            "{name} at {} with a {} peak",
            configuration.voltage, configuration.amplitude
        )
    }

    /// egui id of the plot widget.
    pub fn plot_id(self) -> &'static str {
        match self {
            Quantity::Gain => "gain_plot",
            Quantity::Photoelectrons => "pe_plot",
        }
    }
}

/// A single measurement with a symmetric error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorPoint {
    pub x: f64,
    pub y: f64,
    pub error: f64,
}

impl ErrorPoint {
    pub fn lower(&self) -> f64 {
        self.y - self.error
    }

    pub fn upper(&self) -> f64 {
        self.y + self.error
    }

    /// Vertical whisker from `y - error` to `y + error`.
    pub fn whisker(&self) -> [[f64; 2]; 2] {
        [[self.x, self.lower()], [self.x, self.upper()]]
    }

    /// Horizontal caps at both whisker ends, lower cap first.
    pub fn caps(&self, half_width: f64) -> [[[f64; 2]; 2]; 2] {
        let cap = |y: f64| [[self.x - half_width, y], [self.x + half_width, y]];
        [cap(self.lower()), cap(self.upper())]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorBarChart {
    pub quantity: Quantity,
    pub configuration: Configuration,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_label: String,
    pub points: Vec<ErrorPoint>,
    pub bounds: ChartBounds,
    pub x_ticks: Vec<f64>,
    /// Zero-based indices of trials stored as the no-data sentinel.
    pub missing_trials: Vec<usize>,
}

impl ErrorBarChart {
    pub fn new(quantity: Quantity, configuration: Configuration, series: &ErrorSeries) -> Self {
        let points: Vec<ErrorPoint> = series
            .points()
            .map(|(x, y, error)| ErrorPoint { x, y, error })
            .collect();
        // Only the drawn trials count towards bounds and missing trials.
        let n = series.len();
        let (values, errors) = (&series.values[..n], &series.errors[..n]);
        let missing = missing_trials(values, errors);
        if !missing.is_empty() {
            // Plotted as real zero-valued points and included in the bounds.
            warn!(
                "{} for {}: trial(s) {:?} hold no data and are plotted as zero",
                quantity.y_label(),
                configuration,
                missing.iter().map(|i| i + 1).collect::<Vec<_>>()
            );
        }
        Self {
            quantity,
            configuration,
            title: quantity.title(configuration),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: quantity.y_label().to_string(),
            legend_label: quantity.legend_label().to_string(),
            points,
            bounds: ChartBounds::compute(values, errors),
            x_ticks: X_TICKS.to_vec(),
            missing_trials: missing,
        }
    }

    /// Gain chart of the selected configuration.
    pub fn gain(selection: &Selection) -> Self {
        Self::new(
            Quantity::Gain,
            selection.configuration,
            &selection.gain_series(),
        )
    }

    /// Photoelectron-count chart of the selected configuration.
    pub fn photoelectrons(selection: &Selection) -> Self {
        Self::new(
            Quantity::Photoelectrons,
            selection.configuration,
            &selection.pe_series(),
        )
    }

    /// Note shown under the title when a trial holds no data, if any.
    pub fn missing_trial_note(&self) -> Option<String> {
        match self.missing_trials.as_slice() {
            [] => None,
            [i] => Some(format!(
                "Trial {} has no data and is plotted as 0",
                i + 1
            )),
            many => Some(format!(
                "Trials {} have no data and are plotted as 0",
                many.iter()
                    .map(|i| (i + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
