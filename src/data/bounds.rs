//! Axis bounds of an error-bar chart.
//!
//! The x range is fixed for two trials. The y range is
//! `[min(values) - max(errors), max(values) + max(errors)]`, taken over the raw
//! values. No-data trials (`0.0`) take part in the min/max like any other value.

use log::debug;

/// Fixed x range, one unit of padding around trials 1 and 2.
pub const X_RANGE: (f64, f64) = (0.5, 2.5);

/// X tick positions, independent of how many trials hold data.
pub const X_TICKS: [f64; 2] = [1.0, 2.0];

/// Padding applied when the y range collapses to a single value.
const DEGENERATE_PADDING: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    /// Bounds for the given values and errors. Empty input yields non-finite y bounds.
    pub fn compute(values: &[f64], errors: &[f64]) -> Self {
        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let max_error = errors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bounds = Self {
            x_min: X_RANGE.0,
            x_max: X_RANGE.1,
            y_min: min_value - max_error,
            y_max: max_value + max_error,
        };
        debug!(
            "Chart bounds: x [{}, {}], y [{}, {}]",
            bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max
        );
        bounds
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Whether the y range can be shown without adjustment.
    pub fn is_drawable(&self) -> bool {
        self.y_min.is_finite() && self.y_max.is_finite() && self.y_min < self.y_max
    }

    /// Y range used for drawing.
    ///
    /// Equal to [`y_range`](Self::y_range) unless the range is empty or
    /// collapsed, in which case it is padded so the plot still has extent.
    pub fn drawable_y_range(&self) -> (f64, f64) {
        if self.is_drawable() {
            return self.y_range();
        }
        if self.y_min.is_finite() && self.y_max.is_finite() {
            let center = (self.y_min + self.y_max) / 2.0;
            (center - DEGENERATE_PADDING, center + DEGENERATE_PADDING)
        } else {
            (-DEGENERATE_PADDING, DEGENERATE_PADDING)
        }
    }
}
