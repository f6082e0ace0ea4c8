//! Picks one configuration out of the table and exposes its two series.

use log::info;

use super::table::{Configuration, MeasurementPair, TRIALS};

/// Configuration shown when the viewer is started with default settings.
pub const ACTIVE_CONFIGURATION: Configuration = Configuration::V1200_MV20;

/// X position of each trial (1-based trial number).
pub const X_POSITIONS: [f64; TRIALS] = [1.0, 2.0];

/// X positions for a series of `len` values, truncated to what is available.
pub fn x_positions(len: usize) -> &'static [f64] {
    &X_POSITIONS[..len.min(X_POSITIONS.len())]
}

/// A value sequence with its errors, ready to be charted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorSeries<'a> {
    pub x: &'a [f64],
    pub values: &'a [f64],
    pub errors: &'a [f64],
}

impl<'a> ErrorSeries<'a> {
    /// `values` and `errors` must have the same length, one error per value.
    pub fn new(values: &'a [f64], errors: &'a [f64]) -> Self {
        debug_assert_eq!(
            values.len(),
            errors.len(),
            "every value needs exactly one error"
        );
        Self {
            x: x_positions(values.len()),
            values,
            errors,
        }
    }

    /// `(x, value, error)` triples; stops at the shortest of the three sequences.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + 'a {
        let (x, values, errors) = (self.x, self.values, self.errors);
        x.iter()
            .zip(values)
            .zip(errors)
            .map(|((&x, &v), &e)| (x, v, e))
    }

    pub fn len(&self) -> usize {
        self.x.len().min(self.values.len()).min(self.errors.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The four pairs of one configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub configuration: Configuration,
    pub gain: &'static MeasurementPair,
    pub gain_error: &'static MeasurementPair,
    pub pe: &'static MeasurementPair,
    pub pe_error: &'static MeasurementPair,
}

impl Selection {
    pub fn for_configuration(configuration: Configuration) -> Self {
        let data = configuration.data();
        info!("Selected PMT configuration {configuration}");
        Self {
            configuration,
            gain: &data.gain,
            gain_error: &data.gain_error,
            pe: &data.pe,
            pe_error: &data.pe_error,
        }
    }

    /// Selection of [`ACTIVE_CONFIGURATION`].
    pub fn active() -> Self {
        Self::for_configuration(ACTIVE_CONFIGURATION)
    }

    pub fn gain_series(&self) -> ErrorSeries<'static> {
        ErrorSeries::new(self.gain.values(), self.gain_error.values())
    }

    pub fn pe_series(&self) -> ErrorSeries<'static> {
        ErrorSeries::new(self.pe.values(), self.pe_error.values())
    }
}
