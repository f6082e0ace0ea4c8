//! Literal PMT characterization results.
//!
//! Every number in this module was produced offline from the charge
//! histograms of each run. The viewer never recomputes them; this table is
//! its only data source. Gain errors are recorded as half of the accumulated
//! statistic, so they are written as `raw / 2.0`.
//!
//! A trial value of exactly `0.0` paired with an error of `0.0` marks a trial
//! that produced no data. The pair is kept as-is.

use std::fmt;

/// Number of trials recorded per configuration.
pub const TRIALS: usize = 2;

/// High-voltage setting of the PMT.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Voltage {
    V800,
    V1000,
    V1200,
}

impl Voltage {
    pub fn volts(self) -> u32 {
        match self {
            Voltage::V800 => 800,
            Voltage::V1000 => 1000,
            Voltage::V1200 => 1200,
        }
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}V", self.volts())
    }
}

/// Amplitude of the injected pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PulseAmplitude {
    MV20,
    MV100,
}

impl PulseAmplitude {
    pub fn millivolts(self) -> u32 {
        match self {
            PulseAmplitude::MV20 => 20,
            PulseAmplitude::MV100 => 100,
        }
    }
}

impl fmt::Display for PulseAmplitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}mV", self.millivolts())
    }
}

/// One operating point of the PMT under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub voltage: Voltage,
    pub amplitude: PulseAmplitude,
}

impl Configuration {
    pub const V800_MV20: Configuration = Configuration::new(Voltage::V800, PulseAmplitude::MV20);
    pub const V800_MV100: Configuration = Configuration::new(Voltage::V800, PulseAmplitude::MV100);
    pub const V1000_MV20: Configuration = Configuration::new(Voltage::V1000, PulseAmplitude::MV20);
    pub const V1000_MV100: Configuration =
        Configuration::new(Voltage::V1000, PulseAmplitude::MV100);
    pub const V1200_MV20: Configuration = Configuration::new(Voltage::V1200, PulseAmplitude::MV20);
    pub const V1200_MV100: Configuration =
        Configuration::new(Voltage::V1200, PulseAmplitude::MV100);

    /// All characterized configurations, in table order.
    pub const ALL: [Configuration; 6] = [
        Configuration::V800_MV20,
        Configuration::V800_MV100,
        Configuration::V1000_MV20,
        Configuration::V1000_MV100,
        Configuration::V1200_MV20,
        Configuration::V1200_MV100,
    ];

    pub const fn new(voltage: Voltage, amplitude: PulseAmplitude) -> Self {
        Self { voltage, amplitude }
    }

    /// The recorded gain and photoelectron results for this configuration.
    pub fn data(self) -> &'static ConfigurationData {
        use PulseAmplitude::*;
        use Voltage::*;
        match (self.voltage, self.amplitude) {
            (V800, MV20) => &DATA_800V_20MV,
            (V800, MV100) => &DATA_800V_100MV,
            (V1000, MV20) => &DATA_1000V_20MV,
            (V1000, MV100) => &DATA_1000V_100MV,
            (V1200, MV20) => &DATA_1200V_20MV,
            (V1200, MV100) => &DATA_1200V_100MV,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {}", self.voltage, self.amplitude)
    }
}

/// One value per trial, in trial order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasurementPair {
    values: [f64; TRIALS],
}

impl MeasurementPair {
    pub const fn new(values: [f64; TRIALS]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, trial: usize) -> Option<f64> {
        self.values.get(trial).copied()
    }

    /// Whether `trial` holds the no-data sentinel: value and its error both zero.
    ///
    /// `errors` is the error pair recorded alongside this one. Out-of-range
    /// trials are not missing, they do not exist.
    pub fn is_missing(&self, errors: &MeasurementPair, trial: usize) -> bool {
        matches!(
            (self.get(trial), errors.get(trial)),
            (Some(v), Some(e)) if v == 0.0 && e == 0.0
        )
    }

    /// Number of trials that hold real data.
    pub fn trial_count_present(&self, errors: &MeasurementPair) -> usize {
        (0..self.len())
            .filter(|&trial| !self.is_missing(errors, trial))
            .count()
    }
}

/// The four pairs recorded for one configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigurationData {
    pub gain: MeasurementPair,
    pub gain_error: MeasurementPair,
    pub pe: MeasurementPair,
    pub pe_error: MeasurementPair,
}

impl ConfigurationData {
    /// Zero-based indices of no-data trials, as `(gain, pe)`.
    pub fn missing_trials(&self) -> (Vec<usize>, Vec<usize>) {
        (self.missing_gain_trials(), self.missing_pe_trials())
    }

    /// Zero-based indices of gain trials that hold the no-data sentinel.
    pub fn missing_gain_trials(&self) -> Vec<usize> {
        missing_trials(self.gain.values(), self.gain_error.values())
    }

    /// Zero-based indices of photoelectron trials that hold the no-data sentinel.
    pub fn missing_pe_trials(&self) -> Vec<usize> {
        missing_trials(self.pe.values(), self.pe_error.values())
    }
}

/// Indices where both the value and its error are exactly zero.
pub fn missing_trials(values: &[f64], errors: &[f64]) -> Vec<usize> {
    values
        .iter()
        .zip(errors)
        .enumerate()
        .filter(|(_, (&v, &e))| v == 0.0 && e == 0.0)
        .map(|(i, _)| i)
        .collect()
}

static DATA_800V_20MV: ConfigurationData = ConfigurationData {
    gain: MeasurementPair::new([953721.3308, 1084527.613]),
    gain_error: MeasurementPair::new([993243.0 / 2.0, 1161123.0 / 2.0]),
    pe: MeasurementPair::new([29.20140202, 25.2529301]),
    pe_error: MeasurementPair::new([0.987839072, 1.042398689]),
};

static DATA_800V_100MV: ConfigurationData = ConfigurationData {
    gain: MeasurementPair::new([930126.3538, 1034409.722]),
    gain_error: MeasurementPair::new([967026.0 / 2.0, 1078132.0 / 2.0]),
    pe: MeasurementPair::new([148.9045004, 134.8595213]),
    pe_error: MeasurementPair::new([3.960910033, 3.79486892]),
};

static DATA_1000V_20MV: ConfigurationData = ConfigurationData {
    gain: MeasurementPair::new([4203819.123, 4537715.825]),
    gain_error: MeasurementPair::new([4482581.0 / 2.0, 4858381.0 / 2.0]),
    pe: MeasurementPair::new([6.425704629, 4.826216723]),
    pe_error: MeasurementPair::new([0.223543291, 0.195261374]),
};

static DATA_1000V_100MV: ConfigurationData = ConfigurationData {
    gain: MeasurementPair::new([4053920.125, 4426229.508]),
    gain_error: MeasurementPair::new([4260330.0 / 2.0, 4701236.0 / 2.0]),
    pe: MeasurementPair::new([31.94438864, 25.84027778]),
    pe_error: MeasurementPair::new([1.017269933, 1.034557394]),
};

// The second 1200V / 20mV run produced no usable data.
static DATA_1200V_20MV: ConfigurationData = ConfigurationData {
    gain: MeasurementPair::new([1156531.688, 0.0]),
    gain_error: MeasurementPair::new([1194602.0 / 2.0, 0.0]),
    pe: MeasurementPair::new([9.635490418, 0.0]),
    pe_error: MeasurementPair::new([0.372678532, 0.0]),
};

static DATA_1200V_100MV: ConfigurationData = ConfigurationData {
    gain: MeasurementPair::new([12808031.33, 13064846.04]),
    gain_error: MeasurementPair::new([13473486.0 / 2.0, 13814424.0 / 2.0]),
    pe: MeasurementPair::new([9.735102671, 8.156429832]),
    pe_error: MeasurementPair::new([0.325478697, 0.270717453]),
};
