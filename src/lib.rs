//! pmtplot crate root: re-exports and module wiring.
//!
//! Error-bar charts of photomultiplier tube (PMT) gain and average
//! photoelectron yield, built on egui/eframe:
//! - `data`: the measurement table, configuration selection and axis bounds
//! - `chart`: a drawable description of one error-bar chart
//! - `plot`: rendering a chart with `egui_plot`
//! - `app`: the chart window and the blocking runners
//! - `config`, `color_scheme`: viewer configuration and themes

pub mod app;
pub mod chart;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod plot;

pub use app::{run_chart, run_viewer, ChartApp};
pub use chart::{ErrorBarChart, ErrorPoint, Quantity};
pub use color_scheme::ColorScheme;
pub use config::{FeatureFlags, ViewerConfig};
pub use data::bounds::ChartBounds;
pub use data::selection::{ErrorSeries, Selection, ACTIVE_CONFIGURATION};
pub use data::table::{Configuration, ConfigurationData, MeasurementPair, PulseAmplitude, Voltage};
