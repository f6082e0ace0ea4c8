//! Chart windows.
//!
//! | Sub-module    | Responsibility |
//! | ------------- | -------------- |
//! | [`chart_app`] | [`ChartApp`], the `eframe::App` showing one chart |
//! | [`run`]       | [`run_chart()`] and [`run_viewer()`], the blocking window runners, window icon |

mod chart_app;
mod run;

pub use chart_app::ChartApp;
pub use run::{load_icon_svg, run_chart, run_viewer, ICON_PATH};
