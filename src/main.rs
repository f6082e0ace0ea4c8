use log::LevelFilter;

use pmtplot::{run_viewer, ViewerConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // Edit `ACTIVE_CONFIGURATION` (or use `ViewerConfig::for_configuration`)
    // to chart another operating point.
    run_viewer(&ViewerConfig::default())
}
