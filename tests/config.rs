use pmtplot::config::*;
use pmtplot::{ColorScheme, Configuration, ACTIVE_CONFIGURATION};

#[test]
fn default_config_shows_active_configuration() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.configuration, ACTIVE_CONFIGURATION);
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
    assert_eq!(cfg.features, FeatureFlags::default());
    assert!(cfg.native_options.is_none());
}

#[test]
fn all_features_enabled_by_default() {
    let f = FeatureFlags::default();
    assert!(f.grid && f.legend && f.missing_trial_note);
}

#[test]
fn for_configuration_overrides_only_the_configuration() {
    let cfg = ViewerConfig::for_configuration(Configuration::V1000_MV100);
    assert_eq!(cfg.configuration, Configuration::V1000_MV100);
    assert_eq!(cfg.window_size, ViewerConfig::default().window_size);
}

#[test]
fn window_title_uses_prefix() {
    let mut cfg = ViewerConfig::default();
    assert_eq!(cfg.window_title("Gain"), "PMT - Gain");
    cfg.title_prefix.clear();
    assert_eq!(cfg.window_title("Gain"), "Gain");
}
