use pmtplot::color_scheme::*;
use pmtplot::data::series_look::SeriesLook;

#[test]
fn default_scheme_is_light_with_tab10_blue_first() {
    assert_eq!(ColorScheme::default(), ColorScheme::Light);
    let first = ColorScheme::Light.series_colors()[0];
    assert_eq!(first, egui::Color32::from_rgb(31, 119, 180));
}

#[test]
fn every_scheme_has_a_palette_and_label() {
    for scheme in ColorScheme::all() {
        assert!(!scheme.series_colors().is_empty(), "{}", scheme.label());
        assert!(!scheme.label().is_empty());
    }
}

#[test]
fn applying_a_scheme_updates_palette_visuals_and_looks() {
    let ctx = egui::Context::default();
    ColorScheme::GgPlot.apply(&ctx);
    assert_eq!(global_palette(), ColorScheme::GgPlot.series_colors());
    assert_eq!(SeriesLook::new(0).color, ColorScheme::GgPlot.series_colors()[0]);
    assert!(!ctx.style().visuals.dark_mode);

    ColorScheme::HighContrast.apply(&ctx);
    assert_eq!(global_palette(), ColorScheme::HighContrast.series_colors());
    assert!(ctx.style().visuals.dark_mode);

    // colours wrap around the palette
    let palette = global_palette();
    assert_eq!(SeriesLook::alloc_color(palette.len()), palette[0]);
}
