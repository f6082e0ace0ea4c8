//! Visual themes for the chart windows.
//!
//! A scheme sets the egui visuals and the palette that series colours are
//! drawn from.

use eframe::egui::{Color32, Context, Visuals};
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Palette consulted by `SeriesLook::alloc_color`. Replaced whenever a scheme
// is applied.
static GLOBAL_PALETTE: Lazy<Mutex<Vec<Color32>>> =
    Lazy::new(|| Mutex::new(ColorScheme::default().series_colors()));

/// Copy of the palette of the most recently applied scheme.
pub fn global_palette() -> Vec<Color32> {
    match GLOBAL_PALETTE.lock() {
        Ok(palette) => palette.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub(crate) fn set_global_palette(new: Vec<Color32>) {
    match GLOBAL_PALETTE.lock() {
        Ok(mut palette) => *palette = new,
        Err(poisoned) => *poisoned.into_inner() = new,
    }
}

/// Visual theme for the chart windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// White background with the matplotlib "tab10" colours.
    #[default]
    Light,
    /// egui's dark theme.
    Dark,
    /// ggplot2-inspired: light grey background with muted primary colours.
    GgPlot,
    /// Pure-black background with saturated colours.
    HighContrast,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Light,
            ColorScheme::Dark,
            ColorScheme::GgPlot,
            ColorScheme::HighContrast,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
            ColorScheme::GgPlot => "ggplot2",
            ColorScheme::HighContrast => "High Contrast",
        }
    }

    /// Apply the visuals to `ctx` and make this scheme's palette current.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
        set_global_palette(self.series_colors());
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Light => {
                let mut v = Visuals::light();
                v.panel_fill = Color32::WHITE;
                v.extreme_bg_color = Color32::WHITE;
                v
            }
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::GgPlot => {
                let mut v = Visuals::light();
                let bg = Color32::from_rgb(229, 229, 229);
                let fg = Color32::from_rgb(51, 51, 51);
                v.panel_fill = bg;
                v.window_fill = Color32::WHITE;
                v.extreme_bg_color = bg;
                v.faint_bg_color = Color32::from_rgb(240, 240, 240);
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.fg_stroke.color = fg;
                v
            }
            ColorScheme::HighContrast => {
                let mut v = Visuals::dark();
                v.panel_fill = Color32::BLACK;
                v.extreme_bg_color = Color32::BLACK;
                v.window_fill = Color32::from_rgb(10, 10, 10);
                v.faint_bg_color = Color32::from_rgb(20, 20, 20);
                v.override_text_color = Some(Color32::WHITE);
                v.widgets.noninteractive.fg_stroke.color = Color32::WHITE;
                v
            }
        }
    }

    /// Series colour palette for this scheme.
    pub fn series_colors(&self) -> Vec<Color32> {
        match self {
            ColorScheme::Light | ColorScheme::Dark => vec![
                Color32::from_rgb(31, 119, 180),
                Color32::from_rgb(255, 127, 14),
                Color32::from_rgb(44, 160, 44),
                Color32::from_rgb(214, 39, 40),
                Color32::from_rgb(148, 103, 189),
                Color32::from_rgb(140, 86, 75),
            ],
            ColorScheme::GgPlot => vec![
                Color32::from_rgb(248, 118, 109),
                Color32::from_rgb(0, 186, 56),
                Color32::from_rgb(97, 156, 255),
                Color32::from_rgb(183, 159, 0),
            ],
            ColorScheme::HighContrast => vec![
                Color32::from_rgb(0, 255, 255),
                Color32::from_rgb(255, 255, 0),
                Color32::from_rgb(255, 0, 255),
                Color32::from_rgb(0, 255, 0),
            ],
        }
    }
}
