//! SeriesLook: visual styling of an error-bar series.

use eframe::egui;
use egui_plot::MarkerShape;

/// Colour, marker and whisker styling of one error-bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLook {
    pub color: egui::Color32,
    pub marker: MarkerShape,
    pub marker_radius: f32,
    pub whisker_width: f32,
    /// Half the cap length, in screen points.
    pub cap_half_width_px: f32,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            marker: MarkerShape::Circle,
            marker_radius: 4.0,
            whisker_width: 1.5,
            // matplotlib capsize=5
            cap_half_width_px: 5.0,
        }
    }
}

impl SeriesLook {
    /// Create a look with a colour allocated from the current palette.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Pick the colour for series `index` from the current palette.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        let palette = crate::color_scheme::global_palette();
        if palette.is_empty() {
            return egui::Color32::GRAY;
        }
        palette[index % palette.len()]
    }
}
