// Print layout: turns the rendered markup tree into positioned draw operations.
// Runs on the blocking pool during export; nothing here is async.

pub mod flow;
pub mod font_metrics;

use serde::Serialize;

pub use flow::{layout_document, DrawOp, Page, Rgb};
pub use font_metrics::{get_metrics, FontFace};

/// Page box in layout units (points multiplied by the export scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Layout units per PDF point.
    pub scale: f32,
}

impl PageGeometry {
    /// Builds the page box from inches; 72 points per inch.
    pub fn from_inches(width_in: f32, height_in: f32, margin_in: f32, scale: f32) -> Self {
        PageGeometry {
            width: width_in * 72.0 * scale,
            height: height_in * 72.0 * scale,
            margin: margin_in * 72.0 * scale,
            scale,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest y (top-down) a line may reach before breaking to a new page.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }

    /// Page size in PDF points.
    pub fn media_box(&self) -> (f32, f32) {
        (self.width / self.scale, self.height / self.scale)
    }
}
