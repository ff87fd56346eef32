use image::{Rgb, RgbImage};

/// Weight of the face a piece of text is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Font selection for measuring or drawing text. Sizes are in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub font_size: f64,
}

impl TextStyle {
    pub fn bold(font_size: f64) -> Self {
        TextStyle {
            weight: FontWeight::Bold,
            font_size,
        }
    }

    pub fn regular(font_size: f64) -> Self {
        TextStyle {
            weight: FontWeight::Regular,
            font_size,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::regular(12.0)
    }
}

/// Horizontal text measurement, the only capability layout needs.
pub trait TextMeasurer {
    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str, style: TextStyle) -> f64;
}

/// A face that can both measure and rasterize text.
///
/// Faces are immutable once built and may be shared between threads.
pub trait Typeface: TextMeasurer + Send + Sync {
    /// Distance from the top of the text box to the baseline.
    fn ascent(&self, style: TextStyle) -> f64;

    /// Draw `text` with its top-left corner at (x, y).
    fn draw_text(
        &self,
        image: &mut RgbImage,
        x: f64,
        y: f64,
        text: &str,
        style: TextStyle,
        color: Rgb<u8>,
    );
}
