//! Pixel-level helpers on top of `image` buffers.

use image::{Rgb, RgbImage};

use crate::error::Result;

/// Fill an axis-aligned rectangle. Edges are snapped to whole pixels and the
/// rectangle is clipped to the image.
pub fn fill_rect(image: &mut RgbImage, x: f64, y: f64, width: f64, height: f64, color: Rgb<u8>) {
    let x0 = x.round().max(0.0) as u32;
    let y0 = y.round().max(0.0) as u32;
    let x1 = ((x + width).round().max(0.0) as u32).min(image.width());
    let y1 = ((y + height).round().max(0.0) as u32).min(image.height());
    for py in y0..y1 {
        for px in x0..x1 {
            image.put_pixel(px, py, color);
        }
    }
}

/// Encode an image as an 8-bit RGB PNG.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
        writer.finish()?;
    }
    Ok(buf)
}
