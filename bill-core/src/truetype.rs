use std::collections::BTreeMap;
use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

use crate::error::{Error, Result};
use crate::fonts::{TextMeasurer, TextStyle, Typeface};

/// DejaVu Sans Bold, used when no font file is available.
const BUILTIN_FONT: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");

/// A loaded TrueType font with parsed metrics.
///
/// Metrics come from the font tables and drive layout; glyphs are rasterized
/// with `rusttype`. A font file carries a single weight, so
/// `TextStyle::weight` is ignored when measuring or drawing with it.
pub struct TrueTypeFace {
    name: String,
    font: Font<'static>,
    units_per_em: u16,
    ascent: i16,
    /// rusttype scales by ascent minus descent; this converts an em size
    /// into that height.
    height_per_em: f64,
    /// Unicode codepoint -> glyph ID
    cmap: BTreeMap<u32, u16>,
    /// Glyph ID -> advance width in font units
    glyph_widths: BTreeMap<u16, u16>,
    default_width: u16,
}

impl TrueTypeFace {
    /// Parse a TrueType font from raw .ttf bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let face =
            ttf_parser::Face::parse(&data, 0).map_err(|e| Error::FontParse(e.to_string()))?;

        let units_per_em = face.units_per_em();
        let ascent = face.ascender();
        let name = extract_name(&face).unwrap_or_else(|| "Unknown".to_string());

        // Build cmap: Unicode -> GlyphID
        let mut cmap = BTreeMap::new();
        let subtables = face
            .tables()
            .cmap
            .ok_or_else(|| Error::FontParse("Font has no cmap table".to_string()))?;
        for subtable in subtables.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|cp| {
                if let Some(gid) = subtable.glyph_index(cp) {
                    cmap.entry(cp).or_insert(gid.0);
                }
            });
        }

        let mut glyph_widths = BTreeMap::new();
        for gid in 0..face.number_of_glyphs() {
            let width = face.glyph_hor_advance(ttf_parser::GlyphId(gid)).unwrap_or(0);
            glyph_widths.insert(gid, width);
        }

        // Default width = width of glyph 0 (notdef)
        let default_width = glyph_widths.get(&0).copied().unwrap_or(0);

        let font = Font::try_from_vec(data)
            .ok_or_else(|| Error::FontParse("Font cannot be rasterized".to_string()))?;
        let v_metrics = font.v_metrics_unscaled();
        let height_per_em =
            f64::from(v_metrics.ascent - v_metrics.descent) / f64::from(units_per_em);

        Ok(TrueTypeFace {
            name,
            font,
            units_per_em,
            ascent,
            height_per_em,
            cmap,
            glyph_widths,
            default_width,
        })
    }

    /// Read and parse a font file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// The face compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_bytes(BUILTIN_FONT.to_vec())
    }

    /// Family name from the font's name table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the font maps `ch` to a real glyph rather than notdef.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyph_for(ch) != 0
    }

    fn glyph_for(&self, ch: char) -> u16 {
        self.cmap.get(&(ch as u32)).copied().unwrap_or(0)
    }

    /// Advance width of a glyph in font units.
    fn advance(&self, gid: u16) -> u16 {
        self.glyph_widths.get(&gid).copied().unwrap_or(self.default_width)
    }

    fn scale(&self, font_size: f64) -> f64 {
        font_size / f64::from(self.units_per_em)
    }

    /// Measure text width in pixels.
    pub fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        let total: u32 = text
            .chars()
            .map(|ch| u32::from(self.advance(self.glyph_for(ch))))
            .sum();
        f64::from(total) * self.scale(font_size)
    }
}

impl TextMeasurer for TrueTypeFace {
    fn text_width(&self, text: &str, style: TextStyle) -> f64 {
        self.measure_text(text, style.font_size)
    }
}

impl Typeface for TrueTypeFace {
    fn ascent(&self, style: TextStyle) -> f64 {
        f64::from(self.ascent) * self.scale(style.font_size)
    }

    fn draw_text(
        &self,
        image: &mut RgbImage,
        x: f64,
        y: f64,
        text: &str,
        style: TextStyle,
        color: Rgb<u8>,
    ) {
        let scale = self.scale(style.font_size);
        let glyph_scale = Scale::uniform((style.font_size * self.height_per_em) as f32);
        let baseline = (y + self.ascent(style)) as f32;

        // Pen advances use the same table as measurement so drawn text lines
        // up with the layout.
        let mut pen = x;
        for ch in text.chars() {
            let glyph = self
                .font
                .glyph(ch)
                .scaled(glyph_scale)
                .positioned(point(pen as f32, baseline));
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = gx as i32 + bb.min.x;
                    let py = gy as i32 + bb.min.y;
                    if px < 0 || py < 0 {
                        return;
                    }
                    let (px, py) = (px as u32, py as u32);
                    if px >= image.width() || py >= image.height() {
                        return;
                    }
                    let alpha = (v.clamp(0.0, 1.0) * 255.0).round() / 255.0;
                    if alpha == 0.0 {
                        return;
                    }
                    let dst = image.get_pixel_mut(px, py);
                    for (d, s) in dst.0.iter_mut().zip(color.0) {
                        *d = (f32::from(s) * alpha + f32::from(*d) * (1.0 - alpha)).round() as u8;
                    }
                });
            }
            pen += f64::from(self.advance(self.glyph_for(ch))) * scale;
        }
    }
}

/// Extract the font family name from the name table.
fn extract_name(face: &ttf_parser::Face) -> Option<String> {
    face.names()
        .into_iter()
        .find(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
        .and_then(|name| name.to_string())
}
