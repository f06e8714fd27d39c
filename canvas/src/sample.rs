//! Text layout and pixel sampling for the particle text renderer.
//!
//! The configured text is drawn glyph by glyph onto a [`TextSurface`] sized to
//! the device-pixel viewport, then the resulting pixels are scanned on a
//! fixed grid. Every grid pixel whose alpha exceeds [`ALPHA_THRESHOLD`]
//! becomes a [`SampledPoint`]; the points come out in row-major order, which
//! is the order particles are assigned to them.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use crate::color::Rgb;
use crate::config::HeroConfig;
use crate::consts::{ALPHA_THRESHOLD, MAX_FONT_WIDTH_RATIO, TEXT_MIDLINE_RATIO};
use crate::surface::{FontSpec, PixelBuffer, TextSurface};
use crate::viewport::Viewport;

/// One pixel of rasterized text, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

/// Font size in device pixels: the configured size scaled by DPR, capped at
/// 12% of the surface width so the text never overflows narrow screens.
#[must_use]
pub fn font_px(config: &HeroConfig, viewport: &Viewport) -> f64 {
    let (width, _) = viewport.buffer_size();
    (config.font_size * viewport.dpr).min((f64::from(width) * MAX_FONT_WIDTH_RATIO).floor())
}

/// Sampling stride in whole device pixels, never below 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sample_stride(config: &HeroConfig, viewport: &Viewport) -> u32 {
    let stride = viewport.px(config.gap).floor();
    if stride.is_finite() && stride >= 1.0 { stride as u32 } else { 1 }
}

/// Draw `config.text` centered on `surface`, baseline at 56% of the height.
///
/// The final glyph is painted in `colors.o` when it is an "O"; everything
/// else uses `colors.main`.
pub fn layout_text<S: TextSurface>(surface: &mut S, config: &HeroConfig, viewport: &Viewport) {
    let (width, height) = viewport.buffer_size();
    surface.prepare(width, height, FontSpec { weight: config.font_weight, px: font_px(config, viewport) });

    let chars = config.text.chars().collect::<Vec<_>>();
    if chars.is_empty() {
        return;
    }

    let mut utf8 = [0_u8; 4];
    let widths = chars
        .iter()
        .map(|ch| surface.measure(ch.encode_utf8(&mut utf8)))
        .collect::<Vec<_>>();
    let spacing = viewport.px(config.letter_spacing);
    #[allow(clippy::cast_precision_loss)]
    let total_width = widths.iter().sum::<f64>() + (chars.len() - 1) as f64 * spacing;
    let start_x = ((f64::from(width) - total_width) / 2.0).round();
    let mid_y = (f64::from(height) * TEXT_MIDLINE_RATIO).round();

    let mut x = start_x;
    for (i, (ch, advance)) in chars.iter().zip(&widths).enumerate() {
        let color = if HeroConfig::is_accent(i, chars.len(), *ch) { config.colors.o } else { config.colors.main };
        surface.fill_text(ch.encode_utf8(&mut utf8), x, mid_y, color);
        x += advance + spacing;
    }
}

/// Scan `pixels` every `stride` pixels in both axes, keeping opaque ones.
#[must_use]
pub fn sample_points(pixels: &PixelBuffer, stride: u32) -> Vec<SampledPoint> {
    let step = stride.max(1) as usize;
    let mut points = Vec::new();
    for y in (0..pixels.height()).step_by(step) {
        for x in (0..pixels.width()).step_by(step) {
            if let Some([r, g, b, a]) = pixels.rgba(x, y)
                && a > ALPHA_THRESHOLD
            {
                points.push(SampledPoint { x: f64::from(x), y: f64::from(y), color: Rgb::new(r, g, b) });
            }
        }
    }
    points
}

/// Lay out the text for `viewport` and sample it.
pub fn layout_and_sample<S: TextSurface>(surface: &mut S, config: &HeroConfig, viewport: &Viewport) -> Vec<SampledPoint> {
    layout_text(surface, config, viewport);
    sample_points(&surface.pixels(), sample_stride(config, viewport))
}
