//! Offscreen text rasterization.
//!
//! Sampling needs exactly four things from a drawing surface: size it, measure
//! a glyph, fill a glyph in a color, and read back RGBA pixels. [`TextSurface`]
//! names that seam so the sampler runs against a real offscreen `<canvas>` in
//! the browser ([`OffscreenText`]) and against a deterministic block rasterizer
//! in tests.

#[cfg(test)]
#[path = "surface_test.rs"]
pub(crate) mod surface_test;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Rgb;
use crate::consts::FONT_FAMILY;

/// Font used for one rasterization pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub weight: u16,
    /// Size in device pixels.
    pub px: f64,
}

impl FontSpec {
    /// CSS shorthand accepted by `CanvasRenderingContext2d.font`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("{} {}px {FONT_FAMILY}", self.weight, self.px)
    }
}

/// Row-major RGBA pixels, 4 bytes per pixel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes. A length that disagrees with the dimensions yields
    /// an empty buffer.
    #[must_use]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        if data.len() != width as usize * height as usize * 4 {
            return Self::default();
        }
        Self { width, height, data }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A surface the sampler can draw text on and read back.
pub trait TextSurface {
    /// Resize to `width` x `height` device pixels, clear to transparent, and
    /// select `font` with a middle baseline and left alignment.
    fn prepare(&mut self, width: u32, height: u32, font: FontSpec);

    /// Advance width of `text` in the current font.
    fn measure(&self, text: &str) -> f64;

    /// Fill `text` with its left edge at `x` and its middle at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgb);

    /// Read back the whole surface.
    fn pixels(&self) -> PixelBuffer;
}

/// Detached `<canvas>` used as the rasterization target in the browser.
pub struct OffscreenText {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl OffscreenText {
    /// Create a detached canvas. Returns `None` without a document or 2D context.
    #[must_use]
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let Ok(el) = document.create_element("canvas") else {
            return None;
        };
        let Ok(canvas) = el.dyn_into::<HtmlCanvasElement>() else {
            return None;
        };
        let ctx = context_2d(&canvas)?;
        Some(Self { canvas, ctx })
    }
}

impl TextSurface for OffscreenText {
    fn prepare(&mut self, width: u32, height: u32, font: FontSpec) {
        // Resizing resets all context state, so font and alignment follow it.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.ctx.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
        self.ctx.set_font(&font.css());
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align("left");
    }

    fn measure(&self, text: &str) -> f64 {
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => 0.0,
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
        if let Err(err) = self.ctx.fill_text(text, x, y) {
            log::debug!("offscreen fill_text failed: {err:?}");
        }
    }

    fn pixels(&self) -> PixelBuffer {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if w == 0 || h == 0 {
            return PixelBuffer::default();
        }
        match self.ctx.get_image_data(0.0, 0.0, f64::from(w), f64::from(h)) {
            Ok(image) => PixelBuffer::new(image.width(), image.height(), image.data().0),
            Err(err) => {
                log::debug!("offscreen get_image_data failed: {err:?}");
                PixelBuffer::default()
            }
        }
    }
}

/// Fetch the 2D context of `canvas`, or `None` if the browser refuses one.
#[must_use]
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => Some(ctx),
            Err(_) => None,
        },
        _ => None,
    }
}
