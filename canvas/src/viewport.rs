#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in either CSS or device-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing surface dimensions.
///
/// `css_width` / `css_height` are in CSS pixels. `dpr` is the device pixel
/// ratio after clamping; the backing store is `floor(css * dpr)` device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { css_width: 0.0, css_height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport, clamping the reported device pixel ratio to `dpr_limit`.
    #[must_use]
    pub fn new(css_width: f64, css_height: f64, device_dpr: f64, dpr_limit: f64) -> Self {
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            dpr: clamp_dpr(device_dpr, dpr_limit),
        }
    }

    /// Backing-store size in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn buffer_size(&self) -> (u32, u32) {
        ((self.css_width * self.dpr).floor() as u32, (self.css_height * self.dpr).floor() as u32)
    }

    /// Convert a CSS-pixel length to whole device pixels.
    #[must_use]
    pub fn px(&self, css: f64) -> f64 {
        (css * self.dpr).round()
    }

    /// Convert a CSS-pixel point (relative to the surface) to device pixels.
    #[must_use]
    pub fn css_to_device(&self, css: Point) -> Point {
        Point { x: css.x * self.dpr, y: css.y * self.dpr }
    }
}

/// Clamp a reported device pixel ratio.
///
/// Missing or nonsensical ratios (zero, negative, NaN) fall back to 1.
#[must_use]
pub fn clamp_dpr(device_dpr: f64, limit: f64) -> f64 {
    let dpr = if device_dpr.is_finite() && device_dpr > 0.0 { device_dpr } else { 1.0 };
    dpr.min(limit)
}
