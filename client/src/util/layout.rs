//! Window measurements for the landing page canvases.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Share of the window height given to the hero canvas.
pub const HERO_HEIGHT_RATIO: f64 = 0.9;

/// Hero canvas size in CSS pixels for a window of `inner_width` x `inner_height`.
pub fn hero_css_size(inner_width: f64, inner_height: f64) -> (f64, f64) {
    (non_negative(inner_width), non_negative(inner_height * HERO_HEIGHT_RATIO))
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// `window.innerWidth` / `window.innerHeight`, or `None` outside a browser.
#[cfg(feature = "csr")]
pub fn window_inner_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// The browser's device pixel ratio, before any clamping.
#[cfg(feature = "csr")]
pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}
