//! Shared numeric constants for the canvas crate.

// ── Sampling ────────────────────────────────────────────────────

/// Alpha value a rasterized pixel must exceed to become a sampled point.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Vertical position of the text midline as a fraction of surface height.
pub const TEXT_MIDLINE_RATIO: f64 = 0.56;

/// Largest font size allowed, as a fraction of surface width.
pub const MAX_FONT_WIDTH_RATIO: f64 = 0.12;

/// Font stack used when rasterizing the hero text.
pub const FONT_FAMILY: &str = "Inter, system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif";

// ── Pointer ─────────────────────────────────────────────────────

/// Coordinate the pointer is parked at when it leaves the surface.
///
/// Far enough outside any realistic canvas that no particle is in range.
pub const POINTER_FAR: f64 = -9999.0;

// ── Star field ──────────────────────────────────────────────────

/// Per-tick opacity change scale for the twinkle oscillation.
pub const STAR_TWINKLE_STEP: f64 = 0.01;

/// Opacity floor and ceiling for a star.
pub const STAR_OPACITY_MIN: f64 = 0.1;
pub const STAR_OPACITY_MAX: f64 = 1.0;

// ── Cursor trail ────────────────────────────────────────────────

/// Radius range of a freshly pushed trail point.
pub const TRAIL_SIZE_MIN: f64 = 0.8;
pub const TRAIL_SIZE_SPAN: f64 = 1.5;

// ── Limits ──────────────────────────────────────────────────────

/// Largest star count accepted from configuration.
pub const MAX_STARS: usize = 5_000;

/// Largest trail length accepted from configuration.
pub const MAX_TRAIL_POINTS: usize = 1_000;
