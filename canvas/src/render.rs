//! Rendering: draws effect state to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`]
//! for on-screen output. It receives read-only views of effect state and
//! produces pixels; it does not mutate any effect state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The engines' `render` methods hand the result to the host.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Rgb;
use crate::config::{StarFieldConfig, TrailConfig};
use crate::particle::Particle;
use crate::stars::Star;
use crate::trail::TrailPoint;

/// Draw the particle text frame: solid background, then one dot per particle.
///
/// `width` and `height` are the backing-store size in device pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    particles: &[Particle],
    background: Rgb,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(&background.css());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Particles come in sampled order, so colors arrive in long runs.
    let mut current = None;
    for p in particles {
        if current != Some(p.color) {
            ctx.set_fill_style_str(&p.color.css());
            current = Some(p.color);
        }
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

/// Draw the star field: each star at its own opacity with a small glowing core.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_stars(
    ctx: &CanvasRenderingContext2d,
    stars: &[Star],
    config: &StarFieldConfig,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    let color = config.color.hex();
    for star in stars {
        ctx.save();
        ctx.set_global_alpha(star.opacity);
        ctx.set_fill_style_str(&color);
        ctx.begin_path();
        ctx.arc(star.x, star.y, star.size, 0.0, TAU)?;
        ctx.fill();

        ctx.set_shadow_blur(config.glow);
        ctx.set_shadow_color(&color);
        ctx.begin_path();
        ctx.arc(star.x, star.y, star.size * 0.5, 0.0, TAU)?;
        ctx.fill();
        ctx.restore();
    }
    Ok(())
}

/// Draw the cursor trail as glowing dots fading with their remaining life.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_trail<'a>(
    ctx: &CanvasRenderingContext2d,
    points: impl Iterator<Item = &'a TrailPoint>,
    config: &TrailConfig,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    let color = config.color.hex();
    for point in points {
        ctx.save();
        ctx.set_global_alpha(point.opacity);
        ctx.set_fill_style_str(&color);
        ctx.set_shadow_blur(config.glow);
        ctx.set_shadow_color(&color);
        ctx.begin_path();
        ctx.arc(point.x, point.y, point.size, 0.0, TAU)?;
        ctx.fill();
        ctx.restore();
    }
    Ok(())
}
