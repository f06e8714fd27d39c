//! Canvas effects for the EchoSight landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! state and drawing of three decorative effects: the particle text hero, a
//! twinkling star field, and a fading cursor trail. The host (the Leptos
//! client) only sizes the canvases, forwards DOM pointer events, and calls
//! `tick` + `render` once per animation frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-bound engines and the testable [`engine::HeroCore`] |
//! | [`config`] | Effect configuration, defaults, and validation |
//! | [`color`] | `#rgb` / `#rrggbb` colors |
//! | [`viewport`] | CSS vs device pixel sizing |
//! | [`surface`] | Offscreen text rasterization behind [`surface::TextSurface`] |
//! | [`sample`] | Text layout and alpha-threshold pixel sampling |
//! | [`particle`] | Particle set, spring physics, and pointer forces |
//! | [`input`] | Pointer state |
//! | [`stars`] | Twinkling, drifting star field |
//! | [`trail`] | Cursor trail points |
//! | [`render`] | `Canvas2D` drawing for all three effects |
//! | [`consts`] | Shared numeric constants |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod input;
pub mod particle;
pub mod render;
pub mod sample;
pub mod stars;
pub mod surface;
pub mod trail;
pub mod viewport;
