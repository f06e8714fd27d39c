//! Landing page components.
//!
//! Each component owns one `<canvas>` and one effect engine from the `canvas`
//! crate. Browser wiring is compiled with the `csr` feature; without it the
//! components render their markup only.

pub mod cursor_trail;
pub mod hero_canvas;
pub mod twinkling_stars;
