//! Utility helpers shared across the landing page components.
//!
//! Browser-only helpers are compiled with the `csr` feature; the pure sizing
//! and settings logic builds and tests natively.

#[cfg(feature = "csr")]
pub mod fonts;
#[cfg(feature = "csr")]
pub mod frame_loop;
pub mod layout;
pub mod page_config;
