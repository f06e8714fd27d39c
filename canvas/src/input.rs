//! Pointer model shared by the effect engines.
//!
//! The host forwards raw DOM pointer events; the engine keeps only the last
//! known position (device pixels) and whether a button is held. Leaving the
//! surface parks the pointer at [`POINTER_FAR`] so no particle stays inside
//! the repulsion zone.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::POINTER_FAR;
use crate::viewport::Point;

/// Last known pointer state, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Point,
    pub pressed: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self { position: Point::new(POINTER_FAR, POINTER_FAR), pressed: false }
    }
}

impl PointerState {
    pub fn on_move(&mut self, position: Point) {
        self.position = position;
    }

    pub fn on_down(&mut self, position: Point) {
        self.position = position;
        self.pressed = true;
    }

    pub fn on_up(&mut self) {
        self.pressed = false;
    }

    /// Park the pointer far away. The pressed flag is left alone; the
    /// matching `pointerup` clears it.
    pub fn on_leave(&mut self) {
        self.position = Point::new(POINTER_FAR, POINTER_FAR);
    }

    /// Whether the pointer is over the surface.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.position != Point::new(POINTER_FAR, POINTER_FAR)
    }
}
