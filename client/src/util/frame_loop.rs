//! `requestAnimationFrame` loop owned by a component.
//!
//! Each frame requests the next one before running the callback, so a
//! callback that fails or returns early never stalls the loop. Dropping the
//! [`FrameLoop`] cancels the pending request and releases the closure along
//! with everything it captured.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    callback: RefCell<Option<FrameCallback>>,
    pending: Cell<Option<i32>>,
}

/// A running animation loop. Cancels itself on drop.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Start calling `on_frame(timestamp_ms)` once per animation frame.
    ///
    /// Returns `None` outside a browser window.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Option<Self> {
        web_sys::window()?;
        let state = Rc::new(LoopState { callback: RefCell::new(None), pending: Cell::new(None) });

        // The closure only holds a weak handle, so the loop dies with its owner.
        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |ts: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            request_next(&state);
            on_frame(ts);
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        request_next(&state);
        Some(Self { state })
    }

    /// Stop the loop. Safe to call more than once.
    pub fn cancel(&self) {
        if let Some(handle) = self.state.pending.take()
            && let Some(window) = web_sys::window()
            && let Err(err) = window.cancel_animation_frame(handle)
        {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
        self.state.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_next(state: &LoopState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = state.callback.borrow();
    let Some(callback) = callback.as_ref() else {
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => state.pending.set(Some(handle)),
        Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
    }
}
