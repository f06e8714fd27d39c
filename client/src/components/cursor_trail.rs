//! Glowing dots that follow the mouse across the whole window.
//!
//! The canvas ignores pointer events; positions come from a window
//! `mousemove` listener so the trail also runs over page content.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use canvas::config::TrailConfig;
#[cfg(feature = "csr")]
use canvas::engine::TrailEngine;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::frame_loop::FrameLoop;
#[cfg(feature = "csr")]
use crate::util::layout::window_inner_size;

#[component]
pub fn CursorTrail(#[prop(optional)] config: TrailConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(not(feature = "csr"))]
    let _ = config;

    #[cfg(feature = "csr")]
    {
        let engine = Rc::new(RefCell::new(None::<TrailEngine>));
        let frame_loop = StoredValue::new_local(None::<FrameLoop>);

        let engine_for_mount = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine_for_mount.borrow().is_some() {
                return;
            }
            let Some(mut instance) = TrailEngine::new(canvas, config.clone()) else {
                log::warn!("trail canvas has no 2d context; cursor trail disabled");
                return;
            };
            let (width, height) = window_inner_size().unwrap_or_default();
            instance.resize(width, height);
            *engine_for_mount.borrow_mut() = Some(instance);

            let engine_for_frame = Rc::clone(&engine_for_mount);
            frame_loop.set_value(FrameLoop::start(move |_ts| {
                if let Some(engine) = engine_for_frame.borrow_mut().as_mut() {
                    engine.tick();
                    if let Err(err) = engine.render() {
                        log::warn!("cursor trail render failed: {err:?}");
                    }
                }
            }));
        });

        let engine_for_resize = Rc::clone(&engine);
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let (Some(engine), Some((width, height))) =
                (engine_for_resize.borrow_mut().as_mut(), window_inner_size())
            {
                engine.resize(width, height);
            }
        });
        let mouse_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_mouse_move(f64::from(ev.client_x()), f64::from(ev.client_y()));
            }
        });
        on_cleanup(move || {
            resize.remove();
            mouse_move.remove();
        });
    }

    view! { <canvas class="cursor-trail" node_ref=canvas_ref aria-hidden="true"></canvas> }
}
