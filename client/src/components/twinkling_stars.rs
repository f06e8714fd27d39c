//! Full-window star field drawn behind the page content.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use canvas::config::StarFieldConfig;
#[cfg(feature = "csr")]
use canvas::engine::StarsEngine;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::frame_loop::FrameLoop;
#[cfg(feature = "csr")]
use crate::util::layout::window_inner_size;

#[component]
pub fn TwinklingStars(#[prop(optional)] config: StarFieldConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(not(feature = "csr"))]
    let _ = config;

    #[cfg(feature = "csr")]
    {
        let engine = Rc::new(RefCell::new(None::<StarsEngine>));
        let frame_loop = StoredValue::new_local(None::<FrameLoop>);

        let engine_for_mount = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine_for_mount.borrow().is_some() {
                return;
            }
            let (width, height) = window_inner_size().unwrap_or_default();
            let Some(instance) = StarsEngine::new(canvas, config.clone(), width, height) else {
                log::warn!("star canvas has no 2d context; star field disabled");
                return;
            };
            *engine_for_mount.borrow_mut() = Some(instance);

            let engine_for_frame = Rc::clone(&engine_for_mount);
            frame_loop.set_value(FrameLoop::start(move |_ts| {
                if let Some(engine) = engine_for_frame.borrow_mut().as_mut() {
                    engine.tick(js_sys::Date::now());
                    if let Err(err) = engine.render() {
                        log::warn!("star field render failed: {err:?}");
                    }
                }
            }));
        });

        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let (Some(engine), Some((width, height))) = (engine.borrow_mut().as_mut(), window_inner_size()) {
                engine.resize(width, height);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! { <canvas class="twinkling-stars" node_ref=canvas_ref aria-hidden="true"></canvas> }
}
