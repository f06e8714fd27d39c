//! Particle text hero.
//!
//! Bridges Leptos and the imperative `canvas::engine::HeroEngine`: the
//! component mounts the engine once the `<canvas>` exists, keeps it sized to
//! the window, forwards pointer events, and drives it from a [`FrameLoop`].
//! Everything it creates is released when the component unmounts.
//!
//! [`FrameLoop`]: crate::util::frame_loop::FrameLoop

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use canvas::config::HeroConfig;
#[cfg(feature = "csr")]
use canvas::engine::HeroEngine;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::fonts::when_fonts_ready;
#[cfg(feature = "csr")]
use crate::util::frame_loop::FrameLoop;
#[cfg(feature = "csr")]
use crate::util::layout::{device_pixel_ratio, hero_css_size, window_inner_size};

#[cfg(feature = "csr")]
type SharedEngine = Rc<RefCell<Option<HeroEngine>>>;

/// Size the engine to the current window.
#[cfg(feature = "csr")]
fn fit_to_window(engine: &mut HeroEngine) {
    let Some((inner_width, inner_height)) = window_inner_size() else {
        return;
    };
    let (width, height) = hero_css_size(inner_width, inner_height);
    if let Err(err) = engine.resize(width, height, device_pixel_ratio()) {
        log::warn!("hero resize failed: {err:?}");
    }
}

#[cfg(feature = "csr")]
fn with_engine(engine: &SharedEngine, f: impl FnOnce(&mut HeroEngine)) {
    if let Some(engine) = engine.borrow_mut().as_mut() {
        f(engine);
    }
}

/// Full-width hero section rendering `config.text` as interactive particles.
///
/// Without a 2D context the section stays a plain black band.
#[component]
pub fn HeroCanvas(#[prop(optional)] config: HeroConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    #[cfg(not(feature = "csr"))]
    let _ = config;

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let frame_loop = StoredValue::new_local(None::<FrameLoop>);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let Some(mut instance) = HeroEngine::new(canvas, config.clone()) else {
                log::warn!("hero canvas has no 2d context; particle text disabled");
                return;
            };
            fit_to_window(&mut instance);
            *engine.borrow_mut() = Some(instance);

            // Metrics change once the web font arrives.
            let engine_for_fonts = Rc::clone(&engine);
            when_fonts_ready(move || {
                with_engine(&engine_for_fonts, |engine| {
                    engine.resample();
                });
            });

            let engine_for_frame = Rc::clone(&engine);
            frame_loop.set_value(FrameLoop::start(move |_ts| {
                with_engine(&engine_for_frame, |engine| {
                    engine.tick();
                    if let Err(err) = engine.render() {
                        log::warn!("hero render failed: {err:?}");
                    }
                });
            }));
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            with_engine(&engine, fit_to_window);
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                with_engine(&engine, |engine| {
                    engine.on_pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y()));
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                with_engine(&engine, |engine| {
                    engine.on_pointer_down(f64::from(ev.client_x()), f64::from(ev.client_y()));
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                with_engine(&engine, HeroEngine::on_pointer_up);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                with_engine(&engine, HeroEngine::on_pointer_leave);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <section id="hero" class="hero">
            <canvas
                class="hero-canvas"
                node_ref=canvas_ref
                aria-label="EchoSight"
                on:pointermove=on_pointer_move
                on:pointerdown=on_pointer_down
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            ></canvas>
        </section>
    }
}
