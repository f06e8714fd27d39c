//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{cursor_trail::CursorTrail, hero_canvas::HeroCanvas, twinkling_stars::TwinklingStars};
use crate::util::page_config;

/// Landing page: star field and cursor trail overlays around the hero.
///
/// Effect settings are read once from the page at mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = page_config::load();

    view! {
        <Title text="EchoSight"/>

        <div class="landing">
            <TwinklingStars config=config.stars/>
            <CursorTrail config=config.trail/>
            <main class="content-layer">
                <HeroCanvas config=config.hero/>
            </main>
        </div>
    }
}
