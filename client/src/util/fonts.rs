//! Web font readiness.

/// Run `on_ready` once `document.fonts.ready` resolves.
///
/// Text rasterized before the web font arrives uses fallback metrics, so
/// callers resample here. Browsers without the Font Loading API skip the
/// callback; the first sample stands.
pub fn when_fonts_ready(on_ready: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ready = match document.fonts().ready() {
        Ok(promise) => promise,
        Err(err) => {
            log::debug!("document.fonts.ready unavailable: {err:?}");
            return;
        }
    };
    leptos::task::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(ready).await {
            Ok(_) => on_ready(),
            Err(err) => log::debug!("document.fonts.ready rejected: {err:?}"),
        }
    });
}
