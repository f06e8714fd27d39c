use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{ForceZone, HeroConfig, StarFieldConfig, TrailConfig};
use crate::input::PointerState;
use crate::particle::{Dynamics, Force, ParticleField, Spawn};
use crate::render;
use crate::sample::layout_and_sample;
use crate::stars::StarField;
use crate::surface::{OffscreenText, TextSurface, context_2d};
use crate::trail::CursorTrail;
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core particle-text state: all logic that doesn't depend on the canvas element.
///
/// Separated from `HeroEngine` so it can be tested without WASM/browser dependencies.
pub struct HeroCore {
    pub config: HeroConfig,
    pub field: ParticleField,
    pub pointer: PointerState,
    pub viewport: Viewport,
}

impl HeroCore {
    #[must_use]
    pub fn new(config: HeroConfig, seed: u64) -> Self {
        Self { config, field: ParticleField::new(seed), pointer: PointerState::default(), viewport: Viewport::default() }
    }

    // --- Viewport ---

    /// Adopt a new CSS size and device pixel ratio, then resample.
    ///
    /// Returns the new particle count.
    pub fn resize<S: TextSurface>(&mut self, css_width: f64, css_height: f64, device_dpr: f64, surface: &mut S) -> usize {
        self.viewport = Viewport::new(css_width, css_height, device_dpr, self.config.dpr_limit);
        self.resample(surface)
    }

    /// Re-rasterize the text at the current viewport and reconcile particles.
    ///
    /// Called on resize and again once web fonts finish loading.
    pub fn resample<S: TextSurface>(&mut self, surface: &mut S) -> usize {
        let points = layout_and_sample(surface, &self.config, &self.viewport);
        self.field.rebuild(&points, self.spawn());
        log::debug!(
            "hero resample: {} points at {:?} (dpr {})",
            points.len(),
            self.viewport.buffer_size(),
            self.viewport.dpr
        );
        points.len()
    }

    // --- Input events ---

    /// `local` is in CSS pixels relative to the canvas' top-left corner.
    pub fn on_pointer_move(&mut self, local: Point) {
        self.pointer.on_move(self.viewport.css_to_device(local));
    }

    /// Record the press and push nearby particles away once.
    pub fn on_pointer_down(&mut self, local: Point) {
        self.pointer.on_down(self.viewport.css_to_device(local));
        let force = self.force(self.config.burst);
        self.field.burst(self.pointer.position, force);
    }

    pub fn on_pointer_up(&mut self) {
        self.pointer.on_up();
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_leave();
    }

    // --- Frame ---

    /// Advance the physics by one animation frame.
    ///
    /// With the pointer off the surface there is no repulsion at all, however
    /// large the configured radius.
    pub fn tick(&mut self) {
        let mut dynamics = self.dynamics();
        if !self.pointer.is_present() {
            dynamics.mouse.radius = 0.0;
        }
        self.field.step(&dynamics, self.pointer.position);
    }

    // --- Derived parameters (device pixels) ---

    #[must_use]
    pub fn spawn(&self) -> Spawn {
        let [min, max] = self.config.dot_size;
        Spawn {
            jitter: self.viewport.px(self.config.jitter),
            size_min: min * self.viewport.dpr,
            size_max: max * self.viewport.dpr,
        }
    }

    #[must_use]
    pub fn dynamics(&self) -> Dynamics {
        Dynamics { spring: self.config.spring, friction: self.config.friction, mouse: self.force(self.config.mouse) }
    }

    fn force(&self, zone: ForceZone) -> Force {
        Force { radius: self.viewport.px(zone.radius), strength: zone.strength }
    }
}

/// The particle text renderer bound to an on-screen canvas.
pub struct HeroEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: OffscreenText,
    pub core: HeroCore,
}

impl HeroEngine {
    /// Bind to `canvas`. Returns `None` when no 2D context is available, in
    /// which case the effect simply does not run.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: HeroConfig) -> Option<Self> {
        let ctx = context_2d(&canvas)?;
        let surface = OffscreenText::new()?;
        Some(Self { canvas, ctx, surface, core: HeroCore::new(config, random_seed()) })
    }

    // --- Viewport ---

    /// Size the backing store for `css_width` x `css_height` and resample.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas style cannot be updated.
    pub fn resize(&mut self, css_width: f64, css_height: f64, device_dpr: f64) -> Result<(), JsValue> {
        self.core.resize(css_width, css_height, device_dpr, &mut self.surface);
        let (width, height) = self.core.viewport.buffer_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", self.core.viewport.css_width))?;
        style.set_property("height", &format!("{}px", self.core.viewport.css_height))?;
        Ok(())
    }

    /// Resample at the current size, e.g. after a web font finished loading.
    pub fn resample(&mut self) -> usize {
        self.core.resample(&mut self.surface)
    }

    // --- Input events (client coordinates) ---

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        let local = self.local_point(client_x, client_y);
        self.core.on_pointer_move(local);
    }

    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64) {
        let local = self.local_point(client_x, client_y);
        self.core.on_pointer_down(local);
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    // --- Frame ---

    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Draw the current particle state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let (width, height) = self.core.viewport.buffer_size();
        render::draw_particles(
            &self.ctx,
            self.core.field.particles(),
            self.core.config.background,
            f64::from(width),
            f64::from(height),
        )
    }

    fn local_point(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(client_x - rect.left(), client_y - rect.top())
    }
}

/// The twinkling star field bound to an on-screen canvas.
pub struct StarsEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: StarFieldConfig,
    pub field: StarField,
}

impl StarsEngine {
    /// Bind to `canvas` and scatter stars over `width` x `height` CSS pixels.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: StarFieldConfig, width: f64, height: f64) -> Option<Self> {
        let ctx = context_2d(&canvas)?;
        let mut engine = Self { canvas, ctx, field: StarField::new(random_seed()), config };
        engine.resize(width, height);
        engine.field.seed(width, height, engine.config.count);
        Some(engine)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        set_canvas_size(&self.canvas, width, height);
        self.field.resize(width, height);
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.field.tick(now_ms);
    }

    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let (width, height) = self.field.size();
        render::draw_stars(&self.ctx, self.field.stars(), &self.config, width, height)
    }
}

/// The cursor trail bound to an on-screen canvas.
pub struct TrailEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: TrailConfig,
    width: f64,
    height: f64,
    pub trail: CursorTrail,
}

impl TrailEngine {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: TrailConfig) -> Option<Self> {
        let ctx = context_2d(&canvas)?;
        let trail = CursorTrail::new(&config, random_seed());
        Some(Self { canvas, ctx, config, width: 0.0, height: 0.0, trail })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        set_canvas_size(&self.canvas, width, height);
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn on_mouse_move(&mut self, client_x: f64, client_y: f64) {
        self.trail.push(client_x, client_y);
    }

    pub fn tick(&mut self) {
        self.trail.tick();
    }

    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw_trail(&self.ctx, self.trail.points(), &self.config, self.width, self.height)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn set_canvas_size(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0).floor() as u32);
    canvas.set_height(height.max(0.0).floor() as u32);
}

/// Seed for effect RNGs, drawn from the browser's `Math.random`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}
