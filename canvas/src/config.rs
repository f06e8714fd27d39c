//! Effect configuration.
//!
//! All three effects are configured with plain serde structs whose defaults
//! match the production landing page. Fields use camelCase on the wire so a
//! page can embed the same JSON the design team tunes by hand. Construction
//! through [`HeroConfig::from_json`] validates; `Default` values are always
//! valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{MAX_STARS, MAX_TRAIL_POINTS};

/// Errors produced while loading or validating effect configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid color {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("friction must be in (0, 1), got {0}")]
    Friction(f64),
    #[error("dotSize must satisfy 0 <= min <= max, got [{min}, {max}]")]
    DotSize { min: f64, max: f64 },
    #[error("gap must be positive, got {0}")]
    Gap(f64),
    #[error("dprLimit must be at least 1, got {0}")]
    DprLimit(f64),
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be in (0, 1], got {value}")]
    UnitInterval { field: &'static str, value: f64 },
    #[error("{field} must be at most {max}, got {value}")]
    TooMany { field: &'static str, value: usize, max: usize },
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fill colors for the hero text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Color of every glyph except an accented final "O".
    pub main: Rgb,
    /// Accent color for a final "O".
    pub o: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self { main: Rgb::new(0x6c, 0xc7, 0xd8), o: Rgb::new(0xe6, 0xe6, 0xe6) }
    }
}

/// A circular force zone around the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceZone {
    /// Zone radius in CSS pixels.
    pub radius: f64,
    /// Force magnitude at the pointer itself.
    pub strength: f64,
}

/// Configuration for the particle text renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroConfig {
    pub text: String,
    pub font_weight: u16,
    /// Nominal font size in CSS pixels.
    pub font_size: f64,
    /// Extra advance between glyphs in CSS pixels.
    pub letter_spacing: f64,
    pub colors: Palette,
    /// Sampling stride in CSS pixels.
    pub gap: f64,
    /// Maximum spawn offset from the target, per axis, in CSS pixels.
    pub jitter: f64,
    /// Particle radius range `[min, max]` in CSS pixels.
    pub dot_size: [f64; 2],
    pub spring: f64,
    pub friction: f64,
    pub mouse: ForceZone,
    pub burst: ForceZone,
    pub dpr_limit: f64,
    /// Fill painted behind the particles every frame.
    pub background: Rgb,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            text: "ECHOSIGHT".to_owned(),
            font_weight: 800,
            font_size: 180.0,
            letter_spacing: 16.0,
            colors: Palette::default(),
            gap: 5.0,
            jitter: 30.0,
            dot_size: [1.2, 2.2],
            spring: 0.12,
            friction: 0.85,
            mouse: ForceZone { radius: 110.0, strength: 18.0 },
            burst: ForceZone { radius: 140.0, strength: 28.0 },
            dpr_limit: 2.0,
            background: Rgb::BLACK,
        }
    }
}

impl HeroConfig {
    /// Parse camelCase JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input and any validation
    /// error from [`HeroConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric invariants the physics relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("fontSize", self.font_size),
            ("letterSpacing", self.letter_spacing),
            ("gap", self.gap),
            ("jitter", self.jitter),
            ("dotSize", self.dot_size[0]),
            ("dotSize", self.dot_size[1]),
            ("spring", self.spring),
            ("friction", self.friction),
            ("mouse.radius", self.mouse.radius),
            ("mouse.strength", self.mouse.strength),
            ("burst.radius", self.burst.radius),
            ("burst.strength", self.burst.strength),
            ("dprLimit", self.dpr_limit),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }

        if self.friction <= 0.0 || self.friction >= 1.0 {
            return Err(ConfigError::Friction(self.friction));
        }
        let [min, max] = self.dot_size;
        if min < 0.0 || min > max {
            return Err(ConfigError::DotSize { min, max });
        }
        if self.gap <= 0.0 {
            return Err(ConfigError::Gap(self.gap));
        }
        if self.dpr_limit < 1.0 {
            return Err(ConfigError::DprLimit(self.dpr_limit));
        }
        for (field, value) in [
            ("fontSize", self.font_size),
            ("jitter", self.jitter),
            ("spring", self.spring),
            ("mouse.radius", self.mouse.radius),
            ("burst.radius", self.burst.radius),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Whether glyph `index` of `len` is the accented final "O".
    #[must_use]
    pub fn is_accent(index: usize, len: usize, ch: char) -> bool {
        index + 1 == len && ch.eq_ignore_ascii_case(&'o')
    }
}

/// Configuration for the twinkling star field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    pub color: Rgb,
    /// Shadow blur of the glow core, in pixels.
    pub glow: f64,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self { count: 150, color: Rgb::new(0x60, 0xa5, 0xfa), glow: 10.0 }
    }
}

impl StarFieldConfig {
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count > MAX_STARS {
            return Err(ConfigError::TooMany { field: "stars.count", value: self.count, max: MAX_STARS });
        }
        check_glow("stars.glow", self.glow)
    }
}

/// Configuration for the cursor trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailConfig {
    /// Oldest points are dropped beyond this count.
    pub max_points: usize,
    /// Life lost per tick; a point lives `ceil(1 / decay)` ticks.
    pub decay: f64,
    /// Radius multiplier applied every tick.
    pub shrink: f64,
    pub color: Rgb,
    pub glow: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { max_points: 12, decay: 0.02, shrink: 0.98, color: Rgb::new(0x60, 0xa5, 0xfa), glow: 8.0 }
    }
}

impl TrailConfig {
    /// Points must expire and never grow, so `decay` and `shrink` live in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_points > MAX_TRAIL_POINTS {
            return Err(ConfigError::TooMany {
                field: "trail.maxPoints",
                value: self.max_points,
                max: MAX_TRAIL_POINTS,
            });
        }
        for (field, value) in [("trail.decay", self.decay), ("trail.shrink", self.shrink)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::UnitInterval { field, value });
            }
        }
        check_glow("trail.glow", self.glow)
    }
}

fn check_glow(field: &'static str, glow: f64) -> Result<(), ConfigError> {
    if !glow.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if glow < 0.0 {
        return Err(ConfigError::Negative { field, value: glow });
    }
    Ok(())
}
