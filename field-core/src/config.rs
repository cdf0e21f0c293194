use crate::{
    color::{self, Palette, Rgb},
    error::ConfigError,
};
use serde::Deserialize;
use std::{ops::RangeInclusive, path::Path};

/// Upper bound for `max_speed`, in surface units per frame.
pub const SPEED_LIMIT: f32 = 1_000.0;

/// Upper bound for `radius_max`, in surface units.
pub const RADIUS_LIMIT: f32 = 1_000.0;

/// Tunables for the particle field.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides. `particle_count` is signed because a negative count from a
/// config file must degrade to an empty field rather than fail to load.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: i64,
    pub palette: Palette,
    pub radius_min: f32,
    pub radius_max: f32,
    pub max_speed: f32,
    pub drift_amplitude: f32,
    pub drift_speed: f64,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub pulse_speed: f64,
    pub recolor_probability: f64,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub link_color: Rgb,
    pub glow_scale: f32,
    pub glow_strength: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            palette: Palette::default(),
            radius_min: 1.0,
            radius_max: 3.0,
            max_speed: 0.25,
            drift_amplitude: 0.1,
            drift_speed: 0.5,
            opacity_min: 0.1,
            opacity_max: 0.4,
            pulse_speed: 1.0,
            recolor_probability: 0.001,
            link_distance: 100.0,
            link_opacity: 0.2,
            link_color: color::VIOLET,
            glow_scale: 3.0,
            glow_strength: 0.35,
        }
    }
}

impl FieldConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: FieldConfig = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let cfg = Self::from_toml_str(&src)?;
        tracing::info!(path = %path.display(), "loaded particle field config");
        Ok(cfg)
    }

    /// Number of particles to create; negative counts become zero.
    pub fn particle_count(&self) -> usize {
        usize::try_from(self.particle_count).unwrap_or(0)
    }

    pub fn radius_range(&self) -> RangeInclusive<f32> {
        self.radius_min..=self.radius_max
    }

    /// Checks that every value is finite, ranges are ordered, and
    /// magnitudes are non-negative and within their limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("drift_speed", self.drift_speed),
            ("pulse_speed", self.pulse_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !self.radius_min.is_finite()
            || !self.radius_max.is_finite()
            || self.radius_min <= 0.0
            || self.radius_min > self.radius_max
            || self.radius_max > RADIUS_LIMIT
        {
            return Err(ConfigError::invalid(format!(
                "radius range {}..{} must be positive, ordered and at most {RADIUS_LIMIT}",
                self.radius_min, self.radius_max
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity_min)
            || !(0.0..=1.0).contains(&self.opacity_max)
            || self.opacity_min > self.opacity_max
        {
            return Err(ConfigError::invalid(format!(
                "opacity band {}..{} must be ordered within [0, 1]",
                self.opacity_min, self.opacity_max
            )));
        }
        if !(0.0..=1.0).contains(&self.recolor_probability) {
            return Err(ConfigError::invalid(format!(
                "recolor_probability {} must be within [0, 1]",
                self.recolor_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.link_opacity) {
            return Err(ConfigError::invalid(format!(
                "link_opacity {} must be within [0, 1]",
                self.link_opacity
            )));
        }
        for (name, value) in [
            ("max_speed", self.max_speed),
            ("drift_amplitude", self.drift_amplitude),
            ("link_distance", self.link_distance),
            ("glow_scale", self.glow_scale),
            ("glow_strength", self.glow_strength),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.max_speed > SPEED_LIMIT {
            return Err(ConfigError::invalid(format!(
                "max_speed {} must be at most {SPEED_LIMIT}",
                self.max_speed
            )));
        }
        Ok(())
    }
}
