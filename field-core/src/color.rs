//! Colours and the palette particles draw from.

use crate::error::ConfigError;
use rand::Rng;
use serde::Deserialize;

/// An opaque sRGB colour. Deserializes from a `[r, g, b]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

pub const BLUE: Rgb = Rgb::new(59, 130, 246);
pub const VIOLET: Rgb = Rgb::new(139, 92, 246);
pub const CYAN: Rgb = Rgb::new(6, 182, 212);
pub const PINK: Rgb = Rgb::new(236, 72, 153);

/// A non-empty, ordered set of colours.
///
/// Emptiness is rejected at construction, so [`Palette::pick`] always has
/// something to return.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Picks a colour uniformly at random.
    pub fn pick(&self, rng: &mut impl Rng) -> Rgb {
        self.colors[rng.random_range(0..self.colors.len())]
    }

    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![BLUE, VIOLET, CYAN, PINK],
        }
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<Rgb>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}
