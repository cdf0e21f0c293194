use glam::Vec2;

/// Identifier for a particle in a [`crate::field::ParticleField`].
///
/// This is an index into the field's particle list, and is only meaningful
/// until the next resize regenerates the set.
pub type ParticleId = usize;

/// Width and height of the drawing surface, in surface units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `p` lies in `[0, width] × [0, height]`.
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}
