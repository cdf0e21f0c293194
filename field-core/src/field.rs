use crate::{
    config::FieldConfig,
    particle::Particle,
    phases::{self, Link},
    surface::{Glow, Surface},
    types::SurfaceSize,
};
use rand::Rng;

/// A fixed-size set of drifting particles bounded by a surface.
///
/// The set is created wholesale in [`ParticleField::new`] and recreated
/// wholesale by [`ParticleField::resize`]; particles have no identity beyond
/// their index.
#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    size: SurfaceSize,
    count: usize,
    cfg: FieldConfig,
}

impl ParticleField {
    /// Creates `count` random particles inside `size`.
    pub fn new(size: SurfaceSize, count: usize, cfg: FieldConfig, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(count),
            size,
            count,
            cfg,
        };
        field.populate(rng);
        field
    }

    /// Builds a field around existing particles, mainly for tests and
    /// hand-placed layouts. The particle count becomes `particles.len()`.
    pub fn from_particles(size: SurfaceSize, particles: Vec<Particle>, cfg: FieldConfig) -> Self {
        Self {
            count: particles.len(),
            particles,
            size,
            cfg,
        }
    }

    fn populate(&mut self, rng: &mut impl Rng) {
        self.particles.clear();
        self.particles
            .extend((0..self.count).map(|_| Particle::random(self.size, &self.cfg, rng)));
        tracing::debug!(
            count = self.count,
            width = self.size.width,
            height = self.size.height,
            "populated particle field"
        );
    }

    /// Throws away every particle and repopulates at the new size.
    ///
    /// Motion state from before the resize is not carried over.
    pub fn resize(&mut self, size: SurfaceSize, rng: &mut impl Rng) {
        self.size = size;
        self.populate(rng);
    }

    /// Advances the field by one frame at wall-clock `time` (seconds).
    pub fn advance_frame(&mut self, time: f64, rng: &mut impl Rng) {
        phases::motion_phase(&mut self.particles, self.size, &self.cfg, time);
        phases::pulse_phase(&mut self.particles, &self.cfg, time);
        phases::recolor_phase(&mut self.particles, &self.cfg, rng);
    }

    /// Clears `surface`, draws every particle with its glow, then the links.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();

        for p in &self.particles {
            let glow = Glow {
                radius: p.radius * self.cfg.glow_scale,
                opacity: p.opacity * self.cfg.glow_strength,
            };
            surface.fill_circle(p.pos, p.radius, p.color, p.opacity, Some(glow));
        }

        for link in self.links() {
            surface.line(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                self.cfg.link_color,
                link.opacity,
            );
        }
    }

    /// Pairs that [`ParticleField::render`] connects with a line.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        phases::links(&self.particles, self.cfg.link_distance, self.cfg.link_opacity)
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
