use crate::{color::Rgb, config::FieldConfig, types::SurfaceSize};
use glam::Vec2;
use rand::Rng;
use std::cmp::Ordering;

/// One decorative point in the field.
///
/// `radius` and palette membership of `color` never change after creation;
/// `opacity` is rederived every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: Rgb,
}

impl Particle {
    /// Spawns a particle somewhere in `[0, width) × [0, height)`.
    pub fn random(size: SurfaceSize, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            sample(rng, 0.0, size.width),
            sample(rng, 0.0, size.height),
        );
        let vel = Vec2::new(
            sample(rng, -cfg.max_speed, cfg.max_speed),
            sample(rng, -cfg.max_speed, cfg.max_speed),
        );

        Self {
            pos,
            vel,
            radius: sample(rng, cfg.radius_min, cfg.radius_max),
            opacity: sample(rng, cfg.opacity_min, cfg.opacity_max),
            color: cfg.palette.pick(rng),
        }
    }
}

/// Uniform sample from `[lo, hi)`, or `lo` when the range is empty, NaN
/// or wider than an `f32` can represent.
///
/// Degenerate surfaces and hand-built configs must not panic the sampler.
fn sample(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if lo.partial_cmp(&hi) != Some(Ordering::Less) || !(hi - lo).is_finite() {
        return lo;
    }
    // Float rounding may land exactly on `hi`.
    let v = rng.random_range(lo..hi);
    if v < hi { v } else { lo }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_particle_respects_config_ranges() {
        let cfg = FieldConfig::default();
        let size = SurfaceSize::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let p = Particle::random(size, &cfg, &mut rng);
            assert!((0.0..800.0).contains(&p.pos.x));
            assert!((0.0..600.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= cfg.max_speed && p.vel.y.abs() <= cfg.max_speed);
            assert!(cfg.radius_range().contains(&p.radius));
            assert!((cfg.opacity_min..=cfg.opacity_max).contains(&p.opacity));
            assert!(cfg.palette.contains(p.color));
        }
    }

    #[test]
    fn zero_sized_surface_pins_particles_to_origin() {
        let cfg = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let p = Particle::random(SurfaceSize::new(0.0, 0.0), &cfg, &mut rng);
        assert_eq!(p.pos, Vec2::ZERO);
    }

    #[test]
    fn non_finite_ranges_fall_back_to_lower_bound() {
        let cfg = FieldConfig {
            max_speed: f32::INFINITY,
            radius_max: f32::INFINITY,
            ..FieldConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);

        let p = Particle::random(SurfaceSize::new(800.0, 600.0), &cfg, &mut rng);

        assert_eq!(p.vel, Vec2::splat(-f32::INFINITY));
        assert_eq!(p.radius, cfg.radius_min);
    }

    #[test]
    fn huge_finite_speed_does_not_overflow_the_span() {
        let cfg = FieldConfig {
            max_speed: 3.0e38,
            ..FieldConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);

        let p = Particle::random(SurfaceSize::new(800.0, 600.0), &cfg, &mut rng);

        // 2 * 3e38 overflows f32, so the sampler takes the lower bound.
        assert_eq!(p.vel, Vec2::splat(-3.0e38));
    }

    #[test]
    fn same_seed_spawns_same_particle() {
        let cfg = FieldConfig::default();
        let size = SurfaceSize::new(320.0, 240.0);

        let a = Particle::random(size, &cfg, &mut StdRng::seed_from_u64(9));
        let b = Particle::random(size, &cfg, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
