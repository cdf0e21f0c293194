//! Per-frame phases for the particle field.
//!
//! The typical frame looks like:
//! 1. [`motion_phase`] — integrate velocity plus a time-varying drift and
//!    reflect off the surface edges.
//! 2. [`pulse_phase`] — rederive each particle's opacity.
//! 3. [`recolor_phase`] — occasionally swap a particle's palette colour.
//!
//! Rendering then walks the particles and the [`links`] between them.

use crate::{
    config::FieldConfig,
    particle::Particle,
    types::{ParticleId, SurfaceSize},
};
use glam::Vec2;
use rand::Rng;

/// A line to draw between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: ParticleId,
    pub b: ParticleId,
    pub distance: f32,
    pub opacity: f32,
}

/// Moves every particle by its velocity plus a sinusoidal drift.
///
/// The drift for particle `i` at time `t` is
/// `(sin φ, cos φ) * cfg.drift_amplitude` with
/// `φ = t * cfg.drift_speed + i * 0.5`, so neighbouring indices sway out of
/// phase and the field "breathes" instead of sliding uniformly.
///
/// On each axis, if the step would carry the particle outside
/// `[0, extent]`, the velocity component is negated and the step is
/// mirrored back into the surface. When even the mirrored step does not
/// fit (a surface thinner than one step) that axis stays put.
///
/// ### Parameters
/// - `particles` - Particles to move, in index order.
/// - `size` - Current surface bounds.
/// - `cfg` - Provides drift amplitude and speed.
/// - `time` - Wall-clock time in seconds.
pub fn motion_phase(particles: &mut [Particle], size: SurfaceSize, cfg: &FieldConfig, time: f64) {
    for (i, p) in particles.iter_mut().enumerate() {
        let phase = time * cfg.drift_speed + i as f64 * 0.5;
        let drift = Vec2::new(phase.sin() as f32, phase.cos() as f32) * cfg.drift_amplitude;
        let step = p.vel + drift;

        reflect_axis(&mut p.pos.x, &mut p.vel.x, step.x, size.width);
        reflect_axis(&mut p.pos.y, &mut p.vel.y, step.y, size.height);
    }
}

fn reflect_axis(pos: &mut f32, vel: &mut f32, step: f32, extent: f32) {
    let inside = |v: f32| (0.0..=extent).contains(&v);

    let next = *pos + step;
    if inside(next) {
        *pos = next;
        return;
    }

    *vel = -*vel;
    let mirrored = *pos - step;
    if inside(mirrored) {
        *pos = mirrored;
    }
}

/// Rederives every particle's opacity from time, x-position and index.
///
/// The result follows `0.5 + 0.5 * sin(t * cfg.pulse_speed + x * 0.01 + i)`
/// mapped onto `[cfg.opacity_min, cfg.opacity_max]`, which gives an
/// uncorrelated-looking flicker across the field.
pub fn pulse_phase(particles: &mut [Particle], cfg: &FieldConfig, time: f64) {
    let (lo, hi) = (cfg.opacity_min, cfg.opacity_max);
    for (i, p) in particles.iter_mut().enumerate() {
        let phase = time * cfg.pulse_speed + f64::from(p.pos.x) * 0.01 + i as f64;
        let wave = (0.5 + 0.5 * phase.sin()) as f32;
        // min/max rather than clamp: a hand-built band must not panic.
        p.opacity = (lo + (hi - lo) * wave).max(lo).min(hi);
    }
}

/// Reassigns each particle's colour with probability
/// `cfg.recolor_probability`.
///
/// Exactly one uniform draw is taken per particle per frame, so a seeded
/// generator reproduces the same sequence of swaps.
pub fn recolor_phase(particles: &mut [Particle], cfg: &FieldConfig, rng: &mut impl Rng) {
    for p in particles.iter_mut() {
        if rng.random::<f64>() < cfg.recolor_probability {
            p.color = cfg.palette.pick(rng);
        }
    }
}

/// Yields every unordered pair closer than `max_distance`.
///
/// A link's opacity is `max_opacity * (1 - distance / max_distance)`:
/// closer pairs are more opaque, and pairs at or beyond the threshold are
/// skipped. This is a plain O(n²) scan; particle counts are in the tens.
///
/// ### Returns
/// Links ordered by `(a, b)` with `a < b`.
pub fn links(
    particles: &[Particle],
    max_distance: f32,
    max_opacity: f32,
) -> impl Iterator<Item = Link> + '_ {
    let n = particles.len();
    (0..n).flat_map(move |a| {
        (a + 1..n).filter_map(move |b| {
            let distance = particles[a].pos.distance(particles[b].pos);
            (distance < max_distance).then(|| Link {
                a,
                b,
                distance,
                opacity: max_opacity * (1.0 - distance / max_distance),
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{self, Palette};
    use rand::{SeedableRng, rngs::StdRng};

    fn still_cfg() -> FieldConfig {
        FieldConfig {
            drift_amplitude: 0.0,
            ..FieldConfig::default()
        }
    }

    fn particle_at(x: f32, y: f32, vel: Vec2) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel,
            radius: 1.0,
            opacity: 0.2,
            color: color::BLUE,
        }
    }

    #[test]
    fn motion_phase_integrates_velocity() {
        let mut ps = vec![particle_at(10.0, 10.0, Vec2::new(0.25, -0.5))];
        let size = SurfaceSize::new(100.0, 100.0);

        motion_phase(&mut ps, size, &still_cfg(), 0.0);

        assert_eq!(ps[0].pos, Vec2::new(10.25, 9.5));
        assert_eq!(ps[0].vel, Vec2::new(0.25, -0.5));
    }

    #[test]
    fn motion_phase_reflects_off_right_edge() {
        let mut ps = vec![particle_at(99.5, 50.0, Vec2::new(1.0, 0.0))];
        let size = SurfaceSize::new(100.0, 100.0);

        motion_phase(&mut ps, size, &still_cfg(), 0.0);

        assert_eq!(ps[0].vel.x, -1.0);
        assert_eq!(ps[0].pos.x, 98.5);
        assert!(size.contains(ps[0].pos));
    }

    #[test]
    fn motion_phase_reflects_off_top_edge() {
        let mut ps = vec![particle_at(50.0, 0.2, Vec2::new(0.0, -0.5))];
        let size = SurfaceSize::new(100.0, 100.0);

        motion_phase(&mut ps, size, &still_cfg(), 0.0);

        assert_eq!(ps[0].vel.y, 0.5);
        assert!(ps[0].pos.y >= 0.0);
    }

    #[test]
    fn motion_phase_drift_depends_on_index() {
        let cfg = FieldConfig {
            drift_amplitude: 1.0,
            ..FieldConfig::default()
        };
        let mut ps = vec![
            particle_at(50.0, 50.0, Vec2::ZERO),
            particle_at(50.0, 50.0, Vec2::ZERO),
        ];

        motion_phase(&mut ps, SurfaceSize::new(100.0, 100.0), &cfg, 0.0);

        // Index 0 at t = 0 drifts by (sin 0, cos 0) = (0, 1).
        assert!((ps[0].pos - Vec2::new(50.0, 51.0)).length() < 1e-6);
        assert_ne!(ps[0].pos, ps[1].pos);
    }

    #[test]
    fn motion_phase_on_degenerate_surface_stays_put() {
        let mut ps = vec![particle_at(0.0, 0.0, Vec2::new(0.2, 0.2))];

        motion_phase(&mut ps, SurfaceSize::new(0.0, 0.0), &still_cfg(), 3.0);

        assert_eq!(ps[0].pos, Vec2::ZERO);
    }

    #[test]
    fn pulse_phase_stays_in_band() {
        let cfg = FieldConfig::default();
        let mut ps: Vec<_> = (0..20)
            .map(|i| particle_at(i as f32 * 37.0, 0.0, Vec2::ZERO))
            .collect();

        for frame in 0..500 {
            pulse_phase(&mut ps, &cfg, frame as f64 / 60.0);
            for p in &ps {
                assert!((0.1..=0.4).contains(&p.opacity), "opacity {}", p.opacity);
            }
        }
    }

    #[test]
    fn recolor_phase_with_certain_probability_uses_palette() {
        let cfg = FieldConfig {
            recolor_probability: 1.0,
            palette: Palette::new(vec![color::PINK]).unwrap(),
            ..FieldConfig::default()
        };
        let mut ps = vec![particle_at(0.0, 0.0, Vec2::ZERO); 5];
        let mut rng = StdRng::seed_from_u64(11);

        recolor_phase(&mut ps, &cfg, &mut rng);

        assert!(ps.iter().all(|p| p.color == color::PINK));
    }

    #[test]
    fn recolor_phase_with_zero_probability_never_changes() {
        let cfg = FieldConfig {
            recolor_probability: 0.0,
            ..FieldConfig::default()
        };
        let mut ps = vec![particle_at(0.0, 0.0, Vec2::ZERO); 5];
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1000 {
            recolor_phase(&mut ps, &cfg, &mut rng);
        }

        assert!(ps.iter().all(|p| p.color == color::BLUE));
    }

    #[test]
    fn links_only_below_threshold() {
        let ps = vec![
            particle_at(0.0, 0.0, Vec2::ZERO),
            particle_at(50.0, 0.0, Vec2::ZERO),
            particle_at(200.0, 0.0, Vec2::ZERO),
        ];

        let found: Vec<_> = links(&ps, 100.0, 0.2).collect();

        assert_eq!(found.len(), 1);
        assert_eq!((found[0].a, found[0].b), (0, 1));
        assert_eq!(found[0].distance, 50.0);
        assert!((found[0].opacity - 0.1).abs() < 1e-6);
    }

    #[test]
    fn links_exclude_exact_threshold() {
        let ps = vec![
            particle_at(0.0, 0.0, Vec2::ZERO),
            particle_at(100.0, 0.0, Vec2::ZERO),
        ];

        assert_eq!(links(&ps, 100.0, 0.2).count(), 0);
    }

    #[test]
    fn link_opacity_decreases_with_distance() {
        let ps = vec![
            particle_at(0.0, 0.0, Vec2::ZERO),
            particle_at(10.0, 0.0, Vec2::ZERO),
            particle_at(0.0, 60.0, Vec2::ZERO),
            particle_at(-95.0, 0.0, Vec2::ZERO),
        ];

        let from_origin: Vec<_> = links(&ps, 100.0, 0.2).filter(|l| l.a == 0).collect();

        assert_eq!(from_origin.len(), 3);
        let mut by_distance = from_origin.clone();
        by_distance.sort_by(|x, y| x.distance.total_cmp(&y.distance));
        for pair in by_distance.windows(2) {
            assert!(pair[0].opacity > pair[1].opacity);
        }
    }
}
