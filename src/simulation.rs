//! Per-pass kinematics for every pool.
//!
//! Each call advances one discrete step. Positions move by a fixed
//! per-pass velocity (not scaled by elapsed time); elapsed wall-clock time
//! `t` in seconds only drives the periodic twinkle, wobble and pulse terms.
//! Wrap and respawn rules run after every move, so positions stay within
//! `[-margin, dimension + margin]` no matter what state a pool starts in.

use glam::Vec2;

use crate::pools::{Cloud, LightParticle, Pools, Star};
use crate::theme::Theme;
use crate::util::random::UnitSource;

/// Off-screen margin stars wrap at.
pub const STAR_MARGIN: f32 = 6.0;
/// Off-screen margin particles wrap at.
pub const PARTICLE_MARGIN: f32 = 10.0;
/// How far past the right edge a cloud travels before respawning.
pub const CLOUD_EXIT: f32 = 300.0;
/// Gap left of the surface where a respawned cloud's right edge lands.
pub const CLOUD_ENTRY_GAP: f32 = 100.0;

#[inline]
fn wave(phase: f64) -> f32 {
    phase.sin() as f32
}

/// Move a star one step and wrap it at the `bounds` edges.
///
/// Stars only fall, so the top edge never wraps: a star leaving the bottom
/// re-enters just above the top and drifts back in.
pub fn step_star(star: &mut Star, bounds: Vec2) {
    star.position += star.velocity;

    let p = &mut star.position;
    if p.y > bounds.y {
        p.y = -STAR_MARGIN;
    }
    if p.x < -STAR_MARGIN {
        p.x = bounds.x + STAR_MARGIN;
    }
    if p.x > bounds.x + STAR_MARGIN {
        p.x = -STAR_MARGIN;
    }
}

/// Twinkled opacity of a star at time `t`.
#[must_use]
pub fn star_alpha(star: &Star, t: f64) -> f32 {
    let twinkle = wave(
        t * f64::from(star.twinkle_speed) * 10.0 + f64::from(star.twinkle_offset),
    );
    star.opacity * (0.5 + 0.5 * twinkle)
}

/// Horizontal wobble a particle adds to its drift at time `t`.
#[must_use]
pub fn particle_wobble(particle: &LightParticle, t: f64) -> f32 {
    wave(
        t * f64::from(particle.wobble_speed) * 10.0
            + f64::from(particle.wobble_offset),
    ) * particle.wobble_amp
        * 0.02
}

/// Move a particle one step and wrap it at the `bounds` edges.
pub fn step_particle(particle: &mut LightParticle, t: f64, bounds: Vec2) {
    let wobble = particle_wobble(particle, t);
    particle.position.x += particle.velocity.x + wobble;
    particle.position.y += particle.velocity.y;

    let p = &mut particle.position;
    if p.y < -PARTICLE_MARGIN {
        p.y = bounds.y + PARTICLE_MARGIN;
    }
    if p.x < -PARTICLE_MARGIN {
        p.x = bounds.x + PARTICLE_MARGIN;
    }
    if p.x > bounds.x + PARTICLE_MARGIN {
        p.x = -PARTICLE_MARGIN;
    }
}

/// Pulsed opacity of a particle at time `t`.
#[must_use]
pub fn particle_alpha(particle: &LightParticle, t: f64) -> f32 {
    let pulse = wave(t * 0.8 + f64::from(particle.wobble_offset));
    particle.opacity * (0.6 + 0.4 * pulse)
}

/// Drift a cloud one step; respawn it off-screen left once it has left the
/// surface.
///
/// Respawn never mirrors the exit height: the new `y` is a fresh draw in
/// `[30, 0.5·H + 30)`.
pub fn step_cloud<R: UnitSource + ?Sized>(
    cloud: &mut Cloud,
    rng: &mut R,
    bounds: Vec2,
) {
    cloud.position.x += cloud.speed;
    if cloud.position.x > bounds.x + CLOUD_EXIT {
        cloud.position.x = -cloud.width - CLOUD_ENTRY_GAP;
        cloud.position.y = rng.unit() * bounds.y * 0.5 + 30.0;
    }
}

/// Constellation modulation for one pass. Read-only over the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationPulse {
    t: f64,
    /// Global pulse multiplier, `[0.4, 1.0]`.
    pub base: f32,
}

impl ConstellationPulse {
    /// Pulse state at time `t`.
    #[must_use]
    pub fn at(t: f64) -> Self {
        Self {
            t,
            base: 0.7 + 0.3 * wave(t * 0.0008),
        }
    }

    /// Twinkle multiplier for the point at `index`, `[0.2, 1.0]`.
    #[must_use]
    pub fn twinkle(&self, index: usize) -> f32 {
        0.6 + 0.4 * wave(self.t * 0.003 + index as f64 * 1.7)
    }
}

/// Advances the active theme's pools.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Advance one step at time `t` on a surface of size `bounds`.
    ///
    /// Only the pools the active theme draws move; the other theme's
    /// entities hold still until it becomes active again.
    pub fn advance<R: UnitSource + ?Sized>(
        pools: &mut Pools,
        theme: Theme,
        t: f64,
        bounds: Vec2,
        rng: &mut R,
    ) {
        match theme {
            Theme::Dark => {
                for star in &mut pools.stars {
                    step_star(star, bounds);
                }
            }
            Theme::Light => {
                for cloud in &mut pools.clouds {
                    step_cloud(cloud, rng, bounds);
                }
                for particle in &mut pools.particles {
                    step_particle(particle, t, bounds);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::options::PoolOptions;
    use crate::pools::ParticleKind;
    use crate::util::random::SequenceSource;

    fn star_at(x: f32, y: f32, vx: f32, vy: f32) -> Star {
        Star {
            position: Vec2::new(x, y),
            size: 2.0,
            velocity: Vec2::new(vx, vy),
            opacity: 1.0,
            twinkle_speed: 0.01,
            twinkle_offset: 0.0,
        }
    }

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> LightParticle {
        LightParticle {
            position: Vec2::new(x, y),
            size: 2.0,
            velocity: Vec2::new(vx, vy),
            opacity: 0.5,
            wobble_amp: 0.0,
            wobble_speed: 0.005,
            wobble_offset: 0.0,
            kind: ParticleKind::Petal,
        }
    }

    #[test]
    fn star_wraps_left_to_right_edge() {
        let mut star = star_at(-10.0, 100.0, -1.0, 0.1);
        step_star(&mut star, Vec2::new(800.0, 600.0));
        assert_eq!(star.position.x, 806.0);
    }

    #[test]
    fn star_wraps_right_to_left_edge() {
        let mut star = star_at(806.0, 100.0, 0.05, 0.1);
        step_star(&mut star, Vec2::new(800.0, 600.0));
        assert_eq!(star.position.x, -6.0);
    }

    #[test]
    fn star_falling_off_bottom_reenters_above_top() {
        let mut star = star_at(50.0, 599.9, 0.0, 0.2);
        step_star(&mut star, Vec2::new(800.0, 600.0));
        assert_eq!(star.position.y, -6.0);
    }

    #[test]
    fn star_twinkle_stays_within_opacity() {
        let star = Star {
            opacity: 0.8,
            ..star_at(0.0, 0.0, 0.0, 0.0)
        };
        for i in 0..100 {
            let a = star_alpha(&star, f64::from(i) * 0.37);
            assert!((0.0..=0.8 + 1e-6).contains(&a));
        }
    }

    #[test]
    fn cloud_respawns_off_screen_left() {
        let mut cloud = Cloud {
            position: Vec2::new(1105.0, 50.0),
            width: 300.0,
            height: 60.0,
            speed: 0.2,
            opacity: 0.5,
            puff_count: 5,
        };
        let mut rng = SequenceSource::new([0.5]);
        step_cloud(&mut cloud, &mut rng, Vec2::new(800.0, 600.0));
        assert!((-400.0..-100.0).contains(&cloud.position.x));
        assert_eq!(cloud.position.x, -400.0);
        assert_eq!(cloud.position.y, 0.5 * 600.0 * 0.5 + 30.0);
    }

    #[test]
    fn cloud_inside_bounds_only_drifts() {
        let mut cloud = Cloud {
            position: Vec2::new(100.0, 50.0),
            width: 300.0,
            height: 60.0,
            speed: 0.25,
            opacity: 0.5,
            puff_count: 5,
        };
        let mut rng = SequenceSource::new([0.9]);
        step_cloud(&mut cloud, &mut rng, Vec2::new(800.0, 600.0));
        assert_eq!(cloud.position, Vec2::new(100.25, 50.0));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn particle_rising_off_top_wraps_to_bottom() {
        let mut p = particle_at(100.0, -9.95, 0.0, -0.1);
        step_particle(&mut p, 0.0, Vec2::new(800.0, 600.0));
        assert_eq!(p.position.y, 610.0);
    }

    #[test]
    fn particle_wraps_horizontally() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut left = particle_at(-9.95, 100.0, -0.1, -0.1);
        step_particle(&mut left, 0.0, bounds);
        assert_eq!(left.position.x, 810.0);

        let mut right = particle_at(809.95, 100.0, 0.1, -0.1);
        step_particle(&mut right, 0.0, bounds);
        assert_eq!(right.position.x, -10.0);
    }

    #[test]
    fn positions_stay_bounded_over_long_runs() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(11);
        let mut pools =
            Pools::generate(&mut rng, bounds.x, bounds.y, &PoolOptions::default());
        for frame in 0..5000 {
            let t = f64::from(frame) / 60.0;
            Simulator::advance(&mut pools, Theme::Dark, t, bounds, &mut rng);
            Simulator::advance(&mut pools, Theme::Light, t, bounds, &mut rng);
            for s in &pools.stars {
                assert!((-6.0..=806.0).contains(&s.position.x));
                assert!((-6.0..=606.0).contains(&s.position.y));
            }
            for p in &pools.particles {
                assert!((-10.0..=810.0).contains(&p.position.x));
                assert!((-10.0..=610.0).contains(&p.position.y));
            }
        }
        assert_eq!(pools.stars.len(), 150);
        assert_eq!(pools.particles.len(), 60);
        assert_eq!(pools.clouds.len(), 12);
    }

    #[test]
    fn only_active_theme_moves() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(2);
        let mut pools =
            Pools::generate(&mut rng, bounds.x, bounds.y, &PoolOptions::default());
        let before = pools.clone();

        Simulator::advance(&mut pools, Theme::Dark, 1.0, bounds, &mut rng);
        assert_ne!(pools.stars, before.stars);
        assert_eq!(pools.particles, before.particles);
        assert_eq!(pools.clouds, before.clouds);

        let after_dark = pools.clone();
        Simulator::advance(&mut pools, Theme::Light, 1.0, bounds, &mut rng);
        assert_eq!(pools.stars, after_dark.stars);
        assert_ne!(pools.clouds, after_dark.clouds);
    }

    #[test]
    fn constellation_pulse_ranges() {
        for i in 0..200 {
            let pulse = ConstellationPulse::at(f64::from(i) * 97.3);
            assert!((0.4 - 1e-6..=1.0 + 1e-6).contains(&pulse.base));
            for idx in 0..11 {
                let twinkle = pulse.twinkle(idx);
                assert!((0.2 - 1e-6..=1.0 + 1e-6).contains(&twinkle));
            }
        }
        assert_eq!(ConstellationPulse::at(0.0).base, 0.7);
    }
}
