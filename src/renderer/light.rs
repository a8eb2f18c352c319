use glam::Vec2;

use super::palette::{GLOW_CORE, GLOW_HALO, PETAL, WHITE};
use crate::pools::{Cloud, LightParticle, ParticleKind};
use crate::simulation::particle_alpha;
use crate::surface::DrawSurface;

/// Base ellipse, a row of puffs along the top, then a highlight near the
/// first puff.
pub(super) fn draw_cloud<S: DrawSurface + ?Sized>(surface: &mut S, cloud: &Cloud) {
    let Cloud {
        position,
        width,
        height,
        opacity,
        puff_count,
        ..
    } = *cloud;
    let step = width / puff_count.max(1) as f32;

    surface.fill_ellipse(
        position + Vec2::new(width * 0.45, height * 0.2),
        Vec2::new(width * 0.55, height * 0.45),
        WHITE.with_alpha(opacity * 0.85),
    );

    for i in 0..puff_count {
        let i = i as f32;
        let center = Vec2::new(
            position.x + i * step,
            position.y - (i * 0.9).sin().abs() * (height * 0.3),
        );
        let radius = height * (0.55 + (i * 0.7 + 0.5).sin() * 0.35);
        surface.fill_circle(center, radius, WHITE.with_alpha(opacity));
    }

    surface.fill_circle(
        position + Vec2::new(step * 0.8, -height * 0.15),
        height * 0.35,
        WHITE.with_alpha((opacity * 1.2).min(0.9)),
    );
}

pub(super) fn draw_particle<S: DrawSurface + ?Sized>(
    surface: &mut S,
    particle: &LightParticle,
    t: f64,
) {
    let alpha = particle_alpha(particle, t);
    let (center, size) = (particle.position, particle.size);
    match particle.kind {
        ParticleKind::Glow => {
            surface.fill_circle(
                center,
                size * 2.5,
                GLOW_HALO.with_alpha(alpha * 0.15),
            );
            surface.fill_circle(center, size, GLOW_CORE.with_alpha(alpha * 0.5));
        }
        ParticleKind::Petal => {
            surface.fill_circle(center, size, PETAL.with_alpha(alpha * 0.45));
            surface.fill_circle(
                center,
                size * 0.5,
                WHITE.with_alpha(alpha * 0.5),
            );
        }
    }
}

/// Clouds first, particles layered over them.
pub(super) fn draw<S: DrawSurface + ?Sized>(
    surface: &mut S,
    clouds: &[Cloud],
    particles: &[LightParticle],
    t: f64,
) {
    for cloud in clouds {
        draw_cloud(surface, cloud);
    }
    for particle in particles {
        draw_particle(surface, particle, t);
    }
}
