use glam::Vec2;

use super::palette::{CONSTELLATION_DOT, ROSE, STAR_CORE, WHITE};
use crate::catalog::{self, Placement};
use crate::pools::Star;
use crate::simulation::{star_alpha, ConstellationPulse};
use crate::surface::{DrawSurface, Stroke};

/// Stars larger than this get a soft halo.
const HALO_MIN_SIZE: f32 = 1.5;
/// Stars larger than this get a bright centre.
const CENTER_MIN_SIZE: f32 = 2.0;

const LINE_DASH: [f32; 2] = [4.0, 6.0];
const POINT_GLOW_RADIUS: f32 = 6.0;
const POINT_DOT_RADIUS: f32 = 2.5;
const POINT_CORE_RADIUS: f32 = 1.0;

pub(super) fn draw_star<S: DrawSurface + ?Sized>(
    surface: &mut S,
    star: &Star,
    t: f64,
) {
    let alpha = star_alpha(star, t);
    if star.size > HALO_MIN_SIZE {
        surface.fill_circle(
            star.position,
            star.size * 3.0,
            ROSE.with_alpha(alpha * 0.15),
        );
    }
    surface.fill_circle(star.position, star.size, STAR_CORE.with_alpha(alpha));
    if star.size > CENTER_MIN_SIZE {
        surface.fill_circle(
            star.position,
            star.size * 0.4,
            WHITE.with_alpha(alpha * 0.9),
        );
    }
}

pub(super) fn draw_constellation<S: DrawSurface + ?Sized>(
    surface: &mut S,
    placement: &Placement,
    pulse: &ConstellationPulse,
) {
    let alpha = placement.base_alpha * pulse.base;
    let constellation = placement.constellation;
    let project = |i: usize| placement.rect.project(constellation.points[i]);

    let stroke = Stroke {
        color: ROSE.with_alpha(alpha * 0.25),
        width: 1.0,
        dash: LINE_DASH,
    };
    for &(a, b) in constellation.edges {
        surface.dashed_line(project(a), project(b), stroke);
    }

    for (i, uv) in constellation.points.iter().enumerate() {
        let center = placement.rect.project(*uv);
        let a = alpha * pulse.twinkle(i);
        surface.fill_circle(center, POINT_GLOW_RADIUS, ROSE.with_alpha(a * 0.2));
        surface.fill_circle(
            center,
            POINT_DOT_RADIUS,
            CONSTELLATION_DOT.with_alpha(a),
        );
        surface.fill_circle(center, POINT_CORE_RADIUS, WHITE.with_alpha(a * 0.9));
    }
}

/// Stars first, constellation overlays on top.
pub(super) fn draw<S: DrawSurface + ?Sized>(
    surface: &mut S,
    stars: &[Star],
    t: f64,
    bounds: Vec2,
) {
    for star in stars {
        draw_star(surface, star, t);
    }

    let pulse = ConstellationPulse::at(t);
    for placement in &catalog::layout(bounds.x, bounds.y) {
        draw_constellation(surface, placement, &pulse);
    }
}
