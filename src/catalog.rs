//! Static constellation catalog and anchored placement.
//!
//! Points live in normalized `[0, 1]²` space and are never mutated. At draw
//! time each constellation is scaled into an anchor rectangle whose size
//! follows the surface width.

use glam::Vec2;

/// A named point-and-edge graph in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constellation {
    /// Display name.
    pub name: &'static str,
    /// Point positions, `(u, v)` in `[0, 1]`.
    pub points: &'static [Vec2],
    /// Connections between point indices.
    pub edges: &'static [(usize, usize)],
}

/// Libra, the scales: a balance beam with two hanging pans.
pub const LIBRA: Constellation = Constellation {
    name: "Libra",
    points: &[
        Vec2::new(0.50, 0.30),
        Vec2::new(0.28, 0.50),
        Vec2::new(0.72, 0.50),
        Vec2::new(0.50, 0.60),
        Vec2::new(0.28, 0.70),
        Vec2::new(0.18, 0.80),
        Vec2::new(0.38, 0.80),
        Vec2::new(0.72, 0.70),
        Vec2::new(0.62, 0.80),
        Vec2::new(0.82, 0.80),
    ],
    edges: &[
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 4),
        (4, 5),
        (4, 6),
        (5, 6),
        (2, 7),
        (7, 8),
        (7, 9),
        (8, 9),
    ],
};

/// Sagittarius, the archer: arrow, bow, body and legs.
pub const SAGITTARIUS: Constellation = Constellation {
    name: "Sagittarius",
    points: &[
        Vec2::new(0.15, 0.25),
        Vec2::new(0.30, 0.35),
        Vec2::new(0.45, 0.45),
        Vec2::new(0.55, 0.52),
        Vec2::new(0.45, 0.35),
        Vec2::new(0.45, 0.65),
        Vec2::new(0.65, 0.60),
        Vec2::new(0.75, 0.50),
        Vec2::new(0.80, 0.70),
        Vec2::new(0.60, 0.78),
        Vec2::new(0.70, 0.38),
    ],
    edges: &[
        // arrow
        (0, 1),
        (1, 2),
        (2, 3),
        // bow
        (4, 3),
        (3, 5),
        // upper body
        (3, 6),
        (6, 7),
        (7, 10),
        // legs
        (6, 8),
        (6, 9),
    ],
};

/// Anchor rectangle width as a fraction of surface width.
const ANCHOR_WIDTH_FRACTION: f32 = 0.28;
/// Upper bound on the anchor rectangle width, in pixels.
const ANCHOR_MAX_WIDTH: f32 = 320.0;
/// Anchor rectangle height relative to its width.
const ANCHOR_ASPECT: f32 = 0.9;
/// Alpha both overlays start from before pulsing.
const BASE_ALPHA: f32 = 0.85;

/// An axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Map a normalized point into this rectangle.
    #[must_use]
    pub fn project(&self, uv: Vec2) -> Vec2 {
        self.origin + uv * self.size
    }
}

/// A constellation placed on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Which constellation.
    pub constellation: &'static Constellation,
    /// Where its unit square lands on screen.
    pub rect: Rect,
    /// Alpha before pulse and twinkle modulation.
    pub base_alpha: f32,
}

/// Width of the anchor rectangle for a surface `width` pixels wide.
#[must_use]
pub fn anchor_width(width: f32) -> f32 {
    (width * ANCHOR_WIDTH_FRACTION).min(ANCHOR_MAX_WIDTH)
}

/// Place both constellations for a `width` x `height` surface.
///
/// Libra sits in the upper right; Sagittarius, 10% larger, sits left of
/// centre a third of the way down.
#[must_use]
pub fn layout(width: f32, height: f32) -> [Placement; 2] {
    let cw = anchor_width(width);
    let size = Vec2::new(cw, cw * ANCHOR_ASPECT);
    [
        Placement {
            constellation: &LIBRA,
            rect: Rect {
                origin: Vec2::new(width * 0.65, height * 0.06),
                size,
            },
            base_alpha: BASE_ALPHA,
        },
        Placement {
            constellation: &SAGITTARIUS,
            rect: Rect {
                origin: Vec2::new(width * 0.05, height * 0.32),
                size: size * 1.1,
            },
            base_alpha: BASE_ALPHA,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(LIBRA.points.len(), 10);
        assert_eq!(LIBRA.edges.len(), 11);
        assert_eq!(SAGITTARIUS.points.len(), 11);
        assert_eq!(SAGITTARIUS.edges.len(), 10);
    }

    #[test]
    fn edges_stay_within_their_constellation() {
        for c in [LIBRA, SAGITTARIUS] {
            for &(a, b) in c.edges {
                assert!(a < c.points.len(), "{}: {a}", c.name);
                assert!(b < c.points.len(), "{}: {b}", c.name);
            }
        }
    }

    #[test]
    fn points_are_normalized() {
        for c in [LIBRA, SAGITTARIUS] {
            for p in c.points {
                assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn anchor_width_caps_at_320() {
        assert!(approx(anchor_width(800.0), 224.0));
        assert_eq!(anchor_width(4000.0), 320.0);
    }

    #[test]
    fn layout_for_800_by_600() {
        let [libra, sag] = layout(800.0, 600.0);
        assert_eq!(libra.constellation.name, "Libra");
        assert!(approx(libra.rect.origin.x, 520.0));
        assert!(approx(libra.rect.origin.y, 36.0));
        assert!(approx(libra.rect.size.x, 224.0));
        assert!(approx(libra.rect.size.y, 201.6));

        assert_eq!(sag.constellation.name, "Sagittarius");
        assert!(approx(sag.rect.origin.x, 40.0));
        assert!(approx(sag.rect.origin.y, 192.0));
        assert!(approx(sag.rect.size.x, 246.4));
        assert!(approx(sag.rect.size.y, 221.76));
        assert_eq!(sag.base_alpha, 0.85);
    }

    #[test]
    fn project_scales_into_rect() {
        let rect = Rect {
            origin: Vec2::new(10.0, 20.0),
            size: Vec2::new(100.0, 50.0),
        };
        assert_eq!(rect.project(Vec2::new(0.5, 1.0)), Vec2::new(60.0, 70.0));
    }
}
