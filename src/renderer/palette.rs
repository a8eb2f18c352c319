//! Fill and stroke colours for both themes.

use crate::surface::Rgba;

/// Star halos, constellation lines and glows.
pub const ROSE: Rgba = Rgba::rgb(236, 72, 153);
/// Star cores.
pub const STAR_CORE: Rgba = Rgba::rgb(255, 245, 250);
/// Constellation point dots.
pub const CONSTELLATION_DOT: Rgba = Rgba::rgb(255, 230, 240);
/// Bright centres, petal cores and cloud bodies.
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
/// Glow mote halo.
pub const GLOW_HALO: Rgba = Rgba::rgb(255, 220, 100);
/// Glow mote core.
pub const GLOW_CORE: Rgba = Rgba::rgb(255, 200, 50);
/// Petal disc.
pub const PETAL: Rgba = Rgba::rgb(255, 180, 200);
