//! Shared utilities for the animation engine.
//!
//! Pass pacing and the injectable random sources used by pool generation.

pub mod frame_timing;
pub mod random;
