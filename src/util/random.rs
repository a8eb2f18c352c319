//! Injectable random sources for pool generation.
//!
//! Pool creation never calls an ambient generator: it draws unit values from
//! a [`UnitSource`] handed in by the caller. Production engines use a seeded
//! or entropy-seeded [`StdRng`]; golden tests script the exact draws with
//! [`SequenceSource`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait UnitSource {
    /// Next value in `[0, 1)`.
    fn unit(&mut self) -> f32;
}

impl<R: RngCore> UnitSource for R {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of unit draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Source that yields `values` in order, then starts over.
    ///
    /// Values are clamped into `[0, 1)`; an empty list yields `0.0` forever.
    #[must_use]
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UnitSource for SequenceSource {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Generator for a production engine.
///
/// A fixed `seed` reproduces the same pools on every run; without one the
/// generator is seeded from OS entropy, falling back to the wall clock when
/// entropy is unavailable.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        return StdRng::seed_from_u64(seed);
    }
    StdRng::try_from_os_rng().unwrap_or_else(|e| {
        log::warn!("OS entropy unavailable ({e}), seeding from clock");
        let nanos = web_time::SystemTime::now()
            .duration_since(web_time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        StdRng::seed_from_u64(nanos)
    })
}
