//! Length filter and Bernoulli sampling stage
//!
//! Each record gets one pass through two gates: the length threshold, then an
//! independent uniform draw against the retention probability. The realized
//! retained count is a random variable with expectation
//! `passed_length_filter * probability`; there is deliberately no exact-count
//! guarantee (reservoir sampling is out of scope).

use crate::stats::RunStats;
use crate::types::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Retain/drop decision stage with an explicitly owned RNG
///
/// The generator is seeded once at construction: a non-zero seed gives
/// reproducible runs, zero seeds from entropy. The stage is the RNG's only
/// writer, so draws happen in strict record-arrival order.
pub struct FilterSampler {
    min_len: usize,
    probability: f64,
    rng: StdRng,
}

impl FilterSampler {
    /// Create a sampler for one run
    ///
    /// `probability` is the per-record retention probability in [0, 1].
    /// `seed == 0` selects non-deterministic entropy seeding.
    pub fn new(min_len: usize, probability: f64, seed: u64) -> Self {
        let rng = if seed != 0 {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };
        Self {
            min_len,
            probability,
            rng,
        }
    }

    /// Decide whether a record is retained, updating the run counters
    ///
    /// `total_reads` always increments. Records meeting the length threshold
    /// (`len >= min_len`, equality passes) increment `passed_length_filter`
    /// and get one uniform draw in [0, 1); only those records consume
    /// randomness. A successful draw increments `retained_reads`.
    pub fn retain(&mut self, record: &Record, stats: &mut RunStats) -> bool {
        stats.total_reads += 1;

        if record.len() < self.min_len {
            return false;
        }
        stats.passed_length_filter += 1;

        if self.rng.gen::<f64>() < self.probability {
            stats.retained_reads += 1;
            true
        } else {
            false
        }
    }
}
