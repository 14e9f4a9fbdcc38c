//! Exponential distribution implementation
//!
//! # Characteristics
//!
//! - Positive, right-skewed values
//! - Rate parameter controls the decay; mean is 1/rate
//! - Good for inter-arrival times, latencies, and queue-style fixtures
//!
//! # Parameters
//!
//! - **rate**: decay rate (finite, strictly positive)
//!
//! # Performance
//!
//! Uses inverse transform sampling: `-ln(1 - u) / rate` with `u` uniform in
//! [0, 1). O(1) per sample, exactly one uniform value consumed from the
//! source per draw.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use randfill::distribution::{Distribution, exponential::ExponentialDistribution};
//!
//! let dist = ExponentialDistribution::new(2.0).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! assert!(dist.sample(&mut rng).unwrap() >= 0.0);
//! ```

use super::Distribution;
use crate::{Error, Result};
use rand::{Rng, RngCore};

/// Rate used when a declaration carries no parameters
pub const DEFAULT_RATE: f64 = 1.0;

/// Exponential distribution with configurable rate
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialDistribution {
    /// Decay rate (strictly positive)
    rate: f64,
}

impl ExponentialDistribution {
    /// Create an exponential distribution
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rate is not finite or not
    /// strictly positive.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "exponential rate must be positive, got {rate}"
            )));
        }

        Ok(Self { rate })
    }

    /// Exponential with [`DEFAULT_RATE`]
    pub fn with_default_rate() -> Self {
        Self { rate: DEFAULT_RATE }
    }

    /// Decay rate
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Distribution for ExponentialDistribution {
    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64> {
        // Invariant established at construction; checked before the source
        // is advanced
        if self.rate <= 0.0 {
            return Err(Error::InvalidState(format!(
                "exponential rate must be positive, got {}",
                self.rate
            )));
        }

        // Inverse CDF: -ln(1 - u) / rate
        let u: f64 = rng.gen();
        Ok(-(1.0 - u).ln() / self.rate)
    }
}
