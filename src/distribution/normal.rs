//! Normal (Gaussian) distribution implementation
//!
//! # Characteristics
//!
//! - Bell curve centered on the mean
//! - Standard deviation controls spread
//! - Zero deviation is allowed and collapses every draw onto the mean
//!
//! # Parameters
//!
//! - **mean**: center of the distribution (any finite value)
//! - **std_dev**: standard deviation (finite, >= 0)
//!
//! # Performance
//!
//! Uses the Box-Muller transform (O(1) per sample). Only the cosine branch
//! is kept, so the sampler carries no state between draws and a sample
//! always consumes exactly two uniform values from the source.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use randfill::distribution::{Distribution, normal::NormalDistribution};
//!
//! let dist = NormalDistribution::new(64.0, 8.0).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! let draw = dist.sample(&mut rng).unwrap();
//! assert!(draw.is_finite());
//! ```

use super::Distribution;
use crate::{Error, Result};
use rand::{Rng, RngCore};
use std::f64::consts::PI;

/// Normal distribution with configurable mean and standard deviation
///
/// Holds only its validated parameters; the random source is injected on
/// every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalDistribution {
    /// Center of the distribution
    mean: f64,

    /// Standard deviation (spread)
    std_dev: f64,
}

impl NormalDistribution {
    /// Create a normal distribution
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the mean is not finite, or if
    /// the standard deviation is negative or not finite.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "normal mean must be finite, got {mean}"
            )));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "normal standard deviation must be non-negative, got {std_dev}"
            )));
        }

        Ok(Self { mean, std_dev })
    }

    /// Standard normal N(0, 1)
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Center of the distribution
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution for NormalDistribution {
    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64> {
        // Box-Muller transform, cosine branch
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        let z = r * theta.cos();

        Ok(self.mean + z * self.std_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_normal_seeded_reproducibility() {
        let dist = NormalDistribution::new(10.0, 2.0).unwrap();
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(12345);

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(
                dist.sample(&mut rng1).unwrap(),
                dist.sample(&mut rng2).unwrap()
            );
        }
    }

    #[test]
    fn test_normal_standard_params() {
        let dist = NormalDistribution::standard();
        assert_eq!(dist.mean(), 0.0);
        assert_eq!(dist.std_dev(), 1.0);
    }

    #[test]
    fn test_normal_zero_std_dev_collapses_to_mean() {
        let dist = NormalDistribution::new(42.0, 0.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(dist.sample(&mut rng).unwrap(), 42.0);
        }
    }

    #[test]
    fn test_normal_sample_statistics() {
        let dist = NormalDistribution::new(100.0, 15.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| dist.sample(&mut rng).unwrap()).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n as f64;

        // Sample moments should land near the declared parameters
        assert!(
            (mean - 100.0).abs() < 1.0,
            "sample mean {} too far from 100",
            mean
        );
        assert!(
            (variance.sqrt() - 15.0).abs() < 1.0,
            "sample std dev {} too far from 15",
            variance.sqrt()
        );
    }

    #[test]
    fn test_normal_uses_two_draws_per_sample() {
        let dist = NormalDistribution::standard();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let first = dist.sample(&mut rng).unwrap();
        let second = dist.sample(&mut rng).unwrap();

        // Advancing a fresh source by two uniforms lines up with the second draw
        let mut check = Xoshiro256PlusPlus::seed_from_u64(9);
        let _: f64 = check.gen();
        let _: f64 = check.gen();
        assert_ne!(first, second);
        assert_eq!(dist.sample(&mut check).unwrap(), second);
    }

    #[test]
    fn test_normal_invalid_std_dev() {
        assert!(matches!(
            NormalDistribution::new(10.0, -1.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            NormalDistribution::new(10.0, f64::NAN),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_normal_invalid_mean() {
        assert!(matches!(
            NormalDistribution::new(f64::INFINITY, 1.0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
