//! Certainty distribution.
//!
//! A point mass at `value`, treated as a continuous distribution: the Dirac
//! delta shifted to `value`. Represents certainty within a family of
//! otherwise-continuous distributions.

use rand::Rng;
use rvkit_core::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Distribution, Max, Min};

/// Point-mass distribution at a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Certainty {
    value: f64,
}

impl Certainty {
    /// Create a point mass at `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `value` is not finite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::Domain(format!("certainty requires a finite value, got {value}")));
        }
        Ok(Self { value })
    }

    /// The certain value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Support: the single point `[value, value]`.
    pub fn support(&self) -> (f64, f64) {
        (self.value, self.value)
    }

    /// Density: `+inf` at the atom, zero elsewhere.
    pub fn pdf(&self, x: f64) -> f64 {
        if x == self.value {
            f64::INFINITY
        } else {
            0.0
        }
    }

    /// Cumulative probability: a unit step at `value`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < self.value {
            0.0
        } else {
            1.0
        }
    }

    /// Inverse cumulative probability: `value` for every `p` in `[0, 1]`,
    /// NaN outside.
    pub fn ppf(&self, p: f64) -> f64 {
        if (0.0..=1.0).contains(&p) {
            self.value
        } else {
            f64::NAN
        }
    }

    /// Draw `size` samples; every draw is `value`.
    pub fn rvs<R: Rng + ?Sized>(&self, _rng: &mut R, size: usize) -> Vec<f64> {
        vec![self.value; size]
    }

    /// Mean: the certain value.
    pub fn mean(&self) -> f64 {
        self.value
    }

    /// Variance: zero.
    pub fn var(&self) -> f64 {
        0.0
    }
}

impl Min<f64> for Certainty {
    fn min(&self) -> f64 {
        self.value
    }
}

impl Max<f64> for Certainty {
    fn max(&self) -> f64 {
        self.value
    }
}

impl Continuous<f64, f64> for Certainty {
    fn pdf(&self, x: f64) -> f64 {
        Certainty::pdf(self, x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        Certainty::pdf(self, x).ln()
    }
}

impl ContinuousCDF<f64, f64> for Certainty {
    fn cdf(&self, x: f64) -> f64 {
        Certainty::cdf(self, x)
    }

    fn sf(&self, x: f64) -> f64 {
        1.0 - Certainty::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        Certainty::ppf(self, p)
    }
}

impl Distribution<f64> for Certainty {
    fn mean(&self) -> Option<f64> {
        Some(self.value)
    }

    fn variance(&self) -> Option<f64> {
        Some(0.0)
    }
}
