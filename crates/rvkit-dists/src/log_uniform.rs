//! Log-uniform (reciprocal) distribution.
//!
//! `ln X` is uniform on `[ln a, ln b]` for `0 < a < b`. statrs does not ship
//! this family, so the closed forms live here.

use rand::distr::{Distribution as _, Uniform};
use rand::Rng;
use rvkit_core::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Distribution, Max, Min};

/// Log-uniform distribution over `[a, b]`, `0 < a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogUniform {
    a: f64,
    b: f64,
    // ln(b / a), the normalizing constant of the density.
    ln_ratio: f64,
}

impl LogUniform {
    /// Create a log-uniform distribution over `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] unless `0 < a < b` and both bounds are
    /// finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() || a <= 0.0 || a >= b {
            return Err(Error::Domain(format!(
                "log-uniform requires 0 < a < b, got a={a}, b={b}"
            )));
        }
        Ok(Self { a, b, ln_ratio: (b / a).ln() })
    }

    /// Lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Support: `[a, b]`.
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// Density: `1 / (x ln(b/a))` on `[a, b]`, zero outside.
    pub fn pdf(&self, x: f64) -> f64 {
        if (self.a..=self.b).contains(&x) {
            1.0 / (x * self.ln_ratio)
        } else {
            0.0
        }
    }

    /// Cumulative probability: `ln(x/a) / ln(b/a)` on `[a, b]`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x / self.a).ln() / self.ln_ratio
        }
    }

    /// Inverse cumulative probability: `a * (b/a)^p`; NaN outside `[0, 1]`.
    pub fn ppf(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.a * (self.b / self.a).powf(p)
    }

    /// Draw `size` samples by exponentiating uniform draws on
    /// `[ln a, ln b]`.
    pub fn rvs<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Vec<f64> {
        let log_flat = Uniform::new_inclusive(self.a.ln(), self.b.ln())
            .expect("log bounds are ordered by construction");
        let mut out = Vec::with_capacity(size);
        for _ in 0..size {
            out.push(log_flat.sample(rng).exp());
        }
        out
    }

    /// Mean: `(b - a) / ln(b/a)`.
    pub fn mean(&self) -> f64 {
        (self.b - self.a) / self.ln_ratio
    }

    /// Variance: `(b^2 - a^2) / (2 ln(b/a)) - mean^2`.
    pub fn var(&self) -> f64 {
        let mean = self.mean();
        (self.b * self.b - self.a * self.a) / (2.0 * self.ln_ratio) - mean * mean
    }
}

impl Min<f64> for LogUniform {
    fn min(&self) -> f64 {
        self.a
    }
}

impl Max<f64> for LogUniform {
    fn max(&self) -> f64 {
        self.b
    }
}

impl Continuous<f64, f64> for LogUniform {
    fn pdf(&self, x: f64) -> f64 {
        LogUniform::pdf(self, x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        LogUniform::pdf(self, x).ln()
    }
}

impl ContinuousCDF<f64, f64> for LogUniform {
    fn cdf(&self, x: f64) -> f64 {
        LogUniform::cdf(self, x)
    }

    fn sf(&self, x: f64) -> f64 {
        1.0 - LogUniform::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        LogUniform::ppf(self, p)
    }
}

impl Distribution<f64> for LogUniform {
    fn mean(&self) -> Option<f64> {
        Some(LogUniform::mean(self))
    }

    fn variance(&self) -> Option<f64> {
        Some(LogUniform::var(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_invalid_bounds() {
        assert!(LogUniform::new(0.0, 1.0).is_err());
        assert!(LogUniform::new(-1.0, 1.0).is_err());
        assert!(LogUniform::new(2.0, 1.0).is_err());
        assert!(LogUniform::new(1.0, 1.0).is_err());
        assert!(LogUniform::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_cdf_anchors_and_midpoint() {
        let d = LogUniform::new(1.0, 100.0).unwrap();
        assert_eq!(d.cdf(1.0), 0.0);
        assert_eq!(d.cdf(100.0), 1.0);
        // The geometric midpoint is the median.
        assert_relative_eq!(d.cdf(10.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_ppf_roundtrip() {
        let d = LogUniform::new(0.5, 8.0).unwrap();
        for i in 1..100 {
            let p = (i as f64) / 100.0;
            assert_relative_eq!(d.cdf(d.ppf(p)), p, epsilon = 1e-12);
        }
        assert_relative_eq!(d.ppf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(d.ppf(1.0), 8.0, epsilon = 1e-12);
        assert!(d.ppf(-0.5).is_nan());
    }

    #[test]
    fn test_pdf_normalizes_over_grid() {
        // Trapezoid rule over the support should be close to 1.
        let d = LogUniform::new(1.0, 10.0).unwrap();
        let n = 100_000;
        let h = (10.0 - 1.0) / (n as f64);
        let mut total = 0.0;
        for i in 0..n {
            let x0 = 1.0 + h * (i as f64);
            total += 0.5 * (d.pdf(x0) + d.pdf(x0 + h)) * h;
        }
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_moments_against_sampling() {
        let d = LogUniform::new(1.0, 10.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let samples = d.rvs(&mut rng, 200_000);
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        assert_relative_eq!(d.mean(), mean, max_relative = 0.02);
        assert_relative_eq!(d.var(), var, max_relative = 0.05);
    }

    #[test]
    fn test_samples_in_support() {
        let d = LogUniform::new(2.0, 3.0).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        assert!(d.rvs(&mut rng, 1000).iter().all(|&x| (2.0..=3.0).contains(&x)));
    }
}
