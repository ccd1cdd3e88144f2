//! Normal distribution constructors.

use rvkit_core::{Error, QuantilePair, Result};
use rvkit_dists::FrozenDistribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

#[inline]
fn standard_normal() -> Normal {
    // Safe by construction for mean=0, sigma=1.
    Normal::new(0.0, 1.0).expect("standard normal should be constructible")
}

/// Mutually exclusive parameterizations of the normal family.
///
/// Exactly one of the two recognized combinations must be populated:
/// `mean` with `sd`, or `quantiles`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NormSpec {
    /// Mean of the distribution.
    pub mean: Option<f64>,
    /// Standard deviation of the distribution.
    pub sd: Option<f64>,
    /// Two quantile constraints.
    pub quantiles: Option<QuantilePair>,
}

impl NormSpec {
    /// Direct parameterization from `mean` and `sd`.
    pub fn mean_sd(mean: f64, sd: f64) -> Self {
        Self { mean: Some(mean), sd: Some(sd), quantiles: None }
    }

    /// Quantile parameterization.
    pub fn quantiles(quantiles: QuantilePair) -> Self {
        Self { quantiles: Some(quantiles), ..Self::default() }
    }
}

/// Create a frozen normal distribution.
///
/// # Errors
///
/// Returns [`Error::Specification`] for any parameter combination other
/// than exactly `mean` + `sd` or exactly `quantiles`, and [`Error::Domain`]
/// for parameter values the family rejects.
pub fn norm(spec: NormSpec) -> Result<FrozenDistribution> {
    match (spec.mean, spec.sd, spec.quantiles) {
        (Some(mean), Some(sd), None) => FrozenDistribution::norm(mean, sd),
        (None, None, Some(quantiles)) => from_quantiles(&quantiles),
        _ => Err(Error::Specification(
            "you must specify either `mean` and `sd`, or `quantiles`".to_string(),
        )),
    }
}

/// Normal distribution matching two quantile constraints.
pub fn from_quantiles(quantiles: &QuantilePair) -> Result<FrozenDistribution> {
    let (mu, sigma) = params_from_quantiles(quantiles);
    FrozenDistribution::norm(mu, sigma)
}

/// Parameters `(mu, sigma)` of a normal variable X with `P(X < x1) = p1`
/// and `P(X < x2) = p2`, solved in closed form through the standard normal
/// inverse CDF.
pub fn params_from_quantiles(quantiles: &QuantilePair) -> (f64, f64) {
    let (p1, x1) = quantiles.lo();
    let (p2, x2) = quantiles.hi();
    let z1 = standard_normal().inverse_cdf(p1);
    let z2 = standard_normal().inverse_cdf(p2);
    // p1 < p2 is guaranteed by QuantilePair, so the denominator is positive.
    let denom = z2 - z1;
    let sigma = (x2 - x1) / denom;
    let mu = (x1 * z2 - x2 * z1) / denom;
    (mu, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rvkit_core::Error;

    #[test]
    fn test_from_mean_sd() {
        let d = norm(NormSpec::mean_sd(1.0, 2.0)).unwrap();
        assert_eq!(d.mean(), Some(1.0));
        assert_eq!(d.std_dev(), Some(2.0));
    }

    #[test]
    fn test_from_quantiles_roundtrip() {
        let q = QuantilePair::new(0.1, -1.0, 0.9, 1.0).unwrap();
        let d = norm(NormSpec::quantiles(q)).unwrap();
        assert_relative_eq!(d.cdf(-1.0), 0.1, epsilon = 1e-9);
        assert_relative_eq!(d.cdf(1.0), 0.9, epsilon = 1e-9);
        // Symmetric quantiles center the distribution at zero.
        assert_relative_eq!(d.mean().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_params_from_quantiles_median() {
        // The median pins mu directly.
        let q = QuantilePair::new(0.5, 3.0, 0.9, 5.0).unwrap();
        let (mu, sigma) = params_from_quantiles(&q);
        assert_relative_eq!(mu, 3.0, epsilon = 1e-9);
        assert!(sigma > 0.0);
    }

    #[test]
    fn test_decreasing_values_rejected() {
        // x must increase with p or sigma comes out non-positive.
        let q = QuantilePair::new(0.1, 1.0, 0.9, -1.0).unwrap();
        assert!(matches!(from_quantiles(&q), Err(Error::Domain(_))));
    }

    #[test]
    fn test_over_and_under_specified() {
        let q = QuantilePair::new(0.1, 0.1, 0.5, 0.5).unwrap();
        let over = NormSpec { mean: Some(1.0), sd: Some(1.0), quantiles: Some(q) };
        assert!(matches!(norm(over), Err(Error::Specification(_))));

        let under = NormSpec { mean: Some(1.0), ..NormSpec::default() };
        assert!(matches!(norm(under), Err(Error::Specification(_))));

        assert!(matches!(norm(NormSpec::default()), Err(Error::Specification(_))));
    }
}
