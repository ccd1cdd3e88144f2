//! Log-normal distribution constructors.
//!
//! The positional parameters here are `(mu, sigma)` of the underlying
//! normal — not statrs's own `(location, scale)` naming, and deliberately
//! not the `(mean, sd)` moments of the log-normal itself, which are a
//! separate parameterization.

use rvkit_core::{Error, QuantilePair, Result};
use rvkit_dists::FrozenDistribution;
use serde::{Deserialize, Serialize};

use crate::norm;

/// Mutually exclusive parameterizations of the log-normal family.
///
/// Exactly one of the three recognized combinations must be populated:
/// `mu` with `sigma`, `mean` with `sd`, or `quantiles`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LognormSpec {
    /// Mean of the underlying normal.
    pub mu: Option<f64>,
    /// Standard deviation of the underlying normal.
    pub sigma: Option<f64>,
    /// Mean of the log-normal itself.
    pub mean: Option<f64>,
    /// Standard deviation of the log-normal itself.
    pub sd: Option<f64>,
    /// Two quantile constraints.
    pub quantiles: Option<QuantilePair>,
}

impl LognormSpec {
    /// Direct parameterization from the underlying normal's `mu` and
    /// `sigma`.
    pub fn mu_sigma(mu: f64, sigma: f64) -> Self {
        Self { mu: Some(mu), sigma: Some(sigma), ..Self::default() }
    }

    /// Parameterization from the log-normal's own `mean` and `sd` moments.
    pub fn mean_sd(mean: f64, sd: f64) -> Self {
        Self { mean: Some(mean), sd: Some(sd), ..Self::default() }
    }

    /// Quantile parameterization.
    pub fn quantiles(quantiles: QuantilePair) -> Self {
        Self { quantiles: Some(quantiles), ..Self::default() }
    }
}

/// Create a frozen log-normal distribution.
///
/// # Errors
///
/// Returns [`Error::Specification`] for any parameter combination other
/// than the three recognized ones, and [`Error::Domain`] for parameter
/// values the family rejects.
pub fn lognorm(spec: LognormSpec) -> Result<FrozenDistribution> {
    match (spec.mu, spec.sigma, spec.mean, spec.sd, spec.quantiles) {
        (Some(mu), Some(sigma), None, None, None) => from_params(mu, sigma),
        (None, None, Some(mean), Some(sd), None) => from_mean_sd(mean, sd),
        (None, None, None, None, Some(quantiles)) => from_quantiles(&quantiles),
        _ => Err(Error::Specification(
            "you must specify either `mu` and `sigma`, `mean` and `sd`, or `quantiles`"
                .to_string(),
        )),
    }
}

/// Log-normal distribution from the underlying normal's `mu` and `sigma`.
pub fn from_params(mu: f64, sigma: f64) -> Result<FrozenDistribution> {
    FrozenDistribution::lognorm(mu, sigma)
}

/// Log-normal distribution matching two quantile constraints.
///
/// The log of the variable is normal, so the normal closed-form solver is
/// run on the logged quantile values.
pub fn from_quantiles(quantiles: &QuantilePair) -> Result<FrozenDistribution> {
    for (_, x) in [quantiles.lo(), quantiles.hi()] {
        if x <= 0.0 {
            return Err(Error::Domain(format!(
                "log-normal quantile values must be strictly positive, got {x}"
            )));
        }
    }
    let logged = quantiles.map_values(f64::ln);
    let (mu, sigma) = norm::params_from_quantiles(&logged);
    from_params(mu, sigma)
}

/// Log-normal distribution with the given `mean` and `sd` moments.
pub fn from_mean_sd(mean: f64, sd: f64) -> Result<FrozenDistribution> {
    let (mu, sigma) = to_mu_sigma(mean, sd)?;
    from_params(mu, sigma)
}

/// Convert a log-normal's own `mean` and `sd` moments to the `(mu, sigma)`
/// parameters of the underlying normal.
pub fn to_mu_sigma(mean: f64, sd: f64) -> Result<(f64, f64)> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(Error::Domain(format!(
            "log-normal mean must be strictly positive, got {mean}"
        )));
    }
    if !sd.is_finite() || sd <= 0.0 {
        return Err(Error::Domain(format!("log-normal sd must be strictly positive, got {sd}")));
    }
    // sigma^2 = ln(1 + var / mean^2); mu = ln(mean) - sigma^2 / 2.
    let ln_term = ((sd * sd) / (mean * mean)).ln_1p();
    let sigma = ln_term.sqrt();
    let mu = mean.ln() - 0.5 * ln_term;
    Ok((mu, sigma))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rvkit_core::Error;

    #[test]
    fn test_from_mu_sigma_median() {
        // The median of a log-normal is exp(mu).
        let d = lognorm(LognormSpec::mu_sigma(1.0, 2.0)).unwrap();
        assert_relative_eq!(d.ppf(0.5), 1.0f64.exp(), epsilon = 1e-6);
    }

    #[test]
    fn test_from_mean_sd_recovers_moments() {
        for (mean, sd) in [(0.5, 1.0), (3.0, 1.0), (0.5, 5.0), (3.0, 5.0)] {
            let d = lognorm(LognormSpec::mean_sd(mean, sd)).unwrap();
            assert_relative_eq!(d.mean().unwrap(), mean, epsilon = 1e-9);
            assert_relative_eq!(d.std_dev().unwrap(), sd, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_from_quantiles_roundtrip() {
        let q = QuantilePair::new(0.1, 1.0, 0.9, 10.0).unwrap();
        let d = lognorm(LognormSpec::quantiles(q)).unwrap();
        assert_relative_eq!(d.cdf(1.0), 0.1, epsilon = 1e-9);
        assert_relative_eq!(d.cdf(10.0), 0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_quantile_values_must_be_positive() {
        let q = QuantilePair::new(0.1, -1.0, 0.9, 10.0).unwrap();
        assert!(matches!(from_quantiles(&q), Err(Error::Domain(_))));
        let q = QuantilePair::new(0.1, 0.0, 0.9, 10.0).unwrap();
        assert!(matches!(from_quantiles(&q), Err(Error::Domain(_))));
    }

    #[test]
    fn test_inconsistent_spec() {
        let q = QuantilePair::new(0.1, 0.1, 0.5, 0.5).unwrap();
        let both = LognormSpec { mu: Some(1.0), sigma: Some(1.0), quantiles: Some(q), ..LognormSpec::default() };
        assert!(matches!(lognorm(both), Err(Error::Specification(_))));

        let mixed = LognormSpec { mu: Some(1.0), sd: Some(1.0), ..LognormSpec::default() };
        assert!(matches!(lognorm(mixed), Err(Error::Specification(_))));

        assert!(matches!(lognorm(LognormSpec::default()), Err(Error::Specification(_))));
    }

    #[test]
    fn test_to_mu_sigma_rejects_non_positive() {
        assert!(to_mu_sigma(0.0, 1.0).is_err());
        assert!(to_mu_sigma(1.0, 0.0).is_err());
        assert!(to_mu_sigma(-1.0, 1.0).is_err());
    }
}
