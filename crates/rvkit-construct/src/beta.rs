//! Beta distribution constructors.
//!
//! The quantile solver here is numerical: a bounded least-squares fit of the
//! beta CDF to the two constraints. The fit is always re-verified before the
//! parameters are handed back, so a quietly wrong solve surfaces as an error
//! instead of a wrong distribution.

use rvkit_core::{Error, QuantilePair, Result};
use rvkit_dists::FrozenDistribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF};

use crate::optimizer::{minimize, FitConfig, ObjectiveFunction};

// Post-fit consistency tolerances: |fitted - requested| <= ATOL + RTOL*|requested|.
const FIT_RTOL: f64 = 1e-5;
const FIT_ATOL: f64 = 1e-8;

// Box for the shape parameters during the fit. The lower bound leaves room
// for the numerical gradient's finite-difference step to stay positive.
const SHAPE_MIN: f64 = 1e-6;
const SHAPE_MAX: f64 = 1e6;

/// Mutually exclusive parameterizations of the beta family.
///
/// Exactly one of the two recognized combinations must be populated:
/// `alpha` with `beta`, or `quantiles`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BetaSpec {
    /// First shape parameter.
    pub alpha: Option<f64>,
    /// Second shape parameter.
    pub beta: Option<f64>,
    /// Two quantile constraints.
    pub quantiles: Option<QuantilePair>,
}

impl BetaSpec {
    /// Direct parameterization from the shape parameters.
    pub fn shapes(alpha: f64, beta: f64) -> Self {
        Self { alpha: Some(alpha), beta: Some(beta), quantiles: None }
    }

    /// Quantile parameterization.
    pub fn quantiles(quantiles: QuantilePair) -> Self {
        Self { quantiles: Some(quantiles), ..Self::default() }
    }
}

/// Create a frozen beta distribution.
///
/// # Errors
///
/// Returns [`Error::Specification`] for any parameter combination other
/// than exactly `alpha` + `beta` or exactly `quantiles`; [`Error::Domain`]
/// for invalid shapes; [`Error::FitConsistency`] when the quantile fit
/// cannot reproduce the requested probabilities.
pub fn beta(spec: BetaSpec) -> Result<FrozenDistribution> {
    match (spec.alpha, spec.beta, spec.quantiles) {
        (Some(alpha), Some(beta), None) => FrozenDistribution::beta(alpha, beta),
        (None, None, Some(quantiles)) => from_quantiles(&quantiles),
        _ => Err(Error::Specification(
            "you must specify either `alpha` and `beta`, or `quantiles`".to_string(),
        )),
    }
}

// Sum of squared residuals between the beta CDF and the two constraints.
struct CdfResiduals {
    points: [(f64, f64); 2],
}

impl ObjectiveFunction for CdfResiduals {
    fn eval(&self, params: &[f64]) -> Result<f64> {
        let dist = Beta::new(params[0], params[1])
            .map_err(|e| Error::Computation(format!("beta cdf evaluation: {e}")))?;
        Ok(self
            .points
            .iter()
            .map(|&(p, x)| {
                let r = dist.cdf(x) - p;
                r * r
            })
            .sum())
    }
}

/// Beta distribution fit to two quantile constraints.
///
/// Least-squares fit of `(alpha, beta)` starting from `(1, 1)`. The fit is
/// numerical, so the fitted CDF is re-evaluated at both constraint values
/// afterwards; parameters that do not reproduce the requested probabilities
/// within tolerance are rejected.
pub fn from_quantiles(quantiles: &QuantilePair) -> Result<FrozenDistribution> {
    let points = [quantiles.lo(), quantiles.hi()];
    let objective = CdfResiduals { points };

    let outcome = minimize(
        &objective,
        &[1.0, 1.0],
        &[(SHAPE_MIN, SHAPE_MAX); 2],
        &FitConfig::default(),
    )
    .map_err(|e| Error::FitConsistency(format!("beta quantile fit failed: {e}")))?;
    let (alpha, beta) = (outcome.parameters[0], outcome.parameters[1]);

    let fitted = Beta::new(alpha, beta)
        .map_err(|e| Error::FitConsistency(format!("beta quantile fit failed: {e}")))?;
    for &(p, x) in &points {
        let got = fitted.cdf(x);
        if (got - p).abs() > FIT_ATOL + FIT_RTOL * p.abs() {
            return Err(Error::FitConsistency(format!(
                "beta distribution for quantiles: expected probability {p} at {x}, \
                 fitted cdf gives {got}"
            )));
        }
    }

    FrozenDistribution::beta(alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rvkit_core::Error;

    #[test]
    fn test_from_shapes() {
        let d = beta(BetaSpec::shapes(2.0, 5.0)).unwrap();
        assert_relative_eq!(d.mean().unwrap(), 2.0 / 7.0, epsilon = 1e-12);
        assert_eq!(d.support(), (0.0, 1.0));
    }

    #[test]
    fn test_from_quantiles_roundtrip() {
        let q = QuantilePair::new(0.1, 0.2, 0.5, 0.85).unwrap();
        let d = from_quantiles(&q).unwrap();
        assert_relative_eq!(d.cdf(0.2), 0.1, epsilon = 1e-4);
        assert_relative_eq!(d.cdf(0.85), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_from_quantiles_skewed() {
        let q = QuantilePair::new(0.1, 0.5, 0.5, 0.99).unwrap();
        let d = from_quantiles(&q).unwrap();
        assert_relative_eq!(d.cdf(0.5), 0.1, epsilon = 1e-4);
        assert_relative_eq!(d.cdf(0.99), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_infeasible_quantiles_rejected() {
        // Decreasing values with increasing probability cannot be a CDF.
        let q = QuantilePair::new(0.1, 0.9, 0.9, 0.1).unwrap();
        assert!(matches!(from_quantiles(&q), Err(Error::FitConsistency(_))));
    }

    #[test]
    fn test_over_and_under_specified() {
        let q = QuantilePair::new(0.1, 0.1, 0.5, 0.5).unwrap();
        let over = BetaSpec { alpha: Some(1.0), beta: Some(1.0), quantiles: Some(q) };
        assert!(matches!(beta(over), Err(Error::Specification(_))));

        let under = BetaSpec { alpha: Some(1.0), ..BetaSpec::default() };
        assert!(matches!(beta(under), Err(Error::Specification(_))));
    }

    #[test]
    fn test_invalid_shapes_rejected() {
        assert!(matches!(beta(BetaSpec::shapes(0.0, 1.0)), Err(Error::Domain(_))));
        assert!(matches!(beta(BetaSpec::shapes(1.0, -2.0)), Err(Error::Domain(_))));
    }
}
