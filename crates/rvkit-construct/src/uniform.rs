//! Uniform distribution constructors.

use rvkit_core::{Error, QuantilePair, Result};
use rvkit_dists::FrozenDistribution;
use serde::{Deserialize, Serialize};

/// Mutually exclusive parameterizations of the uniform family.
///
/// Exactly one of the two recognized combinations must be populated:
/// the extrema `a` with `b`, or `quantiles`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UniformSpec {
    /// One extremum of the support.
    pub a: Option<f64>,
    /// The other extremum of the support.
    pub b: Option<f64>,
    /// Two quantile constraints.
    pub quantiles: Option<QuantilePair>,
}

impl UniformSpec {
    /// Direct parameterization from the extrema, in either order.
    pub fn extrema(a: f64, b: f64) -> Self {
        Self { a: Some(a), b: Some(b), quantiles: None }
    }

    /// Quantile parameterization.
    pub fn quantiles(quantiles: QuantilePair) -> Self {
        Self { quantiles: Some(quantiles), ..Self::default() }
    }
}

/// Create a frozen uniform distribution.
///
/// # Errors
///
/// Returns [`Error::Specification`] for any parameter combination other
/// than exactly `a` + `b` or exactly `quantiles`.
pub fn uniform(spec: UniformSpec) -> Result<FrozenDistribution> {
    match (spec.a, spec.b, spec.quantiles) {
        (Some(a), Some(b), None) => from_extrema(a, b),
        (None, None, Some(quantiles)) => from_quantiles(&quantiles),
        _ => Err(Error::Specification(
            "you must specify either the extrema `a` and `b`, or `quantiles`".to_string(),
        )),
    }
}

/// Uniform distribution over the extrema, in either order (`a` need not be
/// less than `b`).
pub fn from_extrema(a: f64, b: f64) -> Result<FrozenDistribution> {
    FrozenDistribution::uniform(a, b)
}

/// Uniform distribution matching two quantile constraints: the two points
/// are interpolated linearly and extrapolated to probabilities 0 and 1 to
/// obtain the bounds.
pub fn from_quantiles(quantiles: &QuantilePair) -> Result<FrozenDistribution> {
    let (lo, hi) = extrapolate_to_unit(quantiles);
    from_extrema(lo, hi)
}

// Line through the two (p, x) points, evaluated at p = 0 and p = 1. The
// probabilities are distinct by QuantilePair's invariant.
pub(crate) fn extrapolate_to_unit(quantiles: &QuantilePair) -> (f64, f64) {
    let (p1, x1) = quantiles.lo();
    let (p2, x2) = quantiles.hi();
    let slope = (x2 - x1) / (p2 - p1);
    (x1 - p1 * slope, x1 + (1.0 - p1) * slope)
}
