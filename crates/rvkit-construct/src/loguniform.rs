//! Log-uniform distribution constructors.

use rvkit_core::{Error, QuantilePair, Result};
use rvkit_dists::FrozenDistribution;
use serde::{Deserialize, Serialize};

use crate::uniform::extrapolate_to_unit;

/// Mutually exclusive parameterizations of the log-uniform family.
///
/// Exactly one of the two recognized combinations must be populated:
/// the extrema `a` with `b`, or `quantiles`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoguniformSpec {
    /// One extremum of the support; strictly positive.
    pub a: Option<f64>,
    /// The other extremum of the support; strictly positive.
    pub b: Option<f64>,
    /// Two quantile constraints.
    pub quantiles: Option<QuantilePair>,
}

impl LoguniformSpec {
    /// Direct parameterization from the extrema, in either order.
    pub fn extrema(a: f64, b: f64) -> Self {
        Self { a: Some(a), b: Some(b), quantiles: None }
    }

    /// Quantile parameterization.
    pub fn quantiles(quantiles: QuantilePair) -> Self {
        Self { quantiles: Some(quantiles), ..Self::default() }
    }
}

/// Create a frozen log-uniform distribution.
///
/// # Errors
///
/// Returns [`Error::Specification`] for any parameter combination other
/// than exactly `a` + `b` or exactly `quantiles`, and [`Error::Domain`] for
/// non-positive bounds or quantile values.
pub fn loguniform(spec: LoguniformSpec) -> Result<FrozenDistribution> {
    match (spec.a, spec.b, spec.quantiles) {
        (Some(a), Some(b), None) => from_extrema(a, b),
        (None, None, Some(quantiles)) => from_quantiles(&quantiles),
        _ => Err(Error::Specification(
            "you must specify either the extrema `a` and `b`, or `quantiles`".to_string(),
        )),
    }
}

/// Log-uniform distribution over the extrema, in either order.
pub fn from_extrema(a: f64, b: f64) -> Result<FrozenDistribution> {
    FrozenDistribution::loguniform(a, b)
}

/// Log-uniform distribution matching two quantile constraints.
///
/// The interpolation runs in `(p, ln x)` space — the corresponding uniform
/// lives on the log scale — and the extrapolated log-bounds are
/// exponentiated back.
pub fn from_quantiles(quantiles: &QuantilePair) -> Result<FrozenDistribution> {
    for (_, x) in [quantiles.lo(), quantiles.hi()] {
        if x <= 0.0 {
            return Err(Error::Domain(format!(
                "log-uniform quantile values must be strictly positive, got {x}"
            )));
        }
    }
    let logged = quantiles.map_values(f64::ln);
    let (log_lo, log_hi) = extrapolate_to_unit(&logged);
    from_extrema(log_lo.exp(), log_hi.exp())
}
