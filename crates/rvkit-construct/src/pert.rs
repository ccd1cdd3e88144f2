//! PERT distribution constructors.

use rvkit_core::Result;
use rvkit_dists::FrozenDistribution;

/// Create a frozen PERT distribution from its minimum, most likely, and
/// maximum value.
///
/// The classic PERT corresponds to a modified PERT with `lambd = 4`; use
/// [`mpert`] to set `lambd` explicitly.
pub fn pert(mini: f64, mode: f64, maxi: f64) -> Result<FrozenDistribution> {
    mpert(mini, mode, maxi, 4.0)
}

/// Create a frozen modified PERT distribution with shape parameter `lambd`.
pub fn mpert(mini: f64, mode: f64, maxi: f64, lambd: f64) -> Result<FrozenDistribution> {
    FrozenDistribution::pert(mini, mode, maxi, lambd)
}
