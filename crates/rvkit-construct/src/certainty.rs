//! Certainty distribution constructor.

use rvkit_core::Result;
use rvkit_dists::FrozenDistribution;

/// Create a frozen certainty distribution: a point mass at `value`.
pub fn certainty(value: f64) -> Result<FrozenDistribution> {
    FrozenDistribution::certainty(value)
}
