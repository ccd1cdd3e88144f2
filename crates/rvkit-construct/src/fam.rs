//! Family membership predicates for frozen distributions.
//!
//! Each predicate is total: it answers from the [`Family`] tag carried by
//! the frozen distribution and never panics. Downstream consumers can
//! branch on family identity without touching the internal representation.

use rvkit_dists::{Family, FrozenDistribution};

/// Returns `true` iff `dist` was produced by a normal-family constructor.
pub fn is_norm(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::Norm
}

/// Returns `true` iff `dist` was produced by a log-normal-family
/// constructor.
pub fn is_lognorm(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::LogNorm
}

/// Returns `true` iff `dist` was produced by a beta-family constructor.
pub fn is_beta(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::Beta
}

/// Returns `true` iff `dist` was produced by a uniform-family constructor
/// (including the degenerate equal-bounds case).
pub fn is_uniform(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::Uniform
}

/// Returns `true` iff `dist` was produced by a log-uniform-family
/// constructor.
pub fn is_loguniform(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::LogUniform
}

/// Returns `true` iff `dist` was produced by a two-piece uniform
/// constructor (including the halves-uniform).
pub fn is_tp_uniform(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::TwoPieceUniform
}

/// Returns `true` iff `dist` was produced by the certainty constructor.
pub fn is_certainty(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::Certainty
}

/// Returns `true` iff `dist` was produced by a PERT-family constructor.
pub fn is_pert(dist: &FrozenDistribution) -> bool {
    dist.family() == Family::Pert
}
