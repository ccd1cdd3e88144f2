//! # rvkit-dists
//!
//! Distribution engines missing from the statrs family — the two-piece
//! uniform, the certainty (point-mass) distribution, the log-uniform, and
//! the PERT family — plus [`FrozenDistribution`], which binds one parameter
//! set of one family to the generic
//! `pdf`/`cdf`/`ppf`/`rvs`/`mean`/`var`/`support` protocol.
//!
//! Each engine is a stateless set of closed-form functions over validated
//! parameters; the statrs `Continuous`/`ContinuousCDF`/`Distribution` trait
//! impls are thin bindings over those functions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod certainty;
pub mod frozen;
pub mod log_uniform;
pub mod pert;
pub mod two_piece_uniform;

pub use certainty::Certainty;
pub use frozen::{Family, FrozenDistribution};
pub use log_uniform::LogUniform;
pub use pert::Pert;
pub use two_piece_uniform::{argcheck, TwoPieceUniform};
