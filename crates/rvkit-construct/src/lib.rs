//! # rvkit-construct
//!
//! Constructors for frozen distributions. Each family accepts either a
//! direct parameter set or a two-element quantile mapping, never both;
//! quantile input is routed to the family's solver (closed-form for normal
//! and log-normal, interpolation for uniform and log-uniform, a bounded
//! least-squares fit for beta).
//!
//! Family membership of a previously constructed distribution can be
//! queried through the predicates in [`fam`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod beta;
pub mod certainty;
pub mod fam;
pub mod lognorm;
pub mod loguniform;
pub mod norm;
pub mod optimizer;
pub mod pert;
pub mod tp_uniform;
pub mod uniform;

pub use beta::{beta, BetaSpec};
pub use certainty::certainty;
pub use lognorm::{lognorm, LognormSpec};
pub use loguniform::{loguniform, LoguniformSpec};
pub use norm::{norm, NormSpec};
pub use pert::{mpert, pert};
pub use tp_uniform::{halves_uniform, tp_uniform};
pub use uniform::{uniform, UniformSpec};
