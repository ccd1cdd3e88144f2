//! Frozen distribution objects.
//!
//! A [`FrozenDistribution`] is one parameter set of one family bound to the
//! generic `pdf`/`cdf`/`ppf`/`rvs`/`mean`/`var`/`support` protocol. The
//! [`Family`] tag is carried alongside the kernel so consumers can branch on
//! family identity without inspecting internals.

use rand::distr::Uniform as RandUniform;
use rand::Rng;
use rand_distr::{Beta as RandBeta, LogNormal as RandLogNormal, Normal as RandNormal};
use rvkit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, Continuous, ContinuousCDF, LogNormal, Normal, Uniform};
use statrs::statistics::{Distribution as Moments, Max, Min};

use crate::certainty::Certainty;
use crate::log_uniform::LogUniform;
use crate::pert::Pert;
use crate::two_piece_uniform::TwoPieceUniform;

/// Distribution family tag, carried by every [`FrozenDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Normal distribution.
    Norm,
    /// Log-normal distribution.
    LogNorm,
    /// Beta distribution.
    Beta,
    /// Uniform distribution.
    Uniform,
    /// Log-uniform (reciprocal) distribution.
    LogUniform,
    /// Two-piece uniform distribution (includes the halves-uniform).
    TwoPieceUniform,
    /// Certainty (point-mass) distribution.
    Certainty,
    /// PERT / modified PERT distribution.
    Pert,
}

#[derive(Debug, Clone)]
enum Kernel {
    Norm { dist: Normal, mean: f64, sd: f64 },
    LogNorm { dist: LogNormal, mu: f64, sigma: f64 },
    Beta { dist: Beta, alpha: f64, beta: f64 },
    Uniform { dist: Uniform, lo: f64, hi: f64 },
    LogUniform(LogUniform),
    TwoPieceUniform(TwoPieceUniform),
    Certainty(Certainty),
    Pert(Pert),
}

/// A distribution with all parameters bound, exposing evaluation methods but
/// no further configuration.
#[derive(Debug, Clone)]
pub struct FrozenDistribution {
    family: Family,
    kernel: Kernel,
}

fn sample_n<D, R>(sampler: &D, rng: &mut R, size: usize) -> Vec<f64>
where
    D: rand::distr::Distribution<f64>,
    R: Rng + ?Sized,
{
    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        out.push(sampler.sample(rng));
    }
    out
}

impl FrozenDistribution {
    /// Normal distribution with the given `mean` and standard deviation.
    pub fn norm(mean: f64, sd: f64) -> Result<Self> {
        let dist = Normal::new(mean, sd).map_err(|e| Error::Domain(format!("norm: {e}")))?;
        Ok(Self { family: Family::Norm, kernel: Kernel::Norm { dist, mean, sd } })
    }

    /// Log-normal distribution parameterized by the mean `mu` and standard
    /// deviation `sigma` of the underlying normal.
    pub fn lognorm(mu: f64, sigma: f64) -> Result<Self> {
        let dist = LogNormal::new(mu, sigma).map_err(|e| Error::Domain(format!("lognorm: {e}")))?;
        Ok(Self { family: Family::LogNorm, kernel: Kernel::LogNorm { dist, mu, sigma } })
    }

    /// Beta distribution with shape parameters `alpha` and `beta`.
    pub fn beta(alpha: f64, beta: f64) -> Result<Self> {
        let dist = Beta::new(alpha, beta).map_err(|e| Error::Domain(format!("beta: {e}")))?;
        Ok(Self { family: Family::Beta, kernel: Kernel::Beta { dist, alpha, beta } })
    }

    /// Uniform distribution over the interval bounded by `a` and `b`, in
    /// either order.
    ///
    /// `a == b` degenerates to a point mass that still reports
    /// [`Family::Uniform`].
    pub fn uniform(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::Domain(format!(
                "uniform: bounds must be finite, got a={a}, b={b}"
            )));
        }
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let kernel = if lo == hi {
            Kernel::Certainty(Certainty::new(lo)?)
        } else {
            let dist =
                Uniform::new(lo, hi).map_err(|e| Error::Domain(format!("uniform: {e}")))?;
            Kernel::Uniform { dist, lo, hi }
        };
        Ok(Self { family: Family::Uniform, kernel })
    }

    /// Log-uniform distribution over the interval bounded by `a` and `b`,
    /// in either order; both must be strictly positive.
    pub fn loguniform(a: f64, b: f64) -> Result<Self> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self {
            family: Family::LogUniform,
            kernel: Kernel::LogUniform(LogUniform::new(lo, hi)?),
        })
    }

    /// Two-piece uniform distribution; see [`TwoPieceUniform::new`].
    pub fn two_piece_uniform(mini: f64, sep: f64, maxi: f64, psep: f64) -> Result<Self> {
        Ok(Self {
            family: Family::TwoPieceUniform,
            kernel: Kernel::TwoPieceUniform(TwoPieceUniform::new(mini, sep, maxi, psep)?),
        })
    }

    /// Halves-uniform: two-piece uniform with `psep` pinned to `0.5`.
    pub fn halves_uniform(mini: f64, sep: f64, maxi: f64) -> Result<Self> {
        Ok(Self {
            family: Family::TwoPieceUniform,
            kernel: Kernel::TwoPieceUniform(TwoPieceUniform::halves(mini, sep, maxi)?),
        })
    }

    /// Certainty (point-mass) distribution at `value`.
    pub fn certainty(value: f64) -> Result<Self> {
        Ok(Self { family: Family::Certainty, kernel: Kernel::Certainty(Certainty::new(value)?) })
    }

    /// Modified PERT distribution; see [`Pert::new`].
    pub fn pert(mini: f64, mode: f64, maxi: f64, lambd: f64) -> Result<Self> {
        Ok(Self { family: Family::Pert, kernel: Kernel::Pert(Pert::new(mini, mode, maxi, lambd)?) })
    }

    /// The family this distribution was constructed as.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        match &self.kernel {
            Kernel::Norm { dist, .. } => dist.pdf(x),
            Kernel::LogNorm { dist, .. } => dist.pdf(x),
            Kernel::Beta { dist, .. } => dist.pdf(x),
            Kernel::Uniform { dist, .. } => dist.pdf(x),
            Kernel::LogUniform(d) => d.pdf(x),
            Kernel::TwoPieceUniform(d) => d.pdf(x),
            Kernel::Certainty(d) => d.pdf(x),
            Kernel::Pert(d) => d.pdf(x),
        }
    }

    /// Cumulative probability at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        match &self.kernel {
            Kernel::Norm { dist, .. } => dist.cdf(x),
            Kernel::LogNorm { dist, .. } => dist.cdf(x),
            Kernel::Beta { dist, .. } => dist.cdf(x),
            Kernel::Uniform { dist, .. } => dist.cdf(x),
            Kernel::LogUniform(d) => d.cdf(x),
            Kernel::TwoPieceUniform(d) => d.cdf(x),
            Kernel::Certainty(d) => d.cdf(x),
            Kernel::Pert(d) => d.cdf(x),
        }
    }

    /// Inverse cumulative probability (percent-point function).
    ///
    /// Returns NaN for `p` outside `[0, 1]`.
    pub fn ppf(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        match &self.kernel {
            Kernel::Norm { dist, .. } => dist.inverse_cdf(p),
            Kernel::LogNorm { dist, .. } => dist.inverse_cdf(p),
            Kernel::Beta { dist, .. } => dist.inverse_cdf(p),
            Kernel::Uniform { dist, .. } => dist.inverse_cdf(p),
            Kernel::LogUniform(d) => d.ppf(p),
            Kernel::TwoPieceUniform(d) => d.ppf(p),
            Kernel::Certainty(d) => d.ppf(p),
            Kernel::Pert(d) => d.ppf(p),
        }
    }

    /// Draw `size` samples using the supplied random source.
    ///
    /// The two-piece uniform family uses its stratified sampler; see
    /// [`TwoPieceUniform::rvs`] for the (deliberate) determinism this
    /// implies for small sizes.
    pub fn rvs<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Vec<f64> {
        match &self.kernel {
            Kernel::Norm { mean, sd, .. } => {
                let sampler =
                    RandNormal::new(*mean, *sd).expect("parameters validated at construction");
                sample_n(&sampler, rng, size)
            }
            Kernel::LogNorm { mu, sigma, .. } => {
                let sampler =
                    RandLogNormal::new(*mu, *sigma).expect("parameters validated at construction");
                sample_n(&sampler, rng, size)
            }
            Kernel::Beta { alpha, beta, .. } => {
                let sampler =
                    RandBeta::new(*alpha, *beta).expect("parameters validated at construction");
                sample_n(&sampler, rng, size)
            }
            Kernel::Uniform { lo, hi, .. } => {
                let sampler = RandUniform::new_inclusive(*lo, *hi)
                    .expect("bounds validated at construction");
                sample_n(&sampler, rng, size)
            }
            Kernel::LogUniform(d) => d.rvs(rng, size),
            Kernel::TwoPieceUniform(d) => d.rvs(rng, size),
            Kernel::Certainty(d) => d.rvs(rng, size),
            Kernel::Pert(d) => d.rvs(rng, size),
        }
    }

    /// Mean of the distribution, when defined.
    pub fn mean(&self) -> Option<f64> {
        match &self.kernel {
            Kernel::Norm { dist, .. } => dist.mean(),
            Kernel::LogNorm { dist, .. } => dist.mean(),
            Kernel::Beta { dist, .. } => dist.mean(),
            Kernel::Uniform { dist, .. } => dist.mean(),
            Kernel::LogUniform(d) => Some(d.mean()),
            Kernel::TwoPieceUniform(d) => Some(d.mean()),
            Kernel::Certainty(d) => Some(d.mean()),
            Kernel::Pert(d) => Some(d.mean()),
        }
    }

    /// Variance of the distribution, when defined.
    pub fn var(&self) -> Option<f64> {
        match &self.kernel {
            Kernel::Norm { dist, .. } => dist.variance(),
            Kernel::LogNorm { dist, .. } => dist.variance(),
            Kernel::Beta { dist, .. } => dist.variance(),
            Kernel::Uniform { dist, .. } => dist.variance(),
            Kernel::LogUniform(d) => Some(d.var()),
            Kernel::TwoPieceUniform(d) => Some(d.var()),
            Kernel::Certainty(d) => Some(d.var()),
            Kernel::Pert(d) => Some(d.var()),
        }
    }

    /// Standard deviation of the distribution, when defined.
    pub fn std_dev(&self) -> Option<f64> {
        self.var().map(f64::sqrt)
    }

    /// Support of the distribution as `(lower, upper)`.
    pub fn support(&self) -> (f64, f64) {
        match &self.kernel {
            Kernel::Norm { dist, .. } => (dist.min(), dist.max()),
            Kernel::LogNorm { dist, .. } => (dist.min(), dist.max()),
            Kernel::Beta { dist, .. } => (dist.min(), dist.max()),
            Kernel::Uniform { lo, hi, .. } => (*lo, *hi),
            Kernel::LogUniform(d) => d.support(),
            Kernel::TwoPieceUniform(d) => d.support(),
            Kernel::Certainty(d) => d.support(),
            Kernel::Pert(d) => d.support(),
        }
    }

    /// Density over a slice of evaluation points.
    pub fn pdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    /// Cumulative probability over a slice of evaluation points.
    pub fn cdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// Inverse cumulative probability over a slice of probabilities.
    pub fn ppf_many(&self, ps: &[f64]) -> Vec<f64> {
        ps.iter().map(|&p| self.ppf(p)).collect()
    }
}

impl Min<f64> for FrozenDistribution {
    fn min(&self) -> f64 {
        self.support().0
    }
}

impl Max<f64> for FrozenDistribution {
    fn max(&self) -> f64 {
        self.support().1
    }
}

impl Continuous<f64, f64> for FrozenDistribution {
    fn pdf(&self, x: f64) -> f64 {
        FrozenDistribution::pdf(self, x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        FrozenDistribution::pdf(self, x).ln()
    }
}

impl ContinuousCDF<f64, f64> for FrozenDistribution {
    fn cdf(&self, x: f64) -> f64 {
        FrozenDistribution::cdf(self, x)
    }

    fn sf(&self, x: f64) -> f64 {
        1.0 - FrozenDistribution::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        FrozenDistribution::ppf(self, p)
    }
}

impl Moments<f64> for FrozenDistribution {
    fn mean(&self) -> Option<f64> {
        FrozenDistribution::mean(self)
    }

    fn variance(&self) -> Option<f64> {
        FrozenDistribution::var(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_family_tags() {
        assert_eq!(FrozenDistribution::norm(0.0, 1.0).unwrap().family(), Family::Norm);
        assert_eq!(FrozenDistribution::lognorm(0.0, 1.0).unwrap().family(), Family::LogNorm);
        assert_eq!(FrozenDistribution::beta(2.0, 3.0).unwrap().family(), Family::Beta);
        assert_eq!(FrozenDistribution::uniform(0.0, 1.0).unwrap().family(), Family::Uniform);
        assert_eq!(FrozenDistribution::loguniform(1.0, 2.0).unwrap().family(), Family::LogUniform);
        assert_eq!(
            FrozenDistribution::two_piece_uniform(0.0, 1.0, 3.0, 0.5).unwrap().family(),
            Family::TwoPieceUniform
        );
        assert_eq!(
            FrozenDistribution::halves_uniform(0.0, 1.0, 3.0).unwrap().family(),
            Family::TwoPieceUniform
        );
        assert_eq!(FrozenDistribution::certainty(1.0).unwrap().family(), Family::Certainty);
        assert_eq!(FrozenDistribution::pert(0.0, 3.0, 12.0, 4.0).unwrap().family(), Family::Pert);
    }

    #[test]
    fn test_uniform_sorts_bounds() {
        let d = FrozenDistribution::uniform(2.0, 1.0).unwrap();
        assert_eq!(d.support(), (1.0, 2.0));
        assert_relative_eq!(d.ppf(0.5), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_uniform_is_point_mass() {
        let d = FrozenDistribution::uniform(1.0, 1.0).unwrap();
        assert_eq!(d.family(), Family::Uniform);
        assert_eq!(d.support(), (1.0, 1.0));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(d.rvs(&mut rng, 10), vec![1.0; 10]);
    }

    #[test]
    fn test_ppf_guards_unit_interval() {
        for d in [
            FrozenDistribution::norm(0.0, 1.0).unwrap(),
            FrozenDistribution::beta(2.0, 3.0).unwrap(),
            FrozenDistribution::uniform(0.0, 1.0).unwrap(),
        ] {
            assert!(d.ppf(-0.01).is_nan());
            assert!(d.ppf(1.01).is_nan());
        }
    }

    #[test]
    fn test_norm_protocol_matches_statrs() {
        let d = FrozenDistribution::norm(1.0, 2.0).unwrap();
        let reference = Normal::new(1.0, 2.0).unwrap();
        for x in [-3.0, 0.0, 1.0, 4.5] {
            assert_relative_eq!(d.pdf(x), reference.pdf(x), epsilon = 1e-12);
            assert_relative_eq!(d.cdf(x), reference.cdf(x), epsilon = 1e-12);
        }
        assert_eq!(d.mean(), Some(1.0));
        assert_eq!(d.var(), Some(4.0));
        assert_eq!(d.support(), (f64::NEG_INFINITY, f64::INFINITY));
    }

    #[test]
    fn test_rvs_reproducible_across_families() {
        for d in [
            FrozenDistribution::norm(0.0, 1.0).unwrap(),
            FrozenDistribution::lognorm(0.0, 0.5).unwrap(),
            FrozenDistribution::beta(2.0, 3.0).unwrap(),
            FrozenDistribution::uniform(0.0, 1.0).unwrap(),
            FrozenDistribution::loguniform(1.0, 10.0).unwrap(),
            FrozenDistribution::two_piece_uniform(0.0, 1.0, 3.0, 0.5).unwrap(),
            FrozenDistribution::pert(0.0, 3.0, 12.0, 4.0).unwrap(),
        ] {
            let a = d.rvs(&mut StdRng::seed_from_u64(5), 50);
            let b = d.rvs(&mut StdRng::seed_from_u64(5), 50);
            assert_eq!(a, b);
            let (lo, hi) = d.support();
            assert!(a.iter().all(|&x| x >= lo && x <= hi));
        }
    }

    #[test]
    fn test_vectorized_helpers() {
        let d = FrozenDistribution::uniform(0.0, 2.0).unwrap();
        assert_eq!(d.pdf_many(&[0.5, 1.5, 3.0]), vec![0.5, 0.5, 0.0]);
        assert_eq!(d.cdf_many(&[0.0, 1.0, 2.0]), vec![0.0, 0.5, 1.0]);
        let ppf = d.ppf_many(&[0.0, 0.5, 1.0]);
        assert_relative_eq!(ppf[1], 1.0, epsilon = 1e-12);
    }
}
