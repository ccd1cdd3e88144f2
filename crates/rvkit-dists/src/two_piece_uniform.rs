//! Two-piece uniform distribution.
//!
//! A continuous random variable formed by concatenating two uniform
//! segments: `[mini, sep]` carrying probability mass `psep`, and
//! `[sep, maxi]` carrying mass `1 - psep`. The split point and the split
//! probability are set independently, so the density may jump at `sep`.
//!
//! The halves-uniform distribution (half the mass on each side of `sep`) is
//! the same engine with `psep` pinned to `0.5`; see
//! [`TwoPieceUniform::halves`].

use rand::distr::{Distribution as _, Uniform};
use rand::Rng;
use rvkit_core::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Distribution, Max, Min};

/// Validation predicate for two-piece uniform parameters.
///
/// Valid iff all four values are finite, `mini <= sep <= maxi` and
/// `0 <= psep <= 1`. Degenerate widths are valid: `sep == mini`,
/// `sep == maxi`, and even `mini == sep == maxi` (a point mass).
pub fn argcheck(mini: f64, sep: f64, maxi: f64, psep: f64) -> bool {
    mini.is_finite()
        && sep.is_finite()
        && maxi.is_finite()
        && psep.is_finite()
        && mini <= sep
        && sep <= maxi
        && (0.0..=1.0).contains(&psep)
}

// Density of Uniform(lo, hi); assumes hi > lo. Keeping the helper in
// extrema form avoids shuffling everything through loc/scale.
fn uniform_pdf(x: f64, lo: f64, hi: f64) -> f64 {
    if (lo..=hi).contains(&x) {
        1.0 / (hi - lo)
    } else {
        0.0
    }
}

/// Two-piece uniform distribution with validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPieceUniform {
    mini: f64,
    sep: f64,
    maxi: f64,
    psep: f64,
}

impl TwoPieceUniform {
    /// Create a two-piece uniform distribution.
    ///
    /// `psep` is the cumulative probability at `sep`, i.e. the mass of the
    /// left segment: `P(X < sep) = psep`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] unless `mini <= sep <= maxi` and
    /// `0 <= psep <= 1` (see [`argcheck`]).
    pub fn new(mini: f64, sep: f64, maxi: f64, psep: f64) -> Result<Self> {
        if !argcheck(mini, sep, maxi, psep) {
            return Err(Error::Domain(format!(
                "two-piece uniform requires mini <= sep <= maxi and 0 <= psep <= 1, \
                 got mini={mini}, sep={sep}, maxi={maxi}, psep={psep}"
            )));
        }
        Ok(Self { mini, sep, maxi, psep })
    }

    /// The halves-uniform distribution: half the mass on each side of `sep`.
    ///
    /// Same engine with `psep` pinned to `0.5`; no algebra is duplicated.
    pub fn halves(mini: f64, sep: f64, maxi: f64) -> Result<Self> {
        Self::new(mini, sep, maxi, 0.5)
    }

    /// Left bound.
    pub fn mini(&self) -> f64 {
        self.mini
    }

    /// Boundary between the left and right segments.
    pub fn sep(&self) -> f64 {
        self.sep
    }

    /// Right bound.
    pub fn maxi(&self) -> f64 {
        self.maxi
    }

    /// Probability mass of the left segment.
    pub fn psep(&self) -> f64 {
        self.psep
    }

    /// Support of the distribution: `[mini, maxi]`, independent of `psep`.
    pub fn support(&self) -> (f64, f64) {
        (self.mini, self.maxi)
    }

    /// Probability density at `x`.
    ///
    /// Each segment is a uniform density scaled by its probability mass. A
    /// zero-width segment that carries mass is an atom: the density at that
    /// point is `+inf`.
    pub fn pdf(&self, x: f64) -> f64 {
        let Self { mini, sep, maxi, psep } = *self;
        if x < mini || x > maxi {
            return 0.0;
        }
        if x <= sep {
            if sep > mini {
                return psep * uniform_pdf(x, mini, sep);
            }
            if psep > 0.0 {
                return f64::INFINITY;
            }
            // Zero-width, zero-mass left segment: the right segment alone
            // determines the density here.
        }
        if maxi > sep {
            return (1.0 - psep) * uniform_pdf(x, sep, maxi);
        }
        if psep < 1.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }

    /// Cumulative probability at `x`.
    ///
    /// The intervals are half-open so the value at `sep` is exactly `psep`
    /// and nothing is double-counted.
    pub fn cdf(&self, x: f64) -> f64 {
        let Self { mini, sep, maxi, psep } = *self;
        if x < mini {
            0.0
        } else if x < sep {
            // mini <= x < sep implies sep > mini
            psep * ((x - mini) / (sep - mini))
        } else if x < maxi {
            // sep <= x < maxi implies maxi > sep
            psep + (1.0 - psep) * ((x - sep) / (maxi - sep))
        } else {
            1.0
        }
    }

    /// Inverse cumulative probability (percent-point function).
    ///
    /// Exact algebraic inverse of [`cdf`](Self::cdf) on `(0, 1)`; returns
    /// NaN for `p` outside `[0, 1]`.
    pub fn ppf(&self, p: f64) -> f64 {
        let Self { mini, sep, maxi, psep } = *self;
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        if p < psep {
            mini + p / psep * (sep - mini)
        } else if psep < 1.0 {
            sep + (p - psep) / (1.0 - psep) * (maxi - sep)
        } else {
            // psep == 1: the left segment carries all mass and p == 1 lands
            // on its right edge.
            sep
        }
    }

    /// Draw `size` samples.
    ///
    /// Stratified: `ceil(size * psep)` draws come from `[mini, sep]` and the
    /// remainder from `[sep, maxi]`, concatenated left-then-right. The split
    /// is a fixed count rather than a per-draw Bernoulli, so `size == 1`
    /// with `psep > 0` always yields a left-segment sample. Callers needing
    /// i.i.d. order must shuffle.
    pub fn rvs<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Vec<f64> {
        let n_left = (((size as f64) * self.psep).ceil() as usize).min(size);

        let left = Uniform::new_inclusive(self.mini, self.sep)
            .expect("segment bounds are ordered by construction");
        let right = Uniform::new_inclusive(self.sep, self.maxi)
            .expect("segment bounds are ordered by construction");

        let mut out = Vec::with_capacity(size);
        for _ in 0..n_left {
            out.push(left.sample(rng));
        }
        for _ in 0..size - n_left {
            out.push(right.sample(rng));
        }
        out
    }

    /// Mean: the mass-weighted average of the two segment midpoints.
    pub fn mean(&self) -> f64 {
        let Self { mini, sep, maxi, psep } = *self;
        let mean_left = (mini + sep) / 2.0;
        let mean_right = (sep + maxi) / 2.0;
        psep * mean_left + (1.0 - psep) * mean_right
    }

    /// Variance by the law of total variance.
    ///
    /// Each segment contributes its own uniform variance (`width^2 / 12`)
    /// weighted by its mass, plus its midpoint's squared deviation from the
    /// overall mean, also weighted by its mass.
    pub fn var(&self) -> f64 {
        let Self { mini, sep, maxi, psep } = *self;
        let within_left = psep * (sep - mini).powi(2) / 12.0;
        let within_right = (1.0 - psep) * (maxi - sep).powi(2) / 12.0;

        let mean_left = (mini + sep) / 2.0;
        let mean_right = (sep + maxi) / 2.0;
        let overall = psep * mean_left + (1.0 - psep) * mean_right;

        let between_left = psep * (mean_left - overall).powi(2);
        let between_right = (1.0 - psep) * (mean_right - overall).powi(2);

        within_left + within_right + between_left + between_right
    }
}

impl Min<f64> for TwoPieceUniform {
    fn min(&self) -> f64 {
        self.mini
    }
}

impl Max<f64> for TwoPieceUniform {
    fn max(&self) -> f64 {
        self.maxi
    }
}

impl Continuous<f64, f64> for TwoPieceUniform {
    fn pdf(&self, x: f64) -> f64 {
        TwoPieceUniform::pdf(self, x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        TwoPieceUniform::pdf(self, x).ln()
    }
}

impl ContinuousCDF<f64, f64> for TwoPieceUniform {
    fn cdf(&self, x: f64) -> f64 {
        TwoPieceUniform::cdf(self, x)
    }

    fn sf(&self, x: f64) -> f64 {
        1.0 - TwoPieceUniform::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        TwoPieceUniform::ppf(self, p)
    }
}

impl Distribution<f64> for TwoPieceUniform {
    fn mean(&self) -> Option<f64> {
        Some(TwoPieceUniform::mean(self))
    }

    fn variance(&self) -> Option<f64> {
        Some(TwoPieceUniform::var(self))
    }

    // Skewness and kurtosis are left to the trait defaults (`None`): the
    // closed forms were judged not worth the complexity.
}
