//! PERT and modified-PERT distributions.
//!
//! A PERT distribution is a beta distribution reshaped by a minimum, most
//! likely, and maximum value. The modified PERT adds a shape parameter
//! `lambd` controlling how peaked the density is around the mode; the
//! classic PERT is `lambd = 4`.

use rand::distr::Distribution as _;
use rand::Rng;
use rand_distr::Beta as RandBeta;
use rvkit_core::{Error, Result};
use statrs::distribution::{Beta, Continuous, ContinuousCDF};
use statrs::statistics::{Distribution, Max, Min};

/// Modified PERT distribution on `[mini, maxi]` with mode `mode`.
///
/// Internally a `Beta(alpha, beta)` rescaled to the support, with
/// `alpha = 1 + lambd (mode - mini) / (maxi - mini)` and
/// `beta = 1 + lambd (maxi - mode) / (maxi - mini)`.
#[derive(Debug, Clone)]
pub struct Pert {
    mini: f64,
    maxi: f64,
    mode: f64,
    lambd: f64,
    alpha: f64,
    beta: f64,
    inner: Beta,
}

impl Pert {
    /// Create a modified PERT distribution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] unless `mini <= mode <= maxi`,
    /// `mini < maxi`, `lambd > 0`, and all values are finite.
    pub fn new(mini: f64, mode: f64, maxi: f64, lambd: f64) -> Result<Self> {
        let finite = mini.is_finite() && mode.is_finite() && maxi.is_finite() && lambd.is_finite();
        if !finite || !(mini <= mode && mode <= maxi) || mini >= maxi || lambd <= 0.0 {
            return Err(Error::Domain(format!(
                "pert requires mini <= mode <= maxi, mini < maxi and lambd > 0, \
                 got mini={mini}, mode={mode}, maxi={maxi}, lambd={lambd}"
            )));
        }
        let range = maxi - mini;
        let alpha = 1.0 + lambd * (mode - mini) / range;
        let beta = 1.0 + lambd * (maxi - mode) / range;
        let inner =
            Beta::new(alpha, beta).map_err(|e| Error::Domain(format!("pert shape: {e}")))?;
        Ok(Self { mini, maxi, mode, lambd, alpha, beta, inner })
    }

    /// The classic PERT distribution: modified PERT with `lambd = 4`.
    pub fn classic(mini: f64, mode: f64, maxi: f64) -> Result<Self> {
        Self::new(mini, mode, maxi, 4.0)
    }

    /// Most likely value.
    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Shape parameter of the modified PERT.
    pub fn lambd(&self) -> f64 {
        self.lambd
    }

    /// Shape parameters of the underlying beta distribution.
    pub fn shapes(&self) -> (f64, f64) {
        (self.alpha, self.beta)
    }

    /// Support: `[mini, maxi]`.
    pub fn support(&self) -> (f64, f64) {
        (self.mini, self.maxi)
    }

    fn range(&self) -> f64 {
        self.maxi - self.mini
    }

    /// Density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        if !(self.mini..=self.maxi).contains(&x) {
            return 0.0;
        }
        self.inner.pdf((x - self.mini) / self.range()) / self.range()
    }

    /// Cumulative probability at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.mini {
            0.0
        } else if x >= self.maxi {
            1.0
        } else {
            self.inner.cdf((x - self.mini) / self.range())
        }
    }

    /// Inverse cumulative probability; NaN outside `[0, 1]`.
    pub fn ppf(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.mini + self.range() * self.inner.inverse_cdf(p)
    }

    /// Draw `size` samples by rescaling beta draws to the support.
    pub fn rvs<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Vec<f64> {
        let sampler =
            RandBeta::new(self.alpha, self.beta).expect("shapes validated at construction");
        let mut out = Vec::with_capacity(size);
        for _ in 0..size {
            out.push(self.mini + self.range() * sampler.sample(rng));
        }
        out
    }

    /// Mean: `(mini + lambd * mode + maxi) / (lambd + 2)`.
    pub fn mean(&self) -> f64 {
        (self.mini + self.lambd * self.mode + self.maxi) / (self.lambd + 2.0)
    }

    /// Variance of the underlying beta scaled by the squared range.
    pub fn var(&self) -> f64 {
        let (a, b) = (self.alpha, self.beta);
        let beta_var = a * b / ((a + b).powi(2) * (a + b + 1.0));
        beta_var * self.range().powi(2)
    }
}

impl Min<f64> for Pert {
    fn min(&self) -> f64 {
        self.mini
    }
}

impl Max<f64> for Pert {
    fn max(&self) -> f64 {
        self.maxi
    }
}

impl Continuous<f64, f64> for Pert {
    fn pdf(&self, x: f64) -> f64 {
        Pert::pdf(self, x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        Pert::pdf(self, x).ln()
    }
}

impl ContinuousCDF<f64, f64> for Pert {
    fn cdf(&self, x: f64) -> f64 {
        Pert::cdf(self, x)
    }

    fn sf(&self, x: f64) -> f64 {
        1.0 - Pert::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        Pert::ppf(self, p)
    }
}

impl Distribution<f64> for Pert {
    fn mean(&self) -> Option<f64> {
        Some(Pert::mean(self))
    }

    fn variance(&self) -> Option<f64> {
        Some(Pert::var(self))
    }
}
