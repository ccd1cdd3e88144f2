//! Common data types for rvkit

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Two `(probability, value)` constraints used to back-solve distribution
/// parameters.
///
/// Every quantile solver in the workspace consumes exactly two constraints.
/// The pair is stored sorted by probability, so insertion order does not
/// matter to any solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantilePair {
    lo: (f64, f64),
    hi: (f64, f64),
}

impl QuantilePair {
    /// Create a quantile pair from two `(probability, value)` points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if either probability is not a number in
    /// `[0, 1]`, or if the two probabilities are equal (every solver would
    /// divide by zero).
    pub fn new(p1: f64, x1: f64, p2: f64, x2: f64) -> Result<Self> {
        for p in [p1, p2] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(Error::Domain(format!(
                    "invalid quantile probability {p}: must be a number between 0 and 1"
                )));
            }
        }
        if p1 == p2 {
            return Err(Error::Domain(format!(
                "quantile probabilities must be distinct, got {p1} twice"
            )));
        }
        let (lo, hi) = if p1 < p2 { ((p1, x1), (p2, x2)) } else { ((p2, x2), (p1, x1)) };
        Ok(Self { lo, hi })
    }

    /// The constraint with the smaller probability, as `(probability, value)`.
    pub fn lo(&self) -> (f64, f64) {
        self.lo
    }

    /// The constraint with the larger probability, as `(probability, value)`.
    pub fn hi(&self) -> (f64, f64) {
        self.hi
    }

    /// Map both quantile values through `f`, keeping the probabilities.
    ///
    /// Used by the log-domain solvers, which fit in `(p, ln x)` space.
    pub fn map_values(self, f: impl Fn(f64) -> f64) -> Self {
        Self { lo: (self.lo.0, f(self.lo.1)), hi: (self.hi.0, f(self.hi.1)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_probability() {
        let q = QuantilePair::new(0.9, 10.0, 0.1, 1.0).unwrap();
        assert_eq!(q.lo(), (0.1, 1.0));
        assert_eq!(q.hi(), (0.9, 10.0));

        // Insertion order is irrelevant.
        let q2 = QuantilePair::new(0.1, 1.0, 0.9, 10.0).unwrap();
        assert_eq!(q, q2);
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        assert!(QuantilePair::new(-0.1, 1.0, 0.9, 2.0).is_err());
        assert!(QuantilePair::new(0.1, 1.0, 1.5, 2.0).is_err());
        assert!(QuantilePair::new(f64::NAN, 1.0, 0.9, 2.0).is_err());
    }

    #[test]
    fn test_rejects_equal_probabilities() {
        let err = QuantilePair::new(0.5, 1.0, 0.5, 2.0).unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_boundary_probabilities_allowed() {
        let q = QuantilePair::new(0.0, 1.0, 1.0, 2.0).unwrap();
        assert_eq!(q.lo(), (0.0, 1.0));
        assert_eq!(q.hi(), (1.0, 2.0));
    }

    #[test]
    fn test_map_values() {
        let q = QuantilePair::new(0.1, 1.0, 0.9, 10.0).unwrap();
        let logged = q.map_values(f64::ln);
        assert_eq!(logged.lo(), (0.1, 0.0));
        assert_eq!(logged.hi(), (0.9, 10.0f64.ln()));
    }
}
