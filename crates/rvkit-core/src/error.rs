//! Error types for rvkit

use thiserror::Error;

/// rvkit error type
#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied a missing, partial, or conflicting combination of
    /// construction parameters.
    #[error("specification error: {0}")]
    Specification(String),

    /// A numeric argument is outside the domain a solver or distribution
    /// accepts.
    #[error("domain error: {0}")]
    Domain(String),

    /// A numerical fit converged to parameters that do not reproduce the
    /// requested quantiles.
    #[error("could not fit: {0}")]
    FitConsistency(String),

    /// Numerical computation error.
    #[error("computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let e = Error::Specification("missing `mean`".to_string());
        assert_eq!(e.to_string(), "specification error: missing `mean`");

        let e = Error::FitConsistency("beta quantile mismatch".to_string());
        assert!(e.to_string().starts_with("could not fit"));
    }
}
