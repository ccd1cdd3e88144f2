//! Bounded quasi-Newton minimization for the numerical quantile solvers.
//!
//! Thin wrapper around argmin's L-BFGS with More-Thuente line search. Box
//! bounds are enforced by clamping, with a projected-gradient adjustment so
//! the line search does not keep stepping into the flat clamped region when
//! a parameter sits at a bound.

use argmin::core::{CostFunction, Executor, Gradient, State, TerminationReason, TerminationStatus};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use rvkit_core::{Error, Result};

/// Configuration for the bounded L-BFGS minimizer.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Maximum number of iterations.
    pub max_iter: u64,
    /// Convergence tolerance on the gradient norm.
    pub tol: f64,
    /// Number of corrections used to approximate the inverse Hessian.
    pub m: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self { max_iter: 500, tol: 1e-8, m: 10 }
    }
}

/// Outcome of a minimization run.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    /// Best parameters found (clamped to the bounds).
    pub parameters: Vec<f64>,
    /// Objective value at the best parameters.
    pub fval: f64,
    /// Number of iterations used.
    pub n_iter: u64,
    /// Whether the solver terminated by converging.
    pub converged: bool,
    /// Termination message from the solver.
    pub message: String,
}

/// Objective function to minimize.
pub trait ObjectiveFunction {
    /// Evaluate the objective at `params`.
    fn eval(&self, params: &[f64]) -> Result<f64>;

    /// Gradient at `params`; central differences with an adaptive step
    /// unless overridden.
    fn gradient(&self, params: &[f64]) -> Result<Vec<f64>> {
        let mut grad = vec![0.0; params.len()];
        for i in 0..params.len() {
            let eps = 1e-8 * params[i].abs().max(1.0);

            let mut plus = params.to_vec();
            plus[i] += eps;
            let f_plus = self.eval(&plus)?;

            let mut minus = params.to_vec();
            minus[i] -= eps;
            let f_minus = self.eval(&minus)?;

            grad[i] = (f_plus - f_minus) / (2.0 * eps);
        }
        Ok(grad)
    }
}

fn clamp_params(params: &[f64], bounds: &[(f64, f64)]) -> Vec<f64> {
    params.iter().zip(bounds.iter()).map(|(&v, &(lo, hi))| v.clamp(lo, hi)).collect()
}

struct BoundedProblem<'a> {
    objective: &'a dyn ObjectiveFunction,
    bounds: &'a [(f64, f64)],
}

impl CostFunction for BoundedProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> std::result::Result<Self::Output, argmin::core::Error> {
        let clamped = clamp_params(params, self.bounds);
        self.objective.eval(&clamped).map_err(|e| argmin::core::Error::msg(e.to_string()))
    }
}

impl Gradient for BoundedProblem<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(
        &self,
        params: &Self::Param,
    ) -> std::result::Result<Self::Gradient, argmin::core::Error> {
        let clamped = clamp_params(params, self.bounds);
        let mut g = self
            .objective
            .gradient(&clamped)
            .map_err(|e| argmin::core::Error::msg(e.to_string()))?;

        // Projected gradient: a component pushing out of an active bound is
        // zeroed so the solver can converge on the boundary.
        const EPS: f64 = 1e-12;
        for (i, (&x, &(lo, hi))) in clamped.iter().zip(self.bounds.iter()).enumerate() {
            if x <= lo + EPS && g[i] > 0.0 {
                g[i] = 0.0;
            }
            if x >= hi - EPS && g[i] < 0.0 {
                g[i] = 0.0;
            }
        }

        Ok(g)
    }
}

/// Minimize `objective` from `init`, keeping every parameter inside its
/// `(lower, upper)` bound.
///
/// # Errors
///
/// Returns [`Error::Computation`] if `init` and `bounds` disagree in length,
/// the solver configuration is rejected, or the run fails outright.
pub fn minimize(
    objective: &dyn ObjectiveFunction,
    init: &[f64],
    bounds: &[(f64, f64)],
    config: &FitConfig,
) -> Result<FitOutcome> {
    if init.len() != bounds.len() {
        return Err(Error::Computation(format!(
            "parameter and bounds length mismatch: {} != {}",
            init.len(),
            bounds.len()
        )));
    }

    let init_clamped = clamp_params(init, bounds);
    let problem = BoundedProblem { objective, bounds };

    let linesearch = MoreThuenteLineSearch::new();
    // argmin's default cost tolerance is machine epsilon, which stalls into
    // max-iter terminations at our objective scales.
    let tol_cost = if config.tol == 0.0 { 0.0 } else { (0.1 * config.tol).max(1e-12) };
    let solver = LBFGS::new(linesearch, config.m)
        .with_tolerance_grad(config.tol)
        .map_err(|e| Error::Computation(format!("invalid optimizer tolerance: {e}")))?
        .with_tolerance_cost(tol_cost)
        .map_err(|e| Error::Computation(format!("invalid optimizer cost tolerance: {e}")))?;

    let res = Executor::new(problem, solver)
        .configure(|state| state.param(init_clamped).max_iters(config.max_iter))
        .run()
        .map_err(|e| Error::Computation(format!("optimization failed: {e}")))?;

    let state = res.state();
    let best = state
        .get_best_param()
        .ok_or_else(|| Error::Computation("no best parameters found".to_string()))?
        .clone();

    let termination = state.get_termination_status();
    let converged = matches!(
        termination,
        TerminationStatus::Terminated(TerminationReason::SolverConverged)
            | TerminationStatus::Terminated(TerminationReason::TargetCostReached)
    );

    Ok(FitOutcome {
        parameters: clamp_params(&best, bounds),
        fval: state.get_best_cost(),
        n_iter: state.get_iter(),
        converged,
        message: termination.to_string(),
    })
}
