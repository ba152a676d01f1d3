use super::{descend, BacktrackingLineSearch, Direction, Minimizer, OptimizationResult};
use crate::Vector;

#[derive(Clone, Debug)]
pub struct ConjugateGradient {
    max_iter: usize,
    tolerance: f64,
    line_search: BacktrackingLineSearch,
}

impl ConjugateGradient {
    pub fn new() -> Self {
        Self {
            max_iter: 20,
            tolerance: 1e-6,
            line_search: BacktrackingLineSearch::default(),
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn line_search(mut self, line_search: BacktrackingLineSearch) -> Self {
        self.line_search = line_search;
        self
    }
}

impl Default for ConjugateGradient {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimizer for ConjugateGradient {
    fn minimize<F>(&self, objective: F, x0: Vector) -> OptimizationResult
    where
        F: Fn(&Vector) -> (f64, Vector),
    {
        let result = descend(
            objective,
            x0,
            self.max_iter,
            self.tolerance,
            &self.line_search,
            Direction::PolakRibiere,
        );
        log::debug!(
            "conjugate gradient finished after {} iterations: {:?}, |g| = {:e}",
            result.iterations,
            result.status,
            result.gradient_norm
        );
        result
    }
}
