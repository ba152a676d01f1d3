use super::{descend, BacktrackingLineSearch, Direction, Minimizer, OptimizationResult};
use crate::Vector;

#[derive(Clone, Debug)]
pub struct GradientDescent {
    max_iter: usize,
    tolerance: f64,
    line_search: BacktrackingLineSearch,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            max_iter: 1000,
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

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimizer for GradientDescent {
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
            Direction::SteepestDescent,
        );
        log::debug!(
            "gradient descent finished after {} iterations: {:?}",
            result.iterations,
            result.status
        );
        result
    }
}
