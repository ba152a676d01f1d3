//! Iterative minimizers for smooth objectives.
//!
//! A [`Minimizer`] takes an objective returning `(value, gradient)` and an
//! initial point, and returns an approximate minimizer. Estimators that need
//! one are generic over the trait, so any implementation can be swapped in
//! without touching the objective.
//!
//! - `ConjugateGradient`: nonlinear CG with Polak-Ribière+ updates
//! - `GradientDescent`: steepest descent
//!
//! Both use a backtracking line search enforcing the Armijo condition.
//!
//! # Examples
//!
//! ```rust
//! use gaussreg::{ConjugateGradient, ConvergenceStatus, Minimizer};
//! use ndarray::array;
//!
//! // f(x) = (x0 - 3)² + 2 (x1 + 1)²
//! let objective = |x: &gaussreg::Vector| {
//!     let value = (x[0] - 3.0).powi(2) + 2.0 * (x[1] + 1.0).powi(2);
//!     let gradient = array![2.0 * (x[0] - 3.0), 4.0 * (x[1] + 1.0)];
//!     (value, gradient)
//! };
//!
//! let result = ConjugateGradient::new()
//!     .max_iter(100)
//!     .tolerance(1e-8)
//!     .minimize(objective, array![0.0, 0.0]);
//!
//! assert_eq!(result.status, ConvergenceStatus::Converged);
//! assert!((result.solution[0] - 3.0).abs() < 1e-6);
//! assert!((result.solution[1] + 1.0).abs() < 1e-6);
//! ```

mod conjugate_gradient;
mod gradient_descent;
mod line_search;

pub use conjugate_gradient::ConjugateGradient;
pub use gradient_descent::GradientDescent;
pub use line_search::BacktrackingLineSearch;

use crate::Vector;

pub trait Minimizer {
    fn minimize<F>(&self, objective: F, x0: Vector) -> OptimizationResult
    where
        F: Fn(&Vector) -> (f64, Vector);
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationResult {
    pub solution: Vector,
    pub objective_value: f64,
    pub gradient_norm: f64,
    pub iterations: usize,
    pub status: ConvergenceStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvergenceStatus {
    Converged,
    MaxIterations,
    Stalled,
    NumericalError,
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    SteepestDescent,
    PolakRibiere,
}

// Shared descent loop; the minimizers differ only in how the next search
// direction is built.
fn descend<F>(
    objective: F,
    x0: Vector,
    max_iter: usize,
    tolerance: f64,
    line_search: &BacktrackingLineSearch,
    rule: Direction,
) -> OptimizationResult
where
    F: Fn(&Vector) -> (f64, Vector),
{
    let mut x = x0;
    let (mut value, mut gradient) = objective(&x);
    let finish = |solution: Vector, value: f64, gradient: &Vector, iterations, status| {
        OptimizationResult {
            solution,
            objective_value: value,
            gradient_norm: norm(gradient),
            iterations,
            status,
        }
    };

    if !is_finite(value, &gradient) {
        return finish(x, value, &gradient, 0, ConvergenceStatus::NumericalError);
    }

    let mut direction = -&gradient;
    for iteration in 0..max_iter {
        if norm(&gradient) < tolerance {
            return finish(x, value, &gradient, iteration, ConvergenceStatus::Converged);
        }

        if gradient.dot(&direction) >= 0.0 {
            direction = -&gradient;
        }

        let Some(step) = line_search.search(&objective, &x, value, &gradient, &direction) else {
            return finish(x, value, &gradient, iteration, ConvergenceStatus::Stalled);
        };

        let next = &x + &(&direction * step);
        let (next_value, next_gradient) = objective(&next);
        if !is_finite(next_value, &next_gradient) {
            return finish(x, value, &gradient, iteration, ConvergenceStatus::NumericalError);
        }

        direction = match rule {
            Direction::SteepestDescent => -&next_gradient,
            Direction::PolakRibiere => {
                let denominator = gradient.dot(&gradient).max(f64::MIN_POSITIVE);
                let beta = (next_gradient.dot(&(&next_gradient - &gradient)) / denominator).max(0.0);
                -&next_gradient + &(direction * beta)
            }
        };

        x = next;
        value = next_value;
        gradient = next_gradient;
    }

    let status = if norm(&gradient) < tolerance {
        ConvergenceStatus::Converged
    } else {
        ConvergenceStatus::MaxIterations
    };
    finish(x, value, &gradient, max_iter, status)
}

fn norm(v: &Vector) -> f64 {
    v.dot(v).sqrt()
}

fn is_finite(value: f64, gradient: &Vector) -> bool {
    value.is_finite() && gradient.iter().all(|g| g.is_finite())
}
