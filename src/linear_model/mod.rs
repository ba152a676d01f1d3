//! Linear regression without an implicit intercept.
//!
//! This module provides:
//! - `fit_ole` / `fit_ridge`: closed-form ordinary least squares and ridge
//!   solutions of the normal equations
//! - `evaluate`: mean squared error of a weight vector on a data set
//! - `RidgeObjective` / `ridge_objective`: the regularized loss and its
//!   gradient, for use with an iterative [`Minimizer`](crate::optim::Minimizer)
//! - `Ridge` and `IterativeRidge`: estimator wrappers around the two
//!   fitting routes
//!
//! Weights are never augmented with a bias term. Prepend a column of ones
//! with [`add_intercept`](crate::preprocessing::add_intercept) when one is
//! wanted.
//!
//! # Examples
//!
//! ## Closed form
//! ```rust
//! use gaussreg::{evaluate, fit_ole, fit_ridge};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let w = fit_ole(&x, &y).unwrap();
//! assert!((w[0] - 2.0).abs() < 1e-12);
//! assert!(evaluate(&w, &x, &y).unwrap() < 1e-20);
//!
//! // XᵀX = 14, Xᵀy = 28
//! let shrunk = fit_ridge(&x, &y, 2.0).unwrap();
//! assert!((shrunk[0] - 1.75).abs() < 1e-12);
//! ```
//!
//! ## Iterative
//! ```rust
//! use gaussreg::{fit_ridge, ConjugateGradient, IterativeRidge};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let y = array![1.0, 3.0, 5.0, 7.0];
//!
//! let mut model = IterativeRidge::with_minimizer(
//!     0.1,
//!     ConjugateGradient::new().max_iter(200).tolerance(1e-8),
//! );
//! model.fit(&x, &y).unwrap();
//!
//! let closed_form = fit_ridge(&x, &y, 0.1).unwrap();
//! let weights = model.weights.as_ref().unwrap();
//! assert!((weights - &closed_form).iter().all(|d| d.abs() < 1e-5));
//! ```

mod iterative;
mod objective;
mod ridge;

pub use iterative::IterativeRidge;
pub use objective::{ridge_objective, RidgeObjective};
pub use ridge::{evaluate, fit_ole, fit_ridge, Ridge};
