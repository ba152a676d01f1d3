//! Generative Gaussian classifiers.
//!
//! This module provides:
//! - `estimate_shared` / `estimate_per_class`: class means with a pooled or
//!   per-class covariance
//! - `LinearDiscriminant`: shared-covariance classifier with linear boundaries
//! - `QuadraticDiscriminant`: per-class-covariance classifier with quadratic
//!   boundaries
//!
//! Both classifiers use a uniform prior 1/k over the k labels seen at fit
//! time. Labels are kept as their original values; internally each label is
//! mapped to a zero-based index through a [`ClassIndex`] in ascending order.
//!
//! # Examples
//!
//! ## Linear Discriminant Analysis
//! ```rust
//! use gaussreg::{Discriminant, LinearDiscriminant};
//! use ndarray::array;
//!
//! let x = array![[0.0], [1.0], [2.0], [3.0]];
//! let y = array![1, 1, 2, 2];
//!
//! let mut lda = LinearDiscriminant::new();
//! lda.fit(&x, &y).unwrap();
//!
//! let result = lda.classify(&array![[0.0], [3.0]], Some(&array![1, 2])).unwrap();
//! assert_eq!(result.predictions, array![1, 2]);
//! assert_eq!(result.accuracy, Some(1.0));
//! ```
//!
//! ## Quadratic Discriminant Analysis
//! ```rust
//! use gaussreg::{Discriminant, QuadraticDiscriminant};
//! use ndarray::array;
//!
//! let x = array![
//!     [0.0, 0.0], [1.0, 0.5], [0.5, 1.0],
//!     [6.0, 6.0], [9.0, 5.0], [5.0, 9.0]
//! ];
//! let y = array![0, 0, 0, 1, 1, 1];
//!
//! let mut qda = QuadraticDiscriminant::new();
//! qda.fit(&x, &y).unwrap();
//!
//! let predictions = qda.predict(&array![[0.4, 0.4], [7.0, 7.0]]).unwrap();
//! assert_eq!(predictions, array![0, 1]);
//! ```

mod covariance;
mod labels;
mod lda;
mod qda;

pub use covariance::{estimate_per_class, estimate_shared, PerClassGaussian, SharedGaussian};
pub use labels::ClassIndex;
pub use lda::LinearDiscriminant;
pub use qda::QuadraticDiscriminant;

use crate::linalg::LuDecomposition;
use crate::{metrics, Error, Labels, Matrix, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub accuracy: Option<f64>,
    pub predictions: Labels,
}

pub trait Discriminant {
    fn class_index(&self) -> Result<&ClassIndex>;

    fn decision_function(&self, x: &Matrix) -> Result<Matrix>;

    fn predict(&self, x: &Matrix) -> Result<Labels> {
        let scores = self.decision_function(x)?;
        let classes = self.class_index()?;

        let predictions = scores
            .rows()
            .into_iter()
            .map(|row| {
                let mut best = 0;
                for (class, &score) in row.iter().enumerate() {
                    if score > row[best] {
                        best = class;
                    }
                }
                classes
                    .label(best)
                    .ok_or_else(|| Error::mismatch("class scores", classes.len(), row.len()))
            })
            .collect::<Result<Vec<i64>>>()?;

        Ok(Labels::from(predictions))
    }

    fn classify(&self, x: &Matrix, y: Option<&Labels>) -> Result<Classification> {
        if let Some(y) = y {
            if y.len() != x.nrows() {
                return Err(Error::mismatch("test labels", x.nrows(), y.len()));
            }
        }

        let predictions = self.predict(x)?;
        let accuracy = y
            .map(|y| metrics::accuracy(y, &predictions))
            .transpose()?;

        Ok(Classification {
            accuracy,
            predictions,
        })
    }

    fn score(&self, x: &Matrix, y: &Labels) -> Result<f64> {
        let predictions = self.predict(x)?;
        metrics::accuracy(y, &predictions)
    }
}

fn check_features(x: &Matrix, n_features: usize) -> Result<()> {
    if x.ncols() != n_features {
        return Err(Error::mismatch("test features", n_features, x.ncols()));
    }
    Ok(())
}

fn factor_covariance(covariance: &Matrix, tolerance: f64, class: Option<i64>) -> Result<LuDecomposition> {
    LuDecomposition::factor(covariance, tolerance).map_err(|err| match err {
        Error::SingularMatrix { .. } => Error::SingularCovariance { class },
        other => other,
    })
}

fn log_prior(n_classes: usize) -> f64 {
    (1.0 / n_classes as f64).ln()
}
