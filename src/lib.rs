pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

mod error;

pub mod dataset;
pub mod discriminant;
pub mod linalg;
pub mod linear_model;
pub mod metrics;
pub mod optim;
pub mod preprocessing;
pub mod sweep;
pub mod synthetic;

pub use dataset::Dataset;
pub use discriminant::{
    estimate_per_class, estimate_shared, ClassIndex, Classification, Discriminant,
    LinearDiscriminant, PerClassGaussian, QuadraticDiscriminant, SharedGaussian,
};
pub use error::{Error, Result};
pub use linear_model::{
    evaluate, fit_ole, fit_ridge, ridge_objective, IterativeRidge, Ridge, RidgeObjective,
};
pub use optim::{ConjugateGradient, ConvergenceStatus, GradientDescent, Minimizer, OptimizationResult};
pub use preprocessing::{add_intercept, polynomial_features};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
pub type Labels = Array1<i64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        let labels = Labels::from(vec![1, 2, 2]);
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
        assert_eq!(labels.len(), 3);
    }
}
