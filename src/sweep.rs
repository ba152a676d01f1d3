//! Regularization and basis-degree sweeps.
//!
//! Each helper fits one model per setting and returns the results in input
//! order as plain records owned by the caller.
//!
//! # Examples
//!
//! ```rust
//! use gaussreg::sweep::{best_by_test_mse, ridge_path};
//! use gaussreg::Dataset;
//! use ndarray::array;
//!
//! let train = Dataset::new(
//!     array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]],
//!     array![0.1, 1.2, 1.9, 3.1],
//! )
//! .unwrap();
//! let test = Dataset::new(array![[1.0, 1.5], [1.0, 2.5]], array![1.5, 2.5]).unwrap();
//!
//! let records = ridge_path(&train, &test, &[0.0, 0.1, 1.0, 10.0]).unwrap();
//! assert_eq!(records.len(), 4);
//! assert_eq!(records[2].lambda, 1.0);
//!
//! let best = best_by_test_mse(&records).unwrap();
//! assert!(best.test_mse <= records[3].test_mse);
//! ```

use crate::linear_model::{evaluate, fit_ole, fit_ridge, IterativeRidge};
use crate::optim::Minimizer;
use crate::preprocessing::polynomial_features;
use crate::{Dataset, Error, Matrix, Result, Vector};
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SweepRecord {
    pub lambda: f64,
    pub weights: Vector,
    pub train_mse: f64,
    pub test_mse: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialRecord {
    pub degree: usize,
    pub unregularized: SweepRecord,
    pub regularized: SweepRecord,
}

pub fn ridge_path(train: &Dataset, test: &Dataset, lambdas: &[f64]) -> Result<Vec<SweepRecord>> {
    check_split(train, test)?;

    lambdas
        .par_iter()
        .map(|&lambda| {
            let weights = fit_ridge(&train.features, &train.labels, lambda)?;
            record(lambda, weights, train, test)
        })
        .collect()
}

pub fn iterative_ridge_path<M>(
    train: &Dataset,
    test: &Dataset,
    lambdas: &[f64],
    minimizer: M,
    initial: Option<Vector>,
) -> Result<Vec<SweepRecord>>
where
    M: Minimizer + Clone,
{
    check_split(train, test)?;

    let mut records = Vec::with_capacity(lambdas.len());
    for &lambda in lambdas {
        let mut model = IterativeRidge::with_minimizer(lambda, minimizer.clone());
        if let Some(weights) = &initial {
            model = model.initial_weights(weights.clone());
        }
        model.fit(&train.features, &train.labels)?;

        let weights = model.weights.ok_or(Error::NotFitted)?;
        records.push(record(lambda, weights, train, test)?);
    }

    Ok(records)
}

pub fn polynomial_path(
    train: &Dataset,
    test: &Dataset,
    column: usize,
    max_degree: usize,
    lambda: f64,
) -> Result<Vec<PolynomialRecord>> {
    check_split(train, test)?;
    if column >= train.n_features() {
        return Err(Error::InvalidArgument(format!(
            "feature column {} out of range for {} features",
            column,
            train.n_features()
        )));
    }

    (0..=max_degree)
        .map(|degree| {
            let train_basis = expand(&train.features, column, degree)?;
            let test_basis = expand(&test.features, column, degree)?;
            let train = Dataset::new(train_basis, train.labels.clone())?;
            let test = Dataset::new(test_basis, test.labels.clone())?;

            let ole = fit_ole(&train.features, &train.labels)?;
            let ridge = fit_ridge(&train.features, &train.labels, lambda)?;
            log::debug!("polynomial sweep: fitted degree {}", degree);

            Ok(PolynomialRecord {
                degree,
                unregularized: record(0.0, ole, &train, &test)?,
                regularized: record(lambda, ridge, &train, &test)?,
            })
        })
        .collect()
}

pub fn best_by_test_mse(records: &[SweepRecord]) -> Option<&SweepRecord> {
    records.iter().fold(None, |best, candidate| match best {
        Some(current) if current.test_mse <= candidate.test_mse => Some(current),
        Some(current) if candidate.test_mse.is_nan() => Some(current),
        _ => Some(candidate),
    })
}

fn record(lambda: f64, weights: Vector, train: &Dataset, test: &Dataset) -> Result<SweepRecord> {
    let train_mse = evaluate(&weights, &train.features, &train.labels)?;
    let test_mse = evaluate(&weights, &test.features, &test.labels)?;

    Ok(SweepRecord {
        lambda,
        weights,
        train_mse,
        test_mse,
    })
}

fn expand(features: &Matrix, column: usize, degree: usize) -> Result<Matrix> {
    let degree = i32::try_from(degree)
        .map_err(|_| Error::InvalidArgument(format!("polynomial degree {} is too large", degree)))?;
    polynomial_features(features.column(column), degree)
}

fn check_split(train: &Dataset, test: &Dataset) -> Result<()> {
    if train.n_features() != test.n_features() {
        return Err(Error::mismatch("test features", train.n_features(), test.n_features()));
    }
    Ok(())
}
