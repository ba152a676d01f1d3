use crate::{Error, Matrix, Result};
use ndarray::Array1;

#[derive(Clone, Debug)]
pub struct Dataset<T = f64> {
    pub features: Matrix,
    pub labels: Array1<T>,
}

impl<T: Clone> Dataset<T> {
    pub fn new(features: Matrix, labels: Array1<T>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(Error::mismatch("dataset labels", features.nrows(), labels.len()));
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn with_intercept(&self) -> Self {
        Self {
            features: crate::preprocessing::add_intercept(&self.features),
            labels: self.labels.clone(),
        }
    }
}
