use super::{check_features, estimate_shared, factor_covariance, log_prior};
use super::{ClassIndex, Discriminant, SharedGaussian};
use crate::linalg::DEFAULT_PIVOT_TOLERANCE;
use crate::{Error, Labels, Matrix, Result, Vector};

#[derive(Clone, Debug)]
pub struct LinearDiscriminant {
    model: Option<SharedGaussian>,
    pivot_tolerance: f64,
}

impl LinearDiscriminant {
    pub fn new() -> Self {
        Self {
            model: None,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }

    pub fn from_model(model: SharedGaussian) -> Self {
        Self {
            model: Some(model),
            ..Self::new()
        }
    }

    pub fn pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    pub fn fit(&mut self, x: &Matrix, y: &Labels) -> Result<()> {
        self.model = Some(estimate_shared(x, y)?);
        Ok(())
    }

    pub fn model(&self) -> Option<&SharedGaussian> {
        self.model.as_ref()
    }

    pub fn coefficients(&self) -> Result<(Matrix, Vector)> {
        let model = self.model.as_ref().ok_or(Error::NotFitted)?;

        let lu = factor_covariance(model.covariance(), self.pivot_tolerance, None)?;
        let betas = lu.solve_matrix(model.means())?;

        let prior = log_prior(model.n_classes());
        let offsets = Vector::from_shape_fn(model.n_classes(), |c| {
            -0.5 * model.means().column(c).dot(&betas.column(c)) + prior
        });

        Ok((betas, offsets))
    }
}

impl Default for LinearDiscriminant {
    fn default() -> Self {
        Self::new()
    }
}

impl Discriminant for LinearDiscriminant {
    fn class_index(&self) -> Result<&ClassIndex> {
        self.model
            .as_ref()
            .map(|model| model.classes())
            .ok_or(Error::NotFitted)
    }

    fn decision_function(&self, x: &Matrix) -> Result<Matrix> {
        let model = self.model.as_ref().ok_or(Error::NotFitted)?;
        check_features(x, model.n_features())?;

        let (betas, offsets) = self.coefficients()?;
        Ok(x.dot(&betas) + &offsets)
    }
}
