use super::{check_features, estimate_per_class, factor_covariance, log_prior};
use super::{ClassIndex, Discriminant, PerClassGaussian};
use crate::linalg::DEFAULT_PIVOT_TOLERANCE;
use crate::{Error, Labels, Matrix, Result};
use ndarray::Zip;
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct QuadraticDiscriminant {
    model: Option<PerClassGaussian>,
    pivot_tolerance: f64,
}

// Σ_c⁻¹ and the row-independent part of the score, -½ ln|Σ_c| + ln(1/k).
struct ClassTerms {
    precision: Matrix,
    offset: f64,
}

impl QuadraticDiscriminant {
    pub fn new() -> Self {
        Self {
            model: None,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }

    pub fn from_model(model: PerClassGaussian) -> Self {
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
        self.model = Some(estimate_per_class(x, y)?);
        Ok(())
    }

    pub fn model(&self) -> Option<&PerClassGaussian> {
        self.model.as_ref()
    }

    fn class_terms(&self, model: &PerClassGaussian) -> Result<Vec<ClassTerms>> {
        let prior = log_prior(model.n_classes());

        model
            .covariances()
            .par_iter()
            .enumerate()
            .map(|(c, covariance)| {
                let class = model.classes().label(c);
                let lu = factor_covariance(covariance, self.pivot_tolerance, class)?;
                let ln_det = lu
                    .ln_determinant()
                    .ok_or(Error::SingularCovariance { class })?;

                Ok(ClassTerms {
                    precision: lu.inverse()?,
                    offset: -0.5 * ln_det + prior,
                })
            })
            .collect()
    }
}

impl Default for QuadraticDiscriminant {
    fn default() -> Self {
        Self::new()
    }
}

impl Discriminant for QuadraticDiscriminant {
    fn class_index(&self) -> Result<&ClassIndex> {
        self.model
            .as_ref()
            .map(|model| model.classes())
            .ok_or(Error::NotFitted)
    }

    fn decision_function(&self, x: &Matrix) -> Result<Matrix> {
        let model = self.model.as_ref().ok_or(Error::NotFitted)?;
        check_features(x, model.n_features())?;

        let terms = self.class_terms(model)?;
        let means = model.means();

        // Each class has its own covariance, so rows are scored one at a time.
        let mut scores = Matrix::zeros((x.nrows(), model.n_classes()));
        Zip::from(scores.rows_mut())
            .and(x.rows())
            .par_for_each(|mut out, row| {
                for (c, term) in terms.iter().enumerate() {
                    let centered = &row - &means.column(c);
                    let mahalanobis = centered.dot(&term.precision.dot(&centered));
                    out[c] = term.offset - 0.5 * mahalanobis;
                }
            });

        Ok(scores)
    }
}
