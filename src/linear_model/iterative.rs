use super::objective::RidgeObjective;
use super::ridge::evaluate;
use crate::optim::{ConjugateGradient, Minimizer, OptimizationResult};
use crate::{Error, Matrix, Result, Vector};

#[derive(Clone, Debug)]
pub struct IterativeRidge<M = ConjugateGradient> {
    pub weights: Option<Vector>,
    pub optimization: Option<OptimizationResult>,
    lambda: f64,
    minimizer: M,
    initial_weights: Option<Vector>,
}

impl IterativeRidge<ConjugateGradient> {
    pub fn new(lambda: f64) -> Self {
        Self::with_minimizer(lambda, ConjugateGradient::new())
    }
}

impl<M: Minimizer> IterativeRidge<M> {
    pub fn with_minimizer(lambda: f64, minimizer: M) -> Self {
        Self {
            weights: None,
            optimization: None,
            lambda,
            minimizer,
            initial_weights: None,
        }
    }

    pub fn initial_weights(mut self, weights: Vector) -> Self {
        self.initial_weights = Some(weights);
        self
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        let objective = RidgeObjective::new(x, y, self.lambda)?;

        let x0 = match &self.initial_weights {
            Some(weights) if weights.len() != x.ncols() => {
                return Err(Error::mismatch("initial weights", x.ncols(), weights.len()));
            }
            Some(weights) => weights.clone(),
            None => Vector::ones(x.ncols()),
        };

        let result = self.minimizer.minimize(|w| objective.evaluate(w), x0);
        log::debug!(
            "iterative ridge with lambda = {}: {:?} after {} iterations",
            self.lambda,
            result.status,
            result.iterations
        );

        self.weights = Some(result.solution.clone());
        self.optimization = Some(result);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let weights = self.weights.as_ref().ok_or(Error::NotFitted)?;

        if x.ncols() != weights.len() {
            return Err(Error::mismatch("test features", weights.len(), x.ncols()));
        }

        Ok(x.dot(weights))
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let weights = self.weights.as_ref().ok_or(Error::NotFitted)?;
        evaluate(weights, x, y)
    }
}
