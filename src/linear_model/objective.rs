use super::ridge::{check_lambda, check_regression_input};
use crate::{Error, Matrix, Result, Vector};

/// Regularized squared error and its gradient for a fixed data set.
///
/// ```text
/// loss(w)     = ½ (Xw - y)ᵀ(Xw - y) + ½ λ wᵀw
/// gradient(w) = XᵀXw - Xᵀy + λw
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RidgeObjective<'a> {
    x: &'a Matrix,
    y: &'a Vector,
    lambda: f64,
}

impl<'a> RidgeObjective<'a> {
    pub fn new(x: &'a Matrix, y: &'a Vector, lambda: f64) -> Result<Self> {
        check_regression_input(x, y)?;
        check_lambda(lambda)?;
        Ok(Self { x, y, lambda })
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn evaluate(&self, w: &Vector) -> (f64, Vector) {
        let xw = self.x.dot(w);
        let residual = &xw - self.y;

        let loss = 0.5 * residual.dot(&residual) + 0.5 * self.lambda * w.dot(w);
        let gradient = self.x.t().dot(&xw) - self.x.t().dot(self.y) + w * self.lambda;

        (loss, gradient)
    }
}

pub fn ridge_objective(w: &Vector, x: &Matrix, y: &Vector, lambda: f64) -> Result<(f64, Vector)> {
    let objective = RidgeObjective::new(x, y, lambda)?;
    if w.len() != objective.n_features() {
        return Err(Error::mismatch("weights", objective.n_features(), w.len()));
    }
    Ok(objective.evaluate(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::fit_ridge;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_loss_and_gradient_by_hand() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1.0, 1.0];
        let w = array![1.0, -1.0];

        // Xw = (-1, -1), residual = (-2, -2).
        let (loss, gradient) = ridge_objective(&w, &x, &y, 0.5).unwrap();
        assert_abs_diff_eq!(loss, 0.5 * 8.0 + 0.25 * 2.0, epsilon = 1e-12);
        // Xᵀr = (-8, -12), plus λw = (0.5, -0.5).
        assert_abs_diff_eq!(gradient, array![-7.5, -12.5], epsilon = 1e-12);
    }

    #[test]
    fn test_gradient_matches_finite_differences() {
        let x = array![[1.0, 0.3, -2.0], [0.5, 1.0, 0.0], [-1.0, 2.0, 1.0], [2.0, -0.5, 0.5]];
        let y = array![0.5, -1.0, 2.0, 1.5];
        let w = array![0.2, -0.7, 1.1];
        let objective = RidgeObjective::new(&x, &y, 0.3).unwrap();

        let (_, gradient) = objective.evaluate(&w);
        let h = 1e-6;
        for i in 0..w.len() {
            let mut forward = w.clone();
            let mut backward = w.clone();
            forward[i] += h;
            backward[i] -= h;
            let numeric = (objective.evaluate(&forward).0 - objective.evaluate(&backward).0) / (2.0 * h);
            assert_abs_diff_eq!(gradient[i], numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gradient_vanishes_at_ridge_solution() {
        let x = array![[1.0, 0.3], [1.0, 1.7], [1.0, -0.4], [1.0, 2.2], [1.0, 0.9]];
        let y = array![1.2, 3.1, 0.1, 4.0, 2.2];

        for &lambda in &[0.0, 0.1, 2.0] {
            let w = fit_ridge(&x, &y, lambda).unwrap();
            let (_, gradient) = ridge_objective(&w, &x, &y, lambda).unwrap();
            assert_abs_diff_eq!(gradient, Vector::zeros(2), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_weight_length_mismatch() {
        let x = array![[1.0, 2.0]];
        let y = array![1.0];
        assert!(matches!(
            ridge_objective(&array![1.0], &x, &y, 0.0),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_negative_lambda() {
        let x = array![[1.0]];
        let y = array![1.0];
        assert!(matches!(
            RidgeObjective::new(&x, &y, -1.0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
