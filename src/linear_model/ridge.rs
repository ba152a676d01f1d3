use crate::linalg::{LuDecomposition, DEFAULT_PIVOT_TOLERANCE};
use crate::{metrics, Error, Matrix, Result, Vector};

pub fn fit_ole(x: &Matrix, y: &Vector) -> Result<Vector> {
    solve_normal_equations(x, y, 0.0, DEFAULT_PIVOT_TOLERANCE)
}

pub fn fit_ridge(x: &Matrix, y: &Vector, lambda: f64) -> Result<Vector> {
    solve_normal_equations(x, y, lambda, DEFAULT_PIVOT_TOLERANCE)
}

pub fn evaluate(w: &Vector, x: &Matrix, y: &Vector) -> Result<f64> {
    if x.ncols() != w.len() {
        return Err(Error::mismatch("test features", w.len(), x.ncols()));
    }
    if x.nrows() != y.len() {
        return Err(Error::mismatch("test targets", x.nrows(), y.len()));
    }

    metrics::mean_squared_error(y, &x.dot(w))
}

pub(crate) fn check_lambda(lambda: f64) -> Result<()> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "ridge parameter must be finite and non-negative, got {}",
            lambda
        )));
    }
    Ok(())
}

pub(crate) fn check_regression_input(x: &Matrix, y: &Vector) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(Error::mismatch("training targets", x.nrows(), y.len()));
    }
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

fn solve_normal_equations(x: &Matrix, y: &Vector, lambda: f64, tolerance: f64) -> Result<Vector> {
    check_regression_input(x, y)?;
    check_lambda(lambda)?;

    let xt = x.t();
    let mut gram = xt.dot(x);
    for i in 0..gram.nrows() {
        gram[(i, i)] += lambda;
    }
    let xty = xt.dot(y);

    log::trace!(
        "solving normal equations: {} samples, {} features, lambda = {}",
        x.nrows(),
        x.ncols(),
        lambda
    );

    LuDecomposition::factor(&gram, tolerance)?.solve(&xty)
}

#[derive(Clone, Debug)]
pub struct Ridge {
    pub weights: Option<Vector>,
    lambda: f64,
    pivot_tolerance: f64,
}

impl Ridge {
    pub fn new(lambda: f64) -> Self {
        Self {
            weights: None,
            lambda,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }

    pub fn pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        let weights = solve_normal_equations(x, y, self.lambda, self.pivot_tolerance)?;
        log::debug!("fitted ridge with lambda = {}", self.lambda);
        self.weights = Some(weights);
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
