use crate::{Error, Labels, Result, Vector};

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::mismatch("predictions", y_true.len(), y_pred.len()));
    }

    let diff = y_true - y_pred;
    diff.mapv(|x| x * x).mean().ok_or(Error::EmptyInput)
}

pub fn accuracy(y_true: &Labels, y_pred: &Labels) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::mismatch("predictions", y_true.len(), y_pred.len()));
    }
    if y_true.is_empty() {
        return Err(Error::EmptyInput);
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, pred)| actual == pred)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];
        assert_abs_diff_eq!(mean_squared_error(&y_true, &y_pred).unwrap(), 0.0);

        let y_pred = array![2.0, 2.0, 1.0];
        assert_abs_diff_eq!(mean_squared_error(&y_true, &y_pred).unwrap(), 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_squared_error_empty() {
        let empty = Vector::zeros(0);
        assert_eq!(mean_squared_error(&empty, &empty), Err(Error::EmptyInput));
    }

    #[test]
    fn test_accuracy() {
        let y_true = array![1, 2, 2, 3];
        let y_pred = array![1, 2, 3, 3];
        assert_abs_diff_eq!(accuracy(&y_true, &y_pred).unwrap(), 0.75);
    }

    #[test]
    fn test_accuracy_mismatch() {
        let y_true = array![1, 2];
        let y_pred = array![1];
        assert!(matches!(
            accuracy(&y_true, &y_pred),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
