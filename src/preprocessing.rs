use crate::{Error, Matrix, Result};
use ndarray::{s, ArrayView1};

pub fn polynomial_features(x: ArrayView1<'_, f64>, degree: i32) -> Result<Matrix> {
    if degree < 0 {
        return Err(Error::InvalidArgument(format!(
            "polynomial degree must be non-negative, got {}",
            degree
        )));
    }

    let n_columns = degree as usize + 1;
    let mut design = Matrix::ones((x.len(), n_columns));
    for power in 1..n_columns {
        design
            .column_mut(power)
            .assign(&x.mapv(|v| v.powi(power as i32)));
    }

    Ok(design)
}

pub fn add_intercept(x: &Matrix) -> Matrix {
    let mut augmented = Matrix::ones((x.nrows(), x.ncols() + 1));
    augmented.slice_mut(s![.., 1..]).assign(x);
    augmented
}
