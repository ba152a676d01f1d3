//! Dense linear algebra on top of `ndarray`.
//!
//! Products and transposes come straight from `ndarray`. Solving, inversion
//! and determinants go through [`LuDecomposition`], an LU factorization with
//! partial pivoting.
//!
//! # Singularity policy
//!
//! Before elimination the matrix is equilibrated: every column is divided by
//! its largest magnitude, then every row of the result by its own. A matrix
//! is reported singular when the largest available pivot in a column of the
//! equilibrated matrix satisfies
//!
//! ```text
//! |pivot| <= tolerance
//! ```
//!
//! The default tolerance is [`DEFAULT_PIVOT_TOLERANCE`]. Rescaling any row or
//! column, for example expressing one feature in different units, does not
//! change the verdict. Singular matrices are reported, never regularized.
//!
//! ```rust
//! use gaussreg::linalg::{LuDecomposition, DEFAULT_PIVOT_TOLERANCE};
//! use ndarray::array;
//!
//! let a = array![[4.0, 1.0], [2.0, 3.0]];
//! let lu = LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE).unwrap();
//! assert!((lu.ln_determinant().unwrap() - 10.0_f64.ln()).abs() < 1e-12);
//!
//! let x = lu.solve(&array![6.0, 8.0]).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 2.0).abs() < 1e-12);
//! ```

use crate::{Error, Matrix, Result, Vector};
use ndarray::{ArrayView1, Axis};

pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-10;

// Factors R⁻¹·A·C⁻¹ = P⁻¹·L·U, where R and C hold the row and column scales.
#[derive(Clone, Debug)]
pub struct LuDecomposition {
    // Unit lower factor below the diagonal, upper factor on and above it.
    lu: Matrix,
    permutation: Vec<usize>,
    sign: f64,
    row_scale: Vector,
    col_scale: Vector,
}

impl LuDecomposition {
    pub fn factor(a: &Matrix, tolerance: f64) -> Result<Self> {
        check_tolerance(tolerance)?;
        if a.nrows() != a.ncols() {
            return Err(Error::mismatch("square matrix", a.nrows(), a.ncols()));
        }

        let n = a.nrows();
        let col_scale = a.map_axis(Axis(0), largest_magnitude);
        let mut lu = a / &col_scale;
        let row_scale = lu.map_axis(Axis(1), largest_magnitude);
        lu /= &row_scale.view().insert_axis(Axis(1));

        let mut permutation: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;

        for k in 0..n {
            let mut max_row = k;
            for i in (k + 1)..n {
                if lu[(i, k)].abs() > lu[(max_row, k)].abs() {
                    max_row = i;
                }
            }

            let pivot = lu[(max_row, k)];
            // Written so that a NaN pivot is also rejected.
            if !(pivot.abs() > tolerance) {
                return Err(Error::SingularMatrix { column: k, pivot });
            }

            if max_row != k {
                for j in 0..n {
                    lu.swap((k, j), (max_row, j));
                }
                permutation.swap(k, max_row);
                sign = -sign;
            }

            for i in (k + 1)..n {
                let factor = lu[(i, k)] / lu[(k, k)];
                lu[(i, k)] = factor;
                for j in (k + 1)..n {
                    lu[(i, j)] -= factor * lu[(k, j)];
                }
            }
        }

        Ok(Self {
            lu,
            permutation,
            sign,
            row_scale,
            col_scale,
        })
    }

    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Natural log of the determinant, or `None` when the determinant is not
    /// strictly positive.
    pub fn ln_determinant(&self) -> Option<f64> {
        let mut sign = self.sign;
        let mut ln_abs = 0.0;
        for &u in self.lu.diag() {
            if u < 0.0 {
                sign = -sign;
            }
            ln_abs += u.abs().ln();
        }
        ln_abs += self.row_scale.mapv(f64::ln).sum() + self.col_scale.mapv(f64::ln).sum();

        if sign > 0.0 { Some(ln_abs) } else { None }
    }

    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        let n = self.dim();
        if b.len() != n {
            return Err(Error::mismatch("right-hand side", n, b.len()));
        }

        let mut x = Vector::zeros(n);
        for i in 0..n {
            let row = self.permutation[i];
            x[i] = b[row] / self.row_scale[row];
            for j in 0..i {
                x[i] -= self.lu[(i, j)] * x[j];
            }
        }
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                x[i] -= self.lu[(i, j)] * x[j];
            }
            x[i] /= self.lu[(i, i)];
        }

        Ok(x / &self.col_scale)
    }

    pub fn solve_matrix(&self, b: &Matrix) -> Result<Matrix> {
        let n = self.dim();
        if b.nrows() != n {
            return Err(Error::mismatch("right-hand side", n, b.nrows()));
        }

        let mut x = Matrix::zeros(b.raw_dim());
        for (j, column) in b.columns().into_iter().enumerate() {
            let solved = self.solve(&column.to_owned())?;
            x.column_mut(j).assign(&solved);
        }
        Ok(x)
    }

    pub fn inverse(&self) -> Result<Matrix> {
        self.solve_matrix(&Matrix::eye(self.dim()))
    }
}

// All-zero lines keep a unit scale so elimination reports them as singular.
fn largest_magnitude(line: ArrayView1<'_, f64>) -> f64 {
    let largest = line.fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if largest > 0.0 { largest } else { 1.0 }
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "pivot tolerance must be finite and non-negative, got {}",
            tolerance
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_solve_requires_pivoting() {
        let a = array![[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
        let b = array![5.0, 3.0, 6.0];

        let lu = LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE).unwrap();
        let x = lu.solve(&b).unwrap();

        assert_abs_diff_eq!(a.dot(&x), b, epsilon = 1e-12);
    }

    #[test]
    fn test_ln_determinant() {
        let a = array![[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 0.5]];
        let lu = LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE).unwrap();
        assert_abs_diff_eq!(lu.ln_determinant().unwrap(), 3.0_f64.ln(), epsilon = 1e-12);

        // det = 4·6e-3 - 7e-6·2e3 = 0.01, with rows and columns on different scales.
        let b = array![[4.0, 7e-6], [2e3, 6e-3]];
        let lu = LuDecomposition::factor(&b, DEFAULT_PIVOT_TOLERANCE).unwrap();
        assert_abs_diff_eq!(lu.ln_determinant().unwrap(), 0.01_f64.ln(), epsilon = 1e-9);
    }

    #[test]
    fn test_negative_determinant_has_no_log() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let lu = LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE).unwrap();

        assert!(lu.ln_determinant().is_none());
        assert_abs_diff_eq!(lu.solve(&array![2.0, 3.0]).unwrap(), array![3.0, 2.0], epsilon = 1e-12);
    }

    #[test]
    fn test_inverse() {
        let a = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE)
            .unwrap()
            .inverse()
            .unwrap();

        assert_abs_diff_eq!(a.dot(&inv), Matrix::eye(2), epsilon = 1e-12);
    }

    #[test]
    fn test_singular_matrix() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let err = LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE).unwrap_err();
        assert!(matches!(err, Error::SingularMatrix { column: 1, .. }));

        let zero = Matrix::zeros((3, 3));
        assert!(LuDecomposition::factor(&zero, DEFAULT_PIVOT_TOLERANCE).is_err());
    }

    #[test]
    fn test_singularity_is_scale_invariant() {
        let a = array![[1e-12, 0.0], [0.0, 2e-12]];
        assert!(LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE).is_ok());

        let nearly = array![[1.0, 1.0], [1.0, 1.0 + 1e-13]];
        assert!(LuDecomposition::factor(&nearly, DEFAULT_PIVOT_TOLERANCE).is_err());
        assert!(LuDecomposition::factor(&nearly, 0.0).is_ok());
    }

    #[test]
    fn test_singularity_ignores_column_units() {
        // Gram matrix of an intercept and a feature measured in micro-units.
        let x = array![[1.0, 1e-6], [1.0, 2e-6], [1.0, 3e-6]];
        let gram = x.t().dot(&x);
        let rhs = x.t().dot(&array![7.0, 9.0, 11.0]);

        let lu = LuDecomposition::factor(&gram, DEFAULT_PIVOT_TOLERANCE).unwrap();
        assert_abs_diff_eq!(lu.solve(&rhs).unwrap(), array![5.0, 2e6], epsilon = 1e-3);

        let mut nearly = array![[1.0, 1.0], [1.0, 1.0 + 1e-13]];
        nearly.column_mut(1).mapv_inplace(|v| v * 1e-8);
        assert!(LuDecomposition::factor(&nearly, DEFAULT_PIVOT_TOLERANCE).is_err());

        let mut rows = array![[3.0, 1.0], [1.0, 2.0]];
        rows.row_mut(0).mapv_inplace(|v| v * 1e9);
        let inv = LuDecomposition::factor(&rows, DEFAULT_PIVOT_TOLERANCE)
            .unwrap()
            .inverse()
            .unwrap();
        assert_abs_diff_eq!(rows.dot(&inv), Matrix::eye(2), epsilon = 1e-9);
    }

    #[test]
    fn test_non_square_and_bad_tolerance() {
        let a = Matrix::zeros((2, 3));
        assert!(matches!(
            LuDecomposition::factor(&a, DEFAULT_PIVOT_TOLERANCE),
            Err(Error::DimensionMismatch { .. })
        ));

        let b = Matrix::eye(2);
        assert!(matches!(
            LuDecomposition::factor(&b, -1.0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
