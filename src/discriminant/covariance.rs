use super::ClassIndex;
use crate::{Error, Labels, Matrix, Result};
use ndarray::{ArrayView2, Axis};
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct SharedGaussian {
    classes: ClassIndex,
    means: Matrix,
    covariance: Matrix,
}

impl SharedGaussian {
    pub fn new(classes: ClassIndex, means: Matrix, covariance: Matrix) -> Result<Self> {
        check_means(&classes, &means)?;
        check_square(&covariance, means.nrows())?;
        Ok(Self {
            classes,
            means,
            covariance,
        })
    }

    pub fn classes(&self) -> &ClassIndex {
        &self.classes
    }

    pub fn means(&self) -> &Matrix {
        &self.means
    }

    pub fn covariance(&self) -> &Matrix {
        &self.covariance
    }

    pub fn n_features(&self) -> usize {
        self.means.nrows()
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}

#[derive(Clone, Debug)]
pub struct PerClassGaussian {
    classes: ClassIndex,
    means: Matrix,
    covariances: Vec<Matrix>,
}

impl PerClassGaussian {
    pub fn new(classes: ClassIndex, means: Matrix, covariances: Vec<Matrix>) -> Result<Self> {
        check_means(&classes, &means)?;
        if covariances.len() != classes.len() {
            return Err(Error::mismatch("class covariances", classes.len(), covariances.len()));
        }
        for covariance in &covariances {
            check_square(covariance, means.nrows())?;
        }
        Ok(Self {
            classes,
            means,
            covariances,
        })
    }

    pub fn classes(&self) -> &ClassIndex {
        &self.classes
    }

    pub fn means(&self) -> &Matrix {
        &self.means
    }

    pub fn covariances(&self) -> &[Matrix] {
        &self.covariances
    }

    pub fn n_features(&self) -> usize {
        self.means.nrows()
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}

/// Class means and the pooled covariance of `x`.
///
/// The covariance uses the global column means and divides by the total
/// number of rows; it is not an average of per-class covariances.
pub fn estimate_shared(x: &Matrix, y: &Labels) -> Result<SharedGaussian> {
    let classes = check_training_input(x, y)?;
    let members = class_members(&classes, y)?;

    let means = class_means(x, &members);
    let covariance = covariance(x.view());

    log::debug!(
        "estimated shared covariance: {} samples, {} features, {} classes",
        x.nrows(),
        x.ncols(),
        classes.len()
    );

    Ok(SharedGaussian {
        classes,
        means,
        covariance,
    })
}

pub fn estimate_per_class(x: &Matrix, y: &Labels) -> Result<PerClassGaussian> {
    let classes = check_training_input(x, y)?;
    let members = class_members(&classes, y)?;

    let means = class_means(x, &members);
    let covariances: Vec<Matrix> = members
        .par_iter()
        .map(|rows| covariance(x.select(Axis(0), rows).view()))
        .collect();

    for (class, rows) in classes.classes().iter().zip(&members) {
        if rows.len() <= x.ncols() {
            log::debug!(
                "class {} has {} samples for {} features, covariance is rank deficient",
                class,
                rows.len(),
                x.ncols()
            );
        }
    }

    log::debug!(
        "estimated per-class covariances: {} samples, {} features, {} classes",
        x.nrows(),
        x.ncols(),
        classes.len()
    );

    Ok(PerClassGaussian {
        classes,
        means,
        covariances,
    })
}

fn check_training_input(x: &Matrix, y: &Labels) -> Result<ClassIndex> {
    if x.nrows() != y.len() {
        return Err(Error::mismatch("training labels", x.nrows(), y.len()));
    }
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(ClassIndex::from_labels(y))
}

fn check_means(classes: &ClassIndex, means: &Matrix) -> Result<()> {
    if classes.is_empty() || means.nrows() == 0 {
        return Err(Error::EmptyInput);
    }
    if means.ncols() != classes.len() {
        return Err(Error::mismatch("class means", classes.len(), means.ncols()));
    }
    Ok(())
}

fn check_square(covariance: &Matrix, n_features: usize) -> Result<()> {
    if covariance.nrows() != n_features {
        return Err(Error::mismatch("covariance rows", n_features, covariance.nrows()));
    }
    if covariance.ncols() != n_features {
        return Err(Error::mismatch("covariance columns", n_features, covariance.ncols()));
    }
    Ok(())
}

fn class_members(classes: &ClassIndex, y: &Labels) -> Result<Vec<Vec<usize>>> {
    let mut members = vec![Vec::new(); classes.len()];
    for (row, class) in classes.encode(y)?.into_iter().enumerate() {
        members[class].push(row);
    }
    Ok(members)
}

fn class_means(x: &Matrix, members: &[Vec<usize>]) -> Matrix {
    let mut means = Matrix::zeros((x.ncols(), members.len()));
    for (class, rows) in members.iter().enumerate() {
        let sum = x.select(Axis(0), rows).sum_axis(Axis(0));
        means.column_mut(class).assign(&(sum / rows.len() as f64));
    }
    means
}

// Rows are samples; divisor is the row count.
fn covariance(rows: ArrayView2<'_, f64>) -> Matrix {
    let n = rows.nrows() as f64;
    let mean = rows.sum_axis(Axis(0)) / n;
    let centered = &rows - &mean;
    centered.t().dot(&centered) / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn assert_symmetric(m: &Matrix) {
        assert_abs_diff_eq!(m.view(), m.t(), epsilon = 1e-12);
    }

    #[test]
    fn test_shared_single_feature() {
        let x = array![[0.0], [1.0], [2.0], [3.0]];
        let y = array![1, 1, 2, 2];

        let model = estimate_shared(&x, &y).unwrap();

        assert_eq!(model.classes().classes(), &[1, 2]);
        assert_abs_diff_eq!(model.means(), &array![[0.5, 2.5]], epsilon = 1e-12);
        assert_abs_diff_eq!(model.covariance(), &array![[1.25]], epsilon = 1e-12);
    }

    #[test]
    fn test_shared_covariance_is_pooled_over_all_rows() {
        let x = array![[1.0, 2.0], [3.0, 1.0], [5.0, 7.0], [7.0, 6.0]];
        let y = array![0, 0, 1, 1];

        let model = estimate_shared(&x, &y).unwrap();

        // Global means are (4, 4).
        let expected = array![[5.0, 4.5], [4.5, 6.5]];
        assert_abs_diff_eq!(model.covariance(), &expected, epsilon = 1e-12);
        assert_symmetric(model.covariance());
    }

    #[test]
    fn test_per_class_covariances() {
        let x = array![[1.0, 2.0], [3.0, 1.0], [5.0, 7.0], [7.0, 6.0], [6.0, 8.0]];
        let y = array![4, 4, 9, 9, 9];

        let model = estimate_per_class(&x, &y).unwrap();

        assert_eq!(model.n_classes(), 2);
        assert_abs_diff_eq!(
            model.means(),
            &array![[2.0, 6.0], [1.5, 7.0]],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            &model.covariances()[0],
            &array![[1.0, -0.5], [-0.5, 0.25]],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            &model.covariances()[1],
            &array![[2.0 / 3.0, -1.0 / 3.0], [-1.0 / 3.0, 2.0 / 3.0]],
            epsilon = 1e-12
        );
        for covariance in model.covariances() {
            assert_symmetric(covariance);
        }
    }

    #[test]
    fn test_degenerate_class_passes_through() {
        let x = array![[1.0, 1.0], [2.0, 3.0], [4.0, 4.0]];
        let y = array![0, 1, 1];

        let model = estimate_per_class(&x, &y).unwrap();
        assert_eq!(model.covariances()[0], Matrix::zeros((2, 2)));
    }

    #[test]
    fn test_label_count_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1];

        assert!(matches!(
            estimate_shared(&x, &y),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            estimate_per_class(&x, &y),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let x = Matrix::zeros((0, 2));
        let y = Labels::zeros(0);
        assert_eq!(estimate_shared(&x, &y).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_model_constructor_validates_shapes() {
        let classes = ClassIndex::new(vec![0, 1]);
        let means = array![[0.0, 1.0]];

        assert!(SharedGaussian::new(classes.clone(), means.clone(), array![[1.0]]).is_ok());
        assert!(SharedGaussian::new(classes.clone(), means.clone(), Matrix::eye(2)).is_err());
        assert!(PerClassGaussian::new(classes, means, vec![array![[1.0]]]).is_err());
    }
}
