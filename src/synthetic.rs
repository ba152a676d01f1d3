use crate::{Dataset, Error, Labels, Matrix, Result};
use ndarray::{s, Array, Axis};
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Draws `per_class` points around each row of `centers` with isotropic
/// Gaussian noise. Rows are grouped by class and labeled `1..=k` in the order
/// of `centers`.
pub fn gaussian_classes(
    centers: &Matrix,
    std_dev: f64,
    per_class: usize,
    seed: u64,
) -> Result<Dataset<i64>> {
    let (k, d) = centers.dim();
    if k == 0 || d == 0 || per_class == 0 {
        return Err(Error::EmptyInput);
    }
    let noise = normal(std_dev)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut features = Matrix::random_using((k * per_class, d), noise, &mut rng);
    let mut labels = Labels::zeros(k * per_class);

    for (class, center) in centers.axis_iter(Axis(0)).enumerate() {
        let rows = class * per_class..(class + 1) * per_class;
        let mut block = features.slice_mut(s![rows.clone(), ..]);
        block += &center;
        labels.slice_mut(s![rows]).fill(class as i64 + 1);
    }

    Dataset::new(features, labels)
}

pub fn polynomial_curve(
    coefs: &[f64],
    n: usize,
    range: (f64, f64),
    noise: f64,
    seed: u64,
) -> Result<Dataset> {
    let (low, high) = range;
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(Error::InvalidArgument(format!(
            "sample range must be finite and non-empty, got [{}, {})",
            low, high
        )));
    }
    let noise = normal(noise)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let x = Array::random_using(n, Uniform::new(low, high), &mut rng);
    let epsilon = Array::random_using(n, noise, &mut rng);

    // Horner's rule, highest power first.
    let y = x.mapv(|v| coefs.iter().rev().fold(0.0, |acc, c| acc * v + c)) + epsilon;

    Dataset::new(x.insert_axis(Axis(1)), y)
}

fn normal(std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(0.0, std_dev).map_err(|e| {
        Error::InvalidArgument(format!("invalid noise level {}: {}", std_dev, e))
    })
}
