use gaussreg::sweep::{best_by_test_mse, iterative_ridge_path, polynomial_path, ridge_path};
use gaussreg::synthetic::polynomial_curve;
use gaussreg::{polynomial_features, ConjugateGradient, Dataset};

fn main() -> Result<(), gaussreg::Error> {
    println!("=== Ridge Regression Sweep Example ===\n");

    // y = 1 + 0.5x - 0.8x² + 0.4x³ + noise
    let coefs = [1.0, 0.5, -0.8, 0.4];
    let train = polynomial_curve(&coefs, 30, (-1.5, 1.5), 0.3, 10)?;
    let test = polynomial_curve(&coefs, 100, (-1.5, 1.5), 0.3, 11)?;

    println!("--- Polynomial degree sweep (lambda = 1.0) ---");
    for record in polynomial_path(&train, &test, 0, 6, 1.0)? {
        println!(
            "Degree {}: OLE test MSE={:.4}, ridge test MSE={:.4}",
            record.degree, record.unregularized.test_mse, record.regularized.test_mse
        );
    }

    let degree: i32 = 6;
    let train = Dataset::new(polynomial_features(train.features.column(0), degree)?, train.labels)?;
    let test = Dataset::new(polynomial_features(test.features.column(0), degree)?, test.labels)?;

    let lambdas: Vec<f64> = (-4..=3).map(|e| 10f64.powi(e)).collect();

    println!("\n--- Closed-form ridge, degree {} ---", degree);
    let records = ridge_path(&train, &test, &lambdas)?;
    for record in &records {
        println!(
            "lambda={:>8.4}: train MSE={:.4}, test MSE={:.4}",
            record.lambda, record.train_mse, record.test_mse
        );
    }
    if let Some(best) = best_by_test_mse(&records) {
        println!("Best lambda: {}", best.lambda);
    }

    println!("\n--- Conjugate gradient ridge, degree {} ---", degree);
    let minimizer = ConjugateGradient::new().max_iter(500);
    for record in iterative_ridge_path(&train, &test, &lambdas, minimizer, None)? {
        println!(
            "lambda={:>8.4}: train MSE={:.4}, test MSE={:.4}",
            record.lambda, record.train_mse, record.test_mse
        );
    }

    Ok(())
}
