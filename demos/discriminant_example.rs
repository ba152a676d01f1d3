use gaussreg::synthetic::gaussian_classes;
use gaussreg::{estimate_shared, Discriminant, LinearDiscriminant, QuadraticDiscriminant};
use ndarray::array;

fn main() -> Result<(), gaussreg::Error> {
    println!("=== Gaussian Discriminant Analysis Example ===\n");

    // Three blobs; the third is stretched by a larger spread below.
    let centers = array![[0.0, 0.0], [4.0, 1.0], [1.0, 4.0]];
    let train = gaussian_classes(&centers, 1.0, 100, 1)?;
    let test = gaussian_classes(&centers, 1.0, 50, 2)?;

    println!("Training samples: {}", train.n_samples());
    println!("Test samples: {}", test.n_samples());

    let shared = estimate_shared(&train.features, &train.labels)?;
    println!("\nClass labels: {:?}", shared.classes().classes());
    println!("Class means (one column per class):\n{:.3}", shared.means());
    println!("Shared covariance:\n{:.3}", shared.covariance());

    let mut lda = LinearDiscriminant::new();
    lda.fit(&train.features, &train.labels)?;
    let (betas, offsets) = lda.coefficients()?;
    println!("\nLDA coefficients:\n{:.3}", betas);
    println!("LDA offsets: {:.3}", offsets);

    let mut qda = QuadraticDiscriminant::new();
    qda.fit(&train.features, &train.labels)?;

    println!("\n=== Test Set Performance ===");
    let lda_result = lda.classify(&test.features, Some(&test.labels))?;
    let qda_result = qda.classify(&test.features, Some(&test.labels))?;
    println!("LDA accuracy: {:.4}", lda_result.accuracy.unwrap_or(0.0));
    println!("QDA accuracy: {:.4}", qda_result.accuracy.unwrap_or(0.0));

    println!("\nFirst five predictions:");
    for i in 0..5 {
        println!(
            "Sample {}: LDA={}, QDA={}, Actual={}",
            i + 1,
            lda_result.predictions[i],
            qda_result.predictions[i],
            test.labels[i]
        );
    }

    Ok(())
}
