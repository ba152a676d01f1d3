use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("matrix is singular or nearly singular (pivot {pivot:e} in column {column})")]
    SingularMatrix { column: usize, pivot: f64 },

    #[error("covariance matrix{} is singular", .class.map(|c| format!(" of class {}", c)).unwrap_or_default())]
    SingularCovariance { class: Option<i64> },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("input must have at least one sample and one feature")]
    EmptyInput,

    #[error("model not fitted, call fit() first")]
    NotFitted,
}

impl Error {
    pub(crate) fn mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Error::DimensionMismatch {
            context,
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_covariance_message() {
        let shared = Error::SingularCovariance { class: None };
        let per_class = Error::SingularCovariance { class: Some(3) };

        assert_eq!(shared.to_string(), "covariance matrix is singular");
        assert_eq!(per_class.to_string(), "covariance matrix of class 3 is singular");
    }

    #[test]
    fn test_mismatch_message() {
        let err = Error::mismatch("labels", 4, 3);
        assert_eq!(
            err.to_string(),
            "dimension mismatch in labels: expected 4, found 3"
        );
    }
}
