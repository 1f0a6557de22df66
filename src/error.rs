use thiserror::Error;

/// An error raised by the currying machinery itself.
///
/// Failures of the wrapped function are never reported through this type,
/// they are returned unchanged as the function's own result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurryError {
    /// The factory was configured with an invalid argument threshold.
    #[error("min_args must be a non-negative integer (got {value})")]
    Configuration { value: String },

    /// A keyword argument was supplied twice while unique keys are enforced.
    #[error("keyword argument collision on curried function: {}", keys.join(", "))]
    KeyCollision { keys: Vec<String> },

    /// Introspection was attempted on a name other than `func`, `args` or `kwargs`.
    #[error("curried function has no attribute `{name}`")]
    UnknownAttribute { name: String },
}

impl CurryError {
    pub(crate) fn configuration(value: impl ToString) -> Self {
        Self::Configuration {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            CurryError::configuration(-1).to_string(),
            "min_args must be a non-negative integer (got -1)"
        );
        assert_eq!(
            CurryError::KeyCollision {
                keys: vec!["x".to_owned(), "y".to_owned()]
            }
            .to_string(),
            "keyword argument collision on curried function: x, y"
        );
        assert_eq!(
            CurryError::UnknownAttribute {
                name: "name".to_owned()
            }
            .to_string(),
            "curried function has no attribute `name`"
        );
    }
}
