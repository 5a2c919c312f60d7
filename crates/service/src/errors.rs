use thiserror::Error;

/// Errors raised below the service and passed through it unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }

    /// True when an entity failed its schema's rules on the way out.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Model(models::errors::ModelError::Validation(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn not_found_names_the_entity() {
        let e = ServiceError::not_found("tenant");
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "not found: tenant not found");
    }

    #[test]
    fn model_errors_lift_with_question_mark() {
        fn lift() -> Result<(), ServiceError> {
            Err::<(), _>(ModelError::Validation("name: too short".into()))?;
            Ok(())
        }
        let e = lift().unwrap_err();
        assert!(e.is_validation());
        assert!(!e.is_not_found());
    }
}
