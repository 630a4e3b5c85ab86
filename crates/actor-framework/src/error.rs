//! # Framework Errors
//!
//! Common error types shared by every store actor and client. Entity-specific
//! failures travel boxed inside [`FrameworkError::EntityError`] and can be recovered
//! with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error if this is an `EntityError` of type `E`.
    /// Any other error is handed back unchanged.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(boxed) => match boxed.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("price must not be negative")]
    struct NegativePrice;

    #[test]
    fn test_entity_error_round_trips_through_box() {
        let wrapped = FrameworkError::EntityError(Box::new(NegativePrice));
        assert_eq!(wrapped.into_entity_error::<NegativePrice>().unwrap(), NegativePrice);
    }

    #[test]
    fn test_other_errors_are_returned_unchanged() {
        let err = FrameworkError::ActorClosed.into_entity_error::<NegativePrice>();
        assert!(matches!(err, Err(FrameworkError::ActorClosed)));

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let err = foreign.into_entity_error::<NegativePrice>();
        assert!(matches!(err, Err(FrameworkError::EntityError(_))));
    }
}
