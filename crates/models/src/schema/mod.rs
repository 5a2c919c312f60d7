//! Output projections of entities.
//!
//! A schema is built fresh from an entity on every conversion and validated
//! before it leaves the service layer. An entity whose shape violates the
//! schema's rules is reported as [`ModelError::Validation`]; nothing is
//! coerced into range.

use validator::Validate;

use crate::errors::ModelError;

pub mod tenant;
pub mod upstream;

pub use tenant::TenantSchema;
pub use upstream::UpstreamSchema;

/// Integer identity assigned by the repository.
pub type EntityId = i32;

/// Anything carrying a repository-assigned identity.
pub trait Identified {
    fn id(&self) -> EntityId;
}

/// Validated projection of entity `E`.
///
/// `Into<E>` gives back an entity with the same identity, so a value can go
/// entity → schema → entity without losing its id.
pub trait Schema<E>: From<E> + Into<E> + Validate + Identified + Sized {
    /// Project `entity` and check the result against the schema's rules.
    fn model_validate(entity: E) -> Result<Self, ModelError> {
        let schema = Self::from(entity);
        schema.validate()?;
        Ok(schema)
    }

    /// Validate every entity, failing on the first mismatch.
    fn model_validate_all<I>(entities: I) -> Result<Vec<Self>, ModelError>
    where
        I: IntoIterator<Item = E>,
    {
        entities.into_iter().map(Self::model_validate).collect()
    }
}
