//! Service layer exposing uniform CRUD over any repository/schema pair.
//! - Repositories own persistence and decide the error for missing rows.
//! - Schemas (from `models`) validate what leaves the layer.
//! - `CrudService` composes the two and adds no state of its own.

pub mod errors;
pub mod repository;
pub mod crud;
#[cfg(test)]
pub mod test_support;

pub use crud::{CrudService, TenantService, UpstreamService};
pub use errors::ServiceError;
pub use repository::{memory::MemoryRepository, seaorm::SeaOrmRepository, Repository};
