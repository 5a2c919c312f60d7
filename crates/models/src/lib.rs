//! Persistence entities and their validated schema projections.
//!
//! Entities are SeaORM models owned by repositories; schemas are the
//! outward-facing shapes services hand back to callers.

pub mod errors;
pub mod db;
pub mod schema;
pub mod tenant;
pub mod upstream;

pub use schema::{EntityId, Identified, Schema};
