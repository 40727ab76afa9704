//! Domain layer - errors and immutable geometry values

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
