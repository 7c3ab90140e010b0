//! Core type definitions for the catalog attribute system.
//!
//! This crate defines the small, domain-agnostic types shared by the field
//! type core and the catalog model:
//! - Entity and attribute identifiers (UUID v7)
//! - Locale codes used to key translated values
//!
//! Field types, attribute definitions and catalog entities live in
//! `catalog-fields` and `catalog-model`, not here.

mod ids;
mod locale;

pub use ids::{AttributeId, EntityId};
pub use locale::LocaleCode;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid locale code: {0:?}")]
    InvalidLocale(String),
}
