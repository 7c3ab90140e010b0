//! Catalog attribute model.
//!
//! Products and collections carry custom attributes declared by schema:
//! - [`AttributeDefinition`] / [`AttributeGroup`] — per-attribute schema and display grouping
//! - [`AttributeSchema`] — all definitions for one [`AttributableType`], validated at startup
//! - [`CatalogEntity`] — an entity and its typed attribute values
//! - [`AttributeSet`] — binds a schema to a field type registry and moves raw
//!   attribute data in and out of entities
//! - [`system_schema`] — the built-in `name` / `description` attributes
//!
//! Values themselves are `catalog_fields` field types; this crate never
//! inspects raw JSON beyond handing it to the registry.

mod attribute;
mod binder;
mod defaults;
mod entity;
mod error;
mod schema;

pub use attribute::{AttributableType, AttributeDefinition, AttributeGroup};
pub use binder::AttributeSet;
pub use defaults::{system_attributes, system_group, system_schema};
pub use entity::CatalogEntity;
pub use error::{CatalogError, CatalogResult};
pub use schema::AttributeSchema;
