//! Typed attribute field types for catalog entities.
//!
//! Catalog entities (products, collections) carry schema-declared custom
//! attributes. Each attribute names a field type by identifier; this crate
//! turns raw stored values into validated, serializable values of that type:
//! - [`FieldType`] — the contract: build, get, validated set, JSON, display
//! - [`types`] — the built-in variants (`text`, `translated-text`, ...)
//! - [`FieldValue`] — the closed sum over all variants
//! - [`FieldTypeRegistry`] — identifier → constructor lookup, built once at startup
//! - [`FieldsConfig`] — locale resolution and enabled types from `fields.toml`

mod config;
mod error;
mod field_type;
mod markup;
mod registry;
pub mod types;
mod value;

pub use config::{FieldsConfig, LocaleSettings};
pub use error::{ConfigError, FieldTypeError, FieldTypeResult};
pub use field_type::{FieldContext, FieldType, TextFormat};
pub use registry::{FieldConstructor, FieldTypeRegistry, BUILTIN_FIELD_TYPES};
pub use types::{
    Dropdown, ListField, Number, NumberConfig, RichText, SelectOption, Text, Toggle,
    TranslatedText,
};
pub use value::FieldValue;
