//! Binds attribute values to catalog entities through a schema and registry.

use crate::entity::CatalogEntity;
use crate::error::{CatalogError, CatalogResult};
use crate::schema::AttributeSchema;
use crate::AttributeDefinition;
use catalog_fields::{FieldTypeRegistry, FieldValue};
use catalog_types::EntityId;
use serde_json::Value;
use tracing::{debug, warn};

/// A validated schema paired with the registry that builds its values.
///
/// All attribute values reach an entity through here, so each is an
/// instance of the field type its definition names.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSet<'a> {
    schema: &'a AttributeSchema,
    registry: &'a FieldTypeRegistry,
}

impl<'a> AttributeSet<'a> {
    /// Validates `schema` against `registry` and binds them.
    pub fn new(schema: &'a AttributeSchema, registry: &'a FieldTypeRegistry) -> CatalogResult<Self> {
        schema.validate(registry)?;
        Ok(Self { schema, registry })
    }

    pub fn schema(&self) -> &'a AttributeSchema {
        self.schema
    }

    /// Creates an entity holding every attribute's default (or neutral) value.
    pub fn new_entity(&self, id: EntityId) -> CatalogResult<CatalogEntity> {
        self.hydrate(id, &Value::Null)
    }

    /// Loads an entity from stored attribute data.
    ///
    /// Missing or `null` attributes take their default value. Keys with no
    /// definition are skipped with a warning. Every invalid attribute is
    /// reported in one [`CatalogError::Invalid`]. Required attributes are not
    /// checked, so drafts load; see [`AttributeSet::hydrate_input`].
    pub fn hydrate(&self, id: EntityId, attribute_data: &Value) -> CatalogResult<CatalogEntity> {
        let stored = match attribute_data {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => return Err(CatalogError::InvalidAttributeData),
        };

        if let Some(stored) = stored {
            for handle in stored.keys().filter(|h| self.schema.get(h).is_none()) {
                warn!(
                    entity = %id,
                    handle = %handle,
                    attributable = %self.schema.attributable_type,
                    "Ignoring stored value for undefined attribute"
                );
            }
        }

        let mut entity = CatalogEntity::new(id, self.schema.attributable_type);
        let mut errors = Vec::new();
        for definition in self.schema.ordered() {
            let raw = stored
                .and_then(|s| s.get(&definition.handle))
                .cloned()
                .unwrap_or(Value::Null);
            match self.build(definition, raw) {
                Ok(value) => {
                    entity.attribute_data.insert(definition.handle.clone(), value);
                }
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(CatalogError::Invalid(errors));
        }
        debug!(entity = %id, attributes = entity.attribute_data.len(), "Hydrated catalog entity");
        Ok(entity)
    }

    /// Builds an entity from submitted form input: like [`hydrate`](Self::hydrate),
    /// but blank required attributes are errors too.
    pub fn hydrate_input(&self, id: EntityId, input: &Value) -> CatalogResult<CatalogEntity> {
        let entity = self.hydrate(id, input)?;
        self.validate(&entity)?;
        Ok(entity)
    }

    /// Assigns one attribute.
    ///
    /// On error the entity is unchanged.
    pub fn set_attribute(
        &self,
        entity: &mut CatalogEntity,
        handle: &str,
        raw: Value,
    ) -> CatalogResult<()> {
        self.ensure_attributable(entity)?;
        let definition = self
            .schema
            .get(handle)
            .ok_or_else(|| CatalogError::UnknownAttribute {
                handle: handle.to_string(),
                attributable: self.schema.attributable_type,
            })?;

        match entity.attribute_data.get_mut(handle) {
            Some(value) => value
                .set_value(raw)
                .map_err(|e| CatalogError::field(handle, e)),
            None => {
                let value = self.build(definition, raw)?;
                entity.attribute_data.insert(handle.to_string(), value);
                Ok(())
            }
        }
    }

    /// Checks that every required attribute has a non-blank value.
    pub fn validate(&self, entity: &CatalogEntity) -> CatalogResult<()> {
        self.ensure_attributable(entity)?;
        let errors: Vec<_> = self
            .schema
            .ordered()
            .into_iter()
            .filter(|d| d.required)
            .filter(|d| entity.attribute(&d.handle).is_none_or(FieldValue::is_blank))
            .map(|d| CatalogError::Required {
                handle: d.handle.clone(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid(errors))
        }
    }

    fn build(&self, definition: &AttributeDefinition, raw: Value) -> CatalogResult<FieldValue> {
        let raw = match (raw, &definition.default_value) {
            (Value::Null, Some(default)) => default.clone(),
            (raw, _) => raw,
        };
        self.registry
            .construct(&definition.field_type, raw, &definition.configuration)
            .map_err(|e| CatalogError::field(&definition.handle, e))
    }

    fn ensure_attributable(&self, entity: &CatalogEntity) -> CatalogResult<()> {
        if entity.entity_type == self.schema.attributable_type {
            Ok(())
        } else {
            Err(CatalogError::EntityTypeMismatch {
                expected: self.schema.attributable_type,
                found: entity.entity_type,
            })
        }
    }
}
