use crate::attribute::{AttributableType, AttributeDefinition, AttributeGroup};
use crate::error::{CatalogError, CatalogResult};
use catalog_fields::FieldTypeRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// The attribute definitions and groups available to one attributable type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSchema {
    pub attributable_type: AttributableType,
    #[serde(default)]
    pub groups: Vec<AttributeGroup>,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
}

impl AttributeSchema {
    pub fn new(attributable_type: AttributableType) -> Self {
        Self {
            attributable_type,
            groups: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Parses a schema from its stored JSON form. Call
    /// [`AttributeSchema::validate`] before using it.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_group(mut self, group: AttributeGroup) -> Self {
        self.groups.push(group);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDefinition) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Looks up a definition by handle.
    pub fn get(&self, handle: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|a| a.handle == handle)
    }

    pub fn group(&self, handle: &str) -> Option<&AttributeGroup> {
        self.groups.iter().find(|g| g.handle == handle)
    }

    /// Definitions ordered by group position, then attribute position.
    /// Ungrouped attributes come last; ties break on handle.
    pub fn ordered(&self) -> Vec<&AttributeDefinition> {
        let mut attributes: Vec<_> = self.attributes.iter().collect();
        let rank = |a: &AttributeDefinition| {
            let group_position = a
                .attribute_group
                .as_deref()
                .and_then(|g| self.group(g))
                .map_or(u32::MAX, |g| g.position);
            (group_position, a.position)
        };
        attributes.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.handle.cmp(&b.handle)));
        attributes
    }

    /// Definitions in one group, by position.
    pub fn attributes_in_group(&self, group: &str) -> Vec<&AttributeDefinition> {
        self.ordered()
            .into_iter()
            .filter(|a| a.attribute_group.as_deref() == Some(group))
            .collect()
    }

    /// Distinct field type identifiers used by the definitions.
    pub fn field_types(&self) -> BTreeSet<&str> {
        self.attributes.iter().map(|a| a.field_type.as_str()).collect()
    }

    /// Checks the schema for internal consistency and against a registry:
    /// unique handles, matching attributable types, declared groups, known
    /// field types, and defaults that fit their field type.
    ///
    /// Intended to run once at startup so bad definitions fail fast.
    pub fn validate(&self, registry: &FieldTypeRegistry) -> CatalogResult<()> {
        let mut handles = HashSet::new();
        for attribute in &self.attributes {
            if !handles.insert(attribute.handle.as_str()) {
                return Err(CatalogError::DuplicateHandle(attribute.handle.clone()));
            }
            if attribute.attribute_type != self.attributable_type {
                return Err(CatalogError::WrongAttributable {
                    handle: attribute.handle.clone(),
                    expected: self.attributable_type,
                    found: attribute.attribute_type,
                });
            }
            if let Some(group) = &attribute.attribute_group {
                if self.group(group).is_none() {
                    return Err(CatalogError::UnknownGroup {
                        handle: attribute.handle.clone(),
                        group: group.clone(),
                    });
                }
            }
        }

        registry.ensure_known(self.field_types())?;

        // Building a neutral value also validates the configuration.
        for attribute in &self.attributes {
            let raw = attribute.default_value.clone().unwrap_or_default();
            registry
                .construct(&attribute.field_type, raw, &attribute.configuration)
                .map_err(|e| CatalogError::field(&attribute.handle, e))?;
        }

        debug!(
            attributable = %self.attributable_type,
            attributes = self.attributes.len(),
            "Attribute schema validated"
        );
        Ok(())
    }
}
