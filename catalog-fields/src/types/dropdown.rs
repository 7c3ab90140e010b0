use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{json_kind, FieldContext, FieldType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// A single option of a dropdown attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label if set, otherwise the stored value.
    pub fn display(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

#[derive(Debug, Default, Deserialize)]
struct DropdownConfig {
    #[serde(default)]
    options: Vec<SelectOption>,
}

/// One value picked from the options declared in the attribute's
/// configuration. Without declared options any string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdown {
    value: Option<String>,
    options: Vec<SelectOption>,
}

impl Dropdown {
    /// Creates an empty dropdown offering `options`.
    pub fn with_options(options: Vec<SelectOption>) -> Self {
        Self {
            value: None,
            options,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Returns the declared option matching the current value.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        let value = self.value.as_deref()?;
        self.options.iter().find(|o| o.value == value)
    }

    fn validate(&self, raw: Value) -> FieldTypeResult<Option<String>> {
        let s = match raw {
            Value::Null => return Ok(None),
            Value::String(s) => s,
            other => {
                return Err(FieldTypeError::validation(
                    Self::IDENTIFIER,
                    format!("a string or null, got {}", json_kind(&other)),
                ));
            }
        };

        if !self.options.is_empty() && !self.options.iter().any(|o| o.value == s) {
            let allowed: Vec<&str> = self.options.iter().map(|o| o.value.as_str()).collect();
            return Err(FieldTypeError::validation(
                Self::IDENTIFIER,
                format!("one of [{}], got {s:?}", allowed.join(", ")),
            ));
        }
        Ok(Some(s))
    }
}

impl FieldType for Dropdown {
    const IDENTIFIER: &'static str = "dropdown";
    type Stored = Option<String>;

    fn build(raw: Value, ctx: &FieldContext<'_>) -> FieldTypeResult<Self> {
        let config: DropdownConfig = ctx.parse_configuration(Self::IDENTIFIER)?;
        let mut seen = HashSet::new();
        if let Some(dup) = config.options.iter().find(|o| !seen.insert(o.value.as_str())) {
            return Err(FieldTypeError::configuration(
                Self::IDENTIFIER,
                format!("duplicate option {:?}", dup.value),
            ));
        }

        let mut dropdown = Self::with_options(config.options);
        dropdown.set_value(raw)?;
        Ok(dropdown)
    }

    fn value(&self) -> &Option<String> {
        &self.value
    }

    fn set_value(&mut self, raw: Value) -> FieldTypeResult<()> {
        self.value = self.validate(raw)?;
        Ok(())
    }

    fn to_json(&self) -> Value {
        self.value.clone().map_or(Value::Null, Value::String)
    }

    fn to_display_string(&self) -> String {
        match self.selected_option() {
            Some(option) => option.display().to_string(),
            None => self.value.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
