use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{json_kind, FieldContext, FieldType};
use serde_json::Value;
use std::fmt;

/// An on/off flag. `null` means off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    value: bool,
}

impl Toggle {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn is_on(&self) -> bool {
        self.value
    }
}

impl FieldType for Toggle {
    const IDENTIFIER: &'static str = "toggle";
    type Stored = bool;

    fn build(raw: Value, _ctx: &FieldContext<'_>) -> FieldTypeResult<Self> {
        let mut toggle = Self::default();
        toggle.set_value(raw)?;
        Ok(toggle)
    }

    fn value(&self) -> &bool {
        &self.value
    }

    fn set_value(&mut self, raw: Value) -> FieldTypeResult<()> {
        self.value = match raw {
            Value::Null => false,
            Value::Bool(b) => b,
            other => {
                return Err(FieldTypeError::validation(
                    Self::IDENTIFIER,
                    format!("a boolean or null, got {}", json_kind(&other)),
                ));
            }
        };
        Ok(())
    }

    fn to_json(&self) -> Value {
        Value::Bool(self.value)
    }

    fn to_display_string(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
