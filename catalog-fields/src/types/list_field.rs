use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{json_kind, FieldContext, FieldType};
use serde_json::Value;
use std::fmt;

/// An ordered list of strings, e.g. bullet points or search keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListField {
    value: Vec<String>,
}

impl ListField {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn validate(raw: Value) -> FieldTypeResult<Vec<String>> {
        let items = match raw {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            other => {
                return Err(FieldTypeError::validation(
                    Self::IDENTIFIER,
                    format!("an array of strings or null, got {}", json_kind(&other)),
                ));
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s),
                other => Err(FieldTypeError::validation(
                    Self::IDENTIFIER,
                    format!("an array of strings, item {i} is {}", json_kind(&other)),
                )),
            })
            .collect()
    }
}

impl FieldType for ListField {
    const IDENTIFIER: &'static str = "list-field";
    type Stored = Vec<String>;

    fn build(raw: Value, _ctx: &FieldContext<'_>) -> FieldTypeResult<Self> {
        Ok(Self {
            value: Self::validate(raw)?,
        })
    }

    fn value(&self) -> &Vec<String> {
        &self.value
    }

    fn set_value(&mut self, raw: Value) -> FieldTypeResult<()> {
        self.value = Self::validate(raw)?;
        Ok(())
    }

    fn to_json(&self) -> Value {
        Value::Array(self.value.iter().cloned().map(Value::String).collect())
    }

    fn to_display_string(&self) -> String {
        self.value.join(", ")
    }
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
