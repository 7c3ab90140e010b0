use crate::error::{FieldTypeError, FieldTypeResult};
use crate::field_type::{json_kind, FieldContext, FieldType};
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Bounds and precision declared in a number attribute's configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NumberConfig {
    /// Inclusive lower bound.
    #[serde(default)]
    pub min: Option<serde_json::Number>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub max: Option<serde_json::Number>,
    #[serde(default)]
    pub integer_only: bool,
}

/// A JSON number, optionally bounded.
///
/// The number is kept as a [`serde_json::Number`] so integers serialize
/// back exactly as they were stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Number {
    value: Option<serde_json::Number>,
    config: NumberConfig,
}

impl Number {
    /// Creates an unbounded number value.
    pub fn new(value: impl Into<serde_json::Number>) -> Self {
        Self {
            value: Some(value.into()),
            config: NumberConfig::default(),
        }
    }

    pub fn config(&self) -> &NumberConfig {
        &self.config
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_ref().and_then(serde_json::Number::as_f64)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_ref().and_then(serde_json::Number::as_i64)
    }

    fn validate(&self, raw: Value) -> FieldTypeResult<Option<serde_json::Number>> {
        let n = match raw {
            Value::Null => return Ok(None),
            Value::Number(n) => n,
            other => {
                return Err(FieldTypeError::validation(
                    Self::IDENTIFIER,
                    format!("a number or null, got {}", json_kind(&other)),
                ));
            }
        };

        if self.config.integer_only && !(n.is_i64() || n.is_u64()) {
            return Err(FieldTypeError::validation(
                Self::IDENTIFIER,
                format!("an integer, got {n}"),
            ));
        }

        let below = self
            .config
            .min
            .as_ref()
            .is_some_and(|min| compare(&n, min) == Some(Ordering::Less));
        let above = self
            .config
            .max
            .as_ref()
            .is_some_and(|max| compare(&n, max) == Some(Ordering::Greater));
        if below || above {
            return Err(FieldTypeError::validation(
                Self::IDENTIFIER,
                format!("{}, got {n}", self.range_description()),
            ));
        }

        Ok(Some(n))
    }

    fn range_description(&self) -> String {
        match (&self.config.min, &self.config.max) {
            (Some(min), Some(max)) => format!("between {min} and {max}"),
            (Some(min), None) => format!("at least {min}"),
            (None, Some(max)) => format!("at most {max}"),
            (None, None) => "a number".to_string(),
        }
    }
}

/// Orders two JSON numbers. Integers compare exactly; anything involving a
/// float compares as `f64`.
fn compare(a: &serde_json::Number, b: &serde_json::Number) -> Option<Ordering> {
    match (as_i128(a), as_i128(b)) {
        (Some(a), Some(b)) => Some(a.cmp(&b)),
        _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

fn as_i128(n: &serde_json::Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

impl FieldType for Number {
    const IDENTIFIER: &'static str = "number";
    type Stored = Option<serde_json::Number>;

    fn build(raw: Value, ctx: &FieldContext<'_>) -> FieldTypeResult<Self> {
        let config: NumberConfig = ctx.parse_configuration(Self::IDENTIFIER)?;
        if let (Some(min), Some(max)) = (&config.min, &config.max) {
            if compare(min, max) == Some(Ordering::Greater) {
                return Err(FieldTypeError::configuration(
                    Self::IDENTIFIER,
                    format!("min ({min}) is greater than max ({max})"),
                ));
            }
        }

        let mut number = Self { value: None, config };
        number.set_value(raw)?;
        Ok(number)
    }

    fn value(&self) -> &Option<serde_json::Number> {
        &self.value
    }

    fn set_value(&mut self, raw: Value) -> FieldTypeResult<()> {
        self.value = self.validate(raw)?;
        Ok(())
    }

    fn to_json(&self) -> Value {
        self.value.clone().map_or(Value::Null, Value::Number)
    }

    fn to_display_string(&self) -> String {
        self.value.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
