use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Culture-invariant date pattern used in message parameters (`dd/MM/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Format a date for an error message parameter.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Typed value carried by an error message parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Null,
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Text(value) => f.write_str(value),
            ParameterValue::Integer(value) => write!(f, "{value}"),
            ParameterValue::Date(value) => f.write_str(&format_date(*value)),
            ParameterValue::Null => Ok(()),
        }
    }
}

impl Serialize for ParameterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterValue::Null => serializer.serialize_none(),
            other => serializer.collect_str(other),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Text(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<NaiveDate> for ParameterValue {
    fn from(value: NaiveDate) -> Self {
        ParameterValue::Date(value)
    }
}

impl<T: Into<ParameterValue>> From<Option<T>> for ParameterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParameterValue::Null)
    }
}

/// Named parameter used when rendering a violation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessageParameter {
    pub name: String,
    pub value: ParameterValue,
}

impl ErrorMessageParameter {
    pub fn new(name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A compliance violation raised by one rule for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub rule_name: String,
    pub learn_ref_number: Option<String>,
    pub aim_sequence_number: Option<i64>,
    pub parameters: Vec<ErrorMessageParameter>,
}

impl ValidationError {
    /// Look up a parameter value by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters
            .iter()
            .find(|parameter| parameter.name == name)
            .map(|parameter| &parameter.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2018, 7, 1).unwrap();
        assert_eq!(ParameterValue::from(date).to_string(), "01/07/2018");
    }

    #[test]
    fn missing_values_become_null() {
        let value: ParameterValue = Option::<NaiveDate>::None.into();
        assert_eq!(value, ParameterValue::Null);
        assert_eq!(value.to_string(), "");
    }

    #[test]
    fn parameter_serializes_as_rendered_text() {
        let parameter = ErrorMessageParameter::new(
            "LearnStartDate",
            NaiveDate::from_ymd_opt(2019, 8, 1).unwrap(),
        );
        let json = serde_json::to_string(&parameter).expect("serialize parameter");
        assert_eq!(json, r#"{"name":"LearnStartDate","value":"01/08/2019"}"#);
    }
}
