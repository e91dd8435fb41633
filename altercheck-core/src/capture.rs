//! Table captures: the observed or expected state of one table dump.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single typed cell value from a table dump.
///
/// Numeric values compare by value, never by rendered string, so
/// `Real(1.0)` equals `Real(1.00)` after parsing but never `Text("1.0")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Blob(a), Value::Blob(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(t) => write!(f, "{t}"),
            Value::Blob(bytes) => {
                write!(f, "x'")?;
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                write!(f, "'")
            }
        }
    }
}

/// One table dump: column names, column types, and rows, or a single
/// execution error message when the dump never happened.
///
/// Shape invariants (checked by [`Capture::validate`]):
/// - `schema.len() == types.len()`
/// - every row length equals `schema.len()`
/// - `error_message` set ⇔ `schema`, `types`, and `data` all empty
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Capture {
    pub schema: Vec<String>,
    pub types: Vec<String>,
    pub data: Vec<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Capture {
    /// A capture representing a failed execution. Only `error_message`
    /// is populated.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            schema: Vec::new(),
            types: Vec::new(),
            data: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    /// True when this capture records an execution failure.
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Check the shape invariants. Returns a description of the first
    /// violation, used to classify bad fixtures as corrupt.
    pub fn validate(&self) -> Result<(), String> {
        match &self.error_message {
            Some(message) if message.is_empty() => {
                return Err("error_message is present but empty".to_string());
            }
            Some(_) => {
                if !self.schema.is_empty() || !self.types.is_empty() || !self.data.is_empty() {
                    return Err(
                        "error capture must have empty schema, types, and data".to_string()
                    );
                }
                return Ok(());
            }
            None => {}
        }

        if self.schema.len() != self.types.len() {
            return Err(format!(
                "schema has {} columns but types has {}",
                self.schema.len(),
                self.types.len()
            ));
        }
        for (index, row) in self.data.iter().enumerate() {
            if row.len() != self.schema.len() {
                return Err(format!(
                    "row {} has {} cells but schema has {} columns",
                    index,
                    row.len(),
                    self.schema.len()
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_capture() -> Capture {
        Capture {
            schema: vec!["id".to_string(), "name".to_string()],
            types: vec!["INTEGER".to_string(), "TEXT".to_string()],
            data: vec![vec![Value::Integer(1), Value::Text("Ann".to_string())]],
            error_message: None,
        }
    }

    #[test]
    fn valid_capture_passes_validation() {
        assert!(sample_capture().validate().is_ok());
    }

    #[test]
    fn error_capture_has_empty_fields() {
        let capture = Capture::from_error("table ghost does not exist");
        assert!(capture.is_error());
        assert!(capture.schema.is_empty());
        assert!(capture.types.is_empty());
        assert!(capture.data.is_empty());
        assert!(capture.validate().is_ok());
    }

    #[test]
    fn error_capture_with_data_is_invalid() {
        let mut capture = sample_capture();
        capture.error_message = Some("boom".to_string());
        assert!(capture.validate().is_err());
    }

    #[test]
    fn empty_error_message_is_invalid() {
        let capture = Capture::from_error("");
        assert!(capture.validate().is_err());
    }

    #[test]
    fn mismatched_schema_and_types_is_invalid() {
        let mut capture = sample_capture();
        capture.types.pop();
        assert!(capture.validate().is_err());
    }

    #[test]
    fn ragged_row_is_invalid() {
        let mut capture = sample_capture();
        capture.data.push(vec![Value::Integer(2)]);
        assert!(capture.validate().is_err());
    }

    #[test]
    fn reals_compare_by_value_not_rendering() {
        assert_eq!(Value::Real(1.0), Value::Real(1.00));
        assert_ne!(Value::Real(1.0), Value::Text("1.0".to_string()));
        assert_ne!(Value::Integer(1), Value::Real(1.0));
    }

    #[test]
    fn null_only_equals_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::Integer(0));
        assert_ne!(Value::Null, Value::Text(String::new()));
    }

    #[test]
    fn json_round_trip_preserves_capture() {
        let capture = Capture {
            schema: vec!["id".to_string(), "score".to_string(), "raw".to_string()],
            types: vec!["INTEGER".to_string(), "REAL".to_string(), "BLOB".to_string()],
            data: vec![
                vec![Value::Integer(1), Value::Real(0.5), Value::Blob(vec![0xAB, 0x01])],
                vec![Value::Integer(2), Value::Null, Value::Null],
            ],
            error_message: None,
        };
        let json = serde_json::to_string(&capture).unwrap();
        let decoded: Capture = serde_json::from_str(&json).unwrap();
        assert_eq!(capture, decoded);
    }

    #[test]
    fn json_round_trip_preserves_error_capture() {
        let capture = Capture::from_error("no such table: ghost");
        let json = serde_json::to_string(&capture).unwrap();
        let decoded: Capture = serde_json::from_str(&json).unwrap();
        assert_eq!(capture, decoded);
    }

    #[test]
    fn blob_display_is_hex() {
        assert_eq!(Value::Blob(vec![0xAB, 0x01]).to_string(), "x'AB01'");
        assert_eq!(Value::Null.to_string(), "NULL");
    }
}
