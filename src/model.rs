//! Remote struct and parameter types
//!
//! An Arke struct arrives as a loosely typed JSON document: every parameter
//! carries its `type` as a plain string plus whichever constraint attributes
//! apply to that type. [`RemoteParameter`] mirrors that wire shape, and
//! [`Parameter`] is the checked form the schema translator works with, where
//! the type has been resolved into the closed [`ParameterKind`] enum.

use crate::error::TranslateError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::{fmt, str::FromStr};

/// A remote schema definition, one per arke
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Struct {
    /// Arke identifier the struct was fetched for
    #[serde(default)]
    pub id: String,
    /// Parameters in the order the backend returned them
    #[serde(default)]
    pub parameters: Vec<RemoteParameter>,
}

impl Struct {
    pub fn new(id: impl Into<String>, parameters: Vec<RemoteParameter>) -> Self {
        Struct {
            id: id.into(),
            parameters,
        }
    }
}

/// One parameter exactly as the backend describes it
///
/// Constraint attributes are all optional; the backend sends `null` for the
/// ones that are not set, which deserializes to `None`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RemoteParameter {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub required: Option<bool>,
    // label, values and multiple are accepted from the wire but not rendered
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub min: Option<Number>,
    #[serde(default)]
    pub max: Option<Number>,
    #[serde(default)]
    pub min_length: Option<Number>,
    #[serde(default)]
    pub max_length: Option<Number>,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub values: Option<Vec<Value>>,
    #[serde(default)]
    pub multiple: Option<bool>,
}

/// The closed set of parameter types an Arke backend can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    DateTime,
    Date,
    Dict,
    String,
    Link,
    Dynamic,
    Integer,
    Float,
    Boolean,
    Binary,
}

impl ParameterType {
    pub const ALL: [ParameterType; 10] = [
        ParameterType::DateTime,
        ParameterType::Date,
        ParameterType::Dict,
        ParameterType::String,
        ParameterType::Link,
        ParameterType::Dynamic,
        ParameterType::Integer,
        ParameterType::Float,
        ParameterType::Boolean,
        ParameterType::Binary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::DateTime => "datetime",
            ParameterType::Date => "date",
            ParameterType::Dict => "dict",
            ParameterType::String => "string",
            ParameterType::Link => "link",
            ParameterType::Dynamic => "dynamic",
            ParameterType::Integer => "integer",
            ParameterType::Float => "float",
            ParameterType::Boolean => "boolean",
            ParameterType::Binary => "binary",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TranslateError::UnknownParameterType(s.to_string()))
    }
}

/// Lower and upper bound pair, used both for string lengths and numeric ranges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<Number>,
    pub max: Option<Number>,
}

/// Type-specific shape of a parameter
///
/// Each variant only carries the attributes that mean something for that
/// type, so a `min_length` on an integer is simply not representable.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    DateTime,
    Date,
    Dict,
    String { length: Bounds },
    Link,
    Dynamic,
    Integer { range: Bounds },
    Float { range: Bounds },
    Boolean,
    Binary,
}

impl ParameterKind {
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            ParameterKind::DateTime => ParameterType::DateTime,
            ParameterKind::Date => ParameterType::Date,
            ParameterKind::Dict => ParameterType::Dict,
            ParameterKind::String { .. } => ParameterType::String,
            ParameterKind::Link => ParameterType::Link,
            ParameterKind::Dynamic => ParameterType::Dynamic,
            ParameterKind::Integer { .. } => ParameterType::Integer,
            ParameterKind::Float { .. } => ParameterType::Float,
            ParameterKind::Boolean => ParameterType::Boolean,
            ParameterKind::Binary => ParameterType::Binary,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, ParameterKind::Dynamic)
    }
}

/// A parameter whose type has been checked against [`ParameterType`]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: String,
    pub required: bool,
    pub default: Option<Value>,
    pub kind: ParameterKind,
}

impl TryFrom<&RemoteParameter> for Parameter {
    type Error = TranslateError;

    fn try_from(remote: &RemoteParameter) -> Result<Self, Self::Error> {
        let range = || Bounds {
            min: remote.min.clone(),
            max: remote.max.clone(),
        };

        let kind = match remote.kind.parse::<ParameterType>()? {
            ParameterType::DateTime => ParameterKind::DateTime,
            ParameterType::Date => ParameterKind::Date,
            ParameterType::Dict => ParameterKind::Dict,
            ParameterType::String => ParameterKind::String {
                length: Bounds {
                    min: remote.min_length.clone(),
                    max: remote.max_length.clone(),
                },
            },
            ParameterType::Link => ParameterKind::Link,
            ParameterType::Dynamic => ParameterKind::Dynamic,
            ParameterType::Integer => ParameterKind::Integer { range: range() },
            ParameterType::Float => ParameterKind::Float { range: range() },
            ParameterType::Boolean => ParameterKind::Boolean,
            ParameterType::Binary => ParameterKind::Binary,
        };

        Ok(Parameter {
            id: remote.id.clone(),
            required: remote.required.unwrap_or(false),
            default: remote.default.clone(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_type_parses_every_known_name() {
        for t in ParameterType::ALL {
            assert_eq!(t.as_str().parse::<ParameterType>().unwrap(), t);
        }
    }

    #[test]
    fn test_parameter_type_rejects_unknown_name() {
        let err = "uuid".parse::<ParameterType>().unwrap_err();
        assert_eq!(err, TranslateError::UnknownParameterType("uuid".to_string()));
    }

    #[test]
    fn test_remote_parameter_accepts_nulls() {
        let remote: RemoteParameter = serde_json::from_value(json!({
            "id": "name",
            "label": "Name",
            "type": "string",
            "required": null,
            "min_length": null,
            "max_length": 10,
            "default": null,
            "values": null,
            "multiple": false,
            "strip": false
        }))
        .unwrap();

        let param = Parameter::try_from(&remote).unwrap();
        assert!(!param.required);
        assert_eq!(param.default, None);
        assert_eq!(
            param.kind,
            ParameterKind::String {
                length: Bounds {
                    min: None,
                    max: Some(10.into()),
                },
            }
        );
    }

    #[test]
    fn test_integer_parameter_keeps_range_and_ignores_lengths() {
        let remote: RemoteParameter = serde_json::from_value(json!({
            "id": "age",
            "type": "integer",
            "required": true,
            "min": 0,
            "max": 130,
            "min_length": 4
        }))
        .unwrap();

        let param = Parameter::try_from(&remote).unwrap();
        assert!(param.required);
        match param.kind {
            ParameterKind::Integer { range } => {
                assert_eq!(range.min, Some(0.into()));
                assert_eq!(range.max, Some(130.into()));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_struct_payload_without_id() {
        let s: Struct = serde_json::from_value(json!({
            "parameters": [
                { "id": "a", "type": "boolean" },
                { "id": "b", "type": "dynamic" }
            ]
        }))
        .unwrap();
        assert_eq!(s.id, "");
        assert_eq!(s.parameters.len(), 2);
        assert_eq!(s.parameters[1].kind, "dynamic");
    }
}
