//! Field expression constraints
//!
//! Fragments are appended to the base type in a fixed order: bounds, then
//! `.optional()`, then `.default(..)`. Generated files are compared
//! byte-for-byte, so the order is part of the output format.

use crate::model::{Bounds, Parameter, ParameterKind};
use serde_json::Value;
use std::fmt::Write;

/// Parameter ids that never receive min/max constraints
pub const MIN_MAX_BLACKLIST: &[&str] = &["arke_id"];

/// Build the full field expression for `parameter` on top of `base`
pub fn apply_constraints(base: &str, parameter: &Parameter) -> String {
    let mut expr = String::from(base);
    push_bounds(&mut expr, parameter);
    if !parameter.required {
        expr.push_str(".optional()");
    }
    if let Some(literal) = default_literal(parameter) {
        let _ = write!(expr, ".default({literal})");
    }
    expr
}

fn push_bounds(expr: &mut String, parameter: &Parameter) {
    if MIN_MAX_BLACKLIST.contains(&parameter.id.as_str()) {
        return;
    }

    let (bounds, lower, upper): (&Bounds, &str, &str) = match &parameter.kind {
        ParameterKind::String { length, .. } => (length, "min", "max"),
        ParameterKind::Integer { range, .. } | ParameterKind::Float { range, .. } => {
            (range, "gte", "lte")
        }
        _ => return,
    };

    if let Some(min) = &bounds.min {
        let _ = write!(expr, ".{lower}({min})");
    }
    if let Some(max) = &bounds.max {
        let _ = write!(expr, ".{upper}({max})");
    }
}

/// TypeScript literal for the parameter default, if one should be rendered
///
/// An empty object counts as no default. String parameters always get a
/// quoted literal, whatever JSON type the default arrived as; anything else
/// is written as-is.
pub fn default_literal(parameter: &Parameter) -> Option<String> {
    let value = parameter.default.as_ref()?;
    let quoted = matches!(parameter.kind, ParameterKind::String { .. });
    match value {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        Value::String(_) if quoted => Some(value.to_string()),
        other if quoted => Some(Value::String(other.to_string()).to_string()),
        Value::String(raw) => Some(raw.clone()),
        other => Some(other.to_string()),
    }
}
