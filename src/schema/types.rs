use crate::model::ParameterKind;

/// Base Zod expression for a parameter kind
///
/// Returns `None` for dynamic parameters, which have no Zod counterpart and
/// are dropped by the translator before this is called.
pub fn zod_type(kind: &ParameterKind) -> Option<&'static str> {
    let expr = match kind {
        ParameterKind::DateTime => "z.string().datetime()",
        ParameterKind::Date => "z.string().date()",
        ParameterKind::Dict => "z.record(z.string(), z.unknown())",
        ParameterKind::String { .. } | ParameterKind::Link => "z.string()",
        ParameterKind::Float { .. } => "z.number()",
        ParameterKind::Integer { .. } => "z.number().int()",
        ParameterKind::Boolean => "z.boolean()",
        ParameterKind::Binary => "z.string()",
        ParameterKind::Dynamic => return None,
    };
    Some(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Parameter, RemoteParameter};

    fn kind_of(type_name: &str) -> ParameterKind {
        let remote = RemoteParameter {
            id: "field".into(),
            kind: type_name.into(),
            ..Default::default()
        };
        Parameter::try_from(&remote).unwrap().kind
    }

    #[test]
    fn test_mapping_table() {
        let cases = [
            ("datetime", "z.string().datetime()"),
            ("date", "z.string().date()"),
            ("dict", "z.record(z.string(), z.unknown())"),
            ("link", "z.string()"),
            ("string", "z.string()"),
            ("float", "z.number()"),
            ("integer", "z.number().int()"),
            ("boolean", "z.boolean()"),
            ("binary", "z.string()"),
        ];
        for (type_name, expected) in cases {
            assert_eq!(zod_type(&kind_of(type_name)), Some(expected), "{type_name}");
        }
    }

    #[test]
    fn test_dynamic_has_no_expression() {
        assert_eq!(zod_type(&kind_of("dynamic")), None);
    }
}
