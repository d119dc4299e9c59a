use arke_zod::{
    error::TranslateError,
    model::{RemoteParameter, Struct},
    schema::{translate, translate_default, DEFAULT_SCHEMAS},
};
use serde_json::json;

fn remote_struct(id: &str, parameters: serde_json::Value) -> Struct {
    let parameters: Vec<RemoteParameter> = serde_json::from_value(parameters).unwrap();
    Struct::new(id, parameters)
}

#[test]
fn test_full_module_for_mixed_struct() {
    let s = remote_struct(
        "order_line",
        json!([
            { "id": "arke_id", "type": "string", "required": true, "min_length": 1, "max_length": 64 },
            { "id": "sku", "type": "string", "required": true, "min_length": 2, "max_length": 10, "default": null },
            { "id": "quantity", "type": "integer", "required": false, "min": 0, "default": 5 },
            { "id": "price", "type": "float", "required": true, "min": 0, "max": 9999.99 },
            { "id": "status", "type": "string", "required": false, "default": "active" },
            { "id": "shipped_at", "type": "datetime", "required": false },
            { "id": "delivery_day", "type": "date", "required": true },
            { "id": "extra", "type": "dict", "required": false, "default": {} },
            { "id": "computed", "type": "dynamic", "required": true },
            { "id": "product", "type": "link", "required": true },
            { "id": "gift", "type": "boolean", "required": true, "default": false },
            { "id": "receipt", "type": "binary", "required": false }
        ]),
    );

    let expected = r#"// This file is auto-generated by arke-zod. Do not edit it manually.
import { z } from "zod";

export const orderLineSchema = z.object({
    arke_id: z.string(),
    sku: z.string().min(2).max(10),
    quantity: z.number().int().gte(0).optional().default(5),
    price: z.number().gte(0).lte(9999.99),
    status: z.string().optional().default("active"),
    shipped_at: z.string().datetime().optional(),
    delivery_day: z.string().date(),
    extra: z.record(z.string(), z.unknown()).optional(),
    product: z.string(),
    gift: z.boolean().default(false),
    receipt: z.string().optional(),
});

export type OrderLine = z.infer<typeof orderLineSchema>;
"#;

    let schema = translate(&s).unwrap();
    assert_eq!(schema.id, "order_line");
    assert_eq!(schema.source, expected);
}

#[test]
fn test_minimal_struct_names() {
    let s = remote_struct(
        "my-struct",
        json!([{ "id": "foo", "type": "string", "required": true }]),
    );
    let source = translate(&s).unwrap().source;

    assert!(source.contains("export const myStructSchema = z.object({"));
    assert!(source.contains("export type MyStruct = z.infer<typeof myStructSchema>;"));
    let field_lines: Vec<&str> = source
        .lines()
        .filter(|l| l.starts_with("    "))
        .map(str::trim)
        .collect();
    assert_eq!(field_lines, vec!["foo: z.string(),"]);
}

#[test]
fn test_unknown_type_reports_offending_type() {
    let s = remote_struct(
        "broken",
        json!([
            { "id": "ok", "type": "boolean", "required": true },
            { "id": "bad", "type": "uuid", "required": true }
        ]),
    );
    match translate(&s) {
        Err(TranslateError::UnknownParameterType(t)) => assert_eq!(t, "uuid"),
        other => panic!("expected unknown type error, got {other:?}"),
    }
}

#[test]
fn test_only_dynamic_parameters_yield_empty_object() {
    let s = remote_struct(
        "bag",
        json!([
            { "id": "a", "type": "dynamic" },
            { "id": "b", "type": "dynamic", "required": true }
        ]),
    );
    let source = translate(&s).unwrap().source;
    assert!(source.contains("export const bagSchema = z.object({});"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let s = remote_struct(
        "user",
        json!([
            { "id": "email", "type": "string", "required": true, "max_length": 255 },
            { "id": "age", "type": "integer", "required": false, "min": 18 }
        ]),
    );
    let first = translate(&s).unwrap();
    for _ in 0..3 {
        assert_eq!(translate(&s).unwrap().source, first.source);
    }
}

#[test]
fn test_unit_default_schema() {
    let unit = DEFAULT_SCHEMAS
        .iter()
        .find(|t| t.id == "unit")
        .expect("unit template");
    let source = translate_default(unit.id, unit.template).source;

    assert!(source.contains("export const unitSchema = z.object({"));
    assert!(source.contains("    inserted_at: z.string().datetime(),\n"));
    assert!(source.contains("export type Unit = z.infer<typeof unitSchema>;"));
}
