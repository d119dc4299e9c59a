/// A built-in schema emitted alongside the translated structs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSchemaTemplate {
    pub id: &'static str,
    /// Complete `export const <id>Schema = ...;` declaration
    pub template: &'static str,
}

/// Envelope shared by every unit returned from an Arke backend
pub const UNIT_SCHEMA: DefaultSchemaTemplate = DefaultSchemaTemplate {
    id: "unit",
    template: "\
export const unitSchema = z.object({
    active: z.boolean(),
    arke_id: z.string(),
    id: z.string(),
    metadata: z.record(z.string(), z.unknown()),
    label: z.string(),
    type: z.string(),
    inserted_at: z.string().datetime(),
    updated_at: z.string().datetime(),
});",
};

pub const DEFAULT_SCHEMAS: &[DefaultSchemaTemplate] = &[UNIT_SCHEMA];
