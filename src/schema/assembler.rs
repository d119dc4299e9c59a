//! Rendering of complete schema modules
//!
//! Every generated file has the same layout:
//!
//! ```text
//! // This file is auto-generated by arke-zod. Do not edit it manually.
//! import { z } from "zod";
//!
//! export const myStructSchema = z.object({
//!     foo: z.string(),
//! });
//!
//! export type MyStruct = z.infer<typeof myStructSchema>;
//! ```

use super::GeneratedSchema;
use convert_case::{Case, Casing};

pub const PROVENANCE_HEADER: &str =
    "// This file is auto-generated by arke-zod. Do not edit it manually.";
pub const ZOD_IMPORT: &str = r#"import { z } from "zod";"#;
const INDENT: &str = "    ";

/// Identifier names derived from a struct id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNames {
    /// Name of the exported schema constant, e.g. `myStructSchema`
    pub schema: String,
    /// Name of the exported inferred type, e.g. `MyStruct`
    pub type_name: String,
}

impl SchemaNames {
    pub fn from_id(id: &str) -> Self {
        let base = id.to_case(Case::Camel);
        let mut chars = base.chars();
        let type_name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        SchemaNames {
            schema: format!("{base}Schema"),
            type_name,
        }
    }
}

/// Assemble a schema module from already rendered `<id>: <expr>,` lines
pub fn assemble(id: &str, field_lines: &[String]) -> GeneratedSchema {
    let names = SchemaNames::from_id(id);
    let declaration = if field_lines.is_empty() {
        format!("export const {} = z.object({{}});", names.schema)
    } else {
        let mut body = String::new();
        for line in field_lines {
            body.push_str(INDENT);
            body.push_str(line);
            body.push('\n');
        }
        format!("export const {} = z.object({{\n{body}}});", names.schema)
    };
    GeneratedSchema {
        id: id.to_string(),
        source: render_module(&names, &declaration),
    }
}

/// Wrap a schema declaration with the provenance header, the Zod import and
/// the inferred type export
pub fn render_module(names: &SchemaNames, declaration: &str) -> String {
    format!(
        "{PROVENANCE_HEADER}\n{ZOD_IMPORT}\n\n{}\n\nexport type {} = z.infer<typeof {}>;\n",
        declaration.trim_end(),
        names.type_name,
        names.schema,
    )
}
