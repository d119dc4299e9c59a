use super::{
    assembler::{assemble, render_module, SchemaNames},
    constraints::apply_constraints,
    types::zod_type,
    GeneratedSchema,
};
use crate::{
    error::TranslateError,
    model::{Parameter, Struct},
};

/// Translate a remote struct into a Zod schema module
///
/// All parameters are checked before anything is rendered, so an unknown
/// type fails the whole struct instead of producing a partial schema.
/// Dynamic parameters are left out of the output.
pub fn translate(remote: &Struct) -> Result<GeneratedSchema, TranslateError> {
    let parameters = remote
        .parameters
        .iter()
        .map(Parameter::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let field_lines: Vec<String> = parameters
        .iter()
        .filter(|p| !p.kind.is_dynamic())
        .filter_map(|p| {
            let base = zod_type(&p.kind)?;
            Some(format!("{}: {},", p.id, apply_constraints(base, p)))
        })
        .collect();

    Ok(assemble(&remote.id, &field_lines))
}

/// Render a built-in template, whose declaration is used verbatim
pub fn translate_default(id: &str, template: &str) -> GeneratedSchema {
    let names = SchemaNames::from_id(id);
    GeneratedSchema {
        id: id.to_string(),
        source: render_module(&names, template),
    }
}
