//! Struct-to-Zod translation
//!
//! The pieces run leaf-first: [`types`] picks the base Zod expression for a
//! parameter, [`constraints`] appends bounds, optionality and defaults,
//! [`assembler`] wraps the field lines into a complete TypeScript module and
//! [`translator`] drives the three for a whole struct. Everything here is a
//! pure function of its input; no I/O happens in this module.

pub mod assembler;
pub mod constraints;
pub mod defaults;
pub mod translator;
pub mod types;

pub use defaults::{DefaultSchemaTemplate, DEFAULT_SCHEMAS};
pub use translator::{translate, translate_default};

/// Generated TypeScript source for one struct or built-in template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSchema {
    /// Identifier the schema was generated from, used to name the output file
    pub id: String,
    /// Complete file contents
    pub source: String,
}
