// Utilities for naming generated schema files

use crate::constants::{DEFAULT_OUTPUT_DIR, SCHEMA_EXTENSION};
use anyhow::Context;
use convert_case::{Case, Casing};
use std::path::{Path, PathBuf};

/// File name for the schema generated from `id`, e.g. `my-struct.ts`
pub fn schema_file_name(id: &str) -> String {
    format!("{}.{}", id.to_case(Case::Kebab), SCHEMA_EXTENSION)
}

pub fn schema_file_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(schema_file_name(id))
}

/// Directory the schemas are written to
///
/// An explicit directory is used as given; otherwise the default directory
/// is resolved against the current working directory.
pub fn resolve_output_dir(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            Ok(cwd.join(DEFAULT_OUTPUT_DIR))
        }
    }
}
