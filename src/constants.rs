pub const APP_NAME: &str = "arke-zod";
pub const CONFIG_PATH_ENV: &str = "ARKE_ZOD_CONFIG_PATH";
pub const PROJECTS_FILE: &str = "arke-zod/projects.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "lib/validations/arke";
pub const SCHEMA_EXTENSION: &str = "ts";
pub const PROJECT_KEY_HEADER: &str = "arke-project-key";
