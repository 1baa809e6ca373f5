//! Loader for the RON floor configuration at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::FloorDefaults;

pub const FLOOR_DEFAULTS_FILE: &str = "floor_defaults.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse floor defaults from RON text. `file` is only used for error context.
pub fn parse_floor_defaults(contents: &str, file: &str) -> Result<FloorDefaults, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load floor_defaults.ron from `base_path`.
pub fn load_floor_defaults(base_path: &Path) -> Result<FloorDefaults, ContentLoadError> {
    let path = base_path.join(FLOOR_DEFAULTS_FILE);
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_floor_defaults(&contents, &file_name)
}
