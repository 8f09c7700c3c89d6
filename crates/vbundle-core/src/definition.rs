//! Loading bundle definitions from JSON and YAML documents.
//!
//! A document holds either one bundle object or an array of bundles.

use std::path::{Path, PathBuf};

use vbundle_util::errors::VbundleError;

use crate::bundle::Bundle;

/// Serialization format of a definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension. Anything that is not `.json`
    /// is read as YAML, which also accepts plain JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Parse bundles from a JSON document.
pub fn from_json_str(content: &str) -> Result<Vec<Bundle>, VbundleError> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(definition_error)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(definition_error)
    } else {
        serde_json::from_value::<Bundle>(value)
            .map(|b| vec![b])
            .map_err(definition_error)
    }
}

/// Parse bundles from a YAML document. An empty document yields no bundles.
pub fn from_yaml_str(content: &str) -> Result<Vec<Bundle>, VbundleError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(definition_error)?;
    match value {
        serde_yaml::Value::Null => Ok(Vec::new()),
        serde_yaml::Value::Sequence(_) => serde_yaml::from_value(value).map_err(definition_error),
        other => serde_yaml::from_value::<Bundle>(other)
            .map(|b| vec![b])
            .map_err(definition_error),
    }
}

/// Parse `content` in the given format.
pub fn from_str(content: &str, format: Format) -> Result<Vec<Bundle>, VbundleError> {
    match format {
        Format::Json => from_json_str(content),
        Format::Yaml => from_yaml_str(content),
    }
}

/// Load all bundles from a single definition file.
pub fn load_file(path: &Path) -> Result<Vec<Bundle>, VbundleError> {
    let content = std::fs::read_to_string(path).map_err(|e| VbundleError::Definition {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    let bundles = from_str(&content, Format::from_path(path)).map_err(|e| match e {
        VbundleError::Definition { message } => VbundleError::Definition {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })?;
    tracing::info!("Loaded {} bundle(s) from {}", bundles.len(), path.display());
    Ok(bundles)
}

/// Load bundles from files and directories, in the order the files are found.
pub fn load_paths(paths: &[PathBuf]) -> Result<Vec<Bundle>, VbundleError> {
    let files =
        vbundle_util::fs::collect_definition_files(paths).map_err(|e| VbundleError::Definition {
            message: format!("Failed to list bundle definitions: {e}"),
        })?;
    let mut bundles = Vec::new();
    for file in &files {
        bundles.extend(load_file(file)?);
    }
    Ok(bundles)
}

/// Render bundles as a pretty-printed JSON array.
pub fn to_json_string(bundles: &[Bundle]) -> Result<String, VbundleError> {
    serde_json::to_string_pretty(bundles).map_err(definition_error)
}

fn definition_error(e: impl std::fmt::Display) -> VbundleError {
    VbundleError::Definition {
        message: e.to_string(),
    }
}
