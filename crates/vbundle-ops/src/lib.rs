pub mod ops_aggregate;
pub mod ops_explain;
pub mod ops_health;
pub mod ops_list;
pub mod ops_load;
pub mod ops_validate;
pub mod ops_version;

use std::str::FromStr;

use serde::Serialize;
use vbundle_util::errors::{VbundleError, VbundleResult};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = VbundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(VbundleError::Generic {
                message: format!("Unknown output format '{other}' (expected text, json or yaml)"),
            }),
        }
    }
}

/// Serialize `value` as JSON or YAML. Text output is rendered by each operation.
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> VbundleResult<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        OutputFormat::Text => Err("text output has no structured form".to_string()),
    };
    rendered.map_err(|message| VbundleError::Generic { message }.into())
}
