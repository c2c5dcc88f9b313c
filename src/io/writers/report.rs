use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::Result;

/// Build the JSON object written next to an output image.
///
/// `operation` and `output` are always present; every field of `report` is
/// flattened in alongside them.
pub fn build_report_json<T: Serialize>(
    output_path: &Path,
    operation: &str,
    report: &T,
) -> Result<Map<String, Value>> {
    let mut json = Map::new();
    json.insert("operation".to_string(), Value::String(operation.to_string()));
    json.insert(
        "output".to_string(),
        Value::String(output_path.display().to_string()),
    );
    json.insert(
        "generated_at".to_string(),
        Value::String(chrono::Utc::now().to_rfc3339()),
    );

    match serde_json::to_value(report)? {
        Value::Object(fields) => json.extend(fields),
        other => {
            json.insert("report".to_string(), other);
        }
    }
    Ok(json)
}

/// Write a pretty JSON sidecar at `output_path.with_extension("json")`.
pub fn write_report_sidecar<T: Serialize>(
    output_path: &Path,
    operation: &str,
    report: &T,
) -> Result<PathBuf> {
    let json = build_report_json(output_path, operation, report)?;
    let sidecar_path = output_path.with_extension("json");
    let json_string = serde_json::to_string_pretty(&json)?;
    std::fs::write(&sidecar_path, json_string)?;

    info!("Created report sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}
