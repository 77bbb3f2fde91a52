//! CSV reporter: one `section,field,value` row per labelled field.
//!
//! Rows are produced by walking the record's JSON form, so every serialized
//! field appears. Top-level scalars land in the `summary` section; list
//! elements get their own section (`costDrivers[0]`); nested objects flatten
//! to dotted field names (`impactPct.p50`). Nulls render as empty values.

use serde_json::Value;
use siterisk_core::errors::ReportError;

use super::Reporter;
use crate::synthesis::SiteRiskAnalysis;

const HEADER: &str = "section,field,value";

pub struct CsvReporter;

impl Reporter for CsvReporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn generate(&self, analysis: &SiteRiskAnalysis) -> Result<String, ReportError> {
        let root = serde_json::to_value(analysis)?;
        let mut rows: Vec<[String; 3]> = Vec::new();

        if let Value::Object(fields) = &root {
            for (key, value) in fields {
                match value {
                    Value::Object(_) => flatten(key, "", value, &mut rows),
                    Value::Array(items) => {
                        for (i, item) in items.iter().enumerate() {
                            flatten(&format!("{key}[{i}]"), "", item, &mut rows);
                        }
                    }
                    scalar => rows.push(["summary".to_string(), key.clone(), render(scalar)]),
                }
            }
        }

        let mut out = String::from(HEADER);
        out.push('\n');
        for [section, field, value] in &rows {
            out.push_str(&escape(section));
            out.push(',');
            out.push_str(&escape(field));
            out.push(',');
            out.push_str(&escape(value));
            out.push('\n');
        }
        Ok(out)
    }
}

fn flatten(section: &str, prefix: &str, value: &Value, rows: &mut Vec<[String; 3]>) {
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(section, &path, child, rows);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(section, &format!("{prefix}[{i}]"), item, rows);
            }
        }
        scalar => rows.push([section.to_string(), prefix.to_string(), render(scalar)]),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// RFC 4180 quoting.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
