use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;

/// JSON document printed by every command.
#[derive(Debug, Serialize)]
pub struct Report {
    pub code_rev: String,
    pub version: &'static str,
    pub command: &'static str,
    pub params: Value,
    pub result: Value,
}

impl Report {
    pub fn new(command: &'static str, params: Value, result: Value) -> Self {
        Self {
            code_rev: code_rev(),
            version: lineseg::VERSION,
            command,
            params,
            result,
        }
    }
}

/// Print the report to stdout and, if `out` is given, also write it there.
pub fn emit(report: &Report, out: Option<&Path>) -> Result<()> {
    let doc = serde_json::to_string_pretty(report)?;
    println!("{doc}");
    if let Some(out) = out {
        write_report(out, &doc)?;
    }
    Ok(())
}

fn write_report(out: &Path, doc: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(out, doc).with_context(|| format!("writing {}", out.display()))
}

/// Revision the report was produced from: `GIT_COMMIT` (build time, then
/// runtime), else `git rev-parse --short HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    let non_empty = |rev: String| Some(rev).filter(|r| !r.is_empty());
    option_env!("GIT_COMMIT")
        .and_then(|rev| non_empty(rev.to_string()))
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git")
                .args(["rev-parse", "--short", "HEAD"])
                .output()
                .ok()
                .filter(|out| out.status.success())?;
            non_empty(String::from_utf8(out.stdout).ok()?.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn report_serializes_fields() {
        let r = Report::new("rect", json!({"a": [0.0, 0.0]}), json!({"min": [0.0, 0.0]}));
        let v: Value = serde_json::to_value(&r).unwrap();
        assert_eq!(v["command"], "rect");
        assert_eq!(v["version"], lineseg::VERSION);
        assert_eq!(v["result"]["min"][1], 0.0);
        assert!(!v["code_rev"].as_str().unwrap().is_empty());
    }

    #[test]
    fn code_rev_is_trimmed_and_non_empty() {
        let rev = code_rev();
        assert!(!rev.is_empty());
        assert_eq!(rev.trim(), rev);
    }

    #[test]
    fn emit_writes_nested_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("r.json");
        let r = Report::new("report", json!({}), json!(null));
        emit(&r, Some(&out)).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["command"], "report");
    }
}
