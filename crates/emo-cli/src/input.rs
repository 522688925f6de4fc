//! Reading command inputs from files or stdin.

use std::io::Read;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Path that selects stdin.
pub const STDIN: &str = "-";

/// Read a whole input as text. `-` reads stdin.
pub fn read_text(path: &str) -> anyhow::Result<String> {
    if path == STDIN {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

/// Read and decode a JSON input. `-` reads stdin.
pub fn read_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let raw = read_text(path)?;
    parse_json(&raw, path)
}

fn parse_json<T: DeserializeOwned>(raw: &str, source: &str) -> anyhow::Result<T> {
    let source = if source == STDIN { "stdin" } else { source };
    serde_json::from_str(raw).with_context(|| format!("failed to parse JSON from {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use emo_core::entities::AlertRecord;

    #[test]
    fn reads_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("alerts.json");
        std::fs::write(
            &path,
            r#"[{"id": "a1", "day": "2026-02-10", "severity": "high"}]"#,
        )
        .expect("write");

        let alerts: Vec<AlertRecord> =
            read_json(path.to_str().expect("utf-8 path")).expect("alerts parse");
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "a1");
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = read_text("/no/such/emo-input.json").unwrap_err();
        assert!(format!("{error:#}").contains("/no/such/emo-input.json"));
    }

    #[test]
    fn parse_errors_name_the_source() {
        let error = parse_json::<Vec<AlertRecord>>("{not json", STDIN).unwrap_err();
        assert!(error.to_string().contains("stdin"));
    }
}
