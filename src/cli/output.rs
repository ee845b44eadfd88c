//! Command output: stdout or a file.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::log;

use super::args::OutputArgs;

/// Serialize `value` as JSON, compact unless `--pretty`.
pub(super) fn write_json<T: Serialize>(value: &T, args: &OutputArgs) -> Result<()> {
    let formatted = format_json(value, args.pretty)?;
    write_text(&formatted, args.output.as_deref())
}

fn format_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(formatted)
}

/// Print a line to stdout, or write it to `output`.
pub(super) fn write_text(text: &str, output: Option<&Path>) -> Result<()> {
    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create `{}`", output_path.display()))?;
        writeln!(file, "{text}")?;
        log!("output"; "wrote output to {}", output_path.display());
    } else {
        println!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_format_json() {
        let value = BTreeMap::from([("title", "খবর")]);
        assert_eq!(format_json(&value, false).unwrap(), r#"{"title":"খবর"}"#);
        assert_eq!(
            format_json(&value, true).unwrap(),
            "{\n  \"title\": \"খবর\"\n}"
        );
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let args = OutputArgs {
            pretty: false,
            output: Some(path.clone()),
        };

        write_json(&BTreeMap::from([("id", 5)]), &args).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"id\":5}\n");
    }

    #[test]
    fn test_write_text_bad_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/out.txt");
        assert!(write_text("x", Some(&path)).is_err());
    }
}
