use anyhow::Context;
use exifscope_core::AnalysisRecord;
use serde::Serialize;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Chemin de l'image : ";
pub const EMPTY_PATH_MESSAGE: &str = "Chemin vide, arrêt.";

/// Trim, drop one pair of matching surrounding quotes, trim again.
pub fn normalize_input_path(raw: &str) -> String {
    let trimmed = raw.trim();
    let quoted = ['"', '\'']
        .iter()
        .any(|&quote| trimmed.starts_with(quote) && trimmed.ends_with(quote));
    if !quoted {
        return trimmed.to_string();
    }
    // a lone quote is both the opening and the closing one
    trimmed.get(1..trimmed.len() - 1).unwrap_or("").trim().to_string()
}

/// Print the prompt and read one line. End of input counts as an empty line.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<String> {
    write!(output, "{}", PROMPT).context("Write prompt")?;
    output.flush().context("Flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Read image path")?;
    Ok(normalize_input_path(&line))
}

pub fn to_pretty_json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Serialize analysis")
}

/// Warnings one per line, then the EXIF mapping (or the whole record).
pub fn render_report(record: &AnalysisRecord, full: bool) -> anyhow::Result<String> {
    let mut out = String::new();
    for warning in &record.warnings {
        out.push_str(warning);
        out.push('\n');
    }
    let json = if full {
        to_pretty_json(record)?
    } else {
        to_pretty_json(&record.exif)?
    };
    out.push_str(&json);
    Ok(out)
}

/// Initialize tracing for the CLI. Diagnostics go to stderr so stdout only
/// carries the report.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_plain_path() {
        assert_eq!(normalize_input_path("  /tmp/a.jpg \n"), "/tmp/a.jpg");
    }

    #[test]
    fn normalize_strips_one_pair_of_quotes() {
        assert_eq!(normalize_input_path("\"/tmp/my photo.jpg\""), "/tmp/my photo.jpg");
        assert_eq!(normalize_input_path("' /tmp/a.jpg '"), "/tmp/a.jpg");
        assert_eq!(normalize_input_path("\"'a.jpg'\""), "'a.jpg'");
    }

    #[test]
    fn normalize_keeps_unmatched_quotes() {
        assert_eq!(normalize_input_path("\"a.jpg'"), "\"a.jpg'");
        assert_eq!(normalize_input_path("\"a.jpg"), "\"a.jpg");
    }

    #[test]
    fn normalize_empty_inputs() {
        assert_eq!(normalize_input_path(""), "");
        assert_eq!(normalize_input_path("   "), "");
        assert_eq!(normalize_input_path("\"\""), "");
        assert_eq!(normalize_input_path("'"), "");
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut input = "'/photos/x.png'\nignored\n".as_bytes();
        let mut output = Vec::new();

        let path = prompt_for_path(&mut input, &mut output).unwrap();

        assert_eq!(path, "/photos/x.png");
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn prompt_at_end_of_input_is_empty() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        assert_eq!(prompt_for_path(&mut input, &mut output).unwrap(), "");
    }

    fn sample_record() -> AnalysisRecord {
        let mut exif = serde_json::Map::new();
        exif.insert("Make".to_string(), json!("Café Cam"));
        AnalysisRecord {
            exif,
            format: Some("png".to_string()),
            probable_screenshot: false,
            probable_editing_png: true,
            editing_software: None,
            warnings: vec!["first".to_string(), "second".to_string()],
        }
    }

    #[test]
    fn report_lists_warnings_then_exif() {
        let report = render_report(&sample_record(), false).unwrap();
        assert_eq!(report, "first\nsecond\n{\n  \"Make\": \"Café Cam\"\n}");
    }

    #[test]
    fn full_report_contains_whole_record() {
        let report = render_report(&sample_record(), true).unwrap();
        let json_start = report.find('{').unwrap();
        let value: serde_json::Value = serde_json::from_str(&report[json_start..]).unwrap();
        assert_eq!(value["format"], "png");
        assert_eq!(value["exif"]["Make"], "Café Cam");
    }
}
