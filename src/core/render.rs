//! Renderer module
//!
//! Renders a CorpusSummary to different output formats: jsonl, json, md

use crate::core::model::CorpusSummary;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for run summaries
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a summary to a string
    pub fn render(&self, summary: &CorpusSummary) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(summary),
            OutputFormat::Json => self.render_json(summary),
            OutputFormat::Markdown => self.render_markdown(summary),
        }
    }

    /// Render to a writer, terminated by a newline
    pub fn render_to<W: Write>(&self, summary: &CorpusSummary, mut writer: W) -> std::io::Result<()> {
        let output = self.render(summary);
        writeln!(writer, "{}", output)
    }

    /// A single JSON object on one line (or indented with --pretty)
    fn render_jsonl(&self, summary: &CorpusSummary) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(summary)
        } else {
            serde_json::to_string(summary)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    /// A JSON array holding the summary, matching the shape of list outputs
    fn render_json(&self, summary: &CorpusSummary) -> String {
        let items = std::slice::from_ref(summary);
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(items)
        } else {
            serde_json::to_string(items)
        };
        rendered.unwrap_or_else(|_| "[]".to_string())
    }

    fn render_markdown(&self, summary: &CorpusSummary) -> String {
        let mut output = String::new();

        output.push_str("# Corpus\n\n");
        output.push_str(&format!("- **Output**: `{}`\n", summary.output));
        output.push_str(&format!("- **Manifest**: `{}`\n", summary.manifest));
        output.push_str(&format!(
            "- **Documents directory**: `{}`\n",
            summary.document_dir
        ));
        output.push_str(&format!("- **Documents**: {}\n", summary.documents));
        output.push_str(&format!("- **Bytes**: {}\n", summary.bytes));
        output.push_str(&format!("- **Hash**: `{}`", summary.hash));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample() -> CorpusSummary {
        CorpusSummary::new(
            Path::new("titles.txt"),
            Path::new("docs"),
            Path::new("docs_all.dat"),
        )
        .with_totals(2, 16, "00000000deadbeef")
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("jsonl".parse::<OutputFormat>(), Ok(OutputFormat::Jsonl));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!(
            "markdown".parse::<OutputFormat>(),
            Ok(OutputFormat::Markdown)
        );
        assert!("raw".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_jsonl_single_line() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render(&sample());

        assert_eq!(output.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["documents"], 2);
        assert_eq!(value["hash"], "00000000deadbeef");
    }

    #[test]
    fn test_render_json_array() {
        let renderer =
            Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Json, true));
        let output = renderer.render(&sample());

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["output"], "docs_all.dat");
    }

    #[test]
    fn test_render_markdown() {
        let renderer =
            Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Markdown, false));
        let output = renderer.render(&sample());

        assert!(output.starts_with("# Corpus"));
        assert!(output.contains("- **Documents**: 2"));
        assert!(output.contains("`docs_all.dat`"));
    }

    #[test]
    fn test_render_to_appends_newline() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let mut buf = Vec::new();
        renderer.render_to(&sample(), &mut buf).unwrap();
        assert!(buf.ends_with(b"}\n"));
    }
}
