//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// collapse-docs - flatten a directory of documents into a one-line-per-document corpus.
#[derive(Parser, Debug)]
#[command(name = "collapse-docs")]
#[command(
    author,
    version,
    about,
    long_about = r#"collapse-docs reads an ordered list of document titles from MANIFEST, reads
each title from DOC_DIR, replaces every newline in the document with a space,
and writes the result as one line of <DOC_DIR>_all.dat.

The corpus file is created next to DOC_DIR (trailing slashes are ignored) and
is overwritten on every run. Line i of the corpus is the i-th manifest title.

A summary of the run is printed to stdout in the selected format.

Examples:
    collapse-docs titles.txt docs/
    collapse-docs titles.txt docs --format md
    collapse-docs titles.txt docs -q
"#
)]
pub struct Cli {
    /// File listing one document title per line.
    #[arg(
        value_name = "MANIFEST",
        long_help = "File listing one document title per line.\n\n\
Each line is trimmed of surrounding whitespace; blank lines are skipped.\n\
Titles are file names relative to DOC_DIR, and their order is the output order."
    )]
    pub manifest: PathBuf,

    /// Directory holding one file per title.
    #[arg(
        value_name = "DOC_DIR",
        long_help = "Directory holding one file per manifest title.\n\n\
The corpus is written to DOC_DIR with trailing separators removed, plus `_all.dat`."
    )]
    pub doc_dir: PathBuf,

    /// Summary output format (jsonl/json/md).
    #[arg(
        long,
        default_value = "jsonl",
        env = "COLLAPSE_DOCS_FORMAT",
        value_name = "FORMAT",
        long_help = "Select the output format for the run summary.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\n\
The corpus file itself is not affected."
    )]
    pub format: OutputFormat,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Quiet mode (no summary on stdout).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (repeat for more diagnostics on stderr).
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        long_help = "Increase log verbosity on stderr: -v info, -vv debug, -vvv trace.\n\n\
RUST_LOG, when set, takes precedence."
    )]
    pub verbose: u8,
}

/// Initialize tracing based on CLI flags.
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match cli.verbose {
        0 => "collapse_docs=warn",
        1 => "collapse_docs=info",
        2 => "collapse_docs=debug",
        _ => "collapse_docs=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let render_config = RenderConfig::with_pretty(cli.format, cli.pretty);

    let summary = crate::flows::collapse::build_corpus(&cli.manifest, &cli.doc_dir)
        .inspect_err(|err| {
            tracing::debug!(path = %err.path().display(), "corpus build failed");
        })?;

    if !cli.quiet {
        Renderer::with_config(render_config).render_to(&summary, io::stdout().lock())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_two_positionals() {
        let cli = Cli::try_parse_from(["collapse-docs", "titles.txt", "docs/"]).unwrap();
        assert_eq!(cli.manifest, PathBuf::from("titles.txt"));
        assert_eq!(cli.doc_dir, PathBuf::from("docs/"));
        assert_eq!(cli.format, OutputFormat::Jsonl);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_requires_both_positionals() {
        assert!(Cli::try_parse_from(["collapse-docs", "titles.txt"]).is_err());
        assert!(Cli::try_parse_from(["collapse-docs", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["collapse-docs", "t", "d", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_counts_verbosity() {
        let cli = Cli::try_parse_from(["collapse-docs", "-vv", "t", "d", "--format", "md"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Markdown);
    }
}
