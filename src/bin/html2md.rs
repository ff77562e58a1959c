//! CLI binary for edgequake-html2md.
//!
//! A thin shim over the library crate that maps CLI flags to an
//! `InputSpec` + `SourceConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_html2md::{
    extract, extract_to_file, inspect, DocumentMetadata, ExtractionOutput, InputSpec,
    SourceConfig,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Everything from a web page
  html2md https://example.com/article

  # Paragraph text from a saved page
  html2md --file --view paragraphs saved.html

  # Figures from an inline string
  html2md --text --view figures "<figure><img src='a.png'>A cat</figure>"

  # JSON to a file
  html2md https://example.com/article -o article.json

  # Title and counts only
  html2md --inspect-only --file saved.html

ENVIRONMENT VARIABLES:
  HTML2MD_USER_AGENT       User-Agent for remote requests
  HTML2MD_ERROR_FOR_STATUS Fail on non-2xx responses
  RUST_LOG                 Override log filter (e.g. edgequake_html2md=debug)
"#;

/// Extract paragraphs, images and captioned figures from HTML.
#[derive(Parser, Debug)]
#[command(
    name = "html2md",
    version,
    about = "Extract paragraphs, images and captioned figures from HTML",
    long_about = "Extract the paragraph text, every image, and <figure> image/caption pairs \
from an HTML document given as a URL (default), a local file (--file), or an inline \
string (--text).",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// URL, file path (with --file) or HTML markup (with --text).
    input: String,

    /// Treat INPUT as a local file path.
    #[arg(long)]
    file: bool,

    /// Treat INPUT as the HTML markup itself.
    #[arg(long)]
    text: bool,

    /// Which view to print.
    #[arg(long, value_enum, default_value = "all")]
    view: ViewArg,

    /// Print JSON instead of plain text.
    #[arg(long, env = "HTML2MD_JSON")]
    json: bool,

    /// Write JSON (full extraction) to this file instead of stdout.
    #[arg(short, long, env = "HTML2MD_OUTPUT")]
    output: Option<PathBuf>,

    /// Print title and counts only.
    #[arg(long)]
    inspect_only: bool,

    /// User-Agent header for remote requests.
    #[arg(long, env = "HTML2MD_USER_AGENT")]
    user_agent: Option<String>,

    /// Fail on non-2xx HTTP responses instead of parsing the error page.
    #[arg(long, env = "HTML2MD_ERROR_FOR_STATUS")]
    error_for_status: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "HTML2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and results.
    #[arg(short, long, env = "HTML2MD_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ViewArg {
    Paragraphs,
    Images,
    Figures,
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // Contradictory --file/--text is rejected by the library.
    let input = InputSpec::from_flags(&cli.input, cli.file, cli.text).context("Invalid input")?;
    let config = build_config(&cli)?;

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let meta = inspect(input, &config)
            .await
            .context("Failed to inspect document")?;
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&meta).context("Failed to serialize metadata")?
            );
        } else {
            print_metadata(&cli, &meta);
        }
        return Ok(());
    }

    // ── Run extraction ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let output = extract_to_file(input, output_path, &config)
            .await
            .context("Extraction failed")?;
        if !cli.quiet {
            eprintln!(
                "{}  {} paragraphs  {} images  {} figures  →  {}",
                green("✔"),
                output.paragraphs.len(),
                output.images.len(),
                output.figures.len(),
                bold(&output_path.display().to_string()),
            );
        }
        return Ok(());
    }

    let output = extract(input, &config).await.context("Extraction failed")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        let json = view_json(&output, cli.view).context("Failed to serialise output")?;
        writeln!(handle, "{json}").context("Failed to write to stdout")?;
    } else {
        write_text(&mut handle, &output, cli.view).context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Map CLI args to `SourceConfig`.
fn build_config(cli: &Cli) -> Result<SourceConfig> {
    let mut builder = SourceConfig::builder().error_for_status(cli.error_for_status);
    if let Some(ref ua) = cli.user_agent {
        builder = builder.user_agent(ua);
    }
    builder.build().context("Invalid configuration")
}

fn print_metadata(cli: &Cli, meta: &DocumentMetadata) {
    match meta.source.location {
        Some(ref loc) => println!("Source:       {} ({})", loc, meta.source.mode),
        None => println!("Source:       {}", meta.source.mode),
    }
    if let Some(ref t) = meta.title {
        println!("Title:        {}", t);
    }
    println!("Bytes:        {}", meta.source.markup_bytes);
    println!("Paragraphs:   {}", meta.paragraph_count);
    println!("Images:       {}", meta.image_count);
    println!("Figures:      {}", meta.figure_count);
    if cli.verbose {
        println!("Parse errors: {}", meta.parse_errors);
    }
}

fn view_json(output: &ExtractionOutput, view: ViewArg) -> serde_json::Result<String> {
    match view {
        ViewArg::Paragraphs => serde_json::to_string_pretty(&output.paragraphs),
        ViewArg::Images => serde_json::to_string_pretty(&output.images),
        ViewArg::Figures => serde_json::to_string_pretty(&output.figures),
        ViewArg::All => serde_json::to_string_pretty(output),
    }
}

fn write_text(out: &mut impl Write, output: &ExtractionOutput, view: ViewArg) -> io::Result<()> {
    let all = view == ViewArg::All;

    if all || view == ViewArg::Paragraphs {
        if all {
            writeln!(out, "{}", bold(&format!("Paragraphs ({})", output.paragraphs.len())))?;
        }
        for p in &output.paragraphs {
            writeln!(out, "{}", one_line(p))?;
        }
    }

    if all || view == ViewArg::Images {
        if all {
            writeln!(out, "\n{}", bold(&format!("Images ({})", output.images.len())))?;
        }
        for img in &output.images {
            match img.src {
                Some(ref src) => writeln!(out, "{src}")?,
                None => writeln!(out, "{}", dim("(no src)"))?,
            }
        }
    }

    if all || view == ViewArg::Figures {
        if all {
            writeln!(out, "\n{}", bold(&format!("Figures ({})", output.figures.len())))?;
        }
        for (n, figure) in &output.figures {
            let caption = figure
                .caption
                .as_deref()
                .map(one_line)
                .unwrap_or_else(|| dim("(no caption)"));
            writeln!(out, "{n:>3}. {}  {}", figure.image, caption)?;
        }
    }

    Ok(())
}

/// Collapse runs of whitespace so multi-line text prints on one line.
fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
