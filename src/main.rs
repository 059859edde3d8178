use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use okscale::config::PaletteSpec;
use okscale::output::{self, Format};

#[derive(Parser)]
#[command(name = "okscale", version)]
#[command(about = "Generate color scales with predictable WCAG contrast")]
struct Cli {
    /// Palette config (JSON, or YAML for .yaml/.yml). Built-in palette if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Color encoding
    #[arg(short, long, value_enum, default_value_t = Format::Hex)]
    format: Format,

    /// Print a contrast audit per family instead of the palette.
    /// Exits with status 1 if any family misses AA
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "okscale=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when a report found AA violations.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let spec = match &cli.config {
        Some(path) => PaletteSpec::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PaletteSpec::default(),
    };

    let palette = output::generate_palette(&spec)?;

    let (text, clean) = if cli.report {
        let summaries = output::audit_palette(&palette);
        let clean = summaries.values().all(|s| s.aa_violations == 0);
        (output::render_report(&summaries)?, clean)
    } else {
        (output::render_palette(&palette, cli.format)?, true)
    };

    match &cli.output {
        Some(path) => write_output(path, &text)?,
        None => println!("{text}"),
    }
    Ok(clean)
}

fn write_output(path: &Path, text: &str) -> anyhow::Result<()> {
    std::fs::write(path, format!("{text}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote palette");
    Ok(())
}
