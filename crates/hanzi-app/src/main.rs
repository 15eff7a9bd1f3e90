use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use hanzi_config::Config;
use hanzi_core::types::OutputDocument;
use hanzi_lang_chinese::{HskLevel, HskLoader};

use self::cli::Cli;

mod cli;
mod logging;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(Config::new());
    logging::init(&config);

    match &cli.check {
        Some(path) => check(path, &mut io::stderr().lock()),
        None => build(&cli, &config, &mut io::stdout().lock()),
    }
}

/// Build the document and write it to `out`
fn build(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    let level = cli.level;

    let doc = match &cli.data {
        Some(path) => HskLoader::load_from_file(path, level, config.numbering)
            .with_context(|| format!("failed to load vocabulary from {}", path.display()))?,
        None => HskLoader::load_embedded(level, config.numbering).with_context(|| {
            let embedded: Vec<String> = HskLoader::embedded_levels()
                .iter()
                .map(|level| level.label())
                .collect();
            format!(
                "no embedded vocabulary for {} (embedded: {}), pass --data",
                level.description(),
                embedded.join(", ")
            )
        })?,
    };

    doc.verify().context("built document is inconsistent")?;
    tracing::debug!(
        "numbering={} indent={} {}={}",
        config.numbering,
        config.output.indent,
        level.label(),
        doc.level_count(level.number())
    );

    write_document(&doc, config.output.indent, out)
}

fn write_document(doc: &OutputDocument, indent: usize, out: &mut impl Write) -> Result<()> {
    let json = doc.to_json_pretty(indent)?;

    writeln!(out, "{json}").context("failed to write document")?;
    out.flush()?;

    Ok(())
}

/// Verify a document written by an earlier run, reporting to `report`
fn check(path: &Path, report: &mut impl Write) -> Result<()> {
    let doc = HskLoader::read_document(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;

    doc.verify()
        .with_context(|| format!("{} failed verification", path.display()))?;
    for entry in &doc.entries {
        HskLevel::try_from(entry.level)
            .with_context(|| format!("{} has an invalid level on {}", path.display(), entry.id))?;
    }

    let levels: Vec<String> = doc
        .metadata
        .levels
        .iter()
        .map(|(label, count)| format!("{label}={count}"))
        .collect();
    writeln!(
        report,
        "{}: ok, {} entries ({})",
        path.display(),
        doc.metadata.total_characters,
        levels.join(", ")
    )?;

    Ok(())
}
