use std::path::PathBuf;

use clap::Parser;
use hanzi_config::Config;
use hanzi_core::numbering::IdNumbering;
use hanzi_lang_chinese::HskLevel;

/// Build the HSK vocabulary document and print it as JSON on stdout.
///
/// With no flags the embedded HSK 1 list is used.
#[derive(Parser, Debug)]
#[command(name = "hsk-build", version)]
pub struct Cli {
    /// Vocabulary file (one `hanzi,pinyin,english` entry per line) to use instead of the embedded list
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// HSK level of the vocabulary block (1-6, "hsk2" or "HSK 2")
    #[arg(long, default_value = "1", value_parser = parse_level)]
    pub level: HskLevel,

    /// Id counter policy when several levels share a run (per-level or global)
    #[arg(long)]
    pub numbering: Option<IdNumbering>,

    /// Spaces per JSON indentation level
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub indent: Option<u16>,

    /// Verify an existing document instead of building one
    #[arg(long, value_name = "PATH", conflicts_with_all = ["data", "level", "numbering", "indent"])]
    pub check: Option<PathBuf>,
}

fn parse_level(s: &str) -> Result<HskLevel, String> {
    HskLevel::from_label(s).ok_or_else(|| format!("'{s}' is not an HSK level between 1 and 6"))
}

impl Cli {
    /// Command line flags take precedence over the environment
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(numbering) = self.numbering {
            config.numbering = numbering;
        }
        if let Some(indent) = self.indent {
            config.output.indent = usize::from(indent);
        }
        config
    }
}
