use std::path::Path;

use hanzi_core::error::BuildError;
use hanzi_core::numbering::IdNumbering;
use hanzi_core::types::OutputDocument;

use crate::builder::build_document;
use crate::hsk::HskLevel;

const HSK1_DATA: &str = include_str!("../data/hsk1.txt");

pub struct HskLoader;

impl HskLoader {
    /// Raw vocabulary block shipped with the crate for `level`, if any
    pub fn embedded(level: HskLevel) -> Option<&'static str> {
        match level {
            HskLevel::Hsk1 => Some(HSK1_DATA),
            _ => None,
        }
    }

    /// Levels that have an embedded block
    pub fn embedded_levels() -> Vec<HskLevel> {
        HskLevel::ALL
            .into_iter()
            .filter(|level| Self::embedded(*level).is_some())
            .collect()
    }

    /// Build the document for one embedded level
    pub fn load_embedded(level: HskLevel, numbering: IdNumbering) -> Option<OutputDocument> {
        let text = Self::embedded(level)?;
        tracing::info!("Loading embedded {} vocabulary...", level.description());
        let doc = build_document(&[(level, text)], numbering);
        tracing::info!("Loaded {} entries", doc.metadata.total_characters);
        Some(doc)
    }

    /// Build the document for one level from a UTF-8 file
    pub fn load_from_file(
        path: &Path,
        level: HskLevel,
        numbering: IdNumbering,
    ) -> Result<OutputDocument, BuildError> {
        tracing::info!("Loading {} vocabulary from file: {}", level.description(), path.display());
        let text = std::fs::read_to_string(path)?;
        let doc = build_document(&[(level, text.as_str())], numbering);
        tracing::info!("Loaded {} entries from file", doc.metadata.total_characters);
        Ok(doc)
    }

    /// Read a document written by an earlier run
    pub fn read_document(path: &Path) -> Result<OutputDocument, BuildError> {
        tracing::info!("Reading document: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        OutputDocument::from_json(&json)
    }
}
