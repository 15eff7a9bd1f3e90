use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{BuildError, DocumentError};
use crate::numbering::{level_label, parse_entry_id};

/// Version written into every document's metadata
pub const FORMAT_VERSION: &str = "1.0";

/// One vocabulary word of a graded HSK list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: String,
    pub hanzi: String,
    pub pinyin: String,
    pub english: String,
    #[serde(rename = "hskLevel")]
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub version: String,
    pub total_characters: usize,
    /// Entry count keyed by level label (`hsk1`)
    pub levels: BTreeMap<String, usize>,
}

/// Entries plus summary metadata, in the order they are serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub metadata: Metadata,
    #[serde(rename = "characters")]
    pub entries: Vec<VocabularyEntry>,
}

impl OutputDocument {
    /// Build the document and its metadata.
    ///
    /// Every level in `levels` gets a count, even when none of its lines parsed.
    pub fn from_entries(entries: Vec<VocabularyEntry>, levels: &[u8]) -> Self {
        let mut counts: BTreeMap<String, usize> =
            levels.iter().map(|level| (level_label(*level), 0)).collect();

        for entry in &entries {
            *counts.entry(level_label(entry.level)).or_default() += 1;
        }

        Self {
            metadata: Metadata {
                version: FORMAT_VERSION.to_string(),
                total_characters: entries.len(),
                levels: counts,
            },
            entries,
        }
    }

    /// Parse a previously written document
    pub fn from_json(json_str: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Pretty JSON with `indent` spaces per level, non-ASCII kept literal
    pub fn to_json_pretty(&self, indent: usize) -> Result<String, BuildError> {
        let indent = " ".repeat(indent.max(1));
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());

        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        Ok(String::from_utf8(buf)?)
    }

    /// Number of entries at `level`
    pub fn level_count(&self, level: u8) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Check the counts in `metadata` and the ids of `entries` against each other
    pub fn verify(&self) -> Result<(), DocumentError> {
        if self.metadata.total_characters != self.entries.len() {
            return Err(DocumentError::TotalMismatch {
                declared: self.metadata.total_characters,
                actual: self.entries.len(),
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut last_sequence: HashMap<u8, u32> = HashMap::new();
        let mut actual: BTreeMap<String, usize> = BTreeMap::new();

        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(DocumentError::DuplicateId(entry.id.clone()));
            }

            let sequence = match parse_entry_id(&entry.id) {
                Some((level, sequence)) if level == entry.level => sequence,
                _ => {
                    return Err(DocumentError::MalformedId {
                        id: entry.id.clone(),
                        level: entry.level,
                    });
                }
            };

            if let Some(previous) = last_sequence.insert(entry.level, sequence)
                && sequence <= previous
            {
                return Err(DocumentError::IdOutOfOrder(entry.id.clone()));
            }

            *actual.entry(level_label(entry.level)).or_default() += 1;
        }

        for (label, declared) in &self.metadata.levels {
            let count = actual.get(label).copied().unwrap_or(0);
            if count != *declared {
                return Err(DocumentError::LevelCountMismatch {
                    label: label.clone(),
                    declared: *declared,
                    actual: count,
                });
            }
        }

        // Levels present in entries but missing from metadata
        if let Some((label, count)) = actual
            .iter()
            .find(|(label, _)| !self.metadata.levels.contains_key(*label))
        {
            return Err(DocumentError::LevelCountMismatch {
                label: label.clone(),
                declared: 0,
                actual: *count,
            });
        }

        Ok(())
    }
}
