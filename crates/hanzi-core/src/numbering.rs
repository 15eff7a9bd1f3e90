use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Metadata key for a level, e.g. `hsk1`
pub fn level_label(level: u8) -> String {
    format!("hsk{level}")
}

/// Entry id for a level and sequence number, e.g. `hsk1-007`
pub fn entry_id(level: u8, sequence: u32) -> String {
    format!("hsk{level}-{sequence:03}")
}

/// Split an entry id into its level and sequence number
pub fn parse_entry_id(id: &str) -> Option<(u8, u32)> {
    let (level, sequence) = id.strip_prefix("hsk")?.split_once('-')?;

    if !is_digits(level) || !is_digits(sequence) {
        return None;
    }

    Some((level.parse().ok()?, sequence.parse().ok()?))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// How the id counter behaves when a run covers more than one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdNumbering {
    /// Every level starts again at 1 (`hsk2-001`)
    #[default]
    PerLevel,
    /// One counter for the whole run (`hsk2-151` after 150 level 1 entries)
    Global,
}

impl IdNumbering {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdNumbering::PerLevel => "per-level",
            IdNumbering::Global => "global",
        }
    }
}

impl FromStr for IdNumbering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per-level" | "per_level" | "level" => Ok(IdNumbering::PerLevel),
            "global" => Ok(IdNumbering::Global),
            other => Err(format!(
                "unknown numbering '{other}', expected 'per-level' or 'global'"
            )),
        }
    }
}

impl fmt::Display for IdNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hands out entry ids in input order
#[derive(Debug, Clone)]
pub struct IdCounter {
    numbering: IdNumbering,
    global: u32,
    per_level: HashMap<u8, u32>,
}

impl IdCounter {
    pub fn new(numbering: IdNumbering) -> Self {
        Self {
            numbering,
            global: 0,
            per_level: HashMap::new(),
        }
    }

    /// Advance the counter and return the id for the next entry of `level`
    pub fn next_id(&mut self, level: u8) -> String {
        let sequence = match self.numbering {
            IdNumbering::Global => {
                self.global += 1;
                self.global
            }
            IdNumbering::PerLevel => {
                let counter = self.per_level.entry(level).or_insert(0);
                *counter += 1;
                *counter
            }
        };

        entry_id(level, sequence)
    }
}
