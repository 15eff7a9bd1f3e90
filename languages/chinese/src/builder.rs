use hanzi_core::numbering::{IdCounter, IdNumbering};
use hanzi_core::preprocess::{DefaultNormalizer, FieldNormalizer};
use hanzi_core::types::{OutputDocument, VocabularyEntry};

use crate::hsk::HskLevel;

/// The three fields of one raw vocabulary line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub hanzi: &'a str,
    pub pinyin: &'a str,
    /// Everything after the second comma, commas included
    pub english: &'a str,
}

/// Split `hanzi,pinyin,english...`. Lines with fewer than three fields yield `None`.
pub fn parse_line(line: &str) -> Option<RawFields<'_>> {
    let mut fields = line.splitn(3, ',');

    Some(RawFields {
        hanzi: fields.next()?,
        pinyin: fields.next()?,
        english: fields.next()?,
    })
}

/// Turns raw vocabulary blocks into numbered entries
pub struct RecordBuilder {
    counter: IdCounter,
    normalizer: DefaultNormalizer,
    entries: Vec<VocabularyEntry>,
    levels: Vec<u8>,
}

impl RecordBuilder {
    pub fn new(numbering: IdNumbering) -> Self {
        Self {
            counter: IdCounter::new(numbering),
            normalizer: DefaultNormalizer,
            entries: Vec::new(),
            levels: Vec::new(),
        }
    }

    /// Parse every line of a block; returns how many entries it produced
    pub fn add_block(&mut self, level: HskLevel, text: &str) -> usize {
        self.register_level(level);

        let before = self.entry_count();
        for line in text.trim().lines() {
            self.add_line(level, line);
        }

        let added = self.entry_count() - before;
        tracing::debug!("{}: {} entries", level.description(), added);
        added
    }

    /// Parse one line. Short lines are dropped without consuming an id.
    ///
    /// The headword is kept byte for byte; pinyin and gloss are NFC-normalized.
    pub fn add_line(&mut self, level: HskLevel, line: &str) -> Option<&VocabularyEntry> {
        let fields = parse_line(line)?;
        self.register_level(level);

        let number = level.number();
        self.entries.push(VocabularyEntry {
            id: self.counter.next_id(number),
            hanzi: fields.hanzi.to_string(),
            pinyin: self.normalizer.normalize(fields.pinyin),
            english: self.normalizer.normalize(fields.english),
            level: number,
        });

        self.entries.last()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn finish(self) -> OutputDocument {
        OutputDocument::from_entries(self.entries, &self.levels)
    }

    fn register_level(&mut self, level: HskLevel) {
        let number = level.number();
        if !self.levels.contains(&number) {
            self.levels.push(number);
        }
    }
}

/// Build a document from `(level, text)` blocks in the given order
pub fn build_document(blocks: &[(HskLevel, &str)], numbering: IdNumbering) -> OutputDocument {
    let mut builder = RecordBuilder::new(numbering);
    for (level, text) in blocks {
        builder.add_block(*level, text);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_keeps_commas_in_gloss() {
        let fields = parse_line("爸爸,bà ba,father, dad").unwrap();
        assert_eq!(fields.hanzi, "爸爸");
        assert_eq!(fields.pinyin, "bà ba");
        assert_eq!(fields.english, "father, dad");
    }

    #[test]
    fn test_parse_line_needs_three_fields() {
        assert_eq!(parse_line("孤,gū"), None);
        assert_eq!(parse_line("孤"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_parse_line_accepts_empty_fields() {
        let fields = parse_line(",,").unwrap();
        assert_eq!((fields.hanzi, fields.pinyin, fields.english), ("", "", ""));
    }

    #[test]
    fn test_add_line_builds_entry() {
        let mut builder = RecordBuilder::new(IdNumbering::PerLevel);
        let entry = builder.add_line(HskLevel::Hsk1, "爱,ài,to love").unwrap().clone();

        assert_eq!(
            entry,
            VocabularyEntry {
                id: "hsk1-001".to_string(),
                hanzi: "爱".to_string(),
                pinyin: "ài".to_string(),
                english: "to love".to_string(),
                level: 1,
            }
        );
    }

    #[test]
    fn test_short_line_does_not_advance_counter() {
        let mut builder = RecordBuilder::new(IdNumbering::PerLevel);
        assert!(builder.add_line(HskLevel::Hsk1, "孤,gū").is_none());
        let id = builder.add_line(HskLevel::Hsk1, "八,bā,eight").unwrap().id.clone();

        assert_eq!(id, "hsk1-001");
        assert_eq!(builder.entry_count(), 1);
    }

    #[test]
    fn test_add_block_skips_malformed_lines() {
        let mut builder = RecordBuilder::new(IdNumbering::PerLevel);
        let added = builder.add_block(HskLevel::Hsk1, "\n爱,ài,to love\n孤,gū\n\n八,bā,eight\n");

        assert_eq!(added, 2);
        let ids: Vec<&str> = builder.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["hsk1-001", "hsk1-002"]);
    }

    #[test]
    fn test_add_block_ignores_carriage_returns() {
        let mut builder = RecordBuilder::new(IdNumbering::PerLevel);
        builder.add_block(HskLevel::Hsk1, "爱,ài,to love\r\n八,bā,eight\r\n");
        assert_eq!(builder.entries()[0].english, "to love");
    }

    #[test]
    fn test_fields_are_nfc_normalized() {
        let mut builder = RecordBuilder::new(IdNumbering::PerLevel);
        let entry = builder.add_line(HskLevel::Hsk1, "爱,a\u{300}i,to love").unwrap();
        assert_eq!(entry.pinyin, "ài");
    }

    #[test]
    fn test_headword_is_not_normalized() {
        let mut builder = RecordBuilder::new(IdNumbering::PerLevel);
        let entry = builder
            .add_line(HskLevel::Hsk1, "\u{F900},ge\u{304}ng,compatibility ideograph")
            .unwrap();

        assert_eq!(entry.hanzi, "\u{F900}");
        assert_eq!(entry.pinyin, "gēng");
    }

    #[test]
    fn test_numbering_across_levels() {
        let blocks = [
            (HskLevel::Hsk1, "爱,ài,to love\n八,bā,eight"),
            (HskLevel::Hsk2, "吧,ba,particle"),
        ];

        let doc = build_document(&blocks, IdNumbering::PerLevel);
        assert_eq!(doc.entries[2].id, "hsk2-001");

        let doc = build_document(&blocks, IdNumbering::Global);
        assert_eq!(doc.entries[2].id, "hsk2-003");
        assert!(doc.verify().is_ok());
    }

    #[test]
    fn test_levels_recorded_even_when_block_is_empty() {
        let doc = build_document(&[(HskLevel::Hsk1, "孤,gū")], IdNumbering::PerLevel);
        assert!(doc.entries.is_empty());
        assert_eq!(doc.metadata.total_characters, 0);
        assert_eq!(doc.metadata.levels.get("hsk1"), Some(&0));
    }
}
