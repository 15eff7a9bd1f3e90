use unicode_normalization::UnicodeNormalization;

pub trait FieldNormalizer {
    // NFC also maps CJK compatibility ideographs (U+F900..U+FAFF) to their
    // unified forms, so headwords must not go through this
    fn normalize(&self, field: &str) -> String {
        field.nfc().collect()
    }
}

pub struct DefaultNormalizer;
impl FieldNormalizer for DefaultNormalizer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composes_decomposed_tone_marks() {
        let decomposed = "a\u{300}i";
        assert_eq!(DefaultNormalizer.normalize(decomposed), "ài");
    }

    #[test]
    fn test_keeps_precomposed_text_unchanged() {
        for field in ["爸爸", "bà ba", "father, dad", "you're welcome"] {
            assert_eq!(DefaultNormalizer.normalize(field), field);
        }
    }

    #[test]
    fn test_compatibility_ideographs_are_rewritten() {
        assert_eq!(DefaultNormalizer.normalize("\u{F900}"), "\u{8C48}");
    }

    #[test]
    fn test_does_not_fold_fullwidth_forms() {
        assert_eq!(DefaultNormalizer.normalize("Ａ"), "Ａ");
    }
}
