use hanzi_core::error::BuildError;
use hanzi_core::numbering::level_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HskLevel {
    Hsk1, // Beginner (150 words)
    Hsk2, // Elementary (+150 words)
    Hsk3, // Intermediate (+300 words)
    Hsk4, // Upper intermediate (+600 words)
    Hsk5, // Advanced (+1300 words)
    Hsk6, // Proficient (+2500 words)
}

impl HskLevel {
    pub const ALL: [HskLevel; 6] = [
        HskLevel::Hsk1,
        HskLevel::Hsk2,
        HskLevel::Hsk3,
        HskLevel::Hsk4,
        HskLevel::Hsk5,
        HskLevel::Hsk6,
    ];

    /// Level from its number (1-6)
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HskLevel::Hsk1),
            2 => Some(HskLevel::Hsk2),
            3 => Some(HskLevel::Hsk3),
            4 => Some(HskLevel::Hsk4),
            5 => Some(HskLevel::Hsk5),
            6 => Some(HskLevel::Hsk6),
            _ => None,
        }
    }

    /// Parse "hsk3", "HSK 3" or "3"
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let number = s.strip_prefix("hsk").unwrap_or(&s).trim();
        number.parse().ok().and_then(Self::from_number)
    }

    pub fn number(&self) -> u8 {
        match self {
            HskLevel::Hsk1 => 1,
            HskLevel::Hsk2 => 2,
            HskLevel::Hsk3 => 3,
            HskLevel::Hsk4 => 4,
            HskLevel::Hsk5 => 5,
            HskLevel::Hsk6 => 6,
        }
    }

    /// Metadata key, e.g. "hsk1"
    pub fn label(&self) -> String {
        level_label(self.number())
    }

    pub fn description(&self) -> &'static str {
        match self {
            HskLevel::Hsk1 => "HSK 1 (Beginner)",
            HskLevel::Hsk2 => "HSK 2 (Elementary)",
            HskLevel::Hsk3 => "HSK 3 (Intermediate)",
            HskLevel::Hsk4 => "HSK 4 (Upper Intermediate)",
            HskLevel::Hsk5 => "HSK 5 (Advanced)",
            HskLevel::Hsk6 => "HSK 6 (Proficient)",
        }
    }
}

impl TryFrom<u8> for HskLevel {
    type Error = BuildError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n).ok_or(BuildError::InvalidLevel(n))
    }
}
