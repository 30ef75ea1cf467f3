use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// Voice the generated introduction should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Inspirational,
    Humorous,
    Confident,
    Charming,
    Energetic,
    LaidBack,
}

impl Tone {
    /// All tones in menu order.
    pub const ALL: [Tone; 9] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Inspirational,
        Tone::Humorous,
        Tone::Confident,
        Tone::Charming,
        Tone::Energetic,
        Tone::LaidBack,
    ];

    /// Human-readable label shown in menus and the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Inspirational => "Inspirational",
            Tone::Humorous => "Humorous",
            Tone::Confident => "Confident",
            Tone::Charming => "Charming",
            Tone::Energetic => "Energetic",
            Tone::LaidBack => "Laid-back",
        }
    }

    /// Lower-case label used mid-sentence.
    pub fn lowercase(&self) -> String {
        self.label().to_lowercase()
    }

    /// Parse a tone from a label, ignoring case and separators.
    pub fn from_label(value: &str) -> Option<Tone> {
        let key: String = value
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        Tone::ALL.into_iter().find(|tone| tone.label().replace('-', "").to_lowercase() == key)
    }

    fn available() -> String {
        Tone::ALL.iter().map(|tone| tone.label()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::from_label(s).ok_or_else(|| AppError::InvalidTone {
            value: s.to_string(),
            available: Tone::available(),
        })
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
