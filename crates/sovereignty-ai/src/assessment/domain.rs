use serde::{Deserialize, Serialize};

/// Highest maturity rating a single objective can carry.
pub const MAX_SEAL_LEVEL: u8 = 4;

/// The eight fixed sovereignty objective identifiers.
///
/// Identifiers are language-invariant: the same id keys the Spanish and the
/// English catalog entry, which is what lets scores and notes survive a
/// language switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectiveId {
    #[serde(rename = "SOV-1")]
    Sov1,
    #[serde(rename = "SOV-2")]
    Sov2,
    #[serde(rename = "SOV-3")]
    Sov3,
    #[serde(rename = "SOV-4")]
    Sov4,
    #[serde(rename = "SOV-5")]
    Sov5,
    #[serde(rename = "SOV-6")]
    Sov6,
    #[serde(rename = "SOV-7")]
    Sov7,
    #[serde(rename = "SOV-8")]
    Sov8,
}

impl ObjectiveId {
    /// Canonical catalog order, also the report and radar ordering.
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Sov1,
            Self::Sov2,
            Self::Sov3,
            Self::Sov4,
            Self::Sov5,
            Self::Sov6,
            Self::Sov7,
            Self::Sov8,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sov1 => "SOV-1",
            Self::Sov2 => "SOV-2",
            Self::Sov3 => "SOV-3",
            Self::Sov4 => "SOV-4",
            Self::Sov5 => "SOV-5",
            Self::Sov6 => "SOV-6",
            Self::Sov7 => "SOV-7",
            Self::Sov8 => "SOV-8",
        }
    }

    /// Index of this id within [`Self::ordered`].
    pub const fn position(self) -> usize {
        match self {
            Self::Sov1 => 0,
            Self::Sov2 => 1,
            Self::Sov3 => 2,
            Self::Sov4 => 3,
            Self::Sov5 => 4,
            Self::Sov6 => 5,
            Self::Sov7 => 6,
            Self::Sov8 => 7,
        }
    }

    /// Strict lookup used when ingesting advisor replies. Unknown identifiers
    /// return `None` so callers can skip them instead of failing.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "SOV-1" => Some(Self::Sov1),
            "SOV-2" => Some(Self::Sov2),
            "SOV-3" => Some(Self::Sov3),
            "SOV-4" => Some(Self::Sov4),
            "SOV-5" => Some(Self::Sov5),
            "SOV-6" => Some(Self::Sov6),
            "SOV-7" => Some(Self::Sov7),
            "SOV-8" => Some(Self::Sov8),
            _ => None,
        }
    }
}

impl std::fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported catalog languages. Spanish is the designated default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub const fn ordered() -> [Self; 2] {
        [Self::Es, Self::En]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Lenient parse: unsupported values fall back to the default language
    /// rather than failing.
    pub fn from_code(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Self::En,
            _ => Self::Es,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Es
    }
}

/// Rounds to the nearest whole level, then clamps into `[0, MAX_SEAL_LEVEL]`.
///
/// Total over all real inputs: negative values and NaN land on 0, anything
/// above the scale lands on the top level.
pub fn clamp_level(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, MAX_SEAL_LEVEL as f64) as u8
}
