use crate::error::Error;
use crate::options::{validate_all, PassphraseOptions};
use crate::store::OptionsStore;
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

pub const WEAK: PassphraseOptions = PassphraseOptions {
    words_count: 3,
    char_count: 3,
    use_numbers: false,
    use_special: false,
    use_upper_case: false,
};

pub const STANDARD: PassphraseOptions = PassphraseOptions {
    words_count: 4,
    char_count: 3,
    use_numbers: true,
    use_special: false,
    use_upper_case: true,
};

pub const STRONG: PassphraseOptions = PassphraseOptions {
    words_count: 5,
    char_count: 4,
    use_numbers: true,
    use_special: true,
    use_upper_case: true,
};

/// Named complexity levels. The first three map to fixed option sets;
/// `Custom` is the single user-editable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Weak,
    Standard,
    Strong,
    Custom,
}

impl Complexity {
    pub const ALL: [Self; 4] = [Self::Weak, Self::Standard, Self::Strong, Self::Custom];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Standard => "standard",
            Self::Strong => "strong",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(Self::Weak),
            "standard" => Ok(Self::Standard),
            "strong" => Ok(Self::Strong),
            "custom" => Ok(Self::Custom),
            other => Err(Error::UnknownPreset(other.to_string())),
        }
    }
}

/// Holds the fixed presets plus the mutable custom preset. The custom set
/// is seeded from the store at startup (validated field by field) and every
/// edit writes straight back through.
pub struct PresetCatalog<S: OptionsStore> {
    store: S,
    custom: PassphraseOptions,
}

impl<S: OptionsStore> PresetCatalog<S> {
    pub fn load(store: S) -> Self {
        let custom = validate_all(&store.load());
        Self { store, custom }
    }

    pub fn options_for(&self, complexity: Complexity) -> PassphraseOptions {
        match complexity {
            Complexity::Weak => WEAK,
            Complexity::Standard => STANDARD,
            Complexity::Strong => STRONG,
            Complexity::Custom => self.custom,
        }
    }

    pub fn custom(&self) -> PassphraseOptions {
        self.custom
    }

    /// Replaces the custom preset wholesale. The in-memory copy is updated
    /// even when the write-through fails; the caller decides how to report
    /// the persistence problem.
    pub fn set_custom(&mut self, options: PassphraseOptions) -> Result<()> {
        self.custom = options;
        self.store.save(&options.to_string_map())
    }

    pub fn reset_custom_to_default(&mut self) -> Result<()> {
        self.set_custom(PassphraseOptions::CUSTOM_DEFAULT)
    }
}
