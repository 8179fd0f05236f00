use crate::pattern::GrammarCategory;
use thiserror::Error;

/// Failures that abort a single generation request. Option-validation
/// problems never surface here; the validator recovers them in place by
/// substituting defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no passphrase pattern is defined for {0} words (expected 2..=6)")]
    UnknownWordCount(u8),

    #[error("unknown passphrase preset \"{0}\"")]
    UnknownPreset(String),

    #[error("character '{0}' has no mapping in the transliteration table")]
    UnsupportedCharacter(char),

    #[error("dictionary for {0} contains no words")]
    EmptyDictionary(GrammarCategory),
}
