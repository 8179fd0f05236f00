use crate::error::Error;
use std::fmt;

/// Grammatical roles a passphrase word can be drawn for. One dictionary
/// exists per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarCategory {
    Adjective,
    Adverb,
    Noun,
    Numeral,
    Infinitive,
}

impl GrammarCategory {
    pub const ALL: [Self; 5] = [
        Self::Adjective,
        Self::Adverb,
        Self::Noun,
        Self::Numeral,
        Self::Infinitive,
    ];

    /// Part-of-speech tag, also the stem of the dictionary file name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Adjective => "ADJF",
            Self::Adverb => "ADVB",
            Self::Noun => "NOUN",
            Self::Numeral => "NUMR",
            Self::Infinitive => "INFN",
        }
    }
}

impl fmt::Display for GrammarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

use GrammarCategory::{Adjective, Adverb, Infinitive, Noun};

const PATTERN_2: [GrammarCategory; 2] = [Adjective, Noun];
const PATTERN_3: [GrammarCategory; 3] = [Noun, Infinitive, Noun];
const PATTERN_4: [GrammarCategory; 4] = [Adjective, Noun, Infinitive, Noun];
const PATTERN_5: [GrammarCategory; 5] = [Adjective, Noun, Infinitive, Adjective, Noun];
const PATTERN_6: [GrammarCategory; 6] = [Adjective, Noun, Adverb, Infinitive, Adjective, Noun];

/// Ordered category sequence for a passphrase of `word_count` words.
pub fn pattern_for(word_count: u8) -> Result<&'static [GrammarCategory], Error> {
    match word_count {
        2 => Ok(&PATTERN_2),
        3 => Ok(&PATTERN_3),
        4 => Ok(&PATTERN_4),
        5 => Ok(&PATTERN_5),
        6 => Ok(&PATTERN_6),
        other => Err(Error::UnknownWordCount(other)),
    }
}
