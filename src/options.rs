use std::collections::BTreeMap;
use tracing::warn;

/// Full option set describing one passphrase shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassphraseOptions {
    /// Number of dictionary words, 2..=6. Selects the grammar pattern.
    pub words_count: u8,
    /// How many leading characters of each transliterated word survive, 3..=5.
    pub char_count: u8,
    /// Prepend a random multi-digit number to the phrase.
    pub use_numbers: bool,
    /// Scatter random special characters between the words.
    pub use_special: bool,
    /// Capitalize the first letter of every word.
    pub use_upper_case: bool,
}

impl PassphraseOptions {
    /// Baseline for the mutable "custom" preset; also the fallback the
    /// validator substitutes field by field.
    pub const CUSTOM_DEFAULT: Self = Self {
        words_count: 4,
        char_count: 3,
        use_numbers: true,
        use_special: false,
        use_upper_case: false,
    };

    pub const FIELD_NAMES: [&'static str; 5] = [
        "words_count",
        "char_count",
        "use_numbers",
        "use_special",
        "use_upper_case",
    ];

    /// String-map form used by the options store. Booleans keep the
    /// capitalized spelling so they stay inside the validator's YES/NO sets
    /// on the way back in.
    pub fn to_string_map(self) -> BTreeMap<String, String> {
        let bool_repr = |b: bool| if b { "True" } else { "False" }.to_string();
        BTreeMap::from([
            ("words_count".to_string(), self.words_count.to_string()),
            ("char_count".to_string(), self.char_count.to_string()),
            ("use_numbers".to_string(), bool_repr(self.use_numbers)),
            ("use_special".to_string(), bool_repr(self.use_special)),
            ("use_upper_case".to_string(), bool_repr(self.use_upper_case)),
        ])
    }
}

/// Inclusive range plus the value substituted when input fails validation.
#[derive(Debug, Clone, Copy)]
pub struct IntBounds {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

pub const WORDS_COUNT_BOUNDS: IntBounds = IntBounds {
    min: 2,
    max: 6,
    default: 4,
};

pub const CHAR_COUNT_BOUNDS: IntBounds = IntBounds {
    min: 3,
    max: 5,
    default: 3,
};

/// Number of passphrases produced per run (CLI and menu surface).
pub const COUNT_BOUNDS: IntBounds = IntBounds {
    min: 1,
    max: 20,
    default: 5,
};

const YES_ANSWERS: [&str; 7] = ["", "y", "Y", "yes", "Yes", "YES", "True"];
const NO_ANSWERS: [&str; 7] = ["", "n", "N", "no", "No", "NO", "False"];

/// Validates a raw integer option: all ASCII digits and within bounds,
/// otherwise warns and falls back to the declared default.
pub fn validate_int_option(name: &str, raw: &str, bounds: IntBounds) -> u8 {
    let is_digits = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    let parsed = if is_digits { raw.parse::<u8>().ok() } else { None };

    match parsed {
        Some(value) if (bounds.min..=bounds.max).contains(&value) => value,
        _ => {
            warn!(
                option = name,
                value = raw,
                default = bounds.default,
                "invalid integer option value, using default"
            );
            bounds.default
        }
    }
}

/// Validates a raw yes/no answer. Membership in the YES and NO answer sets
/// is combined by XOR: exactly one match decides the value, anything else
/// warns and falls back. Both sets contain the empty string, so an empty
/// answer always lands on the default.
pub fn validate_bool_option(name: &str, raw: &str, default: bool) -> bool {
    let in_yes = YES_ANSWERS.contains(&raw);
    let in_no = NO_ANSWERS.contains(&raw);

    if in_yes != in_no {
        in_yes
    } else {
        warn!(
            option = name,
            value = raw,
            default,
            "invalid boolean option value, using default"
        );
        default
    }
}

/// Validates a full raw option map. A missing key abandons the merge
/// entirely: the whole custom-default set is returned, never a partial one.
pub fn validate_all(raw: &BTreeMap<String, String>) -> PassphraseOptions {
    for key in PassphraseOptions::FIELD_NAMES {
        if !raw.contains_key(key) {
            warn!(option = key, "option key missing, using full default set");
            return PassphraseOptions::CUSTOM_DEFAULT;
        }
    }

    let defaults = PassphraseOptions::CUSTOM_DEFAULT;
    PassphraseOptions {
        words_count: validate_int_option("words_count", &raw["words_count"], WORDS_COUNT_BOUNDS),
        char_count: validate_int_option("char_count", &raw["char_count"], CHAR_COUNT_BOUNDS),
        use_numbers: validate_bool_option("use_numbers", &raw["use_numbers"], defaults.use_numbers),
        use_special: validate_bool_option("use_special", &raw["use_special"], defaults.use_special),
        use_upper_case: validate_bool_option(
            "use_upper_case",
            &raw["use_upper_case"],
            defaults.use_upper_case,
        ),
    }
}
