use crate::error::Error;
use crate::options::PassphraseOptions;
use crate::pattern::pattern_for;
use crate::translit::transliterate_all;
use crate::wordsource::WordSource;
use rand::seq::SliceRandom;
use rand::Rng;

/// Characters eligible for random insertion between words. Layout
/// transliteration can already produce punctuation, so the insertion count
/// stays small.
pub const SPECIAL_CHARACTERS: [char; 20] = [
    '!', '?', '"', '#', '$', '%', '&', '\'', '*', '+', ',', '.', '/', ':', ';', '=', '\\', '^',
    '|', '~',
];

/// Bounds for the number of inserted special characters and for the number
/// of digits in the prepended number.
const MIN_EXTRAS: u32 = 1;
const MAX_EXTRAS: u32 = 4;

/// One generated passphrase: the transliterated login form and the original
/// Russian phrase, token for token index-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassphrase {
    pub transliterated: Vec<String>,
    pub original: Vec<String>,
}

impl GeneratedPassphrase {
    /// Login-friendly rendering: transliterated tokens run together.
    pub fn login(&self) -> String {
        self.transliterated.concat()
    }

    /// Memorable rendering: original tokens separated by spaces.
    pub fn phrase(&self) -> String {
        self.original.join(" ")
    }
}

pub struct PassphraseEngine<S, R> {
    source: S,
    rng: R,
}

impl<S: WordSource, R: Rng> PassphraseEngine<S, R> {
    pub fn new(source: S, rng: R) -> Self {
        Self { source, rng }
    }

    /// Builds one passphrase. Out-of-range word counts fail here; option
    /// defaulting belongs to the validator, which runs before the engine.
    pub fn generate(&mut self, options: &PassphraseOptions) -> Result<GeneratedPassphrase, Error> {
        let pattern = pattern_for(options.words_count)?;

        let mut original = Vec::with_capacity(pattern.len());
        for &category in pattern {
            let candidates = self.source.words(category)?;
            let word = candidates
                .choose(&mut self.rng)
                .ok_or(Error::EmptyDictionary(category))?;
            original.push(word.to_lowercase());
        }

        let mut transliterated = transliterate_all(&original)?;
        for word in &mut transliterated {
            *word = truncate(word, options.char_count as usize);
        }

        if options.use_upper_case {
            for word in &mut original {
                *word = capitalize(word);
            }
            for word in &mut transliterated {
                *word = capitalize(word);
            }
        }

        if options.use_special {
            let specials_count = self.rng.gen_range(MIN_EXTRAS..=MAX_EXTRAS);
            for _ in 0..specials_count {
                let special = SPECIAL_CHARACTERS[self.rng.gen_range(0..SPECIAL_CHARACTERS.len())];
                // The window is re-drawn against the current length each
                // iteration and reaches one past the end; a past-the-end
                // draw appends.
                let drawn = self.rng.gen_range(0..=original.len() + 1);
                let pos = drawn.min(original.len());
                original.insert(pos, special.to_string());
                transliterated.insert(pos, special.to_string());
            }
        }

        if options.use_numbers {
            let digits_count = self.rng.gen_range(MIN_EXTRAS..=MAX_EXTRAS);
            let mut number: u32 = 0;
            for exponent in 0..digits_count {
                number += self.rng.gen_range(0..10u32) * 10u32.pow(exponent);
            }
            // A zero high digit shortens the rendered number; the token is
            // the decimal value, not a zero-padded digit string.
            let token = number.to_string();
            original.insert(0, token.clone());
            transliterated.insert(0, token);
        }

        Ok(GeneratedPassphrase {
            transliterated,
            original,
        })
    }
}

/// Keeps the first `char_count` characters; shorter words stay whole.
fn truncate(word: &str, char_count: usize) -> String {
    word.chars().take(char_count).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::GrammarCategory;
    use crate::wordsource::BundledDictionaries;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    /// Source whose dictionaries hold exactly one scripted word per draw,
    /// making the word sequence deterministic regardless of the RNG.
    struct ScriptedSource {
        queues: RefCell<HashMap<GrammarCategory, VecDeque<&'static str>>>,
    }

    impl ScriptedSource {
        fn new(script: &[(GrammarCategory, &'static str)]) -> Self {
            let mut queues: HashMap<GrammarCategory, VecDeque<&'static str>> = HashMap::new();
            for &(category, word) in script {
                queues.entry(category).or_default().push_back(word);
            }
            Self {
                queues: RefCell::new(queues),
            }
        }
    }

    impl WordSource for ScriptedSource {
        fn words(&self, category: GrammarCategory) -> Result<Vec<String>, Error> {
            let mut queues = self.queues.borrow_mut();
            let word = queues
                .get_mut(&category)
                .and_then(VecDeque::pop_front)
                .ok_or(Error::EmptyDictionary(category))?;
            Ok(vec![word.to_string()])
        }
    }

    struct EmptySource;

    impl WordSource for EmptySource {
        fn words(&self, _category: GrammarCategory) -> Result<Vec<String>, Error> {
            Ok(Vec::new())
        }
    }

    fn plain_options(words_count: u8, char_count: u8) -> PassphraseOptions {
        PassphraseOptions {
            words_count,
            char_count,
            use_numbers: false,
            use_special: false,
            use_upper_case: false,
        }
    }

    fn scenario_source() -> ScriptedSource {
        use GrammarCategory::{Adjective, Infinitive, Noun};
        ScriptedSource::new(&[
            (Adjective, "красивый"),
            (Noun, "дом"),
            (Infinitive, "бежать"),
            (Noun, "река"),
        ])
    }

    #[test]
    fn test_scenario_four_words_exact_output() {
        let mut engine = PassphraseEngine::new(scenario_source(), StdRng::seed_from_u64(7));
        let passphrase = engine.generate(&plain_options(4, 3)).unwrap();

        assert_eq!(
            passphrase.original,
            vec!["красивый", "дом", "бежать", "река"]
        );
        assert_eq!(passphrase.transliterated, vec!["rhf", "ljv", ",t;", "htr"]);
        assert_eq!(passphrase.login(), "rhfljv,t;htr");
        assert_eq!(passphrase.phrase(), "красивый дом бежать река");
    }

    #[test]
    fn test_scenario_capitalization_applies_to_both_sequences() {
        let options = PassphraseOptions {
            use_upper_case: true,
            ..plain_options(4, 3)
        };
        let mut engine = PassphraseEngine::new(scenario_source(), StdRng::seed_from_u64(7));
        let passphrase = engine.generate(&options).unwrap();

        assert_eq!(
            passphrase.original,
            vec!["Красивый", "Дом", "Бежать", "Река"]
        );
        assert_eq!(passphrase.transliterated, vec!["Rhf", "Ljv", ",t;", "Htr"]);
    }

    #[test]
    fn test_char_count_longer_than_word_keeps_word_whole() {
        use GrammarCategory::{Adjective, Noun};
        let source = ScriptedSource::new(&[(Adjective, "тихий"), (Noun, "дом")]);
        let mut engine = PassphraseEngine::new(source, StdRng::seed_from_u64(1));

        let passphrase = engine.generate(&plain_options(2, 5)).unwrap();
        assert_eq!(passphrase.transliterated, vec!["nb[bq", "ljv"]);
    }

    #[test]
    fn test_invalid_word_count_fails_fast() {
        let mut engine = PassphraseEngine::new(BundledDictionaries, StdRng::seed_from_u64(1));
        for count in [0u8, 1, 7] {
            assert_eq!(
                engine.generate(&plain_options(count, 3)).unwrap_err(),
                Error::UnknownWordCount(count)
            );
        }
    }

    #[test]
    fn test_empty_dictionary_propagates() {
        let mut engine = PassphraseEngine::new(EmptySource, StdRng::seed_from_u64(1));
        assert_eq!(
            engine.generate(&plain_options(2, 3)).unwrap_err(),
            Error::EmptyDictionary(GrammarCategory::Adjective)
        );
    }

    #[test]
    fn test_sequences_stay_aligned_with_all_augmentations() {
        for seed in 0..64 {
            let mut engine =
                PassphraseEngine::new(BundledDictionaries, StdRng::seed_from_u64(seed));
            for words_count in 2..=6u8 {
                let options = PassphraseOptions {
                    words_count,
                    char_count: 3,
                    use_numbers: true,
                    use_special: true,
                    use_upper_case: false,
                };
                let passphrase = engine.generate(&options).unwrap();

                assert_eq!(passphrase.transliterated.len(), passphrase.original.len());

                let specials: Vec<usize> = passphrase
                    .original
                    .iter()
                    .enumerate()
                    .filter(|(_, token)| {
                        token.chars().count() == 1
                            && SPECIAL_CHARACTERS
                                .contains(&token.chars().next().unwrap())
                    })
                    .map(|(i, _)| i)
                    .collect();
                let specials_count = specials.len();
                assert!((1..=4).contains(&specials_count));

                // One number token plus the words plus the specials.
                assert_eq!(
                    passphrase.original.len(),
                    words_count as usize + specials_count + 1
                );

                // Inserted tokens are identical at identical indexes.
                for &i in &specials {
                    assert_eq!(passphrase.original[i], passphrase.transliterated[i]);
                }
            }
        }
    }

    #[test]
    fn test_number_token_prepended_to_both_sequences() {
        for seed in 0..32 {
            let mut engine =
                PassphraseEngine::new(BundledDictionaries, StdRng::seed_from_u64(seed));
            let options = PassphraseOptions {
                use_numbers: true,
                ..plain_options(3, 3)
            };
            let passphrase = engine.generate(&options).unwrap();

            assert_eq!(passphrase.original.len(), 4);
            let number = &passphrase.original[0];
            assert_eq!(number, &passphrase.transliterated[0]);
            assert!(number.bytes().all(|b| b.is_ascii_digit()));
            assert!(number.len() <= 4);
            assert!(number.parse::<u32>().unwrap() < 10_000);
        }
    }

    #[test]
    fn test_truncation_is_idempotent() {
        for word in ["rhfcbdsq", "ljv", ",t;fnm", "ht"] {
            let once = truncate(word, 3);
            assert_eq!(truncate(&once, 3), once);
        }
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        assert_eq!(truncate("красивый", 3), "кра");
    }

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(capitalize("дом"), "Дом");
        assert_eq!(capitalize("rhf"), "Rhf");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize(",t;"), ",t;");
    }
}
