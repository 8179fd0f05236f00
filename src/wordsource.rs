use crate::error::Error;
use crate::pattern::GrammarCategory;
use std::fs;
use std::path::PathBuf;
use tracing::error;

/// Supplies the candidate words for one grammatical category. The whole
/// dictionary is returned so the engine controls the random draw.
pub trait WordSource {
    fn words(&self, category: GrammarCategory) -> Result<Vec<String>, Error>;
}

impl WordSource for Box<dyn WordSource> {
    fn words(&self, category: GrammarCategory) -> Result<Vec<String>, Error> {
        (**self).words(category)
    }
}

/// Dictionary file name for a category, shared by the bundled assets and
/// directory-backed sources.
pub const fn dictionary_file_name(category: GrammarCategory) -> &'static str {
    match category {
        GrammarCategory::Adjective => "adjectives.txt",
        GrammarCategory::Adverb => "adverbs.txt",
        GrammarCategory::Noun => "nouns.txt",
        GrammarCategory::Numeral => "numerals.txt",
        GrammarCategory::Infinitive => "verbs.txt",
    }
}

fn parse_lines(data: &str, category: GrammarCategory) -> Result<Vec<String>, Error> {
    let words: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(Error::EmptyDictionary(category));
    }
    Ok(words)
}

/// Dictionaries compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledDictionaries;

impl BundledDictionaries {
    const fn data(category: GrammarCategory) -> &'static str {
        match category {
            GrammarCategory::Adjective => include_str!("../assets/dictionaries/adjectives.txt"),
            GrammarCategory::Adverb => include_str!("../assets/dictionaries/adverbs.txt"),
            GrammarCategory::Noun => include_str!("../assets/dictionaries/nouns.txt"),
            GrammarCategory::Numeral => include_str!("../assets/dictionaries/numerals.txt"),
            GrammarCategory::Infinitive => include_str!("../assets/dictionaries/verbs.txt"),
        }
    }
}

impl WordSource for BundledDictionaries {
    fn words(&self, category: GrammarCategory) -> Result<Vec<String>, Error> {
        parse_lines(Self::data(category), category)
    }
}

/// Dictionaries read from a user-supplied directory. Files are re-read on
/// every request, so edits between runs are picked up without restarts.
pub struct DictionaryDir {
    dir: PathBuf,
}

impl DictionaryDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WordSource for DictionaryDir {
    fn words(&self, category: GrammarCategory) -> Result<Vec<String>, Error> {
        let path = self.dir.join(dictionary_file_name(category));
        let data = fs::read_to_string(&path).map_err(|err| {
            error!(path = %path.display(), %err, "failed to read dictionary");
            Error::EmptyDictionary(category)
        })?;
        parse_lines(&data, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::transliterate;

    #[test]
    fn test_bundled_dictionaries_nonempty() {
        let source = BundledDictionaries;
        for category in GrammarCategory::ALL {
            let words = source.words(category).unwrap();
            assert!(!words.is_empty(), "{category} dictionary is empty");
            assert!(words.iter().all(|w| !w.is_empty()));
        }
    }

    #[test]
    fn test_bundled_words_are_lowercase_and_transliterable() {
        let source = BundledDictionaries;
        for category in GrammarCategory::ALL {
            for word in source.words(category).unwrap() {
                assert_eq!(word, word.to_lowercase(), "{word} is not lowercase");
                transliterate(&word)
                    .unwrap_or_else(|err| panic!("{category} word {word:?}: {err}"));
            }
        }
    }

    #[test]
    fn test_dictionary_dir_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nouns.txt"), "дом\n\nрека  \n").unwrap();

        let source = DictionaryDir::new(dir.path());
        let words = source.words(GrammarCategory::Noun).unwrap();
        assert_eq!(words, vec!["дом".to_string(), "река".to_string()]);
    }

    #[test]
    fn test_dictionary_dir_missing_file_is_empty_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let source = DictionaryDir::new(dir.path());
        assert_eq!(
            source.words(GrammarCategory::Adverb),
            Err(Error::EmptyDictionary(GrammarCategory::Adverb))
        );
    }

    #[test]
    fn test_blank_file_is_empty_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("verbs.txt"), "\n  \n").unwrap();

        let source = DictionaryDir::new(dir.path());
        assert_eq!(
            source.words(GrammarCategory::Infinitive),
            Err(Error::EmptyDictionary(GrammarCategory::Infinitive))
        );
    }
}
