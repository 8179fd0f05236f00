pub mod engine;
pub mod error;
pub mod options;
pub mod pattern;
pub mod preset;
pub mod store;
pub mod translit;
pub mod ui;
pub mod wordsource;

pub use engine::{GeneratedPassphrase, PassphraseEngine};
pub use error::Error;
pub use options::{validate_all, PassphraseOptions};
pub use pattern::{pattern_for, GrammarCategory};
pub use preset::{Complexity, PresetCatalog};
pub use store::{JsonFileStore, OptionsStore};
pub use translit::transliterate;
pub use wordsource::{BundledDictionaries, DictionaryDir, WordSource};
