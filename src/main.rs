use anyhow::Result;
use clap::{Parser, ValueEnum};
use parolka::engine::PassphraseEngine;
use parolka::options::{PassphraseOptions, CHAR_COUNT_BOUNDS, COUNT_BOUNDS, WORDS_COUNT_BOUNDS};
use parolka::preset::{Complexity, PresetCatalog};
use parolka::store::JsonFileStore;
use parolka::ui;
use parolka::wordsource::{BundledDictionaries, DictionaryDir, WordSource};
use rand::rngs::OsRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "parolka",
    version,
    about = "Memorable dual-layout passphrase generator",
    after_help = "Examples:\n  \
        parolka --main-menu\n  \
        parolka --compl strong -c 3\n  \
        parolka -w 5 -l 4 -n -s -u"
)]
struct Cli {
    /// Open a simple interactive menu
    #[arg(short = 'm', long)]
    main_menu: bool,

    /// Complexity of the generated passphrases
    #[arg(long, value_enum, default_value = "standard")]
    compl: CliComplexity,

    /// Number of generated passphrases
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=20),
        default_value_t = COUNT_BOUNDS.default
    )]
    count: u8,

    /// Number of words to be used in each passphrase
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u8).range(2..=6))]
    word_count: Option<u8>,

    /// Number of first letters of each word kept in the login form
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(3..=5))]
    char_count: Option<u8>,

    /// Use numbers as part of the passphrase
    #[arg(short = 'n', long = "num")]
    num: bool,

    /// Use special characters as part of the passphrase
    #[arg(short = 's', long = "special-chars")]
    special_chars: bool,

    /// Use capital letters as part of the passphrase
    #[arg(short = 'u', long = "upper-case")]
    upper_case: bool,

    /// Directory with dictionary files (bundled dictionaries by default)
    #[arg(long, value_name = "DIR")]
    dictionaries: Option<PathBuf>,

    /// Path to the options file
    #[arg(long, value_name = "FILE", default_value = "parolka.json")]
    config: PathBuf,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum CliComplexity {
    Weak,
    Standard,
    Strong,
}

impl From<CliComplexity> for Complexity {
    fn from(value: CliComplexity) -> Self {
        match value {
            CliComplexity::Weak => Self::Weak,
            CliComplexity::Standard => Self::Standard,
            CliComplexity::Strong => Self::Strong,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source: Box<dyn WordSource> = match &cli.dictionaries {
        Some(dir) => Box::new(DictionaryDir::new(dir.clone())),
        None => Box::new(BundledDictionaries),
    };
    let mut engine = PassphraseEngine::new(source, OsRng);
    let mut catalog = PresetCatalog::load(JsonFileStore::new(cli.config.clone()));

    if cli.main_menu {
        return ui::run_menu(&mut engine, &mut catalog);
    }

    let custom_requested = cli.word_count.is_some()
        || cli.char_count.is_some()
        || cli.num
        || cli.special_chars
        || cli.upper_case;

    let options = if custom_requested {
        PassphraseOptions {
            words_count: cli.word_count.unwrap_or(WORDS_COUNT_BOUNDS.default),
            char_count: cli.char_count.unwrap_or(CHAR_COUNT_BOUNDS.default),
            use_numbers: cli.num,
            use_special: cli.special_chars,
            use_upper_case: cli.upper_case,
        }
    } else {
        catalog.options_for(cli.compl.into())
    };

    ui::print_passphrases(&mut engine, &options, cli.count)
}
