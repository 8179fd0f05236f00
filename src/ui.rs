use crate::engine::PassphraseEngine;
use crate::options::{
    validate_all, PassphraseOptions, CHAR_COUNT_BOUNDS, COUNT_BOUNDS, WORDS_COUNT_BOUNDS,
};
use crate::preset::{Complexity, PresetCatalog};
use crate::store::OptionsStore;
use crate::wordsource::WordSource;
use anyhow::Result;
use console::Style;
use rand::Rng;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::error;

/// Generates `count` passphrases and prints one per line: the login form,
/// then the memorable phrase.
pub fn print_passphrases<S: WordSource, R: Rng>(
    engine: &mut PassphraseEngine<S, R>,
    options: &PassphraseOptions,
    count: u8,
) -> Result<()> {
    let login_style = Style::new().bold();

    for _ in 0..count {
        let passphrase = engine.generate(options)?;
        println!(
            "{}\t {}",
            login_style.apply_to(passphrase.login()),
            passphrase.phrase()
        );
    }

    println!(
        "\n[Note]\nThe password is formed from the first {} letters of each word.",
        options.char_count
    );
    println!(
        "Numbers are used only at the beginning of the password; special characters are used as separators between words"
    );
    Ok(())
}

pub fn show_options(label: &str, options: &PassphraseOptions) {
    println!("Current {label} passphrase options:");
    println!("    words count - {}", options.words_count);
    println!("    chars count - {}", options.char_count);
    println!("    use of numbers - {}", options.use_numbers);
    println!("    use of special characters - {}", options.use_special);
    println!(
        "    capitalize the first letter of each word - {}",
        options.use_upper_case
    );
}

/// Interactive menu: pick a complexity and a passphrase count, or inspect,
/// edit, and reset the custom preset.
pub fn run_menu<S, R, T>(
    engine: &mut PassphraseEngine<S, R>,
    catalog: &mut PresetCatalog<T>,
) -> Result<()>
where
    S: WordSource,
    R: Rng,
    T: OptionsStore,
{
    loop {
        println!("Please, select passphrase complexity:");
        for (index, complexity) in Complexity::ALL.iter().enumerate() {
            println!("    [{}] {}", index + 1, capitalized(complexity.as_str()));
        }
        println!("\nPassphrase options");
        println!("    [5] Show current custom passphrase options");
        println!("    [6] Set custom passphrase options");
        println!("    [7] Reset custom passphrase options to defaults");
        println!("[0] exit");

        let selection = prompt("-> ")?;
        match selection.trim() {
            "0" => break,
            "5" => show_options("custom", &catalog.custom()),
            "6" => set_custom_options(catalog)?,
            "7" => match catalog.reset_custom_to_default() {
                Ok(()) => {
                    println!("Custom passphrase options have been restored to defaults.");
                    show_options("custom", &catalog.custom());
                }
                Err(err) => {
                    error!(%err, "failed to persist default custom options");
                    println!("Error bringing custom passphrase options to default values.");
                }
            },
            other => match other.parse::<usize>() {
                Ok(n) if (1..=Complexity::ALL.len()).contains(&n) => {
                    let complexity = Complexity::ALL[n - 1];
                    let count = prompt_count()?;
                    println!();
                    let options = catalog.options_for(complexity);
                    print_passphrases(engine, &options, count)?;
                }
                _ => error!(input = other, "invalid menu selection"),
            },
        }
        println!();
    }
    Ok(())
}

/// Prompts for the five raw custom values, validates them, and writes the
/// result through the catalog.
fn set_custom_options<T: OptionsStore>(catalog: &mut PresetCatalog<T>) -> Result<()> {
    show_options("custom", &catalog.custom());

    let raw = prompt_raw_options()?;
    let options = validate_all(&raw);

    if let Err(err) = catalog.set_custom(options) {
        error!(%err, "failed to persist custom options");
        println!("Custom passphrase options could not be saved; they apply to this run only.");
    }
    show_options("custom", &catalog.custom());
    Ok(())
}

fn prompt_raw_options() -> Result<BTreeMap<String, String>> {
    let words_count = prompt(&format!(
        "\nPlease, enter the number of words to be used in the passphrase [{}..{}, default = {}]: ",
        WORDS_COUNT_BOUNDS.min, WORDS_COUNT_BOUNDS.max, WORDS_COUNT_BOUNDS.default
    ))?;
    let char_count = prompt(&format!(
        "Please, enter the number of first letters of each word to be used in the passphrase [{}..{}, default = {}]: ",
        CHAR_COUNT_BOUNDS.min, CHAR_COUNT_BOUNDS.max, CHAR_COUNT_BOUNDS.default
    ))?;
    let use_numbers =
        prompt("Would you like to use numbers as part of the passphrase (yes[default]/no)? -> ")?;
    let use_special = prompt(
        "Would you like to use special characters as part of the passphrase (yes/no[default])? -> ",
    )?;
    let use_upper = prompt(
        "Would you like to use capital letters as part of the passphrase (yes/no[default])? -> ",
    )?;

    Ok(BTreeMap::from([
        ("words_count".to_string(), words_count),
        ("char_count".to_string(), char_count),
        ("use_numbers".to_string(), use_numbers),
        ("use_special".to_string(), use_special),
        ("use_upper_case".to_string(), use_upper),
    ]))
}

fn prompt_count() -> Result<u8> {
    let raw = prompt(&format!(
        "Please, select the number of generated passphrases [{}..{}, default = {}]: ",
        COUNT_BOUNDS.min, COUNT_BOUNDS.max, COUNT_BOUNDS.default
    ))?;
    Ok(parse_count(&raw))
}

/// The menu defaults silently; only the options store path warns. The raw
/// answer is checked as typed, so padding spaces fall to the default too.
fn parse_count(raw: &str) -> u8 {
    let is_digits = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    match raw.parse::<u8>() {
        Ok(n) if is_digits && (COUNT_BOUNDS.min..=COUNT_BOUNDS.max).contains(&n) => n,
        _ => COUNT_BOUNDS.default,
    }
}

/// Prints a prompt and reads one answer, stripping only the line ending so
/// an intentionally blank answer stays the empty string.
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
