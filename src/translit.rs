use crate::error::Error;

/// Keyboard-layout transliteration: each lowercase letter of the Russian
/// ЙЦУКЕН layout maps to the Latin character sitting on the same key of a
/// QWERTY keyboard. Callers lowercase words before translation.
const fn layout_key(ch: char) -> Option<char> {
    Some(match ch {
        'й' => 'q',
        'ц' => 'w',
        'у' => 'e',
        'к' => 'r',
        'е' => 't',
        'н' => 'y',
        'г' => 'u',
        'ш' => 'i',
        'щ' => 'o',
        'з' => 'p',
        'х' => '[',
        'ъ' => ']',
        'ф' => 'a',
        'ы' => 's',
        'в' => 'd',
        'а' => 'f',
        'п' => 'g',
        'р' => 'h',
        'о' => 'j',
        'л' => 'k',
        'д' => 'l',
        'ж' => ';',
        'э' => '\'',
        'я' => 'z',
        'ч' => 'x',
        'с' => 'c',
        'м' => 'v',
        'и' => 'b',
        'т' => 'n',
        'ь' => 'm',
        'б' => ',',
        'ю' => '.',
        'ё' => '`',
        _ => return None,
    })
}

/// Transliterates one word character by character. A character outside the
/// source layout fails instead of being passed through or skipped.
pub fn transliterate(word: &str) -> Result<String, Error> {
    word.chars()
        .map(|ch| layout_key(ch).ok_or(Error::UnsupportedCharacter(ch)))
        .collect()
}

/// Element-wise transliteration of a word sequence.
pub fn transliterate_all(words: &[String]) -> Result<Vec<String>, Error> {
    words.iter().map(|w| transliterate(w)).collect()
}
