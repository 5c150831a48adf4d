//! Filename normalization: Cyrillic transliteration plus a conservative
//! character whitelist.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static TRANSLIT: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    [
        ('а', "a"), ('б', "b"), ('в', "v"), ('г', "h"), ('ґ', "g"), ('д', "d"), ('е', "e"),
        ('є', "ie"), ('ж', "zh"), ('з', "z"), ('и', "y"), ('і', "i"), ('ї', "i"), ('й', "i"),
        ('к', "k"), ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"),
        ('с', "s"), ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "kh"), ('ц', "ts"), ('ч', "ch"),
        ('ш', "sh"), ('щ', "shch"), ('ь', ""), ('ю', "iu"), ('я', "ia"),
        ('А', "A"), ('Б', "B"), ('В', "V"), ('Г', "H"), ('Ґ', "G"), ('Д', "D"), ('Е', "E"),
        ('Є', "Ye"), ('Ж', "Zh"), ('З', "Z"), ('И', "Y"), ('І', "I"), ('Ї', "Yi"), ('Й', "Y"),
        ('К', "K"), ('Л', "L"), ('М', "M"), ('Н', "N"), ('О', "O"), ('П', "P"), ('Р', "R"),
        ('С', "S"), ('Т', "T"), ('У', "U"), ('Ф', "F"), ('Х', "Kh"), ('Ц', "Ts"), ('Ч', "Ch"),
        ('Ш', "Sh"), ('Щ', "Shch"), ('Ь', ""), ('Ю', "Yu"), ('Я', "Ya"),
    ]
    .into_iter()
    .collect()
});

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9.]").expect("valid regex"));

/// Transliterates Cyrillic characters in `text`; other characters pass through.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match TRANSLIT.get(&c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

/// Normalizes a file name.
///
/// The final extension (after the last `.`) is kept as is. The rest is
/// transliterated and every character outside `[a-zA-Z0-9.]` becomes `_`.
pub fn normalize(name: &str) -> String {
    let (stem, extension) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    };
    let translated = transliterate(stem);
    let cleaned = UNSAFE_CHARS.replace_all(&translated, "_");
    match extension {
        Some(ext) => format!("{}.{}", cleaned, ext),
        None => cleaned.into_owned(),
    }
}
