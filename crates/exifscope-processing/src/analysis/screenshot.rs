//! Screenshot detection from the source file name

use unicode_normalization::UnicodeNormalization;

/// Keywords matched literally; accented and unaccented French spellings are
/// listed separately, as are straight and curly apostrophes.
const SCREENSHOT_KEYWORDS: &[&str] = &[
    "screen-shot",
    "screenshot",
    "capture d'ecran",
    "capture d\u{2019}ecran",
    "capture d'\u{e9}cran",
    "capture d\u{2019}\u{e9}cran",
    "capture ecran",
];

/// NFKC-normalize then lowercase.
fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Final path segment, accepting both `/` and `\` separators.
fn basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// True when the full name or its basename contains a screenshot keyword.
pub fn looks_like_screenshot(source_name: &str) -> bool {
    if source_name.is_empty() {
        return false;
    }
    let full = fold(source_name);
    let base = fold(basename(source_name));
    SCREENSHOT_KEYWORDS
        .iter()
        .any(|keyword| full.contains(keyword) || base.contains(keyword))
}
