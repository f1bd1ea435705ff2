//! Suffix-substitution stemming for Portuguese

/// Ordered `(suffix, replacement)` rules; the first applicable rule wins.
///
/// Suffixes are folded like the tokens they are matched against, so `-ação`
/// appears as `acao`.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ando", "ar"),
    ("endo", "er"),
    ("indo", "ir"),
    ("ados", "ar"),
    ("idos", "ir"),
    ("acao", "ar"),
    ("mente", ""),
    ("cao", "r"),
    ("dade", ""),
    ("ismo", ""),
    ("ista", ""),
    ("avel", ""),
    ("ivel", ""),
    ("oso", ""),
    ("osa", ""),
    ("ado", "ar"),
    ("ida", "ir"),
];

/// Stem one token with at most one substitution.
///
/// A rule applies only when the word is longer than its suffix plus two
/// characters. The result is not stemmed again.
#[must_use]
pub fn stem(word: &str) -> String {
    let length = word.chars().count();

    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(root) = word.strip_suffix(suffix)
            && length > suffix.len() + 2
        {
            return format!("{root}{replacement}");
        }
    }

    word.to_string()
}
