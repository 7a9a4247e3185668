//! Script-aware initials extraction.
//!
//! Latin-style names contribute the first letter of their first two words.
//! Names containing CJK ideographs or kana keep their first two non-space
//! characters verbatim, since those names are read character by character and
//! the leading characters are usually the family name.
//!
//! Each initial is a single character. Letters whose uppercase form expands
//! (`ß` to `SS`) keep only the first character of that expansion.

/// Maximum number of characters in a derived label.
const MAX_INITIALS: usize = 2;

/// True for characters in the CJK Unified Ideographs, Hiragana or Katakana blocks.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{3040}'..='\u{309F}' // Hiragana
        | '\u{30A0}'..='\u{30FF}' // Katakana
    )
}

/// Derive a short uppercase label from a display name, falling back to an email.
///
/// Returns an empty string when neither yields anything; callers render a
/// neutral placeholder in that case.
pub fn extract_initials(name: Option<&str>, email: Option<&str>) -> String {
    let name = name.map(str::trim).filter(|n| !n.is_empty());
    if let Some(name) = name {
        return from_name(name);
    }

    match email.map(str::trim).filter(|e| !e.is_empty()) {
        Some(email) => from_email(email),
        None => String::new(),
    }
}

fn from_name(name: &str) -> String {
    if name.chars().any(is_cjk) {
        return name
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(MAX_INITIALS)
            .collect();
    }

    name.split_whitespace()
        .take(MAX_INITIALS)
        .filter_map(|word| word.chars().next())
        .filter_map(upper)
        .collect()
}

fn from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(MAX_INITIALS)
        .filter_map(upper)
        .collect()
}

fn upper(c: char) -> Option<char> {
    c.to_uppercase().next()
}
