//! Title to slug conversion for DOM ids and view-transition names.
//!
//! Letters and digits of every script survive (lower-cased where the script has
//! case), so `ゆらぎ荘` stays `ゆらぎ荘` instead of collapsing to nothing.
//! Whitespace and punctuation separate words; runs of separators become a single
//! hyphen and never appear at either end. Anything else (emoji, symbols,
//! combining marks) is dropped in place.

/// Converts a display string into a slug.
///
/// Total and pure: never fails, same input gives same output.
///
/// # Examples
/// ```rust
/// use folio_kernel::slugify;
///
/// assert_eq!(slugify("Mind Map"), "mind-map");
/// assert_eq!(slugify("  Multi   Space  Title "), "multi-space-title");
/// assert_eq!(slugify("Hello (World)!"), "hello-world");
/// assert_eq!(slugify("你好 World"), "你好-world");
/// assert_eq!(slugify("🎉 Party"), "party");
/// assert_eq!(slugify(""), "");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut separated = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if separated && !slug.is_empty() {
                slug.push('-');
            }
            separated = false;
            slug.push(ch);
        } else if is_separator(ch) {
            separated = true;
        }
    }

    slug
}

/// Returns `true` when `candidate` is non-empty and already in slug form.
///
/// ```rust
/// use folio_kernel::is_slug;
///
/// assert!(is_slug("mind-map"));
/// assert!(!is_slug("Mind Map"));
/// assert!(!is_slug("-mind-map"));
/// assert!(!is_slug(""));
/// ```
#[must_use]
pub fn is_slug(candidate: &str) -> bool {
    !candidate.is_empty() && slugify(candidate) == candidate
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace()
        || ch.is_ascii_punctuation()
        || matches!(ch,
            // General Punctuation (dashes, quotes, ellipsis, ...)
            '\u{2010}'..='\u{205E}'
            // CJK Symbols and Punctuation (、。「」 ...)
            | '\u{3000}'..='\u{303F}'
            // Katakana middle dot
            | '\u{30FB}'
            // Fullwidth punctuation
            | '\u{FF01}'..='\u{FF0F}'
            | '\u{FF1A}'..='\u{FF20}'
            | '\u{FF3B}'..='\u{FF40}'
            | '\u{FF5B}'..='\u{FF65}'
        )
}
