//! Base-word normalization.

use crate::lemmatize::Lemmatizer;

/// Characters stripped, one at most, from the end of a token.
const TRAILING_PUNCTUATION: &[char] = &['.', '?', ',', ':', '!', '\''];

/// Lower-case a token and remove one trailing punctuation mark and a
/// trailing possessive `'s`, without lemmatizing.
///
/// ```
/// use suffixtab_core::normalize::strip_token;
///
/// assert_eq!(strip_token("Dog's."), "dog");
/// assert_eq!(strip_token("Running!"), "running");
/// assert_eq!(strip_token("(aside)"), "(aside)");
/// ```
pub fn strip_token(token: &str) -> String {
    let mut word = token.to_lowercase();
    if word.ends_with(TRAILING_PUNCTUATION) {
        word.pop();
    }
    if word.ends_with("'s") {
        word.truncate(word.len() - 2);
    }
    word
}

/// Reduce a raw token to its base word.
///
/// Strips punctuation as [`strip_token`] does, then applies `lemmatizer`.
/// Any input yields a result; an empty token yields an empty word.
pub fn base_word(token: &str, lemmatizer: &dyn Lemmatizer) -> String {
    lemmatizer.lemmatize(&strip_token(token))
}
