//! Escaped-delimiter tokenizer.
//!
//! Splits wire strings on a single delimiter character. A backslash escapes
//! the character that follows it, so an escaped delimiter does not end the
//! current token. The escape is never removed: both the backslash and the
//! escaped character are kept verbatim in the token.

/// Escape prefix on the wire.
pub const ESCAPE: char = '\\';

/// Separator between records in a multi-record payload.
pub const RECORD_SEPARATOR: char = ':';

/// Separator between fields inside a single record.
pub const FIELD_SEPARATOR: char = '~';

/// Splits `input` on `delimiter`, honoring backslash escapes.
///
/// The final token is always emitted, even when empty, so `n` unescaped
/// delimiters always produce `n + 1` tokens.
///
/// # Example
///
/// ```rust
/// use bfgateway_sdk::codec::split_on_delimiter;
///
/// assert_eq!(split_on_delimiter(':', "a\\:b:c"), vec!["a\\:b", "c"]);
/// assert_eq!(split_on_delimiter(':', ":a"), vec!["", "a"]);
/// ```
#[must_use]
pub fn split_on_delimiter(delimiter: char, input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in input.chars() {
        if escaped {
            escaped = false;
        } else if c == delimiter {
            tokens.push(std::mem::take(&mut current));
            continue;
        } else if c == ESCAPE {
            escaped = true;
        }
        current.push(c);
    }

    tokens.push(current);
    tokens
}
