//! Fixed-capacity, NUL-terminated text fields.

use crate::error::{ByteError, ByteResult};

/// How a reader treats a text field with no terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPolicy {
    /// Reject the field with [`ByteError::UnterminatedString`].
    #[default]
    Strict,
    /// Use the whole capacity as content.
    Truncate,
}

/// Returns the longest prefix of `text` that fits in a field of `capacity`
/// bytes while leaving room for the terminator.
///
/// Fixed text fields cannot carry NUL: content ends at the first `'\0'` in
/// `text`, as it would for a reader. The cut never splits a UTF-8 sequence,
/// so the prefix may be shorter than `capacity - 1` bytes.
#[must_use]
pub fn truncate_for_field(text: &str, capacity: usize) -> &str {
    let text = text.find('\0').map_or(text, |nul| &text[..nul]);
    let limit = capacity.saturating_sub(1);
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Decodes the content of a fixed text field.
///
/// Content stops at the first NUL. Invalid UTF-8 is replaced, not rejected.
pub fn decode_text_field(field: &[u8], policy: TextPolicy) -> ByteResult<String> {
    let content = match field.iter().position(|&b| b == 0) {
        Some(end) => &field[..end],
        None => match policy {
            TextPolicy::Strict => {
                return Err(ByteError::UnterminatedString {
                    capacity: field.len(),
                })
            }
            TextPolicy::Truncate => field,
        },
    };
    Ok(String::from_utf8_lossy(content).into_owned())
}
