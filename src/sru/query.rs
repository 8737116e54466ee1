use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped in a CQL query value.
/// Everything outside ASCII alphanumerics and `_ . - ~ /` is encoded, so
/// spaces, `&`, `=`, `%` and `"` can never leak into the query component.
pub(super) const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Normalize raw user input into a value safe to append after `query=`.
///
/// Trims, lowercases, then percent-encodes. Must be applied exactly once:
/// lowercasing an already encoded `%XX` sequence would corrupt it.
pub fn normalize(input: &str) -> String {
    let folded = input.trim().to_lowercase();
    utf8_percent_encode(&folded, QUERY_ENCODE_SET).to_string()
}

#[cfg(test)]
pub(crate) fn decode(encoded: &str) -> String {
    percent_encoding::percent_decode_str(encoded)
        .decode_utf8_lossy()
        .into_owned()
}
