pub const PREVIEW_BYTES: usize = 1000;
pub const TRUNCATION_MARKER: &str = "...";

/// Render at most `limit` bytes of `body` as a byte-string literal followed by `...`.
pub fn preview(body: &[u8], limit: usize) -> String {
    let head = &body[..body.len().min(limit)];
    let mut out = byte_literal(head);
    out.push_str(TRUNCATION_MARKER);
    out
}

/// Format bytes as a displayable `b'...'` literal.
///
/// Printable ASCII is kept, `\t` `\n` `\r` and backslash get short escapes,
/// everything else becomes `\xNN`. Single quotes delimit the literal unless
/// the bytes contain `'` but no `"`.
pub fn byte_literal(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            _ if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push(quote as char);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_is_quoted() {
        assert_eq!(byte_literal(b"<xml/>"), "b'<xml/>'");
    }

    #[test]
    fn escapes_control_and_non_ascii_bytes() {
        assert_eq!(byte_literal(b"a\nb\tc\r"), r"b'a\nb\tc\r'");
        assert_eq!(byte_literal("é".as_bytes()), r"b'\xc3\xa9'");
        assert_eq!(byte_literal(b"\x00\x7f"), r"b'\x00\x7f'");
        assert_eq!(byte_literal(b"a\\b"), r"b'a\\b'");
    }

    #[test]
    fn switches_to_double_quotes_for_lone_single_quote() {
        assert_eq!(byte_literal(b"it's"), r#"b"it's""#);
    }

    #[test]
    fn escapes_single_quote_when_both_quotes_present() {
        assert_eq!(
            byte_literal(br#"<a x="1">'</a>"#),
            r#"b'<a x="1">\'</a>'"#
        );
    }

    #[test]
    fn preview_truncates_and_marks() {
        let body = vec![b'x'; 1500];
        let out = preview(&body, PREVIEW_BYTES);
        assert_eq!(out.len(), 3 + PREVIEW_BYTES + TRUNCATION_MARKER.len());
        assert!(out.starts_with("b'xxx"));
        assert!(out.ends_with("'..."));
    }

    #[test]
    fn preview_of_short_body_keeps_everything() {
        assert_eq!(preview(b"<ok/>", PREVIEW_BYTES), "b'<ok/>'...");
        assert_eq!(preview(b"", PREVIEW_BYTES), "b''...");
    }
}
