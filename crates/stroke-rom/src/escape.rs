/// Turn command-line text into ROM bytes.
///
/// Recognises `\r`, `\n`, `\t`, `\\` and `\xNN`; any other backslash is kept
/// as is. Characters outside ASCII are passed through as their UTF-8 bytes.
pub fn unescape(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        match bytes.get(i + 1) {
            Some(b'r') => out.push(b'\r'),
            Some(b'n') => out.push(b'\n'),
            Some(b't') => out.push(b'\t'),
            Some(b'\\') => out.push(b'\\'),
            Some(b'x') => {
                let hex = bytes
                    .get(i + 2..i + 4)
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                if let Some(value) = hex {
                    out.push(value);
                    i += 4;
                    continue;
                }
                out.push(b'\\');
                i += 1;
                continue;
            }
            _ => {
                out.push(b'\\');
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_escapes() {
        assert_eq!(unescape(r"AB\r\nC"), b"AB\r\nC");
        assert_eq!(unescape(r"a\\b"), b"a\\b");
        assert_eq!(unescape(r"\x80\x7f"), [0x80, 0x7f]);
    }

    #[test]
    fn unknown_escapes_are_kept() {
        assert_eq!(unescape(r"\q"), b"\\q");
        assert_eq!(unescape(r"\xZZ"), b"\\xZZ");
        assert_eq!(unescape("trailing\\"), b"trailing\\");
    }
}
