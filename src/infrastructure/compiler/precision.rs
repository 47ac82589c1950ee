//! Numeric precision for compiled CSS
//!
//! grass always prints up to ten fractional digits. Callers can ask for fewer;
//! every decimal literal outside strings and `url(...)` is rounded half-up to
//! the requested number of digits with trailing zeros removed.

/// Round decimal literals in `css` to `precision` fractional digits.
pub fn apply_precision(css: &str, precision: u32) -> String {
    let bytes = css.as_bytes();
    let mut out = String::with_capacity(css.len());
    let mut copied = 0;
    let mut i = 0;
    let mut quote: Option<u8> = None;

    while i < bytes.len() {
        let b = bytes[i];

        if let Some(q) = quote {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }

        match b {
            b'"' | b'\'' => {
                quote = Some(b);
                i += 1;
            }
            b'u' | b'U' if starts_url(bytes, i) => {
                i = skip_url(bytes, i);
            }
            b'0'..=b'9' | b'.' if starts_number(bytes, i) => {
                let end = scan_number(bytes, i);
                if let Some(rounded) = round_literal(&css[i..end], precision) {
                    out.push_str(&css[copied..i]);
                    out.push_str(&rounded);
                    copied = end;
                }
                i = end;
            }
            _ => i += 1,
        }
    }

    out.push_str(&css[copied..]);
    out
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn starts_url(bytes: &[u8], i: usize) -> bool {
    bytes.len() >= i + 4
        && bytes[i..i + 4].eq_ignore_ascii_case(b"url(")
        && (i == 0 || !is_ident_byte(bytes[i - 1]) && bytes[i - 1] != b'-')
}

fn skip_url(bytes: &[u8], i: usize) -> usize {
    bytes[i..]
        .iter()
        .position(|&b| b == b')')
        .map(|offset| i + offset + 1)
        .unwrap_or(bytes.len())
}

fn starts_number(bytes: &[u8], i: usize) -> bool {
    if bytes[i] == b'.' && !bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        return false;
    }
    if i == 0 {
        return true;
    }

    let prev = bytes[i - 1];
    if is_ident_byte(prev) || matches!(prev, b'#' | b'\\' | b'.') {
        return false;
    }
    // `-1.5` is a number, `col-1.5` is part of an identifier
    if prev == b'-' && i >= 2 {
        let before = bytes[i - 2];
        return !(is_ident_byte(before) || before == b'-');
    }
    true
}

fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut j = start;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
        j += 1;
    }
    if j + 1 < bytes.len() && bytes[j] == b'.' && bytes[j + 1].is_ascii_digit() {
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
    }
    j
}

/// Round one unsigned decimal literal. `None` when it already fits.
pub(crate) fn round_literal(literal: &str, precision: u32) -> Option<String> {
    let (int, frac) = literal.split_once('.')?;
    let keep = precision as usize;
    if frac.len() <= keep {
        return None;
    }

    let mut digits: Vec<u8> = int.bytes().chain(frac[..keep].bytes()).collect();
    if frac.as_bytes()[keep] >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_part, frac_part) = digits.split_at(digits.len() - keep);
    let frac_len = frac_part
        .iter()
        .rposition(|&d| d != b'0')
        .map(|p| p + 1)
        .unwrap_or(0);
    let int_part = String::from_utf8_lossy(int_part);
    let frac_part = String::from_utf8_lossy(&frac_part[..frac_len]);

    Some(match (int_part.is_empty(), frac_part.is_empty()) {
        (true, true) => "0".to_string(),
        (false, true) => int_part.into_owned(),
        (true, false) => format!(".{}", frac_part),
        (false, false) => format!("{}.{}", int_part, frac_part),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_long_fractions() {
        assert_eq!(
            apply_precision("a { width: 33.3333333333%; }", 5),
            "a { width: 33.33333%; }"
        );
        assert_eq!(
            apply_precision("a { width: 66.6666666667%; }", 3),
            "a { width: 66.667%; }"
        );
    }

    #[test]
    fn leaves_short_fractions_alone() {
        let css = "a { margin: 1.5px 0.25em; }";
        assert_eq!(apply_precision(css, 8), css);
    }

    #[test]
    fn carries_into_integer_part() {
        assert_eq!(round_literal("9.9999", 2), Some("10".to_string()));
        assert_eq!(round_literal(".9996", 3), Some("1".to_string()));
        assert_eq!(round_literal("0.1004", 3), Some("0.1".to_string()));
        assert_eq!(round_literal(".00001", 2), Some("0".to_string()));
    }

    #[test]
    fn keeps_missing_leading_zero() {
        assert_eq!(
            apply_precision("a{opacity:.3333333333}", 2),
            "a{opacity:.33}"
        );
    }

    #[test]
    fn zero_precision_rounds_to_integers() {
        assert_eq!(apply_precision("a { top: 2.5px; }", 0), "a { top: 3px; }");
    }

    #[test]
    fn negative_numbers_are_rounded() {
        assert_eq!(
            apply_precision("a { margin: -0.123456px; }", 2),
            "a { margin: -0.12px; }"
        );
    }

    #[test]
    fn skips_strings_urls_and_identifiers() {
        let css = concat!(
            "a::after { content: \"1.123456\"; }\n",
            "b { background: url(img/1.123456.png); }\n",
            ".col-1\\.123456 { color: #123456; }\n",
            ".v1.123456 { x: y; }"
        );
        assert_eq!(apply_precision(css, 2), css);
    }

    #[test]
    fn handles_non_ascii_content() {
        let css = "a::before { content: \"é\"; } b { width: 1.23456px; }";
        assert_eq!(
            apply_precision(css, 2),
            "a::before { content: \"é\"; } b { width: 1.23px; }"
        );
    }
}
