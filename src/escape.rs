//! JSON string-literal escaping for the capture document.
//!
//! The analysis engine that consumes the document re-parses every string with
//! a strict reader, so the escaper must produce output that round-trips
//! exactly: short escapes for the usual control characters, `\u00xx` for the
//! rest of the sub-U+0020 range, and everything else copied through verbatim.

/// Converts a string into a JSON string-literal token, surrounding double
/// quotes included.
///
/// Backslash and double-quote are backslash-escaped; backspace, tab, newline,
/// form-feed and carriage-return use their short escapes; any other character
/// below U+0020 is emitted as `\u00xx` with exactly four lowercase hex
/// digits. Everything else, non-ASCII included, passes through unescaped.
///
/// Escaping only applies below U+0020, so iterating scalar values emits the
/// same text as iterating UTF-16 code units: astral characters reach the
/// consumer as their unescaped surrogate pairs, which is what it expects.
///
/// # Examples
///
/// ```rust
/// use buildwrap::escape::quote;
/// assert_eq!(quote("plain"), r#""plain""#);
/// assert_eq!(quote(""), r#""""#);
/// assert_eq!(quote("a\"b"), r#""a\"b""#);
/// assert_eq!(quote("tab\there"), r#""tab\there""#);
/// assert_eq!(quote("\u{1}"), r#""\u0001""#);
/// ```
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' => {
                out.push('\\');
                out.push(c);
            }
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Null-tolerant variant of [`quote`]: an absent string escapes like the
/// empty string.
///
/// # Examples
///
/// ```rust
/// use buildwrap::escape::quote_opt;
/// assert_eq!(quote_opt(None), r#""""#);
/// assert_eq!(quote_opt(Some("/usr/bin/cc")), r#""/usr/bin/cc""#);
/// ```
pub fn quote_opt(value: Option<&str>) -> String {
    quote(value.unwrap_or_default())
}
