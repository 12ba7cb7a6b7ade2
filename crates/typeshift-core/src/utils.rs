//! Small string utilities shared by the transpiler and CLI.

/// Make a string usable as an output module / import identifier.
///
/// Non-alphanumeric characters become `_`; a leading digit is prefixed
/// with `_`. Empty input yields `_`.
///
/// # Examples
/// ```
/// use typeshift_core::utils::sanitize_identifier;
/// assert_eq!(sanitize_identifier("my-pkg"), "my_pkg");
/// assert_eq!(sanitize_identifier("2fast"), "_2fast");
/// ```
pub fn sanitize_identifier(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c);
        } else {
            result.push('_');
        }
    }
    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Quote a string as a double-quoted output string literal.
///
/// Escapes quotes, backslashes, and control characters. Everything else,
/// including non-ASCII, passes through verbatim.
pub fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// The last segment of a `/`-separated unit path.
pub fn path_base(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
