//! Structured field-tag parsing.
//!
//! Composite fields carry a raw tag string of space-separated
//! `key:"value"` pairs. Only the `json` key drives normalization: its
//! value is a comma-separated list of an output name followed by options
//! (`omitempty`, `omitzero`, `inline`).

/// Directives extracted from a field's `json` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    /// Explicit output name. `-` is the skip marker; `'-'` escapes a
    /// literal `-` name.
    pub rename: Option<String>,
    /// `omitempty` / `omitzero`: the field is optional in output.
    pub optional: bool,
    /// `inline`: force embed treatment even for a named field.
    pub inline: bool,
}

impl FieldTag {
    /// Parse a raw tag string. A missing or malformed `json` key yields
    /// the default (no directives), never an error.
    pub fn parse(raw: &str) -> Self {
        let Some(value) = lookup(raw, "json") else {
            return Self::default();
        };

        let mut parts = value.split(',');
        let name = parts.next().unwrap_or("");
        let mut tag = Self::default();
        if !name.is_empty() {
            tag.rename = Some(name.to_string());
        }
        for opt in parts {
            match opt {
                "omitempty" | "omitzero" => tag.optional = true,
                "inline" => tag.inline = true,
                _ => {}
            }
        }
        tag
    }
}

/// Find the value of `key` in a raw tag string, or `None` if absent or
/// the string is not well-formed up to that point.
fn lookup(raw: &str, key: &str) -> Option<String> {
    let mut rest = raw;
    loop {
        rest = rest.trim_start_matches(' ');
        let colon = rest.find(':')?;
        let (k, after) = rest.split_at(colon);
        if k.is_empty() || k.contains(' ') || k.contains('"') {
            return None;
        }
        let after = after.strip_prefix(':')?;
        let after = after.strip_prefix('"')?;

        let mut value = String::new();
        let mut chars = after.char_indices();
        let mut end = None;
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    let (_, escaped) = chars.next()?;
                    value.push(escaped);
                }
                '"' => {
                    end = Some(i);
                    break;
                }
                _ => value.push(c),
            }
        }
        let end = end?;

        if k == key {
            return Some(value);
        }
        rest = &after[end + 1..];
    }
}
