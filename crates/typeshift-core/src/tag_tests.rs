use crate::tag::FieldTag;

#[test]
fn no_tag() {
    assert_eq!(FieldTag::parse(""), FieldTag::default());
}

#[test]
fn rename() {
    let tag = FieldTag::parse(r#"json:"userId""#);
    assert_eq!(tag.rename.as_deref(), Some("userId"));
    assert!(!tag.optional);
    assert!(!tag.inline);
}

#[test]
fn omitempty() {
    let tag = FieldTag::parse(r#"json:"name,omitempty""#);
    assert_eq!(tag.rename.as_deref(), Some("name"));
    assert!(tag.optional);
}

#[test]
fn omitzero() {
    let tag = FieldTag::parse(r#"json:",omitzero""#);
    assert_eq!(tag.rename, None);
    assert!(tag.optional);
}

#[test]
fn inline() {
    let tag = FieldTag::parse(r#"json:",inline""#);
    assert!(tag.inline);
    assert!(!tag.optional);
}

#[test]
fn skip_marker() {
    let tag = FieldTag::parse(r#"json:"-""#);
    assert_eq!(tag.rename.as_deref(), Some("-"));
}

#[test]
fn escaped_skip_marker() {
    let tag = FieldTag::parse(r#"json:"'-'""#);
    assert_eq!(tag.rename.as_deref(), Some("'-'"));
}

#[test]
fn other_keys_ignored() {
    let tag = FieldTag::parse(r#"xml:"a" json:"b,omitempty" yaml:"c""#);
    assert_eq!(tag.rename.as_deref(), Some("b"));
    assert!(tag.optional);
}

#[test]
fn unknown_options_ignored() {
    let tag = FieldTag::parse(r#"json:"x,string,omitempty""#);
    assert_eq!(tag.rename.as_deref(), Some("x"));
    assert!(tag.optional);
}

#[test]
fn malformed_tag_is_empty() {
    assert_eq!(FieldTag::parse(r#"json"broken"#), FieldTag::default());
    assert_eq!(FieldTag::parse(r#"json:"unterminated"#), FieldTag::default());
}
