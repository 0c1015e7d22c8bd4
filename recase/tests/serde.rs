#![cfg(feature = "serde")]

use recase::Style;

#[test]
fn test_serialize_uses_canonical_name() {
    let styles = vec![Style::Camel, Style::ScreamingSnake, Style::Alphanumeric];
    let json = serde_json::to_string(&styles).unwrap();
    assert_eq!(json, r#"["camel","screaming_snake","alphanumeric"]"#);
}

#[test]
fn test_deserialize_accepts_aliases() {
    let styles: Vec<Style> =
        serde_json::from_str(r#"["kebab-case", "SCREAMING_SNAKE_CASE", "PascalCase"]"#).unwrap();
    assert_eq!(styles, [Style::Kebab, Style::ScreamingSnake, Style::Pascal]);
}

#[test]
fn test_deserialize_rejects_unknown_names() {
    let err = serde_json::from_str::<Style>(r#""hungarian""#).unwrap_err();
    assert!(err.to_string().contains("Unknown case style: hungarian"), "{err}");
}
