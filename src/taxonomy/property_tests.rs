use super::*;

#[test]
fn property_names_use_aria_prefix() {
    assert_eq!(Property::Checked.as_str(), "aria-checked");
    assert_eq!(Property::DescribedBy.as_str(), "aria-describedby");
    assert_eq!(Property::ValueNow.as_str(), "aria-valuenow");
}

#[test]
fn token_properties_expose_their_vocabulary() {
    let tokens = Property::Checked.token_values().unwrap();
    assert_eq!(tokens, &["true", "false", "mixed"]);

    let live = Property::Live.token_values().unwrap();
    assert_eq!(live, LIVE_TOKENS);
}

#[test]
fn non_token_properties_have_no_vocabulary() {
    assert!(Property::Label.token_values().is_none());
    assert!(Property::ValueNow.token_values().is_none());
    assert!(Property::Disabled.token_values().is_none());
}

#[test]
fn value_kind_covers_each_shape() {
    assert_eq!(Property::Disabled.value_kind(), ValueKind::Bool);
    assert_eq!(Property::Label.value_kind(), ValueKind::Text);
    assert_eq!(Property::ValueNow.value_kind(), ValueKind::Number);
    assert_eq!(Property::Live.value_kind(), ValueKind::Token);
    assert_eq!(Property::DescribedBy.value_kind(), ValueKind::IdList);
}

#[test]
fn matches_kind_accepts_matching_carrier() {
    assert!(PropertyValue::Bool(true).matches_kind(ValueKind::Bool));
    assert!(PropertyValue::str("save").matches_kind(ValueKind::Text));
    assert!(PropertyValue::Number(3.0).matches_kind(ValueKind::Number));
    assert!(PropertyValue::str("true").matches_kind(ValueKind::Token));
    assert!(
        PropertyValue::Tokens(vec!["hint-1".to_string(), "hint-2".to_string()])
            .matches_kind(ValueKind::IdList)
    );
    // A single id is also accepted for an id list.
    assert!(PropertyValue::str("hint-1").matches_kind(ValueKind::IdList));
}

#[test]
fn matches_kind_rejects_mismatched_carrier() {
    assert!(!PropertyValue::str("true").matches_kind(ValueKind::Bool));
    assert!(!PropertyValue::Number(1.0).matches_kind(ValueKind::Text));
    assert!(!PropertyValue::Bool(false).matches_kind(ValueKind::Number));
    assert!(!PropertyValue::Tokens(vec![]).matches_kind(ValueKind::Token));
}

#[test]
fn default_live_token_is_in_vocabulary() {
    assert!(LIVE_TOKENS.contains(&DEFAULT_LIVE_TOKEN));
}
