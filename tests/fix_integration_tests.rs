mod common;

use aria_guard::{
    ComplianceLevel, Element, ElementKind, ElementTree, Property, Validator, auto_fix,
};

#[test]
fn demo_app_fixes_converge_in_one_pass() {
    let (mut tree, handles) = common::demo_app();
    let validator = Validator::new(ComplianceLevel::AA);

    let issues = validator.validate(&tree);
    let first = auto_fix(&mut tree, &issues);
    assert!(first.applied >= 2, "name and live region should be fixed");

    // The save button took its visible text as label, the status bar
    // became polite.
    assert_eq!(tree.get(handles.save).unwrap().accessible_name(), Some("Save"));
    assert_eq!(
        tree.get(handles.status)
            .unwrap()
            .property(Property::Live)
            .unwrap()
            .as_str(),
        Some("polite")
    );

    // Idempotence over the full cycle.
    let second_issues = validator.validate(&tree);
    let second = auto_fix(&mut tree, &second_issues);
    assert_eq!(second.applied, 0);
}

#[test]
fn fix_count_matches_applied_mutations() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Button)
            .with_text("Go")
            .with_property(Property::ValueNow, 1.0), // unsupported on button
    );
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Label).with_font(8.0, false),
    );

    let validator = Validator::new(ComplianceLevel::AA);
    let issues = validator.validate(&tree);
    let summary = auto_fix(&mut tree, &issues);

    // Name synthesis + property removal + font raise.
    assert_eq!(summary.applied, 3);
    assert!(validator.validate(&tree).is_empty());
}

#[test]
fn unfixable_issues_survive_the_fix_pass() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Label).with_colors("#777777", "#888888"),
    );
    tree.insert(tree.root(), Element::new(ElementKind::Button)); // no text, no label

    let validator = Validator::new(ComplianceLevel::AA);
    let before = validator.validate(&tree);
    let summary = auto_fix(&mut tree, &before);
    assert_eq!(summary.applied, 0);

    let after = validator.validate(&tree);
    assert_eq!(before.len(), after.len(), "nothing should change");
}

#[test]
fn fixes_only_touch_property_bags() {
    let (mut tree, handles) = common::demo_app();
    let count_before = tree.element_count();
    let children_before = tree.children(handles.frame).to_vec();

    let issues = Validator::new(ComplianceLevel::AA).validate(&tree);
    auto_fix(&mut tree, &issues);

    assert_eq!(tree.element_count(), count_before);
    assert_eq!(tree.children(handles.frame), children_before);
}
