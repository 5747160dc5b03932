use super::*;
use crate::issue::Severity;
use crate::taxonomy::{ElementKind, Property};
use crate::tree::Element;

fn form_tree() -> ElementTree {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    let frame = tree.insert(tree.root(), Element::new(ElementKind::Frame));
    tree.insert(frame, Element::new(ElementKind::Button).with_text("Save"));
    tree.insert(
        frame,
        Element::new(ElementKind::Checkbox).with_property(Property::Checked, "false"),
    );
    tree
}

#[test]
fn issues_follow_traversal_order() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(tree.root(), Element::new(ElementKind::Button)); // unnamed
    tree.insert(tree.root(), Element::new(ElementKind::Checkbox)); // unnamed + unchecked

    let issues = Validator::new(ComplianceLevel::AA).validate(&tree);

    let ids: Vec<_> = issues.iter().map(|issue| issue.element.index()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "issue order must equal traversal order");
}

#[test]
fn validation_is_reproducible() {
    let tree = form_tree();
    let validator = Validator::new(ComplianceLevel::AA);

    let first = validator.validate(&tree);
    let second = validator.validate(&tree);
    assert_eq!(first, second);
}

#[test]
fn clean_tree_produces_no_issues() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Button).with_property(Property::Label, "Save"),
    );

    let issues = Validator::new(ComplianceLevel::AA).validate(&tree);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn named_button_scenario() {
    // Button with visible text but no label: one Critical fixable issue.
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(tree.root(), Element::new(ElementKind::Button).with_text("Save"));

    let issues = Validator::new(ComplianceLevel::AA).validate(&tree);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Critical);
    assert_eq!(issues[0].wcag, "1.1.1");
    assert!(issues[0].auto_fixable);
}

#[test]
fn cycle_yields_single_critical_issue() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    let frame = tree.insert(tree.root(), Element::new(ElementKind::Frame));
    tree.link_child(frame, frame);

    let issues = Validator::new(ComplianceLevel::AA).validate(&tree);

    let malformed: Vec<_> = issues
        .iter()
        .filter(|issue| matches!(issue.kind, IssueKind::MalformedTree))
        .collect();
    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].severity, Severity::Critical);
    assert_eq!(malformed[0].element, frame);
}

#[test]
fn hidden_elements_still_get_static_checks() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Checkbox).visible(false),
    );

    let issues = Validator::new(ComplianceLevel::AA).validate(&tree);
    assert!(
        issues
            .iter()
            .any(|issue| matches!(issue.kind, IssueKind::MissingRequiredProperty { .. })),
        "static checks must apply to invisible elements"
    );
}

#[test]
fn tab_order_supplied_flags_unreachable_elements() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    let reachable = tree.insert(
        tree.root(),
        Element::new(ElementKind::Button).with_property(Property::Label, "Ok"),
    );
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Button).with_property(Property::Label, "Cancel"),
    );

    let issues = Validator::new(ComplianceLevel::AA)
        .with_tab_order(vec![reachable])
        .validate(&tree);

    let unreachable: Vec<_> = issues
        .iter()
        .filter(|issue| matches!(issue.kind, IssueKind::NotInTabOrder))
        .collect();
    assert_eq!(unreachable.len(), 1);
    assert_eq!(unreachable[0].wcag, "2.1.1");
}

#[test]
fn level_a_skips_contrast() {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Label).with_colors("#777777", "#888888"),
    );

    let issues = Validator::new(ComplianceLevel::A).validate(&tree);
    assert!(
        !issues
            .iter()
            .any(|issue| matches!(issue.kind, IssueKind::InsufficientContrast { .. }))
    );
}

#[test]
fn disabled_checks_are_suppressed() {
    let config = crate::config::AuditConfig {
        checks: crate::config::CheckConfig {
            contrast: false,
            ..crate::config::CheckConfig::default()
        },
        ..crate::config::AuditConfig::default()
    };

    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    tree.insert(
        tree.root(),
        Element::new(ElementKind::Label).with_colors("#777777", "#888888"),
    );

    let issues = Validator::from_config(&config).validate(&tree);
    assert!(issues.is_empty());
}

#[test]
fn independent_checks_can_stack_on_one_element() {
    // Unnamed interactive checkbox missing its required property.
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    let id = tree.insert(tree.root(), Element::new(ElementKind::Checkbox));

    let issues = Validator::new(ComplianceLevel::AA).validate(&tree);

    let on_element: Vec<_> = issues.iter().filter(|issue| issue.element == id).collect();
    assert!(on_element.len() >= 2, "checks must not be merged");
}
