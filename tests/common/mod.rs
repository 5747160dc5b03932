#![allow(dead_code)]

use aria_guard::{Element, ElementId, ElementKind, ElementTree, Property};

/// A small but representative application tree: a window with a form
/// frame, labeled and unlabeled controls, and a status bar.
#[must_use]
pub fn demo_app() -> (ElementTree, DemoHandles) {
    let mut tree = ElementTree::new(Element::new(ElementKind::Window));
    let frame = tree.insert(tree.root(), Element::new(ElementKind::Frame));

    let save = tree.insert(frame, Element::new(ElementKind::Button).with_text("Save"));
    let cancel = tree.insert(
        frame,
        Element::new(ElementKind::Button).with_property(Property::Label, "Cancel"),
    );
    let remember = tree.insert(
        frame,
        Element::new(ElementKind::Checkbox)
            .with_property(Property::Label, "Remember me")
            .with_property(Property::Checked, "false"),
    );
    let status = tree.insert(tree.root(), Element::new(ElementKind::StatusBar));

    (
        tree,
        DemoHandles {
            frame,
            save,
            cancel,
            remember,
            status,
        },
    )
}

pub struct DemoHandles {
    pub frame: ElementId,
    pub save: ElementId,
    pub cancel: ElementId,
    pub remember: ElementId,
    pub status: ElementId,
}
