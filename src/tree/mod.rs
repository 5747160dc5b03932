mod walker;

pub use walker::{TreeWalker, WalkEntry};

use indexmap::IndexMap;
use serde::Serialize;

use crate::taxonomy::{ElementKind, Property, PropertyValue, Role, infer_role};

/// Stable handle for an element within its tree.
///
/// Handles are plain arena indices: cheap to copy, meaningful only for
/// the tree that issued them, and safe to keep in issues because an
/// arena never reuses a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ElementId(u32);

impl ElementId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single UI element: widget kind, accessibility data, and the visual
/// attributes the audit inspects.
///
/// The property bag is insertion-ordered so validation output never
/// depends on map iteration order.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)] // independent widget state flags
pub struct Element {
    kind: ElementKind,
    role: Option<Role>,
    properties: IndexMap<Property, PropertyValue>,
    text: Option<String>,
    foreground: Option<String>,
    background: Option<String>,
    font_size: Option<f32>,
    bold: bool,
    interactive: bool,
    enabled: bool,
    visible: bool,
}

impl Element {
    /// Create an element of the given kind with defaults: no declared
    /// role, empty property bag, enabled, visible, and interactivity
    /// taken from the kind's default role.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        let interactive = kind.default_role().rule_set().interactive;
        Self {
            kind,
            role: None,
            properties: IndexMap::new(),
            text: None,
            foreground: None,
            background: None,
            font_size: None,
            bold: false,
            interactive,
            enabled: true,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self.interactive = role.rule_set().interactive;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(property, value.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, foreground: &str, background: &str) -> Self {
        self.foreground = Some(foreground.to_string());
        self.background = Some(background.to_string());
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: &str) -> Self {
        self.background = Some(background.to_string());
        self
    }

    #[must_use]
    pub const fn with_font(mut self, size_pt: f32, bold: bool) -> Self {
        self.font_size = Some(size_pt);
        self.bold = bold;
        self
    }

    #[must_use]
    pub const fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    // Accessors

    #[must_use]
    pub const fn kind(&self) -> &ElementKind {
        &self.kind
    }

    #[must_use]
    pub const fn declared_role(&self) -> Option<Role> {
        self.role
    }

    /// Effective role: declared role if any, else the kind default.
    #[must_use]
    pub const fn resolved_role(&self) -> Role {
        infer_role(self.role, &self.kind)
    }

    #[must_use]
    pub const fn properties(&self) -> &IndexMap<Property, PropertyValue> {
        &self.properties
    }

    #[must_use]
    pub fn property(&self, property: Property) -> Option<&PropertyValue> {
        self.properties.get(&property)
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn foreground(&self) -> Option<&str> {
        self.foreground.as_deref()
    }

    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    #[must_use]
    pub const fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The explicit accessible name: a non-empty `aria-label`.
    ///
    /// Visible text is deliberately not a name source; it is only the
    /// synthesis material for the auto-fix.
    #[must_use]
    pub fn accessible_name(&self) -> Option<&str> {
        self.property(Property::Label)
            .and_then(PropertyValue::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    // Mutators (used by the UI layer and the auto-fix engine)

    pub fn set_property(&mut self, property: Property, value: impl Into<PropertyValue>) {
        self.properties.insert(property, value.into());
    }

    /// Remove a property, preserving the insertion order of the rest.
    pub fn remove_property(&mut self, property: Property) -> Option<PropertyValue> {
        self.properties.shift_remove(&property)
    }

    pub const fn set_font_size(&mut self, size_pt: f32) {
        self.font_size = Some(size_pt);
    }
}

struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// Arena-backed element tree.
///
/// The UI layer owns the tree and populates it; validation borrows it
/// immutably and auto-fix mutably, so single-writer access during a call
/// is enforced by the borrow checker rather than by convention.
pub struct ElementTree {
    nodes: Vec<Node>,
}

impl ElementTree {
    /// Create a tree holding only `root`.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            nodes: vec![Node {
                element: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[must_use]
    pub const fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Insert `element` as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not a handle of this tree; parents are
    /// created by this tree, so a foreign handle is a caller bug.
    pub fn insert(&mut self, parent: ElementId, element: Element) -> ElementId {
        assert!(self.contains(parent), "parent {parent} not in tree");
        let id = ElementId(u32::try_from(self.nodes.len()).expect("tree too large"));
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Add an extra parent/child edge between existing elements.
    ///
    /// This is how malformed source trees (shared subtrees, cycles) are
    /// represented; the walker guards against them during traversal.
    ///
    /// # Panics
    /// Panics if either handle is not from this tree.
    pub fn link_child(&mut self, parent: ElementId, child: ElementId) {
        assert!(self.contains(parent), "parent {parent} not in tree");
        assert!(self.contains(child), "child {child} not in tree");
        self.nodes[parent.index()].children.push(child);
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        id.index() < self.nodes.len()
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.index()).map(|node| &node.element)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.index()).map(|node| &mut node.element)
    }

    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id.index())
            .map_or(&[], |node| node.children.as_slice())
    }

    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id.index()).and_then(|node| node.parent)
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    /// Lazy pre-order traversal of the whole tree.
    #[must_use]
    pub fn walk(&self) -> TreeWalker<'_> {
        TreeWalker::new(self)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
