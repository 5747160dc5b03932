use std::collections::HashSet;

use super::{ElementId, ElementTree};

/// One traversal step: an element plus the context inherited from its
/// ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub id: ElementId,
    /// Ancestor path including this element, e.g. `Window/Frame/Button`.
    pub path: String,
    /// Depth below the root (root = 0).
    pub depth: usize,
    /// True when this element or any ancestor is not visible.
    pub hidden: bool,
    /// True when this element or any ancestor is disabled.
    pub disabled: bool,
    /// True when this entry marks the root of a revisited (cyclic)
    /// subtree. No other fields beyond `id`/`path` are meaningful and
    /// the subtree is not descended into.
    pub cycle: bool,
}

struct Frame {
    id: ElementId,
    path: String,
    depth: usize,
    hidden: bool,
    disabled: bool,
}

/// Lazy pre-order traversal over a tree snapshot, in source child order.
///
/// Disabled and invisible elements are still yielded, tagged so the rule
/// evaluator can skip visibility-dependent checks. A visited set guards
/// against malformed (cyclic or shared-subtree) child links: the first
/// revisit of a handle yields a single cycle-tagged entry and that
/// branch is not descended, so traversal always terminates.
pub struct TreeWalker<'a> {
    tree: &'a ElementTree,
    stack: Vec<Frame>,
    visited: HashSet<ElementId>,
    cycle_reported: HashSet<ElementId>,
}

impl<'a> TreeWalker<'a> {
    #[must_use]
    pub fn new(tree: &'a ElementTree) -> Self {
        let root = tree.root();
        let root_element = tree.get(root).expect("tree always has a root");
        let stack = vec![Frame {
            id: root,
            path: root_element.kind().name().to_string(),
            depth: 0,
            hidden: !root_element.is_visible(),
            disabled: !root_element.is_enabled(),
        }];
        Self {
            tree,
            stack,
            visited: HashSet::new(),
            cycle_reported: HashSet::new(),
        }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.pop()?;

            if !self.visited.insert(frame.id) {
                // Revisited handle: report the cycle once, skip the branch.
                if self.cycle_reported.insert(frame.id) {
                    return Some(WalkEntry {
                        id: frame.id,
                        path: frame.path,
                        depth: frame.depth,
                        hidden: frame.hidden,
                        disabled: frame.disabled,
                        cycle: true,
                    });
                }
                continue;
            }

            // Push children in reverse so they pop in source order.
            for &child in self.tree.children(frame.id).iter().rev() {
                if let Some(element) = self.tree.get(child) {
                    self.stack.push(Frame {
                        id: child,
                        path: format!("{}/{}", frame.path, element.kind().name()),
                        depth: frame.depth + 1,
                        hidden: frame.hidden || !element.is_visible(),
                        disabled: frame.disabled || !element.is_enabled(),
                    });
                }
            }

            return Some(WalkEntry {
                id: frame.id,
                path: frame.path,
                depth: frame.depth,
                hidden: frame.hidden,
                disabled: frame.disabled,
                cycle: false,
            });
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
