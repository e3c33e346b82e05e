//! Arena storage for the element tree.
//!
//! Parents own their children by id in an ordered list; the parent link is a
//! plain id and carries no ownership. Every structural mutation keeps the
//! two in agreement.

use crate::LayoutError;
use crate::element::{Element, ElementKind, LayoutRole};
use crate::geometry::check_box_fits;
use crate::measure::initial_size;
use figura_style::BoxModel;
use figura_types::ElementId;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct ElementTree {
    nodes: Vec<Element>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a detached element at offset (0, 0).
    ///
    /// Fixed sizes are checked against the box model here, so a rectangle
    /// whose border and padding do not fit is rejected before it exists.
    pub fn insert(
        &mut self,
        kind: ElementKind,
        box_model: BoxModel,
    ) -> Result<ElementId, LayoutError> {
        let id = ElementId::from_index(self.nodes.len());
        let size = initial_size(&kind, &box_model)?;
        check_box_fits(id, &kind, &box_model)?;
        log::trace!("Created {} {} with size {:?}", kind.name(), id, size);
        self.nodes.push(Element::new(id, kind, box_model, size));
        Ok(id)
    }

    pub fn get(&self, id: ElementId) -> Result<&Element, LayoutError> {
        self.nodes
            .get(id.index())
            .ok_or(LayoutError::UnknownElement(id))
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, LayoutError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(LayoutError::UnknownElement(id))
    }

    pub fn parent(&self, id: ElementId) -> Result<Option<ElementId>, LayoutError> {
        Ok(self.get(id)?.parent)
    }

    pub fn children(&self, id: ElementId) -> Result<&[ElementId], LayoutError> {
        Ok(&self.get(id)?.children)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        let next = self.nodes.get(id.index()).and_then(|n| n.parent);
        Ancestors { tree: self, next }
    }

    /// The top of `id`'s parent chain (itself when detached).
    pub fn root_of(&self, id: ElementId) -> ElementId {
        self.ancestors(id).last().unwrap_or(id)
    }

    pub fn depth(&self, id: ElementId) -> usize {
        self.ancestors(id).count()
    }

    /// Attaches `child` under `parent` and returns the element it was
    /// actually attached to.
    ///
    /// A child that already has a parent is removed from it first. A child
    /// flagged to escape layout that is added to a proactive container is
    /// redirected to the nearest ancestor that is not one.
    pub fn add_element(
        &mut self,
        parent: ElementId,
        child: ElementId,
    ) -> Result<ElementId, LayoutError> {
        self.get(parent)?;
        let child_node = self.get(child)?;

        let target = if child_node.escapes_layout {
            self.escape_target(parent, child)?
        } else {
            parent
        };

        if target == child || self.ancestors(target).any(|a| a == child) {
            return Err(LayoutError::CycleDetected {
                parent: target,
                child,
            });
        }

        let old_parent = self.get(child)?.parent;
        if let Some(old_parent) = old_parent {
            self.detach(old_parent, child)?;
        }

        let node = self.get_mut(target)?;
        node.children.push(child);
        self.get_mut(child)?.parent = Some(target);
        self.invalidate_layout(target)?;

        if target != parent {
            log::debug!(
                "{} escapes layout of {}; attached to {} instead",
                child,
                parent,
                target
            );
        }
        debug_assert!(
            self.check_link(target, child, old_parent).is_ok(),
            "one-parent invariant broken by add_element"
        );
        Ok(target)
    }

    /// Checks only what one attachment touched: the new link, the old
    /// parent's list and the new parent's chain.
    fn check_link(
        &self,
        parent: ElementId,
        child: ElementId,
        old_parent: Option<ElementId>,
    ) -> Result<(), LayoutError> {
        let listed = self.children(parent)?.iter().filter(|c| **c == child).count();
        if listed != 1 || self.parent(child)? != Some(parent) {
            return Err(LayoutError::InvariantViolation(format!(
                "{} is listed {} times under {} and points at {:?}",
                child,
                listed,
                parent,
                self.parent(child)?
            )));
        }
        if let Some(old) = old_parent
            && old != parent
            && self.children(old)?.contains(&child)
        {
            return Err(LayoutError::InvariantViolation(format!(
                "{} is still listed under its old parent {}",
                child, old
            )));
        }
        if self.ancestors(parent).take(self.nodes.len() + 1).count() > self.nodes.len() {
            return Err(LayoutError::InvariantViolation(format!(
                "{} is part of a parent cycle",
                parent
            )));
        }
        Ok(())
    }

    /// Detaches `child` from `parent`. The child keeps its offset and becomes
    /// a root.
    pub fn remove_element(
        &mut self,
        parent: ElementId,
        child: ElementId,
    ) -> Result<(), LayoutError> {
        if self.get(child)?.parent != Some(parent) {
            return Err(LayoutError::NotAChild { parent, child });
        }
        self.detach(parent, child)
    }

    fn detach(&mut self, parent: ElementId, child: ElementId) -> Result<(), LayoutError> {
        let node = self.get_mut(parent)?;
        let before = node.children.len();
        node.children.retain(|c| *c != child);
        if node.children.len() + 1 != before {
            return Err(LayoutError::InvariantViolation(format!(
                "{} claims parent {} but is listed {} times there",
                child,
                parent,
                before - node.children.len()
            )));
        }
        self.get_mut(child)?.parent = None;
        self.invalidate_layout(parent)
    }

    fn escape_target(&self, parent: ElementId, child: ElementId) -> Result<ElementId, LayoutError> {
        std::iter::once(parent)
            .chain(self.ancestors(parent))
            .find(|id| {
                self.nodes
                    .get(id.index())
                    .is_some_and(|n| n.kind.role() != LayoutRole::Proactive)
            })
            .ok_or(LayoutError::NoEscapeTarget(child))
    }

    /// Ids of the subtree rooted at `root`, children before their parent,
    /// siblings in insertion order.
    pub fn post_order(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id);
                continue;
            }
            stack.push((id, true));
            if let Some(node) = self.nodes.get(id.index()) {
                for child in node.children.iter().rev() {
                    stack.push((*child, false));
                }
            }
        }
        out
    }

    /// Ids of the subtree rooted at `root`, parents before children.
    pub fn pre_order(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(id.index()) {
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }

    /// Checks the one-parent invariant over the whole arena.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            for child in &node.children {
                if !seen.insert(*child) {
                    return Err(LayoutError::InvariantViolation(format!(
                        "{} appears in more than one child list",
                        child
                    )));
                }
                let back = self.get(*child)?.parent;
                if back != Some(node.id) {
                    return Err(LayoutError::InvariantViolation(format!(
                        "{} is listed under {} but points at {:?}",
                        child, node.id, back
                    )));
                }
            }
            if let Some(parent) = node.parent
                && !self.get(parent)?.children.contains(&node.id)
            {
                return Err(LayoutError::InvariantViolation(format!(
                    "{} points at parent {} which does not list it",
                    node.id, parent
                )));
            }
            if self.ancestors(node.id).take(self.nodes.len() + 1).count() > self.nodes.len() {
                return Err(LayoutError::InvariantViolation(format!(
                    "{} is part of a parent cycle",
                    node.id
                )));
            }
        }
        Ok(())
    }

    /// Indented one-line-per-element dump, for logging.
    pub fn describe(&self, root: ElementId) -> String {
        let mut out = String::new();
        for id in self.pre_order(root) {
            if let Some(node) = self.nodes.get(id.index()) {
                let indent = "  ".repeat(self.depth(id));
                out.push_str(&format!(
                    "{}{} {} offset=({:.1}, {:.1}) size={:.1}x{:.1}\n",
                    indent,
                    node.kind.name(),
                    id,
                    node.offset.x,
                    node.offset.y,
                    node.size.width,
                    node.size.height
                ));
            }
        }
        out
    }
}

/// Iterator over a parent chain, nearest ancestor first.
pub struct Ancestors<'a> {
    tree: &'a ElementTree,
    next: Option<ElementId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let current = self.next?;
        self.next = self
            .tree
            .nodes
            .get(current.index())
            .and_then(|n| n.parent);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{GroupSpec, RectSpec, StackSpec};

    fn rect(tree: &mut ElementTree) -> ElementId {
        tree.insert(ElementKind::Rect(RectSpec::new(10.0, 10.0)), BoxModel::none())
            .unwrap()
    }

    fn group(tree: &mut ElementTree) -> ElementId {
        tree.insert(ElementKind::Group(GroupSpec::auto()), BoxModel::none())
            .unwrap()
    }

    #[test]
    fn reparenting_moves_child_between_lists() {
        let mut tree = ElementTree::new();
        let a = group(&mut tree);
        let b = group(&mut tree);
        let c = rect(&mut tree);

        tree.add_element(a, c).unwrap();
        tree.add_element(b, c).unwrap();

        assert!(tree.children(a).unwrap().is_empty());
        assert_eq!(tree.children(b).unwrap(), &[c]);
        assert_eq!(tree.parent(c).unwrap(), Some(b));
        tree.validate().unwrap();
    }

    #[test]
    fn re_adding_to_same_parent_moves_to_end() {
        let mut tree = ElementTree::new();
        let p = group(&mut tree);
        let x = rect(&mut tree);
        let y = rect(&mut tree);
        tree.add_element(p, x).unwrap();
        tree.add_element(p, y).unwrap();
        tree.add_element(p, x).unwrap();
        assert_eq!(tree.children(p).unwrap(), &[y, x]);
    }

    #[test]
    fn cycles_are_rejected() {
        let mut tree = ElementTree::new();
        let outer = group(&mut tree);
        let inner = group(&mut tree);
        tree.add_element(outer, inner).unwrap();

        assert_eq!(
            tree.add_element(inner, outer),
            Err(LayoutError::CycleDetected {
                parent: inner,
                child: outer
            })
        );
        assert!(matches!(
            tree.add_element(outer, outer),
            Err(LayoutError::CycleDetected { .. })
        ));
        tree.validate().unwrap();
    }

    #[test]
    fn remove_requires_actual_parent() {
        let mut tree = ElementTree::new();
        let p = group(&mut tree);
        let q = group(&mut tree);
        let c = rect(&mut tree);
        tree.add_element(p, c).unwrap();

        assert_eq!(
            tree.remove_element(q, c),
            Err(LayoutError::NotAChild { parent: q, child: c })
        );
        tree.remove_element(p, c).unwrap();
        assert_eq!(tree.parent(c).unwrap(), None);
        assert!(tree.children(p).unwrap().is_empty());
    }

    #[test]
    fn escaping_child_skips_proactive_ancestors() {
        let mut tree = ElementTree::new();
        let board = group(&mut tree);
        let outer = tree
            .insert(ElementKind::Stack(StackSpec::vertical()), BoxModel::none())
            .unwrap();
        let inner = tree
            .insert(ElementKind::Stack(StackSpec::horizontal()), BoxModel::none())
            .unwrap();
        tree.add_element(board, outer).unwrap();
        tree.add_element(outer, inner).unwrap();

        let label = rect(&mut tree);
        tree.get_mut(label).unwrap().escapes_layout = true;

        let attached = tree.add_element(inner, label).unwrap();
        assert_eq!(attached, board);
        assert!(tree.children(inner).unwrap().is_empty());
        assert_eq!(tree.children(board).unwrap(), &[outer, label]);
    }

    #[test]
    fn escaping_child_without_free_ancestor_is_an_error() {
        let mut tree = ElementTree::new();
        let stack = tree
            .insert(ElementKind::Stack(StackSpec::vertical()), BoxModel::none())
            .unwrap();
        let label = rect(&mut tree);
        tree.get_mut(label).unwrap().escapes_layout = true;
        assert_eq!(
            tree.add_element(stack, label),
            Err(LayoutError::NoEscapeTarget(label))
        );
    }

    #[test]
    fn traversal_orders() {
        let mut tree = ElementTree::new();
        let root = group(&mut tree);
        let a = group(&mut tree);
        let b = rect(&mut tree);
        let a1 = rect(&mut tree);
        tree.add_element(root, a).unwrap();
        tree.add_element(root, b).unwrap();
        tree.add_element(a, a1).unwrap();

        assert_eq!(tree.post_order(root), vec![a1, a, b, root]);
        assert_eq!(tree.pre_order(root), vec![root, a, a1, b]);
        assert_eq!(tree.depth(a1), 2);
        assert_eq!(tree.root_of(a1), root);
    }

    fn violation(tree: &ElementTree) -> String {
        match tree.validate() {
            Err(LayoutError::InvariantViolation(message)) => message,
            other => panic!("expected an invariant violation, got {:?}", other),
        }
    }

    #[test]
    fn validate_reports_child_listed_twice() {
        let mut tree = ElementTree::new();
        let p = group(&mut tree);
        let q = group(&mut tree);
        let c = rect(&mut tree);
        tree.add_element(p, c).unwrap();
        tree.get_mut(q).unwrap().children.push(c);

        assert!(violation(&tree).contains("more than one child list"));
    }

    #[test]
    fn validate_reports_missing_back_link() {
        let mut tree = ElementTree::new();
        let p = group(&mut tree);
        let c = rect(&mut tree);
        tree.add_element(p, c).unwrap();
        tree.get_mut(c).unwrap().parent = None;

        assert!(violation(&tree).contains("is listed under"));
    }

    #[test]
    fn validate_reports_unlisted_parent() {
        let mut tree = ElementTree::new();
        let p = group(&mut tree);
        let c = rect(&mut tree);
        tree.get_mut(c).unwrap().parent = Some(p);

        assert!(violation(&tree).contains("does not list it"));
    }

    #[test]
    fn validate_reports_parent_cycle() {
        let mut tree = ElementTree::new();
        let a = group(&mut tree);
        let b = group(&mut tree);
        tree.get_mut(a).unwrap().children.push(b);
        tree.get_mut(b).unwrap().children.push(a);
        tree.get_mut(a).unwrap().parent = Some(b);
        tree.get_mut(b).unwrap().parent = Some(a);

        assert!(violation(&tree).contains("parent cycle"));
    }

    #[test]
    fn attachment_check_sees_only_the_touched_link() {
        let mut tree = ElementTree::new();
        let p = group(&mut tree);
        let q = group(&mut tree);
        let c = rect(&mut tree);
        tree.add_element(p, c).unwrap();
        tree.add_element(q, c).unwrap();
        assert!(tree.check_link(q, c, Some(p)).is_ok());

        tree.get_mut(p).unwrap().children.push(c);
        assert!(tree.check_link(q, c, Some(p)).is_err());
        assert!(tree.check_link(p, c, None).is_err());
    }
}
