// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat node map → nested tree.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use tracing::{trace, warn};

use crate::error::BuildError;
use crate::types::{NestedNode, NodeId, NodeMap, UiNode};

/// Build the nested tree rooted at `root`.
///
/// - Returns `Ok(None)` when `root` is not in `nodes`; there is nothing to render.
/// - Child references that do not resolve are dropped.
/// - `active_child_idx` names the active child's position among the *resolved*
///   children. An active child that does not resolve leaves it `None`.
/// - A node that appears in its own ancestor chain aborts the build with
///   [`BuildError::Cycle`]. A node listed under a second parent (or twice under
///   the same one) aborts it with [`BuildError::SharedNode`].
///
/// Every reachable node is expanded at most once and the walk uses an explicit
/// stack, so arbitrarily deep hierarchies build in O(V + E).
///
/// ## Example
///
/// ```rust
/// use strata_tree::{NodeId, NodeMap, UiNode, build_tree};
///
/// let mut nodes = NodeMap::new();
/// nodes.insert("root".into(), UiNode::new("root", "Root").with_children(["a", "gone"]));
/// nodes.insert("a".into(), UiNode::new("a", "A"));
///
/// let tree = build_tree(&NodeId::from("root"), &nodes).unwrap().unwrap();
/// assert_eq!(tree.children.len(), 1);
/// ```
pub fn build_tree(root: &NodeId, nodes: &NodeMap) -> Result<Option<NestedNode>, BuildError> {
    let Some(root_node) = nodes.get(root) else {
        trace!(root = %root, "root not present in node map");
        return Ok(None);
    };

    let mut visits = Visits::default();
    visits.enter_root(&root_node.id);
    let mut current = Frame::new(root_node);
    let mut parents: Vec<Frame<'_>> = Vec::new();
    loop {
        let node = current.node;
        if let Some(child_id) = node.children.get(current.next) {
            current.next += 1;
            match nodes.get(child_id) {
                Some(child) => {
                    visits.enter(&child.id, &node.id)?;
                    parents.push(core::mem::replace(&mut current, Frame::new(child)));
                }
                None => trace!(parent = %node.id, child = %child_id, "dropping dangling child"),
            }
            continue;
        }

        visits.leave(&node.id);
        let built = current.finish();
        match parents.pop() {
            Some(parent) => {
                current = parent;
                current.children.push(built);
            }
            None => return Ok(Some(built)),
        }
    }
}

/// Count the distinct identifiers reachable from `root` through resolvable child references.
///
/// Returns 0 when `root` itself does not resolve. Cycles are tolerated here; each id counts once.
pub fn count_reachable(root: &NodeId, nodes: &NodeMap) -> usize {
    if !nodes.contains_key(root) {
        return 0;
    }
    let mut seen: HashSet<&NodeId> = HashSet::new();
    let mut stack = alloc::vec![root];
    while let Some(id) = stack.pop() {
        let Some(node) = nodes.get(id) else {
            continue;
        };
        if !seen.insert(&node.id) {
            continue;
        }
        stack.extend(node.children.iter().filter(|c| nodes.contains_key(*c)));
    }
    seen.len()
}

/// One node whose children are still being built.
struct Frame<'a> {
    node: &'a UiNode,
    /// Index of the next entry of `node.children` to visit.
    next: usize,
    children: Vec<NestedNode>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a UiNode) -> Self {
        Self {
            node,
            next: 0,
            children: Vec::with_capacity(node.children.len()),
        }
    }

    fn finish(self) -> NestedNode {
        let node = self.node;
        let children = self.children;
        let active_child_idx = node.active_child.as_ref().and_then(|active| {
            let idx = children.iter().position(|c| c.id == *active);
            if idx.is_none() {
                trace!(parent = %node.id, child = %active, "active child does not resolve");
            }
            idx
        });

        NestedNode {
            id: node.id.clone(),
            name: node.name.clone(),
            attributes: node.attributes.clone(),
            children,
            bounds: node.bounds,
            tags: node.tags,
            active_child_idx,
        }
    }
}

/// Bookkeeping for the walk: the current root→node chain and the parent each
/// expanded node was first reached from.
#[derive(Default)]
struct Visits<'a> {
    path: Vec<&'a NodeId>,
    on_path: HashSet<&'a NodeId>,
    first_parent: HashMap<&'a NodeId, &'a NodeId>,
}

impl<'a> Visits<'a> {
    fn enter_root(&mut self, root: &'a NodeId) {
        self.path.push(root);
        self.on_path.insert(root);
    }

    fn enter(&mut self, id: &'a NodeId, parent: &'a NodeId) -> Result<(), BuildError> {
        if self.on_path.contains(id) {
            let path: Vec<NodeId> = self.path.iter().map(|id| (*id).clone()).collect();
            warn!(node = %id, depth = path.len(), "cycle in captured hierarchy");
            return Err(BuildError::Cycle {
                node: id.clone(),
                path,
            });
        }
        if let Some(first) = self.first_parent.get(id) {
            warn!(node = %id, first = %first, second = %parent, "node has more than one parent");
            return Err(BuildError::SharedNode {
                node: id.clone(),
                first_parent: (*first).clone(),
                second_parent: parent.clone(),
            });
        }
        self.first_parent.insert(id, parent);
        self.path.push(id);
        self.on_path.insert(id);
        Ok(())
    }

    fn leave(&mut self, id: &'a NodeId) {
        self.path.pop();
        self.on_path.remove(id);
    }
}
