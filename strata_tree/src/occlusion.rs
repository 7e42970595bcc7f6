// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which children of a node are drawn and traversed.
//!
//! Rules, in priority order:
//!
//! 1. A node with an active child shows only that child. The active child covers
//!    the same screen region as its siblings, so drawing them would paint it twice.
//! 2. Otherwise, while the node itself is hovered with the modifier held, no
//!    children are shown, revealing the node's own paint (drill-through).
//! 3. Otherwise every child is shown in order.
//!
//! Rule 1 also applies while drilling through the parent.

use crate::types::{NestedNode, NodeId};

/// Why a node shows the children it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occlusion {
    /// Only the active child at this index is visible.
    ActiveChild(usize),
    /// The node is hovered with the modifier held; its children are hidden.
    DrillThrough,
    /// All children are visible.
    None,
}

/// Classify `node` under the current hover and modifier state.
pub fn occlusion(node: &NestedNode, hovered: Option<&NodeId>, modifier_pressed: bool) -> Occlusion {
    if let Some(idx) = node.active_child_idx
        && idx < node.children.len()
    {
        return Occlusion::ActiveChild(idx);
    }
    if modifier_pressed && hovered == Some(&node.id) {
        return Occlusion::DrillThrough;
    }
    Occlusion::None
}

/// The children of `node` that should be drawn and traversed, in order.
///
/// ## Example
///
/// ```rust
/// use strata_tree::{NodeId, NodeMap, UiNode, build_tree, visible_children};
///
/// let mut nodes = NodeMap::new();
/// nodes.insert("p".into(), UiNode::new("p", "P").with_children(["a", "b"]));
/// nodes.insert("a".into(), UiNode::new("a", "A"));
/// nodes.insert("b".into(), UiNode::new("b", "B"));
/// let tree = build_tree(&NodeId::from("p"), &nodes).unwrap().unwrap();
///
/// assert_eq!(visible_children(&tree, None, true).len(), 2);
/// assert!(visible_children(&tree, Some(&tree.id), true).is_empty());
/// ```
pub fn visible_children<'a>(
    node: &'a NestedNode,
    hovered: Option<&NodeId>,
    modifier_pressed: bool,
) -> &'a [NestedNode] {
    match occlusion(node, hovered, modifier_pressed) {
        Occlusion::ActiveChild(idx) => core::slice::from_ref(&node.children[idx]),
        Occlusion::DrillThrough => &[],
        Occlusion::None => &node.children,
    }
}
