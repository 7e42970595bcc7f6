// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the hierarchy model: node identifiers, tags, captured nodes,
//! snapshots, and the nested tree derived from them.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::bounds::display_rect;

/// Identifier of a captured node.
///
/// Identifiers are opaque strings handed out by the instrumentation layer. Cloning is cheap.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

bitflags::bitflags! {
    /// Rendering technology tags attached to a node by the capture layer.
    ///
    /// Tags are consumed read-only; they only influence the border color a node is drawn with.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NodeTags: u8 {
        /// Node was produced by a declarative component framework.
        const DECLARATIVE = 0b0000_0001;
        /// Node is a platform-native view.
        const NATIVE      = 0b0000_0010;
    }
}

/// Opaque key/value attributes carried through from the capture layer.
pub type Attributes = Arc<BTreeMap<String, String>>;

/// Flat map of captured nodes keyed by identifier.
pub type NodeMap = HashMap<NodeId, UiNode>;

/// Snapshot payloads keyed by the node they were captured for.
pub type SnapshotMap = HashMap<NodeId, Snapshot>;

/// A captured UI node as delivered by the instrumentation layer.
///
/// Children are referenced by identifier; references that do not resolve in the
/// surrounding [`NodeMap`] are tolerated and dropped when the tree is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UiNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Display name, shown as a label while hovered.
    pub name: Arc<str>,
    /// Opaque attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
    /// Ordered child identifiers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<NodeId>,
    /// The child currently in front of its siblings, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub active_child: Option<NodeId>,
    /// Bounds relative to the parent, in source units. `None` when not laid out.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::bounds::serde_xywh")
    )]
    pub bounds: Option<Rect>,
    /// Rendering technology tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: NodeTags,
}

impl UiNode {
    /// Create a leaf node with no bounds, attributes, or tags.
    pub fn new(id: impl Into<NodeId>, name: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Attributes::default(),
            children: Vec::new(),
            active_child: None,
            bounds: None,
            tags: NodeTags::empty(),
        }
    }

    /// Set the ordered child identifiers.
    pub fn with_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<NodeId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Set the active child identifier.
    pub fn with_active_child(mut self, child: impl Into<NodeId>) -> Self {
        self.active_child = Some(child.into());
        self
    }

    /// Set the bounds in source units.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: NodeTags) -> Self {
        self.tags = tags;
        self
    }

    /// Add one attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.attributes).insert(key.into(), value.into());
        self
    }
}

/// A captured bitmap for one node.
///
/// The payload is base64-encoded JPEG data; decoding is left to the drawing surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Snapshot(Arc<str>);

impl Snapshot {
    /// Wrap a base64-encoded JPEG payload.
    pub fn from_base64(data: impl Into<Arc<str>>) -> Self {
        Self(data.into())
    }

    /// The raw base64 payload.
    pub fn as_base64(&self) -> &str {
        &self.0
    }

    /// The payload as a `data:` URI, the form most surfaces accept directly.
    pub fn data_uri(&self) -> String {
        let mut uri = String::with_capacity(self.0.len() + 23);
        uri.push_str("data:image/jpeg;base64,");
        uri.push_str(&self.0);
        uri
    }
}

/// A node of the nested tree, with children resolved to values.
///
/// Produced fresh by [`build_tree`](crate::build_tree) on every pass and never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct NestedNode {
    /// Identifier of the captured node.
    pub id: NodeId,
    /// Display name.
    pub name: Arc<str>,
    /// Opaque attributes.
    pub attributes: Attributes,
    /// Resolved children in their original order, dangling references removed.
    pub children: Vec<NestedNode>,
    /// Bounds in source units, if known.
    pub bounds: Option<Rect>,
    /// Rendering technology tags.
    pub tags: NodeTags,
    /// Index of the active child within `children`.
    pub active_child_idx: Option<usize>,
}

impl NestedNode {
    /// The active child, if one is designated and resolved.
    pub fn active_child(&self) -> Option<&Self> {
        self.active_child_idx.and_then(|idx| self.children.get(idx))
    }

    /// Parent-relative box in display units; missing bounds yield a zero rectangle.
    pub fn display_rect(&self) -> Rect {
        display_rect(self.bounds)
    }

    /// Number of nodes in this subtree, including `self`.
    ///
    /// An inspection helper; rendering never needs it.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = alloc::vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Find the node with `id` in this subtree, in depth-first pre-order.
    ///
    /// An inspection helper for hosts that show details of the selected node.
    pub fn find(&self, id: &NodeId) -> Option<&Self> {
        let mut stack = alloc::vec![self];
        while let Some(node) = stack.pop() {
            if node.id == *id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

// Children are detached onto a heap stack so that dropping a deep tree does not recurse.
impl Drop for NestedNode {
    fn drop(&mut self) {
        let mut stack = core::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
