// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendered overlay: a container plus nested boxes in paint order.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use smallvec::SmallVec;
use strata_tree::{NodeId, Snapshot};

/// A stroked frame.
///
/// `rect` is the outer edge; the stroke covers the band `width` wide just inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    /// Outer edge of the stroke, in container space.
    pub rect: Rect,
    /// Stroke width.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// The name overlay drawn on the hovered node.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Text to draw.
    pub text: Arc<str>,
    /// Top-left of the label, in container space.
    pub origin: Point,
    /// Text color.
    pub color: Color,
    /// Backdrop color.
    pub background: Color,
}

/// The outermost frame. Its top-left corner is the origin of every box.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    /// Size of the root node in display units.
    pub size: Size,
    /// Frame drawn outside the container.
    pub border: Border,
    /// Root snapshot filling the container.
    pub snapshot: Option<Snapshot>,
}

impl Container {
    /// The container rectangle in its own space.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }
}

/// One drawn node.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneBox {
    /// The node this box draws.
    pub node: NodeId,
    /// Index of the parent box in [`Scene::boxes`]; `None` for the root.
    pub parent: Option<usize>,
    /// Nesting depth; the root is 0.
    pub depth: usize,
    /// Box relative to the parent box.
    pub local: Rect,
    /// Box in container space.
    pub world: Rect,
    /// Per-node frame, in container space.
    pub border: Border,
    /// 1.0, or less while selected.
    pub opacity: f32,
    /// Whether this node is the hover target.
    pub hovered: bool,
    /// Whether this node is selected.
    pub selected: bool,
    /// Snapshot filling the box.
    pub snapshot: Option<Snapshot>,
    /// Name overlay, present while hovered.
    pub label: Option<Label>,
}

/// Result of [`Scene::hit_test`].
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// The innermost, topmost box under the point.
    pub node: NodeId,
    /// Index of that box in [`Scene::boxes`].
    pub index: usize,
    /// Root→node path (inclusive).
    pub path: SmallVec<[NodeId; 8]>,
}

/// A rendered overlay.
///
/// Boxes are stored in paint order (depth-first pre-order over visible
/// children), so a box is always painted after its ancestors and after its
/// earlier siblings. An empty scene means there was nothing to render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub(crate) container: Option<Container>,
    pub(crate) boxes: Vec<SceneBox>,
}

impl Scene {
    /// `true` if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.container.is_none()
    }

    /// The outer container, if anything was rendered.
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// All boxes in paint order.
    pub fn boxes(&self) -> &[SceneBox] {
        &self.boxes
    }

    /// The first box drawing `id`, in paint order.
    pub fn get(&self, id: &NodeId) -> Option<&SceneBox> {
        self.boxes.iter().find(|b| b.node == *id)
    }

    /// Indices of the boxes whose parent is `index`, in paint order.
    ///
    /// Only drawn children are listed, so occluded siblings are absent. Meant
    /// for inspection; hit testing does not use it.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.parent == Some(index))
            .map(|(i, _)| i)
    }

    /// Root→node path of the box at `index`.
    pub fn path_of(&self, index: usize) -> SmallVec<[NodeId; 8]> {
        let mut path = SmallVec::new();
        let mut cur = self.boxes.get(index).map(|_| index);
        while let Some(i) = cur {
            let b = &self.boxes[i];
            path.push(b.node.clone());
            cur = b.parent;
        }
        path.reverse();
        path
    }

    /// Find the box under a container-space point.
    ///
    /// Boxes later in paint order are on top, so the last containing box wins.
    /// Children are hit even where they extend past their parent. Empty boxes
    /// (nodes without bounds) are never hit, and nodes hidden by occlusion or
    /// drill-through were never drawn, so they cannot be hit either.
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        let index = self.boxes.iter().rposition(|b| b.world.contains(point))?;
        Some(Hit {
            node: self.boxes[index].node.clone(),
            index,
            path: self.path_of(index),
        })
    }
}
