// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree → scene.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use strata_interaction::InteractionState;
use strata_tree::{
    BuildError, NestedNode, NodeId, NodeMap, SnapshotMap, build_tree, visible_children,
};
use tracing::debug;

use crate::scene::{Border, Container, Label, Scene, SceneBox};
use crate::style::OverlayStyle;

/// Draws a hierarchy into a [`Scene`].
///
/// Rendering is a pure function of its inputs: the tree is rebuilt from the node
/// map on every call and nothing is cached between passes.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use strata_interaction::InteractionState;
/// use strata_render::Renderer;
/// use strata_tree::{NodeId, NodeMap, SnapshotMap, UiNode, source_bounds};
///
/// let mut nodes = NodeMap::new();
/// nodes.insert(
///     "root".into(),
///     UiNode::new("root", "Root")
///         .with_bounds(source_bounds(0.0, 0.0, 400.0, 400.0))
///         .with_children(["button"]),
/// );
/// nodes.insert(
///     "button".into(),
///     UiNode::new("button", "Button").with_bounds(source_bounds(100.0, 50.0, 200.0, 80.0)),
/// );
///
/// let scene = Renderer::default()
///     .render(&NodeId::from("root"), &nodes, &SnapshotMap::new(), &InteractionState::new())
///     .unwrap();
/// let button = scene.get(&NodeId::from("button")).unwrap();
/// assert_eq!(button.local.x0, 50.0);
/// assert_eq!(button.local.width(), 100.0);
/// assert_eq!(scene.hit_test(Point::new(60.0, 30.0)).unwrap().node, NodeId::from("button"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    style: OverlayStyle,
}

impl Renderer {
    /// Create a renderer with an explicit style.
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    /// The style in use.
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Build the tree rooted at `root` and draw it.
    ///
    /// Yields an empty scene when `root` is not in `nodes`. A cyclic hierarchy
    /// aborts the pass with [`BuildError::Cycle`].
    pub fn render(
        &self,
        root: &NodeId,
        nodes: &NodeMap,
        snapshots: &SnapshotMap,
        state: &InteractionState,
    ) -> Result<Scene, BuildError> {
        let Some(tree) = build_tree(root, nodes)? else {
            debug!(root = %root, "nothing to render");
            return Ok(Scene::default());
        };
        Ok(self.render_tree(&tree, snapshots, state))
    }

    /// Draw an already built tree.
    pub fn render_tree(
        &self,
        tree: &NestedNode,
        snapshots: &SnapshotMap,
        state: &InteractionState,
    ) -> Scene {
        let container = self.container(tree, snapshots);
        let hovered = state.hovered.as_ref();

        let mut boxes: Vec<SceneBox> = Vec::new();
        // Depth-first pre-order. Each entry carries its parent's index and
        // container-space origin.
        let mut stack: Vec<(&NestedNode, Option<usize>, Point, usize)> =
            vec![(tree, None, Point::ZERO, 0)];
        while let Some((node, parent, parent_origin, depth)) = stack.pop() {
            let local = node.display_rect();
            let world = local + parent_origin.to_vec2();
            let is_hovered = state.is_hovered(&node.id);
            let is_selected = state.is_selected(&node.id);

            boxes.push(SceneBox {
                node: node.id.clone(),
                parent,
                depth,
                local,
                world,
                border: Border {
                    rect: world,
                    width: self.style.border_width(is_hovered),
                    color: self.style.border_color(node.tags),
                },
                opacity: self.style.opacity(is_selected),
                hovered: is_hovered,
                selected: is_selected,
                snapshot: snapshots.get(&node.id).cloned(),
                label: is_hovered.then(|| Label {
                    text: node.name.clone(),
                    origin: world.origin(),
                    color: self.style.label_color,
                    background: self.style.label_background,
                }),
            });

            let index = boxes.len() - 1;
            // Reversed so children pop, and therefore paint, in their original order.
            for child in visible_children(node, hovered, state.modifier_pressed)
                .iter()
                .rev()
            {
                stack.push((child, Some(index), world.origin(), depth + 1));
            }
        }

        debug!(root = %tree.id, boxes = boxes.len(), "rendered overlay");
        Scene {
            container: Some(container),
            boxes,
        }
    }

    fn container(&self, root: &NestedNode, snapshots: &SnapshotMap) -> Container {
        let size = root.display_rect().size();
        let w = self.style.outer_border_width;
        Container {
            size,
            border: Border {
                // Outset by its own width so the frame does not eat into the content.
                rect: Rect::from_origin_size(Point::ZERO, size).inflate(w, w),
                width: w,
                color: self.style.outer_border_color,
            },
            snapshot: snapshots.get(&root.id).cloned(),
        }
    }
}
