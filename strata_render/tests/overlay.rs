// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `strata_render` crate.
//!
//! These run full render → hit test → route → apply loops over a small
//! capture, the way a host drives the overlay.

use kurbo::{Point, Rect};
use strata_interaction::{InteractionController, InteractionState, Intent};
use strata_render::{PointerInput, Renderer, Scene, route_pointer};
use strata_tree::{BuildError, NodeId, NodeMap, SnapshotMap, UiNode, source_bounds};

fn map(nodes: impl IntoIterator<Item = UiNode>) -> NodeMap {
    nodes.into_iter().map(|n| (n.id.clone(), n)).collect()
}

/// Screen 400x400 display units with a card that holds a button. A stacked
/// pager overlaps the card and shows only its second page.
fn capture() -> NodeMap {
    map([
        UiNode::new("screen", "Screen")
            .with_bounds(source_bounds(0.0, 0.0, 800.0, 800.0))
            .with_children(["card", "pager"]),
        UiNode::new("card", "Card")
            .with_bounds(source_bounds(0.0, 0.0, 400.0, 400.0))
            .with_children(["button"]),
        UiNode::new("button", "Button").with_bounds(source_bounds(100.0, 100.0, 200.0, 100.0)),
        UiNode::new("pager", "Pager")
            .with_bounds(source_bounds(300.0, 300.0, 400.0, 400.0))
            .with_children(["page0", "page1"])
            .with_active_child("page1"),
        UiNode::new("page0", "Page 0").with_bounds(source_bounds(0.0, 0.0, 400.0, 400.0)),
        UiNode::new("page1", "Page 1").with_bounds(source_bounds(0.0, 0.0, 200.0, 200.0)),
    ])
}

struct Host {
    nodes: NodeMap,
    snapshots: SnapshotMap,
    root: NodeId,
    renderer: Renderer,
    controller: InteractionController,
    state: InteractionState,
    scene: Scene,
}

impl Host {
    fn new(nodes: NodeMap) -> Self {
        let root = NodeId::from("screen");
        let mut host = Self {
            nodes,
            snapshots: SnapshotMap::new(),
            controller: InteractionController::new(root.clone()),
            root,
            renderer: Renderer::default(),
            state: InteractionState::new(),
            scene: Scene::default(),
        };
        host.rerender();
        host
    }

    fn rerender(&mut self) {
        self.scene = self
            .renderer
            .render(&self.root, &self.nodes, &self.snapshots, &self.state)
            .unwrap();
    }

    fn apply(&mut self, intent: Option<Intent>) {
        if let Some(intent) = intent
            && self.state.apply(intent)
        {
            self.rerender();
        }
    }

    fn input(&mut self, input: PointerInput) {
        let intent = route_pointer(&self.scene, &self.controller, &self.state, input);
        self.apply(intent);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.input(PointerInput::Move(Point::new(x, y)));
    }

    fn click(&mut self, x: f64, y: f64) {
        self.input(PointerInput::Click(Point::new(x, y)));
    }

    fn leave_overlay(&mut self) {
        self.input(PointerInput::Leave);
    }

    fn modifier(&mut self, pressed: bool) {
        let intent = self.controller.on_modifier(pressed);
        self.apply(Some(intent));
    }

    fn hovered(&self) -> Option<&str> {
        self.state.hovered.as_ref().map(NodeId::as_str)
    }
}

#[test]
fn coordinate_law() {
    let host = Host::new(capture());
    let button = host.scene.get(&NodeId::from("button")).unwrap();
    // Source (100, 100) 200x100 halves to (50, 50) 100x50, relative to the card.
    assert_eq!(button.local, Rect::new(50.0, 50.0, 150.0, 100.0));
    assert_eq!(button.world, Rect::new(50.0, 50.0, 150.0, 100.0));
}

#[test]
fn pointer_hovers_innermost_box() {
    let mut host = Host::new(capture());
    host.move_to(60.0, 60.0);
    assert_eq!(host.hovered(), Some("button"));
    host.move_to(10.0, 10.0);
    assert_eq!(host.hovered(), Some("card"));
    host.move_to(390.0, 390.0);
    assert_eq!(host.hovered(), Some("screen"));
}

#[test]
fn occluded_page_is_not_hittable() {
    let mut host = Host::new(capture());
    // Inside page0's box but outside page1's: page0 was never drawn.
    host.move_to(330.0, 330.0);
    assert_eq!(host.hovered(), Some("pager"));
    host.move_to(160.0, 160.0);
    assert_eq!(host.hovered(), Some("page1"), "later sibling paints on top of the card");
}

#[test]
fn hover_label_and_selection_follow_state() {
    let mut host = Host::new(capture());
    host.move_to(60.0, 60.0);
    let button = host.scene.get(&NodeId::from("button")).unwrap();
    assert_eq!(button.label.as_ref().map(|l| l.text.as_ref()), Some("Button"));

    host.click(60.0, 60.0);
    let button = host.scene.get(&NodeId::from("button")).unwrap();
    assert!(button.selected);
    assert!(button.opacity < 1.0);

    host.click(60.0, 60.0);
    assert_eq!(host.state.selected, None, "second click toggles off");
}

#[test]
fn drill_through_reveals_parent() {
    let mut host = Host::new(capture());
    host.move_to(10.0, 10.0);
    assert_eq!(host.hovered(), Some("card"));
    host.modifier(true);
    assert!(host.scene.get(&NodeId::from("button")).is_none());

    // With the button gone the card itself is under the pointer.
    host.move_to(60.0, 60.0);
    assert_eq!(host.hovered(), Some("card"));

    host.modifier(false);
    assert!(host.scene.get(&NodeId::from("button")).is_some());
}

#[test]
fn leaving_the_overlay_clears_hover() {
    let mut host = Host::new(capture());
    host.move_to(60.0, 60.0);
    host.leave_overlay();
    assert_eq!(host.hovered(), None);
    assert!(host.scene.boxes().iter().all(|b| b.label.is_none()));
}

#[test]
fn unknown_root_renders_empty_scene() {
    let scene = Renderer::default()
        .render(
            &NodeId::from("nope"),
            &capture(),
            &SnapshotMap::new(),
            &InteractionState::new(),
        )
        .unwrap();
    assert!(scene.is_empty());
}

#[test]
fn cyclic_capture_fails_the_pass() {
    let mut nodes = capture();
    nodes.insert(
        NodeId::from("button"),
        UiNode::new("button", "Button").with_children(["card"]),
    );
    let result = Renderer::default().render(
        &NodeId::from("screen"),
        &nodes,
        &SnapshotMap::new(),
        &InteractionState::new(),
    );
    assert!(matches!(result, Err(BuildError::Cycle { .. })));
}

#[test]
fn deep_hierarchy_renders() {
    let depth = 10_000;
    let nodes = map((0..depth).map(|i| {
        let node = UiNode::new(format!("n{i}"), "Level")
            .with_bounds(source_bounds(0.0, 0.0, 20.0, 20.0));
        if i + 1 < depth {
            node.with_children([format!("n{}", i + 1)])
        } else {
            node
        }
    }));
    let scene = Renderer::default()
        .render(
            &NodeId::from("n0"),
            &nodes,
            &SnapshotMap::new(),
            &InteractionState::new(),
        )
        .unwrap();
    assert_eq!(scene.boxes().len(), depth);
    let hit = scene.hit_test(Point::new(1.0, 1.0)).unwrap();
    assert_eq!(hit.node.as_str(), "n9999");
    assert_eq!(hit.path.len(), depth);
}
