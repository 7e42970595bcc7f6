// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted inspector session over a captured hierarchy.
//!
//! This example shows how to combine:
//! - `strata_tree` to load a capture and nest it,
//! - `strata_render` to draw it and hit test against what was drawn,
//! - `strata_interaction` to route pointer input and toggle selection.
//!
//! Run:
//! - `cargo run -p strata_demos --example overlay_session`
//! - `RUST_LOG=debug cargo run -p strata_demos --example overlay_session` to see routing logs.

use kurbo::Point;
use strata_interaction::{InteractionController, InteractionState, Intent};
use strata_render::{PointerInput, Renderer, Scene, route_pointer};
use strata_tree::{NodeId, NodeMap, Snapshot, SnapshotMap, UiNode, build_tree};
use tracing_subscriber::EnvFilter;

const CAPTURE: &str = r#"[
    { "id": "window", "name": "MainActivity",
      "bounds": { "x": 0, "y": 0, "width": 1080, "height": 1920 },
      "children": ["toolbar", "pager"] },
    { "id": "toolbar", "name": "Toolbar", "tags": "NATIVE",
      "bounds": { "x": 0, "y": 0, "width": 1080, "height": 160 },
      "children": ["title"] },
    { "id": "title", "name": "Text", "tags": "DECLARATIVE",
      "bounds": { "x": 40, "y": 40, "width": 600, "height": 80 } },
    { "id": "pager", "name": "ViewPager", "tags": "NATIVE",
      "bounds": { "x": 0, "y": 160, "width": 1080, "height": 1760 },
      "children": ["tab0", "tab1"], "activeChild": "tab1",
      "attributes": { "class": "androidx.viewpager.widget.ViewPager" } },
    { "id": "tab0", "name": "FeedTab",
      "bounds": { "x": 0, "y": 100, "width": 1080, "height": 1660 } },
    { "id": "tab1", "name": "SearchTab", "tags": "DECLARATIVE",
      "bounds": { "x": 0, "y": 100, "width": 1080, "height": 1660 },
      "children": ["query"] },
    { "id": "query", "name": "TextField", "tags": "DECLARATIVE",
      "bounds": { "x": 40, "y": 40, "width": 1000, "height": 120 } }
]"#;

struct Session {
    nodes: NodeMap,
    snapshots: SnapshotMap,
    renderer: Renderer,
    controller: InteractionController,
    state: InteractionState,
    scene: Scene,
}

impl Session {
    fn new(nodes: NodeMap, snapshots: SnapshotMap, root: NodeId) -> Self {
        let mut session = Self {
            nodes,
            snapshots,
            renderer: Renderer::default(),
            controller: InteractionController::new(root),
            state: InteractionState::new(),
            scene: Scene::default(),
        };
        session.rerender();
        session
    }

    fn rerender(&mut self) {
        match self.renderer.render(
            self.controller.root(),
            &self.nodes,
            &self.snapshots,
            &self.state,
        ) {
            Ok(scene) => self.scene = scene,
            Err(err) => {
                tracing::error!(%err, "render failed");
                self.scene = Scene::default();
            }
        }
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

    fn modifier(&mut self, pressed: bool) {
        let intent = self.controller.on_modifier(pressed);
        self.apply(Some(intent));
    }

    fn print(&self, step: &str) {
        println!("== {step}");
        println!(
            "   hovered={:?} selected={:?} modifier={}",
            self.state.hovered.as_ref().map(NodeId::as_str),
            self.state.selected.as_ref().map(NodeId::as_str),
            self.state.modifier_pressed,
        );
        if let Some(container) = self.scene.container() {
            println!(
                "   container {}x{} snapshot={}",
                container.size.width,
                container.size.height,
                container.snapshot.is_some()
            );
        }
        for (i, b) in self.scene.boxes().iter().enumerate() {
            let rgba = b.border.color.to_rgba8();
            println!(
                "   {:indent$}{} world={:?} border=#{:02x}{:02x}{:02x}/{} opacity={} drawn_children={}{}",
                "",
                b.node,
                b.world,
                rgba.r,
                rgba.g,
                rgba.b,
                b.border.width,
                b.opacity,
                self.scene.children_of(i).count(),
                b.label
                    .as_ref()
                    .map(|l| format!(" label={:?}", l.text))
                    .unwrap_or_default(),
                indent = b.depth * 2,
            );
        }
        if let Some(selected) = &self.state.selected {
            self.print_details(selected);
        }
    }

    /// Attributes and captured children of a node, as an inspector side panel would show them.
    fn print_details(&self, id: &NodeId) {
        let tree = match build_tree(self.controller.root(), &self.nodes) {
            Ok(Some(tree)) => tree,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(%err, "cannot inspect hierarchy");
                return;
            }
        };
        let Some(node) = tree.find(id) else {
            return;
        };
        println!(
            "   details: {} ({}) subtree={} active_child={:?}",
            node.name,
            node.id,
            node.subtree_len(),
            node.active_child().map(|c| c.id.as_str()),
        );
        for (key, value) in node.attributes.iter() {
            println!("     {key} = {value}");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let nodes: Vec<UiNode> = serde_json::from_str(CAPTURE)?;
    let nodes: NodeMap = nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
    let mut snapshots = SnapshotMap::new();
    // A real capture carries base64 JPEG bytes per node.
    snapshots.insert(NodeId::from("window"), Snapshot::from_base64("/9j/4AAQSkZJRg=="));

    let mut session = Session::new(nodes, snapshots, NodeId::from("window"));
    session.print("initial");

    // Display space is half the source space: the title sits at (20, 20).
    session.input(PointerInput::Move(Point::new(30.0, 30.0)));
    session.print("over title");

    session.input(PointerInput::Click(Point::new(30.0, 30.0)));
    session.print("click selects the hovered node");

    // The pager's tab strip sits above the tab contents.
    session.input(PointerInput::Move(Point::new(300.0, 82.0)));
    session.input(PointerInput::Click(Point::new(300.0, 82.0)));
    session.print("click selects the pager and shows its details");

    // Inside the search tab, below the query field.
    session.input(PointerInput::Move(Point::new(100.0, 400.0)));
    session.print("over search tab (feed tab is occluded)");

    session.modifier(true);
    session.print("modifier drills through the hovered tab");

    session.modifier(false);
    session.input(PointerInput::Move(Point::new(300.0, 82.0)));
    session.input(PointerInput::Click(Point::new(300.0, 82.0)));
    session.print("click on the selected node clears selection");

    session.input(PointerInput::Leave);
    session.print("pointer left the overlay");

    Ok(())
}
