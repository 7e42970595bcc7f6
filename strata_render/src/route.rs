// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene hit → routed pointer event.

use kurbo::Point;
use strata_interaction::{InteractionController, InteractionState, Intent, PointerEvent};

use crate::scene::Scene;

/// Raw pointer input in container space, before hit testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// The pointer moved to a point.
    Move(Point),
    /// The pointer left the overlay container.
    Leave,
    /// Primary click at a point.
    Click(Point),
}

/// Hit test `input` against `scene` and route it through `controller`.
///
/// Returns at most one [`Intent`]. Input that misses every box yields `None`;
/// a leave is always delivered to the overlay root.
pub fn route_pointer(
    scene: &Scene,
    controller: &InteractionController,
    state: &InteractionState,
    input: PointerInput,
) -> Option<Intent> {
    match input {
        PointerInput::Move(pt) => {
            let hit = scene.hit_test(pt)?;
            controller.handle(PointerEvent::Over { path: &hit.path }, state)
        }
        PointerInput::Click(pt) => {
            let hit = scene.hit_test(pt)?;
            controller.handle(PointerEvent::Click { path: &hit.path }, state)
        }
        PointerInput::Leave => {
            let path = [controller.root().clone()];
            controller.handle(PointerEvent::Leave { path: &path }, state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Renderer;
    use strata_tree::{NodeId, NodeMap, SnapshotMap, UiNode, source_bounds};

    fn scene() -> Scene {
        let nodes: NodeMap = [
            UiNode::new("root", "Root")
                .with_bounds(source_bounds(0.0, 0.0, 200.0, 200.0))
                .with_children(["a"]),
            UiNode::new("a", "A")
                .with_bounds(source_bounds(20.0, 20.0, 40.0, 40.0))
                .with_children(["b"]),
            UiNode::new("b", "B").with_bounds(source_bounds(10.0, 10.0, 10.0, 10.0)),
        ]
        .into_iter()
        .map(|n| (n.id.clone(), n))
        .collect();
        Renderer::default()
            .render(&NodeId::from("root"), &nodes, &SnapshotMap::new(), &InteractionState::new())
            .unwrap()
    }

    #[test]
    fn move_hovers_exactly_the_innermost_box() {
        let controller = InteractionController::new(NodeId::from("root"));
        // b sits at (15, 15)..(20, 20) in container space.
        let intent = route_pointer(
            &scene(),
            &controller,
            &InteractionState::new(),
            PointerInput::Move(Point::new(16.0, 16.0)),
        );
        assert_eq!(intent, Some(Intent::Hover(Some(NodeId::from("b")))));
    }

    #[test]
    fn miss_yields_nothing() {
        let controller = InteractionController::new(NodeId::from("root"));
        let intent = route_pointer(
            &scene(),
            &controller,
            &InteractionState::new(),
            PointerInput::Click(Point::new(500.0, 500.0)),
        );
        assert_eq!(intent, None);
    }

    #[test]
    fn leave_goes_to_root() {
        let controller = InteractionController::new(NodeId::from("root"));
        let state = InteractionState {
            hovered: Some(NodeId::from("b")),
            ..InteractionState::default()
        };
        let intent = route_pointer(&scene(), &controller, &state, PointerInput::Leave);
        assert_eq!(intent, Some(Intent::Hover(None)));
    }
}
