// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and key handlers that turn overlay events into [`Intent`]s.
//!
//! ## Rules
//!
//! - Pointer over a box: that box becomes hovered. Only the innermost box under
//!   the pointer reacts; propagation stops at the target.
//! - Pointer leave: only leaving the overlay root clears hover. Leaving interior
//!   boxes is inert, so moving between siblings and children does not flicker.
//! - Click: selection follows the *hovered* node, not the box that received the
//!   click. Hover and click can disagree on overlapping boxes, and pinning
//!   selection to hover keeps the two highlights consistent. Clicking while the
//!   hovered node is already selected clears the selection.

use alloc::vec::Vec;

use strata_tree::NodeId;
use tracing::debug;

use crate::dispatcher;
use crate::router::dispatch_path;
use crate::state::{InteractionState, Intent};
use crate::types::{Outcome, Phase};

/// A pointer event delivered to the box at the end of `path`.
///
/// `path` runs from the overlay root to the innermost box, as produced by a hit
/// test on the rendered scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent<'a> {
    /// The pointer moved over a new innermost box.
    Over {
        /// Root→target path.
        path: &'a [NodeId],
    },
    /// The pointer left the box at the end of `path`. Does not bubble.
    Leave {
        /// Root→target path.
        path: &'a [NodeId],
    },
    /// Primary click on the box at the end of `path`.
    Click {
        /// Root→target path.
        path: &'a [NodeId],
    },
}

impl<'a> PointerEvent<'a> {
    fn path(&self) -> &'a [NodeId] {
        match *self {
            Self::Over { path } | Self::Leave { path } | Self::Click { path } => path,
        }
    }

    fn bubbles(&self) -> bool {
        !matches!(self, Self::Leave { .. })
    }
}

/// Reconciles pointer and key events into hover/selection intents.
///
/// The controller knows the overlay root (to recognize root-level leave) and
/// nothing else; the state it reasons about is passed in per event.
///
/// ## Example
///
/// ```rust
/// use strata_interaction::{InteractionController, InteractionState, Intent, PointerEvent};
/// use strata_tree::NodeId;
///
/// let root = NodeId::from("root");
/// let child = NodeId::from("child");
/// let controller = InteractionController::new(root.clone());
/// let mut state = InteractionState::new();
///
/// let path = [root.clone(), child.clone()];
/// let intent = controller.handle(PointerEvent::Over { path: &path }, &state);
/// assert_eq!(intent, Some(Intent::Hover(Some(child.clone()))));
/// state.apply(intent.unwrap());
///
/// let intent = controller.handle(PointerEvent::Click { path: &path }, &state);
/// assert_eq!(intent, Some(Intent::Select(Some(child))));
/// ```
#[derive(Clone, Debug)]
pub struct InteractionController {
    root: NodeId,
}

impl InteractionController {
    /// Create a controller for the overlay rooted at `root`.
    pub fn new(root: NodeId) -> Self {
        Self { root }
    }

    /// The overlay root.
    pub fn root(&self) -> &NodeId {
        &self.root
    }

    /// Pointer entered `node`: hover it.
    pub fn on_pointer_enter(&self, node: &NodeId) -> Intent {
        Intent::Hover(Some(node.clone()))
    }

    /// Pointer left `node`: clear hover if `node` is the overlay root, otherwise nothing.
    pub fn on_pointer_leave(&self, node: &NodeId) -> Option<Intent> {
        (*node == self.root).then_some(Intent::Hover(None))
    }

    /// Click: toggle selection of the hovered node.
    ///
    /// If the hovered and selected nodes coincide (including both absent), the
    /// selection is cleared. Otherwise the hovered node becomes selected.
    pub fn on_click(&self, state: &InteractionState) -> Intent {
        if state.hovered == state.selected {
            Intent::Select(None)
        } else {
            Intent::Select(state.hovered.clone())
        }
    }

    /// Modifier key went down or up.
    pub fn on_modifier(&self, pressed: bool) -> Intent {
        Intent::Modifier(pressed)
    }

    /// Route `event` along its path and return the intent of the one handler that acted.
    ///
    /// Capture-phase entries never act. The target reacts first; the first handler
    /// that produces an intent stops propagation, so ancestors never see the event.
    pub fn handle(&self, event: PointerEvent<'_>, state: &InteractionState) -> Option<Intent> {
        let path: Vec<&NodeId> = event.path().iter().collect();
        let seq = dispatch_path(&path);
        let mut intent = None;
        let stopped = dispatcher::run(&seq, &mut intent, |d, out| {
            match d.phase {
                Phase::Capture => return Outcome::Continue,
                Phase::Bubble if !event.bubbles() => return Outcome::Stop,
                Phase::Target | Phase::Bubble => {}
            }
            let acted = match event {
                PointerEvent::Over { .. } => Some(self.on_pointer_enter(d.node)),
                PointerEvent::Leave { .. } => self.on_pointer_leave(d.node),
                PointerEvent::Click { .. } => Some(self.on_click(state)),
            };
            match acted {
                Some(i) => {
                    *out = Some(i);
                    Outcome::Stop
                }
                None => Outcome::Continue,
            }
        });
        debug!(
            event = ?event,
            handled_by = ?stopped.map(|d| d.node),
            intent = ?intent,
            "routed pointer event"
        );
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| NodeId::from(*n)).collect()
    }

    fn controller() -> InteractionController {
        InteractionController::new(NodeId::from("root"))
    }

    #[test]
    fn over_hovers_innermost_only() {
        let path = ids(&["root", "a", "b"]);
        let intent =
            controller().handle(PointerEvent::Over { path: &path }, &InteractionState::new());
        assert_eq!(intent, Some(Intent::Hover(Some(NodeId::from("b")))));
    }

    #[test]
    fn interior_leave_is_inert() {
        let path = ids(&["root", "a"]);
        let intent =
            controller().handle(PointerEvent::Leave { path: &path }, &InteractionState::new());
        assert_eq!(intent, None, "leave must not bubble to the root");
    }

    #[test]
    fn root_leave_clears_hover() {
        let path = ids(&["root"]);
        let state = InteractionState {
            hovered: Some(NodeId::from("a")),
            ..InteractionState::new()
        };
        let intent = controller().handle(PointerEvent::Leave { path: &path }, &state);
        assert_eq!(intent, Some(Intent::Hover(None)));
    }

    #[test]
    fn click_selects_hovered_not_clicked() {
        let path = ids(&["root", "a", "b"]);
        let state = InteractionState {
            hovered: Some(NodeId::from("a")),
            selected: Some(NodeId::from("other")),
            modifier_pressed: false,
        };
        let intent = controller().handle(PointerEvent::Click { path: &path }, &state);
        assert_eq!(intent, Some(Intent::Select(Some(NodeId::from("a")))));
    }

    #[test]
    fn click_on_selected_hover_toggles_off() {
        let state = InteractionState {
            hovered: Some(NodeId::from("x")),
            selected: Some(NodeId::from("x")),
            modifier_pressed: false,
        };
        assert_eq!(controller().on_click(&state), Intent::Select(None));
    }

    #[test]
    fn click_with_nothing_hovered_or_selected_clears() {
        assert_eq!(
            controller().on_click(&InteractionState::new()),
            Intent::Select(None)
        );
    }

    #[test]
    fn empty_path_routes_nowhere() {
        let intent =
            controller().handle(PointerEvent::Click { path: &[] }, &InteractionState::new());
        assert_eq!(intent, None);
    }

    #[test]
    fn modifier_intent() {
        assert_eq!(controller().on_modifier(true), Intent::Modifier(true));
        assert_eq!(controller().on_modifier(false), Intent::Modifier(false));
    }
}
