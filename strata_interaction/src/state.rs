// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state and the intents that change it.

use strata_tree::NodeId;

/// A requested change to [`InteractionState`].
///
/// The controller never writes state itself; it returns intents and whoever
/// owns the state applies them (see [`InteractionState::apply`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Set or clear the hovered node.
    Hover(Option<NodeId>),
    /// Set or clear the selected node.
    Select(Option<NodeId>),
    /// The drill-through modifier key went down (`true`) or up (`false`).
    Modifier(bool),
}

/// Hover, selection, and modifier state for one overlay session.
///
/// Starts with nothing hovered or selected and the modifier up. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Innermost node under the pointer.
    pub hovered: Option<NodeId>,
    /// Node chosen by the last click, if any.
    pub selected: Option<NodeId>,
    /// Whether the drill-through modifier is held.
    pub modifier_pressed: bool,
}

impl InteractionState {
    /// Fresh state: nothing hovered or selected, modifier up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is the hovered node.
    pub fn is_hovered(&self, id: &NodeId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    /// Whether `id` is the selected node.
    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Whether applying `intent` would change anything.
    pub fn would_change(&self, intent: &Intent) -> bool {
        match intent {
            Intent::Hover(id) => self.hovered != *id,
            Intent::Select(id) => self.selected != *id,
            Intent::Modifier(pressed) => self.modifier_pressed != *pressed,
        }
    }

    /// Apply `intent`. Returns `true` if the state changed and a new render pass is due.
    pub fn apply(&mut self, intent: Intent) -> bool {
        if !self.would_change(&intent) {
            return false;
        }
        match intent {
            Intent::Hover(id) => self.hovered = id,
            Intent::Select(id) => self.selected = id,
            Intent::Modifier(pressed) => self.modifier_pressed = pressed,
        }
        true
    }
}
