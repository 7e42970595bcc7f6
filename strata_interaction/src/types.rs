// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch vocabulary shared by the router and the dispatcher.

/// Propagation phase of one dispatch entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Root → parent of the target, before the target sees the event.
    Capture,
    /// The target itself.
    Target,
    /// Parent of the target → root, after the target handled the event.
    Bubble,
}

/// What a handler wants to happen after it ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep walking the sequence.
    Continue,
    /// Stop propagation; no later entry is visited.
    Stop,
}

/// One step of a capture → target → bubble sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatch<K> {
    /// Phase of this step.
    pub phase: Phase,
    /// Node receiving the event at this step.
    pub node: K,
}

impl<K> Dispatch<K> {
    /// A capture-phase step.
    pub fn capture(node: K) -> Self {
        Self {
            phase: Phase::Capture,
            node,
        }
    }

    /// A target-phase step.
    pub fn target(node: K) -> Self {
        Self {
            phase: Phase::Target,
            node,
        }
    }

    /// A bubble-phase step.
    pub fn bubble(node: K) -> Self {
        Self {
            phase: Phase::Bubble,
            node,
        }
    }
}
