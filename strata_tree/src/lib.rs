// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Tree: the hierarchy model behind the Strata view overlay.
//!
//! An instrumentation layer captures a UI hierarchy as a flat map of nodes keyed
//! by identifier, each listing its children by id. This crate turns that map into
//! a nested tree and answers the questions the overlay asks while drawing it:
//!
//! - Where is a node's box, in display units, relative to its parent? See [`display_rect`].
//! - What does the tree rooted at some id look like? See [`build_tree`].
//! - Which children of a node are actually visible? See [`visible_children`].
//!
//! ## Where this fits
//!
//! - Tree (this crate): nested positional data, rebuilt from scratch every pass.
//! - `strata_render`: draws the tree into a scene of nested boxes.
//! - `strata_interaction`: turns pointer events on that scene into hover/selection intents.
//!
//! ## Tolerated input
//!
//! Captured data is often incomplete. Child or active-child references that do
//! not resolve are dropped, and nodes without bounds are laid out as a zero
//! rectangle at their parent's origin. None of these are errors. A hierarchy in
//! which a node is its own ancestor is: [`build_tree`] reports
//! [`BuildError::Cycle`] instead of recursing forever.
//!
//! ## Logging
//!
//! Absorbed problems are reported through [`tracing`] at `trace` level and cycles at
//! `warn` level. No subscriber is installed here.
//!
//! ## Features
//!
//! - `std` *(default)*: forwards to `kurbo/std`.
//! - `libm`: `no_std` numerics for Kurbo.
//! - `serde`: (de)serialize [`UiNode`], [`NodeId`], [`NodeTags`], and [`Snapshot`].
//!   Bounds use the `{ x, y, width, height }` shape.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod builder;
mod error;
mod occlusion;
mod types;

pub use bounds::{display_rect, source_bounds, to_display_unit};
pub use builder::{build_tree, count_reachable};
pub use error::BuildError;
pub use occlusion::{Occlusion, occlusion, visible_children};
pub use types::{
    Attributes, NestedNode, NodeId, NodeMap, NodeTags, Snapshot, SnapshotMap, UiNode,
};
