// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Render: draws a captured view hierarchy as nested, parent-relative boxes.
//!
//! [`Renderer::render`] builds the nested tree (see [`strata_tree::build_tree`])
//! and walks it once, producing a [`Scene`]:
//!
//! - a [`Container`] sized to the root node, framed by an outset border and
//!   filled with the root snapshot, acting as the origin for every box;
//! - one [`SceneBox`] per drawn node, in paint order, carrying its parent-relative
//!   and container-space rectangles, a border colored by tag and thickened on
//!   hover, reduced opacity when selected, its snapshot, and a name label while hovered.
//!
//! Children are filtered through [`strata_tree::visible_children`], so an active
//! child hides its siblings and modifier drill-through hides the hovered node's
//! descendants. Nodes without bounds become empty boxes at their parent's origin
//! and their children are still drawn.
//!
//! ## Hit testing
//!
//! Hit testing rides on what was drawn: [`Scene::hit_test`] returns the topmost
//! box under a point and its root→target path, ready to be handed to
//! [`strata_interaction::InteractionController::handle`]. There is no separate
//! spatial model to keep in sync. [`route_pointer`] does both steps for raw
//! [`PointerInput`].
//!
//! ## Style
//!
//! Colors and widths come from [`OverlayStyle`]; nothing is read from ambient globals.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod renderer;
mod route;
mod scene;
mod style;

pub use renderer::Renderer;
pub use route::{PointerInput, route_pointer};
pub use scene::{Border, Container, Hit, Label, Scene, SceneBox};
pub use style::OverlayStyle;
