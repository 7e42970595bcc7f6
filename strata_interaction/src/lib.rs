// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Interaction: hover, selection, and drill-through for the Strata overlay.
//!
//! ## Overview
//!
//! The overlay draws nested, absolutely positioned boxes that may overlap. A single
//! pointer action must affect exactly one node, so events are routed along the hit
//! path as a capture → target → bubble sequence and every handler stops
//! propagation once it has acted.
//!
//! - [`router::dispatch_path`] orders a root→target path into dispatch steps.
//! - [`dispatcher::run`] walks the steps and honors [`types::Outcome::Stop`].
//! - [`InteractionController`] holds the handlers: hover on enter, clear on
//!   root-level leave, toggle selection on click, modifier up/down.
//! - [`InteractionState`] is owned by the caller. The controller only returns
//!   [`Intent`]s; [`InteractionState::apply`] is the single place state changes.
//!
//! ## Workflow
//!
//! 1) Render the tree and hit-test the pointer against the rendered scene to get a root→target path.
//! 2) Wrap it in a [`PointerEvent`] and call [`InteractionController::handle`].
//! 3) Apply the returned [`Intent`] to your [`InteractionState`]; if it changed, render again.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod dispatcher;
pub mod router;
pub mod state;
pub mod types;

pub use controller::{InteractionController, PointerEvent};
pub use state::{InteractionState, Intent};
