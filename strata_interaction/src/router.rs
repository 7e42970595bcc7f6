// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Propagation sequences for a hit path.
//!
//! Given the root→target path of the box under the pointer, emit the
//! capture → target → bubble sequence that a DOM-like surface would deliver.
//! Hit testing happens elsewhere (on the rendered scene); this module only orders.

use alloc::vec::Vec;

use crate::types::Dispatch;

/// Emit the capture → target → bubble sequence for `path`.
///
/// The last element of `path` is the target. An empty path yields an empty sequence.
///
/// ```
/// use strata_interaction::router::dispatch_path;
/// use strata_interaction::types::Phase;
///
/// let seq = dispatch_path(&[1, 2, 3]);
/// let phases: Vec<(Phase, i32)> = seq.iter().map(|d| (d.phase, d.node)).collect();
/// assert_eq!(phases, vec![
///     (Phase::Capture, 1), (Phase::Capture, 2),
///     (Phase::Target, 3),
///     (Phase::Bubble, 2), (Phase::Bubble, 1),
/// ]);
/// ```
pub fn dispatch_path<K: Copy>(path: &[K]) -> Vec<Dispatch<K>> {
    let Some((&target, ancestors)) = path.split_last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(ancestors.len() * 2 + 1);

    // Capture: root→(excluding target)
    for &n in ancestors {
        out.push(Dispatch::capture(n));
    }

    out.push(Dispatch::target(target));

    // Bubble: parent→root (excluding target)
    for &n in ancestors.iter().rev() {
        out.push(Dispatch::bubble(n));
    }
    out
}
