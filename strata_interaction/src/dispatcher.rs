// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: walk a dispatch sequence and honor stop outcomes.
//!
//! - [`Outcome`] only controls propagation (`Continue` vs `Stop`).
//! - The return value from [`run`] reports where propagation stopped (if at all).
//! - Anything a handler wants to report lives on the event payload passed to [`run`].
//!
//! Overlay boxes overlap freely, so every pointer handler in this crate stops
//! propagation once it has acted: one physical pointer action reaches exactly one node.

use crate::types::{Dispatch, Outcome};

/// Run `handler` over `seq` in order, stopping at the first [`Outcome::Stop`].
///
/// Returns `None` if the whole sequence was visited, or the entry at which
/// propagation stopped.
///
/// ```
/// use strata_interaction::dispatcher::run;
/// use strata_interaction::router::dispatch_path;
/// use strata_interaction::types::{Outcome, Phase};
///
/// let seq = dispatch_path(&[1, 2, 3]);
/// let mut reached = Vec::new();
/// let stopped = run(&seq, &mut reached, |d, seen| {
///     seen.push(d.node);
///     if d.phase == Phase::Target { Outcome::Stop } else { Outcome::Continue }
/// });
/// assert_eq!(stopped.map(|d| d.node), Some(3));
/// assert_eq!(reached, vec![1, 2, 3]);
/// ```
pub fn run<'a, K, E>(
    seq: &'a [Dispatch<K>],
    event: &mut E,
    mut handler: impl FnMut(&Dispatch<K>, &mut E) -> Outcome,
) -> Option<&'a Dispatch<K>> {
    for d in seq {
        match handler(d, event) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(d),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use alloc::vec;
    use alloc::vec::Vec;

    fn mk_seq() -> Vec<Dispatch<u32>> {
        vec![
            Dispatch::capture(1),
            Dispatch::capture(2),
            Dispatch::target(3),
            Dispatch::bubble(2),
            Dispatch::bubble(1),
        ]
    }

    #[test]
    fn continue_through_all() {
        let seq = mk_seq();
        let mut seen: Vec<(Phase, u32)> = Vec::new();
        let stopped = run(&seq, &mut seen, |d, seen| {
            seen.push((d.phase, d.node));
            Outcome::Continue
        });
        assert!(stopped.is_none());
        assert_eq!(seen.len(), seq.len());
    }

    #[test]
    fn stop_in_target_aborts_bubble_phase() {
        let seq = mk_seq();
        let mut seen: Vec<(Phase, u32)> = Vec::new();
        let stopped = run(&seq, &mut seen, |d, seen| {
            seen.push((d.phase, d.node));
            if d.phase == Phase::Target {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        assert_eq!(stopped.copied(), Some(Dispatch::target(3)));
        assert_eq!(
            seen,
            vec![(Phase::Capture, 1), (Phase::Capture, 2), (Phase::Target, 3)]
        );
    }

    #[test]
    fn stop_in_capture_skips_target() {
        let seq = mk_seq();
        let mut seen: Vec<u32> = Vec::new();
        let stopped = run(&seq, &mut seen, |d, seen| {
            seen.push(d.node);
            Outcome::Stop
        });
        assert_eq!(stopped.map(|d| d.phase), Some(Phase::Capture));
        assert_eq!(seen, vec![1]);
    }
}
