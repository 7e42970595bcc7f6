// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced while building the nested tree.

use alloc::vec::Vec;
use core::fmt;

use crate::types::NodeId;

/// A data-integrity failure in the captured hierarchy.
///
/// Missing references and missing layout are absorbed during building; only
/// conditions that make the hierarchy unusable are reported here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// `node` is reachable from itself through its own children.
    Cycle {
        /// The node that was revisited.
        node: NodeId,
        /// Ancestor chain from the root down to the parent that referenced `node` again.
        path: Vec<NodeId>,
    },
    /// `node` is listed as a child of more than one parent, or twice by the same parent.
    SharedNode {
        /// The node that was reached a second time.
        node: NodeId,
        /// The parent it was first expanded under.
        first_parent: NodeId,
        /// The parent that referenced it again.
        second_parent: NodeId,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { node, path } => {
                write!(f, "node `{node}` is its own ancestor (via ")?;
                for (i, id) in path.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{id}")?;
                }
                f.write_str(")")
            }
            Self::SharedNode {
                node,
                first_parent,
                second_parent,
            } => write!(
                f,
                "node `{node}` has two parents: `{first_parent}` and `{second_parent}`"
            ),
        }
    }
}

impl core::error::Error for BuildError {}
