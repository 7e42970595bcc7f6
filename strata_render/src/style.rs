// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and stroke widths used when drawing the overlay.

use peniko::Color;
use strata_tree::NodeTags;

/// Visual configuration for [`Renderer`](crate::Renderer).
///
/// All widths are in display units.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Border color for nodes tagged [`NodeTags::DECLARATIVE`].
    pub declarative_border: Color,
    /// Border color for nodes tagged [`NodeTags::NATIVE`].
    pub native_border: Color,
    /// Border color for untagged nodes.
    pub default_border: Color,
    /// Node border width.
    pub border_width: f64,
    /// Node border width while the node is hovered.
    pub hovered_border_width: f64,
    /// Width of the frame drawn outside the overlay container.
    pub outer_border_width: f64,
    /// Color of the frame drawn outside the overlay container.
    pub outer_border_color: Color,
    /// Opacity applied to the selected node.
    pub selected_opacity: f32,
    /// Text color of the hover label.
    pub label_color: Color,
    /// Backdrop behind the hover label.
    pub label_background: Color,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            declarative_border: Color::from_rgb8(0x4d, 0x84, 0xf5),
            native_border: Color::from_rgb8(0xf5, 0x9b, 0x23),
            default_border: Color::from_rgb8(0x9e, 0x9e, 0x9e),
            border_width: 1.0,
            hovered_border_width: 3.0,
            outer_border_width: 5.0,
            outer_border_color: Color::from_rgb8(0x33, 0x33, 0x33),
            selected_opacity: 0.5,
            label_color: Color::from_rgb8(0xff, 0xff, 0xff),
            label_background: Color::from_rgba8(0x00, 0x00, 0x00, 0xb3),
        }
    }
}

impl OverlayStyle {
    /// Border color for a node with `tags`. Declarative wins over native.
    pub fn border_color(&self, tags: NodeTags) -> Color {
        if tags.contains(NodeTags::DECLARATIVE) {
            self.declarative_border
        } else if tags.contains(NodeTags::NATIVE) {
            self.native_border
        } else {
            self.default_border
        }
    }

    /// Border width for a node, thicker while hovered.
    pub fn border_width(&self, hovered: bool) -> f64 {
        if hovered {
            self.hovered_border_width
        } else {
            self.border_width
        }
    }

    /// Opacity for a node, reduced while selected.
    pub fn opacity(&self, selected: bool) -> f32 {
        if selected { self.selected_opacity } else { 1.0 }
    }
}
