// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Source-to-display coordinate transform.
//!
//! Captured bounds are expressed in source pixels. The overlay draws at half
//! scale: every coordinate and extent is halved independently, with no rounding.

use kurbo::Rect;

/// Convert one source-unit value to display units.
#[inline]
pub fn to_display_unit(n: f64) -> f64 {
    n / 2.0
}

/// Construct source bounds from an origin and a size.
pub fn source_bounds(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

/// Parent-relative display box for optional source bounds.
///
/// Missing bounds become the zero rectangle at the origin.
pub fn display_rect(bounds: Option<Rect>) -> Rect {
    let b = bounds.unwrap_or(Rect::ZERO);
    let x = to_display_unit(b.x0);
    let y = to_display_unit(b.y0);
    Rect::new(
        x,
        y,
        x + to_display_unit(b.width()),
        y + to_display_unit(b.height()),
    )
}

/// Serialize `Option<Rect>` as `{ x, y, width, height }`, the shape the capture layer emits.
#[cfg(feature = "serde")]
pub(crate) mod serde_xywh {
    use kurbo::Rect;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xywh {
        x: f64,
        y: f64,
        #[serde(default)]
        width: f64,
        #[serde(default)]
        height: f64,
    }

    pub(crate) fn serialize<S: Serializer>(
        bounds: &Option<Rect>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        bounds
            .map(|r| Xywh {
                x: r.x0,
                y: r.y0,
                width: r.width(),
                height: r.height(),
            })
            .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Rect>, D::Error> {
        let xywh = Option::<Xywh>::deserialize(deserializer)?;
        Ok(xywh.map(|b| super::source_bounds(b.x, b.y, b.width, b.height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_every_component() {
        let r = display_rect(Some(source_bounds(100.0, 50.0, 200.0, 80.0)));
        assert_eq!(r.x0, 50.0, "left");
        assert_eq!(r.y0, 25.0, "top");
        assert_eq!(r.width(), 100.0, "width");
        assert_eq!(r.height(), 40.0, "height");
    }

    #[test]
    fn missing_bounds_are_zero_rect() {
        assert_eq!(display_rect(None), Rect::ZERO);
    }

    #[test]
    fn odd_values_are_not_rounded() {
        let r = display_rect(Some(source_bounds(3.0, 1.0, 5.0, 7.0)));
        assert_eq!(r, Rect::new(1.5, 0.5, 4.0, 4.0));
    }
}
