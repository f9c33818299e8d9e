// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-absolute element bounds and point containment.
//!
//! Bounds are never cached. Scrolling or a layout update invalidates any
//! previously returned value, so call [`element_bounds`] whenever geometry is needed.

use kurbo::{Point, Rect};

use crate::page::Page;
use crate::types::NodeId;

/// Page-absolute border box of an element.
///
/// `x`/`left` and `y`/`top` are the same values; both spellings are kept so
/// positioning code can use whichever reads better.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    /// Same as [`left`](Self::left).
    pub x: f64,
    /// Same as [`top`](Self::top).
    pub y: f64,
    /// Distance from the top of the document.
    pub top: f64,
    /// Distance from the left of the document.
    pub left: f64,
    /// Border box width.
    pub width: f64,
    /// Border box height.
    pub height: f64,
}

impl ElementBounds {
    /// Build bounds from a page-absolute rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            top: rect.y0,
            left: rect.x0,
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// The bounds as a page-absolute rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }

    /// Inclusive containment: points on any edge are inside.
    ///
    /// Note that [`Rect::contains`] is half-open and excludes the right and bottom edges.
    pub fn contains(&self, pt: Point) -> bool {
        contains_inclusive(self.rect(), pt)
    }
}

fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

/// Page-absolute bounds of an element: its client rectangle plus the scroll offset.
///
/// That sum is the stored document-space layout, which is read directly.
/// Returns `None` if `id` is not a live element.
pub fn element_bounds(page: &Page, id: NodeId) -> Option<ElementBounds> {
    page.element(id).map(|e| ElementBounds::from_rect(e.layout))
}

/// Returns true if the page-absolute point lies within the element's bounds, edges included.
///
/// Stale ids and text nodes are never hit.
pub fn is_point_inside_element(page: &Page, pt: Point, id: NodeId) -> bool {
    page.element(id).is_some_and(|e| contains_inclusive(e.layout, pt))
}
