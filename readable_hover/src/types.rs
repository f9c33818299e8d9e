// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for hover tracking: pointer events, listener handles, the event source
//! capability, and the published hover info.

use alloc::boxed::Box;
use core::ops::ControlFlow;
use kurbo::{Point, Vec2};
use readable_page::{NodeId, Page};

/// A pointer-move event.
///
/// Carries both coordinate spaces, like `MouseEvent::clientX` and `MouseEvent::pageX`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerMove {
    /// Viewport-relative position.
    pub client: Point,
    /// Page-absolute position (client position plus scroll offset).
    pub page: Point,
}

impl PointerMove {
    /// Build an event from a viewport position and the current scroll offset.
    pub fn from_client(client: Point, scroll: Vec2) -> Self {
        Self {
            client,
            page: client + scroll,
        }
    }
}

/// Handle of a registered listener, returned by [`EventSource::add_pointer_move_listener`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Callback invoked for every pointer move, with read access to the page.
///
/// Returning [`ControlFlow::Break`] asks the source to drop the listener; its handle becomes
/// unknown to [`EventSource::remove_pointer_move_listener`].
pub type PointerListener = Box<dyn FnMut(&Page, &PointerMove) -> ControlFlow<()>>;

/// A source of global pointer-move events (the window).
///
/// Pass it explicitly to the [tracker](crate::tracker::HoverTracker) so tests can substitute
/// an in-memory source such as [`Window`](crate::window::Window).
///
/// Implementations dispatch one event at a time and run every listener to completion, and
/// release a listener once it returns [`ControlFlow::Break`].
pub trait EventSource {
    /// Register a listener and return its handle.
    fn add_pointer_move_listener(&mut self, listener: PointerListener) -> ListenerId;
    /// Unregister a listener. Returns false if the handle was unknown.
    fn remove_pointer_move_listener(&mut self, id: ListenerId) -> bool;
}

/// The element currently under the pointer and where to place the player next to it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoveredElementInfo {
    /// The hovered readable element.
    pub element: NodeId,
    /// Page-absolute top of the element.
    pub top: f64,
    /// Page-absolute left of the element.
    pub left: f64,
    /// Height of the element's first rendered line, `0.0` if it has no rendered text.
    pub height_of_first_line: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_point_adds_scroll() {
        let ev = PointerMove::from_client(Point::new(10.0, 20.0), Vec2::new(0.0, 300.0));
        assert_eq!(ev.client, Point::new(10.0, 20.0));
        assert_eq!(ev.page, Point::new(10.0, 320.0));
    }
}
