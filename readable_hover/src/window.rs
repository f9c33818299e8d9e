// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory window: owns a [`Page`] and dispatches pointer moves to listeners.

use alloc::vec::Vec;
use core::ops::ControlFlow;
use kurbo::Point;
use readable_page::Page;

use crate::types::{EventSource, ListenerId, PointerListener, PointerMove};

/// Single-threaded event source over an owned page.
///
/// Listeners are called in registration order. Dispatch is synchronous, so a listener
/// always observes the page as it was when the event was dispatched.
pub struct Window {
    page: Page,
    listeners: Vec<(ListenerId, PointerListener)>,
    next_id: u64,
}

impl core::fmt::Debug for Window {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Window")
            .field("page", &self.page)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Window {
    /// Wrap a page.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The page shown in this window.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable access to the page, for layout and scroll updates.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Number of registered pointer-move listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch a move to a viewport position, deriving the page position from the scroll offset.
    pub fn pointer_move_client(&mut self, client: Point) {
        let ev = PointerMove::from_client(client, self.page.scroll_offset());
        self.dispatch_pointer_move(&ev);
    }

    /// Dispatch a move to a page-absolute position.
    ///
    /// Listeners see exactly `page_pt` as the page position.
    pub fn pointer_move_page(&mut self, page_pt: Point) {
        let ev = PointerMove {
            client: page_pt - self.page.scroll_offset(),
            page: page_pt,
        };
        self.dispatch_pointer_move(&ev);
    }

    /// Deliver `ev` to every listener, dropping those that return [`ControlFlow::Break`].
    pub fn dispatch_pointer_move(&mut self, ev: &PointerMove) {
        let page = &self.page;
        self.listeners
            .retain_mut(|(id, listener)| match listener(page, ev) {
                ControlFlow::Continue(()) => true,
                ControlFlow::Break(()) => {
                    log::debug!("pointer-move listener {id:?} released itself");
                    false
                }
            });
    }
}

impl EventSource for Window {
    fn add_pointer_move_listener(&mut self, listener: PointerListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove_pointer_move_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }
}
