// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracker: the hook that follows the pointer over readable elements.
//!
//! ## Lifecycle
//!
//! - Call [`HoverTracker::hovered_paragraph_coordinate`] on every render with the current
//!   candidate list. The first call attaches one pointer-move listener to the event source.
//! - Candidate lists are compared by identity ([`Rc::ptr_eq`]), not by contents. Passing a
//!   different list detaches the old listener before attaching a new one.
//! - Call [`HoverTracker::unmount`] when the consuming component goes away. It removes the
//!   listener, so later pointer moves no longer update the tracker.
//!
//! ## Per-event behavior
//!
//! Every pointer move rescans the candidates in order using the event's page-absolute
//! position. The first candidate whose bounds contain the point wins; its bounds and first-line
//! height are published. If none matches, `None` is published. Nothing is cached or debounced.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::ControlFlow;

use kurbo::Point;
use readable_page::{
    NodeId, Page, QueryFilter, element_bounds, is_point_inside_element,
    line_height_of_first_line,
};

use crate::hover::{HoverEvent, HoverState};
use crate::types::{EventSource, HoveredElementInfo, ListenerId, PointerMove};

/// Tracker settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverConfig {
    /// Restricts which candidates can be hovered. The default accepts every candidate.
    ///
    /// Hidden elements report a zero-sized box at the origin, so a pointer at `(0, 0)` would
    /// hit them; set `visible_only` to skip them.
    pub filter: QueryFilter,
}

/// Find the first candidate, in order, containing the page-absolute point `pt`.
pub fn resolve_hover(
    page: &Page,
    candidates: &[NodeId],
    pt: Point,
    filter: QueryFilter,
) -> Option<HoveredElementInfo> {
    candidates.iter().copied().find_map(|id| {
        let element = page.element(id)?;
        if !filter.accepts(element.flags) || !is_point_inside_element(page, pt, id) {
            return None;
        }
        let bounds = element_bounds(page, id)?;
        Some(HoveredElementInfo {
            element: id,
            top: bounds.top,
            left: bounds.left,
            height_of_first_line: line_height_of_first_line(page, id),
        })
    })
}

/// State shared between the tracker and its listener.
#[derive(Debug, Default)]
struct Shared {
    info: Option<HoveredElementInfo>,
    hover: HoverState<NodeId>,
    transitions: Vec<HoverEvent<NodeId>>,
    publish_count: u64,
}

impl Shared {
    fn publish(&mut self, page: &Page, info: Option<HoveredElementInfo>) {
        let path = info
            .map(|i| page.path_to_root(i.element))
            .unwrap_or_default();
        let events = self.hover.update_path(&path);
        if !events.is_empty() {
            log::trace!("hovered element is now {:?}", info.map(|i| i.element));
        }
        self.transitions.extend(events);
        self.info = info;
        self.publish_count += 1;
    }
}

#[derive(Debug)]
struct Subscription {
    candidates: Rc<[NodeId]>,
    listener: ListenerId,
}

/// Hover state for one consuming component.
///
/// Holds at most one listener on the event source at a time.
#[derive(Debug)]
pub struct HoverTracker {
    shared: Rc<RefCell<Shared>>,
    subscription: Option<Subscription>,
    config: HoverConfig,
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverTracker {
    /// Create an unmounted tracker with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HoverConfig::default())
    }

    /// Create an unmounted tracker.
    pub fn with_config(config: HoverConfig) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared::default())),
            subscription: None,
            config,
        }
    }

    /// The configuration this tracker was created with.
    pub fn config(&self) -> HoverConfig {
        self.config
    }

    /// Subscribe to `source` for `candidates` (if not already) and return the current hover info.
    ///
    /// Returns `None` when no candidate is under the pointer, or before the first pointer move.
    pub fn hovered_paragraph_coordinate<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
        candidates: &Rc<[NodeId]>,
    ) -> Option<HoveredElementInfo> {
        let up_to_date = self
            .subscription
            .as_ref()
            .is_some_and(|s| Rc::ptr_eq(&s.candidates, candidates));
        if !up_to_date {
            self.unmount(source);
            self.subscribe(source, Rc::clone(candidates));
        }
        self.hovered()
    }

    /// Remove the listener, if any. Later pointer moves no longer affect this tracker.
    pub fn unmount<S: EventSource + ?Sized>(&mut self, source: &mut S) {
        let Some(sub) = self.subscription.take() else {
            return;
        };
        if source.remove_pointer_move_listener(sub.listener) {
            log::debug!("detached pointer-move listener {:?}", sub.listener);
        } else {
            log::warn!(
                "pointer-move listener {:?} was already gone from the event source",
                sub.listener
            );
        }
    }

    /// Returns true while a listener is attached.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// The most recently published hover info.
    pub fn hovered(&self) -> Option<HoveredElementInfo> {
        self.shared.borrow().info
    }

    /// Take the enter/leave transitions accumulated since the last call.
    ///
    /// Paths run from the page root to the hovered element, so moving between sibling
    /// paragraphs leaves one and enters the other while shared ancestors stay entered.
    pub fn drain_transitions(&mut self) -> Vec<HoverEvent<NodeId>> {
        core::mem::take(&mut self.shared.borrow_mut().transitions)
    }

    /// Number of pointer moves this tracker has handled.
    pub fn publish_count(&self) -> u64 {
        self.shared.borrow().publish_count
    }

    fn subscribe<S: EventSource + ?Sized>(&mut self, source: &mut S, candidates: Rc<[NodeId]>) {
        let weak: Weak<RefCell<Shared>> = Rc::downgrade(&self.shared);
        let list = Rc::clone(&candidates);
        let filter = self.config.filter;
        let listener = source.add_pointer_move_listener(Box::new(
            move |page: &Page, ev: &PointerMove| {
                // The tracker was dropped without unmounting.
                let Some(shared) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };
                let info = resolve_hover(page, &list, ev.page, filter);
                shared.borrow_mut().publish(page, info);
                ControlFlow::Continue(())
            },
        ));
        log::debug!(
            "attached pointer-move listener {:?} for {} candidates",
            listener,
            candidates.len()
        );
        self.subscription = Some(Subscription {
            candidates,
            listener,
        });
    }
}

impl Drop for HoverTracker {
    fn drop(&mut self) {
        if let Some(sub) = &self.subscription {
            log::warn!(
                "hover tracker dropped while listener {:?} is attached; it is released on the next pointer move",
                sub.listener
            );
        }
    }
}
