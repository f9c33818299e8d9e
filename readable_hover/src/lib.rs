// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Readable Hover: track which readable paragraph is under the pointer.
//!
//! ## Overview
//!
//! This crate answers one question for a floating "hover player": where should it be drawn
//! right now? It listens to global pointer moves, hit-tests an ordered list of candidate
//! elements (usually from [`readable_page::top_level_readable_elements`]), and publishes the
//! first hit's page-absolute position and first-line height.
//!
//! ## Capabilities, not globals
//!
//! Listeners are attached through an [`EventSource`](crate::types::EventSource) passed in by the
//! caller. [`Window`](crate::window::Window) is an in-memory implementation that owns a page and
//! dispatches events synchronously; embedders implement the trait over their platform window.
//!
//! ## Workflow
//!
//! 1) Scan the page for candidates and keep them in an `Rc<[NodeId]>`.
//! 2) Each render, call [`HoverTracker::hovered_paragraph_coordinate`](crate::tracker::HoverTracker::hovered_paragraph_coordinate)
//!    with the event source and candidates; it subscribes once per candidate list.
//! 3) Position the player from the returned [`HoveredElementInfo`](crate::types::HoveredElementInfo),
//!    and use [`HoverTracker::drain_transitions`](crate::tracker::HoverTracker::drain_transitions)
//!    to show or hide it.
//! 4) Call [`HoverTracker::unmount`](crate::tracker::HoverTracker::unmount) on teardown.
//!
//! ```
//! use std::rc::Rc;
//! use kurbo::{Point, Rect};
//! use readable_hover::tracker::HoverTracker;
//! use readable_hover::window::Window;
//! use readable_page::{Element, NodeId, Page, ReadableConfig, TextRun, top_level_readable_elements};
//!
//! let mut page = Page::new();
//! let root = page
//!     .insert_element(None, Element::new("DIV").with_id("content-1"))
//!     .unwrap();
//! let mut paragraphs = Vec::new();
//! for (i, text) in ["A text", "B text"].into_iter().enumerate() {
//!     let y = 100.0 * i as f64;
//!     let p = page
//!         .insert_element(
//!             Some(root),
//!             Element::new("P").with_layout(Rect::new(0.0, y, 400.0, y + 48.0)),
//!         )
//!         .unwrap();
//!     page.insert_text(
//!         p,
//!         TextRun::new(text).with_lines([Rect::new(0.0, y, 80.0, y + 24.0)]),
//!     )
//!     .unwrap();
//!     paragraphs.push(p);
//! }
//!
//! let mut readable = top_level_readable_elements(&page, &ReadableConfig::default()).unwrap();
//! readable.retain(|&id| id != root);
//! let candidates: Rc<[NodeId]> = readable.into();
//!
//! let mut window = Window::new(page);
//! let mut tracker = HoverTracker::new();
//! assert!(tracker.hovered_paragraph_coordinate(&mut window, &candidates).is_none());
//!
//! window.pointer_move_page(Point::new(10.0, 110.0));
//! let info = tracker.hovered_paragraph_coordinate(&mut window, &candidates).unwrap();
//! assert_eq!(info.element, paragraphs[1]);
//! assert_eq!((info.top, info.left, info.height_of_first_line), (100.0, 0.0, 24.0));
//!
//! tracker.unmount(&mut window);
//! assert_eq!(window.listener_count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod hover;
pub mod tracker;
pub mod types;
pub mod window;
