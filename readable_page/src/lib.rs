// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Readable Page: a Kurbo-native page tree for finding and measuring readable text blocks.
//!
//! A hover player needs three things from the page under it:
//!
//! - which elements count as readable paragraphs ([`readable`]),
//! - where an element sits in page-absolute coordinates, and whether a point is over it ([`geometry`]),
//! - how tall the first rendered line of an element is ([`typography`]).
//!
//! ## Not a layout engine
//!
//! [`Page`] holds element and text nodes with document-space boxes, text line boxes, and the
//! viewport scroll offset. Upstream code computes layout and keeps the page in sync; this crate
//! only queries it. Client (viewport-relative) rectangles are derived from the stored boxes and
//! the scroll offset, so scrolling never requires touching nodes.
//!
//! ## API overview
//!
//! - [`Page`]: the node forest, with [`Page::insert_element`], [`Page::insert_text`],
//!   [`Page::remove`], [`Page::text_content`], and [`Page::bounding_client_rect`].
//! - [`Element`], [`TextRun`]: node payloads. [`NodeFlags`] carries visibility and picking bits.
//! - [`NodeId`]: generational handle of a node.
//! - [`top_level_readable_elements`] / [`readable_elements_under`] with [`ReadableConfig`].
//! - [`element_bounds`] / [`is_point_inside_element`] returning [`ElementBounds`].
//! - [`line_height_of_first_line`] over a [`TextRange`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use readable_page::{
//!     Element, Page, ReadableConfig, TextRun, element_bounds, is_point_inside_element,
//!     line_height_of_first_line, top_level_readable_elements,
//! };
//!
//! let mut page = Page::new();
//! let root = page
//!     .insert_element(None, Element::new("DIV").with_id("content-1"))
//!     .unwrap();
//! let wrapper = page.insert_element(Some(root), Element::new("DIV")).unwrap();
//! let quote = page
//!     .insert_element(
//!         Some(wrapper),
//!         Element::new("BLOCKQUOTE").with_layout(Rect::new(0.0, 100.0, 300.0, 160.0)),
//!     )
//!     .unwrap();
//! page.insert_text(
//!     quote,
//!     TextRun::new("Hello").with_lines([Rect::new(0.0, 100.0, 60.0, 120.0)]),
//! )
//! .unwrap();
//!
//! // Both wrappers have a single element child, so only the blockquote is readable.
//! let readable = top_level_readable_elements(&page, &ReadableConfig::default()).unwrap();
//! assert_eq!(readable, vec![quote]);
//!
//! // Bounds stay page-absolute while scrolling.
//! page.scroll_by(Vec2::new(0.0, 80.0));
//! assert_eq!(element_bounds(&page, quote).unwrap().top, 100.0);
//! assert!(is_point_inside_element(&page, Point::new(300.0, 160.0), quote));
//! assert_eq!(line_height_of_first_line(&page, quote), 20.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod page;
pub mod readable;
pub mod types;
pub mod typography;

pub use error::PageError;
pub use geometry::{ElementBounds, element_bounds, is_point_inside_element};
pub use page::{Descendants, Page};
pub use readable::{
    DEFAULT_CONTENT_ROOT_ID, DEFAULT_IGNORED_TAGS, ReadableConfig, is_single_child_wrapper,
    readable_elements_under, top_level_readable_elements,
};
pub use types::{Element, NodeFlags, NodeId, NodeKind, QueryFilter, TextRun};
pub use typography::{ClientRects, TextRange, line_height_of_first_line};
