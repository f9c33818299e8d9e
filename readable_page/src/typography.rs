// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-line measurement over rendered text line boxes.
//!
//! The hover player is sized to the first line of a paragraph, not the whole block.
//! Measurement reads line boxes the host already laid out and never mutates the page.

use kurbo::Rect;

use crate::page::{Descendants, Page};
use crate::types::NodeId;

/// A read-only range selecting the contents of a node, like DOM `Range::selectNodeContents`.
#[derive(Clone, Copy, Debug)]
pub struct TextRange<'a> {
    page: &'a Page,
    container: NodeId,
}

impl<'a> TextRange<'a> {
    /// Select every text node under `container`.
    pub fn select_node_contents(page: &'a Page, container: NodeId) -> Self {
        Self { page, container }
    }

    /// The node whose contents are selected.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Viewport-relative line boxes of the selected text, in document order.
    pub fn client_rects(&self) -> ClientRects<'a> {
        ClientRects {
            page: self.page,
            nodes: self.page.descendants(self.container),
            lines: core::slice::Iter::default(),
        }
    }
}

/// Iterator returned by [`TextRange::client_rects`].
#[derive(Debug)]
pub struct ClientRects<'a> {
    page: &'a Page,
    nodes: Descendants<'a>,
    lines: core::slice::Iter<'a, Rect>,
}

impl Iterator for ClientRects<'_> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        loop {
            if let Some(line) = self.lines.next() {
                return Some(*line - self.page.scroll_offset());
            }
            let id = self.nodes.next()?;
            if let Some(text) = self.page.text(id) {
                self.lines = text.lines.iter();
            }
        }
    }
}

/// Height of the first rendered line of text inside `id`.
///
/// Wrapped paragraphs report only line one. Returns `0.0` when the element has no
/// rendered text (or `id` is stale).
pub fn line_height_of_first_line(page: &Page, id: NodeId) -> f64 {
    TextRange::select_node_contents(page, id)
        .client_rects()
        .next()
        .map_or(0.0, |r| r.height())
}
