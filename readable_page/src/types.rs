// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the page tree: node identifiers, flags, and node payloads.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

/// Identifier for a node in the page.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Page::is_alive`](crate::Page::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Element is rendered (not `display: none` or `visibility: hidden`).
        const VISIBLE  = 0b0000_0001;
        /// Element receives pointer hits (not `pointer-events: none`).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Filters applied when hit-testing candidate elements.
///
/// The default applies no restriction.
/// See [`NodeFlags::VISIBLE`] and [`NodeFlags::PICKABLE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// If true, only consider elements marked [`NodeFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider elements marked [`NodeFlags::PICKABLE`].
    pub pickable_only: bool,
}

impl QueryFilter {
    /// Returns true if an element carrying `flags` passes this filter.
    pub fn accepts(self, flags: NodeFlags) -> bool {
        (!self.visible_only || flags.contains(NodeFlags::VISIBLE))
            && (!self.pickable_only || flags.contains(NodeFlags::PICKABLE))
    }
}

/// An element node.
///
/// Layout is supplied by the host: this crate never measures or arranges content.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `"P"` or `"div"`. Compared ASCII case-insensitively.
    pub tag: String,
    /// Optional `id` attribute, used to locate the content root.
    pub id: Option<String>,
    /// Border box in document space (unaffected by scrolling).
    pub layout: Rect,
    /// Visibility and picking flags.
    pub flags: NodeFlags,
}

impl Element {
    /// Create an element with the given tag, no id, and an empty layout box.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            layout: Rect::ZERO,
            flags: NodeFlags::default(),
        }
    }

    /// Set the `id` attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the document-space border box.
    pub fn with_layout(mut self, layout: Rect) -> Self {
        self.layout = layout;
        self
    }

    /// Set the flags.
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A text node together with its rendered line boxes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextRun {
    /// Raw text content.
    pub content: String,
    /// One document-space rectangle per rendered line fragment, in visual order.
    ///
    /// Empty when the text is not rendered (for example collapsed whitespace).
    pub lines: Vec<Rect>,
}

impl TextRun {
    /// Create a text run with no rendered lines.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            lines: Vec::new(),
        }
    }

    /// Set the rendered line boxes.
    pub fn with_lines(mut self, lines: impl IntoIterator<Item = Rect>) -> Self {
        self.lines = lines.into_iter().collect();
        self
    }
}

/// Payload of a page node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// An element that may own children.
    Element(Element),
    /// A leaf text node.
    Text(TextRun),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_visible_and_pickable() {
        let flags = NodeFlags::default();
        assert!(flags.contains(NodeFlags::VISIBLE));
        assert!(flags.contains(NodeFlags::PICKABLE));
    }

    #[test]
    fn query_filter_accepts() {
        let any = QueryFilter::default();
        assert!(any.accepts(NodeFlags::empty()));

        let visible = QueryFilter {
            visible_only: true,
            pickable_only: false,
        };
        assert!(visible.accepts(NodeFlags::VISIBLE));
        assert!(!visible.accepts(NodeFlags::PICKABLE));

        let both = QueryFilter {
            visible_only: true,
            pickable_only: true,
        };
        assert!(both.accepts(NodeFlags::default()));
        assert!(!both.accepts(NodeFlags::VISIBLE));
    }
}
