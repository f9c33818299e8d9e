// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core page implementation: structure, updates, queries.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Rect, Vec2};

use crate::error::{PageError, Result};
use crate::types::{Element, NodeFlags, NodeId, NodeKind, TextRun};

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// A page: a forest of element and text nodes plus the current scroll offset.
///
/// Upstream code owns layout. It inserts nodes with their document-space boxes and
/// updates them with [`Page::set_layout`] and [`Page::set_text_lines`] whenever
/// layout changes. Scrolling only moves the viewport, so client rectangles are
/// derived from the stored boxes and [`Page::scroll_offset`].
pub struct Page {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    scroll: Vec2,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Page")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

impl Node {
    fn new(generation: u32, kind: NodeKind) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            kind,
        }
    }
}

impl Page {
    /// Create an empty page scrolled to the origin.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            scroll: Vec2::ZERO,
        }
    }

    /// Insert an element as the last child of `parent` (or as a root if `None`).
    pub fn insert_element(&mut self, parent: Option<NodeId>, element: Element) -> Result<NodeId> {
        self.insert(parent, NodeKind::Element(element))
    }

    /// Insert a text node as the last child of `parent`.
    pub fn insert_text(&mut self, parent: NodeId, text: TextRun) -> Result<NodeId> {
        self.insert(Some(parent), NodeKind::Text(text))
    }

    fn insert(&mut self, parent: Option<NodeId>, kind: NodeKind) -> Result<NodeId> {
        if let Some(p) = parent {
            match self.node_opt(p) {
                None => return Err(PageError::DanglingNode(p)),
                Some(Node {
                    kind: NodeKind::Text(_),
                    ..
                }) => return Err(PageError::TextNodeParent(p)),
                Some(_) => {}
            }
        }
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, kind));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, kind)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            if let Some(parent_node) = self.node_opt_mut(p) {
                parent_node.children.push(id);
            }
            if let Some(node) = self.node_opt_mut(id) {
                node.parent = Some(p);
            }
        }
        Ok(id)
    }

    /// Remove a node and its subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        let parent = self.node_opt(id).ok_or(PageError::DanglingNode(id))?.parent;
        if let Some(p) = parent
            && let Some(parent_node) = self.node_opt_mut(p)
        {
            parent_node.children.retain(|c| *c != id);
        }
        self.free_subtree(id);
        Ok(())
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = Vec::new();
        stack.push(id);
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id.idx()).and_then(Option::take) else {
                continue;
            };
            self.free_list.push(id.idx());
            stack.extend(node.children);
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Returns the parent of a live node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Returns all children (elements and text) of a live node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Iterate the element children of a node, skipping text nodes.
    ///
    /// This mirrors DOM `ParentNode.children`.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.element(c).is_some())
    }

    /// Returns the payload of a live node.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node_opt(id).map(|n| &n.kind)
    }

    /// Returns the element payload if `id` is a live element.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.kind(id)? {
            NodeKind::Element(e) => Some(e),
            NodeKind::Text(_) => None,
        }
    }

    /// Returns the text payload if `id` is a live text node.
    pub fn text(&self, id: NodeId) -> Option<&TextRun> {
        match self.kind(id)? {
            NodeKind::Text(t) => Some(t),
            NodeKind::Element(_) => None,
        }
    }

    /// Returns the tag name of a live element.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// Concatenate the text of every descendant text node in document order.
    ///
    /// Matches DOM `textContent`: a text node returns its own content and
    /// stale ids yield an empty string.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for n in self.descendants(id) {
            if let Some(t) = self.text(n) {
                out.push_str(&t.content);
            }
        }
        out
    }

    /// Returns true if the subtree under `id` contains any non-whitespace text.
    ///
    /// Equivalent to `!text_content(id).trim().is_empty()` without allocating.
    pub fn has_visible_text(&self, id: NodeId) -> bool {
        self.descendants(id)
            .filter_map(|n| self.text(n))
            .any(|t| !t.content.trim().is_empty())
    }

    /// Iterate `id` and its descendants in depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.is_alive(id) {
            stack.push(id);
        }
        Descendants { page: self, stack }
    }

    /// Iterate root nodes (nodes without a parent) in slot order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(n) if n.parent.is_none() =>
            {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                Some(NodeId::new(i as u32, n.generation))
            }
            _ => None,
        })
    }

    /// Find the first element, in pre-order across roots, whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.roots()
            .flat_map(|root| self.descendants(root))
            .find(|&n| self.element(n).and_then(|e| e.id.as_deref()) == Some(id))
    }

    /// Path from the root to `id` (inclusive). Empty for stale ids.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cur = Some(id).filter(|&n| self.is_alive(n));
        while let Some(n) = cur {
            out.push(n);
            cur = self.parent(n);
        }
        out.reverse();
        out
    }

    /// Update the document-space border box of an element.
    pub fn set_layout(&mut self, id: NodeId, layout: Rect) -> Result<()> {
        match self.node_opt_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Element(e)) => {
                e.layout = layout;
                Ok(())
            }
            _ => Err(PageError::DanglingNode(id)),
        }
    }

    /// Replace the rendered line boxes of a text node.
    pub fn set_text_lines(&mut self, id: NodeId, lines: Vec<Rect>) -> Result<()> {
        match self.node_opt_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Text(t)) => {
                t.lines = lines;
                Ok(())
            }
            _ => Err(PageError::DanglingNode(id)),
        }
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) -> Result<()> {
        match self.node_opt_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Element(e)) => {
                e.flags = flags;
                Ok(())
            }
            _ => Err(PageError::DanglingNode(id)),
        }
    }

    /// Current scroll offset of the viewport within the document.
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    /// Scroll the viewport to `offset`.
    pub fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll = offset;
    }

    /// Scroll the viewport by `delta`.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.scroll += delta;
    }

    /// Viewport-relative border box of an element, like `getBoundingClientRect`.
    pub fn bounding_client_rect(&self, id: NodeId) -> Option<Rect> {
        self.element(id).map(|e| e.layout - self.scroll)
    }

    // --- internals ---

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}

/// Depth-first pre-order iterator returned by [`Page::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    page: &'a Page,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.page.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn small_page() -> (Page, NodeId, NodeId, NodeId) {
        let mut page = Page::new();
        let body = page
            .insert_element(None, Element::new("BODY").with_id("content-1"))
            .unwrap();
        let p = page.insert_element(Some(body), Element::new("P")).unwrap();
        page.insert_text(p, TextRun::new("Hello ")).unwrap();
        let em = page.insert_element(Some(p), Element::new("EM")).unwrap();
        page.insert_text(em, TextRun::new("world")).unwrap();
        (page, body, p, em)
    }

    #[test]
    fn text_content_concatenates_in_document_order() {
        let (page, body, p, em) = small_page();
        assert_eq!(page.text_content(body), "Hello world");
        assert_eq!(page.text_content(p), "Hello world");
        assert_eq!(page.text_content(em), "world");
    }

    #[test]
    fn element_children_skip_text() {
        let (page, _, p, em) = small_page();
        assert_eq!(page.children(p).len(), 2);
        assert_eq!(page.element_children(p).collect::<Vec<_>>(), vec![em]);
    }

    #[test]
    fn descendants_are_pre_order() {
        let mut page = Page::new();
        let r = page.insert_element(None, Element::new("DIV")).unwrap();
        let a = page.insert_element(Some(r), Element::new("DIV")).unwrap();
        let a1 = page.insert_element(Some(a), Element::new("P")).unwrap();
        let b = page.insert_element(Some(r), Element::new("P")).unwrap();
        assert_eq!(page.descendants(r).collect::<Vec<_>>(), vec![r, a, a1, b]);
    }

    #[test]
    fn text_nodes_cannot_have_children() {
        let mut page = Page::new();
        let p = page.insert_element(None, Element::new("P")).unwrap();
        let t = page.insert_text(p, TextRun::new("x")).unwrap();
        assert_eq!(
            page.insert_element(Some(t), Element::new("B")),
            Err(PageError::TextNodeParent(t))
        );
    }

    #[test]
    fn remove_frees_subtree_and_bumps_generation() {
        let (mut page, body, p, em) = small_page();
        page.remove(p).unwrap();
        assert!(!page.is_alive(p));
        assert!(!page.is_alive(em));
        assert!(page.children(body).is_empty());
        assert_eq!(page.remove(p), Err(PageError::DanglingNode(p)));

        // Reused slot produces a distinct id.
        let fresh = page.insert_element(Some(body), Element::new("P")).unwrap();
        assert_ne!(fresh, p);
        assert_ne!(fresh, em);
        assert_eq!(
            page.insert_element(Some(p), Element::new("B")),
            Err(PageError::DanglingNode(p))
        );
    }

    #[test]
    fn removing_a_deep_chain_frees_every_node() {
        let mut page = Page::new();
        let root = page.insert_element(None, Element::new("DIV")).unwrap();
        let mut leaf = root;
        for _ in 0..200_000 {
            leaf = page.insert_element(Some(leaf), Element::new("DIV")).unwrap();
        }
        page.remove(root).unwrap();
        assert!(!page.is_alive(root));
        assert!(!page.is_alive(leaf));
        assert_eq!(page.roots().count(), 0);
        assert_eq!(page.free_list.len(), 200_001);
    }

    #[test]
    fn element_by_id_and_path() {
        let (page, body, _, em) = small_page();
        assert_eq!(page.element_by_id("content-1"), Some(body));
        assert_eq!(page.element_by_id("missing"), None);
        assert_eq!(page.path_to_root(em).first().copied(), Some(body));
        assert_eq!(page.path_to_root(em).last().copied(), Some(em));
    }

    #[test]
    fn client_rect_follows_scroll() {
        let mut page = Page::new();
        let p = page
            .insert_element(
                None,
                Element::new("P").with_layout(Rect::new(10.0, 500.0, 110.0, 520.0)),
            )
            .unwrap();
        assert_eq!(
            page.bounding_client_rect(p),
            Some(Rect::new(10.0, 500.0, 110.0, 520.0))
        );
        page.scroll_by(Vec2::new(0.0, 400.0));
        assert_eq!(
            page.bounding_client_rect(p),
            Some(Rect::new(10.0, 100.0, 110.0, 120.0))
        );
    }
}
