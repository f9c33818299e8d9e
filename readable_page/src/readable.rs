// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Readable-element extraction.
//!
//! ## Inclusion rule
//!
//! Starting at the content root (inclusive), nodes are visited depth-first in pre-order.
//! An element qualifies when all of the following hold:
//!
//! - its trimmed text content is non-empty;
//! - its tag is not in [`ReadableConfig::ignored_tags`];
//! - it does not have exactly one element child. Such a node is a wrapper and the
//!   walk descends into it instead. Text children are not counted.
//!
//! A match does not prune the walk: descendants are evaluated independently, so nested
//! qualifying elements appear after their ancestor.
//!
//! The scan is a snapshot. Call it again after structural changes.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::{PageError, Result};
use crate::page::Page;
use crate::types::NodeId;

/// Tags that are never treated as paragraph containers: headings, controls, inline
/// spans, images, preformatted text and scripts.
pub const DEFAULT_IGNORED_TAGS: &[&str] = &[
    "H1", "H2", "H3", "H4", "H5", "H6", "BUTTON", "LABEL", "SPAN", "IMG", "PRE", "SCRIPT",
];

/// Id of the element the page integration scans by default.
pub const DEFAULT_CONTENT_ROOT_ID: &str = "content-1";

/// Extraction settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadableConfig {
    /// `id` attribute of the element to start scanning from.
    pub content_root_id: String,
    /// Tags excluded from the result, compared ASCII case-insensitively.
    pub ignored_tags: Vec<String>,
}

impl Default for ReadableConfig {
    fn default() -> Self {
        Self {
            content_root_id: DEFAULT_CONTENT_ROOT_ID.to_string(),
            ignored_tags: DEFAULT_IGNORED_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ReadableConfig {
    /// Returns true if `tag` is in the ignore set.
    pub fn is_ignored(&self, tag: &str) -> bool {
        self.ignored_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Returns true if the element `id` is itself a readable unit.
    ///
    /// Text nodes and stale ids never qualify.
    pub fn qualifies(&self, page: &Page, id: NodeId) -> bool {
        let Some(tag) = page.tag_name(id) else {
            return false;
        };
        !self.is_ignored(tag) && !is_single_child_wrapper(page, id) && page.has_visible_text(id)
    }
}

/// Returns true if `id` has exactly one element child.
pub fn is_single_child_wrapper(page: &Page, id: NodeId) -> bool {
    let mut children = page.element_children(id);
    children.next().is_some() && children.next().is_none()
}

/// Collect readable elements under `root` (inclusive) in document pre-order.
pub fn readable_elements_under(page: &Page, root: NodeId, config: &ReadableConfig) -> Vec<NodeId> {
    let mut out = Vec::new();
    // Element children only; text nodes are leaves and never qualify.
    let mut stack = Vec::new();
    if page.element(root).is_some() {
        stack.push(root);
    }
    while let Some(id) = stack.pop() {
        if config.qualifies(page, id) {
            out.push(id);
        }
        let first = stack.len();
        stack.extend(page.element_children(id));
        stack[first..].reverse();
    }
    out
}

/// Collect the top-level readable elements of the page.
///
/// Resolves [`ReadableConfig::content_root_id`] and scans from there.
pub fn top_level_readable_elements(page: &Page, config: &ReadableConfig) -> Result<Vec<NodeId>> {
    let root = page
        .element_by_id(&config.content_root_id)
        .ok_or_else(|| PageError::ContentRootNotFound(config.content_root_id.clone()))?;
    let found = readable_elements_under(page, root, config);
    log::debug!(
        "found {} readable elements under #{}",
        found.len(),
        config.content_root_id
    );
    Ok(found)
}
