// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by structural page operations.

use alloc::string::String;

use crate::types::NodeId;

/// Failure of a page mutation or a content-root lookup.
///
/// Queries never fail: they return `None`, `false`, or `0.0` for stale ids.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The identifier does not refer to a live node.
    #[error("node {0:?} is not alive")]
    DanglingNode(NodeId),
    /// Text nodes cannot own children.
    #[error("node {0:?} is a text node and cannot have children")]
    TextNodeParent(NodeId),
    /// No element carries the configured content-root id.
    #[error("no element with id `{0}` on the page")]
    ContentRootNotFound(String),
}

/// Convenience alias for page results.
pub type Result<T, E = PageError> = core::result::Result<T, E>;
