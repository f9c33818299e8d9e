// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/leave transitions between successive hovered paths.
//!
//! The [tracker](crate::tracker::HoverTracker) publishes *where* the player goes. UIs also
//! need to know *when* to show, move, or hide it. Feeding the root→element path of each
//! hovered element into [`HoverState::update_path`] yields the minimal set of transitions.
//!
//! ```
//! use readable_hover::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update_path(&[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update_path(&[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! assert_eq!(h.clear(), vec![HoverEvent::Leave(3), HoverEvent::Leave(1)]);
//! ```

use alloc::vec::Vec;

/// Hover transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer entered the node (emitted outer→inner).
    Enter(K),
    /// Pointer left the node (emitted inner→outer).
    Leave(K),
}

/// Tracks the current root→target path and diffs it against new paths.
///
/// Leaves come first, inner-most to outer-most, then enters, outer-most to inner-most.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

impl<K: Copy + Eq> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The current root→target path; empty when nothing is hovered.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// The innermost hovered node, if any.
    pub fn target(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Forget the current path, returning leaves from inner-most to outer-most.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self.current.iter().rev().map(|&k| HoverEvent::Leave(k)).collect();
        self.current.clear();
        out
    }

    /// Replace the current path with `new_path` and return the transitions between them.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<HoverEvent<K>> {
        // Length of the shared ancestry.
        let common = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<_> = self.current[common..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .collect();
        out.extend(new_path[common..].iter().map(|&k| HoverEvent::Enter(k)));

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn enter_on_fresh_path() {
        let mut h: HoverState<u32> = HoverState::new();
        assert_eq!(
            h.update_path(&[1, 2, 3]),
            vec![
                HoverEvent::Enter(1),
                HoverEvent::Enter(2),
                HoverEvent::Enter(3)
            ]
        );
        assert_eq!(h.target(), Some(3));
    }

    // Sibling paragraphs share the section: only the paragraph changes.
    #[test]
    fn sibling_change_keeps_shared_ancestors() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update_path(&[1, 2, 3]);
        assert_eq!(
            h.update_path(&[1, 2, 4]),
            vec![HoverEvent::Leave(3), HoverEvent::Enter(4)]
        );
        assert_eq!(h.current_path(), &[1, 2, 4]);
    }

    // Nested readable elements: moving from the outer block into a nested one only enters.
    #[test]
    fn moving_inward_only_enters() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update_path(&[1, 2]);
        assert_eq!(h.update_path(&[1, 2, 5]), vec![HoverEvent::Enter(5)]);
    }

    #[test]
    fn disjoint_paths_leave_everything() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update_path(&[1, 2]);
        assert_eq!(
            h.update_path(&[7]),
            vec![
                HoverEvent::Leave(2),
                HoverEvent::Leave(1),
                HoverEvent::Enter(7)
            ]
        );
    }

    #[test]
    fn same_path_is_silent_and_empty_clears() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update_path(&[7, 8]);
        assert!(h.update_path(&[7, 8]).is_empty());
        assert_eq!(
            h.update_path(&[]),
            vec![HoverEvent::Leave(8), HoverEvent::Leave(7)]
        );
        assert!(h.current_path().is_empty());
        assert_eq!(h.target(), None);
    }
}
