//! Label equivalence bookkeeping
//!
//! When the scanning pass meets two different labels on the same
//! shape, it records the larger one as a child of the smaller. Parent
//! links therefore always point at strictly smaller labels, which
//! keeps the structure acyclic and bounds every chain by the label
//! value itself. No path compression is performed; chains are short in
//! practice and the resolving pass walks each one once per pixel.

use crate::grid::Label;

/// Union-find over labels, stored as a flat parent table.
///
/// Labels are allocated densely starting at 1 (index 0 is the reserved
/// border label), so the table is a `Vec` indexed by label. An entry
/// of 0 means the label is a root.
#[derive(Debug, Clone)]
pub(crate) struct EquivalenceSet {
    parent: Vec<Label>,
}

impl EquivalenceSet {
    pub(crate) fn new() -> Self {
        // Slot 0 is the reserved border label and never resolves.
        Self { parent: vec![0] }
    }

    /// Allocate the next fresh label.
    pub(crate) fn allocate(&mut self) -> Label {
        self.parent.push(0);
        (self.parent.len() - 1) as Label
    }

    /// Record that `a` and `b` name the same shape.
    ///
    /// The larger label becomes a child of the smaller. If the larger
    /// label already has a parent the merge is skipped; the existing
    /// parent is united with the smaller label transitively when roots
    /// are resolved. Returns whether a link was recorded.
    pub(crate) fn merge(&mut self, a: Label, b: Label) -> bool {
        debug_assert_ne!(a, b);
        let (smaller, larger) = if a < b { (a, b) } else { (b, a) };

        if self.parent[larger as usize] != 0 {
            return false;
        }
        self.parent[larger as usize] = smaller;
        true
    }

    /// Walk the parent chain to the root. Roots resolve to themselves.
    pub(crate) fn resolve(&self, label: Label) -> Label {
        let mut root = label;
        loop {
            let parent = self.parent[root as usize];
            if parent == 0 {
                return root;
            }
            root = parent;
        }
    }
}
