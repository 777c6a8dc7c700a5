//! Immutable scene snapshots.
//!
//! A [`Snapshot`] is the complete state of the scene at one point in time:
//! an ordered element list where each element's id equals its index. All
//! mutation produces a new snapshot value (copy-on-write); a snapshot
//! stored in history is never touched again.

use super::element::Element;
use crate::error::SketchError;

/// Ordered, index-addressed collection of elements.
///
/// Invariant: `snapshot.get(i).unwrap().id() == i` for every `i` below
/// `len()`. New elements are always appended at index `len()`; deletes
/// replace an element with a [`Element::Removed`] tombstone rather than
/// shifting ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    elements: Vec<Element>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of element slots (including tombstones).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true when no element has ever been added.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `id`, if the slot exists.
    pub fn get(&self, id: usize) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Iterates elements in z-order (first = bottom layer, drawn first).
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Appends a new element built from the assigned id.
    ///
    /// The id is always `self.len()`; the builder receives it so the
    /// element can carry its own id from birth. Returns the new snapshot
    /// and the assigned id. Never fails.
    pub fn append_with(&self, build: impl FnOnce(usize) -> Element) -> (Snapshot, usize) {
        let id = self.elements.len();
        let element = build(id);
        debug_assert_eq!(element.id(), id, "appended element must carry the assigned id");

        let mut elements = self.elements.clone();
        elements.push(element);
        (Snapshot { elements }, id)
    }

    /// Replaces the element occupying `element.id()`'s slot.
    ///
    /// Used for every in-place mutation: drag feedback, resize, delete
    /// (tombstone). The input snapshot is left untouched.
    ///
    /// # Errors
    /// [`SketchError::IdOutOfRange`] if the slot does not exist; this
    /// signals a caller defect, not a user-facing condition.
    pub fn replace(&self, element: Element) -> Result<Snapshot, SketchError> {
        let id = element.id();
        if id >= self.elements.len() {
            return Err(SketchError::IdOutOfRange {
                id,
                len: self.elements.len(),
            });
        }

        let mut elements = self.elements.clone();
        elements[id] = element;
        Ok(Snapshot { elements })
    }
}
