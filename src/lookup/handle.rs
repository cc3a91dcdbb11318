use petgraph::graph::EdgeIndex;
use petgraph::graph::IndexType;
use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// An opaque identity key.
///
/// Handles are compared by identity: two handles are equal iff they name the
/// same entity instance (same arena slot, same integer id). They are never
/// compared by the content of the entity they name.
///
/// # Requirements
///
/// - Fixed-width and cheaply copyable
/// - Hashable for use as a table key
pub trait Handle: Copy + Eq + Hash + Debug {}

impl Handle for usize {}
impl Handle for u32 {}
impl Handle for u64 {}
impl Handle for i32 {}
impl<Ix: IndexType> Handle for NodeIndex<Ix> {}
impl<Ix: IndexType> Handle for EdgeIndex<Ix> {}
impl<T> Handle for Id<T> {}

/// Typed arena index.
///
/// The marker keeps ids of different entity kinds from being mixed up
/// without costing anything at runtime.
pub struct Id<T> {
    index: usize,
    marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            marker: PhantomData,
        }
    }
    pub fn index(&self) -> usize {
        self.index
    }
    /// Reinterpret as the id of another entity kind, keeping the slot.
    pub fn cast<U>(self) -> Id<U> {
        Id::new(self.index)
    }
}

impl<T> From<usize> for Id<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

// manual impls so that T carries no bounds
impl<T> Copy for Id<T> {}
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for Id<T> {}
impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for Id<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.index.hash(state);
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Id").field(&self.index).finish()
    }
}
impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index)
    }
}
