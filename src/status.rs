//! Outcome types shared by the containers in this crate.
//!
//! All three containers report the result of a lookup, insertion or removal as a value instead of
//! printing or panicking. The types here are deliberately tiny: callers match on them (or use the
//! generated `is_*` methods) and decide for themselves how to render the outcome.

use derive_more::{Display, Error, IsVariant};

/// The result of a membership or key lookup.
///
/// An empty container is reported as [`Empty`](Lookup::Empty) rather than
/// [`Missing`](Lookup::Missing), so a caller can tell "nothing is stored at all" apart from "other
/// values are stored, but not this one".
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Lookup<T> {
    /// The requested value is present; carries a reference to (or copy of) it.
    Found(T),
    /// The container has elements, but none matched the request.
    Missing,
    /// The container has no elements at all.
    Empty,
}

impl<T> Lookup<T> {
    /// Converts the lookup into an [`Option`], discarding the distinction between
    /// [`Missing`](Lookup::Missing) and [`Empty`](Lookup::Empty).
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing | Lookup::Empty => None,
        }
    }
}

/// The result of inserting a value into a container that rejects duplicates.
///
/// A duplicate is absorbed silently: the stored value is left untouched and no error is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Insertion {
    /// The value was not present before and has been added.
    Inserted,
    /// An equal value was already present; the container is unchanged.
    Duplicate,
}

/// The result of removing a value from a container.
///
/// A missing target is an ordinary outcome, never an error, and leaves the container untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Removal {
    /// The value was present and has been unlinked.
    Removed,
    /// The value was not present; the container is unchanged.
    Missing,
}

/// Error returned when an ordered traversal is requested from a container with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to traverse a container with no elements!")]
pub struct EmptyContainer;
