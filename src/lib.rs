//! Classic pointer-based containers, written from scratch.
//!
//! # Purpose
//! This crate implements three of the foundational linked data structures — an unbalanced binary
//! search tree, a hash table with separate chaining and a doubly linked list — the way they're
//! drawn on whiteboards: nodes on the heap, connected by links. Each container is a standalone
//! type with no dependency on the others, so the crate can be trimmed to a single family via
//! cargo features.
//!
//! # Method
//! None of the containers try to be clever. The tree doesn't rebalance (insert sorted input and
//! it degrades to a list, as expected), the hash table never grows past the bucket count it was
//! built with, and the list is exactly a chain of nodes with links in both directions. The
//! interesting parts are the link surgery: BST deletion with successor promotion, chain splicing
//! in collision buckets, and head/tail maintenance when unlinking list nodes.
//!
//! # Error Handling
//! Nothing here raises a fatal error in normal use. Lookups and removals report their outcome
//! through the small status types in [`status`] ([`Lookup`](status::Lookup),
//! [`Insertion`](status::Insertion), [`Removal`](status::Removal)) rather than panicking, so a
//! missing value or an empty container is always an ordinary return path. The one `Result` in the
//! crate is for requesting an ordered traversal of an empty tree, which has no sequence to give
//! back.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;

pub mod status;

pub(crate) mod util;

#[cfg(feature = "tree")]
#[doc(inline)]
pub use binary_tree::BinaryTreeSet;
#[cfg(feature = "hash")]
#[doc(inline)]
pub use hash::ChainedHashMap;
#[cfg(feature = "linked")]
#[doc(inline)]
pub use linked::DoublyLinkedList;
