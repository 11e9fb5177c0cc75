use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use crate::status::{Insertion, Removal};
use crate::util::OptionExtension;

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Branch<T> {
    pub fn insert(&mut self, value: T) -> Insertion {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                // An equal value is absorbed without touching the stored one.
                Ordering::Equal => Insertion::Duplicate,
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: None.into(),
                    right: None.into(),
                    value,
                }));
                Insertion::Inserted
            },
        }
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.get(value),
                Ordering::Greater => node.right.get(value),
                Ordering::Equal => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn remove<Q>(&mut self, value: &Q) -> Removal
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &mut self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.remove(value),
                Ordering::Greater => node.right.remove(value),
                Ordering::Equal => {
                    self.remove_root();
                    Removal::Removed
                },
            },
            None => Removal::Missing,
        }
    }

    /// Unlinks the node at the root of this branch, reshaping the branch by the children present:
    /// no children clears the branch, a lone child is spliced into the node's place, and two
    /// children promote the successor (the smallest value of the right subtree) into the node.
    pub(crate) fn remove_root(&mut self) {
        let Some(node) = &mut self.0 else { return };
        if node.left.is_some() && node.right.is_some() {
            // UNREACHABLE: The right branch was just checked to be non-empty, so it has a
            // smallest value to take.
            node.value = unsafe { node.right.take_first().unreachable() };
        } else {
            // UNREACHABLE: Matched as Some above; retaken to gain ownership of the box.
            let mut node = unsafe { self.0.take().unreachable() };
            self.0 = node.left.0.take().or_else(|| node.right.0.take());
        }
    }

    /// Unlinks and returns the smallest value in this branch. The leftmost node can't have a left
    /// child, so its right child (if any) is spliced into its place.
    pub(crate) fn take_first(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.left.is_some() {
            node.left.take_first()
        } else {
            // UNREACHABLE: Matched as Some at the top of the function.
            let mut node = unsafe { self.0.take().unreachable() };
            self.0 = node.right.0.take();
            Some(node.value)
        }
    }

    pub fn first(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        match node.left.first() {
            Some(value) => Some(value),
            None => Some(&node.value),
        }
    }

    pub fn last(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        match node.right.last() {
            Some(value) => Some(value),
            None => Some(&node.value),
        }
    }
}

impl<T: Ord> Drop for Branch<T> {
    fn drop(&mut self) {
        // Unlink the subtree onto an explicit stack first, so dropping a list-shaped tree can't
        // recurse once per node.
        let mut stack = Vec::new();
        stack.extend(self.0.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(node) = &self.0 else {
            return write!(f, "-");
        };
        let indent = |branch: &Branch<T>, corner: &str| {
            format!("{branch:?}")
                .lines()
                .map(|line| format!("{corner}    {line}"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        write!(
            f,
            "{}\n({:?})\n{}",
            indent(&node.left, "┌"),
            node.value,
            indent(&node.right, "└")
        )
    }
}
