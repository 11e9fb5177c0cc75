use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::util::OptionExtension;

/// A bucket's singly linked chain of entries, possibly empty. Keys within one chain are unique.
pub(crate) struct Chain<K: Eq, V>(pub Option<Box<Entry<K, V>>>);

pub(crate) struct Entry<K: Eq, V> {
    pub key: K,
    pub value: V,
    pub next: Chain<K, V>,
}

impl<K: Eq, V> Chain<K, V> {
    /// Walks the chain: an entry with an equal key has its value replaced in place (the replaced
    /// value is returned), otherwise a new entry is linked at the tail.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match &mut self.0 {
            Some(entry) => {
                if entry.key == key {
                    Some(mem::replace(&mut entry.value, value))
                } else {
                    entry.next.insert(key, value)
                }
            },
            None => {
                self.0 = Some(Box::new(Entry {
                    key,
                    value,
                    next: Chain(None),
                }));
                None
            },
        }
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match &self.0 {
            Some(entry) => {
                if entry.key.borrow() == key {
                    Some((&entry.key, &entry.value))
                } else {
                    entry.next.get_entry(key)
                }
            },
            None => None,
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match &mut self.0 {
            Some(entry) => {
                if entry.key.borrow() == key {
                    Some(&mut entry.value)
                } else {
                    entry.next.get_mut(key)
                }
            },
            None => None,
        }
    }

    /// Unlinks the entry with an equal key and reconnects the chain around it: the entry's
    /// successor takes its place whether the entry was the chain head or an interior link.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match &mut self.0 {
            Some(entry) => {
                if entry.key.borrow() == key {
                    // UNREACHABLE: Matched as Some above; retaken to gain ownership of the box.
                    let mut entry = unsafe { mem::take(&mut self.0).unreachable() };
                    self.0 = entry.next.0.take();
                    Some((entry.key, entry.value))
                } else {
                    entry.next.remove_entry(key)
                }
            },
            None => None,
        }
    }
}

impl<K: Eq, V> Drop for Chain<K, V> {
    fn drop(&mut self) {
        // Walk the chain iteratively so a long chain can't recurse once per entry while dropping.
        let mut next = self.0.take();
        while let Some(mut entry) = next {
            next = entry.next.0.take();
        }
    }
}

impl<K: Eq, V> Deref for Chain<K, V> {
    type Target = Option<Box<Entry<K, V>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Eq, V> DerefMut for Chain<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Eq + Debug, V: Debug> Debug for Chain<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(entry) => write!(f, "({:?}: {:?}) -> {:?}", entry.key, entry.value, entry.next),
            None => write!(f, "-"),
        }
    }
}
