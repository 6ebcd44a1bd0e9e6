//! `PersistentGroup`: an immutable set whose updates share storage.
//!
//! # Layout
//!
//! Elements live in a singly linked chain of reference-counted links with the
//! **newest** element at the head:
//!
//! ```text
//! group after add(a), add(b), add(c):
//!
//!   head ─► [c] ─► [b] ─► [a] ─► ∅
//! ```
//!
//! - `add(x)` allocates one link pointing at the existing head, so the new
//!   group shares every link of the old one.
//! - `delete(x)` re-links only the elements newer than `x`; every link older
//!   than `x` is shared with the original group.
//!
//! Both leave the receiver untouched.  Membership is a linear equality scan,
//! so all operations are O(n) in the group size.

use std::fmt;
use std::rc::Rc;

pub(crate) struct Link<T> {
    pub(crate) value: T,
    pub(crate) older: Option<Rc<Link<T>>>,
}

/// Persistent set of unique elements, iterated in insertion order.
pub struct PersistentGroup<T> {
    pub(crate) head: Option<Rc<Link<T>>>,
    pub(crate) len:  usize,
}

impl<T> PersistentGroup<T> {
    /// The canonical zero-element group.
    pub fn empty() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Elements in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut newest_first = Vec::with_capacity(self.len);
        let mut cur = self.head.as_deref();
        while let Some(link) = cur {
            newest_first.push(&link.value);
            cur = link.older.as_deref();
        }
        newest_first.into_iter().rev()
    }
}

impl<T: PartialEq> PersistentGroup<T> {
    /// `true` if an element equal to `element` is in the group.
    pub fn has(&self, element: &T) -> bool {
        let mut cur = self.head.as_deref();
        while let Some(link) = cur {
            if link.value == *element {
                return true;
            }
            cur = link.older.as_deref();
        }
        false
    }

    /// Return a group that also contains `element`.
    ///
    /// If the element is already present the result is `self` (sharing all
    /// storage); otherwise it is appended after the existing elements.
    pub fn add(&self, element: T) -> Self {
        if self.has(&element) {
            return self.clone();
        }
        Self {
            head: Some(Rc::new(Link { value: element, older: self.head.clone() })),
            len:  self.len + 1,
        }
    }
}

impl<T: PartialEq + Clone> PersistentGroup<T> {
    /// Return a group without `element`, preserving the order of the rest.
    ///
    /// If the element is absent the result is `self`.
    pub fn delete(&self, element: &T) -> Self {
        let mut newer: Vec<&T> = Vec::new();
        let mut cur = self.head.as_deref();
        while let Some(link) = cur {
            if link.value == *element {
                // Rebuild the newer links on top of the shared older tail.
                let mut head = link.older.clone();
                for value in newer.into_iter().rev() {
                    head = Some(Rc::new(Link { value: value.clone(), older: head }));
                }
                return Self { head, len: self.len - 1 };
            }
            newer.push(&link.value);
            cur = link.older.as_deref();
        }
        self.clone()
    }

    /// Copy the elements out in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for PersistentGroup<T> {
    fn clone(&self) -> Self {
        Self { head: self.head.clone(), len: self.len }
    }
}

impl<T> Default for PersistentGroup<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for PersistentGroup<T> {
    // Unlink iteratively; the default recursive drop overflows the stack on
    // long chains.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(rc) = cur {
            match Rc::try_unwrap(rc) {
                Ok(mut link) => cur = link.older.take(),
                // Still shared by another group; that group owns the rest.
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> FromIterator<T> for PersistentGroup<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |group, x| group.add(x))
    }
}

impl<T: PartialEq> PartialEq for PersistentGroup<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentGroup<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
