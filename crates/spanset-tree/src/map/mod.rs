// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Navigable Range Indices
//!
//! The index layer beneath the range-set types. A [`CutMap`] is an ordered
//! map from endpoint [`Cut`]s to [`Range`]s that supports lazily-windowed
//! iteration in both directions; predecessor/successor probes, head/tail
//! sub-views, and reversal all derive from those two primitives.
//!
//! Key windows are themselves expressed with the range algebra, as a
//! `Range<Cut<T>>` over the key type. That keeps inclusive/exclusive window
//! edges out of every implementation: narrowing a sub-view is a range
//! intersection, and testing a key against a window is `Range::contains`.
//!
//! ## Submodules
//!
//! - `lower`: The primary index, a borrow of the backing tree keyed by each
//!   range's lower bound.
//! - `upper`: The same tree re-keyed by upper bound. Because stored ranges
//!   are pairwise disconnected, ascending-by-upper equals
//!   ascending-by-lower, so one predecessor probe finds the scan start.
//! - `gaps`: The derived complement index over the holes between stored
//!   ranges, including the unbounded leading and trailing gaps.
//! - `clip`: The derived windowed index over stored ranges clipped to a
//!   value window, keyed by clipped lower bound.

pub mod clip;
pub mod gaps;
pub mod lower;
pub mod upper;

use spanset_core::cut::Cut;
use spanset_core::range::Range;

/// One entry of a navigable range index: the key cut and the stored range.
pub type Entry<T> = (Cut<T>, Range<T>);

/// A boxed lazy entry stream borrowed from the underlying storage.
pub type Entries<'a, T> = Box<dyn Iterator<Item = Entry<T>> + 'a>;

/// An ordered, navigable map from endpoint cuts to ranges.
///
/// Implementations provide windowed iteration in the two directions; every
/// probe and sub-view is derived. Entries are produced by value because the
/// derived indices compute them on demand.
pub trait CutMap<T: Ord + Clone> {
    /// The lazy entry stream produced by this index.
    type Entries: Iterator<Item = Entry<T>>;

    /// Ascending iteration over the entries whose key lies in `window`.
    fn entries(&self, window: &Range<Cut<T>>) -> Self::Entries;

    /// Descending iteration over the entries whose key lies in `window`.
    fn entries_desc(&self, window: &Range<Cut<T>>) -> Self::Entries;

    /// Ascending iteration over all entries.
    fn iter(&self) -> Self::Entries {
        self.entries(&Range::all())
    }

    /// Descending iteration over all entries.
    fn iter_desc(&self) -> Self::Entries {
        self.entries_desc(&Range::all())
    }

    /// The entry with the smallest key.
    fn first_entry(&self) -> Option<Entry<T>> {
        self.iter().next()
    }

    /// The entry with the greatest key.
    fn last_entry(&self) -> Option<Entry<T>> {
        self.iter_desc().next()
    }

    /// The entry with the greatest key strictly less than `key`.
    fn lower_entry(&self, key: &Cut<T>) -> Option<Entry<T>> {
        self.entries_desc(&Range::less_than(key.clone())).next()
    }

    /// The entry with the greatest key less than or equal to `key`.
    fn floor_entry(&self, key: &Cut<T>) -> Option<Entry<T>> {
        self.entries_desc(&Range::at_most(key.clone())).next()
    }

    /// The entry with the smallest key greater than or equal to `key`.
    fn ceiling_entry(&self, key: &Cut<T>) -> Option<Entry<T>> {
        self.entries(&Range::at_least(key.clone())).next()
    }

    /// The entry with the smallest key strictly greater than `key`.
    fn higher_entry(&self, key: &Cut<T>) -> Option<Entry<T>> {
        self.entries(&Range::greater_than(key.clone())).next()
    }

    /// The range stored under exactly `key`.
    fn get(&self, key: &Cut<T>) -> Option<Range<T>> {
        self.floor_entry(key)
            .and_then(|(found, range)| if found == *key { Some(range) } else { None })
    }

    /// Whether an entry is stored under exactly `key`.
    fn contains_key(&self, key: &Cut<T>) -> bool {
        self.get(key).is_some()
    }

    /// The number of entries.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the index holds no entries.
    fn is_empty(&self) -> bool {
        self.first_entry().is_none()
    }

    /// The sub-view of entries with keys below `key`.
    fn head(self, key: Cut<T>, inclusive: bool) -> SubMap<T, Self>
    where
        Self: Sized,
    {
        let window = if inclusive {
            Range::at_most(key)
        } else {
            Range::less_than(key)
        };
        SubMap {
            inner: self,
            window,
        }
    }

    /// The sub-view of entries with keys above `key`.
    fn tail(self, key: Cut<T>, inclusive: bool) -> SubMap<T, Self>
    where
        Self: Sized,
    {
        let window = if inclusive {
            Range::at_least(key)
        } else {
            Range::greater_than(key)
        };
        SubMap {
            inner: self,
            window,
        }
    }

    /// This index iterated in reverse.
    fn descending(self) -> Descending<Self>
    where
        Self: Sized,
    {
        Descending { inner: self }
    }
}

/// A key-windowed sub-view of another index.
///
/// Sub-views compose: `head(a).tail(b)` intersects the two windows, and every
/// query window is intersected again at call time.
#[derive(Clone, Copy, Debug)]
pub struct SubMap<T: Ord + Clone, M> {
    inner: M,
    window: Range<Cut<T>>,
}

impl<T: Ord + Clone, M> SubMap<T, M> {
    fn narrowed(&self, window: &Range<Cut<T>>) -> Range<Cut<T>> {
        match self.window.intersection(window) {
            Some(narrowed) => narrowed,
            None => void_window(),
        }
    }
}

impl<T: Ord + Clone, M: CutMap<T>> CutMap<T> for SubMap<T, M> {
    type Entries = M::Entries;

    fn entries(&self, window: &Range<Cut<T>>) -> Self::Entries {
        self.inner.entries(&self.narrowed(window))
    }

    fn entries_desc(&self, window: &Range<Cut<T>>) -> Self::Entries {
        self.inner.entries_desc(&self.narrowed(window))
    }
}

/// Another index iterated in reverse order.
///
/// Reversal affects iteration and the first/last accessors; probes keep the
/// ascending key order of the underlying index.
#[derive(Clone, Copy, Debug)]
pub struct Descending<M> {
    inner: M,
}

impl<M> Descending<M> {
    /// Descending iteration over the entries whose key lies in `window`.
    pub fn entries<T: Ord + Clone>(&self, window: &Range<Cut<T>>) -> M::Entries
    where
        M: CutMap<T>,
    {
        self.inner.entries_desc(window)
    }

    /// Iteration over all entries, greatest key first.
    pub fn iter<T: Ord + Clone>(&self) -> M::Entries
    where
        M: CutMap<T>,
    {
        self.inner.iter_desc()
    }

    /// The first entry in reversed order, i.e. the greatest key.
    pub fn first_entry<T: Ord + Clone>(&self) -> Option<Entry<T>>
    where
        M: CutMap<T>,
    {
        self.inner.last_entry()
    }

    /// The last entry in reversed order, i.e. the smallest key.
    pub fn last_entry<T: Ord + Clone>(&self) -> Option<Entry<T>>
    where
        M: CutMap<T>,
    {
        self.inner.first_entry()
    }

    /// Undoes the reversal.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

/// A valid but empty key window, used when narrowing produces nothing.
pub(crate) fn void_window<T: Ord + Clone>() -> Range<Cut<T>> {
    Range::from_cuts(Cut::AboveAll, Cut::AboveAll)
}
