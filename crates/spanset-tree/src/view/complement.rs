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

//! The complement view: every value *not* in the backing set.

use crate::map::gaps::GapIndex;
use crate::set::{RangeSet, RangeSetMut};
use crate::view::sub::SubRangeSet;
use spanset_core::range::Range;

/// A live view of the values not in the backing set.
///
/// Reads walk the gaps of the backing index on demand; writes go to the
/// backing set with `add` and `remove` swapped. The backing is held by value,
/// so wrap a `&TreeRangeSet` for a read-only view, a `&mut TreeRangeSet` for
/// a mutating one, or another view to nest.
///
/// # Examples
///
/// ```rust
/// use spanset_core::range::Range;
/// use spanset_tree::set::{RangeSet, RangeSetMut, TreeRangeSet};
///
/// let mut set = TreeRangeSet::new();
/// set.add(Range::closed(1, 4));
///
/// let complement = set.complement();
/// assert!(complement.contains(&0) && !complement.contains(&3));
/// assert_eq!(
///     complement.ranges().collect::<Vec<_>>(),
///     [Range::less_than(1), Range::greater_than(4)],
/// );
///
/// // Adding to the complement removes from the set.
/// set.complement_mut().add(Range::singleton(2));
/// assert!(!set.contains(&2));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Complement<S> {
    backing: S,
}

impl<S> Complement<S> {
    pub(crate) fn new(backing: S) -> Self {
        Self { backing }
    }

    /// The complement of this view, which is the backing set itself.
    pub fn complement(self) -> S {
        self.backing
    }

    /// This view restricted to `window`.
    pub fn sub_range_set<T: Ord + Clone>(self, window: Range<T>) -> SubRangeSet<T, Self>
    where
        S: RangeSet<T>,
    {
        SubRangeSet::new(self, window)
    }
}

impl<T: Ord + Clone, S: RangeSet<T>> RangeSet<T> for Complement<S> {
    type Index<'a>
        = GapIndex<S::Index<'a>>
    where
        Self: 'a;

    fn ranges_by_lower_bound(&self) -> Self::Index<'_> {
        GapIndex::new(self.backing.ranges_by_lower_bound())
    }
}

impl<T: Ord + Clone, S: RangeSetMut<T>> RangeSetMut<T> for Complement<S> {
    fn add(&mut self, range: Range<T>) {
        self.backing.remove(range);
    }

    fn remove(&mut self, range: Range<T>) {
        self.backing.add(range);
    }
}
