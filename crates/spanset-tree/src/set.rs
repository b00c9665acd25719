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

//! # Range Sets
//!
//! The [`RangeSet`] read contract, the [`RangeSetMut`] write contract, and
//! the concrete [`TreeRangeSet`] container.
//!
//! Every query is written once against the navigable index layer, so the
//! concrete set and the derived views share a single implementation of
//! `contains`, `encloses`, `span`, and friends; a view only supplies its own
//! index. Mutation is what distinguishes the implementations: the tree
//! coalesces on `add` and splits on `remove`, the complement view swaps the
//! two, and the windowed view guards and clips them.
//!
//! Blanket implementations over `&S` and `&mut S` let views wrap borrows, so
//! a read-only view can coexist with other readers while a mutating view
//! holds the set exclusively. A mutation racing an iteration over a view is
//! therefore rejected by the borrow checker instead of producing an undefined
//! observation order.

use crate::map::lower::LowerIndex;
use crate::map::upper::UpperIndex;
use crate::map::{CutMap, Entry};
use crate::view::complement::Complement;
use crate::view::sub::SubRangeSet;
use smallvec::SmallVec;
use spanset_core::cut::Cut;
use spanset_core::range::Range;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

/// Iterator over the ranges of a set, as produced by [`RangeSet::ranges`].
pub type Ranges<I, T> = std::iter::Map<I, fn(Entry<T>) -> Range<T>>;

fn entry_value<T>(entry: Entry<T>) -> Range<T> {
    entry.1
}

/// The read half of the range-set contract.
///
/// A range set represents a set of values as an ordered sequence of disjoint,
/// non-empty, maximally coalesced ranges. Everything here is derived from the
/// by-lower-bound index.
pub trait RangeSet<T: Ord + Clone> {
    /// The by-lower-bound index over this set's ranges.
    type Index<'a>: CutMap<T>
    where
        Self: 'a;

    /// The navigable index over this set's ranges, keyed by lower bound.
    fn ranges_by_lower_bound(&self) -> Self::Index<'_>;

    /// The disjoint ranges of this set in ascending order.
    fn ranges(&self) -> Ranges<<Self::Index<'_> as CutMap<T>>::Entries, T> {
        self.ranges_by_lower_bound()
            .iter()
            .map(entry_value as fn(Entry<T>) -> Range<T>)
    }

    /// The disjoint ranges of this set in descending order.
    fn ranges_desc(&self) -> Ranges<<Self::Index<'_> as CutMap<T>>::Entries, T> {
        self.ranges_by_lower_bound()
            .iter_desc()
            .map(entry_value as fn(Entry<T>) -> Range<T>)
    }

    /// Whether the set contains no values.
    fn is_empty(&self) -> bool {
        self.ranges_by_lower_bound().is_empty()
    }

    /// Whether `value` is a member of the set.
    fn contains(&self, value: &T) -> bool {
        self.range_containing(value).is_some()
    }

    /// The unique stored range containing `value`, if any.
    fn range_containing(&self, value: &T) -> Option<Range<T>> {
        let key = Cut::BelowValue(value.clone());
        self.ranges_by_lower_bound()
            .floor_entry(&key)
            .map(|(_, range)| range)
            .filter(|range| range.contains(value))
    }

    /// Whether a single stored range encloses all of `range`.
    fn encloses(&self, range: &Range<T>) -> bool {
        self.ranges_by_lower_bound()
            .floor_entry(range.lower_bound())
            .is_some_and(|(_, stored)| stored.encloses(range))
    }

    /// Whether every range of `other` is enclosed by this set.
    fn encloses_all<S: RangeSet<T>>(&self, other: &S) -> bool {
        other.ranges().all(|range| self.encloses(&range))
    }

    /// Whether some stored range shares at least one value with `range`.
    fn intersects(&self, range: &Range<T>) -> bool {
        let index = self.ranges_by_lower_bound();
        let overlaps = |stored: &Range<T>| {
            stored
                .intersection(range)
                .is_some_and(|common| !common.is_empty())
        };
        index
            .floor_entry(range.lower_bound())
            .is_some_and(|(_, stored)| overlaps(&stored))
            || index
                .higher_entry(range.lower_bound())
                .is_some_and(|(_, stored)| overlaps(&stored))
    }

    /// The smallest range enclosing every value of the set.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    fn span(&self) -> Range<T> {
        self.try_span().expect("span of an empty range set")
    }

    /// The smallest range enclosing every value, or `None` when empty.
    fn try_span(&self) -> Option<Range<T>> {
        let index = self.ranges_by_lower_bound();
        let (_, first) = index.first_entry()?;
        let (_, last) = index.last_entry()?;
        Some(Range::from_cuts(
            first.lower_bound().clone(),
            last.upper_bound().clone(),
        ))
    }

    /// Whether `other` represents the same value set.
    ///
    /// Equality compares the ordered range sequences, so it holds across
    /// different set implementations and views.
    fn eq_set<S: RangeSet<T>>(&self, other: &S) -> bool {
        self.ranges().eq(other.ranges())
    }
}

/// The write half of the range-set contract.
pub trait RangeSetMut<T: Ord + Clone>: RangeSet<T> {
    /// Adds every value of `range` to the set.
    fn add(&mut self, range: Range<T>);

    /// Removes every value of `range` from the set.
    fn remove(&mut self, range: Range<T>);

    /// Adds every value of `other` to the set.
    fn add_all<S: RangeSet<T>>(&mut self, other: &S) {
        for range in other.ranges() {
            self.add(range);
        }
    }

    /// Removes every value of `other` from the set.
    fn remove_all<S: RangeSet<T>>(&mut self, other: &S) {
        for range in other.ranges() {
            self.remove(range);
        }
    }

    /// Empties the set.
    fn clear(&mut self) {
        self.remove(Range::all());
    }
}

impl<T: Ord + Clone, S: RangeSet<T>> RangeSet<T> for &S {
    type Index<'a>
        = S::Index<'a>
    where
        Self: 'a;

    fn ranges_by_lower_bound(&self) -> Self::Index<'_> {
        (**self).ranges_by_lower_bound()
    }
}

impl<T: Ord + Clone, S: RangeSet<T>> RangeSet<T> for &mut S {
    type Index<'a>
        = S::Index<'a>
    where
        Self: 'a;

    fn ranges_by_lower_bound(&self) -> Self::Index<'_> {
        (**self).ranges_by_lower_bound()
    }
}

impl<T: Ord + Clone, S: RangeSetMut<T>> RangeSetMut<T> for &mut S {
    fn add(&mut self, range: Range<T>) {
        (**self).add(range);
    }

    fn remove(&mut self, range: Range<T>) {
        (**self).remove(range);
    }
}

/// A mutable range set backed by a balanced tree keyed by lower bound.
///
/// # Examples
///
/// ```rust
/// use spanset_core::range::Range;
/// use spanset_tree::set::{RangeSet, RangeSetMut, TreeRangeSet};
///
/// let mut set = TreeRangeSet::new();
/// set.add(Range::closed(1, 4));
/// set.add(Range::open(2, 6));
/// assert_eq!(set.ranges().collect::<Vec<_>>(), [Range::closed_open(1, 6)]);
///
/// set.remove(Range::open(3, 4));
/// assert_eq!(set.range_containing(&2), Some(Range::closed(1, 3)));
/// assert_eq!(set.range_containing(&5), Some(Range::closed_open(4, 6)));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TreeRangeSet<T: Ord + Clone> {
    ranges: BTreeMap<Cut<T>, Range<T>>,
}

impl<T: Ord + Clone> TreeRangeSet<T> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    /// Creates a set holding the same values as `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    /// # use spanset_tree::set::{RangeSet, RangeSetMut, TreeRangeSet};
    ///
    /// let mut set = TreeRangeSet::new();
    /// set.add(Range::closed(1, 4));
    /// let copy = TreeRangeSet::from_range_set(&set);
    /// assert_eq!(set, copy);
    /// ```
    pub fn from_range_set<S: RangeSet<T>>(other: &S) -> Self {
        let mut set = Self::new();
        set.add_all(other);
        set
    }

    /// The navigable index over this set's ranges, keyed by upper bound.
    #[inline]
    pub fn ranges_by_upper_bound(&self) -> UpperIndex<'_, T> {
        UpperIndex::new(&self.ranges)
    }

    /// A live read-only view of the values *not* in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    /// # use spanset_tree::set::{RangeSet, RangeSetMut, TreeRangeSet};
    ///
    /// let mut set = TreeRangeSet::new();
    /// set.add(Range::closed_open(1, 6));
    /// assert_eq!(
    ///     set.complement().ranges().collect::<Vec<_>>(),
    ///     [Range::less_than(1), Range::at_least(6)],
    /// );
    /// ```
    #[inline]
    pub fn complement(&self) -> Complement<&Self> {
        Complement::new(self)
    }

    /// A live mutable view of the values not in this set; adding to the view
    /// removes from this set and vice versa.
    #[inline]
    pub fn complement_mut(&mut self) -> Complement<&mut Self> {
        Complement::new(self)
    }

    /// A live read-only view of this set restricted to `window`.
    #[inline]
    pub fn sub_range_set(&self, window: Range<T>) -> SubRangeSet<T, &Self> {
        SubRangeSet::new(self, window)
    }

    /// A live mutable view of this set restricted to `window`.
    #[inline]
    pub fn sub_range_set_mut(&mut self, window: Range<T>) -> SubRangeSet<T, &mut Self> {
        SubRangeSet::new(self, window)
    }

    fn floor(&self, key: &Cut<T>) -> Option<(&Cut<T>, &Range<T>)> {
        self.ranges.range(..=key).next_back()
    }
}

impl<T: Ord + Clone> Default for TreeRangeSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> RangeSet<T> for TreeRangeSet<T> {
    type Index<'a>
        = LowerIndex<'a, T>
    where
        Self: 'a;

    fn ranges_by_lower_bound(&self) -> LowerIndex<'_, T> {
        LowerIndex::new(&self.ranges)
    }
}

impl<T: Ord + Clone> RangeSetMut<T> for TreeRangeSet<T> {
    fn add(&mut self, range: Range<T>) {
        if range.is_empty() {
            return;
        }
        let (mut lower, mut upper) = range.into_bounds();

        // Merge with a stored range reaching across the new lower bound.
        if let Some((_, below)) = self.floor(&lower) {
            if *below.upper_bound() >= lower {
                if *below.upper_bound() >= upper {
                    upper = below.upper_bound().clone();
                }
                lower = below.lower_bound().clone();
            }
        }
        // Merge with a stored range reaching across the new upper bound.
        if let Some((_, below)) = self.floor(&upper) {
            if *below.upper_bound() >= upper {
                upper = below.upper_bound().clone();
            }
        }
        // Everything keyed inside the merged bounds is swallowed.
        let swallowed: SmallVec<[Cut<T>; 4]> = self
            .ranges
            .range((Bound::Included(&lower), Bound::Excluded(&upper)))
            .map(|(key, _)| key.clone())
            .collect();
        for key in swallowed {
            self.ranges.remove(&key);
        }
        self.ranges
            .insert(lower.clone(), Range::from_cuts(lower, upper));
    }

    fn remove(&mut self, range: Range<T>) {
        if range.is_empty() {
            return;
        }
        let (lower, upper) = range.into_bounds();

        // A stored range straddling the left edge keeps its prefix, and its
        // suffix too when it reaches past the right edge.
        let straddle = self
            .ranges
            .range(..&lower)
            .next_back()
            .map(|(key, stored)| (key.clone(), stored.clone()));
        if let Some((key, stored)) = straddle {
            if *stored.upper_bound() > lower {
                if *stored.upper_bound() > upper {
                    self.ranges.insert(
                        upper.clone(),
                        Range::from_cuts(upper.clone(), stored.upper_bound().clone()),
                    );
                }
                self.ranges
                    .insert(key.clone(), Range::from_cuts(key, lower.clone()));
            }
        }
        // A stored range straddling the right edge keeps its suffix.
        let tail = self.floor(&upper).and_then(|(_, stored)| {
            (*stored.upper_bound() > upper).then(|| stored.upper_bound().clone())
        });
        if let Some(end) = tail {
            self.ranges
                .insert(upper.clone(), Range::from_cuts(upper.clone(), end));
        }
        // Everything keyed inside the removal is gone.
        let doomed: SmallVec<[Cut<T>; 4]> = self
            .ranges
            .range((Bound::Included(&lower), Bound::Excluded(&upper)))
            .map(|(key, _)| key.clone())
            .collect();
        for key in doomed {
            self.ranges.remove(&key);
        }
    }
}

impl<T: Ord + Clone> FromIterator<Range<T>> for TreeRangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord + Clone> Extend<Range<T>> for TreeRangeSet<T> {
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl<T: Ord + Clone + fmt::Debug> fmt::Debug for TreeRangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranges.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{check_invariants, query_ranges};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use spanset_core::range::BoundType;

    fn ranges_of(set: &TreeRangeSet<i32>) -> Vec<Range<i32>> {
        set.ranges().collect()
    }

    #[test]
    fn test_empty_set() {
        let set = TreeRangeSet::<i32>::new();
        check_invariants(&set);
        assert!(set.is_empty());
        assert!(set.try_span().is_none());
        assert!(!set.contains(&0));
        assert_eq!(set, TreeRangeSet::default());
    }

    #[test]
    #[should_panic(expected = "span of an empty range set")]
    fn test_span_of_empty_set_panics() {
        TreeRangeSet::<i32>::new().span();
    }

    #[test]
    fn test_merges_connected_with_overlap() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 4));
        set.add(Range::open(2, 6));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed_open(1, 6)]);
        assert_eq!(
            set.complement().ranges().collect::<Vec<_>>(),
            [Range::less_than(1), Range::at_least(6)],
        );
    }

    #[test]
    fn test_merges_connected_disjoint() {
        // Touching half-open ranges share a cut and coalesce.
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 4));
        set.add(Range::open(4, 6));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed_open(1, 6)]);
        assert_eq!(
            set.complement().ranges().collect::<Vec<_>>(),
            [Range::less_than(1), Range::at_least(6)],
        );
    }

    #[test]
    fn test_ignores_smaller_sharing_no_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 6));
        set.add(Range::open(2, 4));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_ignores_smaller_sharing_lower_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 6));
        set.add(Range::closed(1, 4));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_ignores_smaller_sharing_upper_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 6));
        set.add(Range::closed(3, 6));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_ignores_equal() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 6));
        set.add(Range::closed(1, 6));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_extend_same_lower_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 4));
        set.add(Range::closed(1, 6));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_extend_same_upper_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 6));
        set.add(Range::closed(1, 6));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_extend_both_directions() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 4));
        set.add(Range::closed(1, 6));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_add_empty() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed_open(3, 3));
        set.add(Range::open(5, 5));
        check_invariants(&set);
        assert!(set.is_empty());
        assert!(ranges_of(&set).is_empty());
    }

    #[test]
    fn test_fill_hole_exactly() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed_open(1, 3));
        set.add(Range::closed_open(4, 6));
        set.add(Range::closed_open(3, 4));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed_open(1, 6)]);
    }

    #[test]
    fn test_fill_hole_with_overlap() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed_open(1, 3));
        set.add(Range::closed_open(4, 6));
        set.add(Range::closed_open(2, 5));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed_open(1, 6)]);
    }

    #[test]
    fn test_add_many_pairs() {
        for a_low in 0..6 {
            for a_high in a_low..6 {
                for a_low_type in [BoundType::Open, BoundType::Closed] {
                    for a_high_type in [BoundType::Open, BoundType::Closed] {
                        let a = Range::range(a_low, a_low_type, a_high, a_high_type);
                        for b_low in 0..6 {
                            for b_high in b_low..6 {
                                for b_low_type in [BoundType::Open, BoundType::Closed] {
                                    for b_high_type in [BoundType::Open, BoundType::Closed] {
                                        let b =
                                            Range::range(b_low, b_low_type, b_high, b_high_type);
                                        pair_test(a.clone(), b);
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn pair_test(a: Range<i32>, b: Range<i32>) {
        let mut set = TreeRangeSet::new();
        set.add(a.clone());
        set.add(b.clone());
        check_invariants(&set);

        if a.is_empty() && b.is_empty() {
            assert!(ranges_of(&set).is_empty());
        } else if a.is_empty() {
            assert_eq!(ranges_of(&set), [b]);
        } else if b.is_empty() {
            assert_eq!(ranges_of(&set), [a]);
        } else if a.is_connected(&b) {
            assert_eq!(ranges_of(&set), [a.span(&b)]);
        } else if a.lower_bound() < b.lower_bound() {
            assert_eq!(ranges_of(&set), [a, b]);
        } else {
            assert_eq!(ranges_of(&set), [b, a]);
        }
    }

    #[test]
    fn test_remove_empty() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 6));
        set.remove(Range::closed_open(3, 3));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 6)]);
    }

    #[test]
    fn test_remove_part_sharing_lower_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 5));
        set.remove(Range::closed_open(3, 5));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::singleton(5)]);
        assert!(set.contains(&5));
        assert!(!set.contains(&4));
    }

    #[test]
    fn test_remove_part_sharing_upper_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 5));
        set.remove(Range::open_closed(3, 5));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::singleton(3)]);
        assert!(set.contains(&3));
        assert!(!set.contains(&4));
    }

    #[test]
    fn test_remove_middle() {
        let mut set = TreeRangeSet::new();
        set.add(Range::at_most(6));
        set.remove(Range::closed_open(3, 4));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::less_than(3), Range::closed(4, 6)]);
        assert_eq!(
            set.complement().ranges().collect::<Vec<_>>(),
            [Range::closed_open(3, 4), Range::greater_than(6)],
        );
    }

    #[test]
    fn test_remove_no_overlap() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 6));
        set.remove(Range::closed_open(1, 3));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(3, 6)]);
    }

    #[test]
    fn test_remove_part_from_below_lower_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 6));
        set.remove(Range::closed(1, 3));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::open_closed(3, 6)]);
    }

    #[test]
    fn test_remove_part_from_above_upper_bound() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 6));
        set.remove(Range::closed(6, 9));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed_open(3, 6)]);
    }

    #[test]
    fn test_remove_exact() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 6));
        set.remove(Range::closed(3, 6));
        check_invariants(&set);
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_covering() {
        for removal in [
            Range::closed(2, 6),
            Range::closed(3, 7),
            Range::closed(2, 7),
        ] {
            let mut set = TreeRangeSet::new();
            set.add(Range::closed(3, 6));
            set.remove(removal);
            check_invariants(&set);
            assert!(set.is_empty());
        }
    }

    #[test]
    fn test_remove_splits_several() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 3));
        set.add(Range::closed(5, 7));
        set.add(Range::closed(9, 11));
        set.remove(Range::open(2, 10));
        check_invariants(&set);
        assert_eq!(ranges_of(&set), [Range::closed(1, 2), Range::closed(10, 11)]);
    }

    #[test]
    fn test_range_containing() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(3, 10));
        assert_eq!(set.range_containing(&5), Some(Range::closed(3, 10)));
        assert!(set.contains(&5));
        assert_eq!(set.range_containing(&1), None);
        assert!(!set.contains(&1));

        set.remove(Range::open(5, 7));
        assert_eq!(set.range_containing(&5), Some(Range::closed(3, 5)));
        assert_eq!(set.range_containing(&8), Some(Range::closed(7, 10)));
        assert_eq!(set.range_containing(&6), None);
        assert!(!set.contains(&6));
    }

    #[test]
    fn test_span() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 2));
        set.add(Range::open(5, 8));
        assert_eq!(set.span(), Range::closed_open(1, 8));
        set.add(Range::at_least(10));
        assert_eq!(set.span(), Range::at_least(1));
    }

    #[test]
    fn test_encloses() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 4));
        set.add(Range::open(6, 9));
        assert!(set.encloses(&Range::closed(2, 3)));
        assert!(set.encloses(&Range::closed(1, 4)));
        assert!(set.encloses(&Range::open(6, 9)));
        assert!(!set.encloses(&Range::closed(6, 9)));
        assert!(!set.encloses(&Range::closed(3, 7)));
        assert!(!set.encloses(&Range::at_most(2)));

        let mut other = TreeRangeSet::new();
        other.add(Range::closed(2, 4));
        other.add(Range::open(7, 8));
        assert!(set.encloses_all(&other));
        other.add(Range::singleton(5));
        assert!(!set.encloses_all(&other));
    }

    #[test]
    fn test_enclosing_matches_stored_ranges() {
        for first in query_ranges() {
            for second in query_ranges() {
                let mut set = TreeRangeSet::new();
                set.add(first.clone());
                set.add(second.clone());
                check_invariants(&set);
                for query in query_ranges() {
                    let expected = set.ranges().any(|stored| stored.encloses(&query));
                    assert_eq!(
                        set.encloses(&query),
                        expected,
                        "encloses({query:?}) on {set:?}",
                    );
                }
            }
        }
    }

    #[test]
    fn test_intersects() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 4));
        set.add(Range::open(6, 9));
        assert!(set.intersects(&Range::closed(3, 7)));
        assert!(set.intersects(&Range::open(4, 7)));
        assert!(set.intersects(&Range::all()));
        assert!(!set.intersects(&Range::open(4, 6)));
        assert!(!set.intersects(&Range::closed_open(0, 1)));
        assert!(!set.intersects(&Range::singleton(9)));
        assert!(!set.intersects(&Range::closed_open(2, 2)));
    }

    #[test]
    fn test_create_copy() {
        for first in query_ranges() {
            for second in query_ranges() {
                let mut set = TreeRangeSet::new();
                set.add(first.clone());
                set.add(second.clone());
                let copy = TreeRangeSet::from_range_set(&set);
                assert_eq!(set, copy);
                assert!(set.eq_set(&copy));
            }
        }
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let set: TreeRangeSet<i32> =
            [Range::closed(1, 3), Range::open(2, 5), Range::singleton(8)]
                .into_iter()
                .collect();
        assert_eq!(ranges_of(&set), [Range::closed_open(1, 5), Range::singleton(8)]);

        let mut extended = set.clone();
        extended.extend([Range::closed(5, 8)]);
        assert_eq!(ranges_of(&extended), [Range::closed(1, 8)]);
    }

    #[test]
    fn test_ranges_desc() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(5, 6));
        set.add(Range::closed(1, 2));
        set.add(Range::at_least(9));
        let mut reversed: Vec<_> = set.ranges_desc().collect();
        reversed.reverse();
        assert_eq!(reversed, ranges_of(&set));
        assert_eq!(set.ranges_desc().next(), Some(Range::at_least(9)));
    }

    #[test]
    fn test_add_all_remove_all() {
        let mut left = TreeRangeSet::new();
        left.add(Range::closed(1, 4));
        let mut right = TreeRangeSet::new();
        right.add(Range::closed(3, 6));
        right.add(Range::closed(8, 9));

        left.add_all(&right);
        assert_eq!(ranges_of(&left), [Range::closed(1, 6), Range::closed(8, 9)]);

        left.remove_all(&right);
        assert_eq!(ranges_of(&left), [Range::closed_open(1, 3)]);

        left.clear();
        assert!(left.is_empty());
    }

    #[test]
    fn test_mutation_keeps_untouched_regions() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 2));
        set.add(Range::closed(5, 6));
        let before = ranges_of(&set);

        // A no-op removal leaves the storage untouched.
        set.remove(Range::open(3, 4));
        assert_eq!(ranges_of(&set), before);
        set.add(Range::open(3, 3));
        assert_eq!(ranges_of(&set), before);
    }

    #[test]
    fn test_debug_format() {
        let mut set = TreeRangeSet::new();
        set.add(Range::closed(1, 2));
        set.add(Range::greater_than(5));
        assert_eq!(format!("{set:?}"), "{[1, 2], (5, +\u{221e})}");
    }

    #[test]
    fn test_random_mutations_against_membership_model() {
        // Endpoints stay on even values so odd probes watch the open/closed
        // edges and the gaps between touching ranges.
        const LIMIT: i32 = 40;
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut set = TreeRangeSet::new();
        let mut member = [false; (LIMIT + 1) as usize];

        for step in 0..2000 {
            let a = rng.random_range(0..=LIMIT / 2) * 2;
            let b = rng.random_range(0..=LIMIT / 2) * 2;
            let (low, high) = (a.min(b), a.max(b));
            let low_type = if rng.random_bool(0.5) {
                BoundType::Closed
            } else {
                BoundType::Open
            };
            let high_type = if rng.random_bool(0.5) {
                BoundType::Closed
            } else {
                BoundType::Open
            };
            let range = match rng.random_range(0..6) {
                0 => Range::up_to(high, high_type),
                1 => Range::down_to(low, low_type),
                _ => Range::range(low, low_type, high, high_type),
            };

            if rng.random_bool(0.5) {
                for (value, slot) in member.iter_mut().enumerate() {
                    *slot |= range.contains(&(value as i32));
                }
                set.add(range);
            } else {
                for (value, slot) in member.iter_mut().enumerate() {
                    *slot &= !range.contains(&(value as i32));
                }
                set.remove(range);
            }

            check_invariants(&set);
            for (value, slot) in member.iter().enumerate() {
                assert_eq!(
                    set.contains(&(value as i32)),
                    *slot,
                    "step {step}: membership of {value} diverged",
                );
            }
        }
    }
}
