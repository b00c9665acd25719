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

//! Shared test fixtures: the standard range corpus over a small domain, the
//! structural invariant checker, and reference implementations to compare
//! the live views and navigable indices against.

use crate::map::CutMap;
use crate::set::{RangeSet, RangeSetMut, TreeRangeSet};
use spanset_core::cut::Cut;
use spanset_core::range::{BoundType, Range};
use std::collections::BTreeMap;
use std::ops::Bound;

const MIN_BOUND: i32 = -1;
const MAX_BOUND: i32 = 1;

/// Every range shape over the `MIN_BOUND..=MAX_BOUND` grid: unbounded tails,
/// singletons, empties, and all bound-type combinations of distinct
/// endpoints.
pub(crate) fn query_ranges() -> Vec<Range<i32>> {
    let mut queries = vec![Range::all()];
    for i in MIN_BOUND..=MAX_BOUND {
        for bound_type in [BoundType::Open, BoundType::Closed] {
            queries.push(Range::up_to(i, bound_type));
            queries.push(Range::down_to(i, bound_type));
        }
        queries.push(Range::singleton(i));
        queries.push(Range::open_closed(i, i));
        queries.push(Range::closed_open(i, i));
        for lower_type in [BoundType::Open, BoundType::Closed] {
            for j in (i + 1)..=MAX_BOUND {
                for upper_type in [BoundType::Open, BoundType::Closed] {
                    queries.push(Range::range(i, lower_type, j, upper_type));
                }
            }
        }
    }
    queries
}

/// Every cut around the probe grid, one value past the corpus on each side.
pub(crate) fn cuts_to_test() -> Vec<Cut<i32>> {
    let mut cuts = vec![Cut::BelowAll, Cut::AboveAll];
    for i in (MIN_BOUND - 1)..=(MAX_BOUND + 1) {
        cuts.push(Cut::BelowValue(i));
        cuts.push(Cut::AboveValue(i));
    }
    cuts
}

/// Checks the structural invariants of a set's stored ranges: all non-empty,
/// keyed by lower bound, strictly separated, and faithfully copyable.
pub(crate) fn check_invariants(set: &TreeRangeSet<i32>) {
    let entries: Vec<_> = set.ranges_by_lower_bound().iter().collect();
    for (key, range) in &entries {
        assert!(!range.is_empty(), "stored empty range {range:?}");
        assert_eq!(key, range.lower_bound(), "mis-keyed range {range:?}");
    }
    for pair in entries.windows(2) {
        let (_, left) = &pair[0];
        let (_, right) = &pair[1];
        assert!(
            left.upper_bound() < right.lower_bound(),
            "stored ranges {left:?} and {right:?} are connected",
        );
    }
    let copy = TreeRangeSet::from_range_set(set);
    assert_eq!(&copy, set);
    assert!(set.complement().complement().eq_set(set));
}

/// The complement materialized the slow way: everything minus the set.
pub(crate) fn naive_complement<S: RangeSet<i32>>(set: &S) -> TreeRangeSet<i32> {
    let mut complement = TreeRangeSet::new();
    complement.add(Range::all());
    complement.remove_all(set);
    complement
}

/// The restriction materialized the slow way: clip every range by hand.
pub(crate) fn naive_sub_range_set<S: RangeSet<i32>>(
    set: &S,
    window: &Range<i32>,
) -> TreeRangeSet<i32> {
    let mut restricted = TreeRangeSet::new();
    for range in set.ranges() {
        if range.is_connected(window) {
            restricted.add(range.intersection(window).unwrap());
        }
    }
    restricted
}

/// Compares a live view against a materialized expectation, query by query.
pub(crate) fn check_view_against<V: RangeSet<i32>>(expected: &TreeRangeSet<i32>, view: &V) {
    assert!(
        expected.eq_set(view),
        "expected {:?}, view held {:?}",
        expected.ranges().collect::<Vec<_>>(),
        view.ranges().collect::<Vec<_>>(),
    );
    assert_eq!(expected.is_empty(), view.is_empty());
    assert_eq!(expected.try_span(), view.try_span());

    for value in (MIN_BOUND - 1)..=(MAX_BOUND + 1) {
        assert_eq!(expected.contains(&value), view.contains(&value));
        assert_eq!(expected.range_containing(&value), view.range_containing(&value));
    }
    for query in query_ranges() {
        let enclosed = expected.ranges().any(|stored| stored.encloses(&query));
        assert_eq!(view.encloses(&query), enclosed, "encloses({query:?})");
    }
}

type RefMap = BTreeMap<Cut<i32>, Range<i32>>;
type RefEntry = (Cut<i32>, Range<i32>);

fn cloned(entry: Option<(&Cut<i32>, &Range<i32>)>) -> Option<RefEntry> {
    entry.map(|(key, range)| (key.clone(), range.clone()))
}

fn ref_head(map: &RefMap, key: &Cut<i32>, inclusive: bool) -> Vec<RefEntry> {
    let end = if inclusive {
        Bound::Included(key)
    } else {
        Bound::Excluded(key)
    };
    map.range((Bound::Unbounded, end))
        .map(|(key, range)| (key.clone(), range.clone()))
        .collect()
}

fn ref_tail(map: &RefMap, key: &Cut<i32>, inclusive: bool) -> Vec<RefEntry> {
    let start = if inclusive {
        Bound::Included(key)
    } else {
        Bound::Excluded(key)
    };
    map.range((start, Bound::Unbounded))
        .map(|(key, range)| (key.clone(), range.clone()))
        .collect()
}

/// Checks a navigable index against a reference ordered map over the same
/// entries: full iteration both ways, the four probes, and the windowed
/// sub-views with their reversals, for every probe key.
pub(crate) fn check_navigation<M>(map: &M, expected: &RefMap, cuts: &[Cut<i32>])
where
    M: CutMap<i32> + Clone,
{
    let reference: Vec<RefEntry> = expected
        .iter()
        .map(|(key, range)| (key.clone(), range.clone()))
        .collect();
    assert_eq!(map.iter().collect::<Vec<_>>(), reference);
    let mut reversed: Vec<_> = map.iter_desc().collect();
    reversed.reverse();
    assert_eq!(reversed, reference);
    assert_eq!(map.len(), expected.len());
    assert_eq!(map.is_empty(), expected.is_empty());
    assert_eq!(map.first_entry(), cloned(expected.iter().next()));
    assert_eq!(map.last_entry(), cloned(expected.iter().next_back()));

    for key in cuts {
        assert_eq!(
            map.lower_entry(key),
            cloned(expected.range(..key).next_back()),
            "lower_entry({key:?})",
        );
        assert_eq!(
            map.floor_entry(key),
            cloned(expected.range(..=key).next_back()),
            "floor_entry({key:?})",
        );
        assert_eq!(
            map.ceiling_entry(key),
            cloned(expected.range(key..).next()),
            "ceiling_entry({key:?})",
        );
        assert_eq!(
            map.higher_entry(key),
            cloned(
                expected
                    .range((Bound::Excluded(key), Bound::Unbounded))
                    .next()
            ),
            "higher_entry({key:?})",
        );
        assert_eq!(map.get(key), expected.get(key).cloned());

        for inclusive in [false, true] {
            let head = map.clone().head(key.clone(), inclusive);
            let head_reference = ref_head(expected, key, inclusive);
            assert_eq!(head.iter().collect::<Vec<_>>(), head_reference);
            let head_reversed: Vec<_> = head.descending().iter().collect();
            assert_eq!(
                head_reversed,
                head_reference.iter().rev().cloned().collect::<Vec<_>>(),
            );

            let tail = map.clone().tail(key.clone(), inclusive);
            let tail_reference = ref_tail(expected, key, inclusive);
            assert_eq!(tail.iter().collect::<Vec<_>>(), tail_reference);
            let tail_reversed: Vec<_> = tail.descending().iter().collect();
            assert_eq!(
                tail_reversed,
                tail_reference.iter().rev().cloned().collect::<Vec<_>>(),
            );
        }
    }
}
