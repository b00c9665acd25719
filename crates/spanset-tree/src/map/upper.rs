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

//! The by-upper-bound index: the primary storage re-keyed by upper cut.
//!
//! Stored ranges are pairwise disconnected, so ascending order by upper
//! bound coincides with ascending order by lower bound. A window over upper
//! cuts therefore maps to a contiguous key scan: only the single range that
//! straddles the window start needs a predecessor probe, and at most one
//! scanned entry per edge falls outside the window and is filtered.

use crate::map::{CutMap, Entries};
use spanset_core::cut::Cut;
use spanset_core::range::Range;
use std::collections::BTreeMap;
use std::ops::Bound;

/// A borrow of the primary storage keyed by each range's upper bound.
#[derive(Clone, Copy, Debug)]
pub struct UpperIndex<'a, T: Ord + Clone> {
    ranges: &'a BTreeMap<Cut<T>, Range<T>>,
}

impl<'a, T: Ord + Clone> UpperIndex<'a, T> {
    pub(crate) fn new(ranges: &'a BTreeMap<Cut<T>, Range<T>>) -> Self {
        Self { ranges }
    }

    fn scan(&self, window: &Range<Cut<T>>, reverse: bool) -> Entries<'a, T> {
        if window.is_empty() {
            return Box::new(std::iter::empty());
        }
        let start: Bound<Cut<T>> = match window.lower_bound() {
            Cut::BelowAll => Bound::Unbounded,
            Cut::BelowValue(from) | Cut::AboveValue(from) => {
                // The only candidate below `from` is its predecessor by lower
                // bound; everything earlier ends before that predecessor starts.
                match self.ranges.range(..from).next_back() {
                    Some((key, _)) => Bound::Included(key.clone()),
                    None => Bound::Unbounded,
                }
            }
            Cut::AboveAll => return Box::new(std::iter::empty()),
        };
        let end: Bound<Cut<T>> = match window.upper_bound() {
            Cut::AboveAll => Bound::Unbounded,
            // An upper bound of `to` can only come from a range starting
            // strictly below `to`.
            Cut::AboveValue(to) | Cut::BelowValue(to) => Bound::Excluded(to.clone()),
            Cut::BelowAll => return Box::new(std::iter::empty()),
        };
        let window = window.clone();
        let entries = self
            .ranges
            .range((start, end))
            .map(|(_, range)| (range.upper_bound().clone(), range.clone()))
            .filter(move |(key, _)| window.contains(key));
        if reverse {
            Box::new(entries.rev())
        } else {
            Box::new(entries)
        }
    }
}

impl<'a, T: Ord + Clone> CutMap<T> for UpperIndex<'a, T> {
    type Entries = Entries<'a, T>;

    fn entries(&self, window: &Range<Cut<T>>) -> Self::Entries {
        self.scan(window, false)
    }

    fn entries_desc(&self, window: &Range<Cut<T>>) -> Self::Entries {
        self.scan(window, true)
    }
}
