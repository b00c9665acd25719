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

//! The primary index: the backing tree keyed by each range's lower bound.

use crate::map::{CutMap, Entries};
use spanset_core::cut::Cut;
use spanset_core::range::Range;
use std::collections::BTreeMap;
use std::ops::Bound;

/// A borrow of the primary storage exposed as a navigable index.
#[derive(Clone, Copy, Debug)]
pub struct LowerIndex<'a, T: Ord + Clone> {
    ranges: &'a BTreeMap<Cut<T>, Range<T>>,
}

impl<'a, T: Ord + Clone> LowerIndex<'a, T> {
    pub(crate) fn new(ranges: &'a BTreeMap<Cut<T>, Range<T>>) -> Self {
        Self { ranges }
    }

    fn scan(&self, window: &Range<Cut<T>>, reverse: bool) -> Entries<'a, T> {
        let Some(bounds) = key_bounds(window) else {
            return Box::new(std::iter::empty());
        };
        let entries = self
            .ranges
            .range(bounds)
            .map(|(key, range)| (key.clone(), range.clone()));
        if reverse {
            Box::new(entries.rev())
        } else {
            Box::new(entries)
        }
    }
}

impl<'a, T: Ord + Clone> CutMap<T> for LowerIndex<'a, T> {
    type Entries = Entries<'a, T>;

    fn entries(&self, window: &Range<Cut<T>>) -> Self::Entries {
        self.scan(window, false)
    }

    fn entries_desc(&self, window: &Range<Cut<T>>) -> Self::Entries {
        self.scan(window, true)
    }
}

/// Translates a key window into tree bounds; `None` means no key can match.
fn key_bounds<'w, T: Ord>(
    window: &'w Range<Cut<T>>,
) -> Option<(Bound<&'w Cut<T>>, Bound<&'w Cut<T>>)> {
    let start = match window.lower_bound() {
        Cut::BelowAll => Bound::Unbounded,
        Cut::BelowValue(key) => Bound::Included(key),
        Cut::AboveValue(key) => Bound::Excluded(key),
        Cut::AboveAll => return None,
    };
    let end = match window.upper_bound() {
        Cut::AboveAll => Bound::Unbounded,
        Cut::AboveValue(key) => Bound::Included(key),
        Cut::BelowValue(key) => Bound::Excluded(key),
        Cut::BelowAll => return None,
    };
    Some((start, end))
}
