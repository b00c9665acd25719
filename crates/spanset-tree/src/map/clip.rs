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

//! The windowed index: positive entries clipped to a fixed value window.
//!
//! Entries are the non-empty intersections of the backing ranges with the
//! window, keyed by the clipped lower bound. Only the one backing range that
//! straddles the window start changes its key; clipped keys therefore stay in
//! backing order and scans terminate as soon as a backing range starts past
//! the window.

use crate::map::{void_window, CutMap, Entry};
use spanset_core::cut::Cut;
use spanset_core::range::Range;
use std::cmp::{max, min};

/// A positive index restricted to a value window.
#[derive(Clone, Copy, Debug)]
pub struct ClipIndex<T: Ord + Clone, M> {
    positive: M,
    window: Range<T>,
}

impl<T: Ord + Clone, M> ClipIndex<T, M> {
    pub(crate) fn new(positive: M, window: Range<T>) -> Self {
        Self { positive, window }
    }
}

impl<T: Ord + Clone, M: CutMap<T>> CutMap<T> for ClipIndex<T, M> {
    type Entries = ClipEntries<T, M::Entries>;

    fn entries(&self, keys: &Range<Cut<T>>) -> Self::Entries {
        if keys.is_empty() || self.window.is_empty() {
            return ClipEntries::exhausted(self.positive.entries(&void_window()));
        }
        let seek = match keys.lower_bound() {
            Cut::BelowAll => self.window.lower_bound().clone(),
            Cut::BelowValue(from) | Cut::AboveValue(from) => {
                max(from, self.window.lower_bound()).clone()
            }
            Cut::AboveAll => {
                return ClipEntries::exhausted(self.positive.entries(&void_window()));
            }
        };
        // Start at the range straddling the seek cut, if any.
        let from = match self.positive.lower_entry(&seek) {
            Some((key, _)) => key,
            None => seek,
        };
        let inner = self.positive.entries(&Range::at_least(from));
        ClipEntries::new(inner, self.window.clone(), keys.clone(), false)
    }

    fn entries_desc(&self, keys: &Range<Cut<T>>) -> Self::Entries {
        if keys.is_empty() || self.window.is_empty() {
            return ClipEntries::exhausted(self.positive.entries(&void_window()));
        }
        let seek = match keys.upper_bound() {
            Cut::AboveAll => self.window.upper_bound().clone(),
            Cut::AboveValue(to) | Cut::BelowValue(to) => {
                min(to, self.window.upper_bound()).clone()
            }
            Cut::BelowAll => {
                return ClipEntries::exhausted(self.positive.entries(&void_window()));
            }
        };
        let inner = self.positive.entries_desc(&Range::at_most(seek));
        ClipEntries::new(inner, self.window.clone(), keys.clone(), true)
    }
}

/// Lazy clipped stream over a positive entry stream.
pub struct ClipEntries<T: Ord + Clone, I> {
    inner: I,
    window: Range<T>,
    keys: Range<Cut<T>>,
    descending: bool,
    finished: bool,
}

impl<T: Ord + Clone, I> ClipEntries<T, I> {
    fn new(inner: I, window: Range<T>, keys: Range<Cut<T>>, descending: bool) -> Self {
        Self {
            inner,
            window,
            keys,
            descending,
            finished: false,
        }
    }

    fn exhausted(inner: I) -> Self {
        Self {
            inner,
            window: Range::from_cuts(Cut::AboveAll, Cut::AboveAll),
            keys: void_window(),
            descending: false,
            finished: true,
        }
    }

    /// Whether the scan has moved entirely past the value window.
    fn past_value_window(&self, range: &Range<T>) -> bool {
        if self.descending {
            range.upper_bound() < self.window.lower_bound()
        } else {
            range.lower_bound() > self.window.upper_bound()
        }
    }

    /// Whether `key` lies beyond the key window in the direction of travel.
    fn past_key_window(&self, key: &Cut<T>) -> bool {
        if self.descending {
            !self.keys.lower_bound().is_less_than(key)
        } else {
            self.keys.upper_bound().is_less_than(key)
        }
    }
}

impl<T: Ord + Clone, I: Iterator<Item = Entry<T>>> Iterator for ClipEntries<T, I> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        while !self.finished {
            let Some((_, range)) = self.inner.next() else {
                self.finished = true;
                break;
            };
            if self.past_value_window(&range) {
                self.finished = true;
                break;
            }
            let Some(clipped) = range.intersection(&self.window) else {
                continue;
            };
            if clipped.is_empty() {
                continue;
            }
            let key = clipped.lower_bound().clone();
            if self.keys.contains(&key) {
                return Some((key, clipped));
            }
            if self.past_key_window(&key) {
                self.finished = true;
            }
        }
        None
    }
}
