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

//! The complement index: the gaps between the entries of a positive index.
//!
//! Nothing is materialized. A gap entry is produced from a positive entry and
//! the upper bound of its predecessor (ascending) or the lower bound of its
//! successor (descending); the neighbor on the seeked side is resolved with a
//! single probe before iteration starts. Interior gaps are never empty by the
//! disjointness of the positive entries, so only the leading gap (down to the
//! start of the line), the trailing gap (up to its end), and the whole-line
//! gap of an empty positive index need emptiness checks.

use crate::map::{void_window, CutMap, Entry};
use spanset_core::cut::Cut;
use spanset_core::range::Range;

/// The gaps of a positive index, keyed by gap lower bound.
#[derive(Clone, Copy, Debug)]
pub struct GapIndex<M> {
    positive: M,
}

impl<M> GapIndex<M> {
    pub(crate) fn new(positive: M) -> Self {
        Self { positive }
    }
}

impl<T: Ord + Clone, M: CutMap<T>> CutMap<T> for GapIndex<M> {
    type Entries = GapEntries<T, M::Entries>;

    fn entries(&self, window: &Range<Cut<T>>) -> Self::Entries {
        if window.is_empty() {
            return GapEntries::exhausted(self.positive.entries(&void_window()));
        }
        let (neighbor, inner) = match window.lower_bound() {
            Cut::BelowAll => (None, self.positive.iter()),
            Cut::BelowValue(from) | Cut::AboveValue(from) => (
                // The predecessor's upper bound opens the first candidate gap.
                self.positive
                    .lower_entry(from)
                    .map(|(_, range)| range.upper_bound().clone()),
                self.positive.entries(&Range::at_least(from.clone())),
            ),
            Cut::AboveAll => {
                return GapEntries::exhausted(self.positive.entries(&void_window()));
            }
        };
        GapEntries::new(inner, window.clone(), neighbor, false)
    }

    fn entries_desc(&self, window: &Range<Cut<T>>) -> Self::Entries {
        if window.is_empty() {
            return GapEntries::exhausted(self.positive.entries(&void_window()));
        }
        let (neighbor, inner) = match window.upper_bound() {
            Cut::AboveAll => (None, self.positive.iter_desc()),
            Cut::AboveValue(to) | Cut::BelowValue(to) => {
                // Find the first positive entry ending strictly above `to`;
                // its lower bound closes the first candidate gap.
                let successor = match self.positive.floor_entry(to) {
                    Some((key, range)) if *range.upper_bound() > *to => Some((key, range)),
                    _ => self.positive.higher_entry(to),
                };
                match successor {
                    Some((key, range)) => (
                        Some(range.lower_bound().clone()),
                        self.positive.entries_desc(&Range::less_than(key)),
                    ),
                    None => (None, self.positive.iter_desc()),
                }
            }
            Cut::BelowAll => {
                return GapEntries::exhausted(self.positive.entries(&void_window()));
            }
        };
        GapEntries::new(inner, window.clone(), neighbor, true)
    }
}

/// Lazy gap stream over a positive entry stream.
pub struct GapEntries<T: Ord + Clone, I> {
    inner: I,
    window: Range<Cut<T>>,
    /// Ascending: the upper bound of the previous positive entry.
    /// Descending: the lower bound of the next positive entry.
    /// `None` before the first (resp. after the last) positive entry.
    neighbor: Option<Cut<T>>,
    descending: bool,
    finished: bool,
}

impl<T: Ord + Clone, I> GapEntries<T, I> {
    fn new(inner: I, window: Range<Cut<T>>, neighbor: Option<Cut<T>>, descending: bool) -> Self {
        Self {
            inner,
            window,
            neighbor,
            descending,
            finished: false,
        }
    }

    fn exhausted(inner: I) -> Self {
        Self {
            inner,
            window: void_window(),
            neighbor: None,
            descending: false,
            finished: true,
        }
    }

    /// Whether `key` lies beyond the window in the direction of travel.
    fn past_window(&self, key: &Cut<T>) -> bool {
        if self.descending {
            !self.window.lower_bound().is_less_than(key)
        } else {
            self.window.upper_bound().is_less_than(key)
        }
    }
}

impl<T: Ord + Clone, I: Iterator<Item = Entry<T>>> Iterator for GapEntries<T, I> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        while !self.finished {
            let gap = match self.inner.next() {
                Some((_, range)) => {
                    if self.descending {
                        let upper = self
                            .neighbor
                            .replace(range.lower_bound().clone())
                            .unwrap_or(Cut::AboveAll);
                        Range::from_cuts(range.upper_bound().clone(), upper)
                    } else {
                        let lower = self
                            .neighbor
                            .replace(range.upper_bound().clone())
                            .unwrap_or(Cut::BelowAll);
                        Range::from_cuts(lower, range.lower_bound().clone())
                    }
                }
                None => {
                    // The boundary gap; covers the whole line when the
                    // positive index was empty.
                    self.finished = true;
                    if self.descending {
                        let upper = self.neighbor.take().unwrap_or(Cut::AboveAll);
                        Range::from_cuts(Cut::BelowAll, upper)
                    } else {
                        let lower = self.neighbor.take().unwrap_or(Cut::BelowAll);
                        Range::from_cuts(lower, Cut::AboveAll)
                    }
                }
            };
            if gap.is_empty() {
                continue;
            }
            let key = gap.lower_bound().clone();
            if self.window.contains(&key) {
                return Some((key, gap));
            }
            // Keys run monotonically, so the first key past the far edge of
            // the window ends the stream.
            if self.past_window(&key) {
                self.finished = true;
            }
        }
        None
    }
}
