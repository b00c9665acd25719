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

//! The windowed view: the backing set restricted to a fixed window.
//!
//! Values outside the window do not exist as far as the view is concerned:
//! queries clip their answers to the window, removals clip their argument,
//! and the complement of the view is taken within the window rather than over
//! the whole line. Adding a range that is not enclosed by the window is an
//! error, never a silent clip.

use crate::error::OutsideWindowError;
use crate::map::clip::ClipIndex;
use crate::set::{RangeSet, RangeSetMut};
use crate::view::complement::Complement;
use spanset_core::cut::Cut;
use spanset_core::range::Range;

/// A live view of the backing set restricted to a window.
///
/// # Examples
///
/// ```rust
/// use spanset_core::range::Range;
/// use spanset_tree::set::{RangeSet, RangeSetMut, TreeRangeSet};
///
/// let mut set = TreeRangeSet::new();
/// set.add(Range::closed(1, 4));
/// set.add(Range::closed(7, 9));
///
/// let view = set.sub_range_set(Range::closed(3, 8));
/// assert_eq!(
///     view.ranges().collect::<Vec<_>>(),
///     [Range::closed(3, 4), Range::closed(7, 8)],
/// );
/// assert!(view.contains(&3) && !view.contains(&1));
///
/// // The complement is taken within the window.
/// assert_eq!(
///     view.complement().ranges().collect::<Vec<_>>(),
///     [Range::open(4, 7)],
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SubRangeSet<T: Ord + Clone, S> {
    backing: S,
    window: Range<T>,
}

impl<T: Ord + Clone, S> SubRangeSet<T, S> {
    pub(crate) fn new(backing: S, window: Range<T>) -> Self {
        Self { backing, window }
    }

    /// The window this view is restricted to.
    pub fn window(&self) -> &Range<T> {
        &self.window
    }
}

impl<T: Ord + Clone, S: RangeSet<T>> SubRangeSet<T, S> {
    /// The complement of this view within its window.
    pub fn complement(self) -> SubRangeSet<T, Complement<S>> {
        SubRangeSet {
            backing: Complement::new(self.backing),
            window: self.window,
        }
    }

    /// This view restricted further to `window`.
    ///
    /// The windows intersect; a window disconnected from the current one
    /// produces an empty view.
    pub fn sub_range_set(self, window: Range<T>) -> SubRangeSet<T, S> {
        let window = match self.window.intersection(&window) {
            Some(intersection) => intersection,
            None => collapsed(&self.window),
        };
        SubRangeSet {
            backing: self.backing,
            window,
        }
    }
}

impl<T: Ord + Clone, S: RangeSetMut<T>> SubRangeSet<T, S> {
    /// Adds `range` to the backing set if the window encloses it.
    ///
    /// This is the non-panicking sibling of [`RangeSetMut::add`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spanset_core::range::Range;
    /// use spanset_tree::set::{RangeSet, RangeSetMut, TreeRangeSet};
    ///
    /// let mut set = TreeRangeSet::new();
    /// let mut view = set.sub_range_set_mut(Range::closed(0, 10));
    /// assert!(view.try_add(Range::closed(1, 4)).is_ok());
    /// assert!(view.try_add(Range::closed(8, 12)).is_err());
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [Range::closed(1, 4)]);
    /// ```
    pub fn try_add(&mut self, range: Range<T>) -> Result<(), OutsideWindowError<T>> {
        if self.window.encloses(&range) {
            self.backing.add(range);
            Ok(())
        } else {
            Err(OutsideWindowError::new(range, self.window.clone()))
        }
    }
}

impl<T: Ord + Clone, S: RangeSet<T>> RangeSet<T> for SubRangeSet<T, S> {
    type Index<'a>
        = ClipIndex<T, S::Index<'a>>
    where
        Self: 'a;

    fn ranges_by_lower_bound(&self) -> Self::Index<'_> {
        ClipIndex::new(self.backing.ranges_by_lower_bound(), self.window.clone())
    }
}

impl<T: Ord + Clone, S: RangeSetMut<T>> RangeSetMut<T> for SubRangeSet<T, S> {
    /// Adds `range` to the backing set.
    ///
    /// # Panics
    ///
    /// Panics if the window does not enclose `range`; a partly-outside range
    /// is rejected, not clipped.
    fn add(&mut self, range: Range<T>) {
        assert!(
            self.window.encloses(&range),
            "Range outside the view window cannot be added"
        );
        self.backing.add(range);
    }

    fn remove(&mut self, range: Range<T>) {
        if let Some(clipped) = range.intersection(&self.window) {
            if !clipped.is_empty() {
                self.backing.remove(clipped);
            }
        }
    }
}

/// An empty window at the edge of `window`, for disconnected restrictions.
fn collapsed<T: Ord + Clone>(window: &Range<T>) -> Range<T> {
    let cut = match window.lower_bound() {
        Cut::BelowAll => window.upper_bound(),
        bound => bound,
    };
    Range::from_cuts(cut.clone(), cut.clone())
}
