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

//! # Ranges
//!
//! A `Range<T>` is an interval over a totally ordered domain, stored as an
//! ordered pair of [`Cut`]s with `lower <= upper`. Every combination of open,
//! closed, and unbounded endpoints lowers to the same representation, so the
//! predicates and set operations are single cut comparisons with no bound-type
//! case analysis.
//!
//! A range is *empty* exactly when its two cuts coincide, which happens only
//! for the degenerate half-open forms such as `closed_open(v, v)`. Two ranges
//! are *connected* when their cut intervals meet or overlap; touching
//! half-open ranges like `[1, 4]` and `(4, 6)` are connected because they
//! share the cut just above `4`.
//!
//! ## Usage
//!
//! ```rust
//! use spanset_core::range::Range;
//!
//! let a = Range::closed(1, 4);
//! let b = Range::open(4, 6);
//! assert!(a.is_connected(&b));
//! assert_eq!(a.span(&b), Range::closed_open(1, 6));
//! assert!(a.intersection(&b).unwrap().is_empty());
//! ```

use crate::cut::Cut;
use std::cmp::{max, min};
use std::fmt;

/// Whether an interval endpoint includes its anchor value.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::range::{BoundType, Range};
///
/// let range = Range::range(1, BoundType::Closed, 4, BoundType::Open);
/// assert_eq!(range, Range::closed_open(1, 4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BoundType {
    /// The endpoint value is excluded.
    Open,
    /// The endpoint value is included.
    Closed,
}

/// An interval over `T`, possibly unbounded on either side, possibly empty.
///
/// # Invariants
///
/// The lower cut never exceeds the upper cut; constructors enforce this.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::range::Range;
///
/// let range = Range::closed_open(1, 6);
/// assert!(range.contains(&1));
/// assert!(range.contains(&5));
/// assert!(!range.contains(&6));
/// assert_eq!(format!("{range}"), "[1, 6)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: Cut<T>,
    upper: Cut<T>,
}

impl<T: Ord> Range<T> {
    /// Creates a range directly from its two cuts.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::cut::Cut;
    /// # use spanset_core::range::Range;
    ///
    /// let range = Range::from_cuts(Cut::BelowValue(1), Cut::AboveValue(4));
    /// assert_eq!(range, Range::closed(1, 4));
    /// ```
    #[inline]
    pub fn from_cuts(lower: Cut<T>, upper: Cut<T>) -> Self {
        assert!(
            lower <= upper,
            "Invalid range: lower bound must not exceed upper bound"
        );
        Self { lower, upper }
    }

    /// Creates a range from two cuts if they are ordered.
    ///
    /// Returns `None` if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::cut::Cut;
    /// # use spanset_core::range::Range;
    ///
    /// assert!(Range::try_from_cuts(Cut::BelowValue(1), Cut::BelowValue(4)).is_some());
    /// assert!(Range::try_from_cuts(Cut::BelowValue(4), Cut::BelowValue(1)).is_none());
    /// ```
    #[inline]
    pub fn try_from_cuts(lower: Cut<T>, upper: Cut<T>) -> Option<Self> {
        if lower <= upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// The range containing every value: `(-∞, +∞)`.
    #[inline]
    pub fn all() -> Self {
        Self {
            lower: Cut::BelowAll,
            upper: Cut::AboveAll,
        }
    }

    /// The closed range `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let range = Range::closed(1, 4);
    /// assert!(range.contains(&1) && range.contains(&4));
    /// ```
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::from_cuts(Cut::BelowValue(lower), Cut::AboveValue(upper))
    }

    /// The open range `(lower, upper)`.
    ///
    /// `open(v, v)` is the canonical empty range anchored at `v`; it contains
    /// nothing and coalesces away inside any range set.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let range = Range::open(1, 4);
    /// assert!(!range.contains(&1) && !range.contains(&4));
    /// assert!(range.contains(&2));
    /// assert!(Range::open(3, 3).is_empty());
    /// ```
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        if lower == upper {
            Self {
                lower: Cut::AboveValue(lower),
                upper: Cut::AboveValue(upper),
            }
        } else {
            Self::from_cuts(Cut::AboveValue(lower), Cut::BelowValue(upper))
        }
    }

    /// The half-open range `[lower, upper)`; empty when `lower == upper`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::from_cuts(Cut::BelowValue(lower), Cut::BelowValue(upper))
    }

    /// The half-open range `(lower, upper]`; empty when `lower == upper`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::from_cuts(Cut::AboveValue(lower), Cut::AboveValue(upper))
    }

    /// The range with the given endpoints and bound types.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::{BoundType, Range};
    ///
    /// assert_eq!(
    ///     Range::range(1, BoundType::Open, 4, BoundType::Closed),
    ///     Range::open_closed(1, 4),
    /// );
    /// ```
    #[inline]
    pub fn range(lower: T, lower_type: BoundType, upper: T, upper_type: BoundType) -> Self {
        match (lower_type, upper_type) {
            (BoundType::Closed, BoundType::Closed) => Self::closed(lower, upper),
            (BoundType::Closed, BoundType::Open) => Self::closed_open(lower, upper),
            (BoundType::Open, BoundType::Closed) => Self::open_closed(lower, upper),
            (BoundType::Open, BoundType::Open) => Self::open(lower, upper),
        }
    }

    /// All values strictly less than `upper`: `(-∞, upper)`.
    #[inline]
    pub fn less_than(upper: T) -> Self {
        Self {
            lower: Cut::BelowAll,
            upper: Cut::BelowValue(upper),
        }
    }

    /// All values up to and including `upper`: `(-∞, upper]`.
    #[inline]
    pub fn at_most(upper: T) -> Self {
        Self {
            lower: Cut::BelowAll,
            upper: Cut::AboveValue(upper),
        }
    }

    /// All values strictly greater than `lower`: `(lower, +∞)`.
    #[inline]
    pub fn greater_than(lower: T) -> Self {
        Self {
            lower: Cut::AboveValue(lower),
            upper: Cut::AboveAll,
        }
    }

    /// All values from `lower` upward: `[lower, +∞)`.
    #[inline]
    pub fn at_least(lower: T) -> Self {
        Self {
            lower: Cut::BelowValue(lower),
            upper: Cut::AboveAll,
        }
    }

    /// The unbounded-above range starting at `lower` with the given bound type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::{BoundType, Range};
    ///
    /// assert_eq!(Range::down_to(3, BoundType::Closed), Range::at_least(3));
    /// assert_eq!(Range::down_to(3, BoundType::Open), Range::greater_than(3));
    /// ```
    #[inline]
    pub fn down_to(lower: T, bound_type: BoundType) -> Self {
        match bound_type {
            BoundType::Closed => Self::at_least(lower),
            BoundType::Open => Self::greater_than(lower),
        }
    }

    /// The unbounded-below range ending at `upper` with the given bound type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::{BoundType, Range};
    ///
    /// assert_eq!(Range::up_to(3, BoundType::Closed), Range::at_most(3));
    /// assert_eq!(Range::up_to(3, BoundType::Open), Range::less_than(3));
    /// ```
    #[inline]
    pub fn up_to(upper: T, bound_type: BoundType) -> Self {
        match bound_type {
            BoundType::Closed => Self::at_most(upper),
            BoundType::Open => Self::less_than(upper),
        }
    }

    /// The lower cut of this range.
    #[inline]
    pub fn lower_bound(&self) -> &Cut<T> {
        &self.lower
    }

    /// The upper cut of this range.
    #[inline]
    pub fn upper_bound(&self) -> &Cut<T> {
        &self.upper
    }

    /// Consumes the range and returns its two cuts.
    #[inline]
    pub fn into_bounds(self) -> (Cut<T>, Cut<T>) {
        (self.lower, self.upper)
    }

    /// Whether this range is bounded below.
    #[inline]
    pub fn has_lower_bound(&self) -> bool {
        self.lower != Cut::BelowAll
    }

    /// Whether this range is bounded above.
    #[inline]
    pub fn has_upper_bound(&self) -> bool {
        self.upper != Cut::AboveAll
    }

    /// The lower endpoint value, if the range is bounded below.
    #[inline]
    pub fn lower_endpoint(&self) -> Option<&T> {
        self.lower.value()
    }

    /// The upper endpoint value, if the range is bounded above.
    #[inline]
    pub fn upper_endpoint(&self) -> Option<&T> {
        self.upper.value()
    }

    /// The lower bound type, if the range is bounded below.
    #[inline]
    pub fn lower_bound_type(&self) -> Option<BoundType> {
        match self.lower {
            Cut::BelowValue(_) => Some(BoundType::Closed),
            Cut::AboveValue(_) => Some(BoundType::Open),
            Cut::BelowAll | Cut::AboveAll => None,
        }
    }

    /// The upper bound type, if the range is bounded above.
    #[inline]
    pub fn upper_bound_type(&self) -> Option<BoundType> {
        match self.upper {
            Cut::AboveValue(_) => Some(BoundType::Closed),
            Cut::BelowValue(_) => Some(BoundType::Open),
            Cut::BelowAll | Cut::AboveAll => None,
        }
    }

    /// Returns `true` if the range contains no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// assert!(Range::closed_open(3, 3).is_empty());
    /// assert!(Range::open_closed(3, 3).is_empty());
    /// assert!(!Range::singleton(3).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns `true` if `value` lies inside the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let range = Range::open_closed(1, 4);
    /// assert!(!range.contains(&1));
    /// assert!(range.contains(&4));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.lower.is_less_than(value) && !self.upper.is_less_than(value)
    }

    /// Returns `true` if every value of `other` lies inside this range.
    ///
    /// An empty `other` is enclosed whenever its position lies inside the
    /// bounds of this range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let range = Range::closed(1, 6);
    /// assert!(range.encloses(&Range::open(2, 4)));
    /// assert!(range.encloses(&Range::closed(1, 6)));
    /// assert!(!range.encloses(&Range::closed(1, 7)));
    /// ```
    #[inline]
    pub fn encloses(&self, other: &Range<T>) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Returns `true` if the union of the two ranges is itself a range.
    ///
    /// Connected ranges either overlap or touch at a shared cut, so touching
    /// half-open ranges count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// assert!(Range::closed(1, 4).is_connected(&Range::open(4, 6)));
    /// assert!(Range::closed(1, 4).is_connected(&Range::closed(2, 6)));
    /// assert!(!Range::closed(1, 4).is_connected(&Range::closed(5, 6)));
    /// ```
    #[inline]
    pub fn is_connected(&self, other: &Range<T>) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl<T: Ord + Clone> Range<T> {
    /// The range containing exactly one value: `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let range = Range::singleton(5);
    /// assert!(range.contains(&5));
    /// assert!(!range.contains(&4));
    /// ```
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self::closed(value.clone(), value)
    }

    /// The largest range enclosed by both ranges, when they are connected.
    ///
    /// The result can be empty when the ranges merely touch at a shared cut.
    /// Returns `None` when the ranges are not connected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let a = Range::closed(1, 4);
    /// assert_eq!(a.intersection(&Range::open(2, 6)), Some(Range::open_closed(2, 4)));
    /// assert!(a.intersection(&Range::open(4, 6)).unwrap().is_empty());
    /// assert_eq!(a.intersection(&Range::closed(5, 6)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Range<T>) -> Option<Range<T>> {
        if !self.is_connected(other) {
            return None;
        }
        Some(Range {
            lower: max(&self.lower, &other.lower).clone(),
            upper: min(&self.upper, &other.upper).clone(),
        })
    }

    /// The smallest range enclosing both ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let span = Range::closed(1, 2).span(&Range::open(5, 6));
    /// assert_eq!(span, Range::closed_open(1, 6));
    /// ```
    #[inline]
    pub fn span(&self, other: &Range<T>) -> Range<T> {
        Range {
            lower: min(&self.lower, &other.lower).clone(),
            upper: max(&self.upper, &other.upper).clone(),
        }
    }

    /// The maximal range lying strictly between two ranges that are not
    /// connected.
    ///
    /// Returns `None` when the ranges are connected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::range::Range;
    ///
    /// let gap = Range::closed(1, 2).gap(&Range::closed(5, 6)).unwrap();
    /// assert_eq!(gap, Range::open(2, 5));
    /// assert!(Range::closed(1, 4).gap(&Range::open(4, 6)).is_none());
    /// ```
    #[inline]
    pub fn gap(&self, other: &Range<T>) -> Option<Range<T>> {
        if self.upper < other.lower {
            Some(Range {
                lower: self.upper.clone(),
                upper: other.lower.clone(),
            })
        } else if other.upper < self.lower {
            Some(Range {
                lower: other.upper.clone(),
                upper: self.lower.clone(),
            })
        } else {
            None
        }
    }
}

fn fmt_bounds<T>(
    range: &Range<T>,
    f: &mut fmt::Formatter<'_>,
    write_value: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    match &range.lower {
        Cut::BelowAll => write!(f, "(-\u{221e}")?,
        Cut::BelowValue(value) => {
            write!(f, "[")?;
            write_value(f, value)?;
        }
        Cut::AboveValue(value) => {
            write!(f, "(")?;
            write_value(f, value)?;
        }
        Cut::AboveAll => write!(f, "(+\u{221e}")?,
    }
    write!(f, ", ")?;
    match &range.upper {
        Cut::BelowAll => write!(f, "-\u{221e})"),
        Cut::BelowValue(value) => {
            write_value(f, value)?;
            write!(f, ")")
        }
        Cut::AboveValue(value) => {
            write_value(f, value)?;
            write!(f, "]")
        }
        Cut::AboveAll => write!(f, "+\u{221e})"),
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bounds(self, f, |f, value| write!(f, "{value}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bounds(self, f, |f, value| write!(f, "{value:?}"))
    }
}
