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

//! # Spanset Tree
//!
//! A mutable set of values represented as a finite union of disjoint,
//! maximally coalesced ranges, stored in a balanced tree keyed by lower
//! bound. Alongside the concrete [`set::TreeRangeSet`], the crate exposes two
//! *live* views that satisfy the same contract recursively without copying
//! any data: the complement of a set and the restriction of a set to a fixed
//! window.
//!
//! ## Modules
//!
//! - `map`: The navigable index layer. `CutMap` is an ordered map from
//!   endpoint cuts to ranges with predecessor/successor probes and
//!   lazily-windowed iteration in both directions; the four implementations
//!   cover the primary by-lower storage, the by-upper re-keying, the derived
//!   complement gaps, and window clipping.
//! - `set`: The `RangeSet`/`RangeSetMut` contracts, written once against the
//!   index layer, and the `TreeRangeSet` container with its coalescing
//!   `add` and splitting `remove`.
//! - `view`: The `Complement` and `SubRangeSet` adapters.
//! - `error`: The recoverable error surface.
//!
//! ## Usage
//!
//! ```rust
//! use spanset_core::range::Range;
//! use spanset_tree::set::{RangeSet, RangeSetMut, TreeRangeSet};
//!
//! let mut set = TreeRangeSet::new();
//! set.add(Range::closed(1, 4));
//! set.add(Range::open(4, 6));
//! assert_eq!(set.ranges().collect::<Vec<_>>(), [Range::closed_open(1, 6)]);
//!
//! set.remove(Range::open(2, 3));
//! assert!(set.contains(&2) && set.contains(&3));
//! assert!(!set.encloses(&Range::closed(2, 3)));
//! ```

pub mod error;
pub mod map;
pub mod set;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;
