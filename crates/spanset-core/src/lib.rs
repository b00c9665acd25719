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

//! # Spanset Core
//!
//! Value-level interval algebra over arbitrary totally ordered domains. This
//! crate holds the primitives that the `spanset-tree` container is built on;
//! everything here is a plain value type with constant-time comparisons and no
//! dependencies.
//!
//! ## Modules
//!
//! - `cut`: The `Cut<T>` endpoint type, a four-variant total order that is
//!   strictly finer than the element order. Cuts sit *between* domain values
//!   (or outside all of them), which is what lets open, closed, and unbounded
//!   interval endpoints compare through a single ordering with no successor
//!   or predecessor function on the element type.
//! - `range`: The `Range<T>` interval type as an ordered pair of cuts, with
//!   the full constructor surface (`open`, `closed`, mixed, unbounded,
//!   singleton), predicates (`contains`, `encloses`, `is_connected`), and set
//!   operations (`intersection`, `span`, `gap`).
//!
//! ## Purpose
//!
//! Interval containers routinely hinge on endpoint edge cases: touching
//! half-open intervals, singletons, empty degenerate ranges. Expressing every
//! bound as a cut removes the case analysis from the containers entirely and
//! keeps it in one small, exhaustively tested algebra.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cut;
pub mod range;
