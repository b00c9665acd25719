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

//! Error types for the fallible range-set operations.

use spanset_core::range::Range;
use std::fmt;

/// A range offered to a windowed view was not enclosed by its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideWindowError<T> {
    range: Range<T>,
    window: Range<T>,
}

impl<T> OutsideWindowError<T> {
    pub(crate) fn new(range: Range<T>, window: Range<T>) -> Self {
        Self { range, window }
    }

    /// The rejected range.
    pub fn range(&self) -> &Range<T> {
        &self.range
    }

    /// The window of the view that rejected it.
    pub fn window(&self) -> &Range<T> {
        &self.window
    }
}

impl<T: fmt::Display> fmt::Display for OutsideWindowError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range {} lies outside the view window {}",
            self.range, self.window
        )
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for OutsideWindowError<T> {}
