// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Ix, Ixs, View1, ViewMut1};

impl<'a, A> View1<'a, A> {
    /// Split the view at `index`: the first part holds the elements before
    /// it, the second the rest.
    ///
    /// **Panics** if `index` is greater than the length.
    ///
    /// ```
    /// use ndstride::View1;
    ///
    /// let data = [1, 2, 3, 4, 5];
    /// let v = View1::from(&data[..]).reverse();
    /// let (a, b) = v.split_at(2);
    /// assert_eq!(a.to_vec(), vec![5, 4]);
    /// assert_eq!(b.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn split_at(self, index: Ix) -> (Self, Self) {
        let len = self.len();
        assert!(index <= len, "split index {} out of bounds for length {}", index, len);
        unsafe {
            (
                self.slice_unchecked(0, index),
                self.slice_unchecked(index as Ixs, len - index),
            )
        }
    }
}

impl<'a, A> ViewMut1<'a, A> {
    /// Split the view at `index` into two disjoint writable views.
    ///
    /// **Panics** if `index` is greater than the length.
    pub fn split_at(self, index: Ix) -> (Self, Self) {
        let len = self.len();
        assert!(index <= len, "split index {} out of bounds for length {}", index, len);
        let (ptr, dim) = (self.ptr.as_ptr(), self.dim);
        // The two halves cover disjoint index ranges of a non-overlapping view.
        unsafe {
            let head = ViewMut1::new_(ptr, dim);
            let tail = ViewMut1::new_(ptr, dim);
            (head.slice_unchecked(0, index), tail.slice_unchecked(index as Ixs, len - index))
        }
    }
}
