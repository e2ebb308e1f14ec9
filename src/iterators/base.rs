// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::cursor::{Cursor1, Cursor2};
use crate::dimension::Extent;
use crate::{Ix, Ixs};

/// Raw walker over a 1-D layout.
///
/// Yields element pointers; it is the safe wrappers (`Iter`, `IterMut`)
/// that attach a lifetime and dereference them.
pub struct Baseiter1<A> {
    head: Cursor1<A>,
    len: Ix,
}

impl<A> Baseiter1<A> {
    #[inline]
    pub(crate) fn new(ptr: *mut A, axis: Extent) -> Self {
        Baseiter1 {
            head: Cursor1::new(ptr, axis.stride),
            len: axis.len,
        }
    }

    #[inline]
    fn from_cursor(head: Cursor1<A>, len: Ix) -> Self {
        Baseiter1 { head, len }
    }
}

impl<A> Iterator for Baseiter1<A> {
    type Item = *mut A;

    #[inline]
    fn next(&mut self) -> Option<*mut A> {
        if self.len == 0 {
            return None;
        }
        let p = self.head.as_ptr();
        self.head.step();
        self.len -= 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, *mut A) -> Acc,
    {
        let mut accum = init;
        for k in 0..self.len {
            accum = g(accum, self.head.at(k as Ixs));
        }
        accum
    }
}

impl<A> DoubleEndedIterator for Baseiter1<A> {
    #[inline]
    fn next_back(&mut self) -> Option<*mut A> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.head.at(self.len as Ixs))
    }
}

impl<A> ExactSizeIterator for Baseiter1<A> {}

impl<A> Clone for Baseiter1<A> {
    fn clone(&self) -> Self {
        Baseiter1 {
            head: self.head,
            len: self.len,
        }
    }
}

/// Raw walker over a 2-D layout: rows in order, each row front to back.
pub struct Baseiter2<A> {
    rows: Cursor2<A>,
    rows_left: Ix,
    row: Baseiter1<A>,
    left: usize,
}

impl<A> Baseiter2<A> {
    #[inline]
    pub(crate) fn new(ptr: *mut A, outer: Extent, inner: Extent) -> Self {
        let left = outer.len * inner.len;
        Baseiter2 {
            rows: Cursor2::new(ptr, outer.stride, inner),
            rows_left: if left == 0 { 0 } else { outer.len },
            row: Baseiter1::from_cursor(Cursor1::new(ptr, inner.stride), 0),
            left,
        }
    }
}

impl<A> Iterator for Baseiter2<A> {
    type Item = *mut A;

    #[inline]
    fn next(&mut self) -> Option<*mut A> {
        loop {
            if let Some(p) = self.row.next() {
                self.left -= 1;
                return Some(p);
            }
            if self.rows_left == 0 {
                return None;
            }
            self.row = Baseiter1::from_cursor(self.rows.begin(), self.rows.inner_len());
            self.rows.step();
            self.rows_left -= 1;
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, *mut A) -> Acc,
    {
        let mut accum = self.row.fold(init, &mut g);
        let mut rows = self.rows;
        for _ in 0..self.rows_left {
            accum = Baseiter1::from_cursor(rows.begin(), rows.inner_len()).fold(accum, &mut g);
            rows.step();
        }
        accum
    }
}

impl<A> ExactSizeIterator for Baseiter2<A> {}

impl<A> Clone for Baseiter2<A> {
    fn clone(&self) -> Self {
        Baseiter2 {
            rows: self.rows,
            rows_left: self.rows_left,
            row: self.row.clone(),
            left: self.left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_rows_in_order() {
        let mut data = [0, 1, 2, 3, 4, 5];
        let base = data.as_mut_ptr();
        let it = Baseiter2::new(base, Extent::new(3, 2), Extent::new(1, 3));
        assert_eq!(it.len(), 6);
        let got: Vec<i32> = it.map(|p| unsafe { *p }).collect();
        assert_eq!(got, [0, 1, 2, 3, 4, 5]);

        // column-major walk of the same memory
        let it = Baseiter2::new(base, Extent::new(1, 3), Extent::new(3, 2));
        let got = it.fold(Vec::new(), |mut acc, p| {
            acc.push(unsafe { *p });
            acc
        });
        assert_eq!(got, [0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn empty_inner_axis_yields_nothing() {
        let mut data = [0; 4];
        let mut it = Baseiter2::new(data.as_mut_ptr(), Extent::new(1, 4), Extent::new(1, 0));
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn zero_sized_rows_are_counted() {
        let mut data = [(); 6];
        let mut it = Baseiter2::new(data.as_mut_ptr(), Extent::new(3, 2), Extent::new(1, 3));
        it.next();
        assert_eq!(it.clone().count(), 5);
        assert_eq!(it.fold(0, |n, _| n + 1), 5);
    }

    #[test]
    fn back_and_forth_1d() {
        let mut data = [0, 1, 2, 3, 4];
        let base = data.as_mut_ptr().wrapping_add(4);
        let mut it = Baseiter1::new(base, Extent::new(-2, 3));
        assert_eq!(it.next_back().map(|p| unsafe { *p }), Some(0));
        assert_eq!(it.next().map(|p| unsafe { *p }), Some(4));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next().map(|p| unsafe { *p }), Some(2));
        assert!(it.next().is_none());
    }
}
