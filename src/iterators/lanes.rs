// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::marker::PhantomData;

use super::Cursor2;
use crate::{Ix, Ix1, View1, View2, ViewMut1, ViewMut2};

/// An iterator over the rows of a 2-D view, each a 1-D view.
///
/// See [`.rows()`](crate::ViewBase::rows) for more information.
pub struct Lanes<'a, A> {
    rows: Cursor2<A>,
    left: Ix,
    life: PhantomData<&'a A>,
}

impl<'a, A> Lanes<'a, A> {
    pub(crate) fn new(v: View2<'a, A>) -> Self {
        let [r, c] = *v.dim.axes();
        Lanes {
            rows: Cursor2::new(v.ptr.as_ptr(), r.stride, c),
            left: r.len,
            life: PhantomData,
        }
    }

    #[inline]
    unsafe fn lane(&self, ptr: *mut A) -> View1<'a, A> {
        let inner = self.rows.inner();
        View1::new_(ptr, Ix1::strided(inner.len, inner.stride))
    }
}

impl<'a, A> Iterator for Lanes<'a, A> {
    type Item = View1<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let lane = unsafe { self.lane(self.rows.as_ptr()) };
        self.rows.step();
        self.left -= 1;
        Some(lane)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, A> DoubleEndedIterator for Lanes<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        Some(unsafe { self.lane(self.rows.at(self.left as isize)) })
    }
}

impl<'a, A> ExactSizeIterator for Lanes<'a, A> {}

impl<'a, A> Clone for Lanes<'a, A> {
    fn clone(&self) -> Self {
        Lanes {
            rows: self.rows,
            left: self.left,
            life: PhantomData,
        }
    }
}

/// An iterator over the rows of a 2-D view, each a writable 1-D view.
///
/// See [`.rows_mut()`](crate::ViewBase::rows_mut) for more information.
pub struct LanesMut<'a, A> {
    rows: Cursor2<A>,
    left: Ix,
    life: PhantomData<&'a mut A>,
}

impl<'a, A> LanesMut<'a, A> {
    pub(crate) fn new(v: ViewMut2<'a, A>) -> Self {
        let [r, c] = *v.dim.axes();
        LanesMut {
            rows: Cursor2::new(v.ptr.as_ptr(), r.stride, c),
            left: r.len,
            life: PhantomData,
        }
    }

    #[inline]
    unsafe fn lane(&self, ptr: *mut A) -> ViewMut1<'a, A> {
        let inner = self.rows.inner();
        ViewMut1::new_(ptr, Ix1::strided(inner.len, inner.stride))
    }
}

impl<'a, A> Iterator for LanesMut<'a, A> {
    type Item = ViewMut1<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        // Distinct rows of a writable view never share an element.
        let lane = unsafe { self.lane(self.rows.as_ptr()) };
        self.rows.step();
        self.left -= 1;
        Some(lane)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, A> DoubleEndedIterator for LanesMut<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        Some(unsafe { self.lane(self.rows.at(self.left as isize)) })
    }
}

impl<'a, A> ExactSizeIterator for LanesMut<'a, A> {}

unsafe impl<'a, A> Send for Lanes<'a, A> where A: Sync {}
unsafe impl<'a, A> Sync for Lanes<'a, A> where A: Sync {}
unsafe impl<'a, A> Send for LanesMut<'a, A> where A: Send {}
unsafe impl<'a, A> Sync for LanesMut<'a, A> where A: Sync {}
