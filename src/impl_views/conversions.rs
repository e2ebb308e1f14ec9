// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use crate::iter::{ExactChunks, ExactChunksMut, Iter, IterMut, Lanes, LanesMut};
use crate::{Dimension, Ix, Ix1, Ix2, View, ViewMut};

/// Methods for read-only views.
impl<'a, A, D> View<'a, A, D>
where
    D: Dimension,
{
    /// Convert the view into a view with a shorter lifetime.
    pub fn reborrow<'b>(self) -> View<'b, A, D>
    where
        'a: 'b,
    {
        unsafe { View::new_(self.ptr.as_ptr(), self.dim) }
    }

    pub(crate) fn into_iter_(self) -> Iter<'a, A, D> {
        Iter::new(self)
    }
}

impl<'a, A> View<'a, A, Ix1> {
    /// Return the elements as a slice if they are adjacent in memory and in
    /// ascending order, otherwise `None`.
    pub fn to_slice(&self) -> Option<&'a [A]> {
        let e = self.dim.axes()[0];
        if e.stride == 1 || e.len <= 1 {
            unsafe { Some(slice::from_raw_parts(self.ptr.as_ptr(), e.len)) }
        } else {
            None
        }
    }

    /// Like [`.exact_chunks()`](crate::ViewBase::exact_chunks), with the
    /// chunks borrowing from the underlying data rather than from the view.
    pub fn into_exact_chunks(self, size: Ix) -> ExactChunks<'a, A> {
        ExactChunks::new(self, size)
    }
}

impl<'a, A> View<'a, A, Ix2> {
    /// Convert the view into an iterator over its rows.
    pub fn into_rows(self) -> Lanes<'a, A> {
        Lanes::new(self)
    }
}

/// Methods for read-write views.
impl<'a, A, D> ViewMut<'a, A, D>
where
    D: Dimension,
{
    /// Convert the view into a view with a shorter lifetime.
    pub fn reborrow<'b>(self) -> ViewMut<'b, A, D>
    where
        'a: 'b,
    {
        unsafe { ViewMut::new_(self.ptr.as_ptr(), self.dim) }
    }

    /// Give up write access and keep a read-only view of the same elements.
    pub fn into_view(self) -> View<'a, A, D> {
        unsafe { View::new_(self.ptr.as_ptr(), self.dim) }
    }

    pub(crate) fn into_iter_(self) -> IterMut<'a, A, D> {
        IterMut::new(self)
    }
}

impl<'a, A> ViewMut<'a, A, Ix1> {
    /// Return the elements as a mutable slice if they are adjacent in memory
    /// and in ascending order, otherwise give the view back.
    pub fn into_slice(self) -> Result<&'a mut [A], Self> {
        let e = self.dim.axes()[0];
        if e.stride == 1 || e.len <= 1 {
            unsafe { Ok(slice::from_raw_parts_mut(self.ptr.as_ptr(), e.len)) }
        } else {
            Err(self)
        }
    }

    /// Writable counterpart of [`View::into_exact_chunks`].
    pub fn into_exact_chunks_mut(self, size: Ix) -> ExactChunksMut<'a, A> {
        ExactChunksMut::new(self, size)
    }
}

impl<'a, A> ViewMut<'a, A, Ix2> {
    /// Convert the view into an iterator over its writable rows.
    pub fn into_rows_mut(self) -> LanesMut<'a, A> {
        LanesMut::new(self)
    }
}
