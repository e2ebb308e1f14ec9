// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for one-dimensional views.

use log::debug;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::iter::{ExactChunks, ExactChunksMut};
use crate::{Cursor1, Data, DataMut, Ix, Ix1, Ixs, ViewBase};

/// # Methods For 1-D Views
impl<A, S> ViewBase<S, Ix1>
where
    S: Data<Elem = A>,
{
    /// Return the stride between consecutive elements.
    pub fn stride(&self) -> Ixs {
        self.dim.axes()[0].stride
    }

    /// Return a cursor at the first element.
    pub fn begin(&self) -> Cursor1<A> {
        Cursor1::new(self.ptr.as_ptr(), self.stride())
    }

    /// Return a cursor one step past the last element.
    pub fn end(&self) -> Cursor1<A> {
        self.begin() + self.len() as Ixs
    }

    /// Reverse the order of the elements.
    ///
    /// Only the stride and base change; reversing twice gives back the
    /// original view exactly.
    pub fn reverse(mut self) -> Self {
        self.invert_axis(0);
        self
    }

    /// Return the `len` elements starting at position `offset`.
    ///
    /// **Errors** with `ErrorKind::OutOfBounds` if `offset + len` exceeds
    /// the length of the view.
    pub fn slice(self, offset: Ix, len: Ix) -> Result<Self, ShapeError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len() => unsafe { Ok(self.slice_unchecked(offset as Ixs, len)) },
            _ => {
                debug!("slice {}..+{} of {:?} rejected", offset, len, self.dim);
                Err(from_kind(ErrorKind::OutOfBounds))
            }
        }
    }

    /// Return the `len` elements starting at position `offset`, without
    /// checking that they lie inside the view.
    ///
    /// The new base is `base + offset * stride`; the stride is kept.
    ///
    /// # Safety
    ///
    /// `offset` and `offset + len` must lie within `0..=self.len()`.
    pub unsafe fn slice_unchecked(self, offset: Ixs, len: Ix) -> Self {
        let stride = self.stride();
        self.with_offset_dim(offset.wrapping_mul(stride), Ix1::strided(len, stride))
    }

    /// Perform *unchecked* flat indexing, stepping by the stride.
    ///
    /// # Safety
    ///
    /// `index` must be less than the length.
    #[inline]
    pub unsafe fn uget_flat(&self, index: Ix) -> &A {
        self.uget(index)
    }

    /// Return an iterator over runs of exactly `size` elements.
    ///
    /// Elements that do not fill a last run are skipped by the iterator and
    /// returned by its `remainder()`.
    ///
    /// **Panics** if `size` is zero.
    ///
    /// ```
    /// use ndstride::View1;
    ///
    /// let samples = [0, 1, 2, 3, 4, 5, 6];
    /// let v = View1::from(&samples[..]);
    /// let mut frames = v.exact_chunks(3);
    /// assert_eq!(frames.next().unwrap().to_vec(), vec![0, 1, 2]);
    /// assert_eq!(frames.next().unwrap().to_vec(), vec![3, 4, 5]);
    /// assert!(frames.next().is_none());
    /// assert_eq!(frames.remainder().to_vec(), vec![6]);
    /// ```
    pub fn exact_chunks(&self, size: Ix) -> ExactChunks<'_, A> {
        ExactChunks::new(self.view(), size)
    }

    /// Return an iterator over writable runs of exactly `size` elements.
    ///
    /// **Panics** if `size` is zero.
    pub fn exact_chunks_mut(&mut self, size: Ix) -> ExactChunksMut<'_, A>
    where
        S: DataMut,
    {
        ExactChunksMut::new(self.view_mut(), size)
    }
}
