// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for two-dimensional views.

use log::debug;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::iter::{Lanes, LanesMut};
use crate::{
    Axis, Cursor2, Data, DataMut, Dimension, Extent, Ix, Ix1, Ix2, Ixs, View1, ViewBase, ViewMut1,
};

/// # Methods For 2-D Views
impl<A, S> ViewBase<S, Ix2>
where
    S: Data<Elem = A>,
{
    /// Return the number of rows (length of `Axis(0)`).
    pub fn nrows(&self) -> usize {
        self.dim.axes()[0].len
    }

    /// Return the number of columns (length of `Axis(1)`).
    pub fn ncols(&self) -> usize {
        self.dim.axes()[1].len
    }

    /// Return a cursor at the first row.
    ///
    /// The cursor walks rows; its `begin()` and `end()` bound the
    /// elements of the row it points at.
    pub fn begin(&self) -> Cursor2<A> {
        let [r, c] = *self.dim.axes();
        Cursor2::new(self.ptr.as_ptr(), r.stride, c)
    }

    /// Return a cursor one row past the last row.
    pub fn end(&self) -> Cursor2<A> {
        self.begin() + self.nrows() as Ixs
    }

    /// Transpose the view: rows become columns.
    ///
    /// The base is kept and the two `(stride, len)` pairs are swapped, so
    /// element `(i, j)` of the result is element `(j, i)` of `self`.
    ///
    /// ```
    /// use ndstride::View2;
    ///
    /// let data = [1, 2, 3,
    ///             4, 5, 6];
    /// let a = View2::from_shape(&data[..], (2, 3)).unwrap();
    /// assert_eq!(a.t().to_vec(), vec![1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn t(mut self) -> Self {
        self.dim.axes_mut().swap(0, 1);
        self
    }

    /// Reverse the order of the elements along `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn reverse_axis(mut self, axis: Axis) -> Self {
        assert!(axis.index() < 2, "axis {} out of bounds for a 2-D view", axis.index());
        self.invert_axis(axis.index());
        self
    }

    /// Reverse both axes.
    pub fn reverse(self) -> Self {
        self.reverse_axis(Axis(0)).reverse_axis(Axis(1))
    }

    /// Rotate a quarter turn counter-clockwise.
    ///
    /// ```
    /// use ndstride::View2;
    ///
    /// let data = [1, 2,
    ///             3, 4];
    /// let a = View2::from_shape(&data[..], (2, 2)).unwrap();
    /// assert_eq!(a.rotate_ccw().to_vec(), vec![2, 4, 1, 3]);
    /// assert_eq!(a.rotate_cw().to_vec(), vec![3, 1, 4, 2]);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        self.t().reverse_axis(Axis(0))
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate_cw(self) -> Self {
        self.t().reverse_axis(Axis(1))
    }

    /// Rotate half a turn.
    pub fn rotate_half(self) -> Self {
        self.reverse()
    }

    /// Return the `rows × cols` window whose top left element is at
    /// `(row, col)`.
    ///
    /// **Errors** with `ErrorKind::OutOfBounds` if the window does not fit
    /// inside the view.
    pub fn slice(self, (row, col): (Ix, Ix), (rows, cols): (Ix, Ix)) -> Result<Self, ShapeError> {
        let fits = |at: Ix, len: Ix, extent: Ix| at.checked_add(len).map_or(false, |end| end <= extent);
        if fits(row, rows, self.nrows()) && fits(col, cols, self.ncols()) {
            unsafe { Ok(self.slice_unchecked((row as Ixs, col as Ixs), (rows, cols))) }
        } else {
            debug!(
                "window {:?} at {:?} of {:?} rejected",
                (rows, cols),
                (row, col),
                self.dim
            );
            Err(from_kind(ErrorKind::OutOfBounds))
        }
    }

    /// Return the `rows × cols` window at `origin` without checking that it
    /// lies inside the view.
    ///
    /// The new base is `base + origin.0 * row_stride + origin.1 * col_stride`;
    /// the strides are kept.
    ///
    /// # Safety
    ///
    /// The window must lie within the view.
    pub unsafe fn slice_unchecked(self, origin: (Ixs, Ixs), lens: (Ix, Ix)) -> Self {
        let offset = self.dim.origin_offset(origin);
        let dim = self.dim.with_pattern(lens);
        self.with_offset_dim(offset, dim)
    }

    /// Return a 1-D view of `len` elements starting at `origin` and
    /// running along `axis`.
    ///
    /// **Errors** with `ErrorKind::OutOfBounds` if the line leaves the view.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn line(self, (row, col): (Ix, Ix), len: Ix, axis: Axis) -> Result<ViewBase<S, Ix1>, ShapeError> {
        let e = self.dim.extent(axis);
        let (along, across) = match axis.index() {
            0 => ((row, self.nrows()), (col, self.ncols())),
            _ => ((col, self.ncols()), (row, self.nrows())),
        };
        let inside = across.0 < across.1
            && along.0.checked_add(len).map_or(false, |end| end <= along.1);
        if !inside {
            debug!("line of {} at {:?} along {:?} of {:?} rejected", len, (row, col), axis, self.dim);
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        let offset = self.dim.origin_offset((row as Ixs, col as Ixs));
        unsafe { Ok(self.with_offset_dim(offset, Ix1::strided(len, e.stride))) }
    }

    /// Collapse to row `index` as a 1-D view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn into_row(self, index: Ix) -> ViewBase<S, Ix1> {
        let [r, c] = *self.dim.axes();
        assert!(index < r.len, "row {} out of bounds for {} rows", index, r.len);
        unsafe { self.with_offset_dim(index as Ixs * r.stride, Ix1::from_extents([c])) }
    }

    /// Collapse to column `index` as a 1-D view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn into_column(self, index: Ix) -> ViewBase<S, Ix1> {
        let [r, c] = *self.dim.axes();
        assert!(index < c.len, "column {} out of bounds for {} columns", index, c.len);
        unsafe { self.with_offset_dim(index as Ixs * c.stride, Ix1::from_extents([r])) }
    }

    /// Return row `index` as a 1-D view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row(&self, index: Ix) -> View1<'_, A> {
        self.view().into_row(index)
    }

    /// Return column `index` as a 1-D view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn column(&self, index: Ix) -> View1<'_, A> {
        self.view().into_column(index)
    }

    /// Return row `index` as a writable 1-D view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row_mut(&mut self, index: Ix) -> ViewMut1<'_, A>
    where
        S: DataMut,
    {
        self.view_mut().into_row(index)
    }

    /// Return column `index` as a writable 1-D view.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn column_mut(&mut self, index: Ix) -> ViewMut1<'_, A>
    where
        S: DataMut,
    {
        self.view_mut().into_column(index)
    }

    /// Return an iterator over the rows, each a 1-D view.
    ///
    /// ```
    /// use ndstride::View2;
    ///
    /// let data = [1, 2, 3,
    ///             4, 5, 6];
    /// let a = View2::from_shape(&data[..], (2, 3)).unwrap();
    /// let sums: Vec<i32> = a.rows().map(|r| r.iter().sum()).collect();
    /// assert_eq!(sums, vec![6, 15]);
    /// ```
    pub fn rows(&self) -> Lanes<'_, A> {
        self.view().into_rows()
    }

    /// Return an iterator over the rows, each a writable 1-D view.
    pub fn rows_mut(&mut self) -> LanesMut<'_, A>
    where
        S: DataMut,
    {
        self.view_mut().into_rows_mut()
    }

    /// Return an iterator over the columns, each a 1-D view.
    pub fn columns(&self) -> Lanes<'_, A> {
        self.view().t().into_rows()
    }

    /// Return an iterator over the columns, each a writable 1-D view.
    pub fn columns_mut(&mut self) -> LanesMut<'_, A>
    where
        S: DataMut,
    {
        self.view_mut().t().into_rows_mut()
    }

    /// Call `f` on each element in iteration order, and `row_end` with the
    /// row index after the last element of every row.
    ///
    /// This is the shape of a row-oriented serializer: `row_end` is where
    /// line padding or separators go.
    pub fn for_each_with_row_end<F, G>(&self, mut f: F, mut row_end: G)
    where
        F: FnMut(&A),
        G: FnMut(usize),
    {
        for (i, row) in self.rows().enumerate() {
            row.for_each(&mut f);
            row_end(i);
        }
    }

    /// Return the elements in iteration order, with `row_padding` clones of
    /// `fill` appended after every row.
    ///
    /// ```
    /// use ndstride::{Axis, View2};
    ///
    /// // bottom-up rows, as stored by some image formats
    /// let data = [1, 2, 3,
    ///             4, 5, 6];
    /// let a = View2::from_shape(&data[..], (2, 3)).unwrap().reverse_axis(Axis(0));
    /// assert_eq!(a.to_vec_padded(1, 0), vec![4, 5, 6, 0, 1, 2, 3, 0]);
    /// ```
    pub fn to_vec_padded(&self, row_padding: usize, fill: A) -> Vec<A>
    where
        A: Clone,
    {
        let mut out = Vec::with_capacity(self.nrows() * (self.ncols() + row_padding));
        for row in self.rows() {
            row.for_each(|x| out.push(x.clone()));
            out.resize(out.len() + row_padding, fill.clone());
        }
        out
    }

    /// Perform *unchecked* flat indexing: `index` steps along the inner
    /// axis only, by the column stride.
    ///
    /// On a row-major contiguous view this addresses the whole buffer in
    /// memory order.
    ///
    /// # Safety
    ///
    /// `base + index * col_stride` must be an element of the view.
    #[inline]
    pub unsafe fn uget_flat(&self, index: Ix) -> &A {
        let c: Extent = self.dim.axes()[1];
        &*self.ptr.as_ptr().offset(index as Ixs * c.stride)
    }
}
