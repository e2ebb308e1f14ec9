// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{DivAssign, MulAssign};

use crate::error::{incompatible_shapes, ShapeError};
use crate::iter::{Iter, IterMut};
use crate::{
    Axis, ContiguousSource, Data, DataMut, Dimension, Extent, Ix, Ixs, NdIndex, View, ViewBase,
    ViewMut,
};

/// # Methods For All Views
impl<A, S, D> ViewBase<S, D>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    /// Return the total number of elements in the view.
    pub fn len(&self) -> usize {
        self.dim.size()
    }

    /// Alias of `.len()`.
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Return whether the view has any elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of dimensions (axes) in the view
    pub fn ndim(&self) -> usize {
        D::NDIM
    }

    /// Return the layout of the view: lengths and strides together.
    pub fn dim(&self) -> D {
        self.dim
    }

    /// Return the per-axis lengths: `len` for 1-D, `(rows, cols)` for 2-D.
    pub fn lens(&self) -> D::Pattern {
        self.dim.pattern()
    }

    /// Return the `(stride, len)` pair of every axis, outermost first.
    pub fn extents(&self) -> &[Extent] {
        self.dim.extents()
    }

    /// Return the length of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn len_of(&self, axis: Axis) -> usize {
        self.dim.extents()[axis.index()].len
    }

    /// Return the stride of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn stride_of(&self, axis: Axis) -> isize {
        self.dim.extents()[axis.index()].stride
    }

    /// Return a pointer to the element at index zero.
    ///
    /// With negative strides this is not the lowest address of the view.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const A {
        self.ptr.as_ptr() as *const A
    }

    /// Return a mutable pointer to the element at index zero.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut A
    where
        S: DataMut,
    {
        self.ptr.as_ptr()
    }

    /// Return a read-only view of the view.
    pub fn view(&self) -> View<'_, A, D> {
        unsafe { View::new_(self.ptr.as_ptr(), self.dim) }
    }

    /// Return a read-write view of the view.
    pub fn view_mut(&mut self) -> ViewMut<'_, A, D>
    where
        S: DataMut,
    {
        unsafe { ViewMut::new_(self.ptr.as_ptr(), self.dim) }
    }

    pub(crate) fn get_ptr<I>(&self, index: &I) -> Option<*mut A>
    where
        I: NdIndex<D>,
    {
        index
            .index_checked(&self.dim)
            .map(|offset| self.ptr.as_ptr().wrapping_offset(offset))
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// ```
    /// use ndstride::View2;
    ///
    /// let data = [1., 2., 3., 4.];
    /// let a = View2::from_shape(&data[..], (2, 2)).unwrap();
    ///
    /// assert!(
    ///     a.get((0, 1)) == Some(&2.) &&
    ///     a.get((0, 2)) == None &&
    ///     a[(0, 1)] == 2. &&
    ///     a[[0, 1]] == 2.
    /// );
    /// ```
    pub fn get<I>(&self, index: I) -> Option<&A>
    where
        I: NdIndex<D>,
    {
        self.get_ptr(&index).map(|ptr| unsafe { &*ptr })
    }

    /// Return a mutable reference to the element at `index`, or return
    /// `None` if the index is out of bounds.
    pub fn get_mut<I>(&mut self, index: I) -> Option<&mut A>
    where
        S: DataMut,
        I: NdIndex<D>,
    {
        self.get_ptr(&index).map(|ptr| unsafe { &mut *ptr })
    }

    /// Perform *unchecked* view indexing.
    ///
    /// Return a reference to the element at `index`.
    ///
    /// **Note:** only unchecked for non-debug builds of ndstride.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget<I>(&self, index: I) -> &A
    where
        I: NdIndex<D>,
    {
        debug_assert!(index.index_checked(&self.dim).is_some(), "index out of bounds");
        &*self.ptr.as_ptr().offset(index.index_unchecked(&self.dim))
    }

    /// Perform *unchecked* view indexing.
    ///
    /// Return a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget_mut<I>(&mut self, index: I) -> &mut A
    where
        S: DataMut,
        I: NdIndex<D>,
    {
        debug_assert!(index.index_checked(&self.dim).is_some(), "index out of bounds");
        &mut *self.ptr.as_ptr().offset(index.index_unchecked(&self.dim))
    }

    /// Return an iterator of references to the elements of the view.
    ///
    /// Elements are visited row by row, whatever the memory order.
    ///
    /// Iterator element type is `&A`.
    pub fn iter(&self) -> Iter<'_, A, D> {
        self.view().into_iter_()
    }

    /// Return an iterator of mutable references to the elements of the view.
    ///
    /// Iterator element type is `&mut A`.
    pub fn iter_mut(&mut self) -> IterMut<'_, A, D>
    where
        S: DataMut,
    {
        self.view_mut().into_iter_()
    }

    /// Call `f` by reference on each element, in iteration order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&A),
    {
        self.iter().fold((), move |(), elt| f(elt))
    }

    /// Traverse the view in iteration order, folding the elements into an
    /// accumulator.
    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.iter().fold(init, f)
    }

    /// Return the elements in iteration order as a new vector.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut v = Vec::with_capacity(self.len());
        self.for_each(|x| v.push(x.clone()));
        v
    }

    /// Copy the elements, in iteration order, to the front of `dest`.
    ///
    /// **Errors** if `dest` is shorter than the view.
    pub fn copy_to_slice(&self, dest: &mut [A]) -> Result<(), ShapeError>
    where
        A: Clone,
    {
        if dest.len() < self.len() {
            return Err(incompatible_shapes(&dest.len(), &self.dim));
        }
        for (d, x) in dest.iter_mut().zip(self.iter()) {
            *d = x.clone();
        }
        Ok(())
    }

    /// Modify the view in place by calling `f` by reference on each element
    /// and writing back the result.
    ///
    /// ```
    /// use ndstride::ViewMut2;
    ///
    /// let mut data = [1, 2, 3, 4];
    /// let mut a = ViewMut2::from_shape(&mut data[..], (2, 2)).unwrap();
    /// a.apply(|x| x * 10);
    /// assert_eq!(data, [10, 20, 30, 40]);
    /// ```
    pub fn apply<F>(&mut self, mut f: F)
    where
        S: DataMut,
        F: FnMut(&A) -> A,
    {
        self.iter_mut().fold((), move |(), elt| *elt = f(elt));
    }

    /// Modify the view in place by calling `f` on each element paired with
    /// the element of `src` at the same iteration position.
    ///
    /// **Errors** if `src` does not hold exactly as many elements as the
    /// view; nothing is written in that case.
    pub fn apply_with<R, F>(&mut self, src: &R, mut f: F) -> Result<(), ShapeError>
    where
        S: DataMut,
        R: ContiguousSource + ?Sized,
        F: FnMut(&A, &R::Elem) -> A,
    {
        let src = src.as_contiguous();
        if src.len() != self.len() {
            return Err(incompatible_shapes(&src.len(), &self.dim));
        }
        for (elt, s) in self.iter_mut().zip(src) {
            *elt = f(elt, s);
        }
        Ok(())
    }

    /// Write the elements of `src` into the view in iteration order.
    ///
    /// **Errors** if `src` does not hold exactly as many elements as the
    /// view.
    ///
    /// ```
    /// use ndstride::ViewMut2;
    ///
    /// let mut data = [0; 6];
    /// let mut a = ViewMut2::from_shape(&mut data[..], (2, 3)).unwrap();
    /// a.view_mut().t().assign_from(&[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(data, [1, 3, 5, 2, 4, 6]);
    /// ```
    pub fn assign_from<R>(&mut self, src: &R) -> Result<(), ShapeError>
    where
        S: DataMut,
        A: Clone,
        R: ContiguousSource<Elem = A> + ?Sized,
    {
        self.apply_with(src, |_, s| s.clone())
    }

    /// Copy the elements of `rhs` into the view, position by position.
    ///
    /// **Errors** if the lengths differ.
    pub fn assign<S2>(&mut self, rhs: &ViewBase<S2, D>) -> Result<(), ShapeError>
    where
        S: DataMut,
        A: Clone,
        S2: Data<Elem = A>,
    {
        if self.lens() != rhs.lens() {
            return Err(incompatible_shapes(&rhs.dim, &self.dim));
        }
        for (elt, x) in self.iter_mut().zip(rhs.iter()) {
            *elt = x.clone();
        }
        Ok(())
    }

    /// Set every element to a clone of `x`.
    pub fn fill(&mut self, x: A)
    where
        S: DataMut,
        A: Clone,
    {
        self.iter_mut().fold((), move |(), elt| *elt = x.clone());
    }

    /// Multiply every element by `k`, writing through to the underlying data.
    pub fn scale_in_place(&mut self, k: A)
    where
        S: DataMut,
        A: Clone + MulAssign,
    {
        self.iter_mut().fold((), move |(), elt| *elt *= k.clone());
    }

    /// Divide every element by `k`, writing through to the underlying data.
    pub fn divide_in_place(&mut self, k: A)
    where
        S: DataMut,
        A: Clone + DivAssign,
    {
        self.iter_mut().fold((), move |(), elt| *elt /= k.clone());
    }

    /// Move the base by `offset` elements and replace the layout.
    ///
    /// # Safety
    ///
    /// Every index of `dim` must reach an element that `self` reaches, and
    /// if `S: DataMut`, `dim` must not overlap.
    #[inline]
    pub(crate) unsafe fn with_offset_dim<E>(self, offset: Ixs, dim: E) -> ViewBase<S, E>
    where
        E: Dimension,
    {
        ViewBase {
            data: self.data,
            ptr: std::ptr::NonNull::new_unchecked(self.ptr.as_ptr().wrapping_offset(offset)),
            dim,
        }
    }

    /// Reverse `axis` in place of the layout: negate its stride and move the
    /// base to its last element. A zero-length axis keeps the base.
    pub(crate) fn invert_axis(&mut self, axis: Ix) {
        let e = &mut self.dim.extents_mut()[axis];
        let offset = e.last_offset();
        e.stride = -e.stride;
        self.ptr = unsafe {
            std::ptr::NonNull::new_unchecked(self.ptr.as_ptr().wrapping_offset(offset))
        };
    }
}
