// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The fixed-length owning vector.

use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::error::{incompatible_shapes, ShapeError};
use crate::linalg::{dot_impl, LinalgScalar};
use crate::{ContiguousSource, Data, Ix, Ix1, View1, ViewBase, ViewMut1};

/// A vector of `N` elements stored inline.
///
/// `Vector` owns its elements and has value semantics. It is the simplest
/// producer of views: [`.view()`](Vector::view) covers every element with
/// stride 1, and a `Vector` can be built by copying out of any 1-D view of
/// the right length.
///
/// ```
/// use ndstride::Vector;
///
/// let v = Vector::new([1, 2, 3, 4]);
/// let r = Vector::<i32, 4>::try_from(v.view().reverse()).unwrap();
/// assert_eq!(r, Vector::new([4, 3, 2, 1]));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<A, const N: usize> {
    data: [A; N],
}

impl<A, const N: usize> Vector<A, N> {
    /// Create a vector holding `data`.
    pub const fn new(data: [A; N]) -> Self {
        Vector { data }
    }

    /// Create a vector whose element at index `i` is `f(i)`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> A,
    {
        Vector { data: std::array::from_fn(f) }
    }

    /// Create a vector of zeros.
    pub fn zeros() -> Self
    where
        A: Zero,
    {
        Self::from_fn(|_| A::zero())
    }

    /// Return the number of elements, `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// Return whether `N` is zero.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Unwrap the elements.
    pub fn into_inner(self) -> [A; N] {
        self.data
    }

    /// Return a read-only view of every element.
    pub fn view(&self) -> View1<'_, A> {
        View1::from(&self.data[..])
    }

    /// Return a writable view of every element.
    pub fn view_mut(&mut self) -> ViewMut1<'_, A> {
        ViewMut1::from(&mut self.data[..])
    }

    /// Return a view of the `len` elements starting at `offset`.
    ///
    /// **Errors** if the range does not fit inside the vector.
    pub fn slice_view(&self, offset: Ix, len: Ix) -> Result<View1<'_, A>, ShapeError> {
        self.view().slice(offset, len)
    }

    /// Copy the elements of a 1-D view of length `N` into a new vector.
    ///
    /// **Errors** if the view's length is not `N`.
    pub fn from_view<S>(view: &ViewBase<S, Ix1>) -> Result<Self, ShapeError>
    where
        A: Clone,
        S: Data<Elem = A>,
    {
        let data: [A; N] = view
            .to_vec()
            .try_into()
            .map_err(|_| incompatible_shapes(&view.dim, &N))?;
        Ok(Vector { data })
    }

    /// Overwrite the elements with those of a 1-D view of length `N`.
    ///
    /// **Errors** if the view's length is not `N`.
    pub fn assign_view<S>(&mut self, view: &ViewBase<S, Ix1>) -> Result<(), ShapeError>
    where
        A: Clone,
        S: Data<Elem = A>,
    {
        self.view_mut().assign(view)
    }

    /// Overwrite the elements, in order, with those of `src`.
    ///
    /// **Errors** if `src` does not hold exactly `N` elements.
    pub fn copy_from<R>(&mut self, src: &R) -> Result<(), ShapeError>
    where
        A: Clone,
        R: ContiguousSource<Elem = A> + ?Sized,
    {
        self.view_mut().assign_from(src)
    }

    /// Replace every element `x` with `f(&x)`.
    pub fn apply<F>(&mut self, f: F)
    where
        F: FnMut(&A) -> A,
    {
        self.view_mut().apply(f)
    }

    /// Replace every element `x` with `f(&x, &y)`, where `y` is the element
    /// of `src` at the same position.
    ///
    /// **Errors** if `src` does not hold exactly `N` elements.
    pub fn apply_with<R, F>(&mut self, src: &R, f: F) -> Result<(), ShapeError>
    where
        R: ContiguousSource + ?Sized,
        F: FnMut(&A, &R::Elem) -> A,
    {
        self.view_mut().apply_with(src, f)
    }

    /// Return the inner product with `rhs`.
    pub fn dot(&self, rhs: &Self) -> A
    where
        A: LinalgScalar,
    {
        dot_impl(&self.view(), &rhs.view())
    }
}

impl<'a, A: Clone, const N: usize> TryFrom<View1<'a, A>> for Vector<A, N> {
    type Error = ShapeError;

    fn try_from(view: View1<'a, A>) -> Result<Self, ShapeError> {
        Self::from_view(&view)
    }
}

impl<A, const N: usize> From<[A; N]> for Vector<A, N> {
    fn from(data: [A; N]) -> Self {
        Self::new(data)
    }
}

impl<A, const N: usize> Index<Ix> for Vector<A, N> {
    type Output = A;

    fn index(&self, i: Ix) -> &A {
        &self.data[i]
    }
}

impl<A, const N: usize> IndexMut<Ix> for Vector<A, N> {
    fn index_mut(&mut self, i: Ix) -> &mut A {
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn view_round_trip() {
        let v = Vector::new([1., 2., 3.]);
        let w = Vector::<f64, 3>::from_view(&v.view()).unwrap();
        assert_eq!(v, w);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let v = Vector::new([1, 2, 3]);
        let err = Vector::<i32, 2>::from_view(&v.view()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
        let mut w = Vector::<i32, 2>::zeros();
        assert!(w.copy_from(&[1, 2, 3]).is_err());
        assert_eq!(w, Vector::new([0, 0]));
    }

    #[test]
    fn apply_with_pairs_by_position() {
        let mut v = Vector::new([1, 2, 3]);
        v.apply_with(&[10, 20, 30], |a, b| a + b).unwrap();
        assert_eq!(v.into_inner(), [11, 22, 33]);
    }

    #[test]
    fn dot_of_vectors() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a.dot(&b), 32);
    }
}
