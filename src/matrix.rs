// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The fixed-size owning matrix.

use std::ops::{Index, IndexMut};
use std::slice;

use num_traits::{One, Zero};

use crate::error::{incompatible_shapes, ShapeError};
use crate::linalg::{mat_mul_impl, LinalgScalar};
use crate::{ContiguousSource, Data, Ix, Ix2, View2, ViewBase, ViewMut2};

/// An `M × N` matrix stored inline in row-major order.
///
/// ```
/// use ndstride::Matrix;
///
/// let m = Matrix::new([[1, 2, 3],
///                      [4, 5, 6]]);
/// assert_eq!(m.view().lens(), (2, 3));
/// assert_eq!(m.view().extents()[0].stride, 3);
/// assert_eq!(m.transpose(), Matrix::new([[1, 4], [2, 5], [3, 6]]));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<A, const M: usize, const N: usize> {
    data: [[A; N]; M],
}

impl<A, const M: usize, const N: usize> Matrix<A, M, N> {
    /// Create a matrix from its rows.
    pub const fn new(rows: [[A; N]; M]) -> Self {
        Matrix { data: rows }
    }

    /// Create a matrix whose element at `(i, j)` is `f((i, j))`.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut((Ix, Ix)) -> A,
    {
        Matrix {
            data: std::array::from_fn(|i| std::array::from_fn(|j| f((i, j)))),
        }
    }

    /// Create a matrix of zeros.
    pub fn zeros() -> Self
    where
        A: Zero,
    {
        Self::from_fn(|_| A::zero())
    }

    /// Return `(M, N)`.
    pub const fn lens(&self) -> (Ix, Ix) {
        (M, N)
    }

    /// Return the elements in row-major order.
    pub fn as_slice(&self) -> &[A] {
        // [[A; N]; M] has no padding between rows
        unsafe { slice::from_raw_parts(self.data.as_ptr() as *const A, M * N) }
    }

    /// Return the elements in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [A] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr() as *mut A, M * N) }
    }

    /// Unwrap the rows.
    pub fn into_inner(self) -> [[A; N]; M] {
        self.data
    }

    /// Return a read-only row-major view of the matrix.
    pub fn view(&self) -> View2<'_, A> {
        unsafe { View2::new_(self.data.as_ptr() as *const A, Ix2::row_major((M, N))) }
    }

    /// Return a writable row-major view of the matrix.
    pub fn view_mut(&mut self) -> ViewMut2<'_, A> {
        unsafe { ViewMut2::new_(self.data.as_mut_ptr() as *mut A, Ix2::row_major((M, N))) }
    }

    /// Return a view of the `rows × cols` window at `(row, col)`.
    ///
    /// **Errors** if the window does not fit inside the matrix.
    pub fn slice_view(&self, origin: (Ix, Ix), lens: (Ix, Ix)) -> Result<View2<'_, A>, ShapeError> {
        self.view().slice(origin, lens)
    }

    /// Copy the elements of an `M × N` view into a new matrix.
    ///
    /// The view may have any strides; element `(i, j)` of the view becomes
    /// element `(i, j)` of the matrix.
    ///
    /// **Errors** if the view's lengths are not `(M, N)`.
    pub fn from_view<S>(view: &ViewBase<S, Ix2>) -> Result<Self, ShapeError>
    where
        A: Clone,
        S: Data<Elem = A>,
    {
        if view.lens() != (M, N) {
            return Err(incompatible_shapes(&view.dim, &(M, N)));
        }
        Ok(Self::from_fn(|ix| unsafe { view.uget(ix) }.clone()))
    }

    /// Overwrite the elements with those of an `M × N` view.
    ///
    /// **Errors** if the view's lengths are not `(M, N)`.
    pub fn assign_view<S>(&mut self, view: &ViewBase<S, Ix2>) -> Result<(), ShapeError>
    where
        A: Clone,
        S: Data<Elem = A>,
    {
        self.view_mut().assign(view)
    }

    /// Overwrite the elements, in row-major order, with those of `src`.
    ///
    /// **Errors** if `src` does not hold exactly `M * N` elements.
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

    /// Replace every element `x` with `f(&x, &y)`, pairing elements in
    /// row-major order with those of `src`.
    ///
    /// **Errors** if `src` does not hold exactly `M * N` elements.
    pub fn apply_with<R, F>(&mut self, src: &R, f: F) -> Result<(), ShapeError>
    where
        R: ContiguousSource + ?Sized,
        F: FnMut(&A, &R::Elem) -> A,
    {
        self.view_mut().apply_with(src, f)
    }

    /// Return the `N × M` transpose, copied through a transposed view.
    pub fn transpose(&self) -> Matrix<A, N, M>
    where
        A: Clone,
    {
        let t = self.view().t();
        Matrix::from_fn(|ix| t[ix].clone())
    }

    /// Return the matrix product `self · rhs`.
    pub fn dot<const P: usize>(&self, rhs: &Matrix<A, N, P>) -> Matrix<A, M, P>
    where
        A: LinalgScalar,
    {
        let mut c = Matrix::<A, M, P>::zeros();
        mat_mul_impl(A::one(), &self.view(), &rhs.view(), A::zero(), &mut c.view_mut());
        c
    }
}

impl<A, const N: usize> Matrix<A, N, N> {
    /// Create the identity matrix.
    pub fn identity() -> Self
    where
        A: Zero + One,
    {
        Self::from_fn(|(i, j)| if i == j { A::one() } else { A::zero() })
    }
}

impl<'a, A: Clone, const M: usize, const N: usize> TryFrom<View2<'a, A>> for Matrix<A, M, N> {
    type Error = ShapeError;

    fn try_from(view: View2<'a, A>) -> Result<Self, ShapeError> {
        Self::from_view(&view)
    }
}

impl<A, const M: usize, const N: usize> From<[[A; N]; M]> for Matrix<A, M, N> {
    fn from(rows: [[A; N]; M]) -> Self {
        Self::new(rows)
    }
}

impl<A, const M: usize, const N: usize> Index<(Ix, Ix)> for Matrix<A, M, N> {
    type Output = A;

    fn index(&self, (i, j): (Ix, Ix)) -> &A {
        &self.data[i][j]
    }
}

impl<A, const M: usize, const N: usize> IndexMut<(Ix, Ix)> for Matrix<A, M, N> {
    fn index_mut(&mut self, (i, j): (Ix, Ix)) -> &mut A {
        &mut self.data[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn from_view_copies_any_strides() {
        let m = Matrix::new([[1, 2], [3, 4], [5, 6]]);
        let flipped = Matrix::<i32, 3, 2>::from_view(&m.view().reverse_axis(Axis(0))).unwrap();
        assert_eq!(flipped, Matrix::new([[5, 6], [3, 4], [1, 2]]));
    }

    #[test]
    fn identity_and_dot() {
        let a = Matrix::new([[1., 2.], [3., 4.]]);
        assert_eq!(a.dot(&Matrix::identity()), a);
        let b = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let c = Matrix::new([[1, 0], [0, 1], [1, 1]]);
        assert_eq!(b.dot(&c), Matrix::new([[4, 5], [10, 11]]));
    }

    #[test]
    fn slices_are_row_major() {
        let mut m = Matrix::<u8, 2, 3>::zeros();
        m.copy_from(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }
}
