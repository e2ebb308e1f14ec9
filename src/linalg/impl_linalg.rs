// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::any::TypeId;

use log::trace;

use crate::error::{incompatible_shapes, ShapeError};
use crate::{Data, DataMut, Ix1, Ix2, LinalgScalar, View1, View2, ViewBase, ViewMut2};

/// # Methods For 1-D Views
impl<A, S> ViewBase<S, Ix1>
where
    S: Data<Elem = A>,
{
    /// Perform dot product or matrix multiplication of two 1-D views.
    ///
    /// The dot product is the sum of the elementwise products. Either view
    /// may have any stride.
    ///
    /// **Errors** if the lengths differ.
    ///
    /// ```
    /// use ndstride::View1;
    ///
    /// let a = [1., 2., 3.];
    /// let b = [4., 5., 6., 7.];
    /// let x = View1::from(&a[..]);
    /// let y = View1::from(&b[1..]).reverse();
    /// assert_eq!(x.dot(&y).unwrap(), 1. * 7. + 2. * 6. + 3. * 5.);
    /// ```
    pub fn dot<S2>(&self, rhs: &ViewBase<S2, Ix1>) -> Result<A, ShapeError>
    where
        S2: Data<Elem = A>,
        A: LinalgScalar,
    {
        if self.len() != rhs.len() {
            return Err(incompatible_shapes(&self.dim, &rhs.dim));
        }
        Ok(dot_impl(&self.view(), &rhs.view()))
    }
}

/// Σ lhs[i] · rhs[i]; the lengths must be equal.
pub(crate) fn dot_impl<A>(lhs: &View1<'_, A>, rhs: &View1<'_, A>) -> A
where
    A: LinalgScalar,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter()
        .zip(rhs.iter())
        .fold(A::zero(), |acc, (&x, &y)| acc + x * y)
}

/// C ← α A B + β C; the shapes must agree.
pub(crate) fn mat_mul_impl<A>(
    alpha: A,
    lhs: &View2<'_, A>,
    rhs: &View2<'_, A>,
    beta: A,
    c: &mut ViewMut2<'_, A>,
) where
    A: LinalgScalar,
{
    let ((m, k), (_, n)) = (lhs.lens(), rhs.lens());

    // common parameters for gemm
    let ap = lhs.as_ptr();
    let bp = rhs.as_ptr();
    let (rsa, csa) = (lhs.extents()[0].stride, lhs.extents()[1].stride);
    let (rsb, csb) = (rhs.extents()[0].stride, rhs.extents()[1].stride);
    let (rsc, csc) = (c.extents()[0].stride, c.extents()[1].stride);
    let cp = c.as_mut_ptr();
    if same_type::<A, f32>() {
        trace!("gemm {}x{}x{}: matrixmultiply::sgemm", m, k, n);
        unsafe {
            matrixmultiply::sgemm(
                m,
                k,
                n,
                cast_as(&alpha),
                ap as *const _,
                rsa,
                csa,
                bp as *const _,
                rsb,
                csb,
                cast_as(&beta),
                cp as *mut _,
                rsc,
                csc,
            );
        }
    } else if same_type::<A, f64>() {
        trace!("gemm {}x{}x{}: matrixmultiply::dgemm", m, k, n);
        unsafe {
            matrixmultiply::dgemm(
                m,
                k,
                n,
                cast_as(&alpha),
                ap as *const _,
                rsa,
                csa,
                bp as *const _,
                rsb,
                csb,
                cast_as(&beta),
                cp as *mut _,
                rsc,
                csc,
            );
        }
    } else {
        trace!("gemm {}x{}x{}: generic loop", m, k, n);
        mat_mul_general(alpha, lhs, rhs, beta, c)
    }
}

/// C ← α A B + β C
fn mat_mul_general<A>(
    alpha: A,
    lhs: &View2<'_, A>,
    rhs: &View2<'_, A>,
    beta: A,
    c: &mut ViewMut2<'_, A>,
) where
    A: LinalgScalar,
{
    let ((m, k), (_, n)) = (lhs.lens(), rhs.lens());
    for i in 0..m {
        for j in 0..n {
            unsafe {
                let sum = (0..k).fold(A::zero(), |s, x| s + *lhs.uget((i, x)) * *rhs.uget((x, j)));
                let elt = c.uget_mut((i, j));
                // β = 0 ignores the old contents of C, NaN included
                *elt = if beta.is_zero() { alpha * sum } else { *elt * beta + alpha * sum };
            }
        }
    }
}

/// General matrix-matrix multiplication.
///
/// Compute C ← α A B + β C
///
/// The view shapes must agree in the way that if `a` is *M* × *K*, then
/// `b` is *K* × *N* and `c` is *M* × *N*. All three may have any strides,
/// negative included, so transposed and reversed views need no copy.
///
/// **Errors** with `ErrorKind::IncompatibleShapes` if the shapes do not
/// agree; `c` is left untouched.
///
/// *Note:* `f32` and `f64` use the `matrixmultiply` kernels; other
/// element types use a plain triple loop.
///
/// ```
/// use ndstride::{general_mat_mul, View2, ViewMut2};
///
/// let a = [1., 2.,
///          3., 4.];
/// let mut c = [0.; 4];
/// let a = View2::from_shape(&a[..], (2, 2)).unwrap();
/// let mut cv = ViewMut2::from_shape(&mut c[..], (2, 2)).unwrap();
/// // C = A · Aᵀ
/// general_mat_mul(1., &a, &a.t(), 0., &mut cv).unwrap();
/// assert_eq!(c, [5., 11., 11., 25.]);
/// ```
pub fn general_mat_mul<A, S1, S2, S3>(
    alpha: A,
    a: &ViewBase<S1, Ix2>,
    b: &ViewBase<S2, Ix2>,
    beta: A,
    c: &mut ViewBase<S3, Ix2>,
) -> Result<(), ShapeError>
where
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: DataMut<Elem = A>,
    A: LinalgScalar,
{
    let ((m, k), (k2, n)) = (a.lens(), b.lens());
    let (m2, n2) = c.lens();
    if k != k2 || m != m2 || n != n2 {
        return Err(incompatible_shapes(&(m, k, k2, n), &(m2, n2)));
    }
    mat_mul_impl(alpha, &a.view(), &b.view(), beta, &mut c.view_mut());
    Ok(())
}

#[inline(always)]
fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

// Read pointer to type `A` as type `B`.
//
// **Panics** if `A` and `B` are not the same type
fn cast_as<A: 'static + Copy, B: 'static + Copy>(a: &A) -> B {
    assert!(
        same_type::<A, B>(),
        "expect type {} and {} to match",
        std::any::type_name::<A>(),
        std::any::type_name::<B>()
    );
    unsafe { ::std::ptr::read(a as *const _ as *const B) }
}
