// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ptr::NonNull;

use log::debug;

use crate::dimension::{can_index_slice, can_index_slice_mut};
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Dimension, Ix, Ix1, Ix2, Ixs, View, View2, ViewMut, ViewMut2, ViewRepr, ViewBase};

// Base offset of `origin`, rejecting arithmetic overflow.
fn checked_origin<D: Dimension>(dim: &D, origin: D::Origin) -> Result<Ixs, ShapeError> {
    dim.origin_offset_checked(origin)
        .ok_or_else(|| from_kind(ErrorKind::Overflow))
}

fn log_rejection<D: Dimension>(err: ShapeError, len: usize, base: Ixs, dim: &D) -> ShapeError {
    debug!("rejected view {:?} at offset {} into {} elements: {}", dim, base, len, err);
    err
}

/// Methods for read-only views.
impl<'a, A, D> View<'a, A, D>
where
    D: Dimension,
{
    /// Create a read-only view from a raw pointer and a layout.
    ///
    /// `ptr` is the location of the element at index zero.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    ///
    /// - `ptr` is non-null, and for every valid index the location
    ///   `ptr + Σ index_i * stride_i` is in bounds of one live allocation
    ///   holding properly initialized elements of type `A`.
    ///
    /// - No stride of `dim` is zero.
    ///
    /// - No element reachable through the view is mutated for the lifetime
    ///   `'a`, except through an `UnsafeCell`.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const A, dim: D) -> Self {
        Self::new_(ptr, dim)
    }

    /// Like [`from_raw_parts`](Self::from_raw_parts), with the element at
    /// index zero placed `origin` steps away from `ptr`.
    ///
    /// The view starts at `ptr + Σ origin_i * stride_i`.
    ///
    /// # Safety
    ///
    /// As for `from_raw_parts`, applied to the adjusted base.
    #[inline]
    pub unsafe fn from_raw_parts_at(ptr: *const A, origin: D::Origin, dim: D) -> Self {
        Self::new_(ptr.wrapping_offset(dim.origin_offset(origin)), dim)
    }

    /// Create a read-only view of `data` whose element at index zero is the
    /// element at `origin` in the coordinates of `dim`.
    ///
    /// The origin is added to the base, so `from_slice(s, (y, x), dim)`
    /// starts at `s[y * row_stride + x * col_stride]`.
    ///
    /// **Errors** if a stride is zero, if the view would reach outside `data`
    /// or if computing its extent overflows.
    pub fn from_slice(data: &'a [A], origin: D::Origin, dim: D) -> Result<Self, ShapeError> {
        let base = checked_origin(&dim, origin)?;
        can_index_slice(data.len(), base, &dim)
            .map_err(|e| log_rejection(e, data.len(), base, &dim))?;
        unsafe { Ok(Self::new_(data.as_ptr().wrapping_offset(base), dim)) }
    }

    #[inline(always)]
    pub(crate) unsafe fn new_(ptr: *const A, dim: D) -> Self {
        if cfg!(debug_assertions) {
            assert!(!ptr.is_null(), "The pointer must be non-null.");
            assert!(dim.extents().iter().all(|e| e.stride != 0), "Strides must be non-zero.");
        }
        ViewBase {
            data: ViewRepr::new(),
            ptr: NonNull::new_unchecked(ptr as *mut A),
            dim,
        }
    }
}

/// Methods for read-write views.
impl<'a, A, D> ViewMut<'a, A, D>
where
    D: Dimension,
{
    /// Create a writable view from a raw pointer and a layout.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    ///
    /// - The conditions of [`View::from_raw_parts`] hold.
    ///
    /// - No two distinct indices reach the same location.
    ///
    /// - No element reachable through the view is accessed by any other
    ///   pointer or reference for the lifetime `'a`.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut A, dim: D) -> Self {
        Self::new_(ptr, dim)
    }

    /// Like [`from_raw_parts`](Self::from_raw_parts), with the element at
    /// index zero placed `origin` steps away from `ptr`.
    ///
    /// # Safety
    ///
    /// As for `from_raw_parts`, applied to the adjusted base.
    #[inline]
    pub unsafe fn from_raw_parts_at(ptr: *mut A, origin: D::Origin, dim: D) -> Self {
        Self::new_(ptr.wrapping_offset(dim.origin_offset(origin)), dim)
    }

    /// Create a writable view of `data`; see [`View::from_slice`].
    ///
    /// **Errors** additionally with `ErrorKind::Overlap` if two indices of
    /// `dim` would reach the same element.
    pub fn from_slice(data: &'a mut [A], origin: D::Origin, dim: D) -> Result<Self, ShapeError> {
        let base = checked_origin(&dim, origin)?;
        can_index_slice_mut(data.len(), base, &dim)
            .map_err(|e| log_rejection(e, data.len(), base, &dim))?;
        unsafe { Ok(Self::new_(data.as_mut_ptr().wrapping_offset(base), dim)) }
    }

    #[inline(always)]
    pub(crate) unsafe fn new_(ptr: *mut A, dim: D) -> Self {
        if cfg!(debug_assertions) {
            assert!(!ptr.is_null(), "The pointer must be non-null.");
            assert!(dim.extents().iter().all(|e| e.stride != 0), "Strides must be non-zero.");
        }
        ViewBase {
            data: ViewRepr::new(),
            ptr: NonNull::new_unchecked(ptr),
            dim,
        }
    }
}

impl<'a, A> View2<'a, A> {
    /// View `data` as a row-major `rows × cols` matrix.
    ///
    /// ```
    /// use ndstride::View2;
    ///
    /// let data = [0, 1, 2, 3, 4, 5];
    /// let a = View2::from_shape(&data[..], (3, 2)).unwrap();
    /// assert_eq!(a[(2, 0)], 4);
    /// assert!(View2::from_shape(&data[..], (4, 2)).is_err());
    /// ```
    pub fn from_shape(data: &'a [A], lens: (Ix, Ix)) -> Result<Self, ShapeError> {
        Self::from_slice(data, (0, 0), Ix2::row_major(lens))
    }

    /// View `data` as a column-major `rows × cols` matrix.
    pub fn from_shape_col_major(data: &'a [A], lens: (Ix, Ix)) -> Result<Self, ShapeError> {
        Self::from_slice(data, (0, 0), Ix2::col_major(lens))
    }

    /// View a `w × h` window of an image stored in `data`, whose top left
    /// corner is at column `x`, row `y`.
    ///
    /// Pixel `(x, y)` of the image is `data[y * row_stride + x * col_stride]`.
    /// The window has `h` rows of `w` elements each.
    ///
    /// ```
    /// use ndstride::View2;
    ///
    /// // a 4 × 3 image, rows of 4 pixels
    /// let image = [ 0,  1,  2,  3,
    ///              10, 11, 12, 13,
    ///              20, 21, 22, 23];
    /// let w = View2::from_window(&image[..], (1, 1), (2, 2), (4, 1)).unwrap();
    /// assert_eq!(w.to_vec(), vec![11, 12, 21, 22]);
    /// ```
    pub fn from_window(
        data: &'a [A],
        (x, y): (Ix, Ix),
        (w, h): (Ix, Ix),
        (row_stride, col_stride): (Ixs, Ixs),
    ) -> Result<Self, ShapeError> {
        let origin = window_origin(x, y)?;
        Self::from_slice(data, origin, Ix2::strided((h, w), (row_stride, col_stride)))
    }
}

impl<'a, A> ViewMut2<'a, A> {
    /// Writable counterpart of [`View2::from_shape`].
    pub fn from_shape(data: &'a mut [A], lens: (Ix, Ix)) -> Result<Self, ShapeError> {
        Self::from_slice(data, (0, 0), Ix2::row_major(lens))
    }

    /// Writable counterpart of [`View2::from_shape_col_major`].
    pub fn from_shape_col_major(data: &'a mut [A], lens: (Ix, Ix)) -> Result<Self, ShapeError> {
        Self::from_slice(data, (0, 0), Ix2::col_major(lens))
    }

    /// Writable counterpart of [`View2::from_window`].
    pub fn from_window(
        data: &'a mut [A],
        (x, y): (Ix, Ix),
        (w, h): (Ix, Ix),
        (row_stride, col_stride): (Ixs, Ixs),
    ) -> Result<Self, ShapeError> {
        let origin = window_origin(x, y)?;
        Self::from_slice(data, origin, Ix2::strided((h, w), (row_stride, col_stride)))
    }
}

fn window_origin(x: Ix, y: Ix) -> Result<(Ixs, Ixs), ShapeError> {
    match (Ixs::try_from(y), Ixs::try_from(x)) {
        (Ok(i), Ok(j)) => Ok((i, j)),
        _ => Err(from_kind(ErrorKind::Overflow)),
    }
}

impl<'a, A> View<'a, A, Ix1> {
    /// View a slice as a contiguous 1-D view.
    #[inline]
    pub fn from_contiguous(data: &'a [A]) -> Self {
        unsafe { Self::new_(data.as_ptr(), Ix1::contiguous(data.len())) }
    }
}

impl<'a, A> ViewMut<'a, A, Ix1> {
    /// View a slice as a contiguous writable 1-D view.
    #[inline]
    pub fn from_contiguous(data: &'a mut [A]) -> Self {
        unsafe { Self::new_(data.as_mut_ptr(), Ix1::contiguous(data.len())) }
    }
}
