// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndstride/0.1/")]

//! The `ndstride` crate provides non-owning, strided, one- and
//! two-dimensional views over contiguous element storage, plus small owning
//! containers with a fixed compile-time size.
//!
//! A view never copies. It records where its first element lives and, for
//! each axis, how many elements it spans and how far apart consecutive
//! elements are in memory. Strides may be any non-zero value, negative
//! included, which is what lets transposition, reversal and the quarter-turn
//! rotations all run in constant time.
//!
//! - [`View`] / [`ViewMut`]: read-only and writable views, generic over the
//!   layout [`Ix1`] or [`Ix2`]. The aliases [`View1`], [`View2`],
//!   [`ViewMut1`] and [`ViewMut2`] name the common cases.
//! - [`Cursor1`] / [`Cursor2`]: raw strided positions with pointer-like
//!   arithmetic, for hand-written kernels.
//! - [`Vector`] / [`Matrix`]: owned fixed-size storage that hands out views.
//! - [`general_mat_mul`] and [`View1::dot`](ViewBase::dot): strided linear
//!   algebra backed by `matrixmultiply`.
//! - [`resize`]: nearest-neighbour resampling between 2-D views.
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default; forwards to the `std` features of
//!   `num-traits` and `matrixmultiply`.
//! - `approx`: implementations of the `approx` comparison traits for views
//!   and containers.
//!
//! ## Example
//!
//! ```
//! use ndstride::{Axis, View2};
//!
//! let data = [1, 2, 3,
//!             4, 5, 6];
//! let a = View2::from_shape(&data[..], (2, 3)).unwrap();
//! let t = a.t();
//! assert_eq!(t.lens(), (3, 2));
//! assert_eq!(t[(2, 1)], 6);
//!
//! let r = a.reverse_axis(Axis(1));
//! assert_eq!(r.to_vec(), vec![3, 2, 1, 6, 5, 4]);
//! ```

#[macro_use]
mod private;

#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
mod data_repr;
mod data_traits;
pub mod dimension;
mod error;
mod impl_1d;
mod impl_2d;
mod impl_methods;
mod impl_views;
mod iterators;
mod linalg;
mod linalg_traits;
mod matrix;
pub mod prelude;
pub mod resize;
mod source;
mod vector;

use std::ptr::NonNull;

pub use crate::data_repr::ViewRepr;
pub use crate::data_traits::{Data, DataMut};
pub use crate::dimension::{Axis, Dim, Dimension, Extent, Ix1, Ix2, NdIndex};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::impl_views::IndexLonger;
pub use crate::iterators::iter;
pub use crate::iterators::{Cursor1, Cursor2};
pub use crate::linalg::{general_mat_mul, LinalgScalar};
pub use crate::matrix::Matrix;
pub use crate::source::ContiguousSource;
pub use crate::vector::Vector;

/// Array index type
pub type Ix = usize;
/// Array index type (signed)
pub type Ixs = isize;

/// A strided view of elements of type `A` laid out according to `D`.
///
/// The storage marker `S` decides whether the view is read-only
/// ([`View`]) or writable ([`ViewMut`]). Use the aliases rather than
/// spelling `ViewBase` out.
///
/// ## Layout
///
/// The element at index `(i, j)` of a two-dimensional view lives at
/// `ptr + i * row_stride + j * col_stride`, counted in elements. Axis 0
/// enumerates rows and axis 1 columns; iteration is always row by row.
///
/// For every valid index the location lies inside one live allocation. A
/// writable view additionally never reaches the same element through two
/// different indices. The checked constructors establish both properties and
/// every transformation preserves them.
///
/// ## Transformations
///
/// Methods that consume `self` and return a view (`t`, `reverse_axis`,
/// `slice`, `into_row`, ...) only touch the base pointer and the layout.
/// They are `O(1)`.
pub struct ViewBase<S, D>
where
    S: Data,
{
    /// Storage marker; carries the borrow.
    data: S,
    /// Location of the element at index zero. Not necessarily the lowest
    /// address the view reaches, as strides can be negative.
    ptr: NonNull<S::Elem>,
    /// Per-axis lengths and strides.
    dim: D,
}

/// A read-only strided view.
pub type View<'a, A, D> = ViewBase<ViewRepr<&'a A>, D>;
/// A writable strided view.
pub type ViewMut<'a, A, D> = ViewBase<ViewRepr<&'a mut A>, D>;

/// one-dimensional read-only view
pub type View1<'a, A> = View<'a, A, Ix1>;
/// two-dimensional read-only view
pub type View2<'a, A> = View<'a, A, Ix2>;
/// one-dimensional writable view
pub type ViewMut1<'a, A> = ViewMut<'a, A, Ix1>;
/// two-dimensional writable view
pub type ViewMut2<'a, A> = ViewMut<'a, A, Ix2>;

impl<S: Data + Clone, D: Clone> Clone for ViewBase<S, D> {
    fn clone(&self) -> Self {
        ViewBase {
            data: self.data.clone(),
            ptr: self.ptr,
            dim: self.dim.clone(),
        }
    }
}

impl<S: Data + Copy, D: Copy> Copy for ViewBase<S, D> {}

// `ViewRepr<&A>` is Send when `A: Sync`, `ViewRepr<&mut A>` when `A: Send`.
unsafe impl<S, D> Send for ViewBase<S, D>
where
    S: Send + Data,
    D: Send,
{
}

unsafe impl<S, D> Sync for ViewBase<S, D>
where
    S: Sync + Data,
    D: Sync,
{
}
