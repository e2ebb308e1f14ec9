// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use super::Axis;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Ix, Ixs};

/// The addressing parameters of one axis: how far to step in memory to move
/// one position along the axis, and how many positions there are.
///
/// `stride` is in elements, not bytes, and may be negative (reversed axis).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    pub stride: Ixs,
    pub len: Ix,
}

impl Extent {
    #[inline(always)]
    pub const fn new(stride: Ixs, len: Ix) -> Self {
        Extent { stride, len }
    }

    /// Element offset, relative to the first position, of the last position
    /// on this axis. Zero for empty and single-element axes.
    #[inline]
    pub fn last_offset(&self) -> Ixs {
        if self.len == 0 {
            0
        } else {
            self.stride * (self.len as Ixs - 1)
        }
    }
}

impl fmt::Debug for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.len, self.stride)
    }
}

/// The layout of an order-`N` view: one `Extent` per axis, outermost first.
///
/// Only orders 1 and 2 implement [`Dimension`](super::Dimension); use the
/// aliases [`Ix1`] and [`Ix2`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dim<const N: usize> {
    axes: [Extent; N],
}

/// Layout of a one-dimensional view.
pub type Ix1 = Dim<1>;
/// Layout of a two-dimensional view.
pub type Ix2 = Dim<2>;

impl<const N: usize> Dim<N> {
    #[inline]
    pub const fn from_extents(axes: [Extent; N]) -> Self {
        Dim { axes }
    }

    /// Build a layout from runtime lists of lengths and strides.
    ///
    /// This is the one entry point where the order is not known statically;
    /// it fails with `ErrorKind::OrderMismatch` unless both lists hold exactly
    /// `N` entries.
    pub fn from_slices(lens: &[Ix], strides: &[Ixs]) -> Result<Self, ShapeError> {
        if lens.len() != N || strides.len() != N {
            log::debug!(
                "expected {} axes, got {} lengths and {} strides",
                N,
                lens.len(),
                strides.len()
            );
            return Err(from_kind(ErrorKind::OrderMismatch));
        }
        let mut axes = [Extent::default(); N];
        for (ax, (&len, &stride)) in axes.iter_mut().zip(lens.iter().zip(strides)) {
            *ax = Extent::new(stride, len);
        }
        Ok(Dim { axes })
    }

    /// **Panics** if `axis` is not less than `N`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> Extent {
        self.axes[axis.index()]
    }

    #[inline]
    pub(crate) fn axes(&self) -> &[Extent; N] {
        &self.axes
    }

    #[inline]
    pub(crate) fn axes_mut(&mut self) -> &mut [Extent; N] {
        &mut self.axes
    }
}

impl Ix1 {
    /// `len` elements, `stride` apart.
    #[inline]
    pub const fn strided(len: Ix, stride: Ixs) -> Self {
        Dim::from_extents([Extent::new(stride, len)])
    }

    /// `len` adjacent elements.
    #[inline]
    pub const fn contiguous(len: Ix) -> Self {
        Self::strided(len, 1)
    }
}

impl Ix2 {
    #[inline]
    pub const fn strided((rows, cols): (Ix, Ix), (row_stride, col_stride): (Ixs, Ixs)) -> Self {
        Dim::from_extents([Extent::new(row_stride, rows), Extent::new(col_stride, cols)])
    }

    /// Rows stored one after another; the layout of [`Matrix`](crate::Matrix).
    #[inline]
    pub const fn row_major((rows, cols): (Ix, Ix)) -> Self {
        Self::strided((rows, cols), (nonzero(cols), 1))
    }

    /// Columns stored one after another.
    #[inline]
    pub const fn col_major((rows, cols): (Ix, Ix)) -> Self {
        Self::strided((rows, cols), (1, nonzero(rows)))
    }
}

// An axis of length zero still needs a legal stride for its neighbour.
#[inline(always)]
const fn nonzero(len: Ix) -> Ixs {
    if len == 0 {
        1
    } else {
        len as Ixs
    }
}

impl<const N: usize> fmt::Debug for Dim<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.axes.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_col_major_strides() {
        let r = Ix2::row_major((3, 4));
        assert_eq!(r.extent(Axis(0)), Extent::new(4, 3));
        assert_eq!(r.extent(Axis(1)), Extent::new(1, 4));
        let c = Ix2::col_major((3, 4));
        assert_eq!(c.extent(Axis(0)), Extent::new(1, 3));
        assert_eq!(c.extent(Axis(1)), Extent::new(3, 4));
    }

    #[test]
    fn empty_axes_keep_nonzero_strides() {
        assert_eq!(Ix2::row_major((3, 0)), Ix2::strided((3, 0), (1, 1)));
        assert_eq!(Ix2::col_major((0, 3)), Ix2::strided((0, 3), (1, 1)));
    }

    #[test]
    fn from_slices_checks_order() {
        let d = Ix2::from_slices(&[2, 3], &[3, 1]).unwrap();
        assert_eq!(d, Ix2::row_major((2, 3)));
        assert_eq!(
            Ix1::from_slices(&[2, 3], &[3, 1]).unwrap_err().kind(),
            ErrorKind::OrderMismatch
        );
        assert_eq!(
            Ix2::from_slices(&[2, 3], &[1]).unwrap_err().kind(),
            ErrorKind::OrderMismatch
        );
    }

    #[test]
    fn last_offset_of_empty_axis_is_zero() {
        assert_eq!(Extent::new(-5, 0).last_offset(), 0);
        assert_eq!(Extent::new(-5, 1).last_offset(), 0);
        assert_eq!(Extent::new(-5, 3).last_offset(), -10);
    }
}
