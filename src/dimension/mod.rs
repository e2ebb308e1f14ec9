// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::iterators::{Baseiter1, Baseiter2};
use crate::{Ix, Ixs};

pub use self::axis::Axis;
pub use self::dim::{Dim, Extent, Ix1, Ix2};
pub use self::ndindex::NdIndex;

mod axis;
mod dim;
mod ndindex;

/// The capability shared by the view layouts [`Ix1`] and [`Ix2`].
///
/// The family is closed: only orders one and two implement it, so a view
/// of the wrong order is a type error rather than a runtime surprise.
pub trait Dimension: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Number of axes.
    const NDIM: usize;
    /// Per-axis lengths: `usize` or `(usize, usize)`.
    type Pattern: Copy + Debug + PartialEq + Hash;
    /// Per-axis signed positions: `isize` or `(isize, isize)`.
    type Origin: Copy + Debug;
    /// Raw element walker in iteration order.
    type Baseiter<A>: Iterator<Item = *mut A> + ExactSizeIterator;

    fn extents(&self) -> &[Extent];

    fn extents_mut(&mut self) -> &mut [Extent];

    fn pattern(&self) -> Self::Pattern;

    /// Replace the lengths and keep the strides.
    fn with_pattern(self, lens: Self::Pattern) -> Self;

    /// `Σ origin_i * stride_i`
    fn origin_offset(&self, origin: Self::Origin) -> Ixs;

    /// Like `origin_offset`, or `None` on overflow.
    fn origin_offset_checked(&self, origin: Self::Origin) -> Option<Ixs>;

    /// Walk every element reachable from `ptr` in iteration order.
    fn baseiter<A>(&self, ptr: *mut A) -> Self::Baseiter<A>;

    /// Product of the axis lengths.
    #[inline]
    fn size(&self) -> usize {
        self.extents().iter().map(|e| e.len).product()
    }

    private_decl! {}
}

impl Dimension for Ix1 {
    const NDIM: usize = 1;
    type Pattern = Ix;
    type Origin = Ixs;
    type Baseiter<A> = Baseiter1<A>;

    #[inline]
    fn extents(&self) -> &[Extent] {
        self.axes()
    }

    #[inline]
    fn extents_mut(&mut self) -> &mut [Extent] {
        self.axes_mut()
    }

    #[inline]
    fn pattern(&self) -> Ix {
        self.axes()[0].len
    }

    #[inline]
    fn with_pattern(mut self, len: Ix) -> Self {
        self.axes_mut()[0].len = len;
        self
    }

    #[inline]
    fn origin_offset(&self, origin: Ixs) -> Ixs {
        origin * self.axes()[0].stride
    }

    fn origin_offset_checked(&self, origin: Ixs) -> Option<Ixs> {
        origin.checked_mul(self.axes()[0].stride)
    }

    #[inline]
    fn baseiter<A>(&self, ptr: *mut A) -> Baseiter1<A> {
        Baseiter1::new(ptr, self.axes()[0])
    }

    private_impl! {}
}

impl Dimension for Ix2 {
    const NDIM: usize = 2;
    type Pattern = (Ix, Ix);
    type Origin = (Ixs, Ixs);
    type Baseiter<A> = Baseiter2<A>;

    #[inline]
    fn extents(&self) -> &[Extent] {
        self.axes()
    }

    #[inline]
    fn extents_mut(&mut self) -> &mut [Extent] {
        self.axes_mut()
    }

    #[inline]
    fn pattern(&self) -> (Ix, Ix) {
        let [r, c] = *self.axes();
        (r.len, c.len)
    }

    #[inline]
    fn with_pattern(mut self, (rows, cols): (Ix, Ix)) -> Self {
        let axes = self.axes_mut();
        axes[0].len = rows;
        axes[1].len = cols;
        self
    }

    #[inline]
    fn origin_offset(&self, (i, j): (Ixs, Ixs)) -> Ixs {
        let [r, c] = *self.axes();
        i * r.stride + j * c.stride
    }

    fn origin_offset_checked(&self, (i, j): (Ixs, Ixs)) -> Option<Ixs> {
        let [r, c] = *self.axes();
        i.checked_mul(r.stride)?.checked_add(j.checked_mul(c.stride)?)
    }

    #[inline]
    fn baseiter<A>(&self, ptr: *mut A) -> Baseiter2<A> {
        let [r, c] = *self.axes();
        Baseiter2::new(ptr, r, c)
    }

    private_impl! {}
}

/// Check that a view with layout `dim`, starting `base` elements into a
/// buffer of `data_len` elements, only ever reaches inside that buffer.
///
/// Every stride must be non-zero. An empty view is accepted as long as its
/// base is at most one past the end.
pub(crate) fn can_index_slice<D: Dimension>(
    data_len: usize,
    base: Ixs,
    dim: &D,
) -> Result<(), ShapeError> {
    if dim.extents().iter().any(|e| e.stride == 0) {
        return Err(from_kind(ErrorKind::ZeroStride));
    }
    // Every length, and the product of the non-zero ones, must fit in
    // `isize`; spans below are computed in signed arithmetic.
    let size_nonzero = dim
        .extents()
        .iter()
        .filter(|e| e.len != 0)
        .try_fold(1usize, |acc, e| acc.checked_mul(e.len))
        .ok_or(from_kind(ErrorKind::Overflow))?;
    if size_nonzero > Ixs::MAX as usize {
        return Err(from_kind(ErrorKind::Overflow));
    }
    let size = dim.size();
    if base < 0 {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    if size == 0 {
        return if base as usize <= data_len {
            Ok(())
        } else {
            Err(from_kind(ErrorKind::OutOfBounds))
        };
    }
    let (mut lo, mut hi) = (base, base);
    for e in dim.extents() {
        let span = (e.len as Ixs - 1)
            .checked_mul(e.stride)
            .ok_or(from_kind(ErrorKind::Overflow))?;
        if span >= 0 {
            hi = hi.checked_add(span).ok_or(from_kind(ErrorKind::Overflow))?;
        } else {
            lo = lo.checked_add(span).ok_or(from_kind(ErrorKind::Overflow))?;
        }
    }
    if lo < 0 || hi as usize >= data_len {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    Ok(())
}

/// Like `can_index_slice`, and additionally no two indices may reach the
/// same element, which a mutable view requires.
pub(crate) fn can_index_slice_mut<D: Dimension>(
    data_len: usize,
    base: Ixs,
    dim: &D,
) -> Result<(), ShapeError> {
    can_index_slice(data_len, base, dim)?;
    if dim_stride_overlap(dim) {
        return Err(from_kind(ErrorKind::Overlap));
    }
    Ok(())
}

/// Check whether two different indices of `dim` reach the same element.
///
/// Walk the axes from the smallest absolute stride to the largest; there is
/// overlap if an axis' stride does not exceed the span already covered by
/// the faster axes before it.
pub(crate) fn dim_stride_overlap<D: Dimension>(dim: &D) -> bool {
    let mut order = [Extent::default(); 2];
    let order = &mut order[..D::NDIM];
    order.copy_from_slice(dim.extents());
    order.sort_by_key(|e| e.stride.unsigned_abs());

    let mut covered: usize = 0;
    for e in order.iter() {
        match e.len {
            0 => return false,
            1 => {}
            len => {
                let s = e.stride.unsigned_abs();
                if s <= covered {
                    return true;
                }
                covered += (len - 1) * s;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_slice_accepts_contiguous() {
        assert!(can_index_slice(6, 0, &Ix2::row_major((2, 3))).is_ok());
        assert!(can_index_slice(6, 0, &Ix2::col_major((2, 3))).is_ok());
        assert!(can_index_slice(6, 0, &Ix1::contiguous(6)).is_ok());
    }

    #[test]
    fn index_slice_rejects_lengths_beyond_isize() {
        let huge = Ixs::MAX as usize + 1;
        for dim in [Ix1::strided(usize::MAX, 1), Ix1::strided(huge, -1)] {
            let err = can_index_slice(10, 5, &dim).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Overflow);
        }
        let err = can_index_slice(10, 0, &Ix2::strided((0, usize::MAX), (1, 1))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert!(can_index_slice(10, 0, &Ix2::strided((0, 3), (1, 1))).is_ok());
    }

    #[test]
    fn index_slice_rejects_out_of_bounds() {
        let err = can_index_slice(5, 0, &Ix2::row_major((2, 3))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        let err = can_index_slice(6, 1, &Ix1::contiguous(6)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn index_slice_negative_strides_need_a_base() {
        let rev = Ix1::strided(4, -1);
        assert_eq!(
            can_index_slice(4, 0, &rev).unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
        assert!(can_index_slice(4, 3, &rev).is_ok());
    }

    #[test]
    fn index_slice_rejects_zero_stride() {
        let err = can_index_slice(10, 0, &Ix1::strided(3, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ZeroStride);
    }

    #[test]
    fn empty_view_base_may_sit_at_the_end() {
        assert!(can_index_slice(4, 4, &Ix1::contiguous(0)).is_ok());
        assert!(can_index_slice(4, 5, &Ix1::contiguous(0)).is_err());
    }

    #[test]
    fn overlap_detection() {
        assert!(!dim_stride_overlap(&Ix2::row_major((3, 4))));
        assert!(!dim_stride_overlap(&Ix2::strided((3, 4), (-4, -1))));
        // rows of length 4 placed 2 apart share elements
        assert!(dim_stride_overlap(&Ix2::strided((3, 4), (2, 1))));
        // a single row may use any row stride
        assert!(!dim_stride_overlap(&Ix2::strided((1, 4), (1, 1))));
        assert!(!dim_stride_overlap(&Ix2::strided((0, 4), (1, 1))));
    }

    #[test]
    fn origin_offsets() {
        let d = Ix2::strided((2, 2), (6, 3));
        assert_eq!(d.origin_offset((1, 1)), 9);
        assert_eq!(d.origin_offset((0, -1)), -3);
        assert_eq!(Ix1::strided(5, -2).origin_offset(3), -6);
    }

    #[test]
    fn with_pattern_keeps_strides() {
        let d = Ix2::row_major((4, 4)).with_pattern((2, 3));
        assert_eq!(d, Ix2::strided((2, 3), (4, 1)));
        assert_eq!(d.size(), 6);
    }
}
