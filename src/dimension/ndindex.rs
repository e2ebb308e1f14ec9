// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;

use super::{Ix1, Ix2};
use crate::{Ix, Ixs};

/// Tuple or fixed size arrays that can be used to index a view.
///
/// ```
/// use ndstride::View2;
///
/// let data = [0, 1, 2, 3, 4, 5];
/// let a = View2::from_shape(&data[..], (2, 3)).unwrap();
/// assert_eq!(a[[1, 2]], a[(1, 2)]);
/// ```
///
/// **Note** that `NdIndex` is implemented for `usize` for 1-D views and for
/// `(usize, usize)` and `[usize; 2]` for 2-D views.
///
/// # Safety
///
/// `index_checked` must only return offsets of positions inside `dim`;
/// views dereference them without further checks.
pub unsafe trait NdIndex<E>: Debug {
    /// The element offset of this index, or `None` if it is out of bounds.
    #[doc(hidden)]
    fn index_checked(&self, dim: &E) -> Option<Ixs>;
    #[doc(hidden)]
    fn index_unchecked(&self, dim: &E) -> Ixs;
}

unsafe impl NdIndex<Ix1> for Ix {
    #[inline]
    fn index_checked(&self, dim: &Ix1) -> Option<Ixs> {
        let e = dim.axes()[0];
        if *self < e.len {
            Some(*self as Ixs * e.stride)
        } else {
            None
        }
    }

    #[inline(always)]
    fn index_unchecked(&self, dim: &Ix1) -> Ixs {
        *self as Ixs * dim.axes()[0].stride
    }
}

unsafe impl NdIndex<Ix2> for (Ix, Ix) {
    #[inline]
    fn index_checked(&self, dim: &Ix2) -> Option<Ixs> {
        let [r, c] = *dim.axes();
        let (i, j) = *self;
        if i < r.len && j < c.len {
            Some(i as Ixs * r.stride + j as Ixs * c.stride)
        } else {
            None
        }
    }

    #[inline(always)]
    fn index_unchecked(&self, dim: &Ix2) -> Ixs {
        let [r, c] = *dim.axes();
        self.0 as Ixs * r.stride + self.1 as Ixs * c.stride
    }
}

unsafe impl NdIndex<Ix2> for [Ix; 2] {
    #[inline]
    fn index_checked(&self, dim: &Ix2) -> Option<Ixs> {
        (self[0], self[1]).index_checked(dim)
    }

    #[inline(always)]
    fn index_unchecked(&self, dim: &Ix2) -> Ixs {
        (self[0], self[1]).index_unchecked(dim)
    }
}
