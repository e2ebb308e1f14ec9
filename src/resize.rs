// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resampling between 2-D views.
//!
//! Image code uses these to scale a decoded picture into a destination
//! buffer of another size. Both sides are views, so either one may be a
//! window, transposed or flipped.

use log::debug;

use crate::error::{incompatible_shapes, ShapeError};
use crate::{Data, DataMut, Ix, Ix2, ViewBase};

// Source index of destination index `d` when `src_len` positions are
// stretched over `dst_len`: the sample under the centre of the destination
// cell, ⌊(d + ½) · src_len / dst_len⌋.
#[inline]
fn nearest(d: Ix, src_len: Ix, dst_len: Ix) -> Ix {
    let s = ((2 * d as u128 + 1) * src_len as u128 / (2 * dst_len as u128)) as Ix;
    s.min(src_len - 1)
}

/// Fill `dst` by nearest-neighbour sampling of `src`.
///
/// Destination element `(r, c)` takes the source element under the centre
/// of its cell, `(⌊(r + ½)·H_src/H_dst⌋, ⌊(c + ½)·W_src/W_dst⌋)`. Equal
/// sizes copy, integer ratios replicate or decimate evenly.
///
/// **Errors** if `src` is empty and `dst` is not. An empty `dst` is left
/// as it is.
///
/// ```
/// use ndstride::resize::nearest_into;
/// use ndstride::{View2, ViewMut2};
///
/// let src = [1, 2,
///            3, 4];
/// let mut dst = [0; 16];
/// nearest_into(&View2::from_shape(&src[..], (2, 2)).unwrap(),
///              &mut ViewMut2::from_shape(&mut dst[..], (4, 4)).unwrap()).unwrap();
/// assert_eq!(dst, [1, 1, 2, 2,
///                  1, 1, 2, 2,
///                  3, 3, 4, 4,
///                  3, 3, 4, 4]);
/// ```
pub fn nearest_into<A, S, S2>(src: &ViewBase<S, Ix2>, dst: &mut ViewBase<S2, Ix2>) -> Result<(), ShapeError>
where
    A: Clone,
    S: Data<Elem = A>,
    S2: DataMut<Elem = A>,
{
    let (hs, ws) = src.lens();
    let (hd, wd) = dst.lens();
    if hd == 0 || wd == 0 {
        return Ok(());
    }
    if hs == 0 || ws == 0 {
        return Err(incompatible_shapes(&src.dim, &dst.dim));
    }
    debug!("nearest resize {}x{} -> {}x{}", hs, ws, hd, wd);
    let cols: Vec<Ix> = (0..wd).map(|c| nearest(c, ws, wd)).collect();
    for (r, mut row) in dst.rows_mut().enumerate() {
        let sr = nearest(r, hs, hd);
        for (elt, &sc) in row.iter_mut().zip(&cols) {
            // sr < hs and sc < ws by construction
            *elt = unsafe { src.uget((sr, sc)) }.clone();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, View2, ViewMut2};

    #[test]
    fn nearest_index_stays_in_range() {
        for src in 1..9 {
            for dst in 1..9 {
                for d in 0..dst {
                    assert!(nearest(d, src, dst) < src);
                }
            }
        }
        assert_eq!(nearest(0, 4, 2), 1);
        assert_eq!(nearest(1, 4, 2), 3);
        assert_eq!(nearest(2, 3, 3), 2);
    }

    #[test]
    fn same_size_copies() {
        let src: Vec<u8> = (0..12).collect();
        let mut dst = vec![0u8; 12];
        nearest_into(
            &View2::from_shape(&src[..], (3, 4)).unwrap(),
            &mut ViewMut2::from_shape(&mut dst[..], (3, 4)).unwrap(),
        )
        .unwrap();
        assert_eq!(src, dst);
    }

    #[test]
    fn empty_source_is_rejected() {
        let src: [u8; 0] = [];
        let mut dst = [0u8; 4];
        let err = nearest_into(
            &View2::from_shape(&src[..], (0, 0)).unwrap(),
            &mut ViewMut2::from_shape(&mut dst[..], (2, 2)).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
    }
}
