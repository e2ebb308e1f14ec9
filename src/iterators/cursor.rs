// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Strided cursors: the traversal primitive every view iterates with.
//!
//! A cursor is a pointer plus the stride of the axis it walks. An order-2
//! cursor additionally carries the extent of the inner axis, and at each
//! outer position hands out the order-1 cursor pair (`begin()`, `end()`)
//! that walks that row, so nested loops never compute offsets by hand.
//!
//! Moving a cursor is plain wrapping pointer arithmetic and therefore safe;
//! reading through [`as_ptr`](Cursor1::as_ptr) is where the caller must know
//! that the position is inside the buffer.
//!
//! ```
//! use ndstride::View2;
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let v = View2::from_shape(&data[..], (2, 3)).unwrap();
//! let mut sum = 0;
//! let (mut row, end) = (v.begin(), v.end());
//! while row != end {
//!     let (mut it, stop) = (row.begin(), row.end());
//!     while it != stop {
//!         sum += unsafe { *it.as_ptr() };
//!         it.step();
//!     }
//!     row.step();
//! }
//! assert_eq!(sum, 21);
//! ```

use std::fmt;
use std::mem::size_of;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::dimension::Extent;
use crate::{Ix, Ixs};

/// Order-1 cursor: walks one axis with a fixed stride.
pub struct Cursor1<A> {
    ptr: *mut A,
    stride: Ixs,
}

/// Order-2 cursor: walks the outer axis of a matrix; each position exposes
/// an order-1 cursor pair for the inner axis.
pub struct Cursor2<A> {
    ptr: *mut A,
    stride: Ixs,
    inner: Extent,
}

macro_rules! cursor_arith {
    ($name:ident) => {
        impl<A> $name<A> {
            /// The address this cursor points at.
            #[inline(always)]
            pub fn as_ptr(&self) -> *mut A {
                self.ptr
            }

            /// The stride of the axis this cursor walks.
            #[inline(always)]
            pub fn stride(&self) -> Ixs {
                self.stride
            }

            /// Move one position forward.
            #[inline(always)]
            pub fn step(&mut self) {
                self.ptr = self.ptr.wrapping_offset(self.stride);
            }

            /// Move one position back.
            #[inline(always)]
            pub fn step_back(&mut self) {
                self.ptr = self.ptr.wrapping_offset(-self.stride);
            }

            /// Address `k` positions away, `ptr + k * stride`.
            #[inline(always)]
            pub fn at(&self, k: Ixs) -> *mut A {
                self.ptr.wrapping_offset(k * self.stride)
            }

            /// Number of positions from `origin` to `self`.
            ///
            /// Only meaningful when both cursors walk the same axis; cursors
            /// carry no record of where their stride came from.
            #[inline]
            pub fn distance(&self, origin: &Self) -> Ixs {
                let elem = size_of::<A>() as Ixs;
                if elem == 0 {
                    return 0;
                }
                let bytes = (self.ptr as Ixs).wrapping_sub(origin.ptr as Ixs);
                bytes / elem / self.stride
            }
        }

        impl<A> Clone for $name<A> {
            #[inline(always)]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<A> Copy for $name<A> {}

        /// Cursors compare by address alone.
        impl<A> PartialEq for $name<A> {
            #[inline(always)]
            fn eq(&self, rhs: &Self) -> bool {
                self.ptr == rhs.ptr
            }
        }

        impl<A> Eq for $name<A> {}

        impl<A> Add<Ixs> for $name<A> {
            type Output = Self;
            #[inline(always)]
            fn add(mut self, k: Ixs) -> Self {
                self += k;
                self
            }
        }

        impl<A> Sub<Ixs> for $name<A> {
            type Output = Self;
            #[inline(always)]
            fn sub(mut self, k: Ixs) -> Self {
                self -= k;
                self
            }
        }

        impl<A> AddAssign<Ixs> for $name<A> {
            #[inline(always)]
            fn add_assign(&mut self, k: Ixs) {
                self.ptr = self.at(k);
            }
        }

        impl<A> SubAssign<Ixs> for $name<A> {
            #[inline(always)]
            fn sub_assign(&mut self, k: Ixs) {
                self.ptr = self.at(-k);
            }
        }

        impl<A> Sub for $name<A> {
            type Output = Ixs;
            #[inline(always)]
            fn sub(self, rhs: Self) -> Ixs {
                self.distance(&rhs)
            }
        }
    };
}

cursor_arith!(Cursor1);
cursor_arith!(Cursor2);

impl<A> Cursor1<A> {
    /// **Panics** in debug builds if `stride` is zero.
    #[inline(always)]
    pub fn new(ptr: *mut A, stride: Ixs) -> Self {
        debug_assert_ne!(stride, 0, "cursor stride must be non-zero");
        Cursor1 { ptr, stride }
    }
}

impl<A> Cursor2<A> {
    /// `stride` walks the outer axis; `inner` describes every row.
    ///
    /// **Panics** in debug builds if either stride is zero.
    #[inline(always)]
    pub fn new(ptr: *mut A, stride: Ixs, inner: Extent) -> Self {
        debug_assert!(stride != 0 && inner.stride != 0, "cursor strides must be non-zero");
        Cursor2 { ptr, stride, inner }
    }

    /// The extent of the inner axis.
    #[inline(always)]
    pub fn inner(&self) -> Extent {
        self.inner
    }

    /// First position of the current row.
    #[inline(always)]
    pub fn begin(&self) -> Cursor1<A> {
        Cursor1::new(self.ptr, self.inner.stride)
    }

    /// One past the last position of the current row.
    #[inline(always)]
    pub fn end(&self) -> Cursor1<A> {
        self.begin() + self.inner.len as Ixs
    }

    #[inline]
    pub(crate) fn inner_len(&self) -> Ix {
        self.inner.len
    }
}

impl<A> fmt::Debug for Cursor1<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor1")
            .field("ptr", &self.ptr)
            .field("stride", &self.stride)
            .finish()
    }
}

impl<A> fmt::Debug for Cursor2<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor2")
            .field("ptr", &self.ptr)
            .field("stride", &self.stride)
            .field("inner", &self.inner)
            .finish()
    }
}
