// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Matrix, Vector};

/// A sequence whose elements are stored adjacently in memory.
///
/// Used as the source argument of
/// [`.apply_with()`](crate::ViewBase::apply_with) and
/// [`.assign_from()`](crate::ViewBase::assign_from): the elements of the
/// source, in order, are paired with the elements of a view in iteration
/// order.
///
/// ```
/// use ndstride::{ContiguousSource, Vector};
///
/// fn total<R: ContiguousSource<Elem = i32> + ?Sized>(r: &R) -> i32 {
///     r.as_contiguous().iter().sum()
/// }
///
/// assert_eq!(total(&[1, 2, 3]), 6);
/// assert_eq!(total(&vec![4, 5]), 9);
/// assert_eq!(total(&Vector::new([7, 8])), 15);
/// ```
pub trait ContiguousSource {
    /// The element type.
    type Elem;

    /// Return the elements as a slice, first to last.
    fn as_contiguous(&self) -> &[Self::Elem];

    /// Return the number of elements.
    fn len(&self) -> usize {
        self.as_contiguous().len()
    }

    /// Return whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A> ContiguousSource for [A] {
    type Elem = A;

    fn as_contiguous(&self) -> &[A] {
        self
    }
}

impl<A, const N: usize> ContiguousSource for [A; N] {
    type Elem = A;

    fn as_contiguous(&self) -> &[A] {
        self
    }
}

impl<A> ContiguousSource for Vec<A> {
    type Elem = A;

    fn as_contiguous(&self) -> &[A] {
        self
    }
}

impl<A, const N: usize> ContiguousSource for Vector<A, N> {
    type Elem = A;

    fn as_contiguous(&self) -> &[A] {
        self.as_slice()
    }
}

impl<A, const M: usize, const N: usize> ContiguousSource for Matrix<A, M, N> {
    type Elem = A;

    fn as_contiguous(&self) -> &[A] {
        self.as_slice()
    }
}

impl<'a, R> ContiguousSource for &'a R
where
    R: ContiguousSource + ?Sized,
{
    type Elem = R::Elem;

    fn as_contiguous(&self) -> &[R::Elem] {
        (**self).as_contiguous()
    }
}
