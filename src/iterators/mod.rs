// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod base;
mod chunks;
mod cursor;
mod lanes;
pub mod iter;

use std::fmt;
use std::marker::PhantomData;

use crate::{Dimension, Ix1, View, ViewMut};

pub use self::base::{Baseiter1, Baseiter2};
pub use self::chunks::{ExactChunks, ExactChunksMut};
pub use self::cursor::{Cursor1, Cursor2};
pub use self::lanes::{Lanes, LanesMut};

/// An iterator over the elements of a view, row by row.
///
/// Iterator element type is `&'a A`.
///
/// See [`.iter()`](crate::ViewBase::iter) for more information.
pub struct Iter<'a, A, D: Dimension> {
    inner: D::Baseiter<A>,
    life: PhantomData<&'a A>,
}

impl<'a, A, D: Dimension> Iter<'a, A, D> {
    pub(crate) fn new(v: View<'a, A, D>) -> Self {
        Iter {
            inner: v.dim.baseiter(v.ptr.as_ptr()),
            life: PhantomData,
        }
    }
}

impl<'a, A, D: Dimension> Iterator for Iter<'a, A, D> {
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A> {
        self.inner.next().map(|p| unsafe { &*p })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, Self::Item) -> Acc,
    {
        self.inner.fold(init, move |acc, p| unsafe { g(acc, &*p) })
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A, Ix1> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a A> {
        self.inner.next_back().map(|p| unsafe { &*p })
    }
}

impl<'a, A, D: Dimension> ExactSizeIterator for Iter<'a, A, D> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, A, D> Clone for Iter<'a, A, D>
where
    D: Dimension,
    D::Baseiter<A>: Clone,
{
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            life: PhantomData,
        }
    }
}

impl<'a, A, D: Dimension> fmt::Debug for Iter<'a, A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("len", &self.inner.len()).finish()
    }
}

/// An iterator over the elements of a view, row by row.
///
/// Iterator element type is `&'a mut A`.
///
/// See [`.iter_mut()`](crate::ViewBase::iter_mut) for more information.
pub struct IterMut<'a, A, D: Dimension> {
    inner: D::Baseiter<A>,
    life: PhantomData<&'a mut A>,
}

impl<'a, A, D: Dimension> IterMut<'a, A, D> {
    pub(crate) fn new(v: ViewMut<'a, A, D>) -> Self {
        IterMut {
            inner: v.dim.baseiter(v.ptr.as_ptr()),
            life: PhantomData,
        }
    }
}

impl<'a, A, D: Dimension> Iterator for IterMut<'a, A, D> {
    type Item = &'a mut A;

    #[inline]
    fn next(&mut self) -> Option<&'a mut A> {
        self.inner.next().map(|p| unsafe { &mut *p })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, Self::Item) -> Acc,
    {
        self.inner.fold(init, move |acc, p| unsafe { g(acc, &mut *p) })
    }
}

impl<'a, A> DoubleEndedIterator for IterMut<'a, A, Ix1> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut A> {
        self.inner.next_back().map(|p| unsafe { &mut *p })
    }
}

impl<'a, A, D: Dimension> ExactSizeIterator for IterMut<'a, A, D> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, A, D: Dimension> fmt::Debug for IterMut<'a, A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.inner.len()).finish()
    }
}

unsafe impl<'a, A, D: Dimension> Send for Iter<'a, A, D> where A: Sync {}
unsafe impl<'a, A, D: Dimension> Sync for Iter<'a, A, D> where A: Sync {}
unsafe impl<'a, A, D: Dimension> Send for IterMut<'a, A, D> where A: Send {}
unsafe impl<'a, A, D: Dimension> Sync for IterMut<'a, A, D> where A: Sync {}
