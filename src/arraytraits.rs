// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::hash;
use std::ops::{Index, IndexMut};

use crate::iter::{Iter, IterMut};
use crate::{Data, DataMut, Dimension, Ix1, NdIndex, View, View1, ViewBase, ViewMut, ViewMut1};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds<I, D>(index: &I, dim: &D) -> !
where
    I: std::fmt::Debug,
    D: std::fmt::Debug,
{
    panic!("ndstride: index {:?} is out of bounds for view of layout {:?}", index, dim)
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<S, D, I> Index<I> for ViewBase<S, D>
where
    D: Dimension,
    I: NdIndex<D>,
    S: Data,
{
    type Output = S::Elem;

    #[inline]
    fn index(&self, index: I) -> &S::Elem {
        match self.get_ptr(&index) {
            Some(ptr) => unsafe { &*ptr },
            None => array_out_of_bounds(&index, &self.dim),
        }
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<S, D, I> IndexMut<I> for ViewBase<S, D>
where
    D: Dimension,
    I: NdIndex<D>,
    S: DataMut,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut S::Elem {
        match self.get_ptr(&index) {
            Some(ptr) => unsafe { &mut *ptr },
            None => array_out_of_bounds(&index, &self.dim),
        }
    }
}

/// Return `true` if the lengths match and all elements of `self` and
/// `rhs` are equal, position by position. Where the elements live in
/// memory does not matter.
impl<A, B, S, S2, D> PartialEq<ViewBase<S2, D>> for ViewBase<S, D>
where
    A: PartialEq<B>,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
{
    fn eq(&self, rhs: &ViewBase<S2, D>) -> bool {
        self.lens() == rhs.lens() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<S, D> Eq for ViewBase<S, D>
where
    D: Dimension,
    S: Data,
    S::Elem: Eq,
{
}

impl<S, D> hash::Hash for ViewBase<S, D>
where
    D: Dimension,
    S: Data,
    S::Elem: hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.lens(), state);
        for elt in self.iter() {
            hash::Hash::hash(elt, state)
        }
    }
}

impl<'a, S, D> IntoIterator for &'a ViewBase<S, D>
where
    D: Dimension,
    S: Data,
{
    type Item = &'a S::Elem;
    type IntoIter = Iter<'a, S::Elem, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S, D> IntoIterator for &'a mut ViewBase<S, D>
where
    D: Dimension,
    S: DataMut,
{
    type Item = &'a mut S::Elem;
    type IntoIter = IterMut<'a, S::Elem, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, A, D> IntoIterator for View<'a, A, D>
where
    D: Dimension,
{
    type Item = &'a A;
    type IntoIter = Iter<'a, A, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_()
    }
}

impl<'a, A, D> IntoIterator for ViewMut<'a, A, D>
where
    D: Dimension,
{
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_()
    }
}

/// Implementation of `View1::from(&S)` where `S` is a slice or sliceable.
impl<'a, A, Slice: ?Sized> From<&'a Slice> for View1<'a, A>
where
    Slice: AsRef<[A]>,
{
    /// Create a one-dimensional read-only view of the data in `slice`.
    fn from(slice: &'a Slice) -> Self {
        View::<A, Ix1>::from_contiguous(slice.as_ref())
    }
}

/// Implementation of `ViewMut1::from(&mut S)` where `S` is a slice or sliceable.
impl<'a, A, Slice: ?Sized> From<&'a mut Slice> for ViewMut1<'a, A>
where
    Slice: AsMut<[A]>,
{
    /// Create a one-dimensional read-write view of the data in `slice`.
    fn from(slice: &'a mut Slice) -> Self {
        ViewMut::<A, Ix1>::from_contiguous(slice.as_mut())
    }
}
