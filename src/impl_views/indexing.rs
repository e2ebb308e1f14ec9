// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::arraytraits::array_out_of_bounds;
use crate::{Dimension, NdIndex, View, ViewMut};

/// Extra indexing methods for views
///
/// These methods are very similar to regular indexing or calling of the
/// `get`/`get_mut` methods that we can use on any view. The difference
/// here is in the length of lifetime in the resulting reference.
///
/// **Note** that [`View`] (read-only) and [`ViewMut`] (read-write) differ
/// in how they are allowed implement this trait. If you put in a
/// `View<'a, T, D>` here, you get references `&'a T` out.
///
/// For `ViewMut` to obey the borrowing rules we have to consume the view if
/// we call any of these methods.
///
/// ```
/// use ndstride::{IndexLonger, View2};
///
/// let data = [0.; 256];
/// let long_life_ref = {
///     // make a 16 × 16 view
///     let view = View2::from_shape(&data[..], (16, 16)).unwrap();
///
///     // the reference lives as long as `data`, not as long as `view`
///     IndexLonger::index(&view, [0, 1])
/// };
///
/// assert_eq!(long_life_ref, &0.);
/// ```
pub trait IndexLonger<I> {
    /// The type of the reference to the element that is produced, including
    /// its lifetime.
    type Output;

    /// Get a reference of a element through the view.
    ///
    /// **Panics** if index is out of bounds.
    fn index(self, index: I) -> Self::Output;

    /// Get a reference of a element through the view, or `None` if the
    /// index is out of bounds.
    fn get(self, index: I) -> Option<Self::Output>;

    /// Get a reference of a element through the view without boundary check
    ///
    /// **Note:** only unchecked for non-debug builds of ndstride.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    unsafe fn uget(self, index: I) -> Self::Output;
}

impl<'a, 'b, I, A, D> IndexLonger<I> for &'b View<'a, A, D>
where
    I: NdIndex<D>,
    D: Dimension,
{
    type Output = &'a A;

    fn index(self, index: I) -> &'a A {
        match self.get_ptr(&index) {
            Some(ptr) => unsafe { &*ptr },
            None => array_out_of_bounds(&index, &self.dim),
        }
    }

    fn get(self, index: I) -> Option<&'a A> {
        self.get_ptr(&index).map(|ptr| unsafe { &*ptr })
    }

    unsafe fn uget(self, index: I) -> &'a A {
        debug_assert!(index.index_checked(&self.dim).is_some(), "index out of bounds");
        &*self.ptr.as_ptr().offset(index.index_unchecked(&self.dim))
    }
}

impl<'a, I, A, D> IndexLonger<I> for ViewMut<'a, A, D>
where
    I: NdIndex<D>,
    D: Dimension,
{
    type Output = &'a mut A;

    fn index(self, index: I) -> &'a mut A {
        match self.get_ptr(&index) {
            Some(ptr) => unsafe { &mut *ptr },
            None => array_out_of_bounds(&index, &self.dim),
        }
    }

    fn get(self, index: I) -> Option<&'a mut A> {
        self.get_ptr(&index).map(|ptr| unsafe { &mut *ptr })
    }

    unsafe fn uget(self, index: I) -> &'a mut A {
        debug_assert!(index.index_checked(&self.dim).is_some(), "index out of bounds");
        &mut *self.ptr.as_ptr().offset(index.index_unchecked(&self.dim))
    }
}
