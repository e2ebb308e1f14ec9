// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::marker::PhantomData;

/// Storage marker of a view.
///
/// *Don't use this type directly; use the aliases [`View`](crate::View)
/// and [`ViewMut`](crate::ViewMut).*
///
/// A view owns nothing. The marker only carries the borrow, `&'a A` or
/// `&'a mut A`, so the borrow checker sees what the view points into.
pub struct ViewRepr<A> {
    life: PhantomData<A>,
}

impl<A> ViewRepr<A> {
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        ViewRepr { life: PhantomData }
    }
}

impl<'a, A> Clone for ViewRepr<&'a A> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A> Copy for ViewRepr<&'a A> {}

impl<A> fmt::Debug for ViewRepr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewRepr")
    }
}
