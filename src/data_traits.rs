// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The data traits, implemented by the view storage markers.

use crate::ViewRepr;

/// Storage that gives shared access to elements of type `Elem`.
///
/// ***Note:*** `Data` is not an extension interface at this point.
/// Traits in Rust can serve many different roles. This trait is public because
/// it is used as a bound on public methods.
pub unsafe trait Data: Sized {
    /// The array element type.
    type Elem;

    private_decl! {}
}

/// Storage that also gives exclusive access, so elements may be written.
///
/// ***Note:*** `DataMut` is not an extension interface at this point.
pub unsafe trait DataMut: Data {}

unsafe impl<'a, A> Data for ViewRepr<&'a A> {
    type Elem = A;

    private_impl! {}
}

unsafe impl<'a, A> Data for ViewRepr<&'a mut A> {
    type Elem = A;

    private_impl! {}
}

unsafe impl<'a, A> DataMut for ViewRepr<&'a mut A> {}
