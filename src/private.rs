// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sealing support for traits that only this crate may implement.
//!
//! The traits stay public because they appear as bounds on public methods,
//! but the marker returned by the hidden method cannot be named from outside,
//! so no other crate can provide an implementation.

pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// Implementation is reserved to this crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
