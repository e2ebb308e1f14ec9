// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndstride prelude.
//!
//! This module contains the most used types, type aliases and traits that
//! you can import easily as a group.
//!
//! ```
//! use ndstride::prelude::*;
//!
//! let data = [1, 2, 3, 4];
//! let a: View2<i32> = View2::from_shape(&data[..], (2, 2)).unwrap();
//! assert_eq!(a.reverse_axis(Axis(0))[(0, 1)], 4);
//! ```

#[doc(no_inline)]
pub use crate::{View, ViewBase, ViewMut};

#[doc(no_inline)]
pub use crate::{View1, View2, ViewMut1, ViewMut2};

#[doc(no_inline)]
pub use crate::{Axis, Dim, Dimension, Extent, Ix1, Ix2};

#[doc(no_inline)]
pub use crate::{Cursor1, Cursor2};

#[doc(no_inline)]
pub use crate::{Matrix, Vector};

#[doc(no_inline)]
pub use crate::{ContiguousSource, IndexLonger, LinalgScalar};

#[doc(no_inline)]
pub use crate::{ErrorKind, ShapeError};
