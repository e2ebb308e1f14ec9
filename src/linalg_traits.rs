// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::{One, Zero};

use std::ops::{Add, Mul};

/// Element types accepted by [`general_mat_mul`](crate::general_mat_mul)
/// and the dot products.
///
/// `'static` so `f32` and `f64` can be routed to the packed kernels by
/// type id; `Copy` because the products read each element many times.
/// Integers qualify as well and take the plain loop.
pub trait LinalgScalar: 'static + Copy + Zero + One + Add<Output = Self> + Mul<Output = Self> {}

impl<T> LinalgScalar for T where T: 'static + Copy + Zero + One + Add<Output = T> + Mul<Output = T> {}
