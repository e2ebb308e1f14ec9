// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Iterators over views.
//!
//! This module collects the concrete iterator structs. They are created by
//! methods on [`ViewBase`](crate::ViewBase) such as `.iter()`, `.rows()`
//! and `.exact_chunks()`.

pub use crate::iterators::{
    Baseiter1,
    Baseiter2,
    ExactChunks,
    ExactChunksMut,
    Iter,
    IterMut,
    Lanes,
    LanesMut,
};
