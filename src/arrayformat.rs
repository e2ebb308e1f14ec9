// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use super::{Data, Dimension, ViewBase};

// Write the elements as nested brackets, one bracket level per axis.
fn format_view<A, S, D, F>(view: &ViewBase<S, D>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
    D: Dimension,
    S: Data<Elem = A>,
{
    let inner_len = view.dim.extents()[D::NDIM - 1].len;
    if D::NDIM == 1 {
        write!(f, "[")?;
        for (i, elt) in view.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            format(elt, f)?;
        }
        return write!(f, "]");
    }
    let rows = view.dim.extents()[0].len;
    write!(f, "[")?;
    let mut it = view.iter();
    for r in 0..rows {
        if r != 0 {
            write!(f, ",\n ")?;
        }
        write!(f, "[")?;
        for (i, elt) in it.by_ref().take(inner_len).enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            format(elt, f)?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

/// Format the view using `Debug` and apply the formatting parameters used
/// to each element, followed by its layout.
impl<A: fmt::Debug, S, D: Dimension> fmt::Debug for ViewBase<S, D>
where
    S: Data<Elem = A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_view(self, f, <A as fmt::Debug>::fmt)?;
        write!(f, ", layout={:?}", self.dim)
    }
}
