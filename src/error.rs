// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors returned by the checked entry points.

use thiserror::Error;

/// An error related to view shape, strides or placement in a buffer.
///
/// The unchecked core never produces one of these; they come from the
/// checked constructors, checked slicing, and the copy and apply methods
/// that take an external sequence.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{repr}")]
pub struct ShapeError {
    // keep the representation private so it can change later
    repr: ErrorKind,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(kind: ErrorKind) -> Self {
        from_kind(kind)
    }
}

/// Error code for an error related to view shape or layout.
///
/// This enumeration is not exhaustive.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// incompatible shapes, or a source sequence of the wrong length
    #[error("incompatible shapes")]
    IncompatibleShapes,
    /// an index or stride reaches outside the addressed buffer
    #[error("stride leads to out of bounds indexing")]
    OutOfBounds,
    /// an axis was given a zero stride
    #[error("zero stride on an axis")]
    ZeroStride,
    /// two different indices of a mutable view reach the same element
    #[error("stride leads to aliasing view elements")]
    Overlap,
    /// the number of axes does not match the order of the view
    #[error("axis count does not match the view order")]
    OrderMismatch,
    /// offset arithmetic does not fit in `isize`
    #[error("offset computation overflows")]
    Overflow,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

pub fn incompatible_shapes<D, E>(a: &D, b: &E) -> ShapeError
where
    D: std::fmt::Debug,
    E: std::fmt::Debug,
{
    log::debug!("incompatible shapes: {:?} vs {:?}", a, b);
    from_kind(ErrorKind::IncompatibleShapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_error() {
        let e = ShapeError::from_kind(ErrorKind::ZeroStride);
        assert_eq!(e.kind(), ErrorKind::ZeroStride);
        assert_eq!(e, from_kind(ErrorKind::ZeroStride));
        assert_ne!(e, from_kind(ErrorKind::Overlap));
    }

    #[test]
    fn display_names_the_problem() {
        assert_eq!(
            from_kind(ErrorKind::OutOfBounds).to_string(),
            "stride leads to out of bounds indexing"
        );
        assert_eq!(
            from_kind(ErrorKind::OrderMismatch).to_string(),
            "axis count does not match the view order"
        );
    }
}
