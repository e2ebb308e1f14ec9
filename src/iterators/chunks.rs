// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::Cursor1;
use crate::{Extent, Ix, Ix1, Ixs, View1, ViewMut1};

/// An iterator over consecutive, non-overlapping runs of exactly `size`
/// elements of a 1-D view.
///
/// Elements that do not fill a whole run are left out of the iteration and
/// available from [`.remainder()`](ExactChunks::remainder).
///
/// See [`.exact_chunks()`](crate::ViewBase::exact_chunks) for more
/// information.
pub struct ExactChunks<'a, A> {
    head: Cursor1<A>,
    left: Ix,
    chunk: Extent,
    rem: View1<'a, A>,
}

// Chunk head cursor, chunk count, chunk extent, tail start and tail length.
fn split_chunks<A>(ptr: *mut A, e: Extent, size: Ix) -> (Cursor1<A>, Ix, Extent, Ixs, Ix) {
    assert_ne!(size, 0, "chunk size must be non-zero");
    let n = e.len / size;
    let head = Cursor1::new(ptr, e.stride.wrapping_mul(size as Ixs));
    let tail_start = (n * size) as Ixs;
    (head, n, Extent::new(e.stride, size), tail_start, e.len - n * size)
}

impl<'a, A> ExactChunks<'a, A> {
    pub(crate) fn new(v: View1<'a, A>, size: Ix) -> Self {
        let e = v.dim.axes()[0];
        let (head, left, chunk, tail_start, tail_len) = split_chunks(v.ptr.as_ptr(), e, size);
        let rem = unsafe { v.slice_unchecked(tail_start, tail_len) };
        ExactChunks { head, left, chunk, rem }
    }

    /// The elements after the last whole chunk.
    pub fn remainder(&self) -> View1<'a, A> {
        self.rem
    }
}

impl<'a, A> Iterator for ExactChunks<'a, A> {
    type Item = View1<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let chunk = unsafe { View1::new_(self.head.as_ptr(), Ix1::from_extents([self.chunk])) };
        self.head.step();
        self.left -= 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, A> DoubleEndedIterator for ExactChunks<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        let ptr = self.head.at(self.left as Ixs);
        Some(unsafe { View1::new_(ptr, Ix1::from_extents([self.chunk])) })
    }
}

impl<'a, A> ExactSizeIterator for ExactChunks<'a, A> {}

impl<'a, A> Clone for ExactChunks<'a, A> {
    fn clone(&self) -> Self {
        ExactChunks {
            head: self.head,
            left: self.left,
            chunk: self.chunk,
            rem: self.rem,
        }
    }
}

/// Writable counterpart of [`ExactChunks`].
///
/// See [`.exact_chunks_mut()`](crate::ViewBase::exact_chunks_mut) for more
/// information.
pub struct ExactChunksMut<'a, A> {
    head: Cursor1<A>,
    left: Ix,
    chunk: Extent,
    rem: ViewMut1<'a, A>,
}

impl<'a, A> ExactChunksMut<'a, A> {
    pub(crate) fn new(v: ViewMut1<'a, A>, size: Ix) -> Self {
        let e = v.dim.axes()[0];
        let (head, left, chunk, tail_start, tail_len) = split_chunks(v.ptr.as_ptr(), e, size);
        let rem = unsafe { v.slice_unchecked(tail_start, tail_len) };
        ExactChunksMut { head, left, chunk, rem }
    }

    /// Consume the iterator and return the elements after the last whole
    /// chunk.
    pub fn into_remainder(self) -> ViewMut1<'a, A> {
        self.rem
    }
}

impl<'a, A> Iterator for ExactChunksMut<'a, A> {
    type Item = ViewMut1<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let chunk = unsafe { ViewMut1::new_(self.head.as_ptr(), Ix1::from_extents([self.chunk])) };
        self.head.step();
        self.left -= 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, A> DoubleEndedIterator for ExactChunksMut<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        let ptr = self.head.at(self.left as Ixs);
        Some(unsafe { ViewMut1::new_(ptr, Ix1::from_extents([self.chunk])) })
    }
}

impl<'a, A> ExactSizeIterator for ExactChunksMut<'a, A> {}

unsafe impl<'a, A> Send for ExactChunks<'a, A> where A: Sync {}
unsafe impl<'a, A> Sync for ExactChunks<'a, A> where A: Sync {}
unsafe impl<'a, A> Send for ExactChunksMut<'a, A> where A: Send {}
unsafe impl<'a, A> Sync for ExactChunksMut<'a, A> where A: Sync {}
