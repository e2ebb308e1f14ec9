#![allow(clippy::many_single_char_names)]

use defmac::defmac;

use ndstride::prelude::*;
use ndstride::IndexLonger;

#[test]
fn checked_construction_rejects_bad_layouts() {
    let data = [0; 12];
    defmac!(kind dim => View2::from_slice(&data[..], (0, 0), dim).unwrap_err().kind());

    assert_eq!(kind!(Ix2::strided((3, 4), (0, 1))), ErrorKind::ZeroStride);
    assert_eq!(kind!(Ix2::strided((4, 4), (4, 1))), ErrorKind::OutOfBounds);
    assert_eq!(kind!(Ix2::strided((3, 4), (-4, 1))), ErrorKind::OutOfBounds);
    assert_eq!(kind!(Ix2::strided((usize::MAX, 2), (1, 1))), ErrorKind::Overflow);

    // a reversed layout fits once the base sits at the far end
    let a = View2::from_slice(&data[..], (-2, 0), Ix2::strided((3, 4), (-4, 1))).unwrap();
    assert_eq!(a.lens(), (3, 4));
    assert_eq!(a.as_ptr(), unsafe { data.as_ptr().add(8) });
}

#[test]
fn lengths_beyond_isize_overflow() {
    let mut data = [0u8; 10];
    let err = View1::from_slice(&data[..], 5, Ix1::strided(usize::MAX, 1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    let err = View2::from_slice(&data[..], (0, 0), Ix2::strided((1, usize::MAX), (1, 1))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    let err = ViewMut1::from_slice(&mut data[..], 0, Ix1::strided(usize::MAX, -1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn overlapping_layouts_are_read_only() {
    let mut data: Vec<i32> = (0..8).collect();
    // rows of four, two apart: windows of a signal
    let windows = Ix2::strided((3, 4), (2, 1));
    let a = View2::from_slice(&data[..], (0, 0), windows).unwrap();
    assert_eq!(a.row(1).to_vec(), vec![2, 3, 4, 5]);
    let err = ViewMut2::from_slice(&mut data[..], (0, 0), windows).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overlap);
}

#[test]
fn order_is_checked_for_runtime_layouts() {
    let err = Ix2::from_slices(&[2, 3, 4], &[12, 4, 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OrderMismatch);
    let d = Ix2::from_slices(&[2, 3], &[3, 1]).unwrap();
    assert_eq!(d, Ix2::row_major((2, 3)));
    assert!(Ix1::from_slices(&[2], &[]).is_err());
}

#[test]
fn windows_over_images() {
    // 5 × 3 image with two bytes of row padding
    let stride = 7;
    let image: Vec<u8> = (0..21).collect();
    let w = View2::from_window(&image[..], (1, 1), (3, 2), (stride, 1)).unwrap();
    assert_eq!(w.to_vec(), vec![8, 9, 10, 15, 16, 17]);
    // bottom-up storage
    let flipped = View2::from_window(&image[..], (0, 0), (5, 3), (stride, 1))
        .unwrap()
        .reverse_axis(Axis(0));
    assert_eq!(flipped.row(0).to_vec(), vec![14, 15, 16, 17, 18]);
    assert!(View2::from_window(&image[..], (3, 1), (3, 2), (stride, 1)).is_ok());
    assert!(View2::from_window(&image[..], (3, 2), (3, 2), (stride, 1)).is_err());
}

#[test]
fn raw_parts_at_adds_the_origin() {
    let data: Vec<i32> = (0..12).collect();
    let v = unsafe { View2::from_raw_parts_at(data.as_ptr(), (1, 1), Ix2::row_major((2, 3))) };
    assert_eq!(v.to_vec(), vec![4, 5, 6, 7, 8, 9]);
    let v = unsafe { View1::from_raw_parts(data.as_ptr().add(11), Ix1::strided(4, -3)) };
    assert_eq!(v.to_vec(), vec![11, 8, 5, 2]);
}

#[test]
fn indexing() {
    let data = [1, 2, 3, 4, 5, 6];
    let a = View2::from_shape_col_major(&data[..], (2, 3)).unwrap();
    assert_eq!(a[(0, 1)], 3);
    assert_eq!(a[[1, 2]], 6);
    assert_eq!(a.get((1, 0)), Some(&2));
    assert_eq!(a.get((2, 0)), None);
    assert_eq!(unsafe { *a.uget((1, 1)) }, 4);
    assert_eq!(unsafe { *a.uget_flat(2) }, 5);
    assert_eq!(a.len_of(Axis(1)), 3);
    assert_eq!(a.stride_of(Axis(1)), 2);
    assert_eq!(a.size(), 6);
    assert_eq!(a.ndim(), 2);
}

#[test]
#[should_panic]
fn index_out_of_bounds_panics() {
    let data = [1, 2, 3, 4];
    let a = View2::from_shape(&data[..], (2, 2)).unwrap();
    let _ = a[(0, 2)];
}

#[test]
fn longer_lived_references() {
    let mut data = [0; 6];
    {
        let a = ViewMut2::from_shape(&mut data[..], (2, 3)).unwrap();
        *a.index((1, 1)) = 7;
    }
    let r = {
        let a = View2::from_shape(&data[..], (2, 3)).unwrap();
        IndexLonger::index(&a, (1, 1))
    };
    assert_eq!(*r, 7);
}

#[test]
fn equality_ignores_memory_layout() {
    let rows = [1, 2, 3, 4, 5, 6];
    let cols = [1, 4, 2, 5, 3, 6];
    let a = View2::from_shape(&rows[..], (2, 3)).unwrap();
    let b = View2::from_shape_col_major(&cols[..], (2, 3)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, b.reverse());
    assert_ne!(a, View2::from_shape(&rows[..], (3, 2)).unwrap());
}

#[test]
fn slicing_1d() {
    let data: Vec<i32> = (0..10).collect();
    let v = View1::from(&data[..]);
    let s = v.slice(2, 5).unwrap();
    assert_eq!(s.to_slice(), Some(&data[2..7]));
    assert_eq!(v.slice(8, 3).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(v.slice(10, 0).unwrap().len(), 0);
    assert!(s.reverse().to_slice().is_none());

    let (a, b) = v.split_at(4);
    assert_eq!(a.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(b.len(), 6);
}

#[test]
fn split_mut_halves_are_disjoint() {
    let mut data = [0; 5];
    let v = ViewMut1::from(&mut data[..]);
    let (mut a, mut b) = v.split_at(2);
    a.fill(1);
    b.fill(2);
    assert_eq!(data, [1, 1, 2, 2, 2]);
}

#[test]
fn empty_view_at_the_end() {
    let data = [1, 2, 3, 4];
    let v = View1::from_slice(&data[..], 4, Ix1::contiguous(0)).unwrap();
    assert!(v.is_empty());
    assert_eq!(v.iter().next(), None);
    assert!(View1::from_slice(&data[..], 5, Ix1::contiguous(0)).is_err());
}

#[test]
fn zero_sized_elements() {
    let data = [(); 6];
    let a = View2::from_shape(&data[..], (2, 3)).unwrap();
    assert_eq!(a.iter().count(), 6);
    assert_eq!(a.t().rows().count(), 3);
    assert_eq!(a.reverse().iter().len(), 6);
    assert_eq!(a.to_vec().len(), 6);
    let mut n = 0;
    a.for_each(|_| n += 1);
    assert_eq!(n, 6);
    assert_eq!(a.t().fold(0, |acc, _| acc + 1), 6);
}

#[test]
fn into_slice_gives_back_strided_views() {
    let mut data = [1, 2, 3, 4];
    let v = ViewMut1::from(&mut data[..]).reverse();
    let v = match v.into_slice() {
        Ok(_) => panic!("a reversed view is not a slice"),
        Err(v) => v,
    };
    assert_eq!(v.into_view().to_vec(), vec![4, 3, 2, 1]);
}
