use std::cell::RefCell;

use itertools::assert_equal;
use quickcheck::quickcheck;

use ndstride::prelude::*;

#[test]
fn double_ended() {
    let data: Vec<f64> = (0..8).map(f64::from).collect();
    let a = View1::from(&data[..]);
    let mut it = a.iter().copied();
    assert_eq!(it.next(), Some(0.));
    assert_eq!(it.next_back(), Some(7.));
    assert_eq!(it.next(), Some(1.));
    assert_eq!(it.len(), 5);
    assert_eq!(it.rev().last(), Some(2.));
}

#[test]
fn iteration_order_follows_the_view() {
    let data: Vec<i32> = (0..6).collect();
    let a = View2::from_shape(&data[..], (2, 3)).unwrap();
    assert_equal(a.iter().copied(), 0..6);
    assert_equal(a.t().iter().copied(), vec![0, 3, 1, 4, 2, 5]);
    assert_equal(a.rotate_half().iter().copied(), (0..6).rev());
    assert_eq!(a.fold(0, |acc, &x| acc + x), 15);

    let mut seen = Vec::new();
    a.t().for_each(|&x| seen.push(x));
    assert_eq!(seen, a.t().to_vec());
}

#[test]
fn iter_mut_writes_in_place() {
    let mut data = [0; 6];
    let mut a = ViewMut2::from_shape_col_major(&mut data[..], (2, 3)).unwrap();
    for (i, x) in a.iter_mut().enumerate() {
        *x = i;
    }
    // logical order is row-major, storage is column-major
    assert_eq!(data, [0, 3, 1, 4, 2, 5]);
    let mut b = ViewMut1::from(&mut data[..]);
    for x in &mut b {
        *x *= 2;
    }
    assert_equal(&b, &[0, 6, 2, 8, 4, 10]);
}

#[test]
fn copy_out_in_iteration_order() {
    let data: Vec<i32> = (0..6).collect();
    let a = View2::from_shape(&data[..], (2, 3)).unwrap();
    let mut out = [-1; 7];
    a.t().copy_to_slice(&mut out).unwrap();
    assert_eq!(out, [0, 3, 1, 4, 2, 5, -1]);
    a.reverse_axis(Axis(1)).copy_to_slice(&mut out[1..]).unwrap();
    assert_eq!(out, [0, 2, 1, 0, 5, 4, 3]);

    let mut short = [0; 5];
    let err = a.copy_to_slice(&mut short).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn lanes() {
    let data: Vec<i32> = (0..12).collect();
    let a = View2::from_shape(&data[..], (3, 4)).unwrap();
    let rows: Vec<Vec<i32>> = a.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10, 11]]);
    assert_equal(a.columns().map(|c| c[2]), vec![8, 9, 10, 11]);
    assert_equal(a.rows().rev().map(|r| r[0]), vec![8, 4, 0]);
    assert_eq!(a.columns().len(), 4);
    assert_equal(a.into_rows().map(|r| r.len()), vec![4; 3]);

    let mut it = a.rows();
    it.next_back();
    assert_equal(it.map(|r| r[3]), vec![3, 7]);
}

#[test]
fn lanes_mut() {
    let mut data = [0; 6];
    {
        let mut a = ViewMut2::from_shape(&mut data[..], (2, 3)).unwrap();
        for (i, mut col) in a.columns_mut().enumerate() {
            col.fill(i as i32);
        }
        for mut row in a.rows_mut().rev() {
            row.scale_in_place(2);
        }
    }
    assert_eq!(data, [0, 2, 4, 0, 2, 4]);
    let a = ViewMut2::from_shape(&mut data[..], (3, 2)).unwrap();
    for mut r in a.into_rows_mut() {
        r[0] = -1;
    }
    assert_eq!(data, [-1, 2, -1, 0, -1, 4]);
}

#[test]
fn exact_chunks() {
    let data: Vec<i32> = (0..11).collect();
    let v = View1::from(&data[..]);
    let chunks = v.exact_chunks(3);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.remainder().to_vec(), vec![9, 10]);
    assert_equal(chunks.map(|c| c.to_vec()), vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);

    // chunks of a reversed view walk backwards through memory
    let c = v.reverse().into_exact_chunks(4);
    assert_eq!(c.remainder().to_vec(), vec![2, 1, 0]);
    assert_equal(c.rev().map(|c| c[0]), vec![6, 10]);

    let c = v.exact_chunks(12);
    assert_eq!(c.len(), 0);
    assert_eq!(c.remainder().len(), 11);
}

#[test]
#[should_panic]
fn zero_sized_chunks_panic() {
    let data = [1, 2, 3];
    View1::from(&data[..]).exact_chunks(0);
}

#[test]
fn exact_chunks_mut() {
    let mut data = [0u8; 10];
    let mut v = ViewMut1::from(&mut data[..]);
    for (i, mut c) in v.exact_chunks_mut(4).enumerate() {
        c.fill(i as u8 + 1);
    }
    let mut it = v.into_exact_chunks_mut(3);
    it.next();
    it.into_remainder().fill(9);
    assert_eq!(data, [1, 1, 1, 1, 2, 2, 2, 2, 0, 9]);
}

#[test]
fn serializer_row_ends() {
    let data: Vec<u8> = (1..=6).collect();
    let a = View2::from_shape(&data[..], (2, 3)).unwrap().reverse_axis(Axis(0));
    let out = RefCell::new(String::new());
    a.for_each_with_row_end(
        |x| out.borrow_mut().push_str(&x.to_string()),
        |row| out.borrow_mut().push_str(&format!("|{}\n", row)),
    );
    assert_eq!(out.into_inner(), "456|0\n123|1\n");
    assert_eq!(a.to_vec_padded(2, 0), vec![4, 5, 6, 0, 0, 1, 2, 3, 0, 0]);
    assert_eq!(a.t().to_vec_padded(0, 0), vec![4, 1, 5, 2, 6, 3]);
}

quickcheck! {
    fn iter_len_matches_lengths(rows: u8, cols: u8) -> bool {
        let (rows, cols) = (rows as usize % 9, cols as usize % 9);
        let data = vec![0u16; rows * cols];
        let a = View2::from_shape(&data[..], (rows, cols)).unwrap();
        a.iter().len() == rows * cols
            && a.t().iter().count() == rows * cols
            && a.rows().len() == rows
            && a.columns().len() == cols
    }

    fn chunks_cover_the_view(len: u8, size: u8) -> bool {
        let size = size as usize % 7 + 1;
        let data: Vec<u8> = (0..len).collect();
        let v = View1::from(&data[..]);
        let c = v.exact_chunks(size);
        let mut flat: Vec<u8> = c.clone().flat_map(|c| c.to_vec()).collect();
        flat.extend(c.remainder().iter());
        flat == data && c.remainder().len() < size
    }
}
