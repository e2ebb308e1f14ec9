#![allow(clippy::many_single_char_names)]

use defmac::defmac;
use itertools::iproduct;
use quickcheck::quickcheck;

use ndstride::prelude::*;

fn grid(rows: usize, cols: usize) -> Vec<i32> {
    (0..(rows * cols) as i32).collect()
}

// keep generated shapes small
fn small(x: u8) -> usize {
    x as usize % 7
}

quickcheck! {
    fn transpose_twice_is_identity(rows: u8, cols: u8) -> bool {
        let (r, c) = (small(rows), small(cols));
        let data = grid(r, c);
        let a = View2::from_shape(&data[..], (r, c)).unwrap();
        let tt = a.t().t();
        tt.as_ptr() == a.as_ptr() && tt.extents() == a.extents()
    }

    fn reverse_twice_is_identity(rows: u8, cols: u8, col_axis: bool) -> bool {
        let (r, c) = (small(rows), small(cols));
        let data = grid(r, c);
        let a = View2::from_shape(&data[..], (r, c)).unwrap();
        let axis = Axis(col_axis as usize);
        let rr = a.reverse_axis(axis).reverse_axis(axis);
        rr.as_ptr() == a.as_ptr() && rr.extents() == a.extents()
    }

    fn reverse_1d_twice_is_identity(len: u8, step: u8) -> bool {
        let (n, s) = (small(len), small(step) + 1);
        let data = vec![0u8; 64];
        let v = View1::from_slice(&data[..], 0, Ix1::strided(n, s as isize)).unwrap();
        let rr = v.reverse().reverse();
        rr.as_ptr() == v.as_ptr() && rr.extents() == v.extents()
    }

    fn transposed_writes_are_seen_by_the_original(rows: u8, cols: u8) -> bool {
        let (r, c) = (small(rows) + 1, small(cols) + 1);
        let mut data = vec![0; r * c];
        for (i, j) in iproduct!(0..r, 0..c) {
            let value = (i * c + j) as i32 + 1;
            {
                let mut a = ViewMut2::from_shape(&mut data[..], (r, c)).unwrap();
                let mut t = a.view_mut().t();
                t[(j, i)] = value;
            }
            let a = View2::from_shape(&data[..], (r, c)).unwrap();
            if a[(i, j)] != value {
                return false;
            }
        }
        true
    }

    fn sub_view_is_contained(len: u8, offset: u8, sub_len: u8) -> bool {
        let n = small(len) * 3;
        let data = grid(1, n);
        let v = View1::from(&data[..]).reverse();
        let o = offset as usize % (n + 1);
        let l = sub_len as usize % (n - o + 1);
        let s = v.slice(o, l).unwrap();
        (0..l).all(|k| s[k] == v[o + k])
    }

    fn window_is_contained(rows: u8, cols: u8, i0: u8, j0: u8) -> bool {
        let (r, c) = (small(rows) + 1, small(cols) + 1);
        let data = grid(r, c);
        let a = View2::from_shape(&data[..], (r, c)).unwrap().rotate_cw();
        let (h, w) = a.lens();
        let (i0, j0) = (i0 as usize % h, j0 as usize % w);
        let s = a.slice((i0, j0), (h - i0, w - j0)).unwrap();
        iproduct!(0..h - i0, 0..w - j0).all(|(i, j)| s[(i, j)] == a[(i0 + i, j0 + j)])
    }
}

#[test]
fn transpose_4x4() {
    let data = grid(4, 4);
    let a = View2::from_shape(&data[..], (4, 4)).unwrap();
    let t = a.t();
    for (i, j) in iproduct!(0..4, 0..4) {
        assert_eq!(t[[i, j]], a[[j, i]]);
    }
    assert_eq!(t.as_ptr(), a.as_ptr());
}

#[test]
fn reverse_rows_of_three_vectors() {
    // a 2 × 2 matrix of 3-element vectors
    let data = [[1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]];
    let a = View2::from_shape(&data[..], (2, 2)).unwrap();
    let r = a.reverse_axis(Axis(0));
    assert_eq!(r.to_vec(), vec![[3, 3, 3], [4, 4, 4], [1, 1, 1], [2, 2, 2]]);

    // the same buffer seen flat: row stride 6, element stride 1
    let flat: Vec<i32> = data.iter().flatten().copied().collect();
    let a = View2::from_shape(&flat[..], (2, 6)).unwrap();
    assert_eq!(a.stride_of(Axis(0)), 6);
    let r = a.reverse_axis(Axis(0));
    assert_eq!(r.to_vec(), vec![3, 3, 3, 4, 4, 4, 1, 1, 1, 2, 2, 2]);
}

#[test]
fn rotations() {
    let data = grid(2, 3);
    let a = View2::from_shape(&data[..], (2, 3)).unwrap();
    defmac!(rotate4 v => v.rotate_cw().rotate_cw().rotate_cw().rotate_cw());
    assert_eq!(rotate4!(a), a);
    assert_eq!(a.rotate_cw().rotate_ccw(), a);
    assert_eq!(a.rotate_half(), a.rotate_cw().rotate_cw());
    assert_eq!(a.rotate_ccw(), a.rotate_half().rotate_cw());

    let cw = a.rotate_cw();
    assert_eq!(cw.lens(), (3, 2));
    assert_eq!(cw.to_vec(), vec![3, 0, 4, 1, 5, 2]);
    let ccw = a.rotate_ccw();
    assert_eq!(ccw.to_vec(), vec![2, 5, 1, 4, 0, 3]);
}

#[test]
fn reversing_an_empty_axis_keeps_the_base() {
    let data = [0u8; 4];
    let a = View2::from_shape(&data[..], (0, 4)).unwrap();
    let r = a.reverse_axis(Axis(0));
    assert_eq!(r.as_ptr(), a.as_ptr());
    assert_eq!(r.stride_of(Axis(0)), -4);
    assert!(r.is_empty());
}

#[test]
fn lines_and_rows() {
    let data = grid(3, 4);
    let a = View2::from_shape(&data[..], (3, 4)).unwrap();
    assert_eq!(a.row(1).to_vec(), vec![4, 5, 6, 7]);
    assert_eq!(a.column(2).to_vec(), vec![2, 6, 10]);
    assert_eq!(a.t().row(2), a.column(2));
    assert_eq!(a.line((1, 1), 3, Axis(1)).unwrap().to_vec(), vec![5, 6, 7]);
    assert_eq!(a.line((0, 3), 3, Axis(0)).unwrap().to_vec(), vec![3, 7, 11]);
    assert!(a.line((1, 2), 3, Axis(1)).is_err());
    assert!(a.line((0, 4), 1, Axis(0)).is_err());
    assert_eq!(a.into_column(0).reverse().to_vec(), vec![8, 4, 0]);
}

#[test]
#[should_panic]
fn row_out_of_bounds() {
    let data = grid(2, 2);
    let a = View2::from_shape(&data[..], (2, 2)).unwrap();
    a.row(2);
}

#[test]
fn writable_rows_and_columns() {
    let mut data = vec![0; 6];
    let mut a = ViewMut2::from_shape(&mut data[..], (2, 3)).unwrap();
    a.row_mut(1).fill(1);
    a.column_mut(2).apply(|x| x + 10);
    for (i, mut row) in a.rows_mut().enumerate() {
        row[0] = 100 * (i as i32 + 1);
    }
    assert_eq!(data, vec![100, 0, 10, 200, 1, 11]);
}

#[test]
fn unchecked_slices_follow_the_base_formula() {
    let data = grid(4, 5);
    let a = View2::from_shape(&data[..], (4, 5)).unwrap();
    let s = unsafe { a.slice_unchecked((1, 2), (2, 2)) };
    assert_eq!(s.as_ptr(), unsafe { a.as_ptr().add(5 + 2) });
    assert_eq!(s.to_vec(), vec![7, 8, 12, 13]);
    let v = View1::from(&data[..]);
    let s = unsafe { v.slice_unchecked(3, 4) };
    assert_eq!(s.to_vec(), vec![3, 4, 5, 6]);
}
