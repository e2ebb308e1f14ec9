// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! **Requires crate feature `"approx"`**

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Data, Dimension, Matrix, Vector, ViewBase};

// Pairwise in iteration order, after a length check.
fn all_pairs<A, B, S, S2, D, F>(a: &ViewBase<S, D>, b: &ViewBase<S2, D>, mut f: F) -> bool
where
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
    F: FnMut(&A, &B) -> bool,
{
    a.lens() == b.lens() && a.iter().zip(b.iter()).all(|(x, y)| f(x, y))
}

/// **Requires crate feature `"approx"`**
impl<A, B, S, S2, D> AbsDiffEq<ViewBase<S2, D>> for ViewBase<S, D>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &ViewBase<S2, D>, epsilon: A::Epsilon) -> bool {
        all_pairs(self, other, |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<A, B, S, S2, D> RelativeEq<ViewBase<S2, D>> for ViewBase<S, D>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &ViewBase<S2, D>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        all_pairs(self, other, |a, b| {
            A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
        })
    }
}

/// **Requires crate feature `"approx"`**
impl<A, B, S, S2, D> UlpsEq<ViewBase<S2, D>> for ViewBase<S, D>
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &ViewBase<S2, D>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        all_pairs(self, other, |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}

macro_rules! impl_approx_container {
    ([$($generics:tt)*] $ty:ty) => {
        /// **Requires crate feature `"approx"`**
        impl<A, $($generics)*> AbsDiffEq for $ty
        where
            A: AbsDiffEq,
            A::Epsilon: Clone,
        {
            type Epsilon = A::Epsilon;

            fn default_epsilon() -> A::Epsilon {
                A::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: A::Epsilon) -> bool {
                self.view().abs_diff_eq(&other.view(), epsilon)
            }
        }

        /// **Requires crate feature `"approx"`**
        impl<A, $($generics)*> RelativeEq for $ty
        where
            A: RelativeEq,
            A::Epsilon: Clone,
        {
            fn default_max_relative() -> A::Epsilon {
                A::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
                self.view().relative_eq(&other.view(), epsilon, max_relative)
            }
        }

        /// **Requires crate feature `"approx"`**
        impl<A, $($generics)*> UlpsEq for $ty
        where
            A: UlpsEq,
            A::Epsilon: Clone,
        {
            fn default_max_ulps() -> u32 {
                A::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: A::Epsilon, max_ulps: u32) -> bool {
                self.view().ulps_eq(&other.view(), epsilon, max_ulps)
            }
        }
    };
}

impl_approx_container!([const N: usize] Vector<A, N>);
impl_approx_container!([const M: usize, const N: usize] Matrix<A, M, N>);

#[cfg(test)]
mod tests {
    use crate::{Matrix, View2};
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    #[test]
    fn abs_diff_eq() {
        let a = [0f32, 2., -0.000010001, 100000000.];
        let mut b = [0f32, 1., -0.000010002, 100000001.];
        assert_abs_diff_ne!(
            View2::from_shape(&a[..], (2, 2)).unwrap(),
            View2::from_shape(&b[..], (2, 2)).unwrap()
        );
        b[1] = 2.;
        assert_abs_diff_eq!(
            View2::from_shape(&a[..], (2, 2)).unwrap(),
            View2::from_shape(&b[..], (2, 2)).unwrap()
        );
    }

    #[test]
    fn shape_mismatch_is_never_equal() {
        let a = [1f64; 6];
        assert_abs_diff_ne!(
            View2::from_shape(&a[..], (2, 3)).unwrap(),
            View2::from_shape(&a[..], (3, 2)).unwrap()
        );
    }

    #[test]
    fn containers() {
        let m = Matrix::new([[1f64, 2.], [3., 4.]]);
        let n = Matrix::new([[1f64 + 1e-12, 2.], [3., 4.]]);
        assert_relative_eq!(m, n, max_relative = 1e-10);
        assert_ulps_eq!(m.transpose().transpose(), m);
    }
}
