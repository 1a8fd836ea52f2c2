//! Implementations of `std::ops`.
//!
//! Binary operators either combine two vectors of the same length and orientation element by
//! element, or broadcast a scalar right-hand side over every element. Products that involve
//! vectors of *different* orientation live in the `matrix` module.

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Sub,
    SubAssign,
};

use crate::{approx::ApproxEq, Orientation, Zero};

use super::Vector;

impl<T, const N: usize, O: Orientation> Index<usize> for Vector<T, N, O> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize, O: Orientation> IndexMut<usize> for Vector<T, N, O> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Only vectors of the same orientation can be compared; a row vector never equals a column vector.
impl<T, U, const N: usize, O: Orientation> PartialEq<Vector<U, N, O>> for Vector<T, N, O>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N, O>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize, O: Orientation> Eq for Vector<T, N, O> where T: Eq {}

impl<T, U, const N: usize, O: Orientation> PartialEq<[U; N]> for Vector<T, N, O>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize, O: Orientation> PartialEq<Vector<U, N, O>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N, O>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize, O: Orientation> ApproxEq for Vector<T, N, O>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize, O: Orientation> Neg for Vector<T, N, O>
where
    T: Neg,
{
    type Output = Vector<T::Output, N, O>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation.
impl<T, const N: usize, O: Orientation> Not for Vector<T, N, O>
where
    T: Not,
{
    type Output = Vector<T::Output, N, O>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

/// Generates the element-wise and the broadcasting form of a binary operator, plus the
/// corresponding compound assignment operator.
macro_rules! binop {
    ($op:ident :: $method:ident, $assign:ident :: $assign_method:ident, $doc:literal) => {
        #[doc = concat!("Element-wise ", $doc, ".")]
        impl<T, const N: usize, O: Orientation> $op<Vector<T, N, O>> for Vector<T, N, O>
        where
            T: $op,
        {
            type Output = Vector<T::Output, N, O>;

            fn $method(self, rhs: Vector<T, N, O>) -> Self::Output {
                self.zip(rhs).map(|(l, r)| l.$method(r))
            }
        }

        #[doc = concat!("Vector-scalar ", $doc, " (broadcast over all elements).")]
        impl<T, const N: usize, O: Orientation> $op<T> for Vector<T, N, O>
        where
            T: $op + Copy,
        {
            type Output = Vector<T::Output, N, O>;

            fn $method(self, rhs: T) -> Self::Output {
                self.map(|elem| elem.$method(rhs))
            }
        }

        #[doc = concat!("Element-wise ", $doc, ".")]
        impl<T, const N: usize, O: Orientation> $assign<Vector<T, N, O>> for Vector<T, N, O>
        where
            T: $assign,
        {
            fn $assign_method(&mut self, rhs: Vector<T, N, O>) {
                self.0
                    .iter_mut()
                    .zip(rhs.0)
                    .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
            }
        }

        #[doc = concat!("Vector-scalar ", $doc, " (broadcast over all elements).")]
        impl<T, const N: usize, O: Orientation> $assign<T> for Vector<T, N, O>
        where
            T: $assign + Copy,
        {
            fn $assign_method(&mut self, rhs: T) {
                self.0.iter_mut().for_each(|lhs| lhs.$assign_method(rhs));
            }
        }
    };
}

binop!(Add::add, AddAssign::add_assign, "addition");
binop!(Sub::sub, SubAssign::sub_assign, "subtraction");
binop!(Mul::mul, MulAssign::mul_assign, "multiplication");

/// Element-wise division.
///
/// Each element is divided by the corresponding element of `rhs` without any check, so division
/// by a zero element follows the semantics of `T` (IEEE-754 infinity or NaN for floats, a panic
/// for integers).
impl<T, const N: usize, O: Orientation> Div<Vector<T, N, O>> for Vector<T, N, O>
where
    T: Div,
{
    type Output = Vector<T::Output, N, O>;

    fn div(self, rhs: Vector<T, N, O>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l / r)
    }
}

/// Vector-scalar division (broadcast over all elements).
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`Vector::checked_div`] to handle this case.
impl<T, const N: usize, O: Orientation> Div<T> for Vector<T, N, O>
where
    T: Zero + PartialEq + Div<Output = T> + Copy,
{
    type Output = Self;

    #[track_caller]
    fn div(self, rhs: T) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Vector-scalar division (broadcast over all elements).
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl<T, const N: usize, O: Orientation> DivAssign<T> for Vector<T, N, O>
where
    T: Zero + PartialEq + Div<Output = T> + Copy,
{
    #[track_caller]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

/// Element-wise logical/bitwise and.
impl<T, const N: usize, O: Orientation> BitAnd<Vector<T, N, O>> for Vector<T, N, O>
where
    T: BitAnd,
{
    type Output = Vector<T::Output, N, O>;

    fn bitand(self, rhs: Vector<T, N, O>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l & r)
    }
}

/// Element-wise logical/bitwise or.
impl<T, const N: usize, O: Orientation> BitOr<Vector<T, N, O>> for Vector<T, N, O>
where
    T: BitOr,
{
    type Output = Vector<T::Output, N, O>;

    fn bitor(self, rhs: Vector<T, N, O>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l | r)
    }
}
