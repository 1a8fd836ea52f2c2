//! Matrix operators, and the products between matrices and vectors.
//!
//! Which product applies is decided by the operand types alone:
//!
//! | Expression                              | Result                 |
//! |-----------------------------------------|------------------------|
//! | `Matrix<R, C> * Vector<C, Column>`      | `Vector<R, Column>`    |
//! | `Vector<R, Row> * Matrix<R, C>`         | `Vector<C, Row>`       |
//! | `Matrix<R, N> * Matrix<N, C>`           | `Matrix<R, C>`         |
//! | `Vector<R, Column> * Vector<C, Row>`    | `Matrix<R, C>` (outer) |

use std::ops::{Add, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use crate::{approx::ApproxEq, traits::Number, Column, Matrix, Row, Vector, Zero};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_flat_slice()
            .abs_diff_eq(other.as_flat_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_flat_slice()
            .rel_diff_eq(other.as_flat_slice(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_flat_slice()
            .ulps_diff_eq(other.as_flat_slice(), ulps_tolerance)
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C, Column>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R, Column>;

    fn mul(self, rhs: Vector<T, C, Column>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Row Vector * Matrix.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R, Row>
where
    T: Number,
{
    type Output = Vector<T, C, Row>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| (0..R).fold(T::ZERO, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

/// Column Vector * Row Vector (outer product).
///
/// Element `(i, j)` of the result is `self[i] * rhs[j]`.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C, Row>> for Vector<T, R, Column>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Vector<T, C, Row>) -> Self::Output {
        Matrix::from_fn(|i, j| self[i] * rhs[j])
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        self.as_flat_mut_slice()
            .iter_mut()
            .for_each(|elem| *elem = *elem * rhs);
    }
}

/// Matrix + Scalar (broadcast over all elements).
impl<T, const R: usize, const C: usize> Add<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn add(self, rhs: T) -> Self::Output {
        self.map(|elem| elem + rhs)
    }
}

/// Matrix - Scalar (broadcast over all elements).
impl<T, const R: usize, const C: usize> Sub<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn sub(self, rhs: T) -> Self::Output {
        self.map(|elem| elem - rhs)
    }
}

/// Matrix / Scalar (broadcast over all elements).
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`Matrix::checked_div`] to handle this case.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Zero + PartialEq + Div<Output = T> + Copy,
{
    type Output = Matrix<T, R, C>;

    #[track_caller]
    fn div(self, rhs: T) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(mat) => mat,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn add(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Matrix::from_fn(|i, j| self[(i, j)] + rhs[(i, j)])
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn sub(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Matrix::from_fn(|i, j| self[(i, j)] - rhs[(i, j)])
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[rustfmt::skip]
    fn mat123() -> Mat3<i32> {
        Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ])
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);

        assert_eq!(mat123() * vec3(1, 2, 3), vec3(14, 32, 50));
    }

    #[test]
    fn row_vec_mat_mul() {
        let out = row3(1, 2, 3) * mat123();
        assert_eq!(out, row3(30, 36, 42));
        assert_eq!(out.shape(), Shape::new(1, 3));

        // `vᵀ * M == (Mᵀ * v)ᵀ`
        let v = vec3(1, 2, 3);
        assert_eq!(v.transpose() * mat123(), (mat123().transpose() * v).transpose());
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c.shape(), Shape::new(4, 3));
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);

        #[rustfmt::skip]
        assert_eq!(mat123() * mat123(), Matrix::from_rows([
            [30, 36, 42],
            [66, 81, 96],
            [102, 126, 150],
        ]));
    }

    #[test]
    fn outer_product() {
        let outer = vec3(1, 2, 3) * row3(1, 2, 3);
        #[rustfmt::skip]
        assert_eq!(outer, Matrix::from_rows([
            [1, 2, 3],
            [2, 4, 6],
            [3, 6, 9],
        ]));

        let rect = vec2(1, 2) * row3(3, 4, 5);
        assert_eq!(rect, Matrix::from_rows([[3, 4, 5], [6, 8, 10]]));
    }

    #[test]
    fn identity() {
        let v = vec3(7, -8, 9);
        assert_eq!(Mat3i::IDENTITY * v, v);
        assert_eq!(v.transpose() * Mat3i::IDENTITY, v.transpose());
        assert_eq!(Mat3i::IDENTITY * mat123(), mat123());
        assert_eq!(mat123() * Mat3i::IDENTITY, mat123());
    }

    #[test]
    fn scalar() {
        let mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(mat * 2.0, Matrix::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(mat + 1.0, Matrix::from_rows([[2.0, 3.0], [4.0, 5.0]]));
        assert_eq!(mat - 1.0, Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]));
        assert_eq!(mat / 2.0, Matrix::from_rows([[0.5, 1.0], [1.5, 2.0]]));
        assert_eq!(-mat, mat * -1.0);

        let mut m = mat;
        m *= 3.0;
        assert_eq!(m, mat * 3.0);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_by_zero_scalar() {
        let _ = Mat2f::IDENTITY / 0.0;
    }

    #[test]
    fn elementwise() {
        let a = mat123();
        let b = Mat3::splat(1);
        assert_eq!(a + b, a + 1);
        assert_eq!(a - b, a - 1);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn approx() {
        let a = Mat2f::from_rows([[0.1, 0.2], [0.3, 0.4]]);
        assert_approx_eq!(a * 3.0 / 3.0, a);
        assert_approx_ne!(a, a + 0.01);
        assert_approx_eq!(a, a + 0.01).abs(0.02);
    }
}
