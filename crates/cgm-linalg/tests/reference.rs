//! Cross-checks products and transposes against `nalgebra`.

use cgm_linalg::*;
use nalgebra::{SMatrix, SVector};

fn random_matrix<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<i64, R, C> {
    Matrix::from_fn(|_, _| rng.i64(-100..100))
}

fn to_nalgebra<const R: usize, const C: usize>(mat: &Matrix<i64, R, C>) -> SMatrix<i64, R, C> {
    SMatrix::from_row_slice(mat.as_flat_slice())
}

fn from_nalgebra<const R: usize, const C: usize>(mat: &SMatrix<i64, R, C>) -> Matrix<i64, R, C> {
    Matrix::from_fn(|row, col| mat[(row, col)])
}

#[test]
fn matrix_products() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..100 {
        let a = random_matrix::<3, 4>(&mut rng);
        let b = random_matrix::<4, 2>(&mut rng);
        assert_eq!(a * b, from_nalgebra(&(to_nalgebra(&a) * to_nalgebra(&b))));
        assert_eq!(a.transpose(), from_nalgebra(&to_nalgebra(&a).transpose()));
    }
}

#[test]
fn matrix_vector_products() {
    let mut rng = fastrand::Rng::with_seed(100);
    for _ in 0..100 {
        let m = random_matrix::<3, 4>(&mut rng);
        let v: Vector<i64, 4> = Vector::from_fn(|_| rng.i64(-100..100));
        let w: RowVector<i64, 3> = Vector::from_fn(|_| rng.i64(-100..100));

        let expected = to_nalgebra(&m) * SVector::<i64, 4>::from_column_slice(v.as_slice());
        assert_eq!((m * v).as_slice(), expected.as_slice());

        let expected =
            SVector::<i64, 3>::from_column_slice(w.as_slice()).transpose() * to_nalgebra(&m);
        assert_eq!((w * m).as_slice(), expected.as_slice());

        let expected = SVector::<i64, 4>::from_column_slice(v.as_slice())
            * SVector::<i64, 3>::from_column_slice(w.as_slice()).transpose();
        assert_eq!(v * w, from_nalgebra(&expected));
    }
}

#[test]
fn associativity_and_identity() {
    let mut rng = fastrand::Rng::with_seed(101);
    for _ in 0..100 {
        let a = random_matrix::<2, 3>(&mut rng);
        let b = random_matrix::<3, 3>(&mut rng);
        let c = random_matrix::<3, 4>(&mut rng);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(Matrix::<i64, 2, 2>::IDENTITY * a, a);
        assert_eq!(a * Matrix::<i64, 3, 3>::IDENTITY, a);
        assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
    }
}

#[test]
fn documented_scenarios() {
    #[rustfmt::skip]
    let m = Matrix::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);
    #[rustfmt::skip]
    assert_eq!(m * m, Matrix::from_rows([
        [30.0, 36.0, 42.0],
        [66.0, 81.0, 96.0],
        [102.0, 126.0, 150.0],
    ]));
    assert_eq!(m * vec3(1.0, 2.0, 3.0), vec3(14.0, 32.0, 50.0));
    assert_eq!(row3(1.0, 2.0, 3.0) * m, row3(30.0, 36.0, 42.0));

    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v.cross(Vec3::splat(2.0)), vec3(-2.0, 4.0, -2.0));
    assert_eq!(v.sum(), 6.0);
    assert_eq!(v.norm2(), 14.0);
    assert_eq!(Vec4f::splat(2.0).dot(Vec4f::splat(2.0)), 16.0);
    assert_eq!(Vec4f::splat(2.0).normalize(), Vec4f::splat(0.5));

    assert_eq!(
        Mat2x3::<f32>::try_from_rows(&[[1.0f32, 2.0, 3.0].as_slice(), [4.0f32].as_slice()]),
        Err(LinalgError::RowLengthMismatch {
            row: 1,
            expected: 3,
            actual: 1
        })
    );

    let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![7.0, 8.0, 9.0]];
    assert_eq!(
        Mat3::<f64>::try_from_rows(&rows),
        Err(LinalgError::RowLengthMismatch {
            row: 1,
            expected: 3,
            actual: 2
        })
    );
    let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0, 6.5], vec![7.0, 8.0, 9.0]];
    assert_eq!(
        Mat3::<f64>::try_from_rows(&rows),
        Err(LinalgError::RowLengthMismatch {
            row: 1,
            expected: 3,
            actual: 4
        })
    );
}
