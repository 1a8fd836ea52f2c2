use std::{array, fmt, ops::Div};

use itertools::Itertools;

use crate::{
    Column, LinalgError, Layout, MajorOrder, One, Row, Shape, Strides, Vector, Zero,
};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`i32`] elements.
pub type Mat2i = Mat2<i32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`i32`] elements.
pub type Mat3i = Mat3<i32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`i32`] elements.
pub type Mat4i = Mat4<i32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Element `(row, col)` is stored at linear index `row * C + col` (see [`Matrix::layout`]).
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays or vectors
///   holding its rows or columns.
/// - [`Matrix::try_from_rows`] does the same for rows whose length is only known at runtime, and
///   [`Matrix::try_from_slice`] and [`Matrix::from_slice_in`] read a flat list of elements.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::splat`] copies one value into every element.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] has 1 on its main diagonal and 0 everywhere else, for any shape.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use cgm_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use cgm_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// Whole rows and columns are copied out as [`Row`] and [`Column`] vectors with [`Matrix::row`]
/// and [`Matrix::column`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smaller of the two dimensions, which is the length of the main diagonal.
    pub const MIN_DIMENSION: usize = if R < C { R } else { C };

    /// Creates a matrix from an array of rows.
    ///
    /// Each row is an array or a [`Row`] vector (see [`IntoRow`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.shape(), Shape::new(2, 3));
    /// assert_eq!(mat[(1, 0)], 4);
    ///
    /// let mat = Matrix::from_rows([row2(1, 2), row2(3, 4)]);
    /// assert_eq!(mat.row(1), row2(3, 4));
    /// ```
    ///
    /// Column vectors are not rows:
    ///
    /// ```compile_fail
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([vec2(1, 2), vec2(3, 4)]);
    /// ```
    pub fn from_rows<U: IntoRow<T, C>>(rows: [U; R]) -> Self {
        Self(rows.map(IntoRow::into_row))
    }

    /// Creates a matrix from an array of columns.
    ///
    /// Each column is an array or a [`Column`] vector (see [`IntoColumn`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_columns([vec2(1, 3), vec2(2, 4)]);
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    /// ```
    ///
    /// Row vectors are not columns:
    ///
    /// ```compile_fail
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_columns([row2(1, 3), row2(2, 4)]);
    /// ```
    pub fn from_columns<U: IntoColumn<T, R>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        let columns = columns.map(IntoColumn::into_column);
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Creates a matrix by invoking a closure with the row and column of each element.
    ///
    /// The closure is called in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Mat2x3::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([[0, 1, 2], [10, 11, 12]]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with every element set to `elem`.
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; C]; R])
    }

    /// Creates a matrix from a nested list of rows whose lengths are only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RowCountMismatch`] if `rows` does not contain exactly `R` rows, and
    /// [`LinalgError::RowLengthMismatch`] if any row does not contain exactly `C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let rows = vec![vec![1, 2], vec![3, 4]];
    /// let mat = Mat2::try_from_rows(&rows)?;
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    ///
    /// let ragged = vec![vec![1, 2], vec![3]];
    /// assert_eq!(
    ///     Mat2::try_from_rows(&ragged),
    ///     Err(LinalgError::RowLengthMismatch { row: 1, expected: 2, actual: 1 }),
    /// );
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn try_from_rows<S: AsRef<[T]>>(rows: &[S]) -> Result<Self, LinalgError>
    where
        T: Copy,
    {
        if rows.len() != R {
            return Err(LinalgError::RowCountMismatch {
                expected: R,
                actual: rows.len(),
            });
        }
        if let Some((row, actual)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != C)
        {
            return Err(LinalgError::RowLengthMismatch {
                row,
                expected: C,
                actual,
            });
        }
        Ok(Self::from_fn(|row, col| rows[row].as_ref()[col]))
    }

    /// Creates a matrix from a flat list of `R * C` elements in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `elems` has the wrong length.
    pub fn try_from_slice(elems: &[T]) -> Result<Self, LinalgError>
    where
        T: Copy,
    {
        Self::from_slice_in(MajorOrder::RowMajor, elems)
    }

    /// Creates a matrix from a flat list of `R * C` elements stored in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `elems` has the wrong length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let col_major = [1, 4, 2, 5, 3, 6];
    /// let mat = Mat2x3::from_slice_in(MajorOrder::ColumnMajor, &col_major)?;
    /// assert_eq!(mat, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn from_slice_in(order: MajorOrder, elems: &[T]) -> Result<Self, LinalgError>
    where
        T: Copy,
    {
        let layout = Layout::new(Shape::new(R, C), order);
        check_len(layout.shape(), elems.len())?;
        Ok(Self::from_fn(|row, col| elems[layout.index(row, col)]))
    }

    /// Writes the elements of this matrix into `out`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `out` does not hold exactly `R * C`
    /// elements. `out` is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let mut buf = [0; 6];
    /// mat.write_to(MajorOrder::ColumnMajor, &mut buf)?;
    /// assert_eq!(buf, [1, 4, 2, 5, 3, 6]);
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn write_to(&self, order: MajorOrder, out: &mut [T]) -> Result<(), LinalgError>
    where
        T: Copy,
    {
        let layout = Layout::new(self.shape(), order);
        check_len(layout.shape(), out.len())?;
        for (row, elems) in self.0.iter().enumerate() {
            for (col, elem) in elems.iter().enumerate() {
                out[layout.index(row, col)] = *elem;
            }
        }
        Ok(())
    }

    /// Applies a closure to each element, returning a new matrix of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([[1, 2], [3, 4]]).map(|e| e % 2 == 0);
    /// assert_eq!(mat, Matrix::from_rows([[false, true], [false, true]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns the transpose of this matrix, where element `(j, i)` of the result is element
    /// `(i, j)` of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.transpose(), Matrix::from_rows([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        let source = self.layout().transposed();
        let elems = self.as_flat_slice();
        Matrix::from_fn(|row, col| elems[source.index(row, col)])
    }

    /// Returns the logical dimensions of this matrix, `(R, C)`.
    #[inline]
    pub const fn shape(&self) -> Shape {
        Shape::new(R, C)
    }

    /// Returns the strides of the underlying row-major storage, `(C, 1)`.
    #[inline]
    pub const fn strides(&self) -> Strides {
        self.layout().strides()
    }

    /// Returns the [`Layout`] of the underlying storage.
    #[inline]
    pub const fn layout(&self) -> Layout {
        Layout::new(Shape::new(R, C), MajorOrder::RowMajor)
    }

    /// Returns all elements as a flat slice, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(mat.as_flat_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_flat_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns all elements as a flat mutable slice, in row-major order.
    #[inline]
    pub fn as_flat_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Converts this matrix into an array of its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Returns a reference to the element at `row` and `col`, or [`None`] if the position is out
    /// of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.get(0, 1), Some(&1));
    /// assert_eq!(mat.get(1, 0), Some(&2));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row)?.get(col)
    }

    /// Returns a mutable reference to the element at `row` and `col`, or [`None`] if the position
    /// is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row)?.get_mut(col)
    }

    /// Returns a copy of row `row` as a row vector, or [`None`] if `row` is out of bounds.
    pub fn get_row(&self, row: usize) -> Option<Vector<T, C, Row>>
    where
        T: Copy,
    {
        self.0.get(row).map(|&elems| elems.into())
    }

    /// Returns a copy of column `col` as a column vector, or [`None`] if `col` is out of bounds.
    pub fn get_column(&self, col: usize) -> Option<Vector<T, R, Column>>
    where
        T: Copy,
    {
        if col < C {
            Some(Vector::from_fn(|row| self.0[row][col]))
        } else {
            None
        }
    }

    /// Returns a copy of row `row` as a row vector.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.row(1), row3(4, 5, 6));
    /// assert_eq!(mat.column(2), vec2(3, 6));
    /// ```
    #[track_caller]
    pub fn row(&self, row: usize) -> Vector<T, C, Row>
    where
        T: Copy,
    {
        match self.get_row(row) {
            Some(v) => v,
            None => panic!("row index {row} is out of bounds for a matrix with {R} rows"),
        }
    }

    /// Returns a copy of column `col` as a column vector.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[track_caller]
    pub fn column(&self, col: usize) -> Vector<T, R, Column>
    where
        T: Copy,
    {
        match self.get_column(col) {
            Some(v) => v,
            None => panic!("column index {col} is out of bounds for a matrix with {C} columns"),
        }
    }

    /// Overwrites row `row` with `values`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mut mat = Mat2::ZERO;
    /// mat.set_row(0, [1, 2]);
    /// mat.set_column(1, vec2(7, 8));
    /// assert_eq!(mat, Matrix::from_rows([[1, 7], [0, 8]]));
    /// ```
    #[track_caller]
    pub fn set_row(&mut self, row: usize, values: impl IntoRow<T, C>) {
        match self.0.get_mut(row) {
            Some(elems) => *elems = values.into_row(),
            None => panic!("row index {row} is out of bounds for a matrix with {R} rows"),
        }
    }

    /// Overwrites column `col` with `values`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[track_caller]
    pub fn set_column(&mut self, col: usize, values: impl IntoColumn<T, R>) {
        if col >= C {
            panic!("column index {col} is out of bounds for a matrix with {C} columns");
        }
        for (elems, value) in self.0.iter_mut().zip(values.into_column()) {
            elems[col] = value;
        }
    }

    /// Divides every element by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if `divisor` is exactly zero.
    pub fn checked_div(self, divisor: T) -> Result<Self, LinalgError>
    where
        T: Zero + PartialEq + Div<Output = T> + Copy,
    {
        if divisor == T::ZERO {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self.map(|elem| elem / divisor))
    }
}

/// Values that can fill one row of a matrix with `C` columns: `[T; C]` arrays and [`Row`]
/// vectors.
pub trait IntoRow<T, const C: usize> {
    fn into_row(self) -> [T; C];
}

impl<T, const C: usize> IntoRow<T, C> for [T; C] {
    #[inline]
    fn into_row(self) -> [T; C] {
        self
    }
}

impl<T, const C: usize> IntoRow<T, C> for Vector<T, C, Row> {
    #[inline]
    fn into_row(self) -> [T; C] {
        self.into_array()
    }
}

/// Values that can fill one column of a matrix with `R` rows: `[T; R]` arrays and [`Column`]
/// vectors.
pub trait IntoColumn<T, const R: usize> {
    fn into_column(self) -> [T; R];
}

impl<T, const R: usize> IntoColumn<T, R> for [T; R] {
    #[inline]
    fn into_column(self) -> [T; R] {
        self
    }
}

impl<T, const R: usize> IntoColumn<T, R> for Vector<T, R, Column> {
    #[inline]
    fn into_column(self) -> [T; R] {
        self.into_array()
    }
}

fn check_len(shape: Shape, actual: usize) -> Result<(), LinalgError> {
    if shape.len() == actual {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            expected: shape.len(),
            actual,
        })
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its main diagonal and 0 everywhere else. For non-square
    /// matrices the diagonal ends after [`Matrix::MIN_DIMENSION`] elements.
    ///
    /// Multiplying any vector with a square identity matrix returns the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// assert_eq!(Mat2x3::<i32>::IDENTITY, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; C]; R];
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize>(&'a [T; C]);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(FormatRow))
            .finish()
    }
}

/// Prints one row per line, elements separated by a single space. Every row, including the last
/// one, ends with a newline.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            writeln!(f, "{}", row.iter().format(" "))?;
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}
