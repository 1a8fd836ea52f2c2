//! Shape and stride descriptors.
//!
//! A [`Layout`] maps a logical `(row, col)` position to an offset into a flat buffer. It pairs a
//! [`Shape`] with the [`Strides`] derived from a [`MajorOrder`], and only ever updates the two
//! together, so a transposed layout keeps addressing the same elements.

use std::{fmt, mem};

/// Logical dimensions of a vector or matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the total number of elements (`rows * cols`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns whether the shape describes zero elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps the number of rows and columns.
    #[inline]
    pub fn transpose(&mut self) {
        mem::swap(&mut self.rows, &mut self.cols);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// Distance (in elements) between neighbors along each axis of a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Strides {
    /// Offset between an element and the one in the next row.
    pub row: usize,
    /// Offset between an element and the one in the next column.
    pub col: usize,
}

impl Strides {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Computes the strides of a densely packed buffer of the given `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let shape = Shape::new(2, 3);
    /// assert_eq!(Strides::packed(shape, MajorOrder::RowMajor), Strides::new(3, 1));
    /// assert_eq!(Strides::packed(shape, MajorOrder::ColumnMajor), Strides::new(1, 2));
    /// ```
    pub const fn packed(shape: Shape, order: MajorOrder) -> Self {
        match order {
            MajorOrder::RowMajor => Self::new(shape.cols, 1),
            MajorOrder::ColumnMajor => Self::new(1, shape.rows),
        }
    }

    /// Swaps the row and column stride.
    #[inline]
    pub fn transpose(&mut self) {
        mem::swap(&mut self.row, &mut self.col);
    }
}

impl fmt::Display for Strides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Order in which the elements of a matrix are laid out in a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MajorOrder {
    /// Rows are stored one after another (`index = row * cols + col`).
    #[default]
    RowMajor,
    /// Columns are stored one after another (`index = col * rows + row`).
    ColumnMajor,
}

/// A [`Shape`] together with the [`Strides`] used to address a flat buffer of that shape.
///
/// Both parts are private and can only change together (see [`Layout::transpose`]).
///
/// # Examples
///
/// ```
/// # use cgm_linalg::*;
/// // A 2x3 matrix stored row by row.
/// let buf = [0, 1, 2, 3, 4, 5];
/// let mut layout = Layout::new(Shape::new(2, 3), MajorOrder::RowMajor);
/// assert_eq!(buf[layout.index(1, 0)], 3);
///
/// // The same buffer viewed as the 3x2 transpose.
/// layout.transpose();
/// assert_eq!(layout.shape(), Shape::new(3, 2));
/// assert_eq!(buf[layout.index(0, 1)], 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    shape: Shape,
    strides: Strides,
}

impl Layout {
    /// Creates the layout of a densely packed buffer with the given shape and element order.
    pub const fn new(shape: Shape, order: MajorOrder) -> Self {
        Self {
            shape,
            strides: Strides::packed(shape, order),
        }
    }

    #[inline]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub const fn strides(&self) -> Strides {
        self.strides
    }

    /// Transposes the layout by swapping its shape and its strides.
    ///
    /// After this, `index(col, row)` addresses what `index(row, col)` addressed before.
    pub fn transpose(&mut self) {
        self.shape.transpose();
        self.strides.transpose();
    }

    /// Returns a transposed copy of `self`.
    #[inline]
    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    /// Returns the buffer offset of the element at `(row, col)`, or [`None`] if the position lies
    /// outside of the shape.
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.shape.rows && col < self.shape.cols {
            Some(row * self.strides.row + col * self.strides.col)
        } else {
            None
        }
    }

    /// Returns the buffer offset of the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside of the shape.
    #[track_caller]
    pub fn index(&self, row: usize, col: usize) -> usize {
        match self.offset(row, col) {
            Some(offset) => offset,
            None => panic!(
                "position ({row}, {col}) is out of bounds for shape {}",
                self.shape
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_transpose() {
        let mut shape = Shape::new(2, 5);
        shape.transpose();
        assert_eq!(shape, Shape::new(5, 2));
        assert_eq!(shape.len(), 10);
        assert!(!shape.is_empty());
        assert!(Shape::new(0, 3).is_empty());
    }

    #[test]
    fn strides_transpose() {
        let mut strides = Strides::new(4, 1);
        strides.transpose();
        assert_eq!(strides, Strides::new(1, 4));
    }

    #[test]
    fn fmt() {
        assert_eq!(Shape::new(3, 1).to_string(), "(3, 1)");
        assert_eq!(Strides::new(3, 1).to_string(), "(3, 1)");
    }

    #[test]
    fn offsets_cover_buffer() {
        for order in [MajorOrder::RowMajor, MajorOrder::ColumnMajor] {
            let layout = Layout::new(Shape::new(3, 4), order);
            let mut seen = [false; 12];
            for row in 0..3 {
                for col in 0..4 {
                    let i = layout.index(row, col);
                    assert!(!seen[i], "offset {i} visited twice in {order:?}");
                    seen[i] = true;
                }
            }
            assert!(seen.iter().all(|&b| b));
        }
    }

    #[test]
    fn out_of_bounds() {
        let layout = Layout::new(Shape::new(2, 3), MajorOrder::RowMajor);
        assert_eq!(layout.offset(1, 2), Some(5));
        assert_eq!(layout.offset(2, 0), None);
        assert_eq!(layout.offset(0, 3), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds for shape (2, 3)")]
    fn index_panics() {
        Layout::new(Shape::new(2, 3), MajorOrder::RowMajor).index(0, 3);
    }

    #[test]
    fn transpose_keeps_elements() {
        let layout = Layout::new(Shape::new(2, 3), MajorOrder::RowMajor);
        let transposed = layout.transposed();
        assert_eq!(transposed.shape(), Shape::new(3, 2));
        assert_eq!(transposed.strides(), Strides::new(1, 3));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(layout.index(row, col), transposed.index(col, row));
            }
        }

        // A transposed row-major layout is the column-major layout of the transposed shape.
        assert_eq!(
            transposed,
            Layout::new(Shape::new(3, 2), MajorOrder::ColumnMajor)
        );
        assert_eq!(transposed.transposed(), layout);
    }
}
