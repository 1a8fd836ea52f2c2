use std::{fmt, hash::Hash};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Column {}
    impl Sealed for super::Row {}
}

/// Type-level marker describing whether a [`Vector`][crate::Vector] is a column or a row.
///
/// The orientation decides which matrix products a vector can take part in:
///
/// - A [`Column`] vector can be multiplied from the left by a matrix (`M * v`).
/// - A [`Row`] vector can multiply a matrix from the left (`v * M`).
/// - A [`Column`] vector times a [`Row`] vector is their outer product, a matrix.
///
/// This trait is sealed and implemented only by [`Column`] and [`Row`].
pub trait Orientation:
    sealed::Sealed + Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static
{
    /// The opposite orientation.
    type Transposed: Orientation<Transposed = Self>;

    /// Whether this is the [`Row`] orientation.
    const IS_ROW: bool;
}

/// Marks a vector as a column vector (an `N x 1` matrix). This is the default orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Column;

/// Marks a vector as a row vector (a `1 x N` matrix).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Row;

impl Orientation for Column {
    type Transposed = Row;
    const IS_ROW: bool = false;
}

impl Orientation for Row {
    type Transposed = Column;
    const IS_ROW: bool = true;
}
