//! Fixed-size vectors and matrices for computer graphics and geometry code.
//!
//! # Motivation
//!
//! Graphics code passes around lots of tiny vectors and matrices (points, directions, 4x4
//! transforms). Their dimensions are always known at compile time, so this library encodes them in
//! the type system via const generics and stores every element inline, without touching the heap.
//!
//! # Goals & Non-Goals
//!
//! - Only statically-sized vectors and matrices. Dimension mismatches between operands are type
//!   errors, not runtime failures. Runtime-sized input (slices, nested lists) is validated once at
//!   construction time and rejected with a [`LinalgError`] if it doesn't fit.
//! - Every [`Vector`] carries its [`Orientation`] ([`Column`] or [`Row`]) in its type. This decides
//!   which side of a [`Matrix`] product it may appear on, and lets column-vector and row-vector
//!   code coexist in the same program.
//! - Matrices are stored row-major. Other layouts (column-major buffers for GPU APIs) are handled
//!   explicitly through [`Layout`] and [`MajorOrder`].
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - No decompositions, no sparse formats, no dynamically-sized matrices.
//!
//! # Division by zero
//!
//! Dividing a vector or matrix by a scalar that is exactly zero is treated as a domain error:
//! `checked_div` returns [`LinalgError::DivisionByZero`], and the `/` operator panics. Any other
//! divisor follows the usual semantics of the element type (IEEE-754 for floats).

pub mod approx;
mod error;
mod layout;
mod matrix;
mod orientation;
mod traits;
mod vector;

pub use error::*;
pub use layout::*;
pub use matrix::*;
pub use orientation::*;
pub use traits::*;
pub use vector::*;
