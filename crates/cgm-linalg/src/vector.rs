use std::{array, fmt, marker::PhantomData, ops::Div};

use itertools::Itertools;

use crate::{
    traits::{Number, Sqrt, ToFloat},
    Column, LinalgError, One, Orientation, Row, Shape, Zero,
};

mod ops;
mod view;

/// A 1-dimensional column vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional column vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional column vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional column vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional column vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional column vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional column vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional column vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional column vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional column vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element row vector.
pub type RowVector<T, const N: usize> = Vector<T, N, Row>;
/// A 2-dimensional row vector.
pub type RowVec2<T> = RowVector<T, 2>;
/// A 2-dimensional row vector with [`f32`] elements.
pub type RowVec2f = RowVec2<f32>;
/// A 3-dimensional row vector.
pub type RowVec3<T> = RowVector<T, 3>;
/// A 3-dimensional row vector with [`f32`] elements.
pub type RowVec3f = RowVec3<f32>;
/// A 4-dimensional row vector.
pub type RowVec4<T> = RowVector<T, 4>;
/// A 4-dimensional row vector with [`f32`] elements.
pub type RowVec4f = RowVec4<f32>;

/// An `N`-element vector storing elements of type `T`, oriented as a column or a row.
///
/// The orientation `O` defaults to [`Column`]. It never changes for a given value;
/// [`Vector::transpose`] returns a new vector of the opposite orientation.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create column vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices
///   using [`TryFrom`] (which checks the slice length).
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with 2 to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   can be used to obtain unit vectors pointing in the given direction.
/// - `extend` appends one element to a vector with up to 3 dimensions, and [`Vector::embed`]
///   lifts a vector into any higher dimension.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize, O: Orientation = Column>([T; N], PhantomData<O>);

unsafe impl<T: bytemuck::Zeroable, const N: usize, O: Orientation> bytemuck::Zeroable
    for Vector<T, N, O>
{
}
unsafe impl<T: bytemuck::Pod, const N: usize, O: Orientation> bytemuck::Pod for Vector<T, N, O> {}

impl<T: Zero + Copy, const N: usize, O: Orientation> Vector<T, N, O> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N], PhantomData);
}

impl<T: Zero + One, O: Orientation> Vector<T, 2, O> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE], PhantomData);
}

impl<T: Zero + One, O: Orientation> Vector<T, 3, O> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE], PhantomData);
}

impl<T: Zero + One, O: Orientation> Vector<T, 4, O> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE], PhantomData);
}

impl<T, const N: usize, O: Orientation> Vector<T, N, O> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let v = Vec3::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem), PhantomData)
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let v = Vec3::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb), PhantomData)
    }

    /// Applies a closure to each element, returning a new vector of the same orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N, O>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f), PhantomData)
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// assert_eq!(a.zip(b), vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N, O>) -> Vector<(T, U), N, O> {
        let mut other = other.0.into_iter();
        self.map(|elem| match other.next() {
            Some(o) => (elem, o),
            None => unreachable!("vectors have the same length"),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the number of elements (`N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns whether this is a zero-dimensional vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the shape of this vector when viewed as a matrix.
    ///
    /// Column vectors are `N x 1`, row vectors are `1 x N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.shape(), Shape::new(3, 1));
    /// assert_eq!(v.transpose().shape(), Shape::new(1, 3));
    /// ```
    pub const fn shape(&self) -> Shape {
        if O::IS_ROW {
            Shape::new(1, N)
        } else {
            Shape::new(N, 1)
        }
    }

    /// Returns a copy of this vector with the opposite orientation.
    ///
    /// The elements and their order are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let col = vec3(1, 2, 3);
    /// let row: RowVec3<i32> = col.transpose();
    /// assert_eq!(row.into_array(), col.into_array());
    /// assert_eq!(row.transpose(), col);
    /// ```
    #[inline]
    pub fn transpose(self) -> Vector<T, N, O::Transposed> {
        Vector(self.0, PhantomData)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The orientation of `other` does not matter, only the element count, which is checked at
    /// compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a.dot(b.transpose()), 3);
    /// ```
    pub fn dot<P: Orientation>(self, other: Vector<T, N, P>) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length (euclidean norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).norm2(), 14);
    /// ```
    #[doc(alias = "length2")]
    pub fn norm2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length (euclidean norm) of this [`Vector`].
    ///
    /// The result is a floating-point number even for integer vectors. Elements are converted
    /// before they are squared, so this works for integer vectors whose [`Vector::norm2`] would
    /// overflow `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// assert_eq!(vec2(3, 4).norm(), 5.0f64);
    /// assert_eq!(Vec3f::Z.norm(), 1.0f32);
    /// ```
    #[doc(alias = "length", alias = "magnitude")]
    pub fn norm(&self) -> T::Float
    where
        T: ToFloat,
    {
        self.0
            .iter()
            .map(|elem| elem.to_float())
            .fold(<T::Float as Zero>::ZERO, |acc, x| acc + x * x)
            .sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector of length zero is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(mut self) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        self.normalize_in_place();
        self
    }

    /// Divides this vector by its length in place.
    ///
    /// A vector of length zero is left unchanged. Elements whose squares would overflow or
    /// underflow are handled by dividing by the largest magnitude first.
    pub fn normalize_in_place(&mut self)
    where
        T: Number + Sqrt + PartialOrd,
    {
        let scale = self.0.iter().fold(T::ZERO, |max, &elem| {
            let abs = if elem < T::ZERO { T::ZERO - elem } else { elem };
            if abs > max {
                abs
            } else {
                max
            }
        });
        if scale == T::ZERO {
            return;
        }
        self.0.iter_mut().for_each(|elem| *elem = *elem / scale);

        // The largest element is now +-1, so the squared length lies in [1, N].
        let length = self.norm2().sqrt();
        self.0.iter_mut().for_each(|elem| *elem = *elem / length);
    }

    /// Returns the sum of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).sum(), 6);
    /// ```
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Compares every element with `scalar`, returning a vector of the results.
    ///
    /// Use `==` to compare two whole vectors instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let v = vec3(1, 0, 1);
    /// assert_eq!(v.elem_eq(1), vec3(true, false, true));
    /// assert!(v.elem_eq(0).any());
    /// assert!(!v.elem_eq(0).all());
    /// ```
    pub fn elem_eq(&self, scalar: T) -> Vector<bool, N, O>
    where
        T: PartialEq,
    {
        Vector::from_fn(|i| self.0[i] == scalar)
    }

    /// Divides every element by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if `divisor` is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// assert_eq!(vec2(2.0, 4.0).checked_div(2.0), Ok(vec2(1.0, 2.0)));
    /// assert_eq!(vec2(2.0, 4.0).checked_div(0.0), Err(LinalgError::DivisionByZero));
    /// ```
    pub fn checked_div(self, divisor: T) -> Result<Self, LinalgError>
    where
        T: Zero + PartialEq + Div<Output = T> + Copy,
    {
        if divisor == T::ZERO {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self.map(|elem| elem / divisor))
    }

    /// Lifts this vector into `M >= N` dimensions, filling the added trailing elements with
    /// `fill`.
    ///
    /// `M < N` is rejected at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// // Homogeneous coordinates of a 3D point.
    /// let p: Vec4<i32> = vec3(1, 2, 3).embed(1);
    /// assert_eq!(p, vec4(1, 2, 3, 1));
    /// ```
    pub fn embed<const M: usize>(self, fill: T) -> Vector<T, M, O>
    where
        T: Copy,
    {
        const { assert!(M >= N, "cannot embed a vector into fewer dimensions") };
        Vector::from_fn(|i| if i < N { self.0[i] } else { fill })
    }

    /// Projects this vector onto its first `M <= N` elements.
    ///
    /// `M > N` is rejected at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let v: Vec2<i32> = vec4(1, 2, 3, 4).proj();
    /// assert_eq!(v, vec2(1, 2));
    /// ```
    pub fn proj<const M: usize>(self) -> Vector<T, M, O>
    where
        T: Copy,
    {
        const { assert!(M <= N, "cannot project a vector into more dimensions") };
        Vector::from_fn(|i| self.0[i])
    }
}

impl<const N: usize, O: Orientation> Vector<bool, N, O> {
    /// Returns whether any element is `true`.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&b| b)
    }

    /// Returns whether all elements are `true`.
    pub fn all(&self) -> bool {
        self.0.iter().all(|&b| b)
    }
}

impl<T, O: Orientation> Vector<T, 1, O> {
    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 2, O> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T, O: Orientation> Vector<T, 2, O> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3, O> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T, O: Orientation> Vector<T, 3, O> {
    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4, O> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// Only 3-dimensional vectors have this method.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgm_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).cross(vec3(2, 2, 2)), vec3(-2, 4, -2));
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = [
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ];
        cross.into()
    }
}

impl<T, const N: usize, O: Orientation> Default for Vector<T, N, O>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize, O: Orientation> From<[T; N]> for Vector<T, N, O> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value, PhantomData)
    }
}

impl<T, const N: usize, O: Orientation> From<Vector<T, N, O>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N, O>) -> Self {
        value.0
    }
}

/// Creates a vector from a slice, which must have exactly `N` elements.
impl<'a, T: Copy, const N: usize, O: Orientation> TryFrom<&'a [T]> for Vector<T, N, O> {
    type Error = LinalgError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        match <[T; N]>::try_from(slice) {
            Ok(array) => Ok(array.into()),
            Err(_) => Err(LinalgError::DimensionMismatch {
                expected: N,
                actual: slice.len(),
            }),
        }
    }
}

impl<T, const N: usize, O: Orientation> fmt::Debug for Vector<T, N, O>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Prints the elements separated by spaces, on a single line.
impl<T, const N: usize, O: Orientation> fmt::Display for Vector<T, N, O>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(" "))
    }
}

impl<T, const N: usize, O: Orientation> AsRef<[T]> for Vector<T, N, O> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize, O: Orientation> AsMut<[T]> for Vector<T, N, O> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x], PhantomData)
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y], PhantomData)
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z], PhantomData)
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w], PhantomData)
}

/// Constructs a [`RowVec2`] from its two elements.
#[inline]
pub const fn row2<T>(x: T, y: T) -> RowVec2<T> {
    Vector([x, y], PhantomData)
}

/// Constructs a [`RowVec3`] from its three elements.
///
/// # Examples
///
/// ```
/// # use cgm_linalg::*;
/// assert_eq!(row3(1, 2, 3), vec3(1, 2, 3).transpose());
/// ```
#[inline]
pub const fn row3<T>(x: T, y: T, z: T) -> RowVec3<T> {
    Vector([x, y, z], PhantomData)
}

/// Constructs a [`RowVec4`] from its four elements.
#[inline]
pub const fn row4<T>(x: T, y: T, z: T, w: T) -> RowVec4<T> {
    Vector([x, y, z, w], PhantomData)
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    fn random_vec4(rng: &mut fastrand::Rng) -> Vec4f {
        Vec4f::from_fn(|_| rng.f32() * 20.0 - 10.0)
    }

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y, 9);

        let row = RowVec3::from([4, 5, 6]);
        assert_eq!((row.x, row.y, row.z), (4, 5, 6));
    }

    #[test]
    fn construction() {
        assert_eq!(Vec4f::ZERO, [0.0; 4]);
        assert_eq!(Vec3i::default(), Vec3i::ZERO);
        assert_eq!(Vec3i::splat(7), [7, 7, 7]);
        assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec1(1).extend(2), vec2(1, 2));

        let slice: &[i32] = &[1, 2, 3];
        assert_eq!(Vec3i::try_from(slice), Ok(vec3(1, 2, 3)));
        assert_eq!(
            Vec4i::try_from(slice),
            Err(LinalgError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn shape() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.len(), 3);
        assert_eq!(v.shape(), Shape::new(3, 1));
        let t = v.transpose();
        assert_eq!(t.shape(), Shape::new(1, 3));
        assert_eq!(t.transpose().shape(), Shape::new(3, 1));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1, 2, 3)), "1 2 3");
        assert_eq!(format!("{}", Vec4f::W), "0 0 0 1");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec3(1, 2, 3).transpose()), "1 2 3");
    }

    #[test]
    fn reductions() {
        assert_eq!(vec3(1.0, 2.0, 3.0).sum(), 6.0);
        assert_eq!(vec3(1.0, 2.0, 3.0).norm2(), 14.0);
        assert_eq!(vec3(1.0f32, 2.0, 3.0).norm(), 14.0f32.sqrt());
        assert_eq!(vec3(1, 2, 3).norm(), 14.0f64.sqrt());
        assert_eq!(Vec4f::splat(2.0).dot(Vec4f::splat(2.0)), 16.0);

        assert!(vec3(true, false, false).any());
        assert!(!vec3(false, false, false).any());
        assert!(vec3(true, true, true).all());
        assert!(!vec3(true, false, true).all());
    }

    #[test]
    fn norm_of_large_integers() {
        assert_approx_eq!(vec2(50_000i32, 50_000).norm(), 70_710.678_118_654_75).abs(1e-6);
        assert_approx_eq!(vec3(i32::MAX, i32::MIN, 0).norm(), 2.0f64.powi(31) * 2.0f64.sqrt())
            .rel(1e-9);
        assert_eq!(vec2(3u8, 4).norm(), 5.0);
    }

    #[test]
    fn unsigned_elements() {
        let v = vec3(1u32, 2, 3);
        assert_eq!(v.sum(), 6);
        assert_eq!(v.norm2(), 14);
        assert_eq!(v.dot(vec3(4, 5, 6)), 32);
        assert_eq!(vec3(1u64, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
    }

    #[test]
    fn elementwise_eq() {
        let v = vec4(2, 0, 2, 3);
        assert_eq!(v.elem_eq(2), vec4(true, false, true, false));
        assert_eq!(v == vec4(2, 0, 2, 3), true);
        assert_eq!(v == vec4(2, 0, 2, 4), false);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1, 2, 3).cross(vec3(2, 2, 2)), vec3(-2, 4, -2));
        assert_eq!(vec3(1.0, 2.0, 3.0).cross(Vec3f::splat(2.0)), vec3(-2.0, 4.0, -2.0));

        let mut rng = fastrand::Rng::with_seed(0xc0ffee);
        for _ in 0..100 {
            let a = Vec3::from_fn(|_| rng.i64(-1000..1000));
            let b = Vec3::from_fn(|_| rng.i64(-1000..1000));
            assert_eq!(a.cross(b), -b.cross(a));
            assert_eq!(a.cross(a), Vec3::ZERO);
            assert_eq!(a.cross(b).dot(a), 0);
            assert_eq!(a.cross(b).dot(b), 0);
        }
    }

    #[test]
    fn normalize() {
        let mut v = Vec4f::splat(2.0);
        v.normalize_in_place();
        assert_eq!(v, Vec4f::splat(0.5));

        let mut zero = Vec3f::ZERO;
        zero.normalize_in_place();
        assert_eq!(zero, Vec3f::ZERO);
        assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);

        assert_eq!(vec3(1e20f32, 0.0, 0.0).normalize(), vec3(1.0, 0.0, 0.0));
        assert_eq!(vec2(0.0f32, -3e30).normalize(), vec2(0.0, -1.0));
        assert_approx_eq!(vec2(1e-30f32, 1e-30).normalize().norm(), 1.0).abs(1e-6);
        assert_approx_eq!(Vec3f::splat(1e25).normalize(), Vec3f::splat(3.0f32.sqrt().recip()))
            .abs(1e-6);

        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            let v = random_vec4(&mut rng);
            if v == Vec4f::ZERO {
                continue;
            }
            assert_approx_eq!(v.normalize().norm(), 1.0).abs(1e-6);
        }
    }

    #[test]
    fn algebra_properties() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..100 {
            let a = Vec4::from_fn(|_| rng.i32(-1000..1000));
            let b = Vec4::from_fn(|_| rng.i32(-1000..1000));
            assert_eq!(a + b - b, a);
            assert_eq!(a.dot(b), b.dot(a));
            assert_eq!(a.norm2(), a.dot(a));

            let f = random_vec4(&mut rng);
            assert_eq!(f.norm(), f.norm2().sqrt());
        }
    }

    #[test]
    fn transpose_is_involutive() {
        let v = vec4(1, 2, 3, 4);
        let row: RowVec4<i32> = v.transpose();
        let back: Vec4i = row.transpose();
        assert_eq!(back, v);
    }

    #[test]
    fn embed_proj() {
        let v = vec3(1.5, 2.5, 3.5);
        let h: Vec4f = v.embed(1.0);
        assert_eq!(h, vec4(1.5, 2.5, 3.5, 1.0));
        let same: Vec3f = v.embed(0.0);
        assert_eq!(same, v);
        let p: Vec3f = h.proj();
        assert_eq!(p, v);
        let p: Vec1<f32> = h.proj();
        assert_eq!(p, vec1(1.5));

        let row: RowVector<i32, 5> = vec3(1, 2, 3).transpose().embed(0);
        assert_eq!(row.into_array(), [1, 2, 3, 0, 0]);
    }

    #[test]
    fn checked_div() {
        assert_eq!(vec2(3, 9).checked_div(3), Ok(vec2(1, 3)));
        assert_eq!(vec2(3, 9).checked_div(0), Err(LinalgError::DivisionByZero));
        assert_eq!(
            vec2(1.0, 1.0).checked_div(-0.0),
            Err(LinalgError::DivisionByZero)
        );
    }
}
