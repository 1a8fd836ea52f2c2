//! Approximate equality for floating-point scalars, vectors and matrices.
//!
//! Results of floating-point arithmetic rarely compare equal with `==`. The [`ApproxEq`] trait
//! and the [`assert_approx_eq!`][crate::assert_approx_eq] macro allow comparing them with an
//! absolute, relative, or ULPs-based tolerance instead.

mod impls;

use std::{fmt, panic::Location};

/// Comparison within a tolerance.
///
/// Implemented for [`f32`], [`f64`], and for slices, arrays, [`Vector`][crate::Vector]s and
/// [`Matrix`][crate::Matrix] types holding them. Containers compare element by element; two
/// containers with a different element count never match.
///
/// Background on why each tolerance kind exists:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The float type the absolute and relative tolerances are given in (the element type).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable floats lie between `self` and
    /// `other`.
    ///
    /// `NaN` matches nothing, `-0.0` matches `+0.0`, and otherwise values of opposite sign never
    /// match.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Tolerances the assertion macros fall back to when the caller picks none.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

macro_rules! default_tolerances {
    ($($float:ty),+) => {
        $(
            impl DefaultTolerances for $float {
                const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
                const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
                const DEFAULT_ULPS_TOLERANCE: u32 = 4;
            }
        )+
    };
}
default_tolerances!(f32, f64);

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// Nothing is checked until the guard goes out of scope, so the tolerance can be chosen by
/// chaining one of these calls onto the macro:
///
/// - [`Asserter::abs`] compares the *absolute difference* via [`ApproxEq::abs_diff_eq`].
/// - [`Asserter::rel`] compares the *relative difference* via [`ApproxEq::rel_diff_eq`].
/// - [`Asserter::ulps`] counts the floats between the values via [`ApproxEq::ulps_diff_eq`].
///
/// With several tolerances set, passing any one of them is enough. With none set, the values
/// match if they pass [`DEFAULT_ABS_TOLERANCE`] or [`DEFAULT_REL_TOLERANCE`].
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares with an absolute tolerance. Use this near zero.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares with a tolerance relative to the larger magnitude.
    ///
    /// Nothing except zero is within a relative tolerance below `1.0` of zero.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compares by the number of floats between the values (see [`ApproxEq::ulps_diff_eq`]).
    ///
    /// Tiny values of opposite sign are very far apart by this measure.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&mut self) -> bool {
        let abs = self
            .abs
            .take()
            .is_some_and(|abs| T::abs_diff_eq(self.left, self.right, abs));
        let rel = self
            .rel
            .take()
            .is_some_and(|rel| T::rel_diff_eq(self.left, self.right, rel));
        let ulps = self
            .ulps
            .take()
            .is_some_and(|ulps| T::ulps_diff_eq(self.left, self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location is captured in `new`.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// [`assert_eq!`] for [`ApproxEq`] types.
///
/// Evaluates to an [`Asserter`]; chain `.abs(..)`, `.rel(..)` or `.ulps(..)` to pick the
/// tolerance.
///
/// # Examples
///
/// ```
/// # use cgm_linalg::*;
/// let diagonal = vec2(1.0, 1.0).norm();
/// assert_approx_eq!(diagonal * diagonal, 2.0).ulps(2);
/// assert_approx_eq!(vec2(10.0, 20.0), vec2(10.5, 19.5)).abs(0.5);
/// assert_approx_eq!(vec2(10.0, 20.0), vec2(10.5, 19.5)).rel(0.05);
/// ```
///
/// Products pick up rounding error that `==` would trip over:
///
/// ```
/// # use cgm_linalg::*;
/// let v = vec3(3.0f32, 0.0, 4.0).normalize();
/// assert_approx_eq!(v, vec3(0.6, 0.0, 0.8));
/// assert_approx_eq!(Mat2f::IDENTITY * 0.1 * 3.0, Mat2f::IDENTITY * 0.3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}

/// [`assert_ne!`] for [`ApproxEq`] types. The negation of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use cgm_linalg::*;
/// assert_approx_ne!(vec2(10.0, 20.0), vec2(10.5, 19.5)).abs(0.1);
/// assert_approx_ne!(vec2(1.0, 2.0), vec2(1.0, 2.1));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}
