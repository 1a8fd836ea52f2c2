use std::ops;

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Negation is not required, so unsigned integers qualify.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Conversion of an element type into the floating-point type used for lengths.
///
/// [`f32`] and [`f64`] convert to themselves. Integer types convert to [`f64`]; for 64- and
/// 128-bit integers this conversion may round.
pub trait ToFloat: Copy {
    /// The floating-point type this type converts into.
    type Float: Number + Sqrt;

    fn to_float(self) -> Self::Float;
}

macro_rules! consts {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
consts!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
consts!(0.0, 1.0: f32, f64);

macro_rules! int_to_f64 {
    ($($types:ty),+) => {
        $(
            impl ToFloat for $types {
                type Float = f64;

                #[inline]
                fn to_float(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
int_to_f64!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ToFloat for f32 {
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self
    }
}

impl ToFloat for f64 {
    type Float = f64;

    #[inline]
    fn to_float(self) -> f64 {
        self
    }
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
