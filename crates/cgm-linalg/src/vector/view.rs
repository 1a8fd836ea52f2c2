//! Named-field access (`v.x`, `v.y`, ...) for vectors with up to 4 elements.

use std::ops::{Deref, DerefMut};

use crate::{Orientation, Vector};

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// `Vector` is `repr(transparent)` over `[T; N]`, which has the same layout as a `repr(C)` struct
// with `N` fields of type `T` followed by a zero-sized one.
macro_rules! views {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T, O: Orientation> Deref for Vector<T, $n, O> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { &*(self as *const Self).cast::<$view<T>>() }
                }
            }

            impl<T, O: Orientation> DerefMut for Vector<T, $n, O> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
                }
            }
        )+
    };
}
views!(1 => X, 2 => XY, 3 => XYZ, 4 => XYZW);
