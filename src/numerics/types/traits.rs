// src/numerics/types/traits.rs
// Scalar traits shared by Vector and Matrix.

use core::fmt::Debug;

use num_complex::Complex;
use num_traits::Num;

/// Scalar is the element type of every Vector and Matrix.
///
/// Anything `Copy` with the basic arithmetic of `num_traits::Num` qualifies:
/// primitive integers, floats and `num_complex::Complex`. Operations that need
/// more (ordering, a square root, an absolute value) ask for it locally.
pub trait Scalar: Copy + PartialEq + Debug + Num {}

impl<T> Scalar for T where T: Copy + PartialEq + Debug + Num {}

/// Complex conjugation. Real scalars are their own conjugate.
pub trait Conjugate {
    fn conj(&self) -> Self;
}

macro_rules! impl_real_conjugate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Conjugate for $t {
                #[inline]
                fn conj(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_real_conjugate!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<F> Conjugate for Complex<F>
where
    F: Clone + Num + core::ops::Neg<Output = F>,
{
    #[inline]
    fn conj(&self) -> Self {
        Complex::conj(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_scalar_covers_reals_integers_and_complex() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<u8>();
        assert_scalar::<Complex<f64>>();
    }

    #[test]
    fn test_real_conjugate_is_identity() {
        assert_eq!(2.5f32.conj(), 2.5);
        assert_eq!((-7i64).conj(), -7);
    }

    #[test]
    fn test_complex_conjugate_flips_imaginary_part() {
        let z = Complex::new(1.0f64, -3.0);
        assert_eq!(Conjugate::conj(&z), Complex::new(1.0, 3.0));
    }
}
