// src/numerics/types/vector.rs
// Vector<T, D>: fixed-length numeric tuple with a const-generic dimension.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::str::FromStr;
use std::io::Write;

use num_traits::{Float, Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::traits::Scalar;
use crate::numerics::codec::{serialize_array, ArrayVisitor};
use crate::numerics::contract::{self, MinDim};
use crate::numerics::error::{self, NumericsError};
use crate::numerics::io::{self as text, TextDecode, TextEncode, TextFormat, TokenSource};

/// A fixed-length vector of `D` scalars.
///
/// `Vector` is a plain value: it is `Copy`, lives on the stack and never
/// allocates. All arithmetic is elementwise except [`Vector::dot`] and
/// [`Vector::cross`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T: Scalar, const D: usize> {
    elements: [T; D],
}

impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Number of components.
    pub const DIM: usize = D;

    /// Construct a vector from all of its components.
    pub fn from_array(elements: [T; D]) -> Self {
        let () = MinDim::<D, 1>::OK;
        Self { elements }
    }

    /// Broadcast one value to every component.
    pub fn splat(value: T) -> Self {
        Self::from_array([value; D])
    }

    /// Set the first two components; the tail repeats `a2`.
    pub fn new2(a1: T, a2: T) -> Self {
        let () = MinDim::<D, 2>::OK;
        let mut elements = [a2; D];
        elements[0] = a1;
        Self { elements }
    }

    /// Set the first three components; the tail repeats `a3`.
    pub fn new3(a1: T, a2: T, a3: T) -> Self {
        let () = MinDim::<D, 3>::OK;
        let mut elements = [a3; D];
        elements[0] = a1;
        elements[1] = a2;
        Self { elements }
    }

    /// Set the first four components; the tail repeats `a4`.
    ///
    /// The broadcast tail pads homogeneous coordinates:
    /// `Vector::<f32, 6>::new4(1.0, 2.0, 3.0, 1.0)` is `1 2 3 1 1 1`.
    pub fn new4(a1: T, a2: T, a3: T, a4: T) -> Self {
        let () = MinDim::<D, 4>::OK;
        let mut elements = [a4; D];
        elements[0] = a1;
        elements[1] = a2;
        elements[2] = a3;
        Self { elements }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        D
    }

    /// Set every component to zero.
    pub fn zero(&mut self) {
        self.fill(T::zero());
    }

    /// Set every component to one.
    pub fn one(&mut self) {
        self.fill(T::one());
    }

    /// Set every component to `value`.
    pub fn fill(&mut self, value: T) {
        self.elements = [value; D];
    }

    pub fn as_array(&self) -> &[T; D] {
        &self.elements
    }

    pub fn into_array(self) -> [T; D] {
        self.elements
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Component `i`. Out-of-range `i` is a precondition violation.
    #[track_caller]
    pub fn element(&self, i: usize) -> T {
        contract::require_index(i, D);
        self.elements[i]
    }

    #[track_caller]
    pub fn element_mut(&mut self, i: usize) -> &mut T {
        contract::require_index(i, D);
        &mut self.elements[i]
    }

    /// Component `i`, checked regardless of the build mode.
    pub fn try_element(&self, i: usize) -> error::Result<T> {
        contract::check_index(i, D)?;
        Ok(self.elements[i])
    }

    #[track_caller]
    pub fn get_element(&self, i: usize) -> T {
        self.element(i)
    }

    #[track_caller]
    pub fn set_element(&mut self, e: T, i: usize) {
        *self.element_mut(i) = e;
    }

    #[track_caller]
    pub fn x(&self) -> T {
        self.element(0)
    }

    #[track_caller]
    pub fn y(&self) -> T {
        self.element(1)
    }

    #[track_caller]
    pub fn z(&self) -> T {
        self.element(2)
    }

    #[track_caller]
    pub fn w(&self) -> T {
        self.element(3)
    }

    #[track_caller]
    pub fn x_mut(&mut self) -> &mut T {
        self.element_mut(0)
    }

    #[track_caller]
    pub fn y_mut(&mut self) -> &mut T {
        self.element_mut(1)
    }

    #[track_caller]
    pub fn z_mut(&mut self) -> &mut T {
        self.element_mut(2)
    }

    #[track_caller]
    pub fn w_mut(&mut self) -> &mut T {
        self.element_mut(3)
    }

    /// Divide every component by the homogeneous weight at index `D`.
    ///
    /// The weight sits one past the stored components, so on a
    /// `Vector<T, D>` this lookup is always out of range and panics.
    /// Callers that keep the weight elsewhere use [`Vector::homogenize_with`].
    #[track_caller]
    pub fn homogenize(&mut self) {
        let weight = self.element(D);
        self.homogenize_with(weight);
    }

    /// Divide every component, the last one included, by `weight`.
    pub fn homogenize_with(&mut self, weight: T) {
        *self /= weight;
    }

    /// Largest positive component, or zero when no component is positive.
    ///
    /// This is not the textbook infinity norm: `(-5, -3, -1)` yields `0`.
    pub fn norm_inf(&self) -> T
    where
        T: PartialOrd,
    {
        self.elements
            .iter()
            .fold(T::zero(), |max, &e| if e > max { e } else { max })
    }

    /// Sum of the raw components (signs included, no absolute value).
    pub fn norm1(&self) -> T {
        self.elements.iter().fold(T::zero(), |sum, &e| sum + e)
    }

    /// Sum of squares.
    pub fn norm2(&self) -> T {
        self.elements.iter().fold(T::zero(), |sum, &e| sum + e * e)
    }

    /// Euclidean length.
    pub fn norm(&self) -> T
    where
        T: Float,
    {
        self.norm2().sqrt()
    }

    /// Scale to unit length in place and return the length before scaling.
    ///
    /// A zero vector yields NaN components.
    pub fn normalize(&mut self) -> T
    where
        T: Float,
    {
        let norm = self.norm();
        *self *= T::one() / norm;
        norm
    }

    pub fn abs(&self) -> Self
    where
        T: Signed,
    {
        self.map(|e| e.abs())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
    }

    /// Two-argument form of [`Vector::dot`].
    pub fn dot_product(a: &Self, b: &Self) -> T {
        a.dot(b)
    }

    /// True iff every component is strictly greater than `t`.
    pub fn all_greater(&self, t: T) -> bool
    where
        T: PartialOrd,
    {
        self.elements.iter().all(|&e| e > t)
    }

    /// True iff every component is strictly less than `t`.
    pub fn all_less(&self, t: T) -> bool
    where
        T: PartialOrd,
    {
        self.elements.iter().all(|&e| e < t)
    }

    /// Apply `f` to every component.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self { elements: self.elements.map(f) }
    }

    fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self {
            elements: core::array::from_fn(|i| f(self.elements[i], other.elements[i])),
        }
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Three-dimensional cross product.
    pub fn cross(&self, v: &Self) -> Self {
        let [a0, a1, a2] = self.elements;
        let [b0, b1, b2] = v.elements;
        Self::from_array([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }

    /// Two-argument form of [`Vector::cross`].
    pub fn cross_product(a: &Self, b: &Self) -> Self {
        a.cross(b)
    }
}

impl<T: Scalar, const D: usize> Default for Vector<T, D> {
    /// The zero vector.
    fn default() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Scalar, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    #[track_caller]
    fn index(&self, i: usize) -> &T {
        contract::require_index(i, D);
        &self.elements[i]
    }
}

impl<T: Scalar, const D: usize> IndexMut<usize> for Vector<T, D> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        contract::require_index(i, D);
        &mut self.elements[i]
    }
}

// Elementwise operators against another vector and against a scalar,
// plus the compound-assignment forms.
macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Scalar, const D: usize> $Op for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a $sym b)
            }
        }

        impl<T: Scalar, const D: usize> $Op<T> for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|a| a $sym rhs)
            }
        }

        impl<T: Scalar, const D: usize> $OpAssign for Vector<T, D> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<T: Scalar, const D: usize> $OpAssign<T> for Vector<T, D> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, +);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise_op!(Div, div, DivAssign, div_assign, /);

impl<T, const D: usize> Neg for Vector<T, D>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

// Conversions between Vector<T, D> and arrays [T; D]

impl<T: Scalar, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(array: [T; D]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Scalar, const D: usize> From<&[T; D]> for Vector<T, D> {
    fn from(array: &[T; D]) -> Self {
        Self::from_array(*array)
    }
}

impl<T: Scalar, const D: usize> From<Vector<T, D>> for [T; D] {
    fn from(v: Vector<T, D>) -> Self {
        v.elements
    }
}

impl<'a, T: Scalar, const D: usize> IntoIterator for &'a Vector<T, D> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// Text form: components separated by single spaces. The formatter's
// precision applies to every component.
impl<T, const D: usize> fmt::Display for Vector<T, D>
where
    T: Scalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(e, f)?;
        }
        Ok(())
    }
}

impl<T, const D: usize> FromStr for Vector<T, D>
where
    T: Scalar + FromStr,
{
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::decode_str(s)
    }
}

impl<T, const D: usize> TextEncode for Vector<T, D>
where
    T: Scalar + fmt::Display,
{
    fn write_text<W: Write + ?Sized>(&self, out: &mut W, format: &TextFormat) -> error::Result<()> {
        format.write_values(out, self.elements.iter())?;
        Ok(())
    }
}

impl<T, const D: usize> TextDecode for Vector<T, D>
where
    T: Scalar + FromStr,
{
    fn decode_tokens<S: TokenSource + ?Sized>(source: &mut S) -> error::Result<Self> {
        let mut elements = [T::zero(); D];
        for (i, slot) in elements.iter_mut().enumerate() {
            *slot = text::next_scalar(source, D, i)?;
        }
        Ok(Self::from_array(elements))
    }
}

// Serde: a vector is a tuple of D scalars.

impl<T, const D: usize> Serialize for Vector<T, D>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_array(&self.elements, serializer)
    }
}

impl<'de, T, const D: usize> Deserialize<'de> for Vector<T, D>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let elements =
            deserializer.deserialize_tuple(D, ArrayVisitor::<T, D>::new(T::zero(), "scalars"))?;
        Ok(Self::from_array(elements))
    }
}
