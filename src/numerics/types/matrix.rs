// src/numerics/types/matrix.rs
// Matrix<T, DX, DY>: fixed DX-by-DY array of scalars.
// Rows and columns come out as Vector copies.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::str::FromStr;
use std::io::Write;

use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::traits::{Conjugate, Scalar};
use super::vector::Vector;
use crate::numerics::codec::ArrayVisitor;
use crate::numerics::contract::{self, MinDim};
use crate::numerics::error::{self, NumericsError};
use crate::numerics::io::{self as text, TextDecode, TextEncode, TextFormat, TokenSource};

/// A `DX`-by-`DY` matrix stored row-major.
///
/// Arithmetic between two matrices is elementwise. The only true product is
/// matrix times vector (`Mul<Vector<T, DY>>`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T: Scalar, const DX: usize, const DY: usize> {
    cells: [[T; DY]; DX],
}

/// Square matrix alias.
pub type SquareMatrix<T, const N: usize> = Matrix<T, N, N>;

impl<T: Scalar, const DX: usize, const DY: usize> Matrix<T, DX, DY> {
    /// Number of rows.
    pub const ROWS: usize = DX;
    /// Number of columns.
    pub const COLUMNS: usize = DY;

    pub fn dim_x() -> usize {
        DX
    }

    pub fn dim_y() -> usize {
        DY
    }

    /// Construct a matrix from its rows.
    pub fn from_rows(cells: [[T; DY]; DX]) -> Self {
        let () = MinDim::<DX, 1>::OK;
        let () = MinDim::<DY, 1>::OK;
        Self { cells }
    }

    /// Broadcast one value to every cell.
    pub fn splat(value: T) -> Self {
        Self::from_rows([[value; DY]; DX])
    }

    /// Set every cell to zero.
    pub fn zero(&mut self) {
        self.fill(T::zero());
    }

    /// Set every cell to one.
    pub fn one(&mut self) {
        self.fill(T::one());
    }

    /// Kronecker delta: one where `i == j`, zero elsewhere. Any shape.
    pub fn identity(&mut self) {
        for (i, row) in self.cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = if i == j { T::one() } else { T::zero() };
            }
        }
    }

    pub fn fill(&mut self, value: T) {
        self.cells = [[value; DY]; DX];
    }

    pub fn as_rows(&self) -> &[[T; DY]; DX] {
        &self.cells
    }

    pub fn into_rows(self) -> [[T; DY]; DX] {
        self.cells
    }

    /// Cell `(i, j)`. Out-of-range indices are a precondition violation.
    #[track_caller]
    pub fn element(&self, i: usize, j: usize) -> T {
        contract::require_cell(i, j, DX, DY);
        self.cells[i][j]
    }

    #[track_caller]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
        contract::require_cell(i, j, DX, DY);
        &mut self.cells[i][j]
    }

    #[track_caller]
    pub fn set_element(&mut self, e: T, i: usize, j: usize) {
        *self.element_mut(i, j) = e;
    }

    /// Cell `(i, j)`, checked regardless of the build mode.
    pub fn try_element(&self, i: usize, j: usize) -> error::Result<T> {
        contract::check_cell(i, j, DX, DY)?;
        Ok(self.cells[i][j])
    }

    pub fn transpose(&self) -> Matrix<T, DY, DX> {
        Matrix::from_rows(core::array::from_fn(|j| core::array::from_fn(|i| self.cells[i][j])))
    }

    /// Copy of row `r`.
    #[track_caller]
    pub fn row(&self, r: usize) -> Vector<T, DY> {
        contract::require_index(r, DX);
        Vector::from_array(self.cells[r])
    }

    /// Copy of column `c`.
    #[track_caller]
    pub fn column(&self, c: usize) -> Vector<T, DX> {
        contract::require_index(c, DY);
        Vector::from_array(core::array::from_fn(|i| self.cells[i][c]))
    }

    pub fn rows(&self) -> impl Iterator<Item = Vector<T, DY>> + '_ {
        self.cells.iter().map(|row| Vector::from_array(*row))
    }

    /// Elementwise complex conjugate. Same shape, no transpose.
    pub fn conj(&self) -> Self
    where
        T: Conjugate,
    {
        self.map(|cell| cell.conj())
    }

    /// Apply `f` to every cell.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self { cells: self.cells.map(|row| row.map(&mut f)) }
    }

    fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self {
            cells: core::array::from_fn(|i| {
                core::array::from_fn(|j| f(self.cells[i][j], other.cells[i][j]))
            }),
        }
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |sum, i| sum + self.cells[i][i])
    }

    /// The diagonal as a vector.
    pub fn diag(&self) -> Vector<T, N> {
        Vector::from_array(core::array::from_fn(|i| self.cells[i][i]))
    }
}

impl<T: Scalar, const DX: usize, const DY: usize> Default for Matrix<T, DX, DY> {
    /// The zero matrix.
    fn default() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Scalar, const DX: usize, const DY: usize> Index<(usize, usize)> for Matrix<T, DX, DY> {
    type Output = T;

    #[track_caller]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        contract::require_cell(i, j, DX, DY);
        &self.cells[i][j]
    }
}

impl<T: Scalar, const DX: usize, const DY: usize> IndexMut<(usize, usize)> for Matrix<T, DX, DY> {
    #[track_caller]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        contract::require_cell(i, j, DX, DY);
        &mut self.cells[i][j]
    }
}

// Elementwise operators. `Matrix * Matrix` is the Hadamard product here,
// not a matrix product.
macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Scalar, const DX: usize, const DY: usize> $Op for Matrix<T, DX, DY> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a $sym b)
            }
        }

        impl<T: Scalar, const DX: usize, const DY: usize> $Op<T> for Matrix<T, DX, DY> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|a| a $sym rhs)
            }
        }

        impl<T: Scalar, const DX: usize, const DY: usize> $OpAssign for Matrix<T, DX, DY> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<T: Scalar, const DX: usize, const DY: usize> $OpAssign<T> for Matrix<T, DX, DY> {
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

impl<T, const DX: usize, const DY: usize> Neg for Matrix<T, DX, DY>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|cell| -cell)
    }
}

/// Matrix-vector product: entry `i` is `row(i) . v`.
impl<T: Scalar, const DX: usize, const DY: usize> Mul<Vector<T, DY>> for Matrix<T, DX, DY> {
    type Output = Vector<T, DX>;

    fn mul(self, v: Vector<T, DY>) -> Vector<T, DX> {
        Vector::from_array(core::array::from_fn(|i| v.dot(&self.row(i))))
    }
}

// Conversions between Matrix<T, DX, DY> and nested arrays

impl<T: Scalar, const DX: usize, const DY: usize> From<[[T; DY]; DX]> for Matrix<T, DX, DY> {
    fn from(cells: [[T; DY]; DX]) -> Self {
        Self::from_rows(cells)
    }
}

impl<T: Scalar, const DX: usize, const DY: usize> From<Matrix<T, DX, DY>> for [[T; DY]; DX] {
    fn from(m: Matrix<T, DX, DY>) -> Self {
        m.cells
    }
}

// Text form: one line per row, values separated by single spaces.
impl<T, const DX: usize, const DY: usize> fmt::Display for Matrix<T, DX, DY>
where
    T: Scalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(cell, f)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<T, const DX: usize, const DY: usize> FromStr for Matrix<T, DX, DY>
where
    T: Scalar + FromStr,
{
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::decode_str(s)
    }
}

impl<T, const DX: usize, const DY: usize> TextEncode for Matrix<T, DX, DY>
where
    T: Scalar + fmt::Display,
{
    fn write_text<W: Write + ?Sized>(&self, out: &mut W, format: &TextFormat) -> error::Result<()> {
        for row in &self.cells {
            format.write_values(out, row.iter())?;
            format.end_row(out)?;
        }
        Ok(())
    }
}

impl<T, const DX: usize, const DY: usize> TextDecode for Matrix<T, DX, DY>
where
    T: Scalar + FromStr,
{
    fn decode_tokens<S: TokenSource + ?Sized>(source: &mut S) -> error::Result<Self> {
        let mut cells = [[T::zero(); DY]; DX];
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = text::next_scalar(source, DX * DY, i * DY + j)?;
            }
        }
        Ok(Self::from_rows(cells))
    }
}

// Serde: a matrix is a tuple of DX rows, each row a tuple of DY scalars.

impl<T, const DX: usize, const DY: usize> Serialize for Matrix<T, DX, DY>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(DX)?;
        for row in self.rows() {
            tuple.serialize_element(&row)?;
        }
        tuple.end()
    }
}

impl<'de, T, const DX: usize, const DY: usize> Deserialize<'de> for Matrix<T, DX, DY>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let rows = deserializer
            .deserialize_tuple(DX, ArrayVisitor::<Vector<T, DY>, DX>::new(Vector::default(), "rows"))?;
        Ok(Self::from_rows(rows.map(Vector::into_array)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::codec::{decode_binary, encode_binary};
    use num_complex::Complex;

    type M3 = Matrix<f32, 3, 3>;

    fn sample() -> M3 {
        Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ])
    }

    #[test]
    fn test_matrix_roundtrip() {
        let m = sample();

        let encoded = encode_binary(&m).unwrap();
        let decoded: M3 = decode_binary(&encoded).unwrap();

        assert_eq!(m, decoded);
    }

    #[test]
    fn test_rectangular_roundtrip() {
        let m = Matrix::<i64, 2, 4>::from_rows([[1, 2, 3, 4], [-5, -6, -7, -8]]);
        let decoded: Matrix<i64, 2, 4> = decode_binary(&encode_binary(&m).unwrap()).unwrap();
        assert_eq!(m, decoded);
    }

    #[test]
    fn test_matrix_constructors_and_accessors() {
        let m = sample();

        assert_eq!(m.row(0), Vector::new3(1.0, 2.0, 3.0));
        assert_eq!(m.column(1), Vector::new3(2.0, 5.0, 8.0));
        assert_eq!(m[(2, 0)], 7.0);
        assert_eq!(m.element(1, 2), 6.0);

        assert_eq!(M3::default(), M3::from_rows([[0.0; 3]; 3]));
        assert_eq!(M3::splat(4.0), M3::from_rows([[4.0; 3]; 3]));
        assert_eq!((M3::ROWS, M3::COLUMNS), (3, 3));
        assert_eq!((Matrix::<f32, 2, 5>::dim_x(), Matrix::<f32, 2, 5>::dim_y()), (2, 5));
    }

    #[test]
    fn test_matrix_zero_one_identity() {
        let mut m = sample();

        m.zero();
        assert_eq!(m, M3::from_rows([[0.0; 3]; 3]));

        m.one();
        assert_eq!(m, M3::from_rows([[1.0; 3]; 3]));

        m.identity();
        assert_eq!(
            m,
            M3::from_rows([[1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0]])
        );

        m.fill(2.0);
        assert_eq!(m, M3::splat(2.0));
    }

    #[test]
    fn test_rectangular_identity() {
        let mut m = Matrix::<i32, 2, 3>::default();
        m.identity();
        assert_eq!(m.into_rows(), [[1, 0, 0], [0, 1, 0]]);
    }

    #[test]
    fn test_element_mutation() {
        let mut m = Matrix::<i32, 2, 2>::default();
        m[(0, 1)] = 5;
        *m.element_mut(1, 0) = 6;
        m.set_element(7, 1, 1);
        assert_eq!(m.into_rows(), [[0, 5], [6, 7]]);
    }

    #[test]
    fn test_try_element() {
        let m = sample();
        assert_eq!(m.try_element(0, 0).unwrap(), 1.0);
        assert!(matches!(
            m.try_element(3, 0),
            Err(NumericsError::CellOutOfRange { row: 3, column: 0, rows: 3, columns: 3 })
        ));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let _ = Matrix::<f32, 2, 3>::default().row(2);
    }

    #[test]
    #[should_panic]
    fn test_cell_out_of_range_panics() {
        let m = Matrix::<f32, 2, 3>::default();
        let _ = m[(0, 3)];
    }

    #[test]
    fn test_transpose_swaps_shape() {
        let m = Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let t: Matrix<i32, 3, 2> = m.transpose();
        assert_eq!(t.into_rows(), [[1, 4], [2, 5], [3, 6]]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_trace_and_diag() {
        let m = sample();
        assert_eq!(m.trace(), 15.0);
        assert_eq!(m.diag(), Vector::new3(1.0, 5.0, 9.0));

        let mut id = SquareMatrix::<i32, 4>::default();
        id.identity();
        assert_eq!(id.trace(), 4);
    }

    #[test]
    fn test_matrix_add_sub_mul_div() {
        let a = sample();
        let b = Matrix::from_rows([[9.0, 8.0, 7.0],
                                   [6.0, 5.0, 4.0],
                                   [3.0, 2.0, 1.0]]);

        let sum = a + b;
        assert_eq!(sum.row(0), Vector::splat(10.0));

        let diff = a - b;
        assert_eq!(diff.row(2), Vector::new3(4.0, 6.0, 8.0));

        let scaled = a * 2.0;
        assert_eq!(scaled.row(1), Vector::new3(8.0, 10.0, 12.0));

        let hadamard = a * b;
        assert_eq!(hadamard.row(0), Vector::new3(9.0, 16.0, 21.0));

        let quotient = a / b;
        assert_eq!(quotient.row(1), Vector::new3(4.0 / 6.0, 1.0, 1.5));

        assert_eq!((a + 1.0).element(0, 0), 2.0);
        assert_eq!((a - 1.0).element(0, 0), 0.0);
        assert_eq!((a / 2.0).element(0, 1), 1.0);
        assert_eq!((-a).element(2, 2), -9.0);
    }

    #[test]
    fn test_compound_assignment() {
        let mut m = Matrix::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
        m += 1;
        m *= Matrix::splat(2);
        assert_eq!(m.into_rows(), [[4, 6], [8, 10]]);
        m -= Matrix::from_rows([[4, 6], [8, 10]]);
        assert_eq!(m, Matrix::default());
        m += Matrix::splat(9);
        m /= 3;
        m *= 2;
        m -= 1;
        m /= Matrix::splat(5);
        assert_eq!(m, Matrix::splat(1));
    }

    #[test]
    fn test_matrix_vector_mul() {
        let m = sample();
        let v = Vector::splat(1.0f32);

        // Row sums: [6, 15, 24]
        assert_eq!(m * v, Vector::new3(6.0, 15.0, 24.0));

        let mut id = M3::default();
        id.identity();
        let w = Vector::new3(3.5, -1.0, 2.0);
        assert_eq!(id * w, w);
    }

    #[test]
    fn test_rectangular_matrix_vector_mul() {
        let m = Matrix::<i32, 2, 3>::from_rows([[1, 0, 2], [0, 3, 1]]);
        let v = Vector::new3(1, 2, 3);
        assert_eq!(m * v, Vector::new2(7, 9));
    }

    #[test]
    fn test_conj_real_is_identity() {
        let m = sample();
        assert_eq!(m.conj(), m);
    }

    #[test]
    fn test_conj_complex() {
        let m = Matrix::<Complex<f32>, 3, 3>::splat(Complex::new(1.0, 2.0));
        assert_eq!(m.conj(), Matrix::splat(Complex::new(1.0, -2.0)));

        let r = Matrix::<Complex<f64>, 1, 2>::from_rows([[Complex::new(0.0, 1.0), Complex::new(2.0, -3.0)]]);
        assert_eq!(r.conj().into_rows(), [[Complex::new(0.0, -1.0), Complex::new(2.0, 3.0)]]);
    }

    #[test]
    fn test_equality() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);
        b[(1, 1)] = 0.0;
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_and_parse() {
        let m = Matrix::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "1 2\n3 4\n");

        let parsed: Matrix<i32, 2, 2> = "1 2 3\n 4".parse().unwrap();
        assert_eq!(parsed, m);

        assert!(matches!(
            "1 2 3".parse::<Matrix<i32, 2, 2>>(),
            Err(NumericsError::MissingToken { expected: 4, found: 3 })
        ));
    }

    #[test]
    fn test_stream_layout() {
        let m = Matrix::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.to_text(&TextFormat::stream()).unwrap(), "1 2 \n3 4 \n");
        assert_eq!(m.to_text(&TextFormat::default()).unwrap(), "1 2\n3 4\n");
    }
}
