// src/numerics/types/aliases.rs
// Named shapes for the common scalar and dimension combinations.

use super::matrix::Matrix;
use super::vector::Vector;

pub type Vector1f = Vector<f32, 1>;
pub type Vector2f = Vector<f32, 2>;
pub type Vector3f = Vector<f32, 3>;
pub type Vector4f = Vector<f32, 4>;

pub type Vector1d = Vector<f64, 1>;
pub type Vector2d = Vector<f64, 2>;
pub type Vector3d = Vector<f64, 3>;
pub type Vector4d = Vector<f64, 4>;

pub type Vector1i = Vector<i32, 1>;
pub type Vector2i = Vector<i32, 2>;
pub type Vector3i = Vector<i32, 3>;
pub type Vector4i = Vector<i32, 4>;

pub type Matrix2f = Matrix<f32, 2, 2>;
pub type Matrix3f = Matrix<f32, 3, 3>;
pub type Matrix4f = Matrix<f32, 4, 4>;

pub type Matrix2d = Matrix<f64, 2, 2>;
pub type Matrix3d = Matrix<f64, 3, 3>;
pub type Matrix4d = Matrix<f64, 4, 4>;

pub type Matrix2i = Matrix<i32, 2, 2>;
pub type Matrix3i = Matrix<i32, 3, 3>;
pub type Matrix4i = Matrix<i32, 4, 4>;
