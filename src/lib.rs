//! # Fulgor linalg - fixed-dimension vectors and matrices
//!
//! `Vector<T, D>` and `Matrix<T, DX, DY>` are `Copy` value types whose shapes
//! are const generics. They never allocate.
//!
//! ```rust
//! use fulgor_linalg::{Matrix3f, Vector3f};
//!
//! let mut m = Matrix3f::default();
//! m.identity();
//! let v = Vector3f::new3(1.0, 2.0, 3.0);
//! assert_eq!(m * v, v);
//! assert_eq!(m.trace(), 3.0);
//!
//! let parsed: Vector3f = "1 2 3".parse().unwrap();
//! assert_eq!(parsed, v);
//! ```
//!
//! Index preconditions are checked in debug builds and compiled out in
//! release builds; the `checked` and `unchecked` features override that.

pub mod numerics;

pub use numerics::codec::{decode_binary, encode_binary};
pub use numerics::io::{TextDecode, TextEncode, TextFormat, TokenStream};
pub use numerics::types::aliases::*;
pub use numerics::{Conjugate, Matrix, NumericsError, Result, Scalar, SquareMatrix, Vector};
