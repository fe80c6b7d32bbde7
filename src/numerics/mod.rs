// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod codec;
pub mod contract;
pub mod error;
pub mod io;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod aliases;
    pub mod matrix;
    pub mod traits;
    pub mod vector;
}

pub use error::{NumericsError, Result};
pub use types::aliases::*;
pub use types::matrix::{Matrix, SquareMatrix};
pub use types::traits::{Conjugate, Scalar};
pub use types::vector::Vector;
