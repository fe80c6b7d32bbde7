// src/numerics/contract.rs
// Precondition layer: checked and unchecked modes.
//
// Index preconditions are checked with a descriptive error when
// `CHECKS_ENABLED` is true. When it is false the descriptive check compiles
// away and the native array bounds check is the only guard left, so an
// out-of-range index still panics.

use super::error::{NumericsError, Result};

/// True when descriptive precondition checks are compiled in.
///
/// On in debug builds, off in release builds. The `checked` feature forces
/// them on everywhere and the `unchecked` feature turns them off in debug
/// builds; `checked` wins when both are set.
pub const CHECKS_ENABLED: bool =
    cfg!(feature = "checked") || (cfg!(debug_assertions) && !cfg!(feature = "unchecked"));

/// Fallible index check, independent of the build mode.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(NumericsError::IndexOutOfRange { index, len })
    }
}

/// Fallible cell check, independent of the build mode.
#[inline]
pub fn check_cell(row: usize, column: usize, rows: usize, columns: usize) -> Result<()> {
    if row < rows && column < columns {
        Ok(())
    } else {
        Err(NumericsError::CellOutOfRange { row, column, rows, columns })
    }
}

/// Panics on an out-of-range index when checks are enabled.
#[inline]
#[track_caller]
pub fn require_index(index: usize, len: usize) {
    if CHECKS_ENABLED {
        if let Err(err) = check_index(index, len) {
            violated(err);
        }
    }
}

/// Panics on an out-of-range cell when checks are enabled.
#[inline]
#[track_caller]
pub fn require_cell(row: usize, column: usize, rows: usize, columns: usize) {
    if CHECKS_ENABLED {
        if let Err(err) = check_cell(row, column, rows, columns) {
            violated(err);
        }
    }
}

#[cold]
#[track_caller]
fn violated(err: NumericsError) -> ! {
    tracing::error!(error = %err, "precondition violated");
    panic!("precondition violated: {err}");
}

/// Compile-time dimension bound: `D >= N`.
///
/// Referencing `MinDim::<D, N>::OK` in a generic function turns a
/// too-small dimension into a build error for that instantiation.
pub(crate) struct MinDim<const D: usize, const N: usize>;

impl<const D: usize, const N: usize> MinDim<D, N> {
    pub(crate) const OK: () = assert!(D >= N, "dimension is too small for this operation");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_bounds() {
        assert!(check_index(0, 3).is_ok());
        assert!(check_index(2, 3).is_ok());
        assert!(matches!(
            check_index(3, 3),
            Err(NumericsError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_check_cell_bounds() {
        assert!(check_cell(1, 2, 2, 3).is_ok());
        assert!(check_cell(2, 0, 2, 3).is_err());
        assert!(check_cell(0, 3, 2, 3).is_err());
    }

    #[test]
    fn test_require_index_accepts_valid_index() {
        require_index(1, 2);
        require_cell(0, 0, 1, 1);
    }

    #[test]
    fn test_checks_follow_build_mode() {
        if cfg!(feature = "checked") {
            assert!(CHECKS_ENABLED);
        } else if cfg!(feature = "unchecked") {
            assert!(!CHECKS_ENABLED);
        } else {
            assert_eq!(CHECKS_ENABLED, cfg!(debug_assertions));
        }
    }

    #[test]
    #[cfg(any(feature = "checked", all(debug_assertions, not(feature = "unchecked"))))]
    #[should_panic(expected = "Index out of range")]
    fn test_require_index_panics_when_checked() {
        require_index(5, 2);
    }
}
