//! Error type for the slice-level helpers.
//!
//! The per-cell kernels never fail; missing data is carried by the nodata
//! sentinel instead. Errors only arise when a host hands over malformed
//! fields or a strict category conversion is requested.

use thiserror::Error;

/// Errors raised outside the per-cell kernels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Two fields that must be cell-aligned have different lengths.
    #[error("field `{field}` has {found} cells, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// Integer code does not name a debris category.
    #[error("unknown debris category code {0}")]
    UnknownDebrisCode(i32),
}

/// Result alias for fallible helpers.
pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = KernelError::LengthMismatch {
            field: "depth",
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "field `depth` has 3 cells, expected 4");
    }

    #[test]
    fn test_unknown_code_message() {
        assert_eq!(
            KernelError::UnknownDebrisCode(7).to_string(),
            "unknown debris category code 7"
        );
    }
}
