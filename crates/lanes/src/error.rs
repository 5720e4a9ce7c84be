//! Errors reported by the checked slice adapters
//!
//! The kernels themselves never fail at runtime. Only the `try_*` entry points
//! that take caller-provided slices or indices return a [`LaneError`], which
//! lets callers validate untrusted input instead of panicking.
//!
//! # Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | L001 | Slice shorter than the vector's lane count |
//! | L002 | Slice not aligned to the vector's alignment |
//! | L003 | Gather/scatter index outside the slice |
//! | L004 | Lane index not below the lane count |

use core::fmt;

/// Error type for the checked slice adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneError {
    /// L001: slice holds fewer scalars than the vector has lanes
    SliceTooShort {
        /// Scalars required
        needed: usize,
        /// Scalars available
        len: usize,
    },
    /// L002: slice start is not a multiple of the vector's alignment
    Misaligned {
        /// Alignment required in bytes
        required: usize,
        /// Address of the first scalar
        address: usize,
    },
    /// L003: a gather/scatter index points past the end of the slice
    IndexOutOfRange {
        /// Lane holding the index
        lane: usize,
        /// Offending index
        index: usize,
        /// Slice length
        len: usize,
    },
    /// L004: a lane index is not below the lane count
    LaneOutOfRange {
        /// Offending lane index
        lane: usize,
        /// Lane count of the vector or swizzle
        lanes: usize,
    },
}

impl LaneError {
    /// Get the error code string (e.g., "L001")
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SliceTooShort { .. } => "L001",
            Self::Misaligned { .. } => "L002",
            Self::IndexOutOfRange { .. } => "L003",
            Self::LaneOutOfRange { .. } => "L004",
        }
    }

    /// Get guidance on how to fix this error
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::SliceTooShort { .. } => {
                "Pass a slice with at least LANES elements, or pad the tail with a masked load."
            }
            Self::Misaligned { .. } => {
                "Use an unaligned load, or allocate the buffer through Block so every chunk is aligned."
            }
            Self::IndexOutOfRange { .. } => {
                "Clamp indices to the slice length, or mask off the lanes that point outside it."
            }
            Self::LaneOutOfRange { .. } => "Lane indices must be in 0..LANES.",
        }
    }
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SliceTooShort { needed, len } => write!(
                f,
                "[{}] slice of length {} is too short, {} elements required",
                self.code(),
                len,
                needed
            ),
            Self::Misaligned { required, address } => write!(
                f,
                "[{}] address {:#x} is not aligned to {} bytes",
                self.code(),
                address,
                required
            ),
            Self::IndexOutOfRange { lane, index, len } => write!(
                f,
                "[{}] lane {} index {} is out of range for slice of length {}",
                self.code(),
                lane,
                index,
                len
            ),
            Self::LaneOutOfRange { lane, lanes } => write!(
                f,
                "[{}] lane {} is out of range for {} lanes",
                self.code(),
                lane,
                lanes
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LaneError {}

/// Check that `len` scalars cover `needed` lanes
#[inline]
pub(crate) fn check_len(needed: usize, len: usize) -> Result<(), LaneError> {
    if len < needed {
        return Err(LaneError::SliceTooShort { needed, len });
    }
    Ok(())
}

/// Check that `ptr` is aligned to `required` bytes
#[inline]
pub(crate) fn check_aligned<T>(ptr: *const T, required: usize) -> Result<(), LaneError> {
    let address = ptr as usize;
    if address % required != 0 {
        return Err(LaneError::Misaligned { required, address });
    }
    Ok(())
}
