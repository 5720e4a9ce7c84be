//! Conversion capabilities
//!
//! Each trait is implemented only where both ends of the conversion exist in
//! the resolver table, so an impossible conversion is a compile error rather
//! than a runtime failure.

use super::SimdVector;

/// Conversion to the wider sibling with the same lane count
///
/// Lossless. Not implemented for 64-bit lanes, or where the wider vector
/// would exceed 1024 bits.
pub trait Promote: SimdVector {
    /// Wider vector
    type Output: SimdVector<Mask = Self::Mask>;

    /// Widen every lane
    fn promote(self) -> Self::Output;
}

/// Conversion to the narrower sibling with the same lane count
///
/// Integers truncate to the low bits; `f64` lanes round to the nearest `f32`.
pub trait Demote: SimdVector {
    /// Narrower vector
    type Output: SimdVector<Mask = Self::Mask>;

    /// Narrow every lane
    fn demote(self) -> Self::Output;
}

/// Bit reinterpretation between signed and unsigned integers of one width
pub trait ReinterpretSign: SimdVector {
    /// Unsigned vector of the same width
    type AsUnsigned: SimdVector<Mask = Self::Mask>;

    /// Signed vector of the same width
    type AsSigned: SimdVector<Mask = Self::Mask>;

    /// Reinterpret every lane as unsigned
    fn to_unsigned(self) -> Self::AsUnsigned;

    /// Reinterpret every lane as signed
    fn to_signed(self) -> Self::AsSigned;
}

/// Numeric conversion of 32-bit and 64-bit integers to floats
pub trait IntToFloatVector: SimdVector {
    /// Float vector of the same width
    type Float: SimdVector<Mask = Self::Mask>;

    /// Convert every lane, rounding to nearest
    fn to_float(self) -> Self::Float;
}

/// Numeric conversion of floats to integers
///
/// Truncates toward zero and saturates at the integer range; NaN becomes
/// zero. Negative lanes become zero in [`to_uint`](Self::to_uint).
pub trait FloatToIntVector: SimdVector {
    /// Signed integer vector of the same width
    type Int: SimdVector<Mask = Self::Mask>;

    /// Unsigned integer vector of the same width
    type Uint: SimdVector<Mask = Self::Mask>;

    /// Convert every lane to a signed integer
    fn to_int(self) -> Self::Int;

    /// Convert every lane to an unsigned integer
    fn to_uint(self) -> Self::Uint;
}

/// Decomposition into two half-width vectors
///
/// Lane `i` of the low half is lane `i` of the full vector; lane `i` of the
/// high half is lane `i + LANES / 2`. Not implemented for one-lane vectors.
///
/// # Example
///
/// ```rust
/// use lanes::{u16x2, u16x4, Packable, SimdVector};
///
/// let lo = u16x2::from_array([1, 2]);
/// let hi = u16x2::from_array([3, 4]);
/// let v = u16x4::pack(lo, hi);
/// assert_eq!(v.to_array(), [1, 2, 3, 4]);
/// assert_eq!(v.unpack_hi().to_array(), [3, 4]);
/// ```
pub trait Packable: SimdVector {
    /// Vector with half the lanes
    type Half: SimdVector<Scalar = Self::Scalar>;

    /// Concatenate two halves
    fn pack(lo: Self::Half, hi: Self::Half) -> Self;

    /// Split into low and high halves
    fn unpack(self) -> (Self::Half, Self::Half);

    /// Replace the low half
    #[inline(always)]
    fn pack_lo(self, lo: Self::Half) -> Self {
        Self::pack(lo, self.unpack_hi())
    }

    /// Replace the high half
    #[inline(always)]
    fn pack_hi(self, hi: Self::Half) -> Self {
        Self::pack(self.unpack_lo(), hi)
    }

    /// Low half
    #[inline(always)]
    fn unpack_lo(self) -> Self::Half {
        self.unpack().0
    }

    /// High half
    #[inline(always)]
    fn unpack_hi(self) -> Self::Half {
        self.unpack().1
    }
}
