use super::SimdVector;

/// Integer vector operations
///
/// Shift and rotate amounts are taken modulo the lane bit width. The vector
/// amount operand is the unsigned companion vector; the scalar form takes a
/// `u32`.
///
/// # Example
///
/// ```rust
/// use lanes::{u8x4, SimdInteger, SimdVector};
///
/// let v = u8x4::from_array([0x81, 0x01, 0xF0, 0x0F]);
/// assert_eq!(v.shl_scalar(1).to_array(), [0x02, 0x02, 0xE0, 0x1E]);
/// assert_eq!(v.rotate_left_scalar(1).to_array(), [0x03, 0x02, 0xE1, 0x1E]);
/// assert_eq!(v.horizontal_or(), 0xFF);
/// ```
pub trait SimdInteger: SimdVector {
    /// Per-lane shift and rotate amounts
    type Amounts: SimdVector<Mask = Self::Mask>;

    /// Identity of horizontal AND (all bits set)
    const AND_IDENTITY: Self::Scalar;

    /// Identity of horizontal OR and XOR (zero)
    const OR_IDENTITY: Self::Scalar;

    /// Broadcast a shift amount
    fn splat_amount(amount: u32) -> Self::Amounts;

    /// Lane-wise remainder (`wrapping_rem`)
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor
    fn rem(self, rhs: Self) -> Self;

    /// Lane-wise AND
    fn bitwise_and(self, rhs: Self) -> Self;

    /// Lane-wise OR
    fn bitwise_or(self, rhs: Self) -> Self;

    /// Lane-wise XOR
    fn bitwise_xor(self, rhs: Self) -> Self;

    /// Lane-wise NOT
    fn bitwise_not(self) -> Self;

    /// Lane-wise saturating addition
    fn saturating_add(self, rhs: Self) -> Self;

    /// Lane-wise saturating subtraction
    fn saturating_sub(self, rhs: Self) -> Self;

    /// Shift left by per-lane amounts
    fn shl(self, amounts: Self::Amounts) -> Self;

    /// Shift right by per-lane amounts (arithmetic for signed lanes)
    fn shr(self, amounts: Self::Amounts) -> Self;

    /// Rotate left by per-lane amounts
    fn rotate_left(self, amounts: Self::Amounts) -> Self;

    /// Rotate right by per-lane amounts
    fn rotate_right(self, amounts: Self::Amounts) -> Self;

    binary_forms! {
        rhs Self, scalar Self::Scalar => splat;
        rem {
            scalar: rem_scalar,
            masked: rem_masked,
            scalar_masked: rem_scalar_masked,
            assign: rem_assign,
            scalar_assign: rem_scalar_assign,
            masked_assign: rem_masked_assign,
            scalar_masked_assign: rem_scalar_masked_assign,
        }
        bitwise_and {
            scalar: bitwise_and_scalar,
            masked: bitwise_and_masked,
            scalar_masked: bitwise_and_scalar_masked,
            assign: bitwise_and_assign,
            scalar_assign: bitwise_and_scalar_assign,
            masked_assign: bitwise_and_masked_assign,
            scalar_masked_assign: bitwise_and_scalar_masked_assign,
        }
        bitwise_or {
            scalar: bitwise_or_scalar,
            masked: bitwise_or_masked,
            scalar_masked: bitwise_or_scalar_masked,
            assign: bitwise_or_assign,
            scalar_assign: bitwise_or_scalar_assign,
            masked_assign: bitwise_or_masked_assign,
            scalar_masked_assign: bitwise_or_scalar_masked_assign,
        }
        bitwise_xor {
            scalar: bitwise_xor_scalar,
            masked: bitwise_xor_masked,
            scalar_masked: bitwise_xor_scalar_masked,
            assign: bitwise_xor_assign,
            scalar_assign: bitwise_xor_scalar_assign,
            masked_assign: bitwise_xor_masked_assign,
            scalar_masked_assign: bitwise_xor_scalar_masked_assign,
        }
        saturating_add {
            scalar: saturating_add_scalar,
            masked: saturating_add_masked,
            scalar_masked: saturating_add_scalar_masked,
            assign: saturating_add_assign,
            scalar_assign: saturating_add_scalar_assign,
            masked_assign: saturating_add_masked_assign,
            scalar_masked_assign: saturating_add_scalar_masked_assign,
        }
        saturating_sub {
            scalar: saturating_sub_scalar,
            masked: saturating_sub_masked,
            scalar_masked: saturating_sub_scalar_masked,
            assign: saturating_sub_assign,
            scalar_assign: saturating_sub_scalar_assign,
            masked_assign: saturating_sub_masked_assign,
            scalar_masked_assign: saturating_sub_scalar_masked_assign,
        }
    }

    binary_forms! {
        rhs Self::Amounts, scalar u32 => splat_amount;
        shl {
            scalar: shl_scalar,
            masked: shl_masked,
            scalar_masked: shl_scalar_masked,
            assign: shl_assign,
            scalar_assign: shl_scalar_assign,
            masked_assign: shl_masked_assign,
            scalar_masked_assign: shl_scalar_masked_assign,
        }
        shr {
            scalar: shr_scalar,
            masked: shr_masked,
            scalar_masked: shr_scalar_masked,
            assign: shr_assign,
            scalar_assign: shr_scalar_assign,
            masked_assign: shr_masked_assign,
            scalar_masked_assign: shr_scalar_masked_assign,
        }
        rotate_left {
            scalar: rotate_left_scalar,
            masked: rotate_left_masked,
            scalar_masked: rotate_left_scalar_masked,
            assign: rotate_left_assign,
            scalar_assign: rotate_left_scalar_assign,
            masked_assign: rotate_left_masked_assign,
            scalar_masked_assign: rotate_left_scalar_masked_assign,
        }
        rotate_right {
            scalar: rotate_right_scalar,
            masked: rotate_right_masked,
            scalar_masked: rotate_right_scalar_masked,
            assign: rotate_right_assign,
            scalar_assign: rotate_right_scalar_assign,
            masked_assign: rotate_right_masked_assign,
            scalar_masked_assign: rotate_right_scalar_masked_assign,
        }
    }

    unary_forms! {
        bitwise_not {
            masked: bitwise_not_masked,
            assign: bitwise_not_assign,
            masked_assign: bitwise_not_masked_assign,
        }
    }

    /// AND of all lanes
    fn horizontal_and(self) -> Self::Scalar;

    /// OR of all lanes
    fn horizontal_or(self) -> Self::Scalar;

    /// XOR of all lanes
    fn horizontal_xor(self) -> Self::Scalar;

    /// AND of `seed` and all lanes
    fn horizontal_and_seeded(self, seed: Self::Scalar) -> Self::Scalar;

    /// OR of `seed` and all lanes
    fn horizontal_or_seeded(self, seed: Self::Scalar) -> Self::Scalar;

    /// XOR of `seed` and all lanes
    fn horizontal_xor_seeded(self, seed: Self::Scalar) -> Self::Scalar;

    reduction_forms! {
        horizontal_and {
            seeded: horizontal_and_seeded,
            masked: horizontal_and_masked,
            masked_seeded: horizontal_and_masked_seeded,
            identity: Self::AND_IDENTITY,
        }
        horizontal_or {
            seeded: horizontal_or_seeded,
            masked: horizontal_or_masked,
            masked_seeded: horizontal_or_masked_seeded,
            identity: Self::OR_IDENTITY,
        }
        horizontal_xor {
            seeded: horizontal_xor_seeded,
            masked: horizontal_xor_masked,
            masked_seeded: horizontal_xor_masked_seeded,
            identity: Self::OR_IDENTITY,
        }
    }
}
