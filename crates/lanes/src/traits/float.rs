use super::SimdVector;

/// Operations on vectors whose lanes carry a sign
///
/// Implemented for signed integer and float vectors. Integer `neg` and `abs`
/// wrap, so `abs(MIN) == MIN`.
pub trait SimdSigned: SimdVector {
    /// Lane-wise negation
    fn neg(self) -> Self;

    /// Lane-wise absolute value
    fn abs(self) -> Self;

    unary_forms! {
        neg {
            masked: neg_masked,
            assign: neg_assign,
            masked_assign: neg_masked_assign,
        }
        abs {
            masked: abs_masked,
            assign: abs_assign,
            masked_assign: abs_masked_assign,
        }
    }
}

/// Float vector operations
///
/// # Example
///
/// ```rust
/// use lanes::{f32x4, SimdFloat, SimdMask, SimdVector};
///
/// let v = f32x4::from_array([-1.5, 2.5, f32::NAN, 4.0]);
/// assert_eq!(v.floor().extract(0), -2.0);
/// assert_eq!(v.trunc().extract(1), 2.0);
/// assert!(v.is_nan().test(2));
/// assert_eq!(v.is_finite().count(), 3);
/// ```
pub trait SimdFloat: SimdSigned {
    /// Unsigned integer vector holding the raw bits of each lane
    type Bits: SimdVector<Mask = Self::Mask>;

    /// Lane-wise square root
    fn sqrt(self) -> Self;

    /// Round toward negative infinity
    fn floor(self) -> Self;

    /// Round toward positive infinity
    fn ceil(self) -> Self;

    /// Round to nearest, ties away from zero
    fn round(self) -> Self;

    /// Round toward zero
    fn trunc(self) -> Self;

    /// Lanes that are NaN
    fn is_nan(self) -> Self::Mask;

    /// Lanes that are positive or negative infinity
    fn is_infinite(self) -> Self::Mask;

    /// Lanes that are neither NaN nor infinite
    fn is_finite(self) -> Self::Mask;

    /// Lanes with the sign bit set, including `-0.0`
    fn is_sign_negative(self) -> Self::Mask;

    /// Reinterpret each lane's bits as an unsigned integer
    fn to_bits(self) -> Self::Bits;

    /// Reinterpret unsigned integer bits as floats
    fn from_bits(bits: Self::Bits) -> Self;

    /// Lane-wise reciprocal, `1 / self`
    #[inline(always)]
    fn recip(self) -> Self {
        Self::splat(<Self::Scalar as crate::element::SimdElement>::ONE).div(self)
    }

    /// `numerator / self` in every lane
    #[inline(always)]
    fn recip_scalar(self, numerator: Self::Scalar) -> Self {
        Self::splat(numerator).div(self)
    }

    unary_forms! {
        sqrt {
            masked: sqrt_masked,
            assign: sqrt_assign,
            masked_assign: sqrt_masked_assign,
        }
        recip {
            masked: recip_masked,
            assign: recip_assign,
            masked_assign: recip_masked_assign,
        }
        floor {
            masked: floor_masked,
            assign: floor_assign,
            masked_assign: floor_masked_assign,
        }
        ceil {
            masked: ceil_masked,
            assign: ceil_assign,
            masked_assign: ceil_masked_assign,
        }
        round {
            masked: round_masked,
            assign: round_assign,
            masked_assign: round_masked_assign,
        }
        trunc {
            masked: trunc_masked,
            assign: trunc_assign,
            masked_assign: trunc_masked_assign,
        }
    }
}
