//! Scalar lane types
//!
//! Every vector lane holds one of ten primitive scalars. The traits in this
//! module describe what the engine needs from a lane: per-lane arithmetic that
//! never traps on overflow, the identity element of every reduction operator,
//! and the sibling relations (wider, narrower, float, reinterpreted sign) the
//! resolver table is built from.
//!
//! All traits are sealed. The set of lane types is closed so that the
//! resolver table in [`crate::resolver`] can be total.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

/// Kind of scalar held by a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Two's complement signed integer
    SignedInteger,
    /// Unsigned integer
    UnsignedInteger,
    /// IEEE 754 binary floating point
    Float,
}

impl ElementKind {
    /// Short lowercase name, used when printing the type table
    pub const fn name(self) -> &'static str {
        match self {
            Self::SignedInteger => "signed",
            Self::UnsignedInteger => "unsigned",
            Self::Float => "float",
        }
    }
}

/// A scalar that can be stored in a vector lane
///
/// Integer arithmetic wraps (two's complement) instead of trapping. Integer
/// division and remainder follow `wrapping_div` / `wrapping_rem`, so `MIN / -1`
/// wraps and division by zero panics exactly like the scalar operator does.
/// Float `lane_min` / `lane_max` return the non-NaN operand when only one
/// operand is NaN.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be stored in a vector lane",
    label = "not a lane type",
    note = "lane types are i8, i16, i32, i64, u8, u16, u32, u64, f32 and f64"
)]
pub trait SimdElement:
    Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + Sealed + 'static
{
    /// Unsigned integer of the same bit width (used for indices and shift amounts)
    type Unsigned: UnsignedElement;

    /// Signed integer of the same bit width
    type Signed: SimdElement;

    /// Kind tag of this scalar
    const KIND: ElementKind;

    /// Width of the scalar in bits
    const BITS: u32;

    /// Rust name of the scalar type
    const NAME: &'static str;

    /// Zero of this type
    const ZERO: Self;

    /// One of this type
    const ONE: Self;

    /// Identity of horizontal addition
    const ADD_IDENTITY: Self;

    /// Identity of horizontal multiplication
    const MUL_IDENTITY: Self;

    /// Identity of horizontal minimum (largest value, `+inf` for floats)
    const MIN_IDENTITY: Self;

    /// Identity of horizontal maximum (smallest value, `-inf` for floats)
    const MAX_IDENTITY: Self;

    /// Lane addition
    fn lane_add(self, rhs: Self) -> Self;

    /// Lane subtraction
    fn lane_sub(self, rhs: Self) -> Self;

    /// Lane multiplication
    fn lane_mul(self, rhs: Self) -> Self;

    /// Lane division
    fn lane_div(self, rhs: Self) -> Self;

    /// Lane minimum
    fn lane_min(self, rhs: Self) -> Self;

    /// Lane maximum
    fn lane_max(self, rhs: Self) -> Self;
}

/// Integer lane operations
pub trait IntElement:
    SimdElement
    + Eq
    + Ord
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Every bit set
    const ALL_ONES: Self;

    /// Identity of horizontal AND
    const AND_IDENTITY: Self;

    /// Identity of horizontal OR
    const OR_IDENTITY: Self;

    /// Identity of horizontal XOR
    const XOR_IDENTITY: Self;

    /// Wrapping remainder
    fn lane_rem(self, rhs: Self) -> Self;

    /// Shift left, amount taken modulo the bit width
    fn lane_shl(self, amount: u32) -> Self;

    /// Shift right (arithmetic for signed lanes), amount taken modulo the bit width
    fn lane_shr(self, amount: u32) -> Self;

    /// Rotate left
    fn lane_rotate_left(self, amount: u32) -> Self;

    /// Rotate right
    fn lane_rotate_right(self, amount: u32) -> Self;

    /// Saturating addition
    fn lane_saturating_add(self, rhs: Self) -> Self;

    /// Saturating subtraction
    fn lane_saturating_sub(self, rhs: Self) -> Self;

    /// Same bits as the unsigned type of equal width
    fn to_unsigned_bits(self) -> Self::Unsigned;

    /// Same bits as the signed type of equal width
    fn to_signed_bits(self) -> Self::Signed;
}

/// Unsigned integer lanes, usable as lane indices and shift amounts
pub trait UnsignedElement: IntElement {
    /// Convert to a memory index
    fn to_index(self) -> usize;

    /// Convert from a memory index, truncating to the lane width
    fn from_index(index: usize) -> Self;

    /// Convert to a shift or rotate amount
    fn to_shift(self) -> u32;
}

/// Lanes with a sign: signed integers and floats
pub trait SignedElement: SimdElement {
    /// Negation (wrapping for integers)
    fn lane_neg(self) -> Self;

    /// Absolute value (wrapping for integers, `abs(MIN) == MIN`)
    fn lane_abs(self) -> Self;
}

/// Floating point lanes
pub trait FloatElement: SignedElement {
    /// Positive infinity
    const INFINITY: Self;

    /// Negative infinity
    const NEG_INFINITY: Self;

    /// Quiet NaN
    const NAN: Self;

    /// Square root
    fn lane_sqrt(self) -> Self;

    /// Round toward negative infinity
    fn lane_floor(self) -> Self;

    /// Round toward positive infinity
    fn lane_ceil(self) -> Self;

    /// Round to nearest, ties away from zero
    fn lane_round(self) -> Self;

    /// Round toward zero
    fn lane_trunc(self) -> Self;

    /// NaN test
    fn lane_is_nan(self) -> bool;

    /// Infinity test
    fn lane_is_infinite(self) -> bool;

    /// Neither NaN nor infinite
    fn lane_is_finite(self) -> bool;

    /// Sign bit set (includes `-0.0` and negative NaN)
    fn lane_is_sign_negative(self) -> bool;

    /// Raw IEEE 754 bits
    fn lane_to_bits(self) -> Self::Unsigned;

    /// Float with the given IEEE 754 bits
    fn lane_from_bits(bits: Self::Unsigned) -> Self;
}

/// Lanes with a wider sibling of the same kind
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no wider lane type to promote to",
    note = "promotion is defined for 8/16/32-bit integers and f32"
)]
pub trait Widen: SimdElement {
    /// Sibling with twice the bit width
    type Wide: Narrow<Narrow = Self>;

    /// Lossless widening conversion
    fn widen(self) -> Self::Wide;
}

/// Lanes with a narrower sibling of the same kind
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no narrower lane type to demote to",
    note = "demotion is defined for 16/32/64-bit integers and f64"
)]
pub trait Narrow: SimdElement {
    /// Sibling with half the bit width
    type Narrow: SimdElement;

    /// Narrowing conversion with `as` semantics (integer truncation, float rounding)
    fn narrow(self) -> Self::Narrow;
}

/// Integer lanes with a float type of the same bit width
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no float type of the same width",
    note = "only 32-bit and 64-bit integers convert to f32 and f64"
)]
pub trait IntToFloat: IntElement {
    /// Float of the same bit width
    type Float: FloatElement;

    /// Numeric conversion (round to nearest)
    fn to_float(self) -> Self::Float;
}

/// Float lanes with integer types of the same bit width
pub trait FloatToInt: FloatElement {
    /// Signed integer of the same bit width
    type Int: IntElement;

    /// Unsigned integer of the same bit width
    type Uint: UnsignedElement;

    /// Truncating, saturating conversion (NaN becomes zero)
    fn to_int(self) -> Self::Int;

    /// Truncating, saturating conversion to unsigned (NaN and negatives become zero)
    fn to_uint(self) -> Self::Uint;
}

macro_rules! impl_int_element {
    ($($ty:ty => unsigned $uns:ty, signed $sig:ty, $kind:ident;)*) => {$(
        impl Sealed for $ty {}

        impl SimdElement for $ty {
            type Unsigned = $uns;
            type Signed = $sig;

            const KIND: ElementKind = ElementKind::$kind;
            const BITS: u32 = <$ty>::BITS;
            const NAME: &'static str = stringify!($ty);
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ADD_IDENTITY: Self = 0;
            const MUL_IDENTITY: Self = 1;
            const MIN_IDENTITY: Self = <$ty>::MAX;
            const MAX_IDENTITY: Self = <$ty>::MIN;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }
        }

        impl IntElement for $ty {
            const ALL_ONES: Self = !0;
            const AND_IDENTITY: Self = !0;
            const OR_IDENTITY: Self = 0;
            const XOR_IDENTITY: Self = 0;

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }

            #[inline(always)]
            fn lane_shl(self, amount: u32) -> Self {
                self.wrapping_shl(amount)
            }

            #[inline(always)]
            fn lane_shr(self, amount: u32) -> Self {
                self.wrapping_shr(amount)
            }

            #[inline(always)]
            fn lane_rotate_left(self, amount: u32) -> Self {
                self.rotate_left(amount)
            }

            #[inline(always)]
            fn lane_rotate_right(self, amount: u32) -> Self {
                self.rotate_right(amount)
            }

            #[inline(always)]
            fn lane_saturating_add(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            #[inline(always)]
            fn lane_saturating_sub(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }

            #[inline(always)]
            fn to_unsigned_bits(self) -> $uns {
                self as $uns
            }

            #[inline(always)]
            fn to_signed_bits(self) -> $sig {
                self as $sig
            }
        }
    )*};
}

impl_int_element! {
    i8 => unsigned u8, signed i8, SignedInteger;
    i16 => unsigned u16, signed i16, SignedInteger;
    i32 => unsigned u32, signed i32, SignedInteger;
    i64 => unsigned u64, signed i64, SignedInteger;
    u8 => unsigned u8, signed i8, UnsignedInteger;
    u16 => unsigned u16, signed i16, UnsignedInteger;
    u32 => unsigned u32, signed i32, UnsignedInteger;
    u64 => unsigned u64, signed i64, UnsignedInteger;
}

macro_rules! impl_unsigned_element {
    ($($ty:ty),*) => {$(
        impl UnsignedElement for $ty {
            #[inline(always)]
            fn to_index(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn from_index(index: usize) -> Self {
                index as $ty
            }

            #[inline(always)]
            fn to_shift(self) -> u32 {
                self as u32
            }
        }
    )*};
}

impl_unsigned_element!(u8, u16, u32, u64);

macro_rules! impl_signed_int_element {
    ($($ty:ty),*) => {$(
        impl SignedElement for $ty {
            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn lane_abs(self) -> Self {
                self.wrapping_abs()
            }
        }
    )*};
}

impl_signed_int_element!(i8, i16, i32, i64);

macro_rules! impl_float_element {
    ($($ty:ident => unsigned $uns:ty, signed $sig:ty, libm {
        abs: $abs:ident, sqrt: $sqrt:ident, floor: $floor:ident, ceil: $ceil:ident,
        round: $round:ident, trunc: $trunc:ident, min: $fmin:ident, max: $fmax:ident
    };)*) => {$(
        impl Sealed for $ty {}

        impl SimdElement for $ty {
            type Unsigned = $uns;
            type Signed = $sig;

            const KIND: ElementKind = ElementKind::Float;
            const BITS: u32 = <$uns>::BITS;
            const NAME: &'static str = stringify!($ty);
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const ADD_IDENTITY: Self = 0.0;
            const MUL_IDENTITY: Self = 1.0;
            const MIN_IDENTITY: Self = <$ty>::INFINITY;
            const MAX_IDENTITY: Self = <$ty>::NEG_INFINITY;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                libm::$fmin(self, rhs)
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                libm::$fmax(self, rhs)
            }
        }

        impl SignedElement for $ty {
            #[inline(always)]
            fn lane_neg(self) -> Self {
                -self
            }

            #[inline(always)]
            fn lane_abs(self) -> Self {
                libm::$abs(self)
            }
        }

        impl FloatElement for $ty {
            const INFINITY: Self = <$ty>::INFINITY;
            const NEG_INFINITY: Self = <$ty>::NEG_INFINITY;
            const NAN: Self = <$ty>::NAN;

            #[inline(always)]
            fn lane_sqrt(self) -> Self {
                libm::$sqrt(self)
            }

            #[inline(always)]
            fn lane_floor(self) -> Self {
                libm::$floor(self)
            }

            #[inline(always)]
            fn lane_ceil(self) -> Self {
                libm::$ceil(self)
            }

            #[inline(always)]
            fn lane_round(self) -> Self {
                libm::$round(self)
            }

            #[inline(always)]
            fn lane_trunc(self) -> Self {
                libm::$trunc(self)
            }

            #[inline(always)]
            fn lane_is_nan(self) -> bool {
                self.is_nan()
            }

            #[inline(always)]
            fn lane_is_infinite(self) -> bool {
                self.is_infinite()
            }

            #[inline(always)]
            fn lane_is_finite(self) -> bool {
                self.is_finite()
            }

            #[inline(always)]
            fn lane_is_sign_negative(self) -> bool {
                self.is_sign_negative()
            }

            #[inline(always)]
            fn lane_to_bits(self) -> $uns {
                self.to_bits()
            }

            #[inline(always)]
            fn lane_from_bits(bits: $uns) -> Self {
                <$ty>::from_bits(bits)
            }
        }
    )*};
}

impl_float_element! {
    f32 => unsigned u32, signed i32, libm {
        abs: fabsf, sqrt: sqrtf, floor: floorf, ceil: ceilf,
        round: roundf, trunc: truncf, min: fminf, max: fmaxf
    };
    f64 => unsigned u64, signed i64, libm {
        abs: fabs, sqrt: sqrt, floor: floor, ceil: ceil,
        round: round, trunc: trunc, min: fmin, max: fmax
    };
}

macro_rules! impl_widen_narrow {
    ($($narrow:ty => $wide:ty),*) => {$(
        impl Widen for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }
        }

        impl Narrow for $wide {
            type Narrow = $narrow;

            #[inline(always)]
            fn narrow(self) -> $narrow {
                self as $narrow
            }
        }
    )*};
}

impl_widen_narrow!(
    i8 => i16,
    i16 => i32,
    i32 => i64,
    u8 => u16,
    u16 => u32,
    u32 => u64,
    f32 => f64
);

macro_rules! impl_int_to_float {
    ($($int:ty => $float:ty),*) => {$(
        impl IntToFloat for $int {
            type Float = $float;

            #[inline(always)]
            fn to_float(self) -> $float {
                self as $float
            }
        }
    )*};
}

impl_int_to_float!(i32 => f32, u32 => f32, i64 => f64, u64 => f64);

macro_rules! impl_float_to_int {
    ($($float:ty => $int:ty, $uint:ty);*) => {$(
        impl FloatToInt for $float {
            type Int = $int;
            type Uint = $uint;

            #[inline(always)]
            fn to_int(self) -> $int {
                self as $int
            }

            #[inline(always)]
            fn to_uint(self) -> $uint {
                self as $uint
            }
        }
    )*};
}

impl_float_to_int!(f32 => i32, u32; f64 => i64, u64);
