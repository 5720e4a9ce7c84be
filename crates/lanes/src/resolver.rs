//! Compile-time trait resolution
//!
//! Every supported (element, lane count) pair has one row in the table below.
//! A row binds the pair to its alignment and companion vector types. Fields
//! with no valid type resolve to [`Unsupported`], never to a stand-in.
//!
//! The lookup is `<LaneCount<N> as SupportedLanes<T>>`, which the compiler
//! resolves before code generation. A pair without a row is a compile error:
//!
//! ```compile_fail
//! use lanes::{SimdVector, Vector};
//! // 256 lanes of u8 would be 2048 bits wide
//! let _ = Vector::<u8, 256>::splat(0);
//! ```
//!
//! ```compile_fail
//! use lanes::{u64x2, Promote};
//! // u64 has no wider sibling
//! let _ = u64x2::splat(1).promote();
//! ```
//!
//! ```compile_fail
//! use lanes::{u8x4, IntToFloatVector};
//! // there is no 8-bit float
//! let _ = u8x4::splat(1).to_float();
//! ```

use crate::backends::generic::Vector;
use crate::element::{ElementKind, SimdElement};
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::swizzle::{LaneIndices, Swizzle};
use crate::traits::SimdMask;

/// Marker for a companion type that does not exist
///
/// Uninhabited: a value of this type can never be produced, so code that
/// names it compiles but can never run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {}

/// Zero-sized alignment markers
///
/// `Vector` stores a zero-length array of one of these next to its lanes,
/// which raises the vector's alignment without changing its size.
pub mod align {
    macro_rules! align_markers {
        ($($name:ident = $bytes:literal),*) => {$(
            #[doc = concat!("Aligns to ", stringify!($bytes), " bytes")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            #[repr(align($bytes))]
            pub struct $name;
        )*};
    }

    align_markers!(A1 = 1, A2 = 2, A4 = 4, A8 = 8, A16 = 16, A32 = 32, A64 = 64, A128 = 128);
}

/// One row of the resolver table
///
/// Implemented for `LaneCount<N>` once per supported element type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported lane count for `{T}`",
    label = "no resolver row for this element and lane count",
    note = "vectors are at most 1024 bits wide: 8-bit lanes up to 128, 16-bit up to 64, 32-bit up to 32, 64-bit up to 16"
)]
pub trait SupportedLanes<T: SimdElement>: SupportedLaneCount {
    /// Alignment marker, `N * size_of::<T>()` bytes
    type Align: Copy + Send + Sync + 'static;

    /// Unsigned vector of the same element width
    type Unsigned: 'static;

    /// Signed vector of the same element width
    type Signed: 'static;

    /// Vector of the same element with half the lanes
    type HalfWidth: 'static;

    /// Vector of the narrower sibling element
    type LowerPrecision: 'static;

    /// Vector of the wider sibling element
    type HigherPrecision: 'static;

    /// Float vector of the same element width (integers only)
    type FloatCompanion: 'static;
}

/// Companion types and constants of a vector type
///
/// Implemented for every `Vector<T, N>` with a resolver row. Generic code
/// reads the bundle instead of naming concrete types:
///
/// ```rust
/// use lanes::{u32x4, u64x4, f32x4, Unsupported, VectorTraits};
///
/// fn same<A: 'static, B: 'static>() -> bool {
///     core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
/// }
///
/// assert!(same::<<u32x4 as VectorTraits>::HigherPrecision, u64x4>());
/// assert!(same::<<u32x4 as VectorTraits>::FloatCompanion, f32x4>());
/// assert!(same::<<u64x4 as VectorTraits>::HigherPrecision, Unsupported>());
/// assert_eq!(<u32x4 as VectorTraits>::ALIGNMENT, 16);
/// ```
pub trait VectorTraits: Copy + 'static {
    /// Lane type
    type Scalar: SimdElement;

    /// Unsigned vector of the same element width
    type Unsigned: 'static;

    /// Signed vector of the same element width
    type Signed: 'static;

    /// Vector with half the lanes, or [`Unsupported`] at one lane
    type HalfWidth: 'static;

    /// Per-lane selector
    type Mask: SimdMask;

    /// Lane permutation indices
    type Swizzle: LaneIndices;

    /// Narrower sibling, or [`Unsupported`]
    type LowerPrecision: 'static;

    /// Wider sibling, or [`Unsupported`]
    type HigherPrecision: 'static;

    /// Float vector of the same width, or [`Unsupported`]
    type FloatCompanion: 'static;

    /// Number of lanes
    const LANES: usize;

    /// Alignment in bytes required by aligned loads and stores
    const ALIGNMENT: usize;
}

impl<T: SimdElement, const N: usize> VectorTraits for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    type Scalar = T;
    type Unsigned = <LaneCount<N> as SupportedLanes<T>>::Unsigned;
    type Signed = <LaneCount<N> as SupportedLanes<T>>::Signed;
    type HalfWidth = <LaneCount<N> as SupportedLanes<T>>::HalfWidth;
    type Mask = Mask<N>;
    type Swizzle = Swizzle<N>;
    type LowerPrecision = <LaneCount<N> as SupportedLanes<T>>::LowerPrecision;
    type HigherPrecision = <LaneCount<N> as SupportedLanes<T>>::HigherPrecision;
    type FloatCompanion = <LaneCount<N> as SupportedLanes<T>>::FloatCompanion;

    const LANES: usize = N;
    const ALIGNMENT: usize = core::mem::align_of::<Self>();
}

/// Printable form of one resolver row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    /// Alias of the vector type, e.g. `u32x4`
    pub name: &'static str,
    /// Lane type name
    pub element: &'static str,
    /// Lane kind
    pub kind: ElementKind,
    /// Number of lanes
    pub lanes: usize,
    /// Total width in bits
    pub bits: usize,
    /// Alignment in bytes
    pub alignment: usize,
    /// Half-width companion
    pub half: Option<&'static str>,
    /// Lower precision sibling
    pub lower: Option<&'static str>,
    /// Higher precision sibling
    pub higher: Option<&'static str>,
    /// Float companion
    pub float: Option<&'static str>,
}

/// Look up the resolver row for a vector alias such as `"f32x8"`
pub fn describe(name: &str) -> Option<&'static TableRow> {
    TABLE.iter().find(|row| row.name == name)
}

macro_rules! pick {
    (_, $n:tt) => { Unsupported };
    ($e:tt, _) => { Unsupported };
    ($e:ident, $n:literal) => { Vector<$e, $n> };
}

macro_rules! pick_name {
    (_, $n:tt) => { None };
    ($e:tt, _) => { None };
    ($e:ident, $n:literal) => { Some(concat!(stringify!($e), "x", stringify!($n))) };
}

macro_rules! resolve {
    ($(
        $alias:ident = $t:ident x $n:literal: align $align:ident,
            half $half:tt, lower $lower:tt, higher $higher:tt, float $float:tt;
    )*) => {
        $(
            #[doc = concat!("`", stringify!($t), "` vector with ", stringify!($n), " lanes")]
            #[allow(non_camel_case_types)]
            pub type $alias = Vector<$t, $n>;

            impl SupportedLanes<$t> for LaneCount<$n> {
                type Align = align::$align;
                type Unsigned = Vector<<$t as SimdElement>::Unsigned, $n>;
                type Signed = Vector<<$t as SimdElement>::Signed, $n>;
                type HalfWidth = pick!($t, $half);
                type LowerPrecision = pick!($lower, $n);
                type HigherPrecision = pick!($higher, $n);
                type FloatCompanion = pick!($float, $n);
            }
        )*

        /// Every supported vector type, in declaration order
        pub static TABLE: &[TableRow] = &[$(
            TableRow {
                name: stringify!($alias),
                element: <$t as SimdElement>::NAME,
                kind: <$t as SimdElement>::KIND,
                lanes: $n,
                bits: <$t as SimdElement>::BITS as usize * $n,
                alignment: core::mem::align_of::<Vector<$t, $n>>(),
                half: pick_name!($t, $half),
                lower: pick_name!($lower, $n),
                higher: pick_name!($higher, $n),
                float: pick_name!($float, $n),
            },
        )*];
    };
}

resolve! {
    u8x1 = u8 x 1: align A1, half _, lower _, higher u16, float _;
    u8x2 = u8 x 2: align A2, half 1, lower _, higher u16, float _;
    u8x4 = u8 x 4: align A4, half 2, lower _, higher u16, float _;
    u8x8 = u8 x 8: align A8, half 4, lower _, higher u16, float _;
    u8x16 = u8 x 16: align A16, half 8, lower _, higher u16, float _;
    u8x32 = u8 x 32: align A32, half 16, lower _, higher u16, float _;
    u8x64 = u8 x 64: align A64, half 32, lower _, higher u16, float _;
    u8x128 = u8 x 128: align A128, half 64, lower _, higher _, float _;

    i8x1 = i8 x 1: align A1, half _, lower _, higher i16, float _;
    i8x2 = i8 x 2: align A2, half 1, lower _, higher i16, float _;
    i8x4 = i8 x 4: align A4, half 2, lower _, higher i16, float _;
    i8x8 = i8 x 8: align A8, half 4, lower _, higher i16, float _;
    i8x16 = i8 x 16: align A16, half 8, lower _, higher i16, float _;
    i8x32 = i8 x 32: align A32, half 16, lower _, higher i16, float _;
    i8x64 = i8 x 64: align A64, half 32, lower _, higher i16, float _;
    i8x128 = i8 x 128: align A128, half 64, lower _, higher _, float _;

    u16x1 = u16 x 1: align A2, half _, lower u8, higher u32, float _;
    u16x2 = u16 x 2: align A4, half 1, lower u8, higher u32, float _;
    u16x4 = u16 x 4: align A8, half 2, lower u8, higher u32, float _;
    u16x8 = u16 x 8: align A16, half 4, lower u8, higher u32, float _;
    u16x16 = u16 x 16: align A32, half 8, lower u8, higher u32, float _;
    u16x32 = u16 x 32: align A64, half 16, lower u8, higher u32, float _;
    u16x64 = u16 x 64: align A128, half 32, lower u8, higher _, float _;

    i16x1 = i16 x 1: align A2, half _, lower i8, higher i32, float _;
    i16x2 = i16 x 2: align A4, half 1, lower i8, higher i32, float _;
    i16x4 = i16 x 4: align A8, half 2, lower i8, higher i32, float _;
    i16x8 = i16 x 8: align A16, half 4, lower i8, higher i32, float _;
    i16x16 = i16 x 16: align A32, half 8, lower i8, higher i32, float _;
    i16x32 = i16 x 32: align A64, half 16, lower i8, higher i32, float _;
    i16x64 = i16 x 64: align A128, half 32, lower i8, higher _, float _;

    u32x1 = u32 x 1: align A4, half _, lower u16, higher u64, float f32;
    u32x2 = u32 x 2: align A8, half 1, lower u16, higher u64, float f32;
    u32x4 = u32 x 4: align A16, half 2, lower u16, higher u64, float f32;
    u32x8 = u32 x 8: align A32, half 4, lower u16, higher u64, float f32;
    u32x16 = u32 x 16: align A64, half 8, lower u16, higher u64, float f32;
    u32x32 = u32 x 32: align A128, half 16, lower u16, higher _, float f32;

    i32x1 = i32 x 1: align A4, half _, lower i16, higher i64, float f32;
    i32x2 = i32 x 2: align A8, half 1, lower i16, higher i64, float f32;
    i32x4 = i32 x 4: align A16, half 2, lower i16, higher i64, float f32;
    i32x8 = i32 x 8: align A32, half 4, lower i16, higher i64, float f32;
    i32x16 = i32 x 16: align A64, half 8, lower i16, higher i64, float f32;
    i32x32 = i32 x 32: align A128, half 16, lower i16, higher _, float f32;

    f32x1 = f32 x 1: align A4, half _, lower _, higher f64, float _;
    f32x2 = f32 x 2: align A8, half 1, lower _, higher f64, float _;
    f32x4 = f32 x 4: align A16, half 2, lower _, higher f64, float _;
    f32x8 = f32 x 8: align A32, half 4, lower _, higher f64, float _;
    f32x16 = f32 x 16: align A64, half 8, lower _, higher f64, float _;
    f32x32 = f32 x 32: align A128, half 16, lower _, higher _, float _;

    u64x1 = u64 x 1: align A8, half _, lower u32, higher _, float f64;
    u64x2 = u64 x 2: align A16, half 1, lower u32, higher _, float f64;
    u64x4 = u64 x 4: align A32, half 2, lower u32, higher _, float f64;
    u64x8 = u64 x 8: align A64, half 4, lower u32, higher _, float f64;
    u64x16 = u64 x 16: align A128, half 8, lower u32, higher _, float f64;

    i64x1 = i64 x 1: align A8, half _, lower i32, higher _, float f64;
    i64x2 = i64 x 2: align A16, half 1, lower i32, higher _, float f64;
    i64x4 = i64 x 4: align A32, half 2, lower i32, higher _, float f64;
    i64x8 = i64 x 8: align A64, half 4, lower i32, higher _, float f64;
    i64x16 = i64 x 16: align A128, half 8, lower i32, higher _, float f64;

    f64x1 = f64 x 1: align A8, half _, lower f32, higher _, float _;
    f64x2 = f64 x 2: align A16, half 1, lower f32, higher _, float _;
    f64x4 = f64 x 4: align A32, half 2, lower f32, higher _, float _;
    f64x8 = f64 x 8: align A64, half 4, lower f32, higher _, float _;
    f64x16 = f64 x 16: align A128, half 8, lower f32, higher _, float _;
}
