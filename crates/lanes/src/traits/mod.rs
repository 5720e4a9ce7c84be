//! Backend contract traits
//!
//! These traits are the operation surface every backend provides. A backend
//! implements the unmasked kernels; the scalar-operand, masked and in-place
//! forms are default methods built on [`SimdVector::select`], so every backend
//! inherits the same pass-through behaviour for unselected lanes.

/// Scalar, masked and in-place forms of a binary operation
///
/// Expands inside a trait body. `$splat` names an associated function that
/// broadcasts the scalar operand to the right-hand-side vector type.
macro_rules! binary_forms {
    (rhs $rhs:ty, scalar $scalar_ty:ty => $splat:ident; $($op:ident {
        scalar: $scalar:ident,
        masked: $masked:ident,
        scalar_masked: $scalar_masked:ident,
        assign: $assign:ident,
        scalar_assign: $scalar_assign:ident,
        masked_assign: $masked_assign:ident,
        scalar_masked_assign: $scalar_masked_assign:ident $(,)?
    })*) => {$(
        #[doc = concat!("`", stringify!($op), "` with `rhs` broadcast to every lane")]
        #[inline(always)]
        fn $scalar(self, rhs: $scalar_ty) -> Self {
            self.$op(Self::$splat(rhs))
        }

        #[doc = concat!("`", stringify!($op), "` on the lanes selected by `mask`; other lanes keep `self`")]
        #[inline(always)]
        fn $masked(self, mask: Self::Mask, rhs: $rhs) -> Self {
            Self::select(mask, self.$op(rhs), self)
        }

        #[doc = concat!("`", stringify!($masked), "` with `rhs` broadcast to every lane")]
        #[inline(always)]
        fn $scalar_masked(self, mask: Self::Mask, rhs: $scalar_ty) -> Self {
            self.$masked(mask, Self::$splat(rhs))
        }

        #[doc = concat!("In-place `", stringify!($op), "`")]
        #[inline(always)]
        fn $assign(&mut self, rhs: $rhs) {
            *self = self.$op(rhs);
        }

        #[doc = concat!("In-place `", stringify!($scalar), "`")]
        #[inline(always)]
        fn $scalar_assign(&mut self, rhs: $scalar_ty) {
            *self = self.$scalar(rhs);
        }

        #[doc = concat!("In-place `", stringify!($masked), "`")]
        #[inline(always)]
        fn $masked_assign(&mut self, mask: Self::Mask, rhs: $rhs) {
            *self = self.$masked(mask, rhs);
        }

        #[doc = concat!("In-place `", stringify!($scalar_masked), "`")]
        #[inline(always)]
        fn $scalar_masked_assign(&mut self, mask: Self::Mask, rhs: $scalar_ty) {
            *self = self.$scalar_masked(mask, rhs);
        }
    )*};
}

/// Masked and in-place forms of a unary operation
macro_rules! unary_forms {
    ($($op:ident {
        masked: $masked:ident,
        assign: $assign:ident,
        masked_assign: $masked_assign:ident $(,)?
    })*) => {$(
        #[doc = concat!("`", stringify!($op), "` on the lanes selected by `mask`; other lanes keep `self`")]
        #[inline(always)]
        fn $masked(self, mask: Self::Mask) -> Self {
            Self::select(mask, self.$op(), self)
        }

        #[doc = concat!("In-place `", stringify!($op), "`")]
        #[inline(always)]
        fn $assign(&mut self) {
            *self = self.$op();
        }

        #[doc = concat!("In-place `", stringify!($masked), "`")]
        #[inline(always)]
        fn $masked_assign(&mut self, mask: Self::Mask) {
            *self = self.$masked(mask);
        }
    )*};
}

/// Masked and seeded forms of a horizontal reduction
///
/// Masked lanes are replaced by `$identity` before folding, so an empty
/// selection reduces to the identity (or to the seed).
macro_rules! reduction_forms {
    ($($op:ident {
        seeded: $seeded:ident,
        masked: $masked:ident,
        masked_seeded: $masked_seeded:ident,
        identity: $identity:expr $(,)?
    })*) => {$(
        #[doc = concat!("`", stringify!($op), "` over the lanes selected by `mask`")]
        ///
        /// Unselected lanes contribute the operator's identity.
        #[inline(always)]
        fn $masked(self, mask: Self::Mask) -> Self::Scalar {
            Self::select(mask, self, Self::splat($identity)).$op()
        }

        #[doc = concat!("`", stringify!($seeded), "` over the lanes selected by `mask`")]
        #[inline(always)]
        fn $masked_seeded(self, mask: Self::Mask, seed: Self::Scalar) -> Self::Scalar {
            Self::select(mask, self, Self::splat($identity)).$seeded(seed)
        }
    )*};
}

mod convert;
mod float;
mod gather;
mod integer;
mod mask;
mod vector;

pub use convert::{Demote, FloatToIntVector, IntToFloatVector, Packable, Promote, ReinterpretSign};
pub use float::{SimdFloat, SimdSigned};
pub use gather::GatherScatter;
pub use integer::SimdInteger;
pub use mask::SimdMask;
pub use vector::SimdVector;
