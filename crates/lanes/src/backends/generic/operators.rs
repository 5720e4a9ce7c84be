//! `core::ops` operator overloads
//!
//! Each operator forwards to the contract method of the same meaning, so
//! `a + b` and `a.add(b)` have identical semantics (wrapping for integers).

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::Vector;
use crate::element::{IntElement, SignedElement, SimdElement};
use crate::lanes::LaneCount;
use crate::resolver::SupportedLanes;
use crate::traits::{SimdInteger, SimdSigned, SimdVector};

macro_rules! vector_ops {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $contract:ident::$op:ident
        where T: $bound:ident;)*) => {$(
        impl<T: $bound, const N: usize> $trait for Vector<T, N>
        where
            LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                $contract::$op(self, rhs)
            }
        }

        impl<T: $bound, const N: usize> $assign for Vector<T, N>
        where
            LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $contract::$op(*self, rhs);
            }
        }
    )*};
}

vector_ops! {
    Add::add, AddAssign::add_assign => SimdVector::add where T: SimdElement;
    Sub::sub, SubAssign::sub_assign => SimdVector::sub where T: SimdElement;
    Mul::mul, MulAssign::mul_assign => SimdVector::mul where T: SimdElement;
    Div::div, DivAssign::div_assign => SimdVector::div where T: SimdElement;
    Rem::rem, RemAssign::rem_assign => SimdInteger::rem where T: IntElement;
    BitAnd::bitand, BitAndAssign::bitand_assign => SimdInteger::bitwise_and where T: IntElement;
    BitOr::bitor, BitOrAssign::bitor_assign => SimdInteger::bitwise_or where T: IntElement;
    BitXor::bitxor, BitXorAssign::bitxor_assign => SimdInteger::bitwise_xor where T: IntElement;
}

/// Operators with a scalar right-hand side, one set per lane type
macro_rules! scalar_ops {
    ($($ty:ty: $($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $op:ident),*;)*) => {$($(
        impl<const N: usize> $trait<$ty> for Vector<$ty, N>
        where
            LaneCount<N>: SupportedLanes<$ty>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: $ty) -> Self {
                SimdVector::$op(self, rhs)
            }
        }

        impl<const N: usize> $assign<$ty> for Vector<$ty, N>
        where
            LaneCount<N>: SupportedLanes<$ty>,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: $ty) {
                *self = SimdVector::$op(*self, rhs);
            }
        }
    )*)*};
}

scalar_ops! {
    i8: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    i16: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    i32: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    i64: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    u8: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    u16: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    u32: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    u64: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    f32: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
    f64: Add::add, AddAssign::add_assign => add_scalar, Sub::sub, SubAssign::sub_assign => sub_scalar,
        Mul::mul, MulAssign::mul_assign => mul_scalar, Div::div, DivAssign::div_assign => div_scalar;
}

impl<T: IntElement, const N: usize> Not for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
{
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        SimdInteger::bitwise_not(self)
    }
}

impl<T: SignedElement, const N: usize> Neg for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        SimdSigned::neg(self)
    }
}

macro_rules! shift_ops {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $op:ident, $scalar_op:ident;)*) => {$(
        impl<T: IntElement, const N: usize> $trait<Vector<T::Unsigned, N>> for Vector<T, N>
        where
            LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, amounts: Vector<T::Unsigned, N>) -> Self {
                SimdInteger::$op(self, amounts)
            }
        }

        impl<T: IntElement, const N: usize> $trait<u32> for Vector<T, N>
        where
            LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, amount: u32) -> Self {
                SimdInteger::$scalar_op(self, amount)
            }
        }

        impl<T: IntElement, const N: usize> $assign<Vector<T::Unsigned, N>> for Vector<T, N>
        where
            LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
        {
            #[inline(always)]
            fn $assign_method(&mut self, amounts: Vector<T::Unsigned, N>) {
                *self = SimdInteger::$op(*self, amounts);
            }
        }

        impl<T: IntElement, const N: usize> $assign<u32> for Vector<T, N>
        where
            LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
        {
            #[inline(always)]
            fn $assign_method(&mut self, amount: u32) {
                *self = SimdInteger::$scalar_op(*self, amount);
            }
        }
    )*};
}

shift_ops! {
    Shl::shl, ShlAssign::shl_assign => shl, shl_scalar;
    Shr::shr, ShrAssign::shr_assign => shr, shr_scalar;
}

#[cfg(test)]
mod tests {
    use crate::resolver::{f32x4, i16x4, i32x4, u16x4, u32x4, u8x4};

    #[test]
    fn test_arithmetic_operators() {
        let a = u32x4::from([1, 2, 3, u32::MAX]);
        let b = u32x4::from([4, 5, 6, 2]);
        assert_eq!(<[u32; 4]>::from(a + b), [5, 7, 9, 1]);
        assert_eq!(<[u32; 4]>::from(b - a), [3, 3, 3, 3]);
        assert_eq!(<[u32; 4]>::from(a * 2u32), [2, 4, 6, u32::MAX - 1]);
        assert_eq!(<[u32; 4]>::from(b / a), [4, 2, 2, 0]);
        assert_eq!(<[u32; 4]>::from(b % a), [0, 1, 0, 2]);

        let mut c = a;
        c += b;
        c -= 1u32;
        assert_eq!(<[u32; 4]>::from(c), [4, 6, 8, 0]);
    }

    #[test]
    fn test_bit_operators() {
        let a = u8x4::from([0b1100, 0xFF, 0, 1]);
        let b = u8x4::from([0b1010, 0x0F, 0, 1]);
        assert_eq!(<[u8; 4]>::from(a & b), [0b1000, 0x0F, 0, 1]);
        assert_eq!(<[u8; 4]>::from(a | b), [0b1110, 0xFF, 0, 1]);
        assert_eq!(<[u8; 4]>::from(a ^ b), [0b0110, 0xF0, 0, 0]);
        assert_eq!(<[u8; 4]>::from(!a), [0xF3, 0, 0xFF, 0xFE]);
    }

    #[test]
    fn test_shift_operators() {
        let v = i16x4::from([1, -1, 256, -256]);
        assert_eq!(<[i16; 4]>::from(v << 1u32), [2, -2, 512, -512]);
        assert_eq!(<[i16; 4]>::from(v >> 1u32), [0, -1, 128, -128]);
        assert_eq!(<[i16; 4]>::from(v << u16x4::from([0, 1, 2, 3])), [1, -2, 1024, -2048]);

        let mut w = i32x4::from([1, 2, 3, 4]);
        w <<= 2u32;
        assert_eq!(<[i32; 4]>::from(w), [4, 8, 12, 16]);
    }

    #[test]
    fn test_negation() {
        let v = f32x4::from([1.0, -2.0, 0.0, 3.5]);
        assert_eq!(<[f32; 4]>::from(-v), [-1.0, 2.0, -0.0, -3.5]);
        assert_eq!(<[i32; 4]>::from(-i32x4::from([i32::MIN, 1, 0, -1])), [i32::MIN, -1, 0, 1]);
    }
}
