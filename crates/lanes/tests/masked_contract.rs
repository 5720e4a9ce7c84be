//! Masked operation contract
//!
//! Every masked form, whatever its shape (vector or scalar operand,
//! in-place, unary, fused, memory), must leave unselected lanes exactly as
//! they were.

use lanes::prelude::*;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
use test_utils::*;

const MASK: [bool; 8] = [true, false, false, true, true, false, true, false];

#[test]
fn test_scalar_masked_forms() {
    let a = i32x8::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
    let mask = Mask::from_array(MASK);
    let original = a.to_array();

    let r = a.add_scalar_masked(mask, 100).to_array();
    assert_pass_through(&MASK, &r, &a.add_scalar(100).to_array(), &original, "add_scalar_masked");

    let r = a.sub_scalar_masked(mask, 1).to_array();
    assert_pass_through(&MASK, &r, &a.sub_scalar(1).to_array(), &original, "sub_scalar_masked");

    let r = a.mul_scalar_masked(mask, -3).to_array();
    assert_pass_through(&MASK, &r, &a.mul_scalar(-3).to_array(), &original, "mul_scalar_masked");

    let r = a.div_scalar_masked(mask, 2).to_array();
    assert_pass_through(&MASK, &r, &a.div_scalar(2).to_array(), &original, "div_scalar_masked");

    let r = a.rem_scalar_masked(mask, 3).to_array();
    assert_pass_through(&MASK, &r, &a.rem_scalar(3).to_array(), &original, "rem_scalar_masked");

    let r = a.min_scalar_masked(mask, 4).to_array();
    assert_eq!(r, [1, 2, 3, 4, 4, 6, 4, 8]);

    let r = a.max_scalar_masked(mask, 4).to_array();
    assert_eq!(r, [4, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_in_place_masked_forms() {
    let mask = Mask::from_array(MASK);

    let mut v = u64x8::splat(10);
    v.add_masked_assign(mask, u64x8::splat(5));
    assert_eq!(v.to_array(), [15, 10, 10, 15, 15, 10, 15, 10]);

    v.mul_scalar_masked_assign(!mask, 2);
    assert_eq!(v.to_array(), [15, 20, 20, 15, 15, 20, 15, 20]);

    v.shl_scalar_masked_assign(mask, 1);
    assert_eq!(v.to_array(), [30, 20, 20, 30, 30, 20, 30, 20]);

    v.bitwise_not_masked_assign(Mask::splat(false));
    assert_eq!(v.to_array(), [30, 20, 20, 30, 30, 20, 30, 20]);
}

#[test]
fn test_unmasked_in_place_forms() {
    let mut v = u8x4::from_array([250, 5, 0, 128]);
    v.add_scalar_assign(10);
    assert_eq!(v.to_array(), [4, 15, 10, 138]);
    v.saturating_sub_scalar_assign(12);
    assert_eq!(v.to_array(), [0, 3, 0, 126]);
    v.rotate_right_scalar_assign(1);
    assert_eq!(v.to_array(), [0, 0x81, 0, 63]);
}

#[test]
fn test_unary_masked_forms() {
    let mask = Mask::from_array([true, false, true, false]);
    let v = f64x4::from_array([-2.5, -2.5, 9.0, 9.0]);

    assert_eq!(v.abs_masked(mask).to_array(), [2.5, -2.5, 9.0, 9.0]);
    assert_eq!(v.neg_masked(mask).to_array(), [2.5, -2.5, -9.0, 9.0]);
    assert_eq!(v.floor_masked(mask).to_array(), [-3.0, -2.5, 9.0, 9.0]);
    assert_eq!(v.ceil_masked(!mask).to_array(), [-2.5, -2.0, 9.0, 9.0]);
    assert_eq!(v.round_masked(mask).to_array(), [-3.0, -2.5, 9.0, 9.0]);
    assert_eq!(v.trunc_masked(mask).to_array(), [-2.0, -2.5, 9.0, 9.0]);

    let s = f64x4::from_array([4.0, -1.0, 16.0, 2.0]);
    let r = s.sqrt_masked(mask).to_array();
    assert_eq!(r, [2.0, -1.0, 4.0, 2.0]);

    let r = s.recip_masked(mask).to_array();
    assert_eq!(r, [0.25, -1.0, 0.0625, 2.0]);
}

#[test]
fn test_unselected_nan_survives() {
    // Pass-through is bit-exact, so a NaN payload in an unselected lane is kept
    let payload = f32::from_bits(0x7fc0_1234);
    let v = f32x4::from_array([payload, 1.0, 2.0, 3.0]);
    let mask = Mask::from_array([false, true, true, true]);
    let r = v.mul_scalar_masked(mask, 2.0);
    assert_eq!(r.to_array()[0].to_bits(), 0x7fc0_1234);
    assert_same_f32(&r.to_array(), &[payload, 2.0, 4.0, 6.0], "mul_scalar_masked");
}

#[test]
fn test_fused_masked_forms() {
    let mask = Mask::from_array([true, true, false, false]);
    let a = i16x4::splat(3);
    let b = i16x4::splat(4);
    let c = i16x4::splat(5);

    assert_eq!(a.mul_add_masked(mask, b, c).to_array(), [17, 17, 3, 3]);
    assert_eq!(a.mul_sub_masked(mask, b, c).to_array(), [7, 7, 3, 3]);
    assert_eq!(a.add_mul_masked(mask, b, c).to_array(), [35, 35, 3, 3]);
    assert_eq!(a.sub_mul_masked(mask, b, c).to_array(), [-5, -5, 3, 3]);
}

#[test]
fn test_swizzle_masked() {
    let v = u32x4::from_array([10, 20, 30, 40]);
    let mask = Mask::from_array([true, false, true, false]);
    let r = v.swizzle_masked(mask, &Swizzle::reversed());
    assert_eq!(r.to_array(), [40, 20, 20, 40]);
}

#[test]
fn test_load_store_masked() {
    let mask = Mask::from_array([false, true, true, false]);
    let src = [1u16, 2, 3, 4];

    let v = u16x4::splat(9).load_masked(mask, &src);
    assert_eq!(v.to_array(), [9, 2, 3, 9]);

    let mut dst = [0u16; 6];
    u16x4::splat(7).store_masked(mask, &mut dst);
    assert_eq!(dst, [0, 7, 7, 0, 0, 0]);
}

#[test]
fn test_blend_and_select() {
    let a = i8x8::splat(1);
    let b = i8x8::splat(-1);
    let mask = Mask::from_array(MASK);

    let blended = a.blend(mask, b).to_array();
    let selected = i8x8::select(mask, b, a).to_array();
    assert_eq!(blended, selected);
    assert_eq!(blended, [-1, 1, 1, -1, -1, 1, -1, 1]);
}

#[test]
fn test_masked_mask_reductions() {
    let selected = Mask::<8>::from_array(MASK);
    let first_half = Mask::from_bitmask(0x0f);

    assert!(selected.any_masked(first_half));
    assert!(!selected.all_masked(first_half));
    assert!(selected.all_masked(selected));
    assert!(!selected.any_masked(!selected));
}
