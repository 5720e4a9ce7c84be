//! Aligned loads and stores through blocks, slices and raw pointers

use lanes::prelude::*;
use lanes::LaneError;

#[test]
fn test_aligned_pointer_round_trip() {
    assert_eq!(f32x16::ALIGNMENT, 64);

    let values: [f32; 64] = core::array::from_fn(|i| i as f32 * 0.5);
    let src = Block::<f32, 64>::from_slice(&values);
    let mut dst = Block::<f32, 64>::splat(-1.0);

    for chunk in 0..4 {
        let offset = chunk * f32x16::LANES;
        // SAFETY: both blocks are 128-byte aligned and `offset` is a multiple
        // of 16 f32 lanes, so every pointer is 64-byte aligned with 16
        // elements behind it
        unsafe {
            let v = f32x16::load_aligned_ptr(src.as_slice().as_ptr().add(offset));
            v.mul_scalar(2.0)
                .store_aligned_ptr(dst.as_mut_slice().as_mut_ptr().add(offset));
        }
    }

    for i in 0..64 {
        assert_eq!(dst[i], i as f32, "element {}", i);
    }
}

#[test]
fn test_aligned_pointer_matches_slice_load() {
    let values: [u64; 16] = core::array::from_fn(|i| (i as u64) << 40);
    let block = Block::<u64, 16>::from_slice(&values);
    // SAFETY: the block start is 128-byte aligned and holds 16 elements
    let from_ptr = unsafe { u64x8::load_aligned_ptr(block.as_slice().as_ptr()) };
    assert_eq!(from_ptr, u64x8::from_slice_aligned(block.as_slice()));
}

#[test]
fn test_try_from_slice_aligned_reports_misalignment() {
    let block = Block::<f32, 64>::splat(1.0);
    let shifted = &block.as_slice()[1..];

    let err = f32x16::try_from_slice_aligned(shifted).unwrap_err();
    assert_eq!(
        err,
        LaneError::Misaligned {
            required: 64,
            address: shifted.as_ptr() as usize
        }
    );
    assert_eq!(err.code(), "L002");

    assert_eq!(
        f32x16::try_from_slice_aligned(block.as_slice()),
        Ok(f32x16::splat(1.0))
    );
}

#[test]
fn test_try_from_slice_aligned_checks_length_first() {
    let block = Block::<i32, 32>::splat(7);
    assert_eq!(
        i32x16::try_from_slice_aligned(&block.as_slice()[..8]),
        Err(LaneError::SliceTooShort { needed: 16, len: 8 })
    );
}

#[test]
#[should_panic(expected = "not aligned")]
fn test_to_slice_aligned_panics_when_misaligned() {
    let mut block = Block::<i16, 64>::splat(0);
    i16x32::splat(3).to_slice_aligned(&mut block.as_mut_slice()[1..]);
}

#[test]
#[should_panic(expected = "not aligned")]
fn test_from_slice_aligned_panics_when_misaligned() {
    let block = Block::<f64, 32>::splat(0.0);
    let _ = f64x8::from_slice_aligned(&block.as_slice()[4..]);
}
