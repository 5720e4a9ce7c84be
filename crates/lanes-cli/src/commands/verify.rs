//! `verify`: every kernel at every lane count against its scalar reference

use super::kernels::{
    dot, grid_point, histogram, histogram_scalar, mandelbrot, mandelbrot_scalar, saxpy,
};
use super::{by_lanes, XorShift, LANE_COUNTS};
use anyhow::{bail, Result};

const GRID: (usize, usize) = (37, 13);
const MAX_ITER: u32 = 200;
const BINS: usize = 13;
const DOT_TOLERANCE: f32 = 1e-4;

/// Outcome of one kernel at one lane count
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub kernel: &'static str,
    pub lanes: usize,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    fn new(kernel: &'static str, lanes: usize, passed: bool, detail: String) -> Self {
        Self {
            kernel,
            lanes,
            passed,
            detail,
        }
    }
}

fn first_mismatch<T: PartialEq>(actual: &[T], expected: &[T]) -> Option<usize> {
    if actual.len() != expected.len() {
        return Some(actual.len().min(expected.len()));
    }
    actual.iter().zip(expected).position(|(a, e)| a != e)
}

fn exact<T: PartialEq>(kernel: &'static str, lanes: usize, actual: &[T], expected: &[T]) -> Check {
    match first_mismatch(actual, expected) {
        None => Check::new(kernel, lanes, true, format!("{} values match", expected.len())),
        Some(at) => Check::new(kernel, lanes, false, format!("first mismatch at {}", at)),
    }
}

/// Run the whole matrix and return one `Check` per (kernel, lane count)
pub fn run_checks(len: usize) -> Result<Vec<Check>> {
    let (width, height) = GRID;
    let grid_expected: Vec<u32> = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| {
                let (cr, ci) = grid_point(col, row, width, height);
                mandelbrot_scalar(cr, ci, MAX_ITER)
            })
        })
        .collect();

    let mut rng = XorShift::new(0xc0ffee);
    let x = rng.fill_f32(len);
    let y = rng.fill_f32(len);
    let samples = rng.fill_u32(len);
    let a = 1.5f32;

    let saxpy_expected: Vec<f32> = x.iter().zip(&y).map(|(xv, yv)| a * xv + yv).collect();
    let dot_expected: f64 = x.iter().zip(&y).map(|(p, q)| *p as f64 * *q as f64).sum();
    // Rounding error scales with the sum of |p * q|
    let dot_scale: f64 = x
        .iter()
        .zip(&y)
        .map(|(p, q)| (*p as f64 * *q as f64).abs())
        .sum::<f64>()
        .max(1.0);
    let hist_expected = histogram_scalar(&samples, BINS);

    let mut checks = Vec::new();
    for &lanes in &LANE_COUNTS {
        log::debug!("verifying at {} lanes", lanes);

        let grid = by_lanes!(lanes, f32, V => mandelbrot::<V>(width, height, MAX_ITER))?;
        checks.push(exact("mandelbrot", lanes, &grid, &grid_expected));

        let mut out = y.clone();
        by_lanes!(lanes, f32, V => saxpy::<V>(a, &x, &mut out))?;
        checks.push(exact("saxpy", lanes, &out, &saxpy_expected));

        let got = by_lanes!(lanes, f32, V => dot::<V>(&x, &y))?;
        let err = ((got as f64 - dot_expected) / dot_scale).abs() as f32;
        checks.push(Check::new(
            "dot",
            lanes,
            err <= DOT_TOLERANCE,
            format!("relative error {:.2e}", err),
        ));

        let hist = by_lanes!(lanes, u32, V => histogram::<V>(&samples, BINS))?;
        checks.push(exact("histogram", lanes, &hist, &hist_expected));
    }
    Ok(checks)
}

pub fn run(len: usize) -> Result<()> {
    log::info!("verify: len {}, lanes {:?}", len, LANE_COUNTS);
    let checks = run_checks(len)?;

    for check in &checks {
        println!(
            "{:<10} x{:<3} {}  {}",
            check.kernel,
            check.lanes,
            if check.passed { "PASS" } else { "FAIL" },
            check.detail
        );
    }

    let failed = checks.iter().filter(|c| !c.passed).count();
    if failed > 0 {
        bail!("{} of {} checks failed", failed, checks.len());
    }
    println!("all {} checks passed", checks.len());
    Ok(())
}
