//! Reference kernels written once against the vector contracts
//!
//! Every kernel is generic over the vector type, so the same code runs at any
//! lane count the resolver supports. `run_*` pick the lane count at runtime.

use super::{by_lanes, XorShift};
use anyhow::{bail, Result};
use lanes::{FloatToIntVector, GatherScatter, SimdFloat, SimdInteger, SimdMask, SimdVector};
use std::time::Instant;

/// Region of the complex plane covered by the grid
const RE_RANGE: (f32, f32) = (-2.5, 1.0);
const IM_RANGE: (f32, f32) = (-1.25, 1.25);

/// Largest iteration limit the vector kernel counts exactly
///
/// Counts are kept in `f32` lanes, which hold every integer up to 2^24.
pub const MAX_ITER_LIMIT: u32 = 1 << 24;

/// Point of the complex plane for grid cell (`col`, `row`)
pub fn grid_point(col: usize, row: usize, width: usize, height: usize) -> (f32, f32) {
    let re = RE_RANGE.0 + (RE_RANGE.1 - RE_RANGE.0) * col as f32 / width.max(1) as f32;
    let im = IM_RANGE.0 + (IM_RANGE.1 - IM_RANGE.0) * row as f32 / height.max(1) as f32;
    (re, im)
}

/// Escape count of a single point
pub fn mandelbrot_scalar(cr: f32, ci: f32, max_iter: u32) -> u32 {
    let (mut zr, mut zi) = (0.0f32, 0.0f32);
    let mut count = 0;
    while count < max_iter && zr * zr + zi * zi <= 4.0 {
        let next = zr * zr - zi * zi + cr;
        zi = zr * zi * 2.0 + ci;
        zr = next;
        count += 1;
    }
    count
}

/// Escape counts of one grid row, `V::LANES` points at a time
///
/// Lanes that have escaped stop counting; the loop ends once no lane is left
/// inside or `max_iter` is reached. `max_iter` must not exceed
/// [`MAX_ITER_LIMIT`].
pub fn mandelbrot_row<V>(row: usize, width: usize, height: usize, max_iter: u32) -> Vec<u32>
where
    V: SimdFloat<Scalar = f32> + FloatToIntVector,
    V::Uint: SimdVector<Scalar = u32>,
{
    let lanes = V::LANES;
    let mut out = Vec::with_capacity(width);
    let mut re = vec![0.0f32; lanes];
    let mut im = vec![0.0f32; lanes];

    for start in (0..width).step_by(lanes) {
        let valid = lanes.min(width - start);
        for lane in 0..lanes {
            // Pad the tail with the last real point
            let col = start + lane.min(valid - 1);
            let (r, i) = grid_point(col, row, width, height);
            re[lane] = r;
            im[lane] = i;
        }
        let cr = V::from_slice(&re);
        let ci = V::from_slice(&im);

        let mut zr = V::zero();
        let mut zi = V::zero();
        let mut count = V::zero();
        for _ in 0..max_iter {
            let inside = zr.mul(zr).add(zi.mul(zi)).le_scalar(4.0);
            if !inside.any() {
                break;
            }
            count.add_scalar_masked_assign(inside, 1.0);
            let next = zr.mul(zr).sub(zi.mul(zi)).add(cr);
            zi = zr.mul(zi).mul_scalar(2.0).add(ci);
            zr = next;
        }

        let counts = count.to_uint().to_array();
        out.extend_from_slice(&counts.as_ref()[..valid]);
    }
    out
}

/// Escape counts of the whole grid, row-major
pub fn mandelbrot<V>(width: usize, height: usize, max_iter: u32) -> Vec<u32>
where
    V: SimdFloat<Scalar = f32> + FloatToIntVector,
    V::Uint: SimdVector<Scalar = u32>,
{
    (0..height)
        .flat_map(|row| mandelbrot_row::<V>(row, width, height, max_iter))
        .collect()
}

/// `y = a * x + y`, vectorised over full chunks with a scalar tail
pub fn saxpy<V: SimdVector<Scalar = f32>>(a: f32, x: &[f32], y: &mut [f32]) {
    assert_eq!(x.len(), y.len(), "saxpy operands differ in length");
    let lanes = V::LANES;
    let va = V::splat(a);

    let mut xs = x.chunks_exact(lanes);
    let mut ys = y.chunks_exact_mut(lanes);
    for (xc, yc) in (&mut xs).zip(&mut ys) {
        va.mul_add(V::from_slice(xc), V::from_slice(yc)).to_slice(yc);
    }
    for (xv, yv) in xs.remainder().iter().zip(ys.into_remainder()) {
        *yv = a * xv + *yv;
    }
}

/// Dot product with one accumulator per lane
pub fn dot<V: SimdVector<Scalar = f32>>(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "dot operands differ in length");
    let lanes = V::LANES;
    let mut acc = V::zero();

    let xs = a.chunks_exact(lanes);
    let ys = b.chunks_exact(lanes);
    let tail: f32 = xs
        .remainder()
        .iter()
        .zip(ys.remainder())
        .map(|(p, q)| p * q)
        .sum();
    for (xc, yc) in xs.zip(ys) {
        acc = V::from_slice(xc).mul_add(V::from_slice(yc), acc);
    }
    acc.horizontal_sum() + tail
}

/// Count `samples % bins` into `bins` buckets
///
/// Each lane owns a private copy of the histogram (`idx = bin * LANES + lane`)
/// so the gather/increment/scatter of one step never sees two lanes on the
/// same slot. The copies are summed at the end.
pub fn histogram<V>(samples: &[u32], bins: usize) -> Vec<u32>
where
    V: SimdInteger<Scalar = u32> + GatherScatter<Index = u32, Indices = V>,
{
    let lanes = V::LANES;
    let mut sub = vec![0u32; bins * lanes];
    let lane_ids: Vec<u32> = (0..lanes as u32).collect();
    let lane_ids = V::from_slice(&lane_ids);
    let nbins = V::splat(bins as u32);

    let chunks = samples.chunks_exact(lanes);
    for &sample in chunks.remainder() {
        sub[(sample as usize % bins) * lanes] += 1;
    }
    for chunk in chunks {
        let idx = V::from_slice(chunk)
            .rem(nbins)
            .mul_scalar(lanes as u32)
            .add(lane_ids);
        V::gather(&sub, idx).add_scalar(1).scatter(&mut sub, idx);
    }

    sub.chunks_exact(lanes)
        .map(|row| V::from_slice(row).horizontal_sum())
        .collect()
}

pub fn histogram_scalar(samples: &[u32], bins: usize) -> Vec<u32> {
    let mut hist = vec![0u32; bins];
    for &sample in samples {
        hist[sample as usize % bins] += 1;
    }
    hist
}

fn shade(count: u32, max_iter: u32) -> char {
    const RAMP: &[u8] = b" .:-=+*#%@";
    if count >= max_iter {
        return '@';
    }
    let step = (count as usize * (RAMP.len() - 1)) / max_iter.max(1) as usize;
    RAMP[step] as char
}

pub fn run_mandelbrot(
    lanes: usize,
    width: usize,
    height: usize,
    max_iter: u32,
    draw: bool,
) -> Result<()> {
    if width == 0 || height == 0 {
        bail!("Grid must be at least 1x1, got {}x{}", width, height);
    }
    if max_iter > MAX_ITER_LIMIT {
        bail!(
            "max_iter {} exceeds {}, the largest count an f32 lane holds exactly",
            max_iter,
            MAX_ITER_LIMIT
        );
    }
    log::info!(
        "mandelbrot: {}x{} grid, {} iterations, f32x{}",
        width,
        height,
        max_iter,
        lanes
    );

    let start = Instant::now();
    let counts = by_lanes!(lanes, f32, V => mandelbrot::<V>(width, height, max_iter))?;
    log::debug!("mandelbrot finished in {:?}", start.elapsed());

    if draw {
        for row in counts.chunks(width) {
            let line: String = row.iter().map(|&c| shade(c, max_iter)).collect();
            println!("{}", line);
        }
    }

    let inside = counts.iter().filter(|&&c| c >= max_iter).count();
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    println!("points:     {}", counts.len());
    println!("inside:     {}", inside);
    println!("iterations: {}", total);
    Ok(())
}

pub fn run_saxpy(lanes: usize, len: usize, a: f32) -> Result<()> {
    let mut rng = XorShift::new(0x5eed);
    let x = rng.fill_f32(len);
    let mut y = rng.fill_f32(len);
    log::info!("saxpy: {} elements, a = {}, f32x{}", len, a, lanes);

    let start = Instant::now();
    by_lanes!(lanes, f32, V => saxpy::<V>(a, &x, &mut y))?;
    log::debug!("saxpy finished in {:?}", start.elapsed());

    let checksum: f64 = y.iter().map(|&v| v as f64).sum();
    println!("elements: {}", len);
    println!("checksum: {:.6}", checksum);
    Ok(())
}

pub fn run_dot(lanes: usize, len: usize) -> Result<()> {
    let mut rng = XorShift::new(0xd07);
    let a = rng.fill_f32(len);
    let b = rng.fill_f32(len);
    log::info!("dot: {} elements, f32x{}", len, lanes);

    let start = Instant::now();
    let result = by_lanes!(lanes, f32, V => dot::<V>(&a, &b))?;
    log::debug!("dot finished in {:?}", start.elapsed());

    println!("elements: {}", len);
    println!("dot:      {:.6}", result);
    Ok(())
}

pub fn run_histogram(lanes: usize, len: usize, bins: usize) -> Result<()> {
    if bins == 0 {
        bail!("Histogram needs at least one bin");
    }
    if bins.saturating_mul(lanes) > u32::MAX as usize {
        bail!("{} bins x {} lanes overflows a u32 index", bins, lanes);
    }
    let samples = XorShift::new(0x4157).fill_u32(len);
    log::info!("histogram: {} samples, {} bins, u32x{}", len, bins, lanes);

    let start = Instant::now();
    let hist = by_lanes!(lanes, u32, V => histogram::<V>(&samples, bins))?;
    log::debug!("histogram finished in {:?}", start.elapsed());

    for (bin, count) in hist.iter().enumerate() {
        println!("{:>4}: {}", bin, count);
    }
    Ok(())
}
