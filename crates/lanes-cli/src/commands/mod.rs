//! Subcommand implementations.

/// Bind `$v` to `Vector<$t, lanes>` for a lane count chosen at runtime
///
/// Evaluates to `Ok($body)`, or an error for a lane count outside 1 to 32.
macro_rules! by_lanes {
    ($lanes:expr, $t:ty, $v:ident => $body:expr) => {
        match $lanes {
            1 => {
                type $v = lanes::Vector<$t, 1>;
                Ok($body)
            }
            2 => {
                type $v = lanes::Vector<$t, 2>;
                Ok($body)
            }
            4 => {
                type $v = lanes::Vector<$t, 4>;
                Ok($body)
            }
            8 => {
                type $v = lanes::Vector<$t, 8>;
                Ok($body)
            }
            16 => {
                type $v = lanes::Vector<$t, 16>;
                Ok($body)
            }
            32 => {
                type $v = lanes::Vector<$t, 32>;
                Ok($body)
            }
            other => Err(anyhow::anyhow!(
                "{} lanes of {} is not supported (use 1, 2, 4, 8, 16 or 32)",
                other,
                stringify!($t)
            )),
        }
    };
}

pub(crate) use by_lanes;

pub mod kernels;
pub mod table;
pub mod verify;

/// Lane counts every kernel is run at by `verify`
pub const LANE_COUNTS: [usize; 6] = [1, 2, 4, 8, 16, 32];

/// Deterministic xorshift generator for kernel inputs
pub struct XorShift(u32);

impl XorShift {
    pub fn new(seed: u32) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Uniform in [-1, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 23) as f32 - 1.0
    }

    pub fn fill_f32(&mut self, len: usize) -> Vec<f32> {
        (0..len).map(|_| self.next_f32()).collect()
    }

    pub fn fill_u32(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.next_u32()).collect()
    }
}
