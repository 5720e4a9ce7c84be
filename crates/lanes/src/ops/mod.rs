//! Functional-style vector operations
//!
//! Free functions over the contract traits, for code that reads better as
//! `add(a, b)` than `a.add(b)`. Each one forwards to the trait method of the
//! same name.

pub mod arithmetic;
pub mod compare;
pub mod fma;
pub mod horizontal;

pub use arithmetic::*;
pub use compare::*;
pub use fma::*;
pub use horizontal::*;
