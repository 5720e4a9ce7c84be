//! Backend implementations
//!
//! A backend provides concrete vector types implementing the contract traits
//! in [`crate::traits`]. The generic backend is always available and covers
//! the whole resolver table; hardware backends substitute for it type by type
//! and must reproduce its results.

pub mod generic;
