//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing Z_m and the modular kernel
//! (exponentiation and inverse) the rest of the crate is built on.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd};
pub use math::{Ring, mod_inv, mod_pow};
