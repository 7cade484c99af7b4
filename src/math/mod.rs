//! Mathematical core of the recursive multiplier.
//!
//! This module provides the decimal digit helpers and the Karatsuba recursion
//! that computes exact products of arbitrary-precision integers.

pub mod digits;
pub mod karatsuba;
