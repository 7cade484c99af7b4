//! Karatsuba divide-and-conquer multiplication.
//!
//! Splitting each n-digit operand at s = floor(n/2) decimal digits replaces
//! one multiplication by four half-size ones; rewriting the middle term as
//! (a+b)(c+d) - ac - bd brings that down to three, for O(n^1.585) digit work
//! instead of the schoolbook O(n^2).

use std::cmp;

use num_bigint::{BigInt, BigUint, Sign};
use serde::{Deserialize, Serialize};

use crate::math::digits::{decimal_digits, pow10, split_at};
use crate::trace::{TraceEvent, TraceSink};

/// Product of one top-level multiplication together with the events
/// recorded during its recursion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicationResult {
    /// First operand as supplied by the caller
    pub x: BigInt,
    /// Second operand as supplied by the caller
    pub y: BigInt,
    /// Exact product x * y
    pub product: BigInt,
    /// Recorded recursion steps, children before parents
    pub events: Vec<TraceEvent>,
}

/// Multiplies two signed integers, recording the recursion.
pub fn multiply(x: &BigInt, y: &BigInt) -> MultiplicationResult {
    let mut events = Vec::new();
    let product = multiply_with_sink(x, y, &mut events);
    MultiplicationResult {
        x: x.clone(),
        y: y.clone(),
        product,
        events,
    }
}

/// Multiplies two signed integers, recording events into `sink`.
///
/// Signs are separated up front: the recursion runs on the magnitudes and
/// the product sign is reapplied once at the end, so the decimal split
/// always truncates toward zero.
pub fn multiply_with_sink(x: &BigInt, y: &BigInt, sink: &mut dyn TraceSink) -> BigInt {
    let magnitude = multiply_magnitudes(x.magnitude(), y.magnitude(), sink);
    let sign = if x.sign() == Sign::NoSign || y.sign() == Sign::NoSign {
        Sign::NoSign
    } else if x.sign() == y.sign() {
        Sign::Plus
    } else {
        Sign::Minus
    };
    BigInt::from_biguint(sign, magnitude)
}

fn multiply_magnitudes(x: &BigUint, y: &BigUint, sink: &mut dyn TraceSink) -> BigUint {
    let ten = BigUint::from(10u8);
    // Single-digit operand: multiply directly, nothing to record.
    if *x < ten || *y < ten {
        return x * y;
    }

    let n = cmp::max(decimal_digits(x), decimal_digits(y));
    let split = n / 2;
    let (a, b) = split_at(x, split);
    let (c, d) = split_at(y, split);

    let ac = multiply_magnitudes(&a, &c, sink);
    let bd = multiply_magnitudes(&b, &d, sink);
    let cross = multiply_magnitudes(&(&a + &b), &(&c + &d), sink);

    // cross = ac + ad + bc + bd, so subtracting ac and bd leaves the
    // middle coefficient ad + bc.
    let middle = &cross - &ac - &bd;
    let product = &ac * pow10(2 * split) + middle * pow10(split) + &bd;

    sink.record(TraceEvent {
        x: x.clone(),
        y: y.clone(),
        split,
        a,
        b,
        c,
        d,
        ac,
        bd,
        cross,
    });

    product
}
