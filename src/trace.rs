//! Trace recording for the recursive multiplier.
//!
//! Every non-base-case recursion step is captured as one immutable event
//! carrying the operands, the split point, and the three sub-products.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::math::digits::pow10;

/// One recorded step of the recursion.
///
/// An event is constructed only once its three sub-products are known and is
/// never mutated afterwards. Operands are the nonnegative magnitudes the
/// recursion processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// First operand at this recursion level
    pub x: BigUint,
    /// Second operand at this recursion level
    pub y: BigUint,
    /// Decimal split point, floor(n/2) for n = max digit count
    pub split: usize,
    /// High half of x
    pub a: BigUint,
    /// Low half of x
    pub b: BigUint,
    /// High half of y
    pub c: BigUint,
    /// Low half of y
    pub d: BigUint,
    /// Sub-product a * c
    pub ac: BigUint,
    /// Sub-product b * d
    pub bd: BigUint,
    /// Sub-product (a + b) * (c + d)
    pub cross: BigUint,
}

impl TraceEvent {
    /// Middle coefficient of the recombination: cross - ac - bd.
    pub fn middle_term(&self) -> BigUint {
        &self.cross - &self.ac - &self.bd
    }

    /// Recombines the sub-products: ac * 10^(2s) + middle * 10^s + bd.
    ///
    /// Equals x * y for every event the multiplier records.
    pub fn recombined(&self) -> BigUint {
        &self.ac * pow10(2 * self.split) + self.middle_term() * pow10(self.split) + &self.bd
    }
}

/// Append-only consumer of trace events.
///
/// A sink is owned exclusively by one top-level multiplication for its
/// duration; events arrive in the order they complete, children before
/// parents.
pub trait TraceSink {
    /// Records one fully-populated event.
    fn record(&mut self, event: TraceEvent);
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
