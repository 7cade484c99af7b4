//! Output collaborator: renders a recorded multiplication as readable text.
//!
//! Each trace event becomes one bordered block listing the operands, the
//! partition, and the intermediate products, followed by a single summary
//! line for the whole run.

use std::io::{self, Write};

use num_bigint::BigUint;

use crate::math::digits::decimal_digits;
use crate::math::karatsuba::MultiplicationResult;
use crate::trace::TraceEvent;

const BORDER: &str = "--------------------------------------------------";

/// Writes every recorded event as a bordered block, then the summary line.
pub fn write_trace(out: &mut impl Write, result: &MultiplicationResult) -> io::Result<()> {
    for event in &result.events {
        write_event(out, event)?;
    }
    writeln!(
        out,
        "Result:> {} x {} = {}",
        result.x, result.y, result.product
    )
}

fn write_event(out: &mut impl Write, event: &TraceEvent) -> io::Result<()> {
    writeln!(out, "{BORDER}")?;
    writeln!(out, "1st number, x: {}", event.x)?;
    writeln!(out, "2nd number, y: {}", event.y)?;
    writeln!(out, "Partition at {} digits:", event.split)?;
    writeln!(out, "x: {} a: {} b: {}", event.x, event.a, event.b)?;
    writeln!(out, "y: {} c: {} d: {}", event.y, event.c, event.d)?;
    write_product_line(out, &event.a, &event.c, &event.ac)?;
    write_product_line(out, &event.b, &event.d, &event.bd)?;
    let left = &event.a + &event.b;
    let right = &event.c + &event.d;
    write_product_line(out, &left, &right, &event.cross)?;
    Ok(())
}

// A sub-product line appears only when the pair was not itself a
// single-digit base case.
fn write_product_line(
    out: &mut impl Write,
    left: &BigUint,
    right: &BigUint,
    product: &BigUint,
) -> io::Result<()> {
    if decimal_digits(left) >= 2 || decimal_digits(right) >= 2 {
        writeln!(out, "Intermediate Product: {left} x {right} = {product}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::karatsuba::multiply;
    use num_bigint::BigInt;

    fn rendered(x: i64, y: i64) -> String {
        let result = multiply(&BigInt::from(x), &BigInt::from(y));
        let mut out = Vec::new();
        write_trace(&mut out, &result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_line() {
        let text = rendered(1234, 5678);
        assert!(text.ends_with("Result:> 1234 x 5678 = 7006652\n"));
    }

    #[test]
    fn test_multi_digit_sub_products_are_listed() {
        let text = rendered(1234, 5678);
        assert!(text.contains("Intermediate Product: 12 x 56 = 672"));
        assert!(text.contains("Intermediate Product: 34 x 78 = 2652"));
        assert!(text.contains("Intermediate Product: 46 x 134 = 6164"));
    }

    #[test]
    fn test_single_digit_sub_products_stay_silent() {
        // 12 x 34 splits into single digits only, so its block lists the
        // partition but no intermediate products.
        let text = rendered(12, 34);
        assert!(text.contains("x: 12 a: 1 b: 2"));
        assert!(text.contains("y: 34 c: 3 d: 4"));
        assert!(!text.contains("Intermediate Product"));
        assert!(text.ends_with("Result:> 12 x 34 = 408\n"));
    }

    #[test]
    fn test_single_digit_run_renders_summary_only() {
        let text = rendered(5, 7);
        assert_eq!(text, "Result:> 5 x 7 = 35\n");
    }

    #[test]
    fn test_negative_operands_appear_signed_in_summary() {
        let text = rendered(-12, 34);
        assert!(text.ends_with("Result:> -12 x 34 = -408\n"));
    }
}
