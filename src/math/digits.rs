use num_bigint::BigUint;

/// Number of decimal digits in `value`. Zero has one digit.
pub fn decimal_digits(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

/// 10^exponent.
pub fn pow10(exponent: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u8), exponent)
}

/// Splits `value` at `split` decimal digits from the right.
///
/// Returns (value div 10^split, value mod 10^split); the high half carries
/// the extra digit when the digit count is odd.
pub fn split_at(value: &BigUint, split: usize) -> (BigUint, BigUint) {
    let divisor = pow10(split);
    (value / &divisor, value % &divisor)
}
