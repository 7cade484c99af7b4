//! Input collaborator: extracts the two operands from free-form text.
//!
//! Lines are expected to look like `Number 1: 123,456`; digit-grouping
//! commas are stripped and the keyword match is case-insensitive. Lines
//! carrying no number are reported to the operator and skipped.

use std::io::{self, BufRead};
use std::sync::LazyLock;

use num_bigint::BigInt;
use regex::Regex;
use thiserror::Error;

static NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)number\s*(\d+)\s*[:=]?\s*(\d+)").expect("valid pattern"));

/// A line that carries no recognizable number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no number found")]
    NoMatch,
}

/// Errors reading the operand pair.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid number: {0}")]
    Number(#[from] num_bigint::ParseBigIntError),
    #[error("no sufficient input: expected exactly two numbers, found {found}")]
    InsufficientInput { found: usize },
}

/// Extracts the digit string from one line of input.
///
/// Strips commas first, then matches `Number <index> [:=] <digits>`
/// case-insensitively and returns the digits.
pub fn parse_line(line: &str) -> Result<String, ParseError> {
    let cleaned = line.replace(',', "");
    let captures = NUMBER_LINE.captures(&cleaned).ok_or(ParseError::NoMatch)?;
    Ok(captures[2].to_string())
}

/// Reads the two operands for one multiplication run.
///
/// Every line is scanned; lines without a number are logged with their
/// 1-based line number and skipped. Exactly two valid numbers are required.
pub fn read_operands(reader: impl BufRead) -> Result<(BigInt, BigInt), InputError> {
    let mut numbers = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(digits) => numbers.push(digits),
            Err(ParseError::NoMatch) => {
                log::warn!("no number found in line {}: {:?}", index + 1, line.trim_end());
            }
        }
    }

    if numbers.len() != 2 {
        return Err(InputError::InsufficientInput {
            found: numbers.len(),
        });
    }

    let x: BigInt = numbers[0].parse()?;
    let y: BigInt = numbers[1].parse()?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line_with_colon() {
        assert_eq!(parse_line("Number 1: 1234").unwrap(), "1234");
    }

    #[test]
    fn test_parse_line_strips_commas() {
        assert_eq!(parse_line("Number 1: 1,234,567").unwrap(), "1234567");
    }

    #[test]
    fn test_parse_line_equals_and_case() {
        assert_eq!(parse_line("number 2 = 5678").unwrap(), "5678");
        assert_eq!(parse_line("NUMBER 2=99").unwrap(), "99");
    }

    #[test]
    fn test_parse_line_without_separator() {
        assert_eq!(parse_line("Number 1 42").unwrap(), "42");
    }

    #[test]
    fn test_parse_line_rejects_other_text() {
        assert_eq!(parse_line("hello world").unwrap_err(), ParseError::NoMatch);
        assert_eq!(parse_line("Number one: 12").unwrap_err(), ParseError::NoMatch);
        assert_eq!(parse_line("").unwrap_err(), ParseError::NoMatch);
    }

    #[test]
    fn test_read_operands() {
        let text = "Number 1: 1,234\nsome note\nNumber 2: 5678\n";
        let (x, y) = read_operands(Cursor::new(text)).unwrap();
        assert_eq!(x, BigInt::from(1234));
        assert_eq!(y, BigInt::from(5678));
    }

    #[test]
    fn test_read_operands_too_few() {
        let err = read_operands(Cursor::new("Number 1: 12\n")).unwrap_err();
        assert!(matches!(err, InputError::InsufficientInput { found: 1 }));
    }

    #[test]
    fn test_read_operands_too_many() {
        let text = "Number 1: 1\nNumber 2: 2\nNumber 3: 3\n";
        let err = read_operands(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, InputError::InsufficientInput { found: 3 }));
    }
}
