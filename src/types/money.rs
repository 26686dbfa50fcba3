//! Decimal price and budget helpers.
//!
//! ## Overview
//!
//! Competitor prices and participant budgets are expressed in millions
//! (`"18.5M"` in the league's tables). They are stored as
//! [`rust_decimal::Decimal`] so that sorting and exporting never suffer
//! binary floating-point drift: `0.1 + 0.2` is exactly `0.3`.
//!
//! ## Examples
//!
//! ```
//! use fantasy_ranking::types::money::{parse_amount, format_amount, format_millions};
//!
//! let price = parse_amount("18.50M").unwrap();
//! assert_eq!(format_amount(price), "18.5");
//! assert_eq!(format_millions(price), "18.5M");
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

/// Suffix used when rendering amounts for display
pub const MILLIONS_SUFFIX: char = 'M';

// ============================================================================
// Conversion Functions
// ============================================================================

/// Parse an amount such as `"18.5"`, `" 18.5M "` or `"100m"`.
///
/// Negative amounts are accepted as-is; validating them is the caller's job.
///
/// # Returns
///
/// * `Some(Decimal)` - The parsed amount
/// * `None` - If the text is not a decimal number
///
/// # Example
///
/// ```
/// use fantasy_ranking::types::money::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("100M"), Some(Decimal::from(100)));
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_suffix(MILLIONS_SUFFIX)
        .or_else(|| trimmed.strip_suffix('m'))
        .unwrap_or(trimmed);
    Decimal::from_str(digits.trim_end()).ok()
}

/// Render an amount without trailing zeros (`18.50` -> `"18.5"`).
pub fn format_amount(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Render an amount with the millions suffix (`18.5` -> `"18.5M"`).
pub fn format_millions(value: Decimal) -> String {
    format!("{}{}", format_amount(value), MILLIONS_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("18.5"), Some(dec("18.5")));
        assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
        assert_eq!(parse_amount("  7.25  "), Some(dec("7.25")));
    }

    #[test]
    fn test_parse_amount_suffix() {
        assert_eq!(parse_amount("18.5M"), Some(dec("18.5")));
        assert_eq!(parse_amount("100m"), Some(dec("100")));
        assert_eq!(parse_amount("4.0 M"), Some(dec("4.0")));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("M"), None);
        assert_eq!(parse_amount("twelve"), None);
    }

    #[test]
    fn test_parse_amount_negative_is_accepted() {
        assert_eq!(parse_amount("-3.5"), Some(dec("-3.5")));
    }

    #[test]
    fn test_format_amount_trims_zeros() {
        assert_eq!(format_amount(dec("18.50")), "18.5");
        assert_eq!(format_amount(dec("100.000")), "100");
        assert_eq!(format_amount(dec("0.05")), "0.05");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(dec("30.0")), "30M");
        assert_eq!(format_millions(dec("7.25")), "7.25M");
    }

    #[test]
    fn test_exact_addition() {
        // The whole point of Decimal over f32 budgets
        assert_eq!(dec("0.1") + dec("0.2"), dec("0.3"));
    }
}
