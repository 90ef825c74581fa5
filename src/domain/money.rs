use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point drift in the balance.
/// 1 unit = 100 cents, so $50.00 = 5000 cents.
pub type Cents = i64;

/// Largest magnitude accepted for a single amount or for the balance (10 trillion units).
pub const MAX_AMOUNT: Cents = 1_000_000_000_000_000;

/// Format cents as a human-readable amount with exactly two fractional digits.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format cents prefixed with the currency symbol.
/// Example: 15050 -> "$150.50"
pub fn format_currency(cents: Cents) -> String {
    format!("${}", format_cents(cents))
}

/// A decimal amount exactly as read from input, before quantization to cents.
///
/// Sign and funds comparisons use the unrounded value: `-0.001` is still
/// negative and `150.504` is still more than `150.50`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    pub value: f64,
}

impl Amount {
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }

    /// True when the amount is strictly more than `cents`.
    pub fn exceeds(&self, cents: Cents) -> bool {
        self.value > cents as f64 / 100.0
    }

    /// Quantize to cents, rounding half away from zero.
    pub fn to_cents(&self) -> Result<Cents, AmountError> {
        let scaled = (self.value * 100.0).round();
        if scaled.abs() > MAX_AMOUNT as f64 {
            return Err(AmountError::OutOfRange);
        }
        Ok(scaled as Cents)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("invalid amount format")]
    InvalidFormat,

    #[error("amount exceeds {max} cents", max = MAX_AMOUNT)]
    OutOfRange,
}

/// Parse a full line as a decimal amount.
///
/// The whole string must be a finite number (`"12.5"`, `"-5"`, `"1e3"`);
/// surrounding whitespace or trailing characters are rejected. No range is
/// enforced here, see [`Amount::to_cents`].
pub fn parse_amount(input: &str) -> Result<Amount, AmountError> {
    let value: f64 = input.parse().map_err(|_| AmountError::InvalidFormat)?;
    if !value.is_finite() {
        return Err(AmountError::InvalidFormat);
    }
    Ok(Amount { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(input: &str) -> Cents {
        parse_amount(input).unwrap().to_cents().unwrap()
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
        assert_eq!(format_cents(-1), "-0.01");
        assert_eq!(format_cents(MAX_AMOUNT), "10000000000000.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(15050), "$150.50");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(cents("150.5"), 15050);
        assert_eq!(cents("50"), 5000);
        assert_eq!(cents("0.01"), 1);
        assert_eq!(cents(".50"), 50);
        assert_eq!(cents("-5"), -500);
        assert_eq!(cents("1e3"), 100000);
    }

    #[test]
    fn test_to_cents_rounds_half_away_from_zero() {
        assert_eq!(cents("0.125"), 13);
        assert_eq!(cents("-0.125"), -13);
        assert_eq!(cents("2.994"), 299);
        assert_eq!(cents("2.996"), 300);
    }

    #[test]
    fn test_sign_of_tiny_values() {
        let amount = parse_amount("-0.001").unwrap();
        assert_eq!(amount.to_cents(), Ok(0));
        assert!(amount.is_negative());
        assert!(parse_amount("0.004").unwrap().is_positive());
    }

    #[test]
    fn test_exceeds_uses_unrounded_value() {
        assert!(parse_amount("150.504").unwrap().exceeds(15050));
        assert!(!parse_amount("150.5").unwrap().exceeds(15050));
        assert!(!parse_amount("0.07").unwrap().exceeds(7));
        assert!(!parse_amount("0.1").unwrap().exceeds(10));
    }

    #[test]
    fn test_parse_amount_invalid() {
        for input in ["", "abc", "12abc", "12.34.56", " 5", "5 ", "inf", "NaN", "$5"] {
            assert_eq!(
                parse_amount(input),
                Err(AmountError::InvalidFormat),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_amount_accepts_huge_values() {
        assert!(parse_amount("1e300").is_ok());
        assert!(parse_amount("-1e300").is_ok());
    }

    #[test]
    fn test_to_cents_out_of_range() {
        assert_eq!(parse_amount("1e14").unwrap().to_cents(), Err(AmountError::OutOfRange));
        assert_eq!(parse_amount("-1e300").unwrap().to_cents(), Err(AmountError::OutOfRange));
        assert_eq!(parse_amount("1e13").unwrap().to_cents(), Ok(MAX_AMOUNT));
    }
}
