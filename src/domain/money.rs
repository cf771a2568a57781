use std::fmt;

/// Transaction amounts are plain magnitudes; direction comes from the transaction type.
pub type Amount = f64;

/// Format an amount as a human-readable currency string with two decimals.
/// Example: 850.0 -> "850.00", -12.5 -> "-12.50"
pub fn format_amount(amount: Amount) -> String {
    let formatted = format!("{:.2}", amount.abs());
    // "-0.00" would otherwise show up for tiny negative residues
    if amount < 0.0 && formatted != "0.00" {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Parse user input into an amount.
/// Accepts anything `f64` parses, as long as the result is finite and not negative.
/// Example: "50" -> 50.0, "12.5" -> 12.5, " 0 " -> 0.0
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !value.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    if value < 0.0 {
        return Err(ParseAmountError::Negative);
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotFinite,
    Negative,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
            ParseAmountError::NotFinite => write!(f, "amount must be a finite number"),
            ParseAmountError::Negative => write!(f, "amount must not be negative"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
