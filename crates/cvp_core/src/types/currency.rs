//! Currency types for CVP reporting.
//!
//! The analysis itself is currency-agnostic; the currency only selects the
//! symbol used when values are rendered or exported.
//!
//! # Examples
//!
//! ```
//! use cvp_core::types::currency::Currency;
//!
//! let brl = Currency::BRL;
//! assert_eq!(brl.code(), "BRL");
//! assert_eq!(brl.symbol(), "R$");
//!
//! let gbp: Currency = "£".parse().unwrap();
//! assert_eq!(gbp, Currency::GBP);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// Reporting currencies offered by the analyser.
///
/// # Variants
/// - `BRL`: Brazilian Real, symbol `R$` (default)
/// - `USD`: United States Dollar, symbol `US$`
/// - `EUR`: Euro, symbol `€`
/// - `GBP`: British Pound Sterling, symbol `£`
///
/// # Examples
///
/// ```
/// use cvp_core::types::currency::Currency;
///
/// assert_eq!(Currency::default(), Currency::BRL);
/// assert_eq!(Currency::USD.symbol(), "US$");
///
/// // Parse from ISO code (case-insensitive) or from symbol
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// let usd: Currency = "US$".parse().unwrap();
/// assert_eq!(usd, Currency::USD);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Brazilian Real
    ///
    /// ISO 4217 code: BRL
    /// Symbol: R$
    #[default]
    BRL,

    /// United States Dollar
    ///
    /// ISO 4217 code: USD
    /// Symbol: US$
    USD,

    /// Euro
    ///
    /// ISO 4217 code: EUR
    /// Symbol: €
    EUR,

    /// British Pound Sterling
    ///
    /// ISO 4217 code: GBP
    /// Symbol: £
    GBP,
}

impl Currency {
    /// All supported currencies, in menu order.
    pub const ALL: [Currency; 4] = [Currency::BRL, Currency::USD, Currency::EUR, Currency::GBP];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvp_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::BRL.code(), "BRL");
    /// assert_eq!(Currency::GBP.code(), "GBP");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Returns the display symbol used as a prefix on monetary values.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvp_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::BRL.symbol(), "R$");
    /// assert_eq!(Currency::EUR.symbol(), "€");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "US$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 code (case-insensitive) or a display symbol.
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let trimmed = s.trim();
        if let Some(currency) = Currency::ALL.iter().find(|c| c.symbol() == trimmed) {
            return Ok(*currency);
        }
        match trimmed.to_uppercase().as_str() {
            "BRL" => Ok(Currency::BRL),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
