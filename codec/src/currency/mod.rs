// Currency codec: locale-formatted monetary strings to and from f64 amounts
mod format;
mod parse;

use crate::config::CodecSettings;
use crate::error::CodecError;
use shared::models::MonetaryAmount;

pub use format::MAX_FORMATTABLE_AMOUNT;

/// Rendering conventions for a currency. Separators are limited to `.` and `,`
/// so that every rendered string is accepted by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
    decimal_separator: char,
    group_separator: char,
    space_after_symbol: bool,
}

impl CurrencyFormat {
    /// Brazilian real: `R$ 1.234,56`.
    pub fn brl() -> Self {
        CurrencyFormat {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            group_separator: '.',
            space_after_symbol: true,
        }
    }

    pub fn new(
        symbol: &str,
        decimal_separator: char,
        group_separator: char,
        space_after_symbol: bool,
    ) -> Result<Self, CodecError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(CodecError::Config("currency symbol must not be empty".to_string()));
        }
        if symbol
            .chars()
            .any(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | '(' | ')'))
        {
            return Err(CodecError::Config(format!(
                "currency symbol '{}' must not contain digits, separators or sign characters",
                symbol
            )));
        }
        for sep in [decimal_separator, group_separator] {
            if sep != '.' && sep != ',' {
                return Err(CodecError::Config(format!(
                    "separator '{}' is not supported, use '.' or ','",
                    sep
                )));
            }
        }
        if decimal_separator == group_separator {
            return Err(CodecError::Config(format!(
                "decimal and thousand separators must differ, both are '{}'",
                decimal_separator
            )));
        }
        Ok(CurrencyFormat {
            symbol: symbol.to_string(),
            decimal_separator,
            group_separator,
            space_after_symbol,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    pub fn space_after_symbol(&self) -> bool {
        self.space_after_symbol
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

/// Stateless converter between amounts and their textual form.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCodec {
    format: CurrencyFormat,
}

impl CurrencyCodec {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    pub fn brl() -> Self {
        Self::new(CurrencyFormat::brl())
    }

    pub fn from_settings(settings: &CodecSettings) -> Result<Self, CodecError> {
        Ok(Self::new(settings.currency.to_format()?))
    }

    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.format
    }

    /// `1234.56` -> `"R$ 1.234,56"`, `-1234.56` -> `"-R$ 1.234,56"`.
    ///
    /// Rounds half away from zero on the shortest decimal form of `amount`, so
    /// `1234.565` renders as `"R$ 1.234,57"`. Amounts that round to zero are
    /// rendered unsigned. Fails with [`CodecError::InvalidAmount`] for NaN,
    /// infinities and magnitudes above [`MAX_FORMATTABLE_AMOUNT`].
    pub fn format_with_symbol(&self, amount: MonetaryAmount) -> Result<String, CodecError> {
        let cents = format::to_cents(amount)?;
        Ok(format::render(cents, &self.format, true))
    }

    /// Same as [`format_with_symbol`](Self::format_with_symbol) without the symbol: `"1.234,56"`.
    pub fn format_without_symbol(&self, amount: MonetaryAmount) -> Result<String, CodecError> {
        let cents = format::to_cents(amount)?;
        Ok(format::render(cents, &self.format, false))
    }

    /// Parses user-typed or rendered text back into an amount.
    ///
    /// Symbols and whitespace are ignored. When both `.` and `,` appear the
    /// rightmost one is the decimal separator. When only one of them appears it
    /// is a decimal separator only if it occurs once and is followed by exactly
    /// two digits; otherwise it groups thousands and every group after the
    /// first must have three digits. A leading `-` or surrounding parentheses
    /// make the result negative.
    pub fn parse(&self, text: &str) -> Result<MonetaryAmount, CodecError> {
        parse::parse_amount(text)
    }
}

pub fn format_currency_with_symbol(amount: MonetaryAmount) -> Result<String, CodecError> {
    CurrencyCodec::brl().format_with_symbol(amount)
}

pub fn format_currency(amount: MonetaryAmount) -> Result<String, CodecError> {
    CurrencyCodec::brl().format_without_symbol(amount)
}

pub fn parse_currency_string_to_number(text: &str) -> Result<MonetaryAmount, CodecError> {
    parse::parse_amount(text)
}
