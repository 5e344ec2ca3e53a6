// Codec library root
// Brazilian-real formatting and parsing, plus the statement import built on it.

pub mod config;
pub mod currency;
pub mod data;
pub mod error;

pub use currency::{
    format_currency, format_currency_with_symbol, parse_currency_string_to_number, CurrencyCodec,
    CurrencyFormat,
};
pub use error::CodecError;
