// Codec configuration module
pub mod settings;

pub use settings::{CodecSettings, CurrencySettings, StatementSettings};
