use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// Amount cannot be rendered: NaN, infinite, or beyond exact-cent range.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Failed to parse currency '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {source}")]
    ConfigFormat {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CodecError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        CodecError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, CodecError::Parse { .. })
    }

    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, CodecError::InvalidAmount(_))
    }
}
