// Codec settings, loaded from the embedded default.json or a user-supplied file
use crate::currency::CurrencyFormat;
use crate::error::CodecError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CodecSettings {
    pub version: String,
    pub currency: CurrencySettings,
    #[serde(default)]
    pub statement: StatementSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CurrencySettings {
    pub symbol: String,
    pub decimal_separator: String, // Should be char, but JSON string is easier
    pub thousand_separator: String, // Should be char
    #[serde(default = "default_space_after_symbol")]
    pub space_after_symbol: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatementSettings {
    pub csv_delimiter: String,
    pub date_format: String,
}

fn default_space_after_symbol() -> bool {
    true
}

impl Default for CodecSettings {
    fn default() -> Self {
        CodecSettings {
            version: "1.0.0".to_string(),
            currency: CurrencySettings::default(),
            statement: StatementSettings::default(),
        }
    }
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: "R$".to_string(),
            decimal_separator: ",".to_string(),
            thousand_separator: ".".to_string(),
            space_after_symbol: true,
        }
    }
}

impl Default for StatementSettings {
    fn default() -> Self {
        StatementSettings {
            csv_delimiter: ";".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl CodecSettings {
    /// Settings bundled with the binary (pt-BR).
    pub fn load_default() -> Result<Self, CodecError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        tracing::debug!("Loading codec settings from {}", path.display());
        let config_str = std::fs::read_to_string(path)?;
        Self::from_json_str(&config_str)
    }

    pub fn from_json_str(config_str: &str) -> Result<Self, CodecError> {
        let settings: CodecSettings = serde_json::from_str(config_str)?;
        // Surface separator problems at load time rather than on first use.
        settings.currency.to_format()?;
        settings.statement.delimiter_byte()?;
        Ok(settings)
    }
}

impl CurrencySettings {
    pub fn to_format(&self) -> Result<CurrencyFormat, CodecError> {
        let decimal = single_char("decimal_separator", &self.decimal_separator)?;
        let group = single_char("thousand_separator", &self.thousand_separator)?;
        CurrencyFormat::new(&self.symbol, decimal, group, self.space_after_symbol)
    }
}

impl StatementSettings {
    pub fn delimiter_byte(&self) -> Result<u8, CodecError> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(CodecError::Config(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ))),
        }
    }
}

fn single_char(field: &str, value: &str) -> Result<char, CodecError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CodecError::Config(format!(
            "{} must be exactly one character, got '{}'",
            field, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_default_matches_default_impl() {
        assert_eq!(CodecSettings::load_default().unwrap(), CodecSettings::default());
    }

    #[test]
    fn test_default_currency_is_brl() {
        let format = CodecSettings::default().currency.to_format().unwrap();
        assert_eq!(format, CurrencyFormat::brl());
    }

    #[test]
    fn test_statement_section_is_optional() {
        let settings = CodecSettings::from_json_str(
            r#"{"version":"2","currency":{"symbol":"US$","decimal_separator":".","thousand_separator":","}}"#,
        )
        .unwrap();
        assert_eq!(settings.statement, StatementSettings::default());
        assert!(settings.currency.space_after_symbol);
    }

    #[test]
    fn test_rejects_multi_char_separator() {
        let err = CodecSettings::from_json_str(
            r#"{"version":"1","currency":{"symbol":"R$","decimal_separator":",,","thousand_separator":"."}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("decimal_separator must be exactly one character"));
    }

    #[test]
    fn test_rejects_equal_separators() {
        let err = CodecSettings::from_json_str(
            r#"{"version":"1","currency":{"symbol":"R$","decimal_separator":",","thousand_separator":","}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_delimiter() {
        let err = CodecSettings::from_json_str(
            r#"{"version":"1","currency":{"symbol":"R$","decimal_separator":",","thousand_separator":"."},
               "statement":{"csv_delimiter":"","date_format":"%d/%m/%Y"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("csv_delimiter"));
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        let err = CodecSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CodecError::ConfigFormat { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":"3","currency":{{"symbol":"US$","decimal_separator":".","thousand_separator":",","space_after_symbol":false}}}}"#
        )
        .unwrap();
        let settings = CodecSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.version, "3");
        let format = settings.currency.to_format().unwrap();
        assert_eq!(format.symbol(), "US$");
        assert_eq!(format.decimal_separator(), '.');
        assert_eq!(format.group_separator(), ',');
        assert!(!format.space_after_symbol());
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = CodecSettings::from_file("/nonexistent/codec.json").unwrap_err();
        assert!(matches!(err, CodecError::Io { .. }));
    }
}
