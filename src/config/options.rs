use crate::utils::error::{CambioError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One selectable currency pair in the menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversionOption {
    pub from: String,
    pub to: String,
    pub description: String,
}

impl ConversionOption {
    pub fn new(from: &str, to: &str, description: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OptionsFile {
    options: Vec<ConversionOption>,
}

/// The pairs offered when no options file is given.
pub fn default_options() -> Vec<ConversionOption> {
    vec![
        ConversionOption::new("USD", "BRL", "US Dollar → Brazilian Real"),
        ConversionOption::new("EUR", "BRL", "Euro → Brazilian Real"),
        ConversionOption::new("BRL", "USD", "Brazilian Real → US Dollar"),
        ConversionOption::new("BRL", "EUR", "Brazilian Real → Euro"),
        ConversionOption::new("USD", "EUR", "US Dollar → Euro"),
        ConversionOption::new("EUR", "USD", "Euro → US Dollar"),
        ConversionOption::new("GBP", "BRL", "British Pound → Brazilian Real"),
        ConversionOption::new("JPY", "BRL", "Japanese Yen → Brazilian Real"),
    ]
}

/// Loads the options table from a TOML file, or the defaults when no
/// path is given. An explicit file must define at least one option.
pub fn load_options(path: Option<&Path>) -> Result<Vec<ConversionOption>> {
    let Some(path) = path else {
        return Ok(default_options());
    };

    let raw = fs::read_to_string(path)?;
    let parsed: OptionsFile = toml::from_str(&raw)?;

    if parsed.options.is_empty() {
        return Err(CambioError::InvalidConfigValueError {
            field: "options".to_string(),
            value: path.display().to_string(),
            reason: "Options file defines no conversion options".to_string(),
        });
    }

    Ok(parsed.options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_options_table() {
        let options = default_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0].from, "USD");
        assert_eq!(options[0].to, "BRL");
        assert_eq!(options[7].from, "JPY");
    }

    #[test]
    fn test_load_defaults_without_path() {
        assert_eq!(load_options(None).unwrap(), default_options());
    }

    #[test]
    fn test_load_options_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[options]]
from = "USD"
to = "JPY"
description = "US Dollar → Japanese Yen"

[[options]]
from = "CHF"
to = "EUR"
description = "Swiss Franc → Euro"
"#
        )
        .unwrap();

        let options = load_options(Some(file.path())).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].to, "JPY");
        assert_eq!(options[1].from, "CHF");
    }

    #[test]
    fn test_empty_options_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "options = []").unwrap();

        let err = load_options(Some(file.path())).unwrap_err();
        assert!(matches!(err, CambioError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [[").unwrap();

        let err = load_options(Some(file.path())).unwrap_err();
        assert!(matches!(err, CambioError::OptionsParseError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_options(Some(Path::new("/nonexistent/options.toml"))).unwrap_err();
        assert!(matches!(err, CambioError::IoError(_)));
    }
}
