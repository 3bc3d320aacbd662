use thiserror::Error;

#[derive(Error, Debug)]
pub enum CambioError {
    #[error("Could not reach the exchange rate service: {0}")]
    ProviderUnavailableError(#[source] reqwest::Error),

    #[error("Exchange rate service error: {message}")]
    ProviderResponseError { message: String },

    #[error("No exchange rate available for {currency}")]
    RateNotFoundError { currency: String },

    #[error("Unknown conversion option: {option}")]
    InvalidSelectionError { option: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Options file error: {0}")]
    OptionsParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CambioError>;
