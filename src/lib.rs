pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::ExchangeRateApiClient;
pub use config::{options::ConversionOption, CliConfig};
pub use core::{converter::ConverterService, engine::ConversionEngine, history::HistoryStore};
pub use domain::model::{ConversionRecord, RateTable, Statistics};
pub use domain::ports::{ProviderConfig, RateProvider};
pub use utils::error::{CambioError, Result};
