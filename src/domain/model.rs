use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One completed conversion. Constructed once and never mutated; the
/// history is append-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRecord {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub rate: f64,
    pub timestamp: DateTime<Local>,
}

impl ConversionRecord {
    pub fn new(
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        amount: f64,
        converted_amount: f64,
        rate: f64,
    ) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            amount,
            converted_amount,
            rate,
            timestamp: Local::now(),
        }
    }

    /// Same record with an explicit timestamp, for callers that need
    /// controlled ordering.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Single-line summary: two decimals for amounts, four for the rate.
    pub fn format_line(&self) -> String {
        format!(
            "{:.2} {} = {:.2} {} (Rate: {:.4})",
            self.amount, self.from_currency, self.converted_amount, self.to_currency, self.rate
        )
    }

    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%d/%m/%Y %H:%M:%S").to_string()
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} → {}: {}",
            self.format_timestamp(),
            self.from_currency,
            self.to_currency,
            self.format_line()
        )
    }
}

/// Rate table returned by the quote provider. Rates are expressed
/// relative to `base_code`; the freshness fields are opaque provider
/// strings and are only echoed back to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base_code: String,
    pub conversion_rates: HashMap<String, f64>,
    #[serde(default)]
    pub time_last_update_utc: Option<String>,
    #[serde(default)]
    pub time_next_update_utc: Option<String>,
}

impl RateTable {
    pub fn new(base_code: impl Into<String>, conversion_rates: HashMap<String, f64>) -> Self {
        Self {
            base_code: base_code.into(),
            conversion_rates,
            time_last_update_utc: None,
            time_next_update_utc: None,
        }
    }

    pub fn rate(&self, currency_code: &str) -> Option<f64> {
        self.conversion_rates.get(currency_code).copied()
    }
}

/// Aggregates over the session history. `total_amount_converted` sums
/// source amounts across currencies without converting to a common
/// unit; known limitation.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub most_used_currency: String,
    pub total_amount_converted: f64,
}
