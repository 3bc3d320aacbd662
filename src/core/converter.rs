use crate::config::options::ConversionOption;
use crate::core::engine::ConversionEngine;
use crate::core::history::HistoryStore;
use crate::core::{ConversionRecord, RateProvider, RateTable, Result};
use crate::utils::error::CambioError;

/// A successful conversion together with the rate table it came from,
/// so callers can show the provider's freshness metadata.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub record: ConversionRecord,
    pub rates: RateTable,
}

/// Wires provider, engine and history together. One instance per
/// process; it owns the session history outright.
pub struct ConverterService<P: RateProvider> {
    provider: P,
    engine: ConversionEngine,
    history: HistoryStore,
    options: Vec<ConversionOption>,
}

impl<P: RateProvider> ConverterService<P> {
    pub fn new(provider: P, options: Vec<ConversionOption>) -> Self {
        Self {
            provider,
            engine: ConversionEngine::new(),
            history: HistoryStore::new(),
            options,
        }
    }

    pub fn options(&self) -> &[ConversionOption] {
        &self.options
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    /// Converts via a predefined option, 1-based as shown in the menu.
    /// Unknown options fail before any network traffic.
    pub async fn convert_option(&mut self, option: usize, amount: f64) -> Result<ConversionOutcome> {
        let pair = self
            .options
            .get(option.wrapping_sub(1))
            .cloned()
            .ok_or(CambioError::InvalidSelectionError { option })?;

        self.convert(&pair.from, &pair.to, amount).await
    }

    /// Fetches rates for `from_currency` and records the conversion.
    /// Nothing is appended unless the whole attempt succeeds.
    pub async fn convert(
        &mut self,
        from_currency: &str,
        to_currency: &str,
        amount: f64,
    ) -> Result<ConversionOutcome> {
        tracing::debug!("Fetching rates for base {}", from_currency);
        let rates = self.provider.fetch_rates(from_currency).await?;

        let record = self
            .engine
            .convert(&rates, from_currency, to_currency, amount)?;
        self.history.append(record.clone());
        tracing::info!(
            "Converted {:.2} {} to {:.2} {}",
            record.amount,
            record.from_currency,
            record.converted_amount,
            record.to_currency
        );

        Ok(ConversionOutcome { record, rates })
    }
}
