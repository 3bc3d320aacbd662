use crate::core::{ConversionRecord, RateTable, Result};
use crate::utils::error::CambioError;

/// Turns a rate table and a request into a conversion record.
///
/// The table must have been fetched with `from_currency` as its base;
/// the engine does not re-check that. Amounts are taken as given:
/// negative and zero inputs are computed literally.
#[derive(Debug, Default)]
pub struct ConversionEngine;

impl ConversionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Computes `amount * rate` in plain f64. No rounding happens here;
    /// two and four decimal places are display formatting only.
    pub fn convert(
        &self,
        rates: &RateTable,
        from_currency: &str,
        to_currency: &str,
        amount: f64,
    ) -> Result<ConversionRecord> {
        let rate = rates
            .rate(to_currency)
            .ok_or_else(|| CambioError::RateNotFoundError {
                currency: to_currency.to_string(),
            })?;

        Ok(ConversionRecord::new(
            from_currency,
            to_currency,
            amount,
            amount * rate,
            rate,
        ))
    }
}
