use async_trait::async_trait;
use fractic_server_error::ServerError;

/// Collaborator returning the latest spot rate for one currency pair, i.e.
/// how many units of `quote` one unit of `base` buys. Treated as a black box
/// that yields one number or fails; caching and retry policy live in
/// [`crate::logic::CurrencyConverter`], not here.
#[async_trait]
pub trait FxRateDatasource: Send + Sync {
    async fn latest_rate(&self, base: &str, quote: &str) -> Result<f64, ServerError>;
}

/// Fixed-rate source for tests and offline rendering.
#[derive(Debug)]
pub struct StaticFxRate(pub f64);

#[async_trait]
impl FxRateDatasource for StaticFxRate {
    async fn latest_rate(&self, _base: &str, _quote: &str) -> Result<f64, ServerError> {
        Ok(self.0)
    }
}
