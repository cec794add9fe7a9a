use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::datasources::{Clock, FxRateDatasource};

/// Rate freshness window; within it the cached value is served as-is.
const FRESH_TTL_MINUTES: i64 = 5;
/// Eviction horizon; a stale-but-unevicted value still backs conversion when
/// a refresh fails.
const EVICT_TTL_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: f64,
    fetched_at: DateTime<Utc>,
}

/// Converts currency-tagged amounts into the single reporting currency.
///
/// Only USD -> reporting is supported; amounts already tagged with the
/// reporting currency (or untagged) pass through unchanged. When the rate is
/// unavailable the conversion degrades to a no-op rather than blocking, so
/// totals may transiently understate or overstate until the rate resolves.
///
/// The cache is an explicit per-converter resource keyed by the one supported
/// pair, never a module-global; concurrent readers share the same cached
/// value through the mutex.
pub struct CurrencyConverter {
    reporting: String,
    datasource: Arc<dyn FxRateDatasource>,
    clock: Arc<dyn Clock>,
    cache: Mutex<Option<CachedRate>>,
}

impl CurrencyConverter {
    pub const DEFAULT_REPORTING_CURRENCY: &'static str = "COP";
    const BASE_CURRENCY: &'static str = "USD";

    pub fn new(
        reporting: impl Into<String>,
        datasource: Arc<dyn FxRateDatasource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reporting: reporting.into().trim().to_uppercase(),
            datasource,
            clock,
            cache: Mutex::new(None),
        }
    }

    pub fn reporting_currency(&self) -> &str {
        &self.reporting
    }

    /// Converts `amount` from `currency` into the reporting currency.
    /// Sign-agnostic: callers take `abs()` first when only magnitude matters.
    pub async fn to_reporting(&self, amount: f64, currency: Option<&str>) -> f64 {
        let code = currency.unwrap_or(&self.reporting).trim().to_uppercase();
        if code.is_empty() || code == self.reporting {
            return amount;
        }
        if code != Self::BASE_CURRENCY {
            // Only USD conversion is supported; anything else passes through.
            debug!(currency = %code, "unsupported currency code, returning amount unconverted");
            return amount;
        }
        match self.usd_rate().await {
            Some(rate) => amount * rate,
            None => amount,
        }
    }

    /// Cached USD -> reporting rate, refreshed per the TTL policy with at
    /// most one retry per refresh attempt. `None` while loading has failed
    /// and nothing usable is cached.
    async fn usd_rate(&self) -> Option<f64> {
        let now = self.clock.now();
        let mut cache = self.cache.lock().await;

        if let Some(cached) = *cache {
            if now - cached.fetched_at < Duration::minutes(FRESH_TTL_MINUTES) {
                return Some(cached.rate);
            }
        }

        match self.fetch_with_retry().await {
            Some(rate) => {
                *cache = Some(CachedRate {
                    rate,
                    fetched_at: now,
                });
                Some(rate)
            }
            None => {
                // Serve the stale value until the eviction horizon passes.
                match *cache {
                    Some(cached) if now - cached.fetched_at < Duration::minutes(EVICT_TTL_MINUTES) => {
                        warn!("FX refresh failed, serving stale rate");
                        Some(cached.rate)
                    }
                    _ => {
                        *cache = None;
                        warn!(
                            base = Self::BASE_CURRENCY,
                            quote = %self.reporting,
                            "FX rate unavailable, conversions degrade to no-op"
                        );
                        None
                    }
                }
            }
        }
    }

    async fn fetch_with_retry(&self) -> Option<f64> {
        for attempt in 0..2 {
            match self
                .datasource
                .latest_rate(Self::BASE_CURRENCY, &self.reporting)
                .await
            {
                Ok(rate) if rate.is_finite() && rate > 0.0 => return Some(rate),
                Ok(rate) => {
                    warn!(rate, attempt, "FX datasource returned unusable rate");
                }
                Err(e) => {
                    debug!(attempt, error = %e, "FX fetch attempt failed");
                }
            }
        }
        None
    }
}
