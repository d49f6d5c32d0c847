//! Pricing service
//!
//! Quote computation is pure arithmetic on the domain types; the only
//! asynchronous concern is picking a default currency from the client's
//! region. That lookup is bounded by a timeout and every failure path
//! degrades to INR without surfacing an error.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::entities::{Currency, PricingInput, Quote};
use crate::domain::ports::{AnalyticsClient, AnalyticsEvent, GeoClient};

/// Geolocation budget; the page must not wait on a slow provider
const GEO_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Countries whose default display currency is EUR
const EUR_COUNTRIES: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "HR", "IE", "IT", "LT", "LU", "LV",
    "MT", "NL", "PT", "SI", "SK",
];

fn currency_for_country(code: &str) -> Currency {
    let code = code.to_uppercase();
    if code == "US" {
        Currency::Usd
    } else if EUR_COUNTRIES.contains(&code.as_str()) {
        Currency::Eur
    } else {
        Currency::Inr
    }
}

/// Service for pricing estimates and currency defaulting
pub struct PricingService<GC, AC>
where
    GC: GeoClient,
    AC: AnalyticsClient,
{
    geo: Arc<GC>,
    analytics: Arc<AC>,
}

impl<GC, AC> PricingService<GC, AC>
where
    GC: GeoClient,
    AC: AnalyticsClient,
{
    pub fn new(geo: Arc<GC>, analytics: Arc<AC>) -> Self {
        Self { geo, analytics }
    }

    /// Compute a quote and emit the estimate event
    pub async fn estimate(&self, input: &PricingInput, currency: Currency) -> Quote {
        let quote = input.quote(currency);

        let event = AnalyticsEvent::EstimateRequested {
            pages: input.pages,
            feature_count: input.features.len(),
            timeline: format!("{:?}", input.timeline).to_lowercase(),
            currency: currency.code().to_string(),
            timestamp: Utc::now(),
        };
        if let Err(e) = self.analytics.track(event).await {
            tracing::warn!("Analytics dispatch failed: {}", e);
        }

        quote
    }

    /// Default display currency for a client IP.
    ///
    /// Lookup failure, timeout, or an unknown country all fall back to INR;
    /// nothing propagates to the caller.
    pub async fn detect_currency(&self, ip: &str) -> Currency {
        match tokio::time::timeout(GEO_LOOKUP_TIMEOUT, self.geo.lookup_country(ip)).await {
            Ok(Ok(Some(country))) => currency_for_country(country.as_str()),
            Ok(Ok(None)) => Currency::Inr,
            Ok(Err(e)) => {
                tracing::warn!("Geolocation lookup failed for {}: {}", ip, e);
                Currency::Inr
            }
            Err(_) => {
                tracing::warn!("Geolocation lookup timed out for {}", ip);
                Currency::Inr
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_maps_to_usd() {
        assert_eq!(currency_for_country("US"), Currency::Usd);
        assert_eq!(currency_for_country("us"), Currency::Usd);
    }

    #[test]
    fn eurozone_maps_to_eur() {
        assert_eq!(currency_for_country("DE"), Currency::Eur);
        assert_eq!(currency_for_country("fr"), Currency::Eur);
    }

    #[test]
    fn everywhere_else_maps_to_inr() {
        assert_eq!(currency_for_country("IN"), Currency::Inr);
        assert_eq!(currency_for_country("GB"), Currency::Inr);
        assert_eq!(currency_for_country("JP"), Currency::Inr);
        assert_eq!(currency_for_country(""), Currency::Inr);
    }
}
