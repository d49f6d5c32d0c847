//! Geolocation port trait
//!
//! Used only to pick a default display currency. Failure is always
//! recoverable; callers fall back to INR.

use async_trait::async_trait;

use crate::error::GeoError;

/// ISO 3166-1 alpha-2 country code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode(pub String);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Port trait for IP geolocation lookups
#[async_trait]
pub trait GeoClient: Send + Sync {
    /// Resolve a client IP to a country, if the provider knows it
    async fn lookup_country(&self, ip: &str) -> Result<Option<CountryCode>, GeoError>;
}
