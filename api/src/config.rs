use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Public base URL of the site (sitemap, RSS links)
    pub site_base_url: String,
    /// Analytics collection endpoint; analytics is a no-op when unset
    pub analytics_endpoint: Option<String>,
    /// Measurement ID attached to every tracked event
    pub analytics_measurement_id: Option<String>,
    /// Geolocation provider base URL (currency defaulting)
    pub geo_api_url: String,
    /// Webhook receiving contact submissions; log-only delivery when unset
    pub contact_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            site_base_url: env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "https://luminastudio.in".to_string()),
            analytics_endpoint: env::var("ANALYTICS_ENDPOINT").ok(),
            analytics_measurement_id: env::var("ANALYTICS_MEASUREMENT_ID").ok(),
            geo_api_url: env::var("GEO_API_URL")
                .unwrap_or_else(|_| "http://ip-api.com".to_string()),
            contact_webhook_url: env::var("CONTACT_WEBHOOK_URL").ok(),
        }
    }

    /// Check if analytics dispatch is configured. An endpoint is enough;
    /// the measurement id is attached when present but never required.
    pub fn analytics_enabled(&self) -> bool {
        self.analytics_endpoint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            site_base_url: "https://example.com".to_string(),
            analytics_endpoint: None,
            analytics_measurement_id: None,
            geo_api_url: "http://ip-api.com".to_string(),
            contact_webhook_url: None,
        }
    }

    #[test]
    fn analytics_enabled_needs_only_an_endpoint() {
        let mut config = base_config();
        assert!(!config.analytics_enabled());

        // Matches the dispatch selection: endpoint alone goes HTTP.
        config.analytics_endpoint = Some("https://collect.example.com".to_string());
        assert!(config.analytics_enabled());

        config.analytics_measurement_id = Some("M-1".to_string());
        assert!(config.analytics_enabled());
    }
}
