//! Adapters implementing the domain ports

pub mod analytics;
pub mod geo;
pub mod notify;
pub mod postgres;

pub use analytics::{AnalyticsDispatch, MeasurementClient, NoopAnalyticsClient};
pub use geo::IpApiGeoClient;
pub use notify::{ContactDelivery, LogNotifier, WebhookNotifier};
pub use postgres::{PostgresCategoryRepository, PostgresPostRepository};
