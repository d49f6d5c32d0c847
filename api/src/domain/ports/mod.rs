//! Port traits
//!
//! Interfaces the application layer depends on; adapters implement them.

mod analytics;
mod geo;
mod notifier;
mod repositories;

pub use analytics::{AnalyticsClient, AnalyticsEvent};
pub use geo::{CountryCode, GeoClient};
pub use notifier::ContactNotifier;
pub use repositories::{CategoryRepository, PostFilter, PostRepository};
