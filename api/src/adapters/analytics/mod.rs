//! Analytics adapters

pub mod client;

pub use client::{AnalyticsDispatch, MeasurementClient, NoopAnalyticsClient};
