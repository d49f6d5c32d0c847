//! Contact delivery adapters

pub mod webhook;

pub use webhook::{ContactDelivery, LogNotifier, WebhookNotifier};
