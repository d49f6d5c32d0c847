//! Geolocation adapters

pub mod client;

pub use client::IpApiGeoClient;
