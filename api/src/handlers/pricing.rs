//! Pricing handlers

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    convert_package_price, Currency, Feature, PricingInput, Timeline,
};
use crate::error::AppError;
use crate::handlers::DataResponse;
use crate::AppState;

/// Query parameters for the estimate endpoint
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    #[serde(default = "default_pages")]
    pub pages: u32,
    /// Comma-separated feature slugs
    pub features: Option<String>,
    pub timeline: Option<String>,
    /// Explicit display currency; omitted → detected from the client IP
    pub currency: Option<String>,
}

fn default_pages() -> u32 {
    5
}

fn parse_features(raw: Option<&str>) -> Result<Vec<Feature>, AppError> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<Feature>().map_err(AppError::BadRequest))
            .collect()
    })
    .unwrap_or_else(|| Ok(Vec::new()))
}

async fn resolve_currency(
    state: &AppState,
    requested: Option<&str>,
    addr: &SocketAddr,
) -> Result<Currency, AppError> {
    match requested {
        Some(code) => code.parse().map_err(AppError::BadRequest),
        None => Ok(state
            .pricing_service
            .detect_currency(&addr.ip().to_string())
            .await),
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub amount: i64,
    pub currency: &'static str,
    pub symbol: &'static str,
    pub formatted: String,
}

/// GET /api/pricing/estimate
pub async fn get_estimate(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(query): Query<EstimateQuery>,
) -> Result<Json<EstimateResponse>, AppError> {
    let features = parse_features(query.features.as_deref())?;
    let timeline: Timeline = match query.timeline.as_deref() {
        Some(raw) => raw.parse().map_err(AppError::BadRequest)?,
        None => Timeline::default(),
    };
    let currency = resolve_currency(&state, query.currency.as_deref(), &addr).await?;

    let input = PricingInput {
        pages: query.pages,
        features,
        timeline,
    };
    let quote = state.pricing_service.estimate(&input, currency).await;

    Ok(Json(EstimateResponse {
        amount: quote.amount,
        currency: quote.currency.code(),
        symbol: quote.currency.symbol(),
        formatted: format!("{}{}", quote.currency.symbol(), quote.amount),
    }))
}

#[derive(Debug, Deserialize)]
pub struct PackagesQuery {
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub price: i64,
    pub currency: &'static str,
    pub symbol: &'static str,
    pub includes: Vec<String>,
    pub highlighted: bool,
}

/// GET /api/pricing/packages
///
/// Package cards with prices converted to the display currency.
pub async fn list_packages(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(query): Query<PackagesQuery>,
) -> Result<Json<DataResponse<Vec<PackageResponse>>>, AppError> {
    let currency = resolve_currency(&state, query.currency.as_deref(), &addr).await?;

    let packages = state
        .catalog
        .packages
        .iter()
        .map(|p| PackageResponse {
            slug: p.slug.clone(),
            name: p.name.clone(),
            tagline: p.tagline.clone(),
            price: convert_package_price(p.price_inr, currency),
            currency: currency.code(),
            symbol: currency.symbol(),
            includes: p.includes.clone(),
            highlighted: p.highlighted,
        })
        .collect();

    Ok(Json(DataResponse { data: packages }))
}
