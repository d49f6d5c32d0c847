//! Static catalog handlers
//!
//! Portfolio, process, and team content has no lifecycle; these just
//! serialize the built-in catalog.

use axum::{extract::State, Json};

use crate::domain::entities::{PortfolioItem, ProcessStep, TeamMember};
use crate::handlers::DataResponse;
use crate::AppState;

/// GET /api/portfolio
pub async fn list_portfolio(State(state): State<AppState>) -> Json<DataResponse<Vec<PortfolioItem>>> {
    Json(DataResponse {
        data: state.catalog.portfolio.clone(),
    })
}

/// GET /api/process
pub async fn list_process(State(state): State<AppState>) -> Json<DataResponse<Vec<ProcessStep>>> {
    Json(DataResponse {
        data: state.catalog.process.clone(),
    })
}

/// GET /api/team
pub async fn list_team(State(state): State<AppState>) -> Json<DataResponse<Vec<TeamMember>>> {
    Json(DataResponse {
        data: state.catalog.team.clone(),
    })
}
