//! Page dispatch and session handlers

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use crate::app::HeroDescriptor;
use crate::domain::entities::{Page, PageView};
use crate::error::AppError;
use crate::handlers::{session_id, DataResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PageData {
    #[serde(flatten)]
    pub view: PageView,
    /// Present only on the home page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroDescriptor>,
}

/// GET /api/pages/:page
///
/// Page view descriptor; unknown slugs are 404. The home page carries the
/// hero descriptor, which always resolves (panic in the rich strategy
/// degrades to the static fallback, never a failed page).
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DataResponse<PageData>>, AppError> {
    let page: Page = slug
        .parse()
        .map_err(|_| AppError::NotFound(format!("page '{}'", slug)))?;

    let hero = (page == Page::Home).then(|| state.hero.descriptor());

    Ok(Json(DataResponse {
        data: PageData {
            view: page.view(),
            hero,
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct ExitIntentResponse {
    /// Whether to show the exit-intent popup; true only the first time
    /// per session
    pub show: bool,
}

/// POST /api/session/exit-intent
pub async fn exit_intent(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<ExitIntentResponse> {
    let session = state.sessions.session(&session_id(&headers, &addr));
    let show = session.context.lock().await.mark_exit_intent_shown();
    Json(ExitIntentResponse { show })
}
