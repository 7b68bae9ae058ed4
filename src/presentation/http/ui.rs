use axum::{Json, Router, extract::State, http::StatusCode, routing::{get, post}};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::services::sidebar::SidebarState;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, current_user};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SidebarStateBody {
    pub collapsed: bool,
}

#[utoipa::path(get, path = "/api/ui/sidebar", tag = "UI State",
    responses((status = 200, body = SidebarStateBody)))]
pub async fn get_sidebar(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<SidebarStateBody>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let state = SidebarState::load(ctx.kv_store(), user_id).await;
    Ok(Json(SidebarStateBody {
        collapsed: state.collapsed(),
    }))
}

#[utoipa::path(put, path = "/api/ui/sidebar", tag = "UI State", request_body = SidebarStateBody,
    responses((status = 200, body = SidebarStateBody)))]
pub async fn put_sidebar(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(body): Json<SidebarStateBody>,
) -> Result<Json<SidebarStateBody>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let mut state = SidebarState::load(ctx.kv_store(), user_id).await;
    let collapsed = state.set_collapsed(body.collapsed).await;
    Ok(Json(SidebarStateBody { collapsed }))
}

#[utoipa::path(post, path = "/api/ui/sidebar/toggle", tag = "UI State",
    responses((status = 200, body = SidebarStateBody)))]
pub async fn toggle_sidebar(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<SidebarStateBody>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let mut state = SidebarState::load(ctx.kv_store(), user_id).await;
    let collapsed = state.toggle().await;
    Ok(Json(SidebarStateBody { collapsed }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/ui/sidebar", get(get_sidebar).put(put_sidebar))
        .route("/ui/sidebar/toggle", post(toggle_sidebar))
        .with_state(ctx)
}
