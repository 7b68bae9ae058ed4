use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::note_repository::NoteRepository;
use crate::application::use_cases::links::create_link::CreateLink;
use crate::bootstrap::app_context::AppContext;
use crate::domain::ui::toast::{Toast, ToastVariant};
use crate::presentation::http::auth::{Bearer, current_user};
use crate::presentation::http::notes::note_error_status;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLinkRequest {
    pub source_id: Uuid,
    pub target_id: Uuid,
    pub r#type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateLinkResponse {
    /// `null` when the link could not be established.
    pub link_id: Option<Uuid>,
    pub toast: Toast,
}

fn link_toast(link_id: Option<Uuid>) -> Toast {
    match link_id {
        Some(_) => Toast::new(ToastVariant::Success, Some("Notes linked".into()), None),
        None => Toast::new(
            ToastVariant::Destructive,
            None,
            Some("The link could not be saved. Try again.".into()),
        ),
    }
}

#[utoipa::path(post, path = "/api/links", tag = "Links", request_body = CreateLinkRequest,
    responses((status = 200, body = CreateLinkResponse), (status = 404, description = "Note not found")))]
pub async fn create_link(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateLinkRequest>,
) -> Result<Json<CreateLinkResponse>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    // Only the caller's own notes can be linked.
    let notes = ctx.note_repo();
    for id in [req.source_id, req.target_id] {
        let owned = notes
            .exists_for_owner(id, user_id)
            .await
            .map_err(|e| note_error_status(&e))?;
        if !owned {
            return Err(StatusCode::NOT_FOUND);
        }
    }

    let repo = ctx.link_repo();
    let uc = CreateLink {
        repo: repo.as_ref(),
    };
    let link_id = uc
        .execute(req.source_id, req.target_id, req.r#type.as_deref())
        .await;
    Ok(Json(CreateLinkResponse {
        link_id,
        toast: link_toast(link_id),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/links", post(create_link))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::link_repository::LinkRepository;
    use crate::bootstrap::app_context::AppServices;
    use crate::bootstrap::config::Config;
    use crate::presentation::http::auth::test_support::token;

    fn ctx() -> AppContext {
        AppContext::new(Config::for_memory("links-test-secret"), AppServices::in_memory())
    }

    fn bearer(ctx: &AppContext, user: Uuid) -> Bearer {
        Bearer(token(&ctx.cfg, &user.to_string(), 3600))
    }

    #[tokio::test]
    async fn linking_someone_elses_note_is_not_found() {
        let ctx = ctx();
        let (me, other) = (Uuid::new_v4(), Uuid::new_v4());
        let mine = ctx.note_repo().create_for_owner(me, "Mine", "").await.unwrap();
        let theirs = ctx.note_repo().create_for_owner(other, "Theirs", "").await.unwrap();

        let res = create_link(
            State(ctx.clone()),
            bearer(&ctx, me),
            Json(CreateLinkRequest {
                source_id: mine.id,
                target_id: theirs.id,
                r#type: None,
            }),
        )
        .await;
        assert_eq!(res.err(), Some(StatusCode::NOT_FOUND));
        assert!(ctx.link_repo().links_touching(&[theirs.id]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn linking_own_notes_succeeds_once() {
        let ctx = ctx();
        let me = Uuid::new_v4();
        let a = ctx.note_repo().create_for_owner(me, "A", "").await.unwrap();
        let b = ctx.note_repo().create_for_owner(me, "B", "").await.unwrap();

        let mut ids = Vec::new();
        for _ in 0..2 {
            let Json(resp) = create_link(
                State(ctx.clone()),
                bearer(&ctx, me),
                Json(CreateLinkRequest {
                    source_id: a.id,
                    target_id: b.id,
                    r#type: None,
                }),
            )
            .await
            .unwrap();
            assert_eq!(resp.toast.variant, ToastVariant::Success);
            ids.push(resp.link_id);
        }
        assert!(ids[0].is_some());
        assert_eq!(ids[0], ids[1]);
    }

    #[test]
    fn toast_reflects_outcome() {
        assert_eq!(link_toast(Some(Uuid::new_v4())).variant, ToastVariant::Success);
        assert_eq!(link_toast(None).variant, ToastVariant::Destructive);
    }
}
