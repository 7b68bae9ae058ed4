use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::notes::create_note::CreateNote;
use crate::application::use_cases::notes::get_local_graph::GetLocalGraph;
use crate::application::use_cases::notes::list_notes::ListNotes;
use crate::application::use_cases::notes::update_note_content::UpdateNoteContent;
use crate::application::use_cases::suggestions::fetch_suggestions::FetchNotesForSuggestion;
use crate::bootstrap::app_context::AppContext;
use crate::domain::graph::local_graph::LocalGraph;
use crate::domain::notes::note::{Note as DomainNote, NoteError};
use crate::presentation::http::auth::{Bearer, current_user};

#[derive(Debug, Serialize, ToSchema)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<DomainNote> for Note {
    fn from(n: DomainNote) -> Self {
        Note {
            id: n.id,
            title: n.title,
            content: n.content,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteListResponse {
    pub items: Vec<Note>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteContentRequest {
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WikiLinkItem {
    pub id: Uuid,
    pub title: String,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GraphNode {
    pub id: Uuid,
    pub label: String,
    pub is_focal: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GraphEdge {
    pub id: Uuid,
    pub source: Uuid,
    pub target: Uuid,
    pub r#type: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocalGraphResponse {
    pub focal_id: Option<Uuid>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl From<LocalGraph> for LocalGraphResponse {
    fn from(g: LocalGraph) -> Self {
        LocalGraphResponse {
            focal_id: g.focal_id,
            nodes: g
                .nodes
                .into_iter()
                .map(|n| GraphNode {
                    id: n.id,
                    label: n.label,
                    is_focal: n.is_focal,
                })
                .collect(),
            edges: g
                .edges
                .into_iter()
                .map(|e| GraphEdge {
                    id: e.id,
                    source: e.source,
                    target: e.target,
                    r#type: e.link_type,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    pub depth: Option<u32>,
}

pub(crate) fn note_error_status(e: &anyhow::Error) -> StatusCode {
    match e.downcast_ref::<NoteError>() {
        Some(NoteError::NotFound) => StatusCode::NOT_FOUND,
        Some(NoteError::InvalidTitle) => StatusCode::BAD_REQUEST,
        None => {
            tracing::error!(error = ?e, "note_request_failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn refresh_catalog(ctx: &AppContext, owner_id: Uuid) {
    if let Err(e) = ctx.note_catalog().refresh(owner_id).await {
        tracing::warn!(error = ?e, %owner_id, "note_catalog_refresh_failed");
    }
}

#[utoipa::path(get, path = "/api/notes", tag = "Notes",
    responses((status = 200, body = NoteListResponse)))]
pub async fn list_notes(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<NoteListResponse>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let repo = ctx.note_repo();
    let uc = ListNotes {
        repo: repo.as_ref(),
    };
    let notes = uc
        .execute(user_id)
        .await
        .map_err(|e| note_error_status(&e))?;
    Ok(Json(NoteListResponse {
        items: notes.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/notes", tag = "Notes", request_body = CreateNoteRequest,
    responses((status = 200, body = Note), (status = 400, description = "Empty title")))]
pub async fn create_note(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<Note>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let notes = ctx.note_repo();
    let links = ctx.link_repo();
    let uc = CreateNote {
        notes: notes.as_ref(),
        links: links.as_ref(),
    };
    let note = uc
        .execute(user_id, &req.title, &req.content)
        .await
        .map_err(|e| note_error_status(&e))?;
    refresh_catalog(&ctx, user_id).await;
    Ok(Json(note.into()))
}

#[utoipa::path(put, path = "/api/notes/{id}/content", tag = "Notes", request_body = UpdateNoteContentRequest,
    params(("id" = Uuid, Path, description = "Note ID")),
    responses((status = 200, body = Note), (status = 404, description = "Not found")))]
pub async fn update_note_content(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNoteContentRequest>,
) -> Result<Json<Note>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let notes = ctx.note_repo();
    let links = ctx.link_repo();
    let uc = UpdateNoteContent {
        notes: notes.as_ref(),
        links: links.as_ref(),
    };
    let note = uc
        .execute(user_id, id, &req.content)
        .await
        .map_err(|e| note_error_status(&e))?;
    refresh_catalog(&ctx, user_id).await;
    Ok(Json(note.into()))
}

#[utoipa::path(get, path = "/api/notes/suggestions", tag = "Notes",
    params(("q" = Option<String>, Query, description = "Title substring, case-insensitive")),
    responses((status = 200, body = [WikiLinkItem])))]
pub async fn suggest_notes(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    q: Option<Query<SuggestionQuery>>,
) -> Result<Json<Vec<WikiLinkItem>>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let query = q.and_then(|Query(v)| v.q).unwrap_or_default();
    let catalog = ctx.note_catalog();
    let snapshot = catalog.snapshot(user_id).await;
    if snapshot.is_none() {
        // First request for this user answers from the empty state and warms the catalog.
        tokio::spawn(async move {
            if let Err(e) = catalog.refresh(user_id).await {
                tracing::warn!(error = ?e, owner_id = %user_id, "note_catalog_warmup_failed");
            }
        });
    }
    let uc = FetchNotesForSuggestion {
        notes: snapshot.as_deref().map(Vec::as_slice),
        limit: ctx.cfg.suggestion_limit,
    };
    let items = uc
        .execute(&query)
        .await
        .into_iter()
        .map(|i| WikiLinkItem {
            id: i.id,
            title: i.title,
            index: i.index,
        })
        .collect();
    Ok(Json(items))
}

#[utoipa::path(get, path = "/api/notes/{id}/graph", tag = "Notes",
    params(
        ("id" = Uuid, Path, description = "Focal note ID"),
        ("depth" = Option<u32>, Query, description = "Hops from the focal note (default 1)")
    ),
    responses((status = 200, body = LocalGraphResponse), (status = 404, description = "Not found")))]
pub async fn get_local_graph(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    q: Option<Query<GraphQuery>>,
) -> Result<Json<LocalGraphResponse>, StatusCode> {
    let user_id = current_user(&ctx.cfg, bearer)?;
    let depth = q
        .and_then(|Query(v)| v.depth)
        .unwrap_or(1)
        .min(ctx.cfg.graph_max_depth);
    let notes = ctx.note_repo();
    let links = ctx.link_repo();
    let uc = GetLocalGraph {
        notes: notes.as_ref(),
        links: links.as_ref(),
    };
    let graph = uc
        .execute(user_id, id, depth)
        .await
        .map_err(|e| note_error_status(&e))?;
    Ok(Json(graph.into()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/suggestions", get(suggest_notes))
        .route("/notes/:id/content", put(update_note_content))
        .route("/notes/:id/graph", get(get_local_graph))
        .with_state(ctx)
}
