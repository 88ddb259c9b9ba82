mod error;

pub use error::ApiError;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_macros::debug_handler;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, ErrorResponse},
    models::Note,
    service::NoteService,
};

#[derive(OpenApi)]
#[openapi(
    paths(create_note, get_all_notes, get_one_note, delete_note),
    components(schemas(Note, CreateNoteRequest, ErrorResponse)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

/// Builds the HTTP router. Anything outside the note routes answers
/// 400 `Unsupported route`, including known paths with the wrong method.
/// HEAD is rejected explicitly, since a GET route would otherwise answer it.
pub fn router(service: Arc<NoteService>, openapi: bool) -> Router {
    let mut router = Router::new()
        .route(
            "/notes",
            post(create_note)
                .get(get_all_notes)
                .head(unsupported_route),
        )
        .route(
            "/notes/{id}",
            get(get_one_note)
                .delete(delete_note)
                .head(unsupported_route),
        );

    if openapi {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()),
        );
    }

    router
        .fallback(unsupported_route)
        .method_not_allowed_fallback(unsupported_route)
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

async fn unsupported_route() -> Response {
    ApiError::UnsupportedRoute.into_response()
}

fn note_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(id)) if !id.is_empty() => Ok(id),
        _ => Err(ApiError::UnsupportedRoute),
    }
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = Note),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let note = service.create_note(&body).await?;
    Ok((StatusCode::CREATED, Json(note)).into_response())
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<Note>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(
    State(service): State<Arc<NoteService>>,
) -> Result<Response, ApiError> {
    let notes = service.get_all_notes().await?;
    Ok((StatusCode::OK, Json(notes)).into_response())
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = Note),
        (status = 404, description = "Note not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = note_id(path)?;

    match service.get_one_note(&id).await? {
        Some(note) => Ok((StatusCode::OK, Json(note)).into_response()),
        None => Err(ApiError::NoteNotFound),
    }
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted, or it did not exist"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = note_id(path)?;

    service.delete_note(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
