//! HTTP surface: HTML pages for the browser plus a small JSON API.
//!
//! Every browser mutation answers with a redirect to `/`, which re-renders
//! the page from the store.

use crate::error::TodoError;
use crate::session::{Notice, Session};
use crate::render::render_page;
use crate::store::Task;
use crate::translation::{Translation, TranslationResolver};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory session
    pub session: Arc<Mutex<Session>>,
    pub resolver: Arc<TranslationResolver>,
}

impl AppState {
    pub fn new(resolver: TranslationResolver) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            resolver: Arc::new(resolver),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LanguageChoice {
    pub language: String,
}

#[derive(Debug, Serialize)]
struct TaskList {
    tasks: Vec<Task>,
    pending: usize,
    completed: usize,
}

#[derive(Debug, Serialize)]
struct TranslationResult {
    kind: &'static str,
    translation: String,
    stored: bool,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = match self {
            TodoError::Validation => StatusCode::BAD_REQUEST,
            TodoError::NotFound { .. } => StatusCode::NOT_FOUND,
            TodoError::InvalidLanguage { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Browser
        .route("/", get(index))
        .route("/tasks", post(add_task))
        .route("/tasks/:id/complete", post(complete_task))
        .route("/tasks/:id/undo", post(undo_task))
        .route("/tasks/:id/language", post(change_language))
        .route("/tasks/:id/translate", post(translate_task))
        // JSON API
        .route("/api/tasks", get(api_list_tasks).post(api_create_task))
        .route("/api/tasks/:id", get(api_get_task))
        .route("/api/tasks/:id/translate", post(api_translate_task))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

// ==================== Browser Handlers ====================

async fn index(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock().await;
    let notice = session.take_notice();
    Html(render_page(&session.store, notice.as_ref()))
}

async fn add_task(State(state): State<AppState>, Form(form): Form<NewTask>) -> Redirect {
    let mut session = state.session.lock().await;
    // Rejection is reported through the session notice
    let _ = session.add_task(&form.text);
    Redirect::to("/")
}

async fn complete_task(State(state): State<AppState>, Path(id): Path<usize>) -> Redirect {
    let mut session = state.session.lock().await;
    let result = session.complete_task(id);
    report(&mut session, result);
    Redirect::to("/")
}

async fn undo_task(State(state): State<AppState>, Path(id): Path<usize>) -> Redirect {
    let mut session = state.session.lock().await;
    let result = session.undo_task(id);
    report(&mut session, result);
    Redirect::to("/")
}

async fn change_language(
    State(state): State<AppState>,
    Path(id): Path<usize>,
    Form(form): Form<LanguageChoice>,
) -> Redirect {
    let mut session = state.session.lock().await;
    let result = session.change_language(id, &form.language);
    report(&mut session, result);
    Redirect::to("/")
}

async fn translate_task(State(state): State<AppState>, Path(id): Path<usize>) -> Redirect {
    if let Err(e) = resolve_and_store(&state, id).await {
        let mut session = state.session.lock().await;
        report(&mut session, Err(e));
    }
    Redirect::to("/")
}

fn report(session: &mut Session, result: Result<(), TodoError>) {
    if let Err(e) = result {
        warn!("Rejected task action: {}", e);
        session.notify(Notice::error(e.to_string()));
    }
}

/// Resolve a translation for the task and store it.
///
/// The session lock is released while the resolver runs.
async fn resolve_and_store(state: &AppState, id: usize) -> Result<(Translation, bool), TodoError> {
    let pending = state.session.lock().await.begin_translation(id)?;

    let translation = state
        .resolver
        .resolve(&pending.text, pending.language)
        .await;

    let mut session = state.session.lock().await;
    let stored = session.apply_translation(&pending, &translation)?;
    Ok((translation, stored))
}

// ==================== JSON API Handlers ====================

async fn api_list_tasks(State(state): State<AppState>) -> Json<TaskList> {
    let session = state.session.lock().await;
    Json(TaskList {
        tasks: session.store.tasks().to_vec(),
        pending: session.store.pending_count(),
        completed: session.store.completed_count(),
    })
}

async fn api_create_task(
    State(state): State<AppState>,
    Json(body): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), TodoError> {
    let mut session = state.session.lock().await;
    // API callers get the outcome directly; notices are for the browser only
    let id = session.preserving_notice(|s| s.add_task(&body.text))?;
    let task = session.store.get(id)?.clone();
    Ok((StatusCode::CREATED, Json(task)))
}

async fn api_get_task(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Result<Json<Task>, TodoError> {
    let session = state.session.lock().await;
    Ok(Json(session.store.get(id)?.clone()))
}

async fn api_translate_task(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Result<Json<TranslationResult>, TodoError> {
    let (translation, stored) = resolve_and_store(&state, id).await?;
    Ok(Json(TranslationResult {
        kind: translation.kind(),
        translation: translation.to_string(),
        stored,
    }))
}
