//! HTTP routes of the todo application.
//!
//! Every mutating handler follows the same shape: perform the write,
//! declare which domains it touched, and let the orchestrator decide which
//! of the client's mounted views need an out-of-band patch.

use crate::domains::{TODOS, TODO_ANALYTICS};
use crate::store::TodoStore;
use crate::views::{LoginFormView, NewTodoForm, TodoAnalyticsView, TodoListView};
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use lattice_core::{DataMutations, UserId};
use lattice_web::{Orchestrator, Page, ViewState, WebError};
use serde::Deserialize;
use std::sync::Arc;

/// The demo runs as a single fixed user; session handling is out of scope.
pub const DEMO_USER: UserId = UserId::new(1);

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub orchestrator: Arc<Orchestrator>,
}

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/todos", post(create_todo))
        .route("/todos/{id}/toggle", post(toggle_todo))
        .route("/todos/{id}/delete", post(delete_todo))
        .with_state(state)
}

pub fn session_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", get(login_page).post(login))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let page = Page::new("Todos")
        .view(Arc::new(NewTodoForm))
        .view(Arc::new(TodoListView))
        .view(Arc::new(TodoAnalyticsView));
    let html = page.render(&state.orchestrator, Some(&DEMO_USER)).await?;
    Ok(Html(html))
}

#[derive(Debug, Deserialize)]
struct CreateTodo {
    title: String,
}

async fn create_todo(
    State(state): State<AppState>,
    ViewState(mounted): ViewState,
    Json(body): Json<CreateTodo>,
) -> Result<Html<String>, WebError> {
    let title = body.title.trim();
    let mutations = if title.is_empty() {
        DataMutations::none()
    } else {
        state.store.add(DEMO_USER, title.to_string());
        DataMutations::for_domain(TODOS).and(TODO_ANALYTICS)
    };
    let patches = state
        .orchestrator
        .render_mutation_response(Some(&DEMO_USER), &mutations, &mounted)
        .await?;
    Ok(Html(patches))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ViewState(mounted): ViewState,
) -> Result<Html<String>, WebError> {
    let mutations = if state.store.toggle(DEMO_USER, id) {
        DataMutations::for_domain(TODOS)
    } else {
        tracing::warn!(id, "toggle for unknown todo");
        DataMutations::none()
    };
    let patches = state
        .orchestrator
        .render_mutation_response(Some(&DEMO_USER), &mutations, &mounted)
        .await?;
    Ok(Html(patches))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ViewState(mounted): ViewState,
) -> Result<Html<String>, WebError> {
    let mutations = if state.store.remove(DEMO_USER, id) {
        DataMutations::for_domain(TODOS).and(TODO_ANALYTICS)
    } else {
        tracing::warn!(id, "delete for unknown todo");
        DataMutations::none()
    };
    let patches = state
        .orchestrator
        .render_mutation_response(Some(&DEMO_USER), &mutations, &mounted)
        .await?;
    Ok(Html(patches))
}

async fn login_page(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let page = Page::new("Sign in").view(Arc::new(LoginFormView));
    let html = page.render(&state.orchestrator, None).await?;
    Ok(Html(html))
}

/// Credential checking is out of scope for the demo; signing in just lands
/// on the todo page.
async fn login(State(_state): State<AppState>) -> Redirect {
    Redirect::to("/")
}
