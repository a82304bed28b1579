use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::CurrentUser;
use crate::models::{Pagination, Task, TaskCreate, TaskUpdate, Token, UserCreate};
use crate::store::{StoreError, TodoStore};

pub type SharedStore = Arc<Mutex<TodoStore>>;
pub type SharedState = Arc<AppState>;

/// Application state
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(TodoStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the API router
pub fn create_router() -> Router {
    create_router_with_state(AppState::new())
}

pub fn create_router_with_state(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/auth/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/", get(list_tasks).post(create_task))
        .route(
            "/tasks/:task_id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Root endpoint
async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Todo List API" }))
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn register_handler(
    State(state): State<SharedState>,
    Json(request): Json<UserCreate>,
) -> Result<(StatusCode, Json<Token>), ApiError> {
    let mut store = state.store.lock().await;
    let token = store.register(&request.email, &request.password)?;
    tracing::info!("Registered user {}", request.email.trim());
    Ok((StatusCode::CREATED, Json(token)))
}

async fn login_handler(
    State(state): State<SharedState>,
    Json(request): Json<UserCreate>,
) -> Result<Json<Token>, ApiError> {
    let mut store = state.store.lock().await;
    let token = store.login(&request.email, &request.password)?;
    Ok(Json(token))
}

async fn create_task(
    State(state): State<SharedState>,
    user: CurrentUser,
    Json(task): Json<TaskCreate>,
) -> Result<Json<Task>, ApiError> {
    let mut store = state.store.lock().await;
    let created = store.create_task(user.id, task)?;
    tracing::debug!("User {} created task {}", user.id, created.id);
    Ok(Json(created))
}

async fn list_tasks(
    State(state): State<SharedState>,
    user: CurrentUser,
    Query(page): Query<Pagination>,
) -> Json<Vec<Task>> {
    let store = state.store.lock().await;
    Json(store.list_tasks(user.id, page))
}

async fn get_task(
    State(state): State<SharedState>,
    user: CurrentUser,
    Path(task_id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.get_task(user.id, task_id)?))
}

async fn update_task(
    State(state): State<SharedState>,
    user: CurrentUser,
    Path(task_id): Path<i64>,
    Json(task_data): Json<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    let mut store = state.store.lock().await;
    Ok(Json(store.update_task(user.id, task_id, task_data)?))
}

async fn delete_task(
    State(state): State<SharedState>,
    user: CurrentUser,
    Path(task_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut store = state.store.lock().await;
    store.delete_task(user.id, task_id)?;
    tracing::debug!("User {} deleted task {}", user.id, task_id);
    Ok(Json(json!({ "message": "Task deleted" })))
}

/// API Errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TaskNotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::DuplicateEmail(_) => ApiError::Conflict(err.to_string()),
            StoreError::InvalidCredentials => ApiError::Unauthorized,
            StoreError::Invalid(msg) => ApiError::ValidationError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        };
        let message = match self {
            ApiError::ValidationError(msg) => msg,
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "detail": message
        }));

        (status, body).into_response()
    }
}
