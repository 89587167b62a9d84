//! Web API module for Reqbook.
//!
//! This module provides a REST API so a browser frontend can fetch the
//! catalogs, download workbooks and upload edited workbooks for import.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/domains` - List feature domains
//! - `GET /api/domains/{domain}/default` - Canonical model for a domain
//! - `GET /api/domains/{domain}/template` - Blank workbook (optional ?project=)
//! - `POST /api/domains/{domain}/export` - Model JSON to workbook (optional ?project=)
//! - `POST /api/domains/{domain}/import` - Workbook bytes to merged model JSON
//! - `GET /api/models` - List saved model files
//! - `GET /api/models/{filename}` - Load a saved model
//! - `PUT /api/models/{filename}` - Save a model

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::branding::APP_DISPLAY_NAME;
use crate::catalog::create_default;
use crate::config::Config;
use crate::models::{ConfigModel, Domain};
use crate::services::{ImportService, LogNotifier, ModelFileService};
use crate::workbook::{ExportError, SheetLayout, SpreadsheetCodec, WorkbookFormat};

/// MIME type of `.xlsx` workbooks.
const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Directory for saved model files
    workspace_root: PathBuf,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: Config, workspace_root: PathBuf) -> Self {
        Self {
            config: Arc::new(config),
            workspace_root,
        }
    }

    /// Returns the workspace root directory.
    #[must_use]
    pub fn workspace_root(&self) -> &PathBuf {
        &self.workspace_root
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Domain list response.
#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    /// Available domains.
    pub domains: Vec<DomainInfo>,
}

/// Summary of a feature domain.
#[derive(Debug, Serialize)]
pub struct DomainInfo {
    /// Identifier used in URLs.
    pub slug: String,
    /// Display name.
    pub label: String,
    /// Workbook layout ("combined" or "per-category").
    pub layout: String,
    /// Number of default categories.
    pub category_count: usize,
}

impl From<Domain> for DomainInfo {
    fn from(domain: Domain) -> Self {
        let layout = match WorkbookFormat::for_domain(domain).layout {
            SheetLayout::Combined(_) => "combined",
            SheetLayout::PerCategory => "per-category",
        };
        Self {
            slug: domain.slug().to_string(),
            label: domain.label().to_string(),
            layout: layout.to_string(),
            category_count: create_default(domain).categories.len(),
        }
    }
}

/// Query parameters for workbook downloads.
#[derive(Debug, Deserialize)]
pub struct WorkbookQuery {
    /// Project name written into the sheet titles.
    pub project: Option<String>,
}

/// Saved model list response.
#[derive(Debug, Serialize)]
pub struct ModelListResponse {
    /// Saved model summaries.
    pub models: Vec<ModelSummary>,
}

/// Summary of a saved model file.
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    /// Filename of the model.
    pub filename: String,
    /// Domain of the model.
    pub domain: Domain,
    /// Number of selected items.
    pub selected: usize,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Path Validation (Security)
// ============================================================================

/// Validates a filename to prevent path traversal attacks.
///
/// Returns the sanitized filename or an error if the filename is invalid.
fn validate_filename(filename: &str) -> Result<&str, ApiError> {
    if filename.is_empty() {
        return Err(ApiError::new("Filename cannot be empty"));
    }

    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(ApiError::new(
            "Invalid filename: path traversal not allowed",
        ));
    }

    if filename.starts_with('.') {
        return Err(ApiError::new("Invalid filename: hidden files not allowed"));
    }

    Ok(filename)
}

/// Appends `.json` unless the filename already has it (case-insensitive).
fn model_filename(filename: &str) -> String {
    if std::path::Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        filename.to_string()
    } else {
        format!("{filename}.json")
    }
}

fn parse_domain(domain: &str) -> ApiResult<Domain> {
    domain.parse().map_err(|e: String| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::with_details("Unknown domain", e)),
        )
    })
}

fn workbook_response(bytes: Vec<u8>, project: &str, domain: Domain) -> Response {
    let filename = ModelFileService::default_workbook_name(project, domain);
    let disposition = format!("attachment; filename=\"{}\"", filename.display());
    (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

fn export_failure(e: ExportError) -> (StatusCode, Json<ApiError>) {
    let status = match e {
        ExportError::DuplicateSheet { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ExportError::Xlsx(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ApiError::with_details("Failed to export workbook", e.to_string())),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/domains - List all feature domains.
async fn list_domains() -> Json<DomainListResponse> {
    Json(DomainListResponse {
        domains: Domain::ALL.into_iter().map(DomainInfo::from).collect(),
    })
}

/// GET /api/domains/{domain}/default - Canonical model with empty selection.
async fn get_default_model(Path(domain): Path<String>) -> ApiResult<Json<ConfigModel>> {
    let domain = parse_domain(&domain)?;
    Ok(Json(create_default(domain)))
}

/// GET /api/domains/{domain}/template - Blank workbook download.
async fn get_template(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(query): Query<WorkbookQuery>,
) -> ApiResult<Response> {
    let domain = parse_domain(&domain)?;
    let project = query
        .project
        .unwrap_or_else(|| state.config.export.project_name.clone());

    let bytes = SpreadsheetCodec::new(domain)
        .encode_template(&create_default(domain), &project)
        .map_err(export_failure)?;

    Ok(workbook_response(bytes, &project, domain))
}

/// POST /api/domains/{domain}/export - Encode a posted model.
async fn export_model(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(query): Query<WorkbookQuery>,
    Json(model): Json<ConfigModel>,
) -> ApiResult<Response> {
    let domain = parse_domain(&domain)?;
    if model.domain != domain {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(format!(
                "Model domain '{}' does not match '{domain}'",
                model.domain
            ))),
        ));
    }

    model.validate().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Invalid model", e.to_string())),
        )
    })?;

    let project = query
        .project
        .unwrap_or_else(|| state.config.export.project_name.clone());

    let notifier = LogNotifier;
    let bytes = ImportService::new(&notifier)
        .export(&model, &project)
        .map_err(export_failure)?;

    Ok(workbook_response(bytes, &project, domain))
}

/// POST /api/domains/{domain}/import - Decode and reconcile an uploaded workbook.
async fn import_workbook(Path(domain): Path<String>, body: Bytes) -> ApiResult<Json<ConfigModel>> {
    let domain = parse_domain(&domain)?;
    let live = create_default(domain);

    let notifier = LogNotifier;
    let merged = ImportService::new(&notifier)
        .import(&live, &body)
        .map_err(|e| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiError::with_details("Import failed", e.reason())),
            )
        })?;

    Ok(Json(merged))
}

/// GET /api/models - List saved model files in the workspace.
async fn list_models(State(state): State<AppState>) -> ApiResult<Json<ModelListResponse>> {
    let mut models = Vec::new();

    let entries = match std::fs::read_dir(&state.workspace_root) {
        Ok(entries) => entries,
        // Nothing saved yet
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Json(ModelListResponse { models }));
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Failed to read workspace directory",
                    e.to_string(),
                )),
            ));
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let Some(filename) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };

        // Skip files that are not valid models
        if let Ok(model) = ModelFileService::load_model(&path) {
            models.push(ModelSummary {
                filename,
                domain: model.domain,
                selected: model.selection.len(),
            });
        }
    }

    models.sort_by(|a, b| a.filename.cmp(&b.filename));

    Ok(Json(ModelListResponse { models }))
}

/// GET /api/models/{filename} - Load a saved model.
async fn get_model(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<ConfigModel>> {
    let filename = validate_filename(&filename).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;
    let filename = model_filename(filename);
    let path = state.workspace_root.join(&filename);

    if !path.exists() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("Model file not found: {filename}"))),
        ));
    }

    let model = ModelFileService::load_model(&path).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to load model", format!("{e:#}"))),
        )
    })?;

    Ok(Json(model))
}

/// PUT /api/models/{filename} - Save a model.
async fn save_model(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    Json(model): Json<ConfigModel>,
) -> ApiResult<StatusCode> {
    let filename = validate_filename(&filename).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;
    let path = state.workspace_root.join(model_filename(filename));

    model.validate().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Invalid model", e.to_string())),
        )
    })?;

    ModelFileService::save_model(&model, &path).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to save model", format!("{e:#}"))),
        )
    })?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server runs locally next to the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Domain endpoints
        .route("/api/domains", get(list_domains))
        .route("/api/domains/{domain}/default", get(get_default_model))
        .route("/api/domains/{domain}/template", get(get_template))
        .route("/api/domains/{domain}/export", post(export_model))
        .route("/api/domains/{domain}/import", post(import_workbook))
        // Model file endpoints
        .route("/api/models", get(list_models))
        .route("/api/models/{filename}", get(get_model).put(save_model))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `workspace_root` - Directory containing model files
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: Config,
    workspace_root: PathBuf,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let state = AppState::new(config, workspace_root);
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_DISPLAY_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
