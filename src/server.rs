//! Read-only JSON HTTP surface over the query engine.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /search` | full search; `q`, `categories`, `sources`, `dateRange`, `sortBy`, `page`, `limit` |
//! | `GET /suggest` | search-as-you-type; `q`, `limit` |
//! | `GET /forms/popular` | most downloaded; `limit` |
//! | `GET /forms/{id}` | one form plus its categories |
//! | `GET /forms/{id}/related` | forms sharing a category; `limit` |
//! | `GET /categories` | every category |
//! | `GET /categories/featured` | featured categories; `limit` |
//! | `GET /categories/{id}/forms` | forms in one category |
//! | `GET /healthz` | liveness |
//!
//! List parameters (`categories`, `sources`) are comma-separated.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use formfinder_core::{
    config::SearchConfig, search, Catalog, Category, DateRange, Form, SearchFilters,
    SearchResult, SortBy, SourceType, UnknownSourceType,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

// ---------------------------------------------------------------------------
// State + errors
// ---------------------------------------------------------------------------

/// Shared, read-only handler state.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub search: SearchConfig,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{kind} {id:?} not found")]
    NotFound { kind: &'static str, id: String },

    #[error(transparent)]
    BadRequest(#[from] UnknownSourceType),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/search", get(search_handler))
        .route("/suggest", get(suggest_handler))
        .route("/forms/popular", get(popular_handler))
        .route("/forms/{id}", get(form_handler))
        .route("/forms/{id}/related", get(related_handler))
        .route("/categories", get(categories_handler))
        .route("/categories/featured", get(featured_handler))
        .route("/categories/{id}/forms", get(category_forms_handler))
        .with_state(state)
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(state: Arc<AppState>, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, forms = state.catalog.len(), "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub categories: Option<String>,
    pub sources: Option<String>,
    pub date_range: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl SearchParams {
    pub fn filters(&self) -> Result<SearchFilters, UnknownSourceType> {
        let sources = split_list(self.sources.as_deref())
            .map(str::parse::<SourceType>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchFilters {
            categories: split_list(self.categories.as_deref()).map(String::from).collect(),
            sources,
            date_range: self
                .date_range
                .as_deref()
                .map(DateRange::parse_lenient)
                .unwrap_or_default(),
            sort_by: self
                .sort_by
                .as_deref()
                .map(SortBy::parse_lenient)
                .unwrap_or_default(),
        })
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// A [`SearchResult`] plus the paging coordinates it was produced with.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(flatten)]
    pub result: SearchResult,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDetail<'a> {
    pub form: &'a Form,
    pub categories: Vec<&'a Category>,
    pub related: Vec<&'a Form>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn healthz() -> &'static str {
    "ok"
}

async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, ApiError> {
    let filters = params.filters()?;
    let page = params.page.unwrap_or(1);
    let limit = state.search.page_size(params.limit);

    let result = search::search(&state.catalog, &params.q, &filters, page, limit);
    Ok(Json(SearchPage {
        total_pages: result.total_pages(limit),
        has_more: result.has_more(page, limit),
        result,
        page,
        limit,
    }))
}

async fn suggest_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<Form>> {
    let limit = params
        .limit
        .unwrap_or(state.search.suggestion_limit)
        .min(state.search.max_page_size);
    Json(search::suggest(&state.catalog, &params.q, limit))
}

async fn popular_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Response {
    let limit = params
        .limit
        .unwrap_or(state.search.popular_limit)
        .min(state.search.max_page_size);
    Json(search::popular_forms(&state.catalog, limit)).into_response()
}

async fn form_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let catalog = &state.catalog;
    let form = catalog
        .form(&id)
        .or_else(|| catalog.form_by_slug(&id))
        .ok_or(ApiError::NotFound { kind: "form", id })?;

    let detail = FormDetail {
        form,
        categories: catalog.categories_of(form),
        related: search::related_forms(catalog, &form.id, state.search.related_limit),
    };
    Ok(Json(detail).into_response())
}

async fn related_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Response, ApiError> {
    if state.catalog.form(&id).is_none() {
        return Err(ApiError::NotFound { kind: "form", id });
    }
    let limit = params
        .limit
        .unwrap_or(state.search.related_limit)
        .min(state.search.max_page_size);
    Ok(Json(search::related_forms(&state.catalog, &id, limit)).into_response())
}

async fn categories_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.categories()).into_response()
}

async fn featured_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Response {
    let limit = params
        .limit
        .unwrap_or(state.search.featured_limit)
        .min(state.search.max_page_size);
    Json(state.catalog.featured_categories(limit)).into_response()
}

async fn category_forms_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    if state.catalog.category(&id).is_none() {
        return Err(ApiError::NotFound { kind: "category", id });
    }
    Ok(Json(search::forms_by_category(&state.catalog, &id)).into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
