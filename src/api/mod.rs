use std::sync::Arc;

use anyhow::Result;
use askama::Template;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::models::{AnalyticsView, ContributionView, SearchHit, TransactionView};
use crate::search;
use crate::source::{AnalyticsSource, ContributionSource, TransactionLookup, TransactionSource};
use crate::upstream::UpstreamError;
use crate::view;

#[derive(Clone)]
pub struct AppState {
    pub analytics: Arc<dyn AnalyticsSource>,
    pub transactions: Arc<dyn TransactionSource>,
    pub contributions: Arc<dyn ContributionSource>,
    pub lookup: Arc<dyn TransactionLookup>,
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/docs", get(docs))
        .route("/api/analytics", get(analytics_fragment))
        .route("/api/transactions", get(transactions_fragment))
        .route("/api/contributions", get(contributions_fragment))
        .route("/search", get(search_fragment))
        .with_state(state)
}

pub async fn run_http_server(addr: &str, state: AppState) -> Result<()> {
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug)]
pub enum AppError {
    Upstream(UpstreamError),
    Render {
        route: &'static str,
        source: askama::Error,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Upstream(UpstreamError::Unreachable(err)) => {
                tracing::error!("upstream fetch failed: {}", err);
                (StatusCode::BAD_GATEWAY, "Failed to fetch data").into_response()
            }
            AppError::Upstream(err) => {
                tracing::error!("upstream response invalid: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to parse data").into_response()
            }
            AppError::Render { route, source } => {
                tracing::error!(route, "fragment render failed: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render fragment").into_response()
            }
        }
    }
}

fn render<T: Template>(route: &'static str, tmpl: T) -> Result<Html<String>, AppError> {
    tmpl.render()
        .map(Html)
        .map_err(|source| AppError::Render { route, source })
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "docs.html")]
struct DocsTemplate;

#[derive(Template)]
#[template(path = "analytics.html")]
struct AnalyticsTemplate {
    stats: AnalyticsView,
}

#[derive(Template)]
#[template(path = "transactions.html")]
struct TransactionsTemplate {
    transactions: Vec<TransactionView>,
}

#[derive(Template)]
#[template(path = "contributions.html")]
struct ContributionsTemplate {
    contributions: Vec<ContributionView>,
}

#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate {
    query: String,
    count: usize,
    results: Vec<SearchHit>,
}

async fn index() -> Result<Html<String>, AppError> {
    render("/", IndexTemplate)
}

async fn docs() -> Result<Html<String>, AppError> {
    render("/docs", DocsTemplate)
}

async fn analytics_fragment(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let counts = state.analytics.counts().await.map_err(AppError::Upstream)?;
    let stats = view::map_analytics(&counts);
    render("/api/analytics", AnalyticsTemplate { stats })
}

async fn transactions_fragment(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let transactions = state
        .transactions
        .recent()
        .await
        .map_err(AppError::Upstream)?;
    render("/api/transactions", TransactionsTemplate { transactions })
}

async fn contributions_fragment(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let contributions = state
        .contributions
        .recent()
        .await
        .map_err(AppError::Upstream)?;
    render("/api/contributions", ContributionsTemplate { contributions })
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search_fragment(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let query = params.q.trim();
    // Empty query short-circuits before classification; the upstream API is
    // never consulted.
    if query.is_empty() {
        return Ok(Html(String::new()));
    }

    let results = search::run(query, state.lookup.as_ref()).await;
    render(
        "/search",
        SearchTemplate {
            query: query.to_string(),
            count: results.len(),
            results,
        },
    )
}
