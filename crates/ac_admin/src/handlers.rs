use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use ac_core::{Article, ArticleInput, Error};

use crate::changelist::{self, ChangeList};
use crate::state::AppState;

/// HTTP-facing wrapper so handlers can propagate `ac_core::Error` with `?`.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct SiteIndex {
    pub site_header: String,
    pub site_title: String,
    pub models: Vec<&'static str>,
}

pub async fn site_index(State(state): State<Arc<AppState>>) -> Json<SiteIndex> {
    Json(SiteIndex {
        site_header: state.branding.site_header.clone(),
        site_title: state.branding.site_title.clone(),
        models: vec![ac_core::schema::ARTICLE.model],
    })
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChangeList>, ApiError> {
    let admin = &state.article_admin;
    let articles = state.store.list(admin.ordering).await?;
    let rows = articles
        .iter()
        .map(|article| changelist::render_row(admin, article))
        .collect();

    Ok(Json(ChangeList {
        site_header: state.branding.site_header.clone(),
        site_title: state.branding.site_title.clone(),
        model: ac_core::schema::ARTICLE.model,
        columns: changelist::columns(admin),
        rows,
    }))
}

pub async fn create_article(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ArticleInput>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let article = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    Ok(Json(state.store.get(id).await?))
}

pub async fn update_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<ArticleInput>,
) -> Result<Json<Article>, ApiError> {
    Ok(Json(state.store.update(id, input).await?))
}

pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
