//! Listing endpoint: GET /api/data

use crate::domain::entities::dataset::{PageQuery, PageResult, Row};
use crate::error::{Result, ServerError};
use crate::platform::blocking::run_blocking;
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query string of the listing endpoint. Absent values take the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct DataParams {
    pub page: Option<i64>,
    #[serde(alias = "pageSize")]
    pub limit: Option<i64>,
    #[serde(alias = "searchTerm")]
    pub search: Option<String>,
}

impl DataParams {
    pub fn into_query(self, default_page_size: i64) -> PageQuery {
        PageQuery::new(
            self.search.unwrap_or_default(),
            self.page.unwrap_or(0),
            self.limit.unwrap_or(default_page_size),
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    pub items: Vec<Row>,
    pub total: usize,
    pub page: i64,
    pub has_more: bool,
}

impl From<PageResult> for DataResponse {
    fn from(result: PageResult) -> Self {
        Self {
            items: result.rows,
            total: result.total_matching,
            page: result.page,
            has_more: result.has_more,
        }
    }
}

/// GET /api/data?page=&limit=&search=
///
/// Runs on the blocking pool: a page over the full dataset scans every row.
pub async fn list(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<DataParams>, QueryRejection>,
) -> Result<Json<DataResponse>> {
    let Query(params) = params?;
    let query = params.into_query(state.config.default_page_size);

    let access = state.access.clone();
    let page = run_blocking(move || access.get_page(&query))
        .await
        .map_err(|e| ServerError::internal(format!("page query task failed: {e}")))??;

    Ok(Json(page.into()))
}
