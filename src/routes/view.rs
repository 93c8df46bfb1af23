//! Shared view state endpoints: /api/selections and /api/sort-order
//!
//! Writes replace the stored list wholesale. A body without the list field
//! clears it.

use crate::domain::entities::dataset::RowId;
use crate::error::Result;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SelectionsBody {
    #[serde(default)]
    pub selections: Vec<RowId>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OrderBody {
    #[serde(default)]
    pub order: Vec<RowId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
}

impl AckResponse {
    fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// POST /api/selections
pub async fn set_selections(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<SelectionsBody>, JsonRejection>,
) -> Result<Json<AckResponse>> {
    let Json(body) = body?;
    state.access.set_selection(body.selections);
    Ok(AckResponse::ok())
}

/// GET /api/selections
pub async fn get_selections(State(state): State<Arc<AppState>>) -> Json<SelectionsBody> {
    Json(SelectionsBody {
        selections: state.access.get_selection(),
    })
}

/// POST /api/sort-order
pub async fn set_sort_order(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<OrderBody>, JsonRejection>,
) -> Result<Json<AckResponse>> {
    let Json(body) = body?;
    state.access.set_order(body.order);
    Ok(AckResponse::ok())
}

/// GET /api/sort-order
pub async fn get_sort_order(State(state): State<Arc<AppState>>) -> Json<OrderBody> {
    Json(OrderBody {
        order: state.access.get_order(),
    })
}
