use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

/// Query parameters selecting a table
#[derive(Debug, Deserialize)]
pub struct TableParams {
    pub table_name: String,
}

/// Query parameters selecting a row within a table
#[derive(Debug, Deserialize)]
pub struct RowParams {
    pub table_name: String,
    pub row_name: String,
}

#[derive(Debug, Serialize)]
pub struct ListTablesResponse {
    pub tables: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TableDetailsResponse {
    pub table_name: String,
    pub row_names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RowSumResponse {
    pub table_name: String,
    pub row_name: String,
    pub sum: f64,
}

/// List every table extracted from the workbook
async fn list_tables(State(state): State<AppState>) -> Json<ListTablesResponse> {
    Json(ListTablesResponse {
        tables: state.registry.table_names(),
    })
}

/// Row labels of one table
async fn get_table_details(
    State(state): State<AppState>,
    Query(params): Query<TableParams>,
) -> Result<Json<TableDetailsResponse>, AppError> {
    let row_names = state.registry.row_names(&params.table_name)?;
    Ok(Json(TableDetailsResponse {
        table_name: params.table_name,
        row_names,
    }))
}

/// Sum of the numeric cells in one row, label column excluded
async fn row_sum(
    State(state): State<AppState>,
    Query(params): Query<RowParams>,
) -> Result<Json<RowSumResponse>, AppError> {
    let sum = state.registry.row_sum(&params.table_name, &params.row_name)?;
    Ok(Json(RowSumResponse {
        table_name: params.table_name,
        row_name: params.row_name,
        sum,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list_tables", get(list_tables))
        .route("/get_table_details", get(get_table_details))
        .route("/row_sum", get(row_sum))
}
