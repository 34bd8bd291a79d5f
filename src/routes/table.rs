//! Table management route handlers
//!
//! Each handler makes exactly one catalog call and folds the outcome into
//! an [`ApiResponse`]. Catalog failures never become HTTP errors; only a
//! malformed request body is rejected before the call.

use crate::catalog::{CatalogError, CatalogResult, Operation, TableInput};
use crate::error::ApiResult;
use crate::models::{ApiResponse, ResponseEnvelope, TableSpec};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, error, info, warn};
use validator::Validate;

/// Classify a catalog outcome.
///
/// `data_field` names the payload field handed back on success.
pub fn respond(op: Operation, outcome: CatalogResult, data_field: Option<&str>) -> ApiResponse {
    match outcome {
        Ok(response) if response.status == 200 => {
            info!("{} succeeded", op);
            match data_field {
                Some(field) => ApiResponse::ok_with(response.field(field)),
                None => ApiResponse::ok(),
            }
        }
        Ok(response) => {
            warn!("{} answered with status {}", op, response.status);
            ApiResponse::rejected(response.status, response.payload)
        }
        Err(err) => match &err {
            CatalogError::Service { code, status, .. } if op.recognizes(code) => {
                warn!("{} failed: {}", op, err);
                ApiResponse::exception(*status, err.detail())
            }
            CatalogError::Service { code, .. } => {
                error!("{} failed with unhandled code {}: {}", op, code, err);
                ApiResponse::unhandled()
            }
            CatalogError::Transport(_) | CatalogError::Request(_) => {
                error!("{} failed: {}", op, err);
                ApiResponse::unhandled()
            }
        },
    }
}

/// Validate a table body before it is sent anywhere
fn table_spec(payload: Result<Json<TableSpec>, JsonRejection>) -> ApiResult<TableSpec> {
    let Json(spec) = payload?;
    spec.validate()?;
    Ok(spec)
}

/// Create a table in a catalog database
#[utoipa::path(
    post,
    path = "/table/create_table",
    tag = "tables",
    request_body = TableSpec,
    responses(
        (status = 200, description = "Catalog outcome", body = ResponseEnvelope),
        (status = 422, description = "Invalid table definition"),
    )
)]
pub async fn create_table(
    State(state): State<SharedState>,
    payload: Result<Json<TableSpec>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let spec = table_spec(payload)?;
    debug!("Creating table '{}' in '{}'", spec.name, spec.database_name);

    let outcome = state
        .catalog
        .create_table(&spec.database_name, TableInput::from(&spec))
        .await;

    Ok(respond(Operation::CreateTable, outcome, None))
}

/// List the tables of a database
#[utoipa::path(
    get,
    path = "/table/get_tables/{DatabaseName}",
    tag = "tables",
    params(
        ("DatabaseName" = String, Path, description = "Database name")
    ),
    responses(
        (status = 200, description = "Catalog outcome, `data` is the table list", body = ResponseEnvelope),
    )
)]
pub async fn get_tables(
    State(state): State<SharedState>,
    Path(database_name): Path<String>,
) -> ApiResponse {
    debug!("Listing tables in '{}'", database_name);

    let outcome = state.catalog.get_tables(&database_name).await;
    respond(Operation::GetTables, outcome, Some("TableList"))
}

/// Fetch a single table
#[utoipa::path(
    get,
    path = "/table/get_table/{Name}/{DatabaseName}",
    tag = "tables",
    params(
        ("Name" = String, Path, description = "Table name"),
        ("DatabaseName" = String, Path, description = "Database name")
    ),
    responses(
        (status = 200, description = "Catalog outcome, `data` is the table", body = ResponseEnvelope),
    )
)]
pub async fn get_table(
    State(state): State<SharedState>,
    Path((name, database_name)): Path<(String, String)>,
) -> ApiResponse {
    debug!("Fetching table '{}' from '{}'", name, database_name);

    let outcome = state.catalog.get_table(&name, &database_name).await;
    respond(Operation::GetTable, outcome, Some("Table"))
}

/// Free-text search across all tables
#[utoipa::path(
    get,
    path = "/table/search_table/{SearchText}",
    tag = "tables",
    params(
        ("SearchText" = String, Path, description = "Text to search for")
    ),
    responses(
        (status = 200, description = "Catalog outcome, `data` is the matching tables", body = ResponseEnvelope),
    )
)]
pub async fn search_table(
    State(state): State<SharedState>,
    Path(search_text): Path<String>,
) -> ApiResponse {
    debug!("Searching tables for '{}'", search_text);

    let outcome = state.catalog.search_tables(&search_text).await;
    respond(Operation::SearchTable, outcome, Some("TableList"))
}

/// Delete a table
#[utoipa::path(
    delete,
    path = "/table/delete_table/{Name}/{DatabaseName}",
    tag = "tables",
    params(
        ("Name" = String, Path, description = "Table name"),
        ("DatabaseName" = String, Path, description = "Database name")
    ),
    responses(
        (status = 200, description = "Catalog outcome", body = ResponseEnvelope),
    )
)]
pub async fn delete_table(
    State(state): State<SharedState>,
    Path((name, database_name)): Path<(String, String)>,
) -> ApiResponse {
    debug!("Deleting table '{}' from '{}'", name, database_name);

    let outcome = state.catalog.delete_table(&name, &database_name).await;
    respond(Operation::DeleteTable, outcome, None)
}

/// Replace the definition of an existing table
#[utoipa::path(
    put,
    path = "/table/update_table",
    tag = "tables",
    request_body = TableSpec,
    responses(
        (status = 200, description = "Catalog outcome", body = ResponseEnvelope),
        (status = 422, description = "Invalid table definition"),
    )
)]
pub async fn update_table(
    State(state): State<SharedState>,
    payload: Result<Json<TableSpec>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let spec = table_spec(payload)?;
    debug!("Updating table '{}' in '{}'", spec.name, spec.database_name);

    let outcome = state
        .catalog
        .update_table(&spec.database_name, TableInput::from(&spec))
        .await;

    Ok(respond(Operation::UpdateTable, outcome, None))
}
