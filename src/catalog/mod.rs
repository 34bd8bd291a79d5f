//! Remote catalog client abstraction
//!
//! The handlers talk to the catalog through [`CatalogClient`] so the same
//! code runs against AWS Glue in production and an in-memory mock in tests.

pub mod codes;
pub mod glue;
#[cfg(test)]
pub mod mock;

pub use codes::Operation;
pub use glue::GlueCatalog;

use crate::models::TableSpec;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Storage descriptor nested in a [`TableInput`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Table definition sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableInput {
    pub name: String,
    pub storage_descriptor: StorageDescriptor,
}

impl From<&TableSpec> for TableInput {
    fn from(spec: &TableSpec) -> Self {
        Self {
            name: spec.name.clone(),
            storage_descriptor: StorageDescriptor {
                location: spec.location.clone(),
            },
        }
    }
}

/// A call that completed without raising
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    /// Transport status of the remote call
    pub status: u16,
    /// Full response document, including `ResponseMetadata`
    pub payload: Value,
}

impl CatalogResponse {
    pub fn new(status: u16, payload: Value) -> Self {
        Self { status, payload }
    }

    /// Field of the payload returned to the caller on success
    pub fn field(&self, name: &str) -> Value {
        self.payload.get(name).cloned().unwrap_or(Value::Null)
    }
}

/// Failure of a catalog call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Structured error returned by the catalog service
    #[error("{code} (HTTP {status}): {message}")]
    Service {
        code: String,
        message: String,
        status: u16,
    },

    /// The call never produced a service response
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The request could not be built locally
    #[error("Invalid request: {0}")]
    Request(String),
}

impl CatalogError {
    pub fn service(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        CatalogError::Service {
            code: code.into(),
            message: message.into(),
            status,
        }
    }

    /// The `{"Code", "Message"}` object surfaced to callers
    pub fn detail(&self) -> Value {
        match self {
            CatalogError::Service { code, message, .. } => {
                json!({"Code": code, "Message": message})
            }
            other => json!({"message": other.to_string()}),
        }
    }
}

pub type CatalogResult = Result<CatalogResponse, CatalogError>;

/// Table operations of the remote catalog.
///
/// Implementations are shared across requests and must not hold per-call
/// mutable state.
#[async_trait]
pub trait CatalogClient: Send + Sync + 'static {
    async fn create_table(&self, database_name: &str, input: TableInput) -> CatalogResult;

    /// Lists tables in a database. Payload carries `TableList`.
    async fn get_tables(&self, database_name: &str) -> CatalogResult;

    /// Fetches one table. Payload carries `Table`.
    async fn get_table(&self, name: &str, database_name: &str) -> CatalogResult;

    /// Free-text search across databases. Payload carries `TableList`.
    async fn search_tables(&self, search_text: &str) -> CatalogResult;

    async fn delete_table(&self, name: &str, database_name: &str) -> CatalogResult;

    async fn update_table(&self, database_name: &str, input: TableInput) -> CatalogResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_input_without_location() {
        let spec = TableSpec {
            name: "orders".to_string(),
            database_name: "sales_db".to_string(),
            location: None,
        };
        let input = TableInput::from(&spec);

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"Name": "orders", "StorageDescriptor": {}})
        );
    }

    #[test]
    fn test_table_input_with_location() {
        let spec = TableSpec {
            name: "orders".to_string(),
            database_name: "sales_db".to_string(),
            location: Some("s3://lake/orders/".to_string()),
        };
        let input = TableInput::from(&spec);

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"Name": "orders", "StorageDescriptor": {"Location": "s3://lake/orders/"}})
        );
    }

    #[test]
    fn test_service_error_detail() {
        let err = CatalogError::service("EntityNotFoundException", "Table orders not found", 400);
        assert_eq!(
            err.detail(),
            json!({"Code": "EntityNotFoundException", "Message": "Table orders not found"})
        );
    }

    #[test]
    fn test_missing_field_is_null() {
        let response = CatalogResponse::new(200, json!({"Table": {"Name": "orders"}}));
        assert_eq!(response.field("Table"), json!({"Name": "orders"}));
        assert_eq!(response.field("TableList"), Value::Null);
    }
}
