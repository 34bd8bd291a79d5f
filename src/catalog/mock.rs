//! In-memory catalog for tests.
//!
//! Replays one scripted outcome for every call and records what was asked.

use super::{CatalogClient, CatalogResponse, CatalogResult, TableInput};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

/// A call received by [`MockCatalog`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateTable { database_name: String, input: TableInput },
    GetTables { database_name: String },
    GetTable { name: String, database_name: String },
    SearchTables { search_text: String },
    DeleteTable { name: String, database_name: String },
    UpdateTable { database_name: String, input: TableInput },
}

#[derive(Debug)]
pub struct MockCatalog {
    outcome: CatalogResult,
    calls: Mutex<Vec<Call>>,
}

impl MockCatalog {
    pub fn replying(outcome: CatalogResult) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every call with 200 and an empty metadata block
    pub fn ok() -> Self {
        Self::replying(Ok(CatalogResponse::new(
            200,
            json!({"ResponseMetadata": {"HTTPStatusCode": 200}}),
        )))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> CatalogResult {
        self.calls.lock().unwrap().push(call);
        self.outcome.clone()
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn create_table(&self, database_name: &str, input: TableInput) -> CatalogResult {
        self.record(Call::CreateTable {
            database_name: database_name.to_string(),
            input,
        })
    }

    async fn get_tables(&self, database_name: &str) -> CatalogResult {
        self.record(Call::GetTables {
            database_name: database_name.to_string(),
        })
    }

    async fn get_table(&self, name: &str, database_name: &str) -> CatalogResult {
        self.record(Call::GetTable {
            name: name.to_string(),
            database_name: database_name.to_string(),
        })
    }

    async fn search_tables(&self, search_text: &str) -> CatalogResult {
        self.record(Call::SearchTables {
            search_text: search_text.to_string(),
        })
    }

    async fn delete_table(&self, name: &str, database_name: &str) -> CatalogResult {
        self.record(Call::DeleteTable {
            name: name.to_string(),
            database_name: database_name.to_string(),
        })
    }

    async fn update_table(&self, database_name: &str, input: TableInput) -> CatalogResult {
        self.record(Call::UpdateTable {
            database_name: database_name.to_string(),
            input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn test_records_calls_in_order() {
        let mock = MockCatalog::ok();

        tokio_test::block_on(async {
            mock.get_tables("sales_db").await.unwrap();
            mock.search_tables("ord").await.unwrap();
        });

        assert_eq!(
            mock.calls(),
            vec![
                Call::GetTables {
                    database_name: "sales_db".to_string()
                },
                Call::SearchTables {
                    search_text: "ord".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_replays_errors() {
        let err = CatalogError::service("InternalServiceException", "try later", 500);
        let mock = MockCatalog::replying(Err(err.clone()));

        let result = tokio_test::block_on(mock.delete_table("orders", "sales_db"));
        assert_eq!(result, Err(err));
    }
}
