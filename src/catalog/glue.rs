//! AWS Glue Data Catalog implementation of [`CatalogClient`]
//!
//! SDK outputs are rendered into the same JSON documents the Glue API
//! returns, so callers see `Table`, `TableList` and `ResponseMetadata`
//! with their usual PascalCase keys.

use super::{CatalogClient, CatalogError, CatalogResponse, CatalogResult, TableInput};
use crate::config::AwsConfig;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_glue::config::http::HttpResponse;
use aws_sdk_glue::config::{Credentials, Region};
use aws_sdk_glue::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_glue::operation::RequestId;
use aws_sdk_glue::primitives::{DateTime, DateTimeFormat};
use aws_sdk_glue::types::{self as glue, Column, SerDeInfo, Table};
use aws_sdk_glue::Client;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

/// Glue answers successful calls with 200
const HTTP_OK: u16 = 200;

/// Glue-backed catalog client.
///
/// Cheap to share: the SDK client is internally reference counted.
#[derive(Clone, Debug)]
pub struct GlueCatalog {
    client: Client,
}

impl GlueCatalog {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the configured credentials and region.
    ///
    /// Anything left unset is resolved by the SDK default provider chain.
    pub async fn from_settings(aws: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &aws.region {
            loader = loader.region(Region::new(region.clone()));
        }

        match aws.static_credentials() {
            Some((id, secret)) => {
                loader = loader.credentials_provider(Credentials::new(
                    id,
                    secret,
                    None,
                    None,
                    "environment",
                ));
                info!("Using static catalog credentials");
            }
            None => debug!("No static credentials configured, using default provider chain"),
        }

        let sdk_config = loader.load().await;
        info!(
            "Catalog client ready (region: {})",
            sdk_config
                .region()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unset".to_string())
        );

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl CatalogClient for GlueCatalog {
    async fn create_table(&self, database_name: &str, input: TableInput) -> CatalogResult {
        let output = self
            .client
            .create_table()
            .database_name(database_name)
            .table_input(to_glue_input(input)?)
            .send()
            .await
            .map_err(classify)?;

        Ok(ok_response(output.request_id(), Map::new()))
    }

    async fn get_tables(&self, database_name: &str) -> CatalogResult {
        let output = self
            .client
            .get_tables()
            .database_name(database_name)
            .send()
            .await
            .map_err(classify)?;

        let mut doc = Map::new();
        doc.insert("TableList".into(), tables_json(output.table_list()));
        put(&mut doc, "NextToken", json!(output.next_token()));
        Ok(ok_response(output.request_id(), doc))
    }

    async fn get_table(&self, name: &str, database_name: &str) -> CatalogResult {
        let output = self
            .client
            .get_table()
            .database_name(database_name)
            .name(name)
            .send()
            .await
            .map_err(classify)?;

        let mut doc = Map::new();
        if let Some(table) = output.table() {
            doc.insert("Table".into(), table_json(table));
        }
        Ok(ok_response(output.request_id(), doc))
    }

    async fn search_tables(&self, search_text: &str) -> CatalogResult {
        let output = self
            .client
            .search_tables()
            .search_text(search_text)
            .send()
            .await
            .map_err(classify)?;

        let mut doc = Map::new();
        doc.insert("TableList".into(), tables_json(output.table_list()));
        put(&mut doc, "NextToken", json!(output.next_token()));
        Ok(ok_response(output.request_id(), doc))
    }

    async fn delete_table(&self, name: &str, database_name: &str) -> CatalogResult {
        let output = self
            .client
            .delete_table()
            .database_name(database_name)
            .name(name)
            .send()
            .await
            .map_err(classify)?;

        Ok(ok_response(output.request_id(), Map::new()))
    }

    async fn update_table(&self, database_name: &str, input: TableInput) -> CatalogResult {
        let output = self
            .client
            .update_table()
            .database_name(database_name)
            .table_input(to_glue_input(input)?)
            .send()
            .await
            .map_err(classify)?;

        Ok(ok_response(output.request_id(), Map::new()))
    }
}

fn to_glue_input(input: TableInput) -> Result<glue::TableInput, CatalogError> {
    let descriptor = glue::StorageDescriptor::builder()
        .set_location(input.storage_descriptor.location)
        .build();

    glue::TableInput::builder()
        .name(input.name)
        .storage_descriptor(descriptor)
        .build()
        .map_err(|e| CatalogError::Request(e.to_string()))
}

/// Sort an SDK failure into a service error or a transport failure
fn classify<E>(err: SdkError<E, HttpResponse>) -> CatalogError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match (err.as_service_error(), err.raw_response()) {
        (Some(service), Some(raw)) => {
            service_error(service.code(), service.message(), raw.status().as_u16())
                .unwrap_or_else(|| CatalogError::Transport(DisplayErrorContext(&err).to_string()))
        }
        _ => CatalogError::Transport(DisplayErrorContext(&err).to_string()),
    }
}

/// A service error is only usable when the service named it
fn service_error(code: Option<&str>, message: Option<&str>, status: u16) -> Option<CatalogError> {
    code.filter(|c| !c.is_empty())
        .map(|code| CatalogError::service(code, message.unwrap_or_default(), status))
}

/// The SDK turns every non-2xx reply into an `SdkError`, so a returned
/// output always carries 200 and the non-200 path only comes from other clients.
fn ok_response(request_id: Option<&str>, mut doc: Map<String, Value>) -> CatalogResponse {
    doc.insert(
        "ResponseMetadata".into(),
        json!({"RequestId": request_id, "HTTPStatusCode": HTTP_OK}),
    );
    CatalogResponse::new(HTTP_OK, Value::Object(doc))
}

/// Insert `value` unless it is null
fn put(doc: &mut Map<String, Value>, key: &str, value: Value) {
    if !value.is_null() {
        doc.insert(key.to_string(), value);
    }
}

fn timestamp(time: Option<&DateTime>) -> Value {
    time.and_then(|t| t.fmt(DateTimeFormat::DateTime).ok())
        .map(Value::String)
        .unwrap_or(Value::Null)
}

fn tables_json(tables: &[Table]) -> Value {
    Value::Array(tables.iter().map(table_json).collect())
}

fn table_json(table: &Table) -> Value {
    let mut doc = Map::new();
    doc.insert("Name".into(), json!(table.name()));
    put(&mut doc, "DatabaseName", json!(table.database_name()));
    put(&mut doc, "Description", json!(table.description()));
    put(&mut doc, "Owner", json!(table.owner()));
    put(&mut doc, "CreateTime", timestamp(table.create_time()));
    put(&mut doc, "UpdateTime", timestamp(table.update_time()));
    put(&mut doc, "LastAccessTime", timestamp(table.last_access_time()));
    put(&mut doc, "LastAnalyzedTime", timestamp(table.last_analyzed_time()));
    put(&mut doc, "Retention", json!(table.retention()));
    if let Some(descriptor) = table.storage_descriptor() {
        doc.insert("StorageDescriptor".into(), storage_descriptor_json(descriptor));
    }
    if !table.partition_keys().is_empty() {
        doc.insert("PartitionKeys".into(), columns_json(table.partition_keys()));
    }
    put(&mut doc, "ViewOriginalText", json!(table.view_original_text()));
    put(&mut doc, "ViewExpandedText", json!(table.view_expanded_text()));
    put(&mut doc, "TableType", json!(table.table_type()));
    put(&mut doc, "Parameters", json!(table.parameters()));
    put(&mut doc, "CreatedBy", json!(table.created_by()));
    put(
        &mut doc,
        "IsRegisteredWithLakeFormation",
        json!(table.is_registered_with_lake_formation()),
    );
    put(&mut doc, "CatalogId", json!(table.catalog_id()));
    put(&mut doc, "VersionId", json!(table.version_id()));
    Value::Object(doc)
}

fn storage_descriptor_json(descriptor: &glue::StorageDescriptor) -> Value {
    let mut doc = Map::new();
    doc.insert("Columns".into(), columns_json(descriptor.columns()));
    put(&mut doc, "Location", json!(descriptor.location()));
    put(&mut doc, "InputFormat", json!(descriptor.input_format()));
    put(&mut doc, "OutputFormat", json!(descriptor.output_format()));
    put(&mut doc, "Compressed", json!(descriptor.compressed()));
    put(&mut doc, "NumberOfBuckets", json!(descriptor.number_of_buckets()));
    if let Some(serde_info) = descriptor.serde_info() {
        doc.insert("SerdeInfo".into(), serde_info_json(serde_info));
    }
    doc.insert("BucketColumns".into(), json!(descriptor.bucket_columns()));
    put(&mut doc, "Parameters", json!(descriptor.parameters()));
    put(
        &mut doc,
        "StoredAsSubDirectories",
        json!(descriptor.stored_as_sub_directories()),
    );
    Value::Object(doc)
}

fn serde_info_json(info: &SerDeInfo) -> Value {
    let mut doc = Map::new();
    put(&mut doc, "Name", json!(info.name()));
    put(&mut doc, "SerializationLibrary", json!(info.serialization_library()));
    put(&mut doc, "Parameters", json!(info.parameters()));
    Value::Object(doc)
}

fn columns_json(columns: &[Column]) -> Value {
    Value::Array(
        columns
            .iter()
            .map(|column| {
                let mut doc = Map::new();
                doc.insert("Name".into(), json!(column.name()));
                put(&mut doc, "Type", json!(column.r#type()));
                put(&mut doc, "Comment", json!(column.comment()));
                put(&mut doc, "Parameters", json!(column.parameters()));
                Value::Object(doc)
            })
            .collect(),
    )
}
