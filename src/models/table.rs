//! Table-related models and DTOs

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating or updating a catalog table
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TableSpec {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255, example = "orders")]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "DatabaseName must be between 1 and 255 characters"
    ))]
    #[schema(min_length = 1, max_length = 255, example = "sales_db")]
    pub database_name: String,

    /// Storage location, e.g. `s3://bucket/prefix/`
    #[serde(default)]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(name: &str, database_name: &str) -> TableSpec {
        TableSpec {
            name: name.to_string(),
            database_name: database_name.to_string(),
            location: None,
        }
    }

    #[test]
    fn test_valid_spec() {
        assert!(spec("orders", "sales_db").validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let errors = spec("", "sales_db").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_long_database_name_rejected() {
        let errors = spec("orders", &"d".repeat(256)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("database_name"));
    }

    #[test]
    fn test_length_counts_characters() {
        // 255 two-byte characters is still within the limit
        assert!(spec(&"é".repeat(255), "sales_db").validate().is_ok());
    }

    #[test]
    fn test_deserialize_pascal_case() {
        let parsed: TableSpec = serde_json::from_value(json!({
            "Name": "orders",
            "DatabaseName": "sales_db",
            "Location": "s3://bucket/orders/"
        }))
        .unwrap();

        assert_eq!(parsed.name, "orders");
        assert_eq!(parsed.database_name, "sales_db");
        assert_eq!(parsed.location.as_deref(), Some("s3://bucket/orders/"));
    }

    #[test]
    fn test_location_optional() {
        let parsed: TableSpec =
            serde_json::from_value(json!({"Name": "orders", "DatabaseName": "sales_db"}))
                .unwrap();
        assert!(parsed.location.is_none());
    }
}
