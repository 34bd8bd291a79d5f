//! `OpenAPI` (3.1) document for the table endpoints.
//!
//! Served at `/table/openapi.json`.

use utoipa::OpenApi;

/// `OpenAPI` documentation for the `/table/*` API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Glue Table API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Create, list, fetch, search, update and delete Glue catalog tables"
    ),
    paths(
        crate::routes::table::create_table,
        crate::routes::table::get_tables,
        crate::routes::table::get_table,
        crate::routes::table::search_table,
        crate::routes::table::delete_table,
        crate::routes::table::update_table,
    ),
    components(
        schemas(
            crate::models::TableSpec,
            crate::models::ResponseEnvelope,
        )
    ),
    tags(
        (name = "tables", description = "Catalog table operations"),
    )
)]
pub struct ApiDoc;

/// Returns the `OpenAPI` document.
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_has_schemas() {
        let doc = openapi();
        let components = doc.components.expect("components");

        assert!(components.schemas.contains_key("TableSpec"));
        assert!(components.schemas.contains_key("ResponseEnvelope"));
    }

    #[test]
    fn test_document_serializes() {
        let json = serde_json::to_value(openapi()).unwrap();
        assert_eq!(json["info"]["title"], "Glue Table API");
    }
}
