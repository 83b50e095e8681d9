//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the employee endpoints and the wire schemas. The
//! document is served as JSON at `/v3/api-docs` and rendered by Swagger UI.

use utoipa::OpenApi;

use super::dto::{ErrorBody, SkillInfo};

/// OpenAPI document for the employee API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Skills API",
        version = "1.0",
        description = "API demonstrating dependency injection with employee skills"
    ),
    external_docs(
        url = "https://actix.rs/docs/",
        description = "actix-web Documentation"
    ),
    paths(
        super::employees::get_work_output,
        super::employees::get_skills,
    ),
    components(schemas(SkillInfo, ErrorBody)),
    tags(
        (name = "Employee Management", description = "APIs for managing employees and skills")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Employee Skills API");
        assert_eq!(doc.info.version, "1.0");
        assert_eq!(
            doc.info.description.as_deref(),
            Some("API demonstrating dependency injection with employee skills")
        );
        assert!(doc.external_docs.is_some());
    }

    #[test]
    fn test_paths_registered() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        for path in ["/api/employees/work", "/api/employees/skills"] {
            let get = &doc["paths"][path]["get"];
            assert!(get.is_object(), "missing GET {path}");
            assert_eq!(get["tags"][0], "Employee Management");
        }
        assert_eq!(
            doc["paths"]["/api/employees/skills"]["get"]["responses"]["404"]["description"],
            "No skills found"
        );
    }

    #[test]
    fn test_schemas_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;

        assert!(schemas.contains_key("SkillInfo"));
        assert!(schemas.contains_key("ErrorBody"));
    }
}
