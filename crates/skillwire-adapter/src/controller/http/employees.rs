//! Employee endpoints. Document endpoints in OpenAPI via Utoipa.

use actix_web::{get, http::header::ContentType, web, HttpResponse};
use tracing::{debug, info};

use super::dto::{ErrorBody, SkillInfo};
use super::error::ApiError;
use super::state::HttpState;

/// Body returned by `GET /api/employees/work`
pub const WORK_ACKNOWLEDGEMENT: &str = "Employee completed work with injected skills";

/// Get employee work output.
///
/// Runs one work pass; the transcript goes to the server's output, not the
/// response body.
#[utoipa::path(
    get,
    path = "/api/employees/work",
    tag = "Employee Management",
    responses(
        (
            status = 200,
            description = "Successful operation",
            body = String,
            content_type = "text/plain"
        ),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[get("/work")]
pub async fn get_work_output(state: web::Data<HttpState>) -> Result<HttpResponse, ApiError> {
    let report = state.perform_work.execute()?;
    info!(skills_used = report.skills_used, "employee work requested");

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(WORK_ACKNOWLEDGEMENT))
}

/// Get employee skills.
///
/// Returns the skills available to the employee, in the order they were
/// given to it.
#[utoipa::path(
    get,
    path = "/api/employees/skills",
    tag = "Employee Management",
    responses(
        (status = 200, description = "List of skills retrieved successfully", body = [SkillInfo]),
        (status = 404, description = "No skills found")
    )
)]
#[get("/skills")]
pub async fn get_skills(state: web::Data<HttpState>) -> Result<web::Json<Vec<SkillInfo>>, ApiError> {
    let skills: Vec<SkillInfo> = state
        .list_skills
        .execute()?
        .into_iter()
        .map(SkillInfo::from)
        .collect();
    debug!(count = skills.len(), "listing employee skills");

    Ok(web::Json(skills))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::http::configure;
    use crate::output::BufferOutput;
    use actix_web::{http::StatusCode, test as actix_test, App};
    use rstest::rstest;
    use serde_json::{json, Value};
    use skillwire_domain::{Employee, Skill, WorkOutput};
    use std::io::{self, Write};
    use std::sync::Arc;

    struct Unplugged;

    impl WorkOutput for Unplugged {
        fn emit(
            &self,
            _write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>,
        ) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }
    }

    fn state(skills: Vec<Arc<dyn Skill>>, output: Arc<dyn WorkOutput>) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(Employee::new(skills)), output))
    }

    macro_rules! app {
        ($state:expr) => {{
            let state = $state;
            actix_test::init_service(App::new().configure(move |cfg| configure(cfg, state))).await
        }};
    }

    #[actix_web::test]
    async fn test_skills_lists_names_in_order() {
        let app = app!(state(skills::default_skills(), Arc::new(BufferOutput::new())));

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/skills")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!([{"name": "Java Programming"}, {"name": "Database Management"}])
        );
    }

    #[actix_web::test]
    async fn test_skills_not_found_when_empty() {
        let app = app!(state(Vec::new(), Arc::new(BufferOutput::new())));

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/skills")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(actix_test::read_body(response).await.is_empty());
    }

    #[rstest]
    #[case::demo(skills::default_skills(), 2)]
    #[case::empty(Vec::new(), 0)]
    #[actix_web::test]
    async fn test_work_acknowledges_and_writes_transcript(
        #[case] given: Vec<Arc<dyn Skill>>,
        #[case] expected_uses: usize,
    ) {
        let output = BufferOutput::new();
        let app = app!(state(given, Arc::new(output.clone())));

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/work")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        let body = actix_test::read_body(response).await;
        assert_eq!(body, WORK_ACKNOWLEDGEMENT.as_bytes());

        let lines = output.lines();
        assert_eq!(lines[0], "Employee is working with injected skills:");
        let uses = lines.iter().filter(|l| l.starts_with("- Using skill: ")).count();
        assert_eq!(uses, expected_uses);
    }

    #[actix_web::test]
    async fn test_work_output_failure_is_500() {
        let app = app!(state(skills::default_skills(), Arc::new(Unplugged)));

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/work")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = actix_test::read_body_json(response).await;
        assert_eq!(body.code, "internal_error");
    }

    #[actix_web::test]
    async fn test_openapi_document_is_served() {
        let app = app!(state(skills::default_skills(), Arc::new(BufferOutput::new())));

        let request = actix_test::TestRequest::get()
            .uri("/v3/api-docs")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let doc: Value = actix_test::read_body_json(response).await;
        assert_eq!(doc["info"]["title"], "Employee Skills API");
        assert!(doc["paths"]["/api/employees/skills"]["get"].is_object());
    }

    #[actix_web::test]
    async fn test_swagger_ui_is_served() {
        let app = app!(state(skills::default_skills(), Arc::new(BufferOutput::new())));

        let request = actix_test::TestRequest::get()
            .uri("/swagger-ui/")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        assert!(!body.is_empty());
    }
}
