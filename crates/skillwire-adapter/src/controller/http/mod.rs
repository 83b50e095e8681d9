//! HTTP facade over the employee use cases
//!
//! Routes:
//! - `GET /api/employees/work`   - run a work pass, acknowledge with text
//! - `GET /api/employees/skills` - list skill names, 404 when there are none
//! - `GET /v3/api-docs`          - OpenAPI document
//! - `/swagger-ui/`              - Swagger UI over that document

pub mod doc;
pub mod dto;
pub mod employees;
pub mod error;
pub mod state;

pub use doc::ApiDoc;
pub use error::ApiError;
pub use state::HttpState;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const EMPLOYEES_SCOPE: &str = "/api/employees";
pub const OPENAPI_JSON_PATH: &str = "/v3/api-docs";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Register every route and the shared state on `cfg`
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<HttpState>) {
    cfg.app_data(state)
        .service(
            web::scope(EMPLOYEES_SCOPE)
                .service(employees::get_work_output)
                .service(employees::get_skills),
        )
        .service(
            SwaggerUi::new(format!("{SWAGGER_UI_PATH}/{{_:.*}}"))
                .url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
        );
}

/// Bind the facade to `bind_addr`
///
/// The returned server is not polled yet; await it to serve requests until
/// the process is interrupted.
pub fn bind(bind_addr: &str, state: HttpState) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new().configure(move |cfg| configure(cfg, state))
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "HTTP server listening");
    Ok(server)
}
