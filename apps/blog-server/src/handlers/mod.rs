//! HTTP handlers and route configuration.

mod api;
mod health;
mod posts;


use actix_web::{HttpRequest, error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(bad_payload))
        .app_data(web::JsonConfig::default().error_handler(json_bad_payload))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/posts", web::get().to(api::list_posts))
                .route("/posts", web::post().to(api::create_post)),
        )
        // HTML views
        .route("/", web::get().to(posts::index))
        .route("/", web::post().to(posts::create))
        .route("/new", web::get().to(posts::new_form))
        .route("/{id}", web::get().to(posts::show))
        .route("/{id}", web::put().to(posts::update))
        .route("/{id}", web::delete().to(posts::destroy))
        .route("/{id}/edit", web::get().to(posts::edit));
}

fn bad_payload(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn json_bad_payload(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
