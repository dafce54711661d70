//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and non-numeric ids share the problem format.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _req| bad_request(err)))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list))
                        .route("", web::post().to(posts::create))
                        .route("/{id}", web::get().to(posts::show))
                        .route("/{id}", web::put().to(posts::update))
                        .route("/{id}", web::delete().to(posts::delete))
                        .route("/{id}/like", web::post().to(posts::like)),
                ),
        );
}

fn bad_request(err: impl std::fmt::Display) -> error::Error {
    AppError::BadRequest(err.to_string()).into()
}
