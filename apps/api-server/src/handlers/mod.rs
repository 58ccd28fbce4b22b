//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Routes sit at the root and mutations accept GET, matching the paths the
/// existing guestbook clients call.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/health", web::get().to(health::health_check))
    .route("/list", web::get().to(posts::list))
    .route("/search", web::get().to(posts::search))
    .route("/posts/{id}", web::get().to(posts::get))
    .route("/add", web::get().to(posts::add))
    .route("/add", web::post().to(posts::add))
    .route("/delete", web::get().to(posts::delete))
    .route("/delete", web::post().to(posts::delete))
    .route("/heart", web::get().to(posts::heart))
    .route("/heart", web::post().to(posts::heart));
}
