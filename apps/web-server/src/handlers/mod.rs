//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // A non-numeric {post_id} is a missing post, not a malformed request
    cfg.app_data(
        web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()),
    )
    .route("/", web::get().to(posts::home))
    .route("/home", web::get().to(posts::home))
    .route("/create", web::get().to(posts::new_post))
    .route("/create", web::post().to(posts::create_post))
    .route("/post/{post_id}", web::get().to(posts::view_post))
    .route("/post/{post_id}/edit", web::get().to(posts::edit_post))
    .route("/post/{post_id}/edit", web::post().to(posts::update_post))
    .route("/post/{post_id}/delete", web::post().to(posts::delete_post))
    .route("/health", web::get().to(health::health_check));
}
