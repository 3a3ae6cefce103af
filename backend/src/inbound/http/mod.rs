//! HTTP inbound adapter: server-rendered pages and form commands.

pub mod auth;
pub mod commands;
pub mod error;
pub mod health;
pub mod layout;
pub mod pages;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::HttpResult;

/// Register every page, command and sign-in route.
///
/// Health probes and middleware are wired by the server; this only covers
/// the application routes so tests can mount them on a bare `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(pages::search)
        .service(pages::article_activity)
        .service(pages::article_meta)
        .service(pages::legacy_article)
        .service(pages::group)
        .service(pages::legacy_group)
        .service(pages::user_following)
        .service(pages::user_saved)
        .service(commands::follow)
        .service(commands::unfollow)
        .service(commands::save_article)
        .service(commands::unsave_article)
        .service(commands::respond)
        .service(auth::log_in_form)
        .service(auth::log_in)
        .service(auth::log_out);
}
