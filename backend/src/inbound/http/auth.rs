//! Sign-in and sign-out.
//!
//! Sign-in is a fixture flow: the visitor names a user id and, if the user
//! directory knows it, the id is stored in the session cookie.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use askama::Template;
use serde::Deserialize;
use tracing::info;

use super::HttpResult;
use super::layout::page_response;
use super::session::SessionContext;
use super::state::HttpState;
use crate::domain::ports::DataError;
use crate::domain::{Error, HtmlFragment, UserId};
use crate::pages::{OpenGraph, Page};

#[derive(Template)]
#[template(path = "pages/log_in.html")]
struct LogInTemplate;

/// Form body of `POST /log-in`.
#[derive(Debug, Deserialize)]
pub struct LogInForm {
    pub userid: String,
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[get("/log-in")]
pub async fn log_in_form(session: SessionContext) -> HttpResult<HttpResponse> {
    let content = LogInTemplate
        .render()
        .map(HtmlFragment::trusted)
        .map_err(|err| Error::internal(format!("log-in template failed: {err}")))?;
    let page = Page {
        title: "Log in".to_owned(),
        content,
        open_graph: OpenGraph {
            title: "Log in".to_owned(),
            description: "Log in to follow groups and save articles.".to_owned(),
        },
    };
    Ok(page_response(
        HttpResponse::Ok(),
        &page,
        session.viewer().as_ref(),
    ))
}

#[post("/log-in")]
pub async fn log_in(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LogInForm>,
) -> HttpResult<HttpResponse> {
    let user_id = UserId::new(form.userid.trim())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    match state.users.get_user_details(&user_id).await {
        Ok(_) => {}
        Err(DataError::NotFound) => {
            return Err(Error::unauthorized(format!("Unknown user '{user_id}'")));
        }
        Err(DataError::Unavailable) => {
            return Err(Error::service_unavailable(
                "We couldn’t check your account right now. Please try again later.",
            ));
        }
    }
    session.persist_user(&user_id)?;
    info!(%user_id, "user logged in");
    Ok(redirect_home())
}

#[get("/log-out")]
pub async fn log_out(session: SessionContext) -> HttpResponse {
    session.clear();
    redirect_home()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    use crate::domain::ports::MockUserDirectory;
    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::{fixture_state_ports, test_session_middleware};

    fn state_with_users(users: MockUserDirectory) -> HttpState {
        HttpState::new(HttpStatePorts {
            users: Arc::new(users),
            ..fixture_state_ports()
        })
    }

    async fn post_log_in(users: MockUserDirectory, userid: &str) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_users(users)))
                .wrap(test_session_middleware())
                .service(log_in),
        )
        .await;
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/log-in")
                .set_form([("userid", userid)])
                .to_request(),
        )
        .await
    }

    #[rstest]
    #[actix_web::test]
    async fn known_users_get_a_session() {
        let res = post_log_in(MockUserDirectory::new(), "").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let mut users = MockUserDirectory::new();
        users.expect_get_user_details().returning(|id| {
            Ok(crate::domain::ports::UserDetails {
                user_id: id.clone(),
                handle: "reader".to_owned(),
                display_name: "Reader".to_owned(),
                avatar_url: String::new(),
            })
        });
        let res = post_log_in(users, "reader-1").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert!(res.response().cookies().any(|cookie| cookie.name() == "session"));
    }

    #[rstest]
    #[case(DataError::NotFound, StatusCode::UNAUTHORIZED)]
    #[case(DataError::Unavailable, StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn directory_failures_refuse_log_in(#[case] failure: DataError, #[case] status: StatusCode) {
        let mut users = MockUserDirectory::new();
        users
            .expect_get_user_details()
            .returning(move |_| Err(failure.clone()));
        let res = post_log_in(users, "stranger").await;
        assert_eq!(res.status(), status);
    }

    #[rstest]
    #[actix_web::test]
    async fn log_in_form_renders() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .service(log_in_form),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/log-in").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let html = String::from_utf8(body.to_vec()).expect("utf-8");
        assert!(html.contains("name=\"userid\""));
    }

    #[rstest]
    #[actix_web::test]
    async fn log_out_redirects_home() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .service(log_out),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/log-out").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }
}
