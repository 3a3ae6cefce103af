//! Page handlers.
//!
//! ```text
//! GET /
//! GET /articles?query=...&category=articles|groups
//! GET /articles/activity/{doi}
//! GET /articles/meta/{doi}
//! GET /groups/{id}
//! GET /users/{id}
//! GET /users/{id}/following
//! ```
//!
//! Legacy paths `/articles/{doi}` and `/editorial-communities/{id}` redirect
//! permanently to their current locations.

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};

use super::HttpResult;
use super::layout::page_response;
use super::session::SessionContext;
use super::state::HttpState;
use crate::domain::{Doi, Error, GroupId, UserId};
use crate::pages::{
    SearchParams, UserTab, article_activity_page, article_meta_page, group_page, home_page,
    search_page, user_page,
};

fn parse_doi(raw: &str) -> HttpResult<Doi> {
    Doi::new(raw).map_err(|_| Error::not_found(format!("`{raw}` not found")))
}

fn parse_group_id(raw: &str) -> HttpResult<GroupId> {
    GroupId::new(raw)
        .map_err(|_| Error::not_found(format!("Editorial community id '{raw}' not found")))
}

fn parse_user_id(raw: &str) -> HttpResult<UserId> {
    UserId::new(raw).map_err(|_| Error::not_found(format!("User '{raw}' not found")))
}

/// Home page with the viewer's feed.
#[get("/")]
pub async fn home(state: web::Data<HttpState>, session: SessionContext) -> HttpResult<HttpResponse> {
    let viewer = session.viewer();
    let page = home_page(&state.pages, viewer.as_ref()).await?;
    Ok(page_response(HttpResponse::Ok(), &page, viewer.as_ref()))
}

/// Search results; never indexed by crawlers.
#[get("/articles")]
pub async fn search(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<SearchParams>,
) -> HttpResult<HttpResponse> {
    let viewer = session.viewer();
    let page = search_page(&state.pages, &params, viewer.as_ref()).await?;
    let mut builder = HttpResponse::Ok();
    builder.insert_header(("X-Robots-Tag", "noindex"));
    Ok(page_response(builder, &page, viewer.as_ref()))
}

/// Evaluations and version history of one article.
#[get("/articles/activity/{doi:.+}")]
pub async fn article_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResult<HttpResponse> {
    let doi = parse_doi(&path)?;
    let viewer = session.viewer();
    let page = article_activity_page(&state.pages, &doi, viewer.as_ref()).await?;
    Ok(page_response(HttpResponse::Ok(), &page, viewer.as_ref()))
}

/// Abstract and authors of one article.
#[get("/articles/meta/{doi:.+}")]
pub async fn article_meta(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResult<HttpResponse> {
    let doi = parse_doi(&path)?;
    let viewer = session.viewer();
    let page = article_meta_page(&state.pages, &doi, viewer.as_ref()).await?;
    Ok(page_response(HttpResponse::Ok(), &page, viewer.as_ref()))
}

/// Old article URLs point at the activity tab.
#[get("/articles/{doi:.+}")]
pub async fn legacy_article(path: web::Path<String>) -> HttpResult<HttpResponse> {
    let doi = parse_doi(&path)?;
    Ok(HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, format!("/articles/activity/{doi}")))
        .finish())
}

/// One editorial community.
#[get("/groups/{id}")]
pub async fn group(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResult<HttpResponse> {
    let group_id = parse_group_id(&path)?;
    let viewer = session.viewer();
    let page = group_page(&state.pages, &group_id, viewer.as_ref()).await?;
    Ok(page_response(HttpResponse::Ok(), &page, viewer.as_ref()))
}

#[get("/editorial-communities/{id}")]
pub async fn legacy_group(path: web::Path<String>) -> HttpResult<HttpResponse> {
    let group_id = parse_group_id(&path)?;
    Ok(HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, format!("/groups/{group_id}")))
        .finish())
}

async fn user_tab(
    state: &HttpState,
    session: &SessionContext,
    raw_id: &str,
    tab: UserTab,
) -> HttpResult<HttpResponse> {
    let user_id = parse_user_id(raw_id)?;
    let viewer = session.viewer();
    let page = user_page(&state.pages, &user_id, tab, viewer.as_ref()).await?;
    Ok(page_response(HttpResponse::Ok(), &page, viewer.as_ref()))
}

/// A user's saved articles.
#[get("/users/{id}")]
pub async fn user_saved(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResult<HttpResponse> {
    user_tab(&state, &session, &path, UserTab::SavedArticles).await
}

/// Groups a user follows.
#[get("/users/{id}/following")]
pub async fn user_following(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResult<HttpResponse> {
    user_tab(&state, &session, &path, UserTab::FollowedGroups).await
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    use crate::inbound::http::test_utils::{fixture_state, test_session_middleware};

    async fn get(uri: &str) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fixture_state()))
                .wrap(test_session_middleware())
                .configure(crate::inbound::http::configure),
        )
        .await;
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    fn location(res: &actix_web::dev::ServiceResponse) -> Option<&str> {
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[rstest]
    #[actix_web::test]
    async fn home_renders_inside_layout() {
        let res = get("/").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let html = String::from_utf8(body.to_vec()).expect("utf-8");
        assert!(html.contains("<title>Home | Reviewhub</title>"));
    }

    #[rstest]
    #[actix_web::test]
    async fn search_is_not_indexed() {
        let res = get("/articles?query=covid").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get("X-Robots-Tag")
                .and_then(|value| value.to_str().ok()),
            Some("noindex")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn activity_page_accepts_dois_with_slashes() {
        let res = get("/articles/activity/10.1101/2020.07.04.187583").await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("/articles/activity/10.7554/eLife.1")]
    #[case("/articles/meta/10.7554/eLife.1")]
    #[case("/articles/activity/not-a-doi")]
    #[case("/groups/unknown")]
    #[actix_web::test]
    async fn missing_subjects_are_not_found(#[case] uri: &str) {
        let res = get(uri).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case("/articles/10.1101/2020.07.04.187583", "/articles/activity/10.1101/2020.07.04.187583")]
    #[case("/editorial-communities/g1", "/groups/g1")]
    #[actix_web::test]
    async fn legacy_paths_redirect_permanently(#[case] uri: &str, #[case] target: &str) {
        let res = get(uri).await;
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(location(&res), Some(target));
    }

    #[rstest]
    #[actix_web::test]
    async fn user_tabs_both_render() {
        assert_eq!(get("/users/reader-1").await.status(), StatusCode::OK);
        assert_eq!(get("/users/reader-1/following").await.status(), StatusCode::OK);
    }
}
