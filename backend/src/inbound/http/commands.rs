//! Command handlers for the HTML forms.
//!
//! ```text
//! POST /follow          groupid=...
//! POST /unfollow        groupid=...
//! POST /save-article    articleid=...
//! POST /unsave-article  articleid=...
//! POST /respond         reviewid=...&command=respond-helpful
//! ```
//!
//! Every command needs a signed-in viewer and answers with `303 See Other`
//! back to the page the form was submitted from.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::Deserialize;

use super::HttpResult;
use super::session::SessionContext;
use super::state::HttpState;
use crate::domain::responses::UnknownResponseCommand;
use crate::domain::{
    Doi, DomainEvent, Error, GroupId, IdValidationError, ResponseCommand, ReviewId,
};

/// Form body naming a group.
#[derive(Debug, Deserialize)]
pub struct GroupForm {
    pub groupid: String,
}

/// Form body naming an article.
#[derive(Debug, Deserialize)]
pub struct ArticleForm {
    pub articleid: String,
}

/// Form body of a review response button.
#[derive(Debug, Deserialize)]
pub struct RespondForm {
    pub reviewid: String,
    pub command: String,
}

fn back_to_referer(req: &HttpRequest) -> HttpResponse {
    let target = req
        .headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/");
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target))
        .finish()
}

fn parse_group(raw: &str) -> HttpResult<GroupId> {
    GroupId::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

fn parse_article(raw: &str) -> HttpResult<Doi> {
    Doi::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

async fn commit(
    state: &HttpState,
    req: &HttpRequest,
    events: Vec<DomainEvent>,
) -> HttpResult<HttpResponse> {
    state.commands.commit(&events).await?;
    Ok(back_to_referer(req))
}

#[post("/follow")]
pub async fn follow(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<GroupForm>,
) -> HttpResult<HttpResponse> {
    let user = session.require_user_id()?;
    let group = parse_group(&form.groupid)?;
    let events = state.commands.follow(&user, &group).await?;
    commit(&state, &req, events).await
}

#[post("/unfollow")]
pub async fn unfollow(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<GroupForm>,
) -> HttpResult<HttpResponse> {
    let user = session.require_user_id()?;
    let group = parse_group(&form.groupid)?;
    let events = state.commands.unfollow(&user, &group).await?;
    commit(&state, &req, events).await
}

#[post("/save-article")]
pub async fn save_article(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ArticleForm>,
) -> HttpResult<HttpResponse> {
    let user = session.require_user_id()?;
    let doi = parse_article(&form.articleid)?;
    let events = state.commands.save_article(&user, &doi).await?;
    commit(&state, &req, events).await
}

#[post("/unsave-article")]
pub async fn unsave_article(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ArticleForm>,
) -> HttpResult<HttpResponse> {
    let user = session.require_user_id()?;
    let doi = parse_article(&form.articleid)?;
    let events = state.commands.unsave_article(&user, &doi).await?;
    commit(&state, &req, events).await
}

/// Record a helpful / not-helpful vote or revoke one.
#[post("/respond")]
pub async fn respond(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RespondForm>,
) -> HttpResult<HttpResponse> {
    let user = session.require_user_id()?;
    let review: ReviewId = form
        .reviewid
        .parse()
        .map_err(|err: IdValidationError| Error::invalid_request(err.to_string()))?;
    let command: ResponseCommand = form
        .command
        .parse()
        .map_err(|err: UnknownResponseCommand| Error::invalid_request(err.to_string()))?;
    let events = state.commands.respond(&user, &review, command).await?;
    commit(&state, &req, events).await
}
