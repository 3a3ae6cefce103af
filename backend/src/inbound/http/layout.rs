//! Site chrome around composed pages.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, HttpResponseBuilder};
use askama::Template;
use tracing::error;

use crate::domain::{HtmlFragment, UserId};
use crate::pages::{OpenGraph, Page};

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    title: &'a str,
    open_graph: &'a OpenGraph,
    content: &'a HtmlFragment,
    viewer: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
    trace_id: Option<&'a str>,
}

/// Wrap `page` in the site layout.
#[must_use]
pub fn render_layout(page: &Page, viewer: Option<&UserId>) -> String {
    let layout = LayoutTemplate {
        title: &page.title,
        open_graph: &page.open_graph,
        content: &page.content,
        viewer: viewer.map(|user| user.as_ref()),
    };
    layout.render().unwrap_or_else(|err| {
        error!(error = %err, "layout template failed to render");
        page.content.to_string()
    })
}

/// A complete HTML response for `page`.
#[must_use]
pub fn page_response(
    mut builder: HttpResponseBuilder,
    page: &Page,
    viewer: Option<&UserId>,
) -> HttpResponse {
    builder
        .content_type(ContentType::html())
        .body(render_layout(page, viewer))
}

/// A complete HTML error page.
#[must_use]
pub fn error_page(status: StatusCode, message: &str, trace_id: Option<&str>) -> HttpResponse {
    let content = ErrorTemplate { message, trace_id }
        .render()
        .map_or_else(
            |err| {
                error!(error = %err, "error template failed to render");
                HtmlFragment::escape(message)
            },
            HtmlFragment::trusted,
        );
    let page = Page {
        title: "Error".to_owned(),
        content,
        open_graph: OpenGraph {
            title: "Error".to_owned(),
            description: message.to_owned(),
        },
    };
    let mut builder = HttpResponse::build(status);
    builder.insert_header((header::CACHE_CONTROL, "no-store"));
    page_response(builder, &page, None)
}
