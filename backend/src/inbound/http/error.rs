//! HTTP mapping for domain and page errors.
//!
//! Handlers return [`Error`]; failures render as HTML error pages inside the
//! site layout, carrying the request trace id in a header and on the page.

use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use super::layout::error_page;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::pages::{RenderPageError, RenderPageErrorKind};

/// Convenient result alias for HTTP handlers.
pub type HttpResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Something went wrong on our side. Please try again later.";

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self.code() {
            ErrorCode::InternalError => INTERNAL_MESSAGE,
            _ => self.message(),
        };
        let mut response = error_page(self.status_code(), message, self.trace_id());
        if let Some(value) = self
            .trace_id()
            .and_then(|id| HeaderValue::from_str(id).ok())
        {
            response
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        response
    }
}

impl From<RenderPageError> for Error {
    fn from(err: RenderPageError) -> Self {
        match err.kind {
            RenderPageErrorKind::NotFound => Self::not_found(err.message),
            RenderPageErrorKind::Unavailable => Self::service_unavailable(err.message),
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    async fn body_of(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf-8")
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("who"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("later"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), status);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_details_are_redacted() {
        let error = Error::internal("database password is hunter2").with_trace_id("trace-1");

        let response = error.error_response();

        assert_eq!(
            response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("trace-1")
        );
        let html = body_of(response).await;
        assert!(!html.contains("hunter2"));
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("trace-1"));
    }

    #[rstest]
    #[actix_web::test]
    async fn client_errors_show_their_message() {
        let html = body_of(Error::not_found("No such group").error_response()).await;
        assert!(html.contains("No such group"));
    }

    #[rstest]
    #[case(RenderPageError::not_found("x"), ErrorCode::NotFound)]
    #[case(RenderPageError::unavailable("y"), ErrorCode::ServiceUnavailable)]
    fn page_errors_map_to_codes(#[case] page_error: RenderPageError, #[case] code: ErrorCode) {
        assert_eq!(Error::from(page_error).code(), code);
    }
}
