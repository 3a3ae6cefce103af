//! Session helpers so handlers never touch the cookie store directly.
//!
//! Handlers see a signed-in viewer as a [`UserId`]; an absent or tampered
//! value reads as signed out.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype over the actix session exposing viewer operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Remember `user_id` as the signed-in viewer.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Forget the viewer and drop the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }

    /// The signed-in viewer, if any.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match UserId::new(raw) {
            Ok(id) => Ok(Some(id)),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                Ok(None)
            }
        }
    }

    /// The viewer for read-only pages; unreadable sessions count as signed out.
    pub fn viewer(&self) -> Option<UserId> {
        self.user_id().unwrap_or_else(|error| {
            warn!(%error, "treating unreadable session as signed out");
            None
        })
    }

    /// The signed-in viewer or `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("You need to log in to do that."))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
