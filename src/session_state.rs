use std::future::ready;
use std::future::Ready;

use actix_session::Session;
use actix_session::SessionExt;
use actix_session::SessionGetError;
use actix_session::SessionInsertError;
use actix_web::FromRequest;
use uuid::Uuid;

/// Wrapper around `actix_session::Session` so the session keys are spelled
/// in exactly one place. The only state we keep is the signed-in user's id;
/// everything else rides in flash messages.
pub struct TypedSession(Session);

impl TypedSession {
    const USER_ID_KEY: &'static str = "user_id";

    /// Rotate the session id; called at login to rule out session fixation
    pub fn renew(&self) { self.0.renew(); }

    pub fn insert_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<(), SessionInsertError> {
        self.0.insert(Self::USER_ID_KEY, user_id)
    }

    pub fn get_user_id(&self) -> Result<Option<Uuid>, SessionGetError> {
        self.0.get(Self::USER_ID_KEY)
    }

    pub fn log_out(&self) { self.0.purge() }
}

impl FromRequest for TypedSession {
    // `Session` already implements `FromRequest`; reuse its error type
    // instead of inventing one
    type Error = <Session as FromRequest>::Error;

    // no I/O happens here, so the future is immediately ready
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
