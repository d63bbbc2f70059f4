use std::ops::Deref;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::error::InternalError;
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web_lab::middleware::Next;
use uuid::Uuid;

use crate::session_state::TypedSession;
use crate::utils::error_500;
use crate::utils::redirect;

/// Id of the signed-in user, inserted into request extensions by
/// [`reject_anonymous_users`] so handlers can take it via
/// `web::ReqData<UserId>`
#[derive(Copy, Clone, Debug)]
pub struct UserId(Uuid);

impl std::fmt::Display for UserId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Deref for UserId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target { &self.0 }
}

/// Wrap a route to require a session; anonymous visitors get bounced to the
/// login form instead of reaching the handler.
///
/// Only the posting endpoint is wrapped. Reading blurbs and the JSON API
/// remain open to anyone.
pub async fn reject_anonymous_users(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    match session.get_user_id().map_err(error_500)? {
        Some(user_id) => {
            req.extensions_mut().insert(UserId(user_id));
            next.call(req).await
        }
        None => {
            let response = redirect("/login");
            let err = anyhow::anyhow!("The user has not logged in");
            Err(InternalError::from_response(err, response).into())
        }
    }
}
