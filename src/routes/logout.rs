use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;

use crate::session_state::TypedSession;
use crate::utils::error_500;
use crate::utils::redirect;

/// `POST /logout`
///
/// Back to the form page either way; a signed-out (or never signed-in)
/// visitor can still browse, only posting needs a session
pub async fn logout(session: TypedSession) -> Result<HttpResponse, actix_web::Error> {
    match session.get_user_id().map_err(error_500)? {
        None => Ok(redirect("/")),
        Some(_) => {
            session.log_out();
            FlashMessage::info("You have signed out.").send();
            Ok(redirect("/"))
        }
    }
}
