use axum::Json;
use axum::extract::State;
use carelink_workflow::ports::{Clock, IdentityVerifier, MailSender, MapProvider, ProfileRepository};
use carelink_workflow::workflows;

use crate::dto::request::SendMailRequest;
use crate::dto::response::OkResponse;
use crate::errors::{ApiError, FailureMessage};
use crate::extract::JsonObject;
use crate::state::AppState;

// =============================================================================
// Send Mail Handler
// =============================================================================

pub async fn send_mail<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
    JsonObject(request): JsonObject<SendMailRequest>,
) -> Result<Json<OkResponse>, ApiError>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    workflows::send_mail(state.mailer.as_ref(), request.into())
        .await
        .map_err(|error| ApiError::from_workflow(error, FailureMessage::SendMail))?;

    Ok(Json(OkResponse::new()))
}
