//! Action handlers: UpdateAction dispatch and background task spawning

use acctui_client::{ApiClient, HttpTransport};
use acctui_core::Error;
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::field_view::LinkRequest;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task that reports back over
/// `msg_tx`.
pub fn handle_action<T>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: &ApiClient<T>)
where
    T: HttpTransport + Sync + 'static,
{
    let api = api.clone();
    match action {
        UpdateAction::FetchProfile => {
            tokio::spawn(async move {
                let msg = match api.fetch_profile().await {
                    Ok(profile) => Message::ProfileLoaded(profile),
                    Err(e) => {
                        log_failure("Profile load", &e);
                        Message::ProfileLoadFailed(e.to_string())
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::SaveField {
            index,
            attribute,
            value,
        } => {
            tokio::spawn(async move {
                let msg = match api.save_field(attribute, &value).await {
                    Ok(outcome) => Message::FieldSaveCompleted { index, outcome },
                    Err(e) => {
                        log_failure("Save", &e);
                        Message::FieldSaveFailed {
                            index,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::ActivateLink { index, request } => {
            tokio::spawn(async move {
                let result = match &request {
                    LinkRequest::Plain { href } => api.activate_link(href).await,
                    LinkRequest::PasswordReset { href, email } => {
                        api.request_password_reset(href, email).await
                    }
                };
                let msg = match result {
                    Ok(outcome) => Message::LinkCompleted { index, outcome },
                    Err(e) => {
                        log_failure("Link request", &e);
                        Message::LinkFailed {
                            index,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::SubmitRegistration { pairs } => {
            tokio::spawn(async move {
                let msg = match api.register(pairs).await {
                    Ok(outcome) => Message::RegistrationCompleted(outcome),
                    Err(e) => {
                        log_failure("Registration", &e);
                        Message::RegistrationFailed(e.to_string())
                    }
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Transport hiccups are warnings; anything else points at a local problem
fn log_failure(what: &str, e: &Error) {
    if e.is_recoverable() {
        warn!("{} failed: {}", what, e);
    } else {
        error!("{} failed: {:?}", what, e);
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        warn!("Message channel closed before a completion could be delivered");
    }
}
