use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::{debug, info};
use url::Url;

use crate::{
    error::AppError,
    models::{participant::Participant, trip::Trip},
};

const CONFIRMATION_SUBJECT: &str = "Confirm your trip to {destination}";

const CONFIRMATION_TEMPLATE: &str = "Hi {name},\n\nYou have been invited to a trip to {destination} from {starts_at} to {ends_at}.\n\nConfirm your presence here: {confirm_link}\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ConfirmationEmail {
    pub fn render(
        trip: &Trip,
        participant: &Participant,
        public_url: &Url,
    ) -> Result<Self, AppError> {
        let confirm_link = public_url
            .join(&format!("participants/{}/confirm", participant.id))
            .map_err(|err| AppError::Other(err.into()))?;
        let name = if participant.name.trim().is_empty() {
            participant.email.as_str()
        } else {
            participant.name.as_str()
        };

        let mut body = CONFIRMATION_TEMPLATE.to_string();
        body = body.replace("{name}", name);
        body = body.replace("{destination}", &trip.destination);
        body = body.replace("{starts_at}", &format_date(trip.starts_at));
        body = body.replace("{ends_at}", &format_date(trip.ends_at));
        body = body.replace("{confirm_link}", confirm_link.as_str());

        Ok(Self {
            to: participant.email.clone(),
            subject: CONFIRMATION_SUBJECT.replace("{destination}", &trip.destination),
            body,
        })
    }
}

/// Delivers confirmation emails. Implementations must be cheap to share
/// between requests.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_confirmation(&self, email: ConfirmationEmail) -> Result<(), AppError>;
}

/// Writes outgoing mail to the log instead of delivering it.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl NotificationSender for LogMailer {
    async fn send_confirmation(&self, email: ConfirmationEmail) -> Result<(), AppError> {
        if !email.to.contains('@') {
            return Err(AppError::Mail(format!("invalid recipient {:?}", email.to)));
        }
        info!(
            from = %self.from,
            to = %email.to,
            subject = %email.subject,
            "confirmation email queued"
        );
        debug!(body = %email.body, "confirmation email body");
        Ok(())
    }
}

fn format_date(ts: NaiveDateTime) -> String {
    ts.format("%d/%m/%Y").to_string()
}
