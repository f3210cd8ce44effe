use std::sync::Arc;

use sqlx::SqliteConnection;
use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        participant::{ConfirmParticipantPayload, Participant},
        require_text,
        trip::Trip,
    },
    services::{
        mailer::{ConfirmationEmail, NotificationSender},
        store,
    },
};

#[derive(Clone)]
pub struct ParticipantService {
    db: DbPool,
    mailer: Arc<dyn NotificationSender>,
    public_url: Arc<Url>,
}

impl ParticipantService {
    pub fn new(db: DbPool, mailer: Arc<dyn NotificationSender>, public_url: Url) -> Self {
        Self {
            db,
            mailer,
            public_url: Arc::new(public_url),
        }
    }

    pub async fn register_bulk(
        &self,
        conn: &mut SqliteConnection,
        emails: &[String],
        trip: &Trip,
    ) -> Result<Vec<Participant>, AppError> {
        let mut created = Vec::with_capacity(emails.len());
        // Every entry becomes a participant, blank or duplicate ones included;
        // only single invites are validated.
        for email in emails {
            let participant = Participant::new(trip.id, email.trim());
            store::insert_participant(&mut *conn, &participant).await?;
            created.push(participant);
        }
        Ok(created)
    }

    pub async fn register_single(
        &self,
        email: &str,
        name: Option<&str>,
        trip: &Trip,
    ) -> Result<Participant, AppError> {
        let mut participant = Participant::new(trip.id, require_text("email", email)?);
        if let Some(name) = name {
            participant.name = name.trim().to_string();
        }
        store::insert_participant(&self.db, &participant).await?;
        info!(trip_id = %trip.id, participant_id = %participant.id, "participant invited");
        Ok(participant)
    }

    /// Failed deliveries are logged and skipped; returns how many went out.
    pub async fn send_confirmation_to_all(&self, trip: &Trip) -> Result<usize, AppError> {
        let participants = self.list_by_trip(trip.id).await?;
        let mut sent = 0;
        for participant in &participants {
            match self.send_confirmation_to_one(trip, participant).await {
                Ok(()) => sent += 1,
                Err(err) => {
                    warn!(participant_id = %participant.id, "confirmation email failed: {err}")
                }
            }
        }
        info!(trip_id = %trip.id, sent, total = participants.len(), "confirmation emails dispatched");
        Ok(sent)
    }

    pub async fn send_confirmation_to_one(
        &self,
        trip: &Trip,
        participant: &Participant,
    ) -> Result<(), AppError> {
        let email = ConfirmationEmail::render(trip, participant, &self.public_url)?;
        self.mailer.send_confirmation(email).await
    }

    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<Participant>, AppError> {
        store::list_participants(&self.db, trip_id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Participant, AppError> {
        store::find_participant(&self.db, id)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn confirm(
        &self,
        id: Uuid,
        payload: &ConfirmParticipantPayload,
    ) -> Result<Participant, AppError> {
        let mut participant = self.get(id).await?;
        if !payload.email.trim().eq_ignore_ascii_case(&participant.email) {
            return Err(AppError::BadRequest(
                "email does not match the invitation".into(),
            ));
        }
        participant.name = require_text("name", &payload.name)?;
        participant.is_confirmed = true;
        store::save_participant(&self.db, &participant).await?;
        info!(participant_id = %participant.id, trip_id = %participant.trip_id, "participant confirmed");
        Ok(participant)
    }
}
