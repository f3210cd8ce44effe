use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        activity::{Activity, ActivityCreated, ActivityPayload},
        link::{Link, LinkCreated, LinkPayload},
        participant::{InvitePayload, Participant, ParticipantCreated},
        trip::{CreateTripPayload, Trip, TripCreated, UpdateTripPayload},
    },
    services::{
        activities::ActivityService, links::LinkService, participants::ParticipantService, store,
    },
};

#[derive(Clone)]
pub struct TripService {
    db: DbPool,
    participants: ParticipantService,
    activities: ActivityService,
    links: LinkService,
}

impl TripService {
    pub fn new(
        db: DbPool,
        participants: ParticipantService,
        activities: ActivityService,
        links: LinkService,
    ) -> Self {
        Self {
            db,
            participants,
            activities,
            links,
        }
    }

    pub async fn create_trip(&self, payload: &CreateTripPayload) -> Result<TripCreated, AppError> {
        let trip = Trip::new(payload)?;

        let mut tx = self.db.begin().await?;
        store::insert_trip(&mut *tx, &trip).await?;
        let invited = self
            .participants
            .register_bulk(&mut tx, &payload.emails_to_invite, &trip)
            .await?;
        tx.commit().await?;

        info!(trip_id = %trip.id, invited = invited.len(), "trip created");
        Ok(TripCreated { trip_id: trip.id })
    }

    pub async fn get_trip(&self, id: Uuid) -> Result<Trip, AppError> {
        store::find_trip(&self.db, id).await?.ok_or(AppError::NotFound)
    }

    pub async fn update_trip(&self, id: Uuid, payload: &UpdateTripPayload) -> Result<Trip, AppError> {
        let mut trip = self.get_trip(id).await?;
        trip.apply(payload)?;
        store::save_trip(&self.db, &trip).await?;
        info!(trip_id = %trip.id, "trip updated");
        Ok(trip)
    }

    /// Re-confirming sends every email again.
    pub async fn confirm_trip(&self, id: Uuid) -> Result<Trip, AppError> {
        let mut trip = self.get_trip(id).await?;
        trip.is_confirmed = true;
        store::save_trip(&self.db, &trip).await?;
        info!(trip_id = %trip.id, "trip confirmed");

        if let Err(err) = self.participants.send_confirmation_to_all(&trip).await {
            warn!(trip_id = %trip.id, "sending confirmation emails failed: {err}");
        }
        Ok(trip)
    }

    pub async fn register_activity(
        &self,
        id: Uuid,
        payload: &ActivityPayload,
    ) -> Result<ActivityCreated, AppError> {
        let trip = self.get_trip(id).await?;
        self.activities.register(payload, &trip).await
    }

    pub async fn list_activities(&self, id: Uuid) -> Result<Vec<Activity>, AppError> {
        let trip = self.get_trip(id).await?;
        self.activities.list_by_trip(trip.id).await
    }

    pub async fn register_link(&self, id: Uuid, payload: &LinkPayload) -> Result<LinkCreated, AppError> {
        let trip = self.get_trip(id).await?;
        self.links.register(payload, &trip).await
    }

    pub async fn list_links(&self, id: Uuid) -> Result<Vec<Link>, AppError> {
        let trip = self.get_trip(id).await?;
        self.links.list_by_trip(trip.id).await
    }

    pub async fn invite_participant(
        &self,
        id: Uuid,
        payload: &InvitePayload,
    ) -> Result<ParticipantCreated, AppError> {
        let trip = self.get_trip(id).await?;
        let participant = self
            .participants
            .register_single(&payload.email, payload.name.as_deref(), &trip)
            .await?;

        if trip.is_confirmed {
            if let Err(err) = self
                .participants
                .send_confirmation_to_one(&trip, &participant)
                .await
            {
                warn!(participant_id = %participant.id, "confirmation email failed: {err}");
            }
        }
        Ok(ParticipantCreated::from(&participant))
    }

    pub async fn list_participants(&self, id: Uuid) -> Result<Vec<Participant>, AppError> {
        let trip = self.get_trip(id).await?;
        self.participants.list_by_trip(trip.id).await
    }
}
