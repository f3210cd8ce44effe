use tracing::info;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        activity::{Activity, ActivityCreated, ActivityPayload},
        trip::Trip,
    },
    services::store,
};

#[derive(Clone)]
pub struct ActivityService {
    db: DbPool,
}

impl ActivityService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn register(
        &self,
        payload: &ActivityPayload,
        trip: &Trip,
    ) -> Result<ActivityCreated, AppError> {
        let activity = Activity::new(trip.id, payload)?;
        store::insert_activity(&self.db, &activity).await?;
        info!(trip_id = %trip.id, activity_id = %activity.id, "activity registered");
        Ok(ActivityCreated {
            activity_id: activity.id,
        })
    }

    /// Ordered by `occurs_at`.
    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<Activity>, AppError> {
        store::list_activities(&self.db, trip_id).await
    }
}
