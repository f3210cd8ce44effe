use tracing::info;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        link::{Link, LinkCreated, LinkPayload},
        trip::Trip,
    },
    services::store,
};

#[derive(Clone)]
pub struct LinkService {
    db: DbPool,
}

impl LinkService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn register(&self, payload: &LinkPayload, trip: &Trip) -> Result<LinkCreated, AppError> {
        let link = Link::new(trip.id, payload)?;
        store::insert_link(&self.db, &link).await?;
        info!(trip_id = %trip.id, link_id = %link.id, "link registered");
        Ok(LinkCreated { link_id: link.id })
    }

    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<Link>, AppError> {
        store::list_links(&self.db, trip_id).await
    }
}
