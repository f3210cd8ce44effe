use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::DbPool,
    services::{
        activities::ActivityService, links::LinkService, mailer::NotificationSender,
        participants::ParticipantService, trips::TripService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub trips: TripService,
    pub participants: ParticipantService,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, mailer: Arc<dyn NotificationSender>) -> Self {
        let participants = ParticipantService::new(db.clone(), mailer, config.public_url.clone());
        let activities = ActivityService::new(db.clone());
        let links = LinkService::new(db.clone());
        let trips = TripService::new(db.clone(), participants.clone(), activities, links);
        Self {
            config,
            db,
            trips,
            participants,
        }
    }
}
