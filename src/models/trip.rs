use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::parse_datetime;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub is_confirmed: bool,
    pub owner_name: String,
    pub owner_email: String,
}

impl Trip {
    pub fn new(payload: &CreateTripPayload) -> Result<Self, AppError> {
        Ok(Self {
            id: Uuid::new_v4(),
            destination: payload.destination.clone(),
            starts_at: parse_datetime("starts_at", &payload.starts_at)?,
            ends_at: parse_datetime("ends_at", &payload.ends_at)?,
            is_confirmed: false,
            owner_name: payload.owner_name.clone(),
            owner_email: payload.owner_email.clone(),
        })
    }

    /// Overwrites destination and dates. Nothing is touched unless both
    /// timestamps parse.
    pub fn apply(&mut self, payload: &UpdateTripPayload) -> Result<(), AppError> {
        let starts_at = parse_datetime("starts_at", &payload.starts_at)?;
        let ends_at = parse_datetime("ends_at", &payload.ends_at)?;
        self.destination = payload.destination.clone();
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripPayload {
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
    #[serde(default)]
    pub emails_to_invite: Vec<String>,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTripPayload {
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCreated {
    pub trip_id: Uuid,
}
