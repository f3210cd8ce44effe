use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{parse_datetime, require_text};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub occurs_at: NaiveDateTime,
}

impl Activity {
    pub fn new(trip_id: Uuid, payload: &ActivityPayload) -> Result<Self, AppError> {
        Ok(Self {
            id: Uuid::new_v4(),
            trip_id,
            title: require_text("title", &payload.title)?,
            occurs_at: parse_datetime("occurs_at", &payload.occurs_at)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityPayload {
    pub title: String,
    pub occurs_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCreated {
    pub activity_id: Uuid,
}
