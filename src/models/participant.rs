use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub name: String,
    pub email: String,
    pub is_confirmed: bool,
}

impl Participant {
    pub fn new(trip_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            trip_id,
            name: String::new(),
            email: email.into(),
            is_confirmed: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvitePayload {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmParticipantPayload {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantCreated {
    pub participant_id: Uuid,
}

impl From<&Participant> for ParticipantCreated {
    fn from(participant: &Participant) -> Self {
        Self {
            participant_id: participant.id,
        }
    }
}
