use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;
use uuid::Uuid;

use super::require_text;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Link {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub url: String,
}

impl Link {
    pub fn new(trip_id: Uuid, payload: &LinkPayload) -> Result<Self, AppError> {
        let url = Url::parse(payload.url.trim())
            .map_err(|err| AppError::BadRequest(format!("url is invalid: {err}")))?;
        Ok(Self {
            id: Uuid::new_v4(),
            trip_id,
            title: require_text("title", &payload.title)?,
            url: url.to_string(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkPayload {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCreated {
    pub link_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_are_rejected() {
        let err = Link::new(
            Uuid::new_v4(),
            &LinkPayload {
                title: "Booking".into(),
                url: "/hotel/123".into(),
            },
        );
        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }
}
