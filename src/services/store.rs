use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{activity::Activity, link::Link, participant::Participant, trip::Trip},
};

pub async fn find_trip<'e, E>(exec: E, id: Uuid) -> Result<Option<Trip>, AppError>
where
    E: SqliteExecutor<'e>,
{
    let trip = sqlx::query_as::<_, Trip>(
        "SELECT id, destination, starts_at, ends_at, is_confirmed, owner_name, owner_email FROM trips WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(exec)
    .await?;
    Ok(trip)
}

pub async fn insert_trip<'e, E>(exec: E, trip: &Trip) -> Result<(), AppError>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        r#"INSERT INTO trips (id, destination, starts_at, ends_at, is_confirmed, owner_name, owner_email)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
    )
    .bind(trip.id)
    .bind(&trip.destination)
    .bind(trip.starts_at)
    .bind(trip.ends_at)
    .bind(trip.is_confirmed)
    .bind(&trip.owner_name)
    .bind(&trip.owner_email)
    .execute(exec)
    .await?;
    Ok(())
}

pub async fn save_trip<'e, E>(exec: E, trip: &Trip) -> Result<(), AppError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"UPDATE trips
           SET destination = ?1, starts_at = ?2, ends_at = ?3, is_confirmed = ?4
           WHERE id = ?5"#,
    )
    .bind(&trip.destination)
    .bind(trip.starts_at)
    .bind(trip.ends_at)
    .bind(trip.is_confirmed)
    .bind(trip.id)
    .execute(exec)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn find_participant<'e, E>(exec: E, id: Uuid) -> Result<Option<Participant>, AppError>
where
    E: SqliteExecutor<'e>,
{
    let participant = sqlx::query_as::<_, Participant>(
        "SELECT id, trip_id, name, email, is_confirmed FROM participants WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(exec)
    .await?;
    Ok(participant)
}

pub async fn insert_participant<'e, E>(exec: E, participant: &Participant) -> Result<(), AppError>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO participants (id, trip_id, name, email, is_confirmed) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(participant.id)
    .bind(participant.trip_id)
    .bind(&participant.name)
    .bind(&participant.email)
    .bind(participant.is_confirmed)
    .execute(exec)
    .await?;
    Ok(())
}

pub async fn save_participant<'e, E>(exec: E, participant: &Participant) -> Result<(), AppError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE participants SET name = ?1, email = ?2, is_confirmed = ?3 WHERE id = ?4",
    )
    .bind(&participant.name)
    .bind(&participant.email)
    .bind(participant.is_confirmed)
    .bind(participant.id)
    .execute(exec)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn list_participants<'e, E>(exec: E, trip_id: Uuid) -> Result<Vec<Participant>, AppError>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Participant>(
        "SELECT id, trip_id, name, email, is_confirmed FROM participants WHERE trip_id = ?1 ORDER BY rowid",
    )
    .bind(trip_id)
    .fetch_all(exec)
    .await?;
    Ok(rows)
}

pub async fn insert_activity<'e, E>(exec: E, activity: &Activity) -> Result<(), AppError>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO activities (id, trip_id, title, occurs_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(activity.id)
        .bind(activity.trip_id)
        .bind(&activity.title)
        .bind(activity.occurs_at)
        .execute(exec)
        .await?;
    Ok(())
}

pub async fn list_activities<'e, E>(exec: E, trip_id: Uuid) -> Result<Vec<Activity>, AppError>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Activity>(
        "SELECT id, trip_id, title, occurs_at FROM activities WHERE trip_id = ?1 ORDER BY occurs_at, rowid",
    )
    .bind(trip_id)
    .fetch_all(exec)
    .await?;
    Ok(rows)
}

pub async fn insert_link<'e, E>(exec: E, link: &Link) -> Result<(), AppError>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO links (id, trip_id, title, url) VALUES (?1, ?2, ?3, ?4)")
        .bind(link.id)
        .bind(link.trip_id)
        .bind(&link.title)
        .bind(&link.url)
        .execute(exec)
        .await?;
    Ok(())
}

pub async fn list_links<'e, E>(exec: E, trip_id: Uuid) -> Result<Vec<Link>, AppError>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Link>(
        "SELECT id, trip_id, title, url FROM links WHERE trip_id = ?1 ORDER BY rowid",
    )
    .bind(trip_id)
    .fetch_all(exec)
    .await?;
    Ok(rows)
}
