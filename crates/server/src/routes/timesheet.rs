use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::timesheet::{EntryPatch, NewEntry, TimesheetEntry};
use tracing::debug;

use crate::{errors::JsonApiError, state::ServerState};

pub const DELETED_MESSAGE: &str = "Timesheet entry deleted successfully!";

/// An id that is not an `i32` can never name a stored entry.
fn entry_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    path.map(|Path(id)| id).map_err(|e| {
        debug!(rejection = %e.body_text(), "entry id not parseable");
        JsonApiError::not_found()
    })
}

#[utoipa::path(
    get, path = "/timesheet/daily", tag = "timesheet",
    responses(
        (status = 200, description = "Entries created today", body = [crate::openapi::TimesheetEntryDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<TimesheetEntry>>, JsonApiError> {
    let entries = state.timesheets.list_today().await?;
    Ok(Json(entries))
}

#[utoipa::path(
    post, path = "/timesheet/daily", tag = "timesheet",
    request_body = crate::openapi::NewEntryDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TimesheetEntryDoc),
        (status = 400, description = "Body missing or invalid", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<NewEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<TimesheetEntry>), JsonApiError> {
    let Json(input) = body.map_err(|e| {
        debug!(rejection = %e.body_text(), "create body rejected");
        JsonApiError::bad_request(e.body_text())
    })?;
    let created = state.timesheets.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/timesheet/daily/{id}", tag = "timesheet",
    params(("id" = i32, Path, description = "Entry ID")),
    request_body = crate::openapi::EntryPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TimesheetEntryDoc),
        (status = 400, description = "Body missing or invalid", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<EntryPatch>, JsonRejection>,
) -> Result<Json<TimesheetEntry>, JsonApiError> {
    let id = entry_id(path)?;
    // a bad body only matters once the entry is known to exist
    let patch = match body {
        Ok(Json(patch)) => Some(patch),
        Err(e) => {
            debug!(id, rejection = %e.body_text(), "update body rejected");
            None
        }
    };
    let updated = state.timesheets.update(id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/timesheet/daily/{id}", tag = "timesheet",
    params(("id" = i32, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let id = entry_id(path)?;
    state.timesheets.delete(id).await?;
    Ok(Json(Message::new(DELETED_MESSAGE)))
}
