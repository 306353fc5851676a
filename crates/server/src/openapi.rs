use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct TimesheetEntryDoc {
    pub id: i32,
    pub task: String,
    pub project: String,
    pub time_started: String,
    /// Seconds.
    pub duration: i64,
    /// `YYYY-MM-DD`, set by the server.
    pub date: String,
}

#[derive(ToSchema)]
pub struct NewEntryDoc {
    pub task: String,
    pub project: String,
    pub time_started: String,
    pub duration: i64,
}

#[derive(ToSchema)]
pub struct EntryPatchDoc {
    pub task: Option<String>,
    pub project: Option<String>,
    pub time_started: Option<String>,
    pub duration: Option<i64>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::timesheet::list,
        crate::routes::timesheet::create,
        crate::routes::timesheet::update,
        crate::routes::timesheet::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TimesheetEntryDoc,
            NewEntryDoc,
            EntryPatchDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "timesheet")
    )
)]
pub struct ApiDoc;
