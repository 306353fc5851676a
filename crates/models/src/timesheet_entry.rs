use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const TASK_MAX_LEN: usize = 200;
pub const PROJECT_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timesheet_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub task: String,
    pub project: String,
    pub time_started: String,
    /// Seconds.
    pub duration: i64,
    /// `YYYY-MM-DD`, UTC day of creation.
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields a client supplies when logging work. Anything else in the body
/// (an `id` or `date`, say) is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewEntry {
    pub task: String,
    pub project: String,
    pub time_started: String,
    pub duration: i64,
}

/// Partial replacement; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub time_started: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.project.is_none() && self.time_started.is_none() && self.duration.is_none()
    }
}

fn validate_text(field: &str, value: &str, max: usize) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > max {
        return Err(errors::ModelError::Validation(format!("{field} longer than {max} characters")));
    }
    Ok(())
}

pub fn validate_task(task: &str) -> Result<(), errors::ModelError> {
    validate_text("task", task, TASK_MAX_LEN)
}

pub fn validate_project(project: &str) -> Result<(), errors::ModelError> {
    validate_text("project", project, PROJECT_MAX_LEN)
}

impl NewEntry {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_task(&self.task)?;
        validate_project(&self.project)
    }
}

impl EntryPatch {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if let Some(t) = &self.task { validate_task(t)?; }
        if let Some(p) = &self.project { validate_project(p)?; }
        Ok(())
    }

    /// Copy supplied fields onto an active model, leaving `id` and `date` alone.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(t) = self.task { am.task = Set(t); }
        if let Some(p) = self.project { am.project = Set(p); }
        if let Some(ts) = self.time_started { am.time_started = Set(ts); }
        if let Some(d) = self.duration { am.duration = Set(d); }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewEntry, date: &str) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: NotSet,
        task: Set(input.task),
        project: Set(input.project),
        time_started: Set(input.time_started),
        duration: Set(input.duration),
        date: Set(date.to_string()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// All entries stamped with `date`, in insertion order.
pub async fn list_for_date<C: ConnectionTrait>(db: &C, date: &str) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::Date.eq(date))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Apply `patch` to an existing row. Returns `None` when the row is missing.
pub async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: EntryPatch) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = find(db, id).await? else { return Ok(None) };
    apply_patch(db, existing, patch).await.map(Some)
}

/// Apply `patch` to a row already loaded on this connection.
pub async fn apply_patch<C: ConnectionTrait>(db: &C, existing: Model, patch: EntryPatch) -> Result<Model, errors::ModelError> {
    patch.validate()?;
    if patch.is_empty() {
        return Ok(existing);
    }
    let mut am: ActiveModel = existing.into();
    patch.apply(&mut am);
    Ok(am.update(db).await?)
}

/// Returns true if a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
