pub mod request;
pub mod response;

pub use request::SaveTaskRequest;
pub use response::SaveTaskResponse;

use crate::domain::a001_task::aggregate::Task;
use crate::domain::a001_task::form::{create_tasks, edit_task, LocationCatalog};
use crate::domain::a001_task::samples::sample_tasks;
use crate::domain::a002_staff::aggregate::Staff;
use crate::domain::a003_location::aggregate::Location;
use crate::domain::a008_checkpoint::aggregate::Checkpoint;
use crate::domain::a009_location_zone::aggregate::LocationZone;
use crate::domain::a010_document::aggregate::Document;
use crate::domain::common::{AggregateRoot, Repository};
use crate::shared::{IdGenerator, KeyValueStore};
use crate::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use chrono::NaiveDateTime;

pub struct SaveTask;

impl UseCaseMetadata for SaveTask {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "save_task"
    }

    fn display_name() -> &'static str {
        "Save task"
    }

    fn description() -> &'static str {
        "Create tasks (one per assignee, with recurrences) or update an existing one"
    }
}

impl SaveTask {
    pub fn execute(store: &dyn KeyValueStore, request: &SaveTaskRequest, now: NaiveDateTime) -> UseCaseResult<SaveTaskResponse> {
        let repo = Repository::<Task>::new(store);
        let mut tasks = repo.list_or_seed(|| sample_tasks(now.date()))?;
        let locations = Repository::<Location>::new(store).list()?;
        let checkpoints = Repository::<Checkpoint>::new(store).list()?;
        let zones = Repository::<LocationZone>::new(store).list()?;
        let documents = Repository::<Document>::new(store).list()?;
        let catalog = LocationCatalog {
            locations: &locations,
            checkpoints: &checkpoints,
            zones: &zones,
        };

        let draft = &request.draft;
        let (saved, notice) = match draft.editing_id {
            Some(id) => {
                let pos = tasks
                    .iter()
                    .position(|t| t.id == id)
                    .ok_or_else(|| UseCaseError::not_found(format!("{} {} not found", Task::element_name(), id)))?;
                let staff = Repository::<Staff>::new(store).list()?;
                let outcome = edit_task(&tasks[pos], draft, &catalog, &documents, &staff, now)?;
                tasks[pos] = outcome.task.clone();
                (vec![outcome.task], outcome.notice)
            }
            None => {
                let mut ids = IdGenerator::new();
                ids.observe(tasks.iter().map(|t| t.id));
                let created = create_tasks(draft, &catalog, &documents, &mut ids, now)?;
                tasks.extend(created.iter().cloned());
                (created, None)
            }
        };

        repo.save_all(&tasks)?;
        log::info!("{}: saved {} task(s)", Self::full_name(), saved.len());
        Ok(SaveTaskResponse { saved, tasks, notice })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_task::aggregate::TaskStatus;
    use crate::domain::a001_task::form::TaskDraft;
    use crate::shared::datetime::parse_datetime;
    use crate::shared::{EntityId, MemoryStore};

    fn now() -> NaiveDateTime {
        parse_datetime("2025-08-09T08:00").unwrap()
    }

    fn draft() -> TaskDraft {
        let mut d = TaskDraft::default();
        d.name = "Lobby sweep".into();
        d.set_start_time("2025-08-09T09:00".into());
        d.set_duration(30);
        d
    }

    #[test]
    fn test_create_appends_to_seeded_tasks() {
        let store = MemoryStore::new();
        let mut d = draft();
        d.toggle_assignee(EntityId(1));
        d.toggle_assignee(EntityId(2));
        let res = SaveTask::execute(&store, &SaveTaskRequest { draft: d }, now()).unwrap();
        assert_eq!(res.saved.len(), 2);
        assert_eq!(res.tasks.len(), 32);
        let stored = Repository::<Task>::new(&store).list_raw().unwrap();
        assert_eq!(stored.len(), 32);
        assert!(stored.iter().filter(|t| t.name == "Lobby sweep").all(|t| t.status == TaskStatus::Assigned));
    }

    #[test]
    fn test_edit_unknown_task_is_not_found() {
        let store = MemoryStore::new();
        let mut d = draft();
        d.editing_id = Some(EntityId(999_999));
        let err = SaveTask::execute(&store, &SaveTaskRequest { draft: d }, now()).unwrap_err();
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[test]
    fn test_missing_fields_surface_as_validation() {
        let store = MemoryStore::new();
        let mut d = draft();
        d.name.clear();
        let err = SaveTask::execute(&store, &SaveTaskRequest { draft: d }, now()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message, "Please fill in all required fields");
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let store = MemoryStore::new();
        let created = SaveTask::execute(&store, &SaveTaskRequest { draft: draft() }, now()).unwrap();
        let mut d = draft();
        d.editing_id = Some(created.saved[0].id);
        d.name = "Lobby sweep (north)".into();
        let res = SaveTask::execute(&store, &SaveTaskRequest { draft: d }, now()).unwrap();
        assert_eq!(res.tasks.len(), 31);
        assert!(res.tasks.iter().any(|t| t.name == "Lobby sweep (north)"));
        assert!(res.notice.is_none());
    }
}
