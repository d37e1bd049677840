use crate::domain::a001_task::form::TaskDraft;

/// Submitted task form; `draft.editing_id` selects edit over create.
#[derive(Debug, Clone)]
pub struct SaveTaskRequest {
    pub draft: TaskDraft,
}
