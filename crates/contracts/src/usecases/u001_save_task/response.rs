use crate::domain::a001_task::aggregate::Task;

#[derive(Debug, Clone)]
pub struct SaveTaskResponse {
    /// Created tasks, or the single edited one
    pub saved: Vec<Task>,
    /// Whole collection after the write
    pub tasks: Vec<Task>,
    pub notice: Option<String>,
}
