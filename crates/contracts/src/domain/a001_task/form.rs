//! Create/edit form of the task page and the operations that turn a
//! submitted form into stored tasks.

use super::aggregate::{Task, TaskDocumentRef, TaskFeatures, TaskStatus};
use crate::domain::a002_staff::aggregate::{name_of as staff_name, Staff};
use crate::domain::a003_location::aggregate::Location;
use crate::domain::a006_task_category::aggregate::{TaskCategory, TaskSubcategory};
use crate::domain::a007_task_template::aggregate::{LocationMode, TaskTemplate};
use crate::domain::a008_checkpoint::aggregate::Checkpoint;
use crate::domain::a009_location_zone::aggregate::LocationZone;
use crate::domain::a010_document::aggregate::Document;
use crate::shared::datetime::{add_minutes, format_datetime, format_input, parse_datetime};
use crate::shared::{EntityId, IdGenerator, ValidationError};
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Upper bound on occurrences generated by one recurring submission.
pub const MAX_OCCURRENCES: usize = 1000;

// ============================================================================
// Recurrence
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Hourly,
    Daily,
}

impl RecurrenceKind {
    pub fn code(&self) -> &'static str {
        match self {
            RecurrenceKind::Hourly => "hourly",
            RecurrenceKind::Daily => "daily",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecurrenceKind::Hourly => "Hourly",
            RecurrenceKind::Daily => "Daily",
        }
    }

    pub fn from_code(code: &str) -> Option<RecurrenceKind> {
        match code {
            "hourly" => Some(RecurrenceKind::Hourly),
            "daily" => Some(RecurrenceKind::Daily),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    pub kind: RecurrenceKind,
    pub interval: u32,
    /// Last allowed start time
    pub until: NaiveDateTime,
}

impl Recurrence {
    /// `None` unless kind, a positive interval and an end bound are all set.
    pub fn from_form(kind: Option<RecurrenceKind>, interval: u32, until: &str) -> Option<Self> {
        let kind = kind?;
        if interval == 0 {
            return None;
        }
        let until = parse_datetime(until)?;
        Some(Self { kind, interval, until })
    }

    pub fn step(&self) -> Duration {
        match self.kind {
            RecurrenceKind::Hourly => Duration::hours(i64::from(self.interval)),
            RecurrenceKind::Daily => Duration::days(i64::from(self.interval)),
        }
    }

    /// Follow-up occurrences after the base one, shifted by whole steps
    /// while the shifted start stays at or before `until`.
    pub fn occurrences(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        let step = self.step();
        let mut out = Vec::new();
        let shift = |(s, e): (NaiveDateTime, NaiveDateTime)| {
            Some((s.checked_add_signed(step)?, e.checked_add_signed(step)?))
        };
        let mut next = shift((start, end));
        while let Some((next_start, next_end)) = next {
            if next_start > self.until {
                break;
            }
            if out.len() >= MAX_OCCURRENCES {
                log::warn!("task: recurrence truncated at {} occurrences", MAX_OCCURRENCES);
                break;
            }
            out.push((next_start, next_end));
            next = shift((next_start, next_end));
        }
        out
    }
}

// ============================================================================
// Location picker
// ============================================================================

/// Everything the location picker can point at.
#[derive(Debug, Clone, Copy)]
pub struct LocationCatalog<'a> {
    pub locations: &'a [Location],
    pub checkpoints: &'a [Checkpoint],
    pub zones: &'a [LocationZone],
}

impl<'a> LocationCatalog<'a> {
    /// POI name, "Checkpoint: loc1, loc2", or zone name.
    pub fn label(&self, mode: LocationMode, id: EntityId) -> Option<String> {
        match mode {
            LocationMode::Poi => self.locations.iter().find(|l| l.id == id).map(|l| l.name.clone()),
            LocationMode::Checkpoint => self
                .checkpoints
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.label(self.locations)),
            LocationMode::Zone => self.zones.iter().find(|z| z.id == id).map(|z| z.name.clone()),
        }
    }

    /// Reverse lookup of a stored label.
    pub fn find_label(&self, label: &str) -> Option<(LocationMode, EntityId)> {
        if label.is_empty() {
            return None;
        }
        if let Some(l) = self.locations.iter().find(|l| l.name == label) {
            return Some((LocationMode::Poi, l.id));
        }
        if let Some(c) = self
            .checkpoints
            .iter()
            .find(|c| label.starts_with(&format!("{}:", c.name)))
        {
            return Some((LocationMode::Checkpoint, c.id));
        }
        self.zones
            .iter()
            .find(|z| z.name == label)
            .map(|z| (LocationMode::Zone, z.id))
    }
}

// ============================================================================
// Draft
// ============================================================================

/// State of the task form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub editing_id: Option<EntityId>,
    pub name: String,
    pub category_id: Option<EntityId>,
    pub category_label: String,
    pub subcategory_id: Option<EntityId>,
    pub subcategory_label: String,
    /// Raw `datetime-local` value
    pub start_time: String,
    pub duration: u32,
    pub end_time: String,
    pub location_mode: LocationMode,
    pub location_id: Option<EntityId>,
    /// Label kept from an edited task whose location no longer resolves
    pub location_label: String,
    pub features: TaskFeatures,
    pub document_id: Option<EntityId>,
    pub assignees: Vec<EntityId>,
    pub recurrence_kind: Option<RecurrenceKind>,
    pub recurrence_interval: u32,
    pub recurrence_until: String,
}

impl TaskDraft {
    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Prefill from a stored task. The single assignee of an edited task is
    /// the first stored one.
    pub fn from_task(
        task: &Task,
        categories: &[TaskCategory],
        subcategories: &[TaskSubcategory],
        catalog: &LocationCatalog<'_>,
    ) -> Self {
        let category = categories.iter().find(|c| c.name == task.category);
        let subcategory = category.and_then(|c| {
            subcategories
                .iter()
                .find(|s| s.category_id == c.id && s.name == task.subcategory)
        });
        let (location_mode, location_id) = match catalog.find_label(&task.location) {
            Some((mode, id)) => (mode, Some(id)),
            None => (LocationMode::Poi, None),
        };
        Self {
            editing_id: Some(task.id),
            name: task.name.clone(),
            category_id: category.map(|c| c.id),
            category_label: task.category.clone(),
            subcategory_id: subcategory.map(|s| s.id),
            subcategory_label: task.subcategory.clone(),
            start_time: format_input(&task.start_time),
            duration: task.duration,
            end_time: format_input(&task.end_time),
            location_mode,
            location_id,
            location_label: task.location.clone(),
            features: task.features,
            document_id: task.document.as_ref().map(|d| d.id),
            assignees: task.assigned_staff.first().copied().into_iter().collect(),
            recurrence_kind: None,
            recurrence_interval: 0,
            recurrence_until: String::new(),
        }
    }

    /// End time follows start time plus duration whenever both are usable.
    pub fn recompute_end_time(&mut self) {
        if self.duration == 0 {
            return;
        }
        if let Some(start) = parse_datetime(&self.start_time) {
            self.end_time = format_input(&add_minutes(start, self.duration));
        }
    }

    pub fn set_start_time(&mut self, value: String) {
        self.start_time = value;
        self.recompute_end_time();
    }

    pub fn set_duration(&mut self, minutes: u32) {
        self.duration = minutes;
        self.recompute_end_time();
    }

    pub fn select_category(&mut self, id: Option<EntityId>, label: String) {
        self.category_id = id;
        self.category_label = label;
        self.subcategory_id = None;
        self.subcategory_label.clear();
    }

    /// Picking a subcategory also names the task after it.
    pub fn select_subcategory(&mut self, id: Option<EntityId>, label: String) {
        self.subcategory_id = id;
        if id.is_some() {
            self.name = label.clone();
        }
        self.subcategory_label = label;
    }

    pub fn select_location(&mut self, mode: LocationMode, id: Option<EntityId>) {
        self.location_mode = mode;
        self.location_id = id;
        self.location_label.clear();
    }

    pub fn toggle_assignee(&mut self, staff_id: EntityId) {
        if self.is_edit_mode() {
            self.assignees = vec![staff_id];
        } else if let Some(pos) = self.assignees.iter().position(|id| *id == staff_id) {
            self.assignees.remove(pos);
        } else {
            self.assignees.push(staff_id);
        }
    }

    pub fn clear_assignees(&mut self) {
        self.assignees.clear();
    }

    /// Fill everything except the start time and the assignees.
    pub fn apply_template(&mut self, template: &TaskTemplate, catalog: &LocationCatalog<'_>) {
        self.category_id = template.category_id;
        self.category_label = template.category_label.clone();
        self.subcategory_id = template.subcategory_id;
        self.subcategory_label = template.subcategory_label.clone();
        self.name = if template.subcategory_label.is_empty() {
            template.name.clone()
        } else {
            template.subcategory_label.clone()
        };
        self.duration = template.duration;
        self.location_mode = template.mode;
        self.location_id = match template.mode {
            LocationMode::Checkpoint => catalog
                .checkpoints
                .iter()
                .find(|cp| !template.location_display.is_empty() && template.location_display.starts_with(&cp.name))
                .map(|cp| cp.id)
                .or_else(|| template.location_id()),
            _ => template.location_id(),
        };
        self.location_label.clear();
        self.recompute_end_time();
    }

    /// Snapshot of the form as a reusable template.
    pub fn to_template(&self, id: EntityId, catalog: &LocationCatalog<'_>) -> TaskTemplate {
        TaskTemplate {
            id,
            name: self.name.clone(),
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            category_label: self.category_label.clone(),
            subcategory_label: self.subcategory_label.clone(),
            duration: self.duration,
            location_display: self.resolve_location(catalog),
            location_value: self.location_id.map(|id| id.to_string()).unwrap_or_default(),
            mode: self.location_mode,
            created_date: None,
        }
    }

    pub fn resolve_location(&self, catalog: &LocationCatalog<'_>) -> String {
        self.location_id
            .and_then(|id| catalog.label(self.location_mode, id))
            .unwrap_or_else(|| self.location_label.clone())
    }

    /// Name, start and end are required.
    pub fn validate(&self) -> Result<(NaiveDateTime, NaiveDateTime), ValidationError> {
        if self.name.trim().is_empty() || self.start_time.trim().is_empty() || self.end_time.trim().is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        let start = parse_datetime(&self.start_time).ok_or_else(|| ValidationError::InvalidDate(self.start_time.clone()))?;
        let end = parse_datetime(&self.end_time).ok_or_else(|| ValidationError::InvalidDate(self.end_time.clone()))?;
        Ok((start, end))
    }

    /// `assigned` when anyone is assigned, else `open-queued`.
    pub fn derived_status(&self) -> TaskStatus {
        if self.assignees.is_empty() {
            TaskStatus::OpenQueued
        } else {
            TaskStatus::Assigned
        }
    }

    fn document_ref(&self, documents: &[Document]) -> Option<TaskDocumentRef> {
        let id = self.document_id?;
        documents.iter().find(|d| d.id == id).map(|d| TaskDocumentRef {
            id: d.id,
            filename: d.filename.clone(),
            url: d.url.clone(),
            category: d.category_name.clone(),
        })
    }

    fn build(&self, id: EntityId, start: NaiveDateTime, end: NaiveDateTime, location: &str) -> Task {
        Task {
            id,
            name: self.name.trim().to_string(),
            category: self.category_label.clone(),
            subcategory: self.subcategory_label.clone(),
            start_time: start,
            end_time: end,
            duration: self.duration,
            location: location.to_string(),
            status: self.derived_status(),
            assigned_staff: self.assignees.clone(),
            features: self.features,
            document: None,
            created_at: None,
            completed_at: None,
            is_overdue: false,
        }
    }
}

// ============================================================================
// Submission
// ============================================================================

/// New tasks from the form: one per assignee (each `assigned`), or a
/// single `open-queued` task, each followed by its recurrences.
pub fn create_tasks(
    draft: &TaskDraft,
    catalog: &LocationCatalog<'_>,
    documents: &[Document],
    ids: &mut IdGenerator,
    now: NaiveDateTime,
) -> Result<Vec<Task>, ValidationError> {
    let (start, end) = draft.validate()?;
    let location = draft.resolve_location(catalog);
    let document = draft.document_ref(documents);
    let created_at = format_datetime(&now);

    let mut bases = Vec::new();
    if draft.assignees.is_empty() {
        bases.push(draft.build(ids.next(), start, end, &location));
    } else {
        for staff_id in &draft.assignees {
            let mut task = draft.build(ids.next(), start, end, &location);
            task.assigned_staff = vec![*staff_id];
            task.status = TaskStatus::Assigned;
            bases.push(task);
        }
    }

    let recurrence = Recurrence::from_form(draft.recurrence_kind, draft.recurrence_interval, &draft.recurrence_until);
    let mut out = Vec::new();
    for mut base in bases {
        base.document = document.clone();
        base.created_at = Some(created_at.clone());
        let follow_ups = recurrence
            .map(|r| r.occurrences(base.start_time, base.end_time))
            .unwrap_or_default();
        out.push(base.clone());
        for (s, e) in follow_ups {
            let mut next = base.clone();
            next.id = ids.next();
            next.start_time = s;
            next.end_time = e;
            out.push(next);
        }
    }
    log::info!("task: created {} task(s)", out.len());
    Ok(out)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub task: Task,
    /// Shown to the user when an in-progress task was handed over
    pub notice: Option<String>,
}

/// Apply the form to an existing task. Id, creation time and fields the
/// form does not carry survive; status follows the assignee.
pub fn edit_task(
    original: &Task,
    draft: &TaskDraft,
    catalog: &LocationCatalog<'_>,
    documents: &[Document],
    staff: &[Staff],
    now: NaiveDateTime,
) -> Result<EditOutcome, ValidationError> {
    let (mut start, mut end) = draft.validate()?;
    let new_assignee = draft.assignees.first().copied();
    let old_assignee = original.assigned_staff.first().copied();

    let mut notice = None;
    if original.status == TaskStatus::InProgress && old_assignee != new_assignee {
        start = now.with_nanosecond(0).unwrap_or(now);
        if draft.duration > 0 {
            end = add_minutes(start, draft.duration);
        }
        let label = |id: Option<EntityId>| {
            match id {
                Some(id) => staff_name(staff, id).unwrap_or_else(|| "Unknown".to_string()),
                None => "Unassigned".to_string(),
            }
        };
        notice = Some(format!(
            "Task reassigned from {} to {}. Start time has been updated to now due to in-progress status.",
            label(old_assignee),
            label(new_assignee)
        ));
        log::info!("task {}: reassigned while in progress, restarted at {}", original.id, start);
    }

    let mut task = draft.build(original.id, start, end, &draft.resolve_location(catalog));
    task.assigned_staff = new_assignee.into_iter().collect();
    task.status = draft.derived_status();
    task.document = draft.document_ref(documents).or_else(|| original.document.clone());
    task.created_at = original.created_at.clone();
    task.completed_at = original.completed_at.clone();
    task.is_overdue = original.is_overdue;
    Ok(EditOutcome { task, notice })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateRoot;

    fn dt(s: &str) -> NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    struct Fixture {
        locations: Vec<Location>,
        checkpoints: Vec<Checkpoint>,
        zones: Vec<LocationZone>,
        documents: Vec<Document>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                locations: Location::seed(),
                checkpoints: Checkpoint::seed(),
                zones: LocationZone::seed(),
                documents: Document::seed(),
            }
        }

        fn catalog(&self) -> LocationCatalog<'_> {
            LocationCatalog {
                locations: &self.locations,
                checkpoints: &self.checkpoints,
                zones: &self.zones,
            }
        }
    }

    fn draft() -> TaskDraft {
        let mut d = TaskDraft::default();
        d.select_category(Some(EntityId(2)), "Security".into());
        d.select_subcategory(Some(EntityId(3)), "Patrol".into());
        d.set_start_time("2025-08-09T09:00".into());
        d.set_duration(90);
        d
    }

    #[test]
    fn test_end_time_follows_start_and_duration() {
        let d = draft();
        assert_eq!(d.name, "Patrol");
        assert_eq!(d.end_time, "2025-08-09T10:30");
    }

    #[test]
    fn test_required_fields() {
        let mut d = draft();
        d.name = "  ".into();
        assert_eq!(d.validate().unwrap_err(), ValidationError::RequiredFields);
        let mut d = draft();
        d.end_time.clear();
        assert_eq!(d.validate().unwrap_err().to_string(), "Please fill in all required fields");
    }

    #[test]
    fn test_location_labels() {
        let fx = Fixture::new();
        let cat = fx.catalog();
        assert_eq!(cat.label(LocationMode::Poi, EntityId(3)).as_deref(), Some("Building B - Floor 1"));
        assert_eq!(
            cat.label(LocationMode::Checkpoint, EntityId(1)).as_deref(),
            Some("North Wing Routine: Building A - Floor 1, Building A - Floor 2")
        );
        assert_eq!(cat.label(LocationMode::Zone, EntityId(2)).as_deref(), Some("Zone 2"));
        assert_eq!(
            cat.find_label("South Wing Patrol: Building B - Floor 1"),
            Some((LocationMode::Checkpoint, EntityId(2)))
        );
    }

    #[test]
    fn test_one_task_per_assignee() {
        let fx = Fixture::new();
        let mut d = draft();
        d.toggle_assignee(EntityId(1));
        d.toggle_assignee(EntityId(2));
        d.select_location(LocationMode::Poi, Some(EntityId(1)));
        d.document_id = Some(EntityId(1));
        let mut ids = IdGenerator::new();
        let tasks = create_tasks(&d, &fx.catalog(), &fx.documents, &mut ids, dt("2025-08-09T08:00")).unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Assigned));
        assert_eq!(tasks[0].assigned_staff, vec![EntityId(1)]);
        assert_eq!(tasks[1].assigned_staff, vec![EntityId(2)]);
        assert_ne!(tasks[0].id, tasks[1].id);
        assert_eq!(tasks[0].location, "Building A - Floor 1");
        assert_eq!(tasks[0].document.as_ref().map(|d| d.filename.as_str()), Some("cleaning-specs.pdf"));
        assert_eq!(tasks[0].created_at.as_deref(), Some("2025-08-09T08:00:00"));
    }

    #[test]
    fn test_unassigned_task_is_open_queued() {
        let fx = Fixture::new();
        let mut ids = IdGenerator::new();
        let tasks = create_tasks(&draft(), &fx.catalog(), &[], &mut ids, dt("2025-08-09T08:00")).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::OpenQueued);
        assert!(tasks[0].assigned_staff.is_empty());
    }

    #[test]
    fn test_daily_recurrence_until_bound_inclusive() {
        let fx = Fixture::new();
        let mut d = draft();
        d.recurrence_kind = Some(RecurrenceKind::Daily);
        d.recurrence_interval = 2;
        d.recurrence_until = "2025-08-13T09:00".into();
        let mut ids = IdGenerator::new();
        let tasks = create_tasks(&d, &fx.catalog(), &[], &mut ids, dt("2025-08-09T08:00")).unwrap();
        let starts: Vec<String> = tasks.iter().map(|t| format_input(&t.start_time)).collect();
        assert_eq!(starts, vec!["2025-08-09T09:00", "2025-08-11T09:00", "2025-08-13T09:00"]);
        assert_eq!(format_input(&tasks[2].end_time), "2025-08-13T10:30");
    }

    #[test]
    fn test_recurrence_applies_to_each_assignee() {
        let fx = Fixture::new();
        let mut d = draft();
        d.toggle_assignee(EntityId(1));
        d.toggle_assignee(EntityId(3));
        d.recurrence_kind = Some(RecurrenceKind::Hourly);
        d.recurrence_interval = 4;
        d.recurrence_until = "2025-08-09T18:00".into();
        let mut ids = IdGenerator::new();
        let tasks = create_tasks(&d, &fx.catalog(), &[], &mut ids, dt("2025-08-09T08:00")).unwrap();
        // 09:00, 13:00, 17:00 for each of the two assignees
        assert_eq!(tasks.len(), 6);
        let mut unique: Vec<EntityId> = tasks.iter().map(|t| t.id).collect();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_incomplete_recurrence_is_ignored() {
        assert!(Recurrence::from_form(Some(RecurrenceKind::Daily), 0, "2025-08-20T00:00").is_none());
        assert!(Recurrence::from_form(Some(RecurrenceKind::Daily), 1, "").is_none());
        assert!(Recurrence::from_form(None, 1, "2025-08-20T00:00").is_none());
    }

    #[test]
    fn test_huge_recurrence_interval_stops_without_panic() {
        let rule = Recurrence::from_form(Some(RecurrenceKind::Daily), 100_000_000, "2025-08-20T00:00").unwrap();
        assert!(rule.occurrences(dt("2025-08-09T09:00"), dt("2025-08-09T10:30")).is_empty());

        let rule = Recurrence::from_form(Some(RecurrenceKind::Daily), 100_000_000, "9999-12-31T00:00").unwrap();
        assert!(rule.occurrences(dt("2025-08-09T09:00"), dt("2025-08-09T10:30")).is_empty());
    }

    #[test]
    fn test_reassigning_in_progress_task_restarts_it() {
        let fx = Fixture::new();
        let staff = Staff::seed();
        let mut ids = IdGenerator::new();
        let mut d = draft();
        d.toggle_assignee(EntityId(3));
        let mut original = create_tasks(&d, &fx.catalog(), &[], &mut ids, dt("2025-08-09T08:00"))
            .unwrap()
            .remove(0);
        original.status = TaskStatus::InProgress;

        let mut edit = TaskDraft::from_task(&original, &TaskCategory::seed(), &TaskSubcategory::seed(), &fx.catalog());
        assert_eq!(edit.assignees, vec![EntityId(3)]);
        edit.toggle_assignee(EntityId(1));
        assert_eq!(edit.assignees, vec![EntityId(1)]);

        let now = dt("2025-08-09T09:20:00");
        let outcome = edit_task(&original, &edit, &fx.catalog(), &[], &staff, now).unwrap();
        assert_eq!(outcome.task.id, original.id);
        assert_eq!(outcome.task.created_at, original.created_at);
        assert_eq!(outcome.task.start_time, now);
        assert_eq!(outcome.task.end_time, dt("2025-08-09T10:50:00"));
        assert_eq!(outcome.task.status, TaskStatus::Assigned);
        assert_eq!(
            outcome.notice.as_deref(),
            Some("Task reassigned from Mike Johnson to John Smith. Start time has been updated to now due to in-progress status.")
        );
    }

    #[test]
    fn test_reassigning_from_missing_staff_says_unknown() {
        let fx = Fixture::new();
        let staff = Staff::seed();
        let mut ids = IdGenerator::new();
        let mut original = create_tasks(&draft(), &fx.catalog(), &[], &mut ids, dt("2025-08-09T08:00"))
            .unwrap()
            .remove(0);
        original.assigned_staff = vec![EntityId(999)];
        original.status = TaskStatus::InProgress;

        let mut edit = TaskDraft::from_task(&original, &TaskCategory::seed(), &TaskSubcategory::seed(), &fx.catalog());
        edit.assignees = vec![EntityId(1)];
        let outcome = edit_task(&original, &edit, &fx.catalog(), &[], &staff, dt("2025-08-09T09:20")).unwrap();
        assert_eq!(
            outcome.notice.as_deref(),
            Some("Task reassigned from Unknown to John Smith. Start time has been updated to now due to in-progress status.")
        );

        edit.assignees.clear();
        let outcome = edit_task(&original, &edit, &fx.catalog(), &[], &staff, dt("2025-08-09T09:20")).unwrap();
        assert_eq!(
            outcome.notice.as_deref(),
            Some("Task reassigned from Unknown to Unassigned. Start time has been updated to now due to in-progress status.")
        );
    }

    #[test]
    fn test_plain_edit_keeps_times() {
        let fx = Fixture::new();
        let mut ids = IdGenerator::new();
        let original = create_tasks(&draft(), &fx.catalog(), &[], &mut ids, dt("2025-08-09T08:00"))
            .unwrap()
            .remove(0);
        let mut edit = TaskDraft::from_task(&original, &TaskCategory::seed(), &TaskSubcategory::seed(), &fx.catalog());
        edit.name = "Patrol (extended)".into();
        let outcome = edit_task(&original, &edit, &fx.catalog(), &[], &[], dt("2025-08-09T09:20")).unwrap();
        assert!(outcome.notice.is_none());
        assert_eq!(outcome.task.start_time, original.start_time);
        assert_eq!(outcome.task.name, "Patrol (extended)");
    }

    #[test]
    fn test_template_round_trip_skips_start_and_assignees() {
        let fx = Fixture::new();
        let mut source = draft();
        source.select_location(LocationMode::Checkpoint, Some(EntityId(2)));
        let template = source.to_template(EntityId(77), &fx.catalog());
        assert_eq!(template.location_display, "South Wing Patrol: Building B - Floor 1");

        let mut target = TaskDraft::default();
        target.set_start_time("2025-08-10T07:00".into());
        target.toggle_assignee(EntityId(4));
        target.apply_template(&template, &fx.catalog());
        assert_eq!(target.start_time, "2025-08-10T07:00");
        assert_eq!(target.assignees, vec![EntityId(4)]);
        assert_eq!(target.name, "Patrol");
        assert_eq!(target.duration, 90);
        assert_eq!(target.end_time, "2025-08-10T08:30");
        assert_eq!(target.location_mode, LocationMode::Checkpoint);
        assert_eq!(target.location_id, Some(EntityId(2)));
    }
}
