use crate::domain::a001_task::form::{LocationCatalog, TaskDraft};
use crate::domain::a003_location::aggregate::Location;
use crate::domain::a007_task_template::aggregate::{append_inline_template, load_inline_templates, TaskTemplate};
use crate::domain::a008_checkpoint::aggregate::Checkpoint;
use crate::domain::a009_location_zone::aggregate::LocationZone;
use crate::domain::common::Repository;
use crate::shared::datetime::format_date;
use crate::shared::{IdGenerator, KeyValueStore};
use crate::usecases::common::{UseCaseMetadata, UseCaseResult};
use chrono::NaiveDateTime;

pub const SAVED_MESSAGE: &str = "Template saved successfully!";

pub struct SaveInlineTemplate;

impl UseCaseMetadata for SaveInlineTemplate {
    fn usecase_index() -> &'static str {
        "u002"
    }

    fn usecase_name() -> &'static str {
        "save_inline_template"
    }

    fn display_name() -> &'static str {
        "Save as template"
    }
}

impl SaveInlineTemplate {
    /// Append the current form to the quick templates. Returns the updated list.
    pub fn execute(store: &dyn KeyValueStore, draft: &TaskDraft, now: NaiveDateTime) -> UseCaseResult<Vec<TaskTemplate>> {
        let locations = Repository::<Location>::new(store).list()?;
        let checkpoints = Repository::<Checkpoint>::new(store).list()?;
        let zones = Repository::<LocationZone>::new(store).list()?;
        let catalog = LocationCatalog {
            locations: &locations,
            checkpoints: &checkpoints,
            zones: &zones,
        };

        let mut ids = IdGenerator::new();
        ids.observe(load_inline_templates(store)?.iter().map(|t| t.id));
        let mut template = draft.to_template(ids.next(), &catalog);
        template.created_date = Some(format_date(&now.date()));
        let templates = append_inline_template(store, template)?;
        log::info!("{}: {} inline template(s)", Self::full_name(), templates.len());
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::datetime::parse_datetime;
    use crate::shared::{EntityId, MemoryStore};

    #[test]
    fn test_templates_accumulate() {
        let store = MemoryStore::new();
        let now = parse_datetime("2025-08-09T08:00").unwrap();
        let mut draft = TaskDraft::default();
        draft.name = "Patrol".into();
        draft.set_duration(45);
        draft.select_location(crate::domain::a007_task_template::aggregate::LocationMode::Zone, Some(EntityId(1)));

        SaveInlineTemplate::execute(&store, &draft, now).unwrap();
        let all = SaveInlineTemplate::execute(&store, &draft, now).unwrap();
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
        assert_eq!(all[0].location_display, "Zone 1");
        assert_eq!(all[0].created_date.as_deref(), Some("2025-08-09"));
    }
}
