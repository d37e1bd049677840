//! Reference collections the task and template forms pick from.

use super::data::{load_list, Banner};
use contracts::domain::a001_task::LocationCatalog;
use contracts::domain::a002_staff::Staff;
use contracts::domain::a003_location::Location;
use contracts::domain::a006_task_category::{TaskCategory, TaskSubcategory};
use contracts::domain::a007_task_template::LocationMode;
use contracts::domain::a008_checkpoint::Checkpoint;
use contracts::domain::a009_location_zone::LocationZone;
use contracts::domain::a010_document::Document;
use contracts::domain::common::AggregateRoot;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub staff: Vec<Staff>,
    pub locations: Vec<Location>,
    pub checkpoints: Vec<Checkpoint>,
    pub zones: Vec<LocationZone>,
    pub categories: Vec<TaskCategory>,
    pub subcategories: Vec<TaskSubcategory>,
    pub documents: Vec<Document>,
}

fn active<T: AggregateRoot>(items: Vec<T>, is_active: impl Fn(&T) -> bool) -> Vec<T> {
    items.into_iter().filter(|x| is_active(x)).collect()
}

impl Lookups {
    /// Active records of every collection; load failures go to `banner`.
    pub fn load(banner: Banner) -> Self {
        Self {
            staff: active(load_list(banner), Staff::is_active),
            locations: active(load_list(banner), |l: &Location| l.status.is_active()),
            checkpoints: active(load_list(banner), |c: &Checkpoint| c.status.is_active()),
            zones: active(load_list(banner), |z: &LocationZone| z.status.is_active()),
            categories: active(load_list(banner), |c: &TaskCategory| c.status.is_active()),
            subcategories: load_list(banner),
            documents: active(load_list(banner), |d: &Document| d.status.is_active()),
        }
    }

    pub fn catalog(&self) -> LocationCatalog<'_> {
        LocationCatalog {
            locations: &self.locations,
            checkpoints: &self.checkpoints,
            zones: &self.zones,
        }
    }

    /// Options of the location picker for the chosen mode as (id, label).
    pub fn location_options(&self, mode: LocationMode) -> Vec<(String, String)> {
        match mode {
            LocationMode::Poi => self.locations.iter().map(|l| (l.id.to_string(), l.name.clone())).collect(),
            LocationMode::Checkpoint => self
                .checkpoints
                .iter()
                .map(|c| (c.id.to_string(), c.label(&self.locations)))
                .collect(),
            LocationMode::Zone => self.zones.iter().map(|z| (z.id.to_string(), z.name.clone())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_options_carry_poi_names() {
        let lookups = Lookups {
            locations: Location::seed(),
            checkpoints: Checkpoint::seed(),
            ..Default::default()
        };
        let options = lookups.location_options(LocationMode::Checkpoint);
        assert_eq!(options[0].0, "1");
        assert_eq!(options[0].1, "North Wing Routine: Building A - Floor 1, Building A - Floor 2");
        assert!(lookups.location_options(LocationMode::Zone).is_empty());
    }
}
