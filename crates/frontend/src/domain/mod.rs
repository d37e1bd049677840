pub mod a001_task;
pub mod a002_staff;
pub mod a003_location;
pub mod a004_contract;
pub mod a005_service;
pub mod a006_task_category;
pub mod a007_task_template;
pub mod a008_checkpoint;
pub mod a009_location_zone;
pub mod a010_document;
pub mod a011_shift;
pub mod a012_message;
