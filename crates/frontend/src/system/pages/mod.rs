pub mod login;
pub mod settings;
pub mod task_settings;
