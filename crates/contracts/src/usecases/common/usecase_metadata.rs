/// Identity of a use case, for logs and UI labels
pub trait UseCaseMetadata {
    /// Index, e.g. "u001"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "save_task"
    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u001_save_task"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
