mod week;

pub use week::ScheduleWeek;
