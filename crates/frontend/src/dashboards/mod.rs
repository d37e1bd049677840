pub mod d001_summary;

pub use d001_summary::ui::SummaryDashboard;
