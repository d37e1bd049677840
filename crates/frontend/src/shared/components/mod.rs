pub mod error_banner;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;

pub use error_banner::ErrorBanner;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatAccent, StatCard};
pub use status_badge::{RecordStatusBadge, ToneBadge};
