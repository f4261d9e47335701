//! State management for the storefront panels.
//!
//! Plain state structs holding filter, paging, expansion, zoom, and footer
//! section flags. Reviews themselves live on the application model.

mod footer_state;
mod load_state;
mod pagination;
mod review_filter;
mod review_list_state;

pub use footer_state::{FooterSection, SectionToggles, WIDE_VIEWPORT_COLUMNS, is_wide};
pub use load_state::LoadStatus;
pub use pagination::{PAGE_SIZE, clamp_page, page_count, page_range};
pub use review_filter::RatingFilter;
pub use review_list_state::{ReviewListState, ZoomState};
