//! Views - pure functions from state to elements.
//!
//! Views never mutate state; every interaction is emitted as a
//! [`crate::message::Message`] and handled in `update`.

mod browser;
mod detail_panel;
mod toolbar;
mod topics_table;

pub use browser::view_browser;
pub use detail_panel::view_detail_panel;
pub use toolbar::view_toolbar;
pub use topics_table::view_topics_table;
