//! Reusable UI components for the Ontology Browser.
//!
//! Components are free functions or small builders returning `Element<M>`,
//! generic over the message type so views decide what each interaction
//! emits.

// Allow unused exports - these are public API items that may not be used
// internally
#![allow(dead_code)]

mod empty_state;
mod pagination;
mod search_box;
mod status_badge;

pub use empty_state::{EmptyState, ErrorState, LoadingState};
pub use pagination::pagination;
pub use search_box::search_box;
pub use status_badge::{status_badge, status_display};
