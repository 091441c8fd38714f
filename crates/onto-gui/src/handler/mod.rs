//! Message handler architecture.
//!
//! Handlers separate message-handling logic from the main `App` struct:
//! each handler implements [`MessageHandler`] for one message type, and
//! `App::update` dispatches to it. Handlers mutate `AppState` directly and
//! return a `Task` for any async follow-up work, which keeps them callable
//! (and testable) without an Iced runtime.

pub mod browser;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use browser::BrowserHandler;

/// Trait for handling messages in the Iced architecture.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task (`Task::none()` when the work is complete).
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
