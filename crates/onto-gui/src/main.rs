//! Ontology Browser - Desktop GUI Application
//!
//! A desktop client for browsing taxonomy/topic catalogs served by the
//! read-only ontology HTTP API.
//!
//! Built with Iced using the Elm architecture (State, Message, Update, View).

// Module declarations
mod app;
mod component;
mod handler;
mod message;
mod service;
mod settings;
mod state;
mod theme;
mod util;
mod view;

use app::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Ontology Browser");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
