//! Main application module.
//!
//! Implements the Iced application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//! All state changes happen in `update`; views are pure functions; async
//! fetches run through `Task::perform` and report back as messages.

use iced::widget::container;
use iced::{Element, Subscription, Task, Theme, keyboard};

use onto_api::ApiClient;

use crate::handler::{BrowserHandler, MessageHandler, browser};
use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;
use crate::view::view_browser;

/// Main application struct: the root of all state plus the Elm-architecture
/// methods wired up in `main`.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Create the application and kick off the taxonomy list fetch.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let config = settings.api_config();
        tracing::info!(base_url = config.base_url(), "using catalog API");

        let client = ApiClient::new(&config).expect("failed to initialize HTTP client");

        let mut state = AppState::new(client, settings);
        let startup = browser::ensure_taxonomies(&mut state);
        (Self { state }, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browser(msg) => BrowserHandler.handle(&mut self.state, msg),

            Message::TaxonomiesLoaded(key, result) => {
                browser::taxonomies_loaded(&mut self.state, key, result)
            }

            Message::TopicsLoaded(key, result) => {
                browser::topics_loaded(&mut self.state, key, result)
            }

            Message::KeyPressed(key, _modifiers) => {
                if key == keyboard::Key::Named(keyboard::key::Named::Escape) {
                    self.state.browser.clear_topic_selection();
                }
                Task::none()
            }

            Message::ToggleTheme => {
                self.state.settings.toggle_theme();
                if let Err(err) = self.state.settings.save() {
                    tracing::error!("failed to save settings: {err}");
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the view. Pure function of the current state.
    pub fn view(&self) -> Element<'_, Message> {
        container(view_browser(&self.state))
            .width(iced::Length::Fill)
            .height(iced::Length::Fill)
            .into()
    }

    /// Window title, reflecting the selected taxonomy.
    pub fn title(&self) -> String {
        match &self.state.selected_choice {
            Some(choice) => format!("{} - Ontology Browser", choice.title),
            None => "Ontology Browser".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.settings.theme()
    }

    /// Subscribe to runtime events (keyboard only; Escape clears the topic
    /// selection).
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }
}
