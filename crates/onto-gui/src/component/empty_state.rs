//! Empty, loading, and error state components.
//!
//! Standardized feedback states for when there's no data to display, a
//! fetch is in progress, or a fetch settled into an error.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_SM, SPACING_LG, SPACING_MD, SPACING_SM, button_primary, text_muted,
};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, and optional description.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    height: Option<f32>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            height: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let title = text(self.title).size(15).style(|theme: &Theme| text::Style {
            color: Some(text_muted(theme)),
        });

        let mut content = column![self.icon, Space::new().height(SPACING_MD)].push(title);

        if let Some(description) = self.description {
            content = content.push(Space::new().height(SPACING_SM)).push(
                text(description).size(13).style(|theme: &Theme| text::Style {
                    color: Some(text_muted(theme)),
                }),
            );
        }

        let content = content.align_x(Alignment::Center);
        let container = container(content).width(Length::Fill);
        match self.height {
            Some(height) => container
                .height(Length::Fixed(height))
                .center_x(Length::Shrink)
                .center_y(Length::Shrink)
                .into(),
            None => container.center_x(Length::Shrink).into(),
        }
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading state with spinner icon and message.
pub struct LoadingState {
    title: String,
    height: Option<f32>,
}

impl LoadingState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            height: None,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let icon = container(lucide::loader().size(28)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.extended_palette().primary.base.color),
            ..Default::default()
        });

        let title = text(self.title).size(14).style(|theme: &Theme| text::Style {
            color: Some(text_muted(theme)),
        });

        let content = column![icon, Space::new().height(SPACING_SM), title].align_x(Alignment::Center);
        let container = container(content).width(Length::Fill);
        match self.height {
            Some(height) => container
                .height(Length::Fixed(height))
                .center_x(Length::Shrink)
                .center_y(Length::Shrink)
                .into(),
            None => container.center_x(Length::Shrink).into(),
        }
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Error state with message and optional retry action.
pub struct ErrorState<M> {
    title: String,
    message: Option<String>,
    retry: Option<M>,
}

impl<M: Clone> ErrorState<M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            retry: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn retry(mut self, message: M) -> Self {
        self.retry = Some(message);
        self
    }

    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let icon =
            container(lucide::circle_alert().size(32)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.extended_palette().danger.base.color),
                ..Default::default()
            });

        let title = text(self.title).size(15);

        let mut content = column![icon, Space::new().height(SPACING_SM), title]
            .align_x(Alignment::Center)
            .max_width(420.0);

        if let Some(message) = self.message {
            let body = text(message).size(12).style(|theme: &Theme| text::Style {
                color: Some(text_muted(theme)),
            });
            content = content.push(Space::new().height(SPACING_SM)).push(
                container(body)
                    .padding(SPACING_SM)
                    .style(|theme: &Theme| container::Style {
                        background: Some(theme.extended_palette().background.weak.color.into()),
                        border: Border {
                            radius: BORDER_RADIUS_SM.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }

        if let Some(retry) = self.retry {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text("Retry").size(13))
                    .on_press(retry)
                    .padding([8.0, 20.0])
                    .style(button_primary),
            );
        }

        container(content)
            .width(Length::Fill)
            .center_x(Length::Shrink)
            .padding(SPACING_LG)
            .into()
    }
}
