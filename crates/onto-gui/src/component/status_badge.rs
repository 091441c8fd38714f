//! Status badge component.
//!
//! Maps topic statuses to the catalog's display labels and colors. Unknown
//! statuses fall back to a neutral badge carrying the raw value.

use iced::widget::{container, text};
use iced::{Border, Color, Element, Theme};

use onto_model::TopicStatus;

use crate::theme::{ALPHA_LIGHT, BORDER_RADIUS_FULL, GRAPE, GRAY, GREEN, RED, YELLOW};

/// Display label and color for a status.
pub fn status_display(status: &TopicStatus) -> (String, Color) {
    match status {
        TopicStatus::Active => ("Success".to_string(), GREEN),
        TopicStatus::Draft => ("Processing".to_string(), YELLOW),
        TopicStatus::Deprecated => ("Failed".to_string(), RED),
        TopicStatus::Merged => ("Merged".to_string(), GRAPE),
        TopicStatus::Other(raw) => (raw.clone(), GRAY),
    }
}

/// Pill-shaped badge for a topic status.
pub fn status_badge<'a, M: 'a>(status: &TopicStatus) -> Element<'a, M> {
    let (label, color) = status_display(status);
    let background = Color {
        a: ALPHA_LIGHT,
        ..color
    };

    container(text(label).size(12).color(color))
        .padding([4.0, 10.0])
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
