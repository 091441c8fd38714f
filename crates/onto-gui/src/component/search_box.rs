//! Search box component.
//!
//! A text input with a search icon and a clear button that appears once
//! text is entered.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{SPACING_XS, button_ghost, text_muted};

/// Creates a search input with a clear button.
///
/// While `enabled` is false the input accepts no edits (used when the table
/// has nothing to search yet).
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    enabled: bool,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let icon = container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
        text_color: Some(text_muted(theme)),
        ..Default::default()
    });

    let mut input = text_input(placeholder, value)
        .padding(8.0)
        .width(Length::Fixed(220.0));
    if enabled {
        input = input.on_input(on_change);
    }

    let mut content = row![icon, input]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(lucide::x().size(14))
                .on_press(on_clear)
                .padding([4.0, 8.0])
                .style(button_ghost),
        );
    }

    content.into()
}
